use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

use super::App;
use super::components::max_scroll;
use crate::session::{SessionEvent, SessionOutcome};

const SCROLL_STEP: u16 = 3;

impl<'a> App<'a> {
	/// Handle a key press. Returns the outcome once the user quits.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<SessionOutcome> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc => return Some(self.session.outcome()),
			KeyCode::Char('c') if ctrl => return Some(self.session.outcome()),
			KeyCode::Enter => self.dispatch(SessionEvent::Confirm),
			KeyCode::Tab => {
				if let Some(name) = self.highlighted_suggestion().map(str::to_string) {
					self.dispatch(SessionEvent::SelectSuggestion(name));
				}
			}
			KeyCode::Up => self.move_suggestion_up(),
			KeyCode::Down => self.move_suggestion_down(),
			KeyCode::PageUp => self.scroll_output_up(),
			KeyCode::PageDown => self.scroll_output_down(),
			KeyCode::Char('g') if ctrl => self.dispatch(SessionEvent::Combine),
			KeyCode::Char('s') if ctrl => self.dispatch(SessionEvent::Download),
			KeyCode::Char('l') if ctrl => self.show_logs = !self.show_logs,
			KeyCode::Char('x') if ctrl => self.remove_focused_badge(),
			KeyCode::Left if ctrl => self.move_badge_focus(false),
			KeyCode::Right if ctrl => self.move_badge_focus(true),
			_ => {
				if self.input.input(key) {
					let query = self.input.text().to_string();
					self.dispatch(SessionEvent::QueryChanged(query));
				}
			}
		}
		None
	}

	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
		let position = Position::new(mouse.column, mouse.row);
		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => self.click(position),
			MouseEventKind::ScrollUp if self.hits.output.contains(position) => {
				self.scroll_output_up();
			}
			MouseEventKind::ScrollDown if self.hits.output.contains(position) => {
				self.scroll_output_down();
			}
			_ => {}
		}
	}

	fn click(&mut self, position: Position) {
		if let Some(name) = self.suggestion_at(position) {
			self.dispatch(SessionEvent::SelectSuggestion(name));
			return;
		}
		let closed = self
			.hits
			.badges
			.iter()
			.find(|slot| slot.closer.contains(position))
			.map(|slot| slot.name.clone());
		if let Some(name) = closed {
			self.dispatch(SessionEvent::RemoveBadge(name));
			return;
		}
		if self.hits.buttons.combine.contains(position) {
			self.dispatch(SessionEvent::Combine);
		} else if self.hits.buttons.download.contains(position) {
			self.dispatch(SessionEvent::Download);
		}
	}

	fn suggestion_at(&self, position: Position) -> Option<String> {
		let area = self.hits.suggestions;
		if !area.contains(position) {
			return None;
		}
		let row = usize::from(position.y - area.y);
		let index = self.suggestion_state.offset() + row;
		self.session.suggestions().get(index).cloned()
	}

	fn move_suggestion_up(&mut self) {
		if let Some(selected) = self.suggestion_state.selected()
			&& selected > 0
		{
			self.suggestion_state.select(Some(selected - 1));
		}
	}

	fn move_suggestion_down(&mut self) {
		if let Some(selected) = self.suggestion_state.selected()
			&& selected + 1 < self.session.suggestions().len()
		{
			self.suggestion_state.select(Some(selected + 1));
		}
	}

	fn move_badge_focus(&mut self, forward: bool) {
		let len = self.session.selection().len();
		if len == 0 {
			self.badge_focus = None;
			return;
		}
		self.badge_focus = Some(match (self.badge_focus, forward) {
			(None, true) => 0,
			(None, false) => len - 1,
			(Some(focus), true) => (focus + 1).min(len - 1),
			(Some(focus), false) => focus.saturating_sub(1),
		});
	}

	/// Remove the focused badge, or the last one when nothing has focus.
	fn remove_focused_badge(&mut self) {
		let selection = self.session.selection().as_slice();
		let target = self
			.badge_focus
			.and_then(|focus| selection.get(focus))
			.or_else(|| selection.last())
			.cloned();
		if let Some(name) = target {
			self.dispatch(SessionEvent::RemoveBadge(name));
		}
	}

	fn scroll_output_up(&mut self) {
		self.output_scroll = self.output_scroll.saturating_sub(SCROLL_STEP);
	}

	fn scroll_output_down(&mut self) {
		let limit = max_scroll(self.session.buffer().text(), self.hits.output.height);
		self.output_scroll = self.output_scroll.saturating_add(SCROLL_STEP).min(limit);
	}
}
