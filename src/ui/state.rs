use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use throbber_widgets_tui::ThrobberState;

use super::components::{BadgeSlot, ButtonAreas};
use super::input::QueryInput;
use super::theme::Theme;
use crate::session::{CatalogState, Session, SessionEvent};

/// Where the last frame put the clickable controls.
#[derive(Debug, Clone, Default)]
pub(crate) struct HitAreas {
	pub suggestions: Rect,
	pub badges: Vec<BadgeSlot>,
	pub buttons: ButtonAreas,
	pub output: Rect,
}

pub struct App<'a> {
	pub session: Session,
	pub(crate) input: QueryInput<'a>,
	pub(crate) input_title: Option<String>,
	pub theme: Theme,
	pub(crate) suggestion_state: ListState,
	pub(crate) badge_focus: Option<usize>,
	pub(crate) output_scroll: u16,
	pub(crate) show_logs: bool,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) hits: HitAreas,
}

impl<'a> App<'a> {
	pub fn new(session: Session) -> Self {
		let input = QueryInput::new(session.query());
		let mut app = Self {
			session,
			input,
			input_title: None,
			theme: Theme::default(),
			suggestion_state: ListState::default(),
			badge_focus: None,
			output_scroll: 0,
			show_logs: false,
			throbber_state: ThrobberState::default(),
			hits: HitAreas::default(),
		};
		app.sync_view();
		app
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
		self.input.apply_theme(&theme);
	}

	pub fn set_input_title(&mut self, title: Option<String>) {
		self.input_title = title;
	}

	pub fn set_show_logs(&mut self, show: bool) {
		self.show_logs = show;
	}

	/// Forward an event to the session and bring the view back in line with it.
	pub(crate) fn dispatch(&mut self, event: SessionEvent) {
		let resets_output = matches!(event, SessionEvent::Combine);
		self.session.dispatch(event);
		if resets_output {
			self.output_scroll = 0;
		}
		self.sync_view();
	}

	/// Apply background results. Returns whether anything changed.
	pub(crate) fn pump(&mut self) -> bool {
		let changed = self.session.pump();
		if changed {
			self.sync_view();
		}
		changed
	}

	pub(crate) fn sync_view(&mut self) {
		if self.input.text() != self.session.query() {
			self.input.set_text(self.session.query());
		}
		self.ensure_suggestion_selection();
		self.ensure_badge_focus();
	}

	fn ensure_suggestion_selection(&mut self) {
		let len = self.session.suggestions().len();
		match self.suggestion_state.selected() {
			_ if len == 0 => self.suggestion_state.select(None),
			None => self.suggestion_state.select(Some(0)),
			Some(selected) if selected >= len => self.suggestion_state.select(Some(len - 1)),
			Some(_) => {}
		}
	}

	fn ensure_badge_focus(&mut self) {
		let len = self.session.selection().len();
		if let Some(focus) = self.badge_focus
			&& focus >= len
		{
			self.badge_focus = len.checked_sub(1);
		}
	}

	/// Suggestion under the keyboard highlight.
	#[must_use]
	pub fn highlighted_suggestion(&self) -> Option<&str> {
		self.suggestion_state
			.selected()
			.and_then(|index| self.session.suggestions().get(index))
			.map(String::as_str)
	}

	/// Activity label shown at the right of the input row.
	pub(crate) fn progress_status(&self) -> ProgressStatus {
		if self.session.is_combining() {
			return ProgressStatus::busy("Combining");
		}
		match self.session.catalog_state() {
			CatalogState::NotRequested => ProgressStatus::idle(String::new()),
			CatalogState::Loading => ProgressStatus::busy("Loading templates"),
			CatalogState::Ready => {
				ProgressStatus::idle(format!("{} templates", self.session.catalog().len()))
			}
			CatalogState::Unavailable => ProgressStatus {
				label: "Catalog unavailable".to_string(),
				busy: false,
				failed: true,
			},
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ProgressStatus {
	pub label: String,
	pub busy: bool,
	pub failed: bool,
}

impl ProgressStatus {
	fn idle(label: String) -> Self {
		Self {
			label,
			busy: false,
			failed: false,
		}
	}

	fn busy(label: &str) -> Self {
		Self {
			label: label.to_string(),
			busy: true,
			failed: false,
		}
	}
}
