//! Single-line query input backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

use super::theme::Theme;

const PLACEHOLDER: &str = "Search templates";

pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
	placeholder_style: Style,
}

impl<'a> QueryInput<'a> {
	pub fn new(initial: impl Into<String>) -> Self {
		let placeholder_style = Theme::default().empty_style();
		Self {
			textarea: Self::build(initial.into(), placeholder_style),
			placeholder_style,
		}
	}

	fn build(text: String, placeholder_style: Style) -> TextArea<'a> {
		let mut textarea = TextArea::new(vec![text]);
		textarea.set_cursor_line_style(Style::default());
		textarea.set_placeholder_text(PLACEHOLDER);
		textarea.set_placeholder_style(placeholder_style);
		textarea.move_cursor(CursorMove::End);
		textarea
	}

	/// Current query text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Replace the text, keeping the cursor at the end.
	pub fn set_text(&mut self, text: &str) {
		self.textarea = Self::build(text.to_string(), self.placeholder_style);
	}

	/// Feed a key to the editor. Returns whether the text changed.
	///
	/// Keys that would start a new line are swallowed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let newline = matches!(key.code, KeyCode::Enter)
			|| (key.modifiers.contains(KeyModifiers::CONTROL)
				&& matches!(key.code, KeyCode::Char('m' | 'j')));
		if newline {
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		self.text() != before
	}

	pub fn apply_theme(&mut self, theme: &Theme) {
		self.placeholder_style = theme.empty_style();
		self.textarea.set_placeholder_style(self.placeholder_style);
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_updates_text() {
		let mut input = QueryInput::new("");
		assert!(input.input(key(KeyCode::Char('g'))));
		assert!(input.input(key(KeyCode::Char('o'))));
		assert_eq!(input.text(), "go");
	}

	#[test]
	fn enter_never_adds_a_line() {
		let mut input = QueryInput::new("rust");
		assert!(!input.input(key(KeyCode::Enter)));
		assert!(!input.input(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL)));
		assert_eq!(input.text(), "rust");
	}

	#[test]
	fn set_text_moves_cursor_to_end() {
		let mut input = QueryInput::new("");
		input.set_text("Pyth");
		input.input(key(KeyCode::Char('o')));
		assert_eq!(input.text(), "Pytho");
	}

	#[test]
	fn backspace_on_empty_input_reports_no_change() {
		let mut input = QueryInput::new("");
		assert!(!input.input(key(KeyCode::Backspace)));
	}
}
