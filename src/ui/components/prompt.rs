use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::ui::input::QueryInput;
use crate::ui::theme::Theme;

/// Argument bundle for rendering the input row.
pub struct PromptContext<'a> {
	pub input: &'a QueryInput<'a>,
	pub input_title: Option<&'a str>,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Background activity shown at the right edge of the input row.
pub struct ProgressState<'a> {
	pub label: &'a str,
	pub busy: bool,
	pub failed: bool,
	pub throbber_state: &'a ThrobberState,
}

/// Render the prompt, the query input and the activity label.
pub fn render_prompt(frame: &mut Frame, prompt: PromptContext<'_>, progress: ProgressState<'_>) {
	let PromptContext {
		input,
		input_title,
		area,
		theme,
	} = prompt;

	let title = input_title.unwrap_or("");
	let horizontal = Layout::default()
		.direction(Direction::Horizontal)
		.constraints(layout_constraints(prompt_width(title)))
		.split(area);

	if !title.is_empty() {
		let prompt_widget = Paragraph::new(format!("{title} > ")).style(theme.prompt_style());
		frame.render_widget(prompt_widget, horizontal[0]);
	}

	let input_area = horizontal[horizontal.len() - 1];
	input.render(frame, input_area);
	render_progress(frame, input_area, progress, theme);
}

fn prompt_width(title: &str) -> u16 {
	if title.is_empty() {
		0
	} else {
		title.chars().count() as u16 + 3
	}
}

fn layout_constraints(prompt_width: u16) -> Vec<Constraint> {
	if prompt_width == 0 {
		vec![Constraint::Min(1)]
	} else {
		vec![Constraint::Length(prompt_width), Constraint::Min(1)]
	}
}

fn progress_line<'a>(progress: &ProgressState<'a>, theme: &Theme) -> Line<'a> {
	let style: Style = if progress.failed {
		theme.error_style()
	} else {
		theme.empty_style()
	};
	let mut line = Line::default();
	if progress.busy {
		let spinner = Throbber::default().style(style).throbber_style(style);
		line.spans.push(spinner.to_symbol_span(progress.throbber_state));
	}
	line.spans.push(Span::styled(progress.label, style));
	line
}

fn render_progress(frame: &mut Frame, area: Rect, progress: ProgressState<'_>, theme: &Theme) {
	if area.width == 0 || area.height == 0 || progress.label.is_empty() {
		return;
	}

	let line = progress_line(&progress, theme);
	let line_width = line.width() as u16;
	let buffer = frame.buffer_mut();
	let mut start_x = if line_width >= area.width {
		area.left()
	} else {
		area.right().saturating_sub(line_width)
	};

	// Keep two columns between the typed query and the label.
	let row = area.top();
	let last_char_x = (area.left()..area.right())
		.filter(|&x| {
			buffer
				.cell((x, row))
				.is_some_and(|cell| !cell.symbol().trim().is_empty())
		})
		.last();
	if let Some(last_x) = last_char_x {
		start_x = start_x.max(last_x.saturating_add(3));
	}
	if start_x >= area.right() {
		return;
	}

	let max_width = area.right().saturating_sub(start_x).min(line_width);
	buffer.set_line(start_x, row, &line, max_width);
}
