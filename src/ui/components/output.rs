//! Combined output pane and its Combine / Download controls.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::combine::CombinedBuffer;
use crate::ui::theme::Theme;

const PLACEHOLDER: &str = "Select templates, then press Ctrl+G to combine them.";
const COMBINE_LABEL: &str = "[ Combine ^G ]";
const DOWNLOAD_LABEL: &str = "[ Download ^S ]";

pub struct OutputContext<'a> {
	pub buffer: &'a CombinedBuffer,
	pub scroll: u16,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Click targets of the two buttons below the output pane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonAreas {
	pub combine: Rect,
	pub download: Rect,
}

pub fn render_output(frame: &mut Frame, output: OutputContext<'_>) {
	let OutputContext {
		buffer,
		scroll,
		area,
		theme,
	} = output;

	let title = buffer.label().unwrap_or("Output");
	let block = Block::default()
		.borders(Borders::ALL)
		.title(format!(" {title} "))
		.title_style(theme.prompt_style())
		.border_style(theme.empty_style());

	let body = if buffer.text().is_empty() {
		Paragraph::new(PLACEHOLDER).style(theme.empty_style())
	} else if buffer.is_downloadable() {
		Paragraph::new(Text::raw(buffer.text())).scroll((scroll, 0))
	} else {
		Paragraph::new(buffer.text()).style(theme.error_style())
	};
	frame.render_widget(body.block(block), area);
}

/// Draw the button row. Download is dimmed unless there is content to save.
pub fn render_buttons(
	frame: &mut Frame,
	area: Rect,
	downloadable: bool,
	theme: &Theme,
) -> ButtonAreas {
	let combine_width = COMBINE_LABEL.width() as u16;
	let download_width = DOWNLOAD_LABEL.width() as u16;
	let combine = Rect::new(area.x, area.y, combine_width.min(area.width), area.height.min(1));
	let download_x = area.x.saturating_add(combine_width + 1);
	let download = Rect::new(
		download_x,
		area.y,
		download_width.min(area.right().saturating_sub(download_x)),
		area.height.min(1),
	);

	let line = Line::from(vec![
		Span::styled(COMBINE_LABEL, theme.button_style(true)),
		Span::raw(" "),
		Span::styled(DOWNLOAD_LABEL, theme.button_style(downloadable)),
	]);
	frame.render_widget(Paragraph::new(line), area);

	ButtonAreas { combine, download }
}

/// Largest useful scroll offset for `text` shown in a pane of `height` rows.
#[must_use]
pub fn max_scroll(text: &str, height: u16) -> u16 {
	let lines = text.lines().count() as u16;
	lines.saturating_sub(height.saturating_sub(2))
}
