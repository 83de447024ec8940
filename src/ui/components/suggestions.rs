use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

use crate::ui::theme::Theme;

/// Draw the suggestion list and return the rectangle holding its rows.
pub fn render_suggestions(
	frame: &mut Frame,
	area: Rect,
	suggestions: &[String],
	state: &mut ListState,
	theme: &Theme,
) -> Rect {
	let block = Block::default()
		.borders(Borders::TOP)
		.title(format!(" Suggestions ({}) ", suggestions.len()))
		.border_style(theme.empty_style());
	let rows = block.inner(area);
	let items: Vec<ListItem> = suggestions
		.iter()
		.map(|name| ListItem::new(name.as_str()))
		.collect();
	let list = List::new(items)
		.block(block)
		.highlight_style(theme.row_highlight_style())
		.highlight_symbol("> ");
	frame.render_stateful_widget(list, area, state);
	rows
}
