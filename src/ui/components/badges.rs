//! The row of selected templates, each with a `×` remove control.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::Theme;

const CLOSER: &str = "×";
const GAP: u16 = 1;

/// Screen placement of one badge and its remove control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeSlot {
	pub name: String,
	pub area: Rect,
	pub closer: Rect,
}

fn badge_label(name: &str) -> String {
	format!(" {name} {CLOSER} ")
}

/// Label for `name` clipped to `max_width` columns, keeping the closer visible.
fn fitted_label(name: &str, max_width: u16) -> String {
	let label = badge_label(name);
	if label.width() <= max_width as usize {
		return label;
	}
	// Room for the padding, the ellipsis and " × ".
	let budget = (max_width as usize).saturating_sub(5);
	let mut clipped = String::new();
	for ch in name.chars() {
		if clipped.width() + ch.to_string().width() > budget {
			break;
		}
		clipped.push(ch);
	}
	format!(" {clipped}… {CLOSER} ")
}

/// Lay badges out left to right, wrapping onto the next row of `area`.
///
/// Badges past the last row of `area` are left out; size the area with
/// [`badge_rows`] to fit them all.
#[must_use]
pub fn layout_badges(names: &[String], area: Rect) -> Vec<BadgeSlot> {
	let mut slots = Vec::new();
	if area.height == 0 || area.width == 0 {
		return slots;
	}
	let mut x = area.x;
	let mut y = area.y;
	for name in names {
		let label = fitted_label(name, area.width);
		let width = (label.width() as u16).min(area.width);
		if x > area.x && x.saturating_add(width) > area.right() {
			x = area.x;
			y = y.saturating_add(1);
		}
		if y >= area.bottom() {
			break;
		}
		// Labels end in "× ", so the closer sits two columns from the edge.
		let closer_x = x + width.saturating_sub(2);
		slots.push(BadgeSlot {
			name: name.clone(),
			area: Rect::new(x, y, width, 1),
			closer: Rect::new(closer_x, y, CLOSER.width() as u16, 1),
		});
		x = x.saturating_add(width + GAP);
	}
	slots
}

/// Rows needed to show every badge in `width` columns. Never less than one.
#[must_use]
pub fn badge_rows(names: &[String], width: u16) -> u16 {
	layout_badges(names, Rect::new(0, 0, width, u16::MAX))
		.last()
		.map_or(1, |slot| slot.area.y + 1)
}

/// Draw the badges and return where each one landed.
pub fn render_badges(
	frame: &mut Frame,
	area: Rect,
	names: &[String],
	focus: Option<usize>,
	theme: &Theme,
) -> Vec<BadgeSlot> {
	if names.is_empty() {
		let empty = Paragraph::new("No templates selected").style(theme.empty_style());
		frame.render_widget(empty, area);
		return Vec::new();
	}

	let slots = layout_badges(names, area);
	for (index, slot) in slots.iter().enumerate() {
		let style = if focus == Some(index) {
			theme.badge_focus_style()
		} else {
			theme.badge_style()
		};
		let label = Span::styled(fitted_label(&slot.name, area.width), style);
		frame.render_widget(Paragraph::new(Line::from(label)), slot.area);
	}
	slots
}
