use ratatui::style::{Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub header: Style,
	pub row_highlight: Style,
	pub prompt: Style,
	pub empty: Style,
	pub highlight: Style,
	pub badge: Style,
	pub error: Style,
}

impl Theme {
	#[must_use]
	pub fn row_highlight_style(&self) -> Style {
		self.row_highlight
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn highlight_style(&self) -> Style {
		self.highlight
	}

	#[must_use]
	pub fn badge_style(&self) -> Style {
		self.badge
	}

	/// Badge colors with reversed video, used for the focused badge.
	#[must_use]
	pub fn badge_focus_style(&self) -> Style {
		self.badge.add_modifier(Modifier::REVERSED)
	}

	#[must_use]
	pub fn error_style(&self) -> Style {
		self.error
	}

	#[must_use]
	pub fn button_style(&self, enabled: bool) -> Style {
		if enabled {
			self.header
		} else {
			self.empty.add_modifier(Modifier::DIM)
		}
	}
}

/// A built-in theme with its lookup aliases.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
	pub aliases: &'static [&'static str],
}

impl ThemeDefinition {
	pub const fn new(name: &'static str, theme: Theme) -> Self {
		Self {
			name,
			theme,
			aliases: &[],
		}
	}

	pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
		self.aliases = aliases;
		self
	}
}
