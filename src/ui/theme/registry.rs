use super::builtins::{BUILT_IN_DEFINITIONS, DEFAULT_NAME};
use super::types::{Theme, ThemeDefinition};

fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase().replace(['_', ' '], "-")
}

fn find(name: &str) -> Option<&'static ThemeDefinition> {
	let wanted = normalize_name(name);
	BUILT_IN_DEFINITIONS.iter().find(|definition| {
		normalize_name(definition.name) == wanted
			|| definition
				.aliases
				.iter()
				.any(|alias| normalize_name(alias) == wanted)
	})
}

/// Lookup a theme by case-insensitive name or alias.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	find(name).map(|definition| definition.theme)
}

/// Return the canonical theme names, sorted case-insensitively.
#[must_use]
pub fn names() -> Vec<&'static str> {
	let mut names: Vec<&'static str> = BUILT_IN_DEFINITIONS
		.iter()
		.map(|definition| definition.name)
		.collect();
	names.sort_unstable_by_key(|name| name.to_ascii_lowercase());
	names
}

#[must_use]
pub fn default_theme() -> Theme {
	by_name(DEFAULT_NAME).unwrap_or(super::builtins::SLATE)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ui::theme::builtins::{LIGHT, SLATE, SOLARIZED};

	#[test]
	fn builtin_themes_are_registered() {
		assert_eq!(names(), vec!["light", "slate", "solarized"]);
		assert_eq!(by_name("slate"), Some(SLATE));
	}

	#[test]
	fn lookup_ignores_case_and_separators() {
		assert_eq!(by_name("  LIGHT "), Some(LIGHT));
		assert_eq!(by_name("Solarized_Dark"), Some(SOLARIZED));
		assert_eq!(by_name("dark"), Some(SLATE));
		assert_eq!(by_name("neon"), None);
	}

	#[test]
	fn default_theme_is_slate() {
		assert_eq!(default_theme(), SLATE);
	}
}
