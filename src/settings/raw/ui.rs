use serde::Deserialize;

use super::super::util::non_blank;
use crate::cli::CliArgs;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) input_title: Option<String>,
	pub(super) show_logs: Option<bool>,
}

pub(super) struct UiResolution {
	pub(super) input_title: Option<String>,
	pub(super) initial_query: String,
	pub(super) theme: Option<String>,
	pub(super) show_logs: bool,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.input_title = Some(title);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(show) = cli.show_logs {
			self.show_logs = Some(show);
		}
	}

	pub(super) fn finalize(self) -> UiResolution {
		UiResolution {
			input_title: non_blank(self.input_title),
			initial_query: self.initial_query.unwrap_or_default(),
			theme: non_blank(self.theme),
			show_logs: self.show_logs.unwrap_or(false),
		}
	}
}
