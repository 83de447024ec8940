use ignr::{Exporter, SourceOptions};
use log::LevelFilter;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub source: SourceOptions,
	pub export: Exporter,
	pub input_title: Option<String>,
	pub initial_query: String,
	pub theme: Option<String>,
	pub show_logs: bool,
	pub log_level: LevelFilter,
}

impl ResolvedConfig {
	pub(super) fn validate(
		&self,
		timeout_secs: Option<u64>,
		sources: &ConfigSources,
	) -> Result<(), ConfigError> {
		validation::validate(self, timeout_secs, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
