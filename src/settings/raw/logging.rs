use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;

use super::super::resolved::{ConfigError, ConfigSources};
use crate::cli::CliArgs;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LogSection {
	pub(super) level: Option<String>,
}

impl LogSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(level) = cli.log_level {
			self.level = Some(level.as_str().to_string());
		}
	}

	pub(super) fn resolve(&self, sources: &ConfigSources) -> Result<LevelFilter, ConfigError> {
		let Some(level) = &self.level else {
			return Ok(LevelFilter::Info);
		};
		LevelFilter::from_str(level.trim()).map_err(|_| {
			ConfigError::invalid(
				"log.level",
				level.clone(),
				sources.source_for_log_level(),
				"expected one of off, error, warn, info, debug, trace",
			)
		})
	}
}
