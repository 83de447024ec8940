use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod export;
mod logging;
mod source;
mod ui;

use export::ExportSection;
use logging::LogSection;
use source::SourceSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	source: SourceSection,
	export: ExportSection,
	ui: UiSection,
	log: LogSection,
	#[serde(skip)]
	from_cli: CliPresence,
}

/// Which validated settings were given on the command line.
#[derive(Debug, Clone, Copy, Default)]
struct CliPresence {
	listing_url: bool,
	template_url: bool,
	user_agent: bool,
	timeout_secs: bool,
	file_name: bool,
	theme: bool,
	log_level: bool,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.from_cli = CliPresence {
			listing_url: cli.listing_url.is_some(),
			template_url: cli.template_url.is_some(),
			user_agent: cli.user_agent.is_some(),
			timeout_secs: cli.timeout_secs.is_some(),
			file_name: cli.file_name.is_some(),
			theme: cli.theme.is_some(),
			log_level: cli.log_level.is_some(),
		};
		self.source.apply_cli_overrides(cli);
		self.export.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		self.log.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self) -> Result<ResolvedConfig> {
		let cli = self.from_cli;
		let sources = ConfigSources {
			listing_url: detect_source(
				cli.listing_url,
				self.source.listing_url.is_some(),
				"IGNR__SOURCE__LISTING_URL",
				"--listing-url",
				"source.listing_url",
			),
			template_url: detect_source(
				cli.template_url,
				self.source.template_url.is_some(),
				"IGNR__SOURCE__TEMPLATE_URL",
				"--template-url",
				"source.template_url",
			),
			user_agent: detect_source(
				cli.user_agent,
				self.source.user_agent.is_some(),
				"IGNR__SOURCE__USER_AGENT",
				"--user-agent",
				"source.user_agent",
			),
			timeout_secs: detect_source(
				cli.timeout_secs,
				self.source.timeout_secs.is_some(),
				"IGNR__SOURCE__TIMEOUT_SECS",
				"--timeout",
				"source.timeout_secs",
			),
			file_name: detect_source(
				cli.file_name,
				self.export.file_name.is_some(),
				"IGNR__EXPORT__FILE_NAME",
				"--file-name",
				"export.file_name",
			),
			theme: detect_source(
				cli.theme,
				self.ui.theme.is_some(),
				"IGNR__UI__THEME",
				"--theme",
				"ui.theme",
			),
			log_level: detect_source(
				cli.log_level,
				self.log.level.is_some(),
				"IGNR__LOG__LEVEL",
				"--log-level",
				"log.level",
			),
		};

		let log_level = self.log.resolve(&sources)?;
		let timeout_secs = self.source.timeout_secs;
		let ui = self.ui.finalize();
		let config = ResolvedConfig {
			source: self.source.finalize(),
			export: self.export.finalize(),
			input_title: ui.input_title,
			initial_query: ui.initial_query,
			theme: ui.theme,
			show_logs: ui.show_logs,
			log_level,
		};

		config.validate(timeout_secs, &sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
