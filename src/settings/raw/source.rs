use std::time::Duration;

use ignr::source::{
	DEFAULT_LISTING_URL, DEFAULT_SUFFIX, DEFAULT_TEMPLATE_URL, SourceOptions, default_user_agent,
};
use serde::Deserialize;

use super::super::util::non_blank;
use crate::cli::CliArgs;

/// Remote endpoint settings prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SourceSection {
	pub(super) listing_url: Option<String>,
	pub(super) template_url: Option<String>,
	pub(super) suffix: Option<String>,
	pub(super) user_agent: Option<String>,
	pub(super) timeout_secs: Option<u64>,
	pub(super) templates_only: Option<bool>,
}

impl SourceSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(url) = cli.listing_url.clone() {
			self.listing_url = Some(url);
		}
		if let Some(url) = cli.template_url.clone() {
			self.template_url = Some(url);
		}
		if let Some(suffix) = cli.suffix.clone() {
			self.suffix = Some(suffix);
		}
		if let Some(agent) = cli.user_agent.clone() {
			self.user_agent = Some(agent);
		}
		if let Some(secs) = cli.timeout_secs {
			self.timeout_secs = Some(secs);
		}
		if let Some(flag) = cli.templates_only {
			self.templates_only = Some(flag);
		}
	}

	/// An explicitly empty suffix is kept; it disables stripping.
	pub(super) fn finalize(self) -> SourceOptions {
		SourceOptions {
			listing_url: self
				.listing_url
				.unwrap_or_else(|| DEFAULT_LISTING_URL.to_string()),
			template_url: self
				.template_url
				.unwrap_or_else(|| DEFAULT_TEMPLATE_URL.to_string()),
			suffix: self.suffix.unwrap_or_else(|| DEFAULT_SUFFIX.to_string()),
			user_agent: non_blank(self.user_agent).unwrap_or_else(default_user_agent),
			timeout: self.timeout_secs.map(Duration::from_secs),
			templates_only: self.templates_only.unwrap_or(false),
		}
	}
}
