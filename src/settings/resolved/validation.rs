use ignr::source::NAME_PLACEHOLDER;
use ignr::ui::theme;

use super::super::util::is_bare_file_name;
use super::{ConfigError, ConfigSources, ResolvedConfig};

fn is_http_url(url: &str) -> bool {
	url.starts_with("http://") || url.starts_with("https://")
}

pub(super) fn validate(
	config: &ResolvedConfig,
	timeout_secs: Option<u64>,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	let source = &config.source;

	if !is_http_url(&source.listing_url) {
		return Err(ConfigError::invalid(
			"source.listing_url",
			source.listing_url.clone(),
			sources.source_for_listing_url(),
			"must be an http(s) URL",
		));
	}

	if !is_http_url(&source.template_url) {
		return Err(ConfigError::invalid(
			"source.template_url",
			source.template_url.clone(),
			sources.source_for_template_url(),
			"must be an http(s) URL",
		));
	}

	if !source.template_url.contains(NAME_PLACEHOLDER) {
		return Err(ConfigError::invalid(
			"source.template_url",
			source.template_url.clone(),
			sources.source_for_template_url(),
			format!("must contain the {NAME_PLACEHOLDER} placeholder"),
		));
	}

	if source.user_agent.chars().any(char::is_control) {
		return Err(ConfigError::invalid(
			"source.user_agent",
			source.user_agent.clone(),
			sources.source_for_user_agent(),
			"must not contain control characters",
		));
	}

	if timeout_secs == Some(0) {
		return Err(ConfigError::invalid(
			"source.timeout_secs",
			"0",
			sources.source_for_timeout(),
			"must be greater than zero",
		));
	}

	let file_name = config.export.file_name();
	if !is_bare_file_name(file_name) {
		return Err(ConfigError::invalid(
			"export.file_name",
			file_name,
			sources.source_for_file_name(),
			"must be a file name without directories",
		));
	}

	if let Some(name) = &config.theme
		&& theme::by_name(name).is_none()
	{
		return Err(ConfigError::invalid(
			"ui.theme",
			name.clone(),
			sources.source_for_theme(),
			format!("expected one of {}", theme::names().join(", ")),
		));
	}

	Ok(())
}
