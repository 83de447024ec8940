use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from, when it was set at all.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) listing_url: Option<SettingSource>,
	pub(crate) template_url: Option<SettingSource>,
	pub(crate) user_agent: Option<SettingSource>,
	pub(crate) timeout_secs: Option<SettingSource>,
	pub(crate) file_name: Option<SettingSource>,
	pub(crate) theme: Option<SettingSource>,
	pub(crate) log_level: Option<SettingSource>,
}

fn or_key(source: &Option<SettingSource>, key: &'static str) -> SettingSource {
	source.clone().unwrap_or(SettingSource::ConfigKey(key))
}

impl ConfigSources {
	pub(crate) fn source_for_listing_url(&self) -> SettingSource {
		or_key(&self.listing_url, "source.listing_url")
	}

	pub(crate) fn source_for_template_url(&self) -> SettingSource {
		or_key(&self.template_url, "source.template_url")
	}

	pub(crate) fn source_for_user_agent(&self) -> SettingSource {
		or_key(&self.user_agent, "source.user_agent")
	}

	pub(crate) fn source_for_timeout(&self) -> SettingSource {
		or_key(&self.timeout_secs, "source.timeout_secs")
	}

	pub(crate) fn source_for_file_name(&self) -> SettingSource {
		or_key(&self.file_name, "export.file_name")
	}

	pub(crate) fn source_for_theme(&self) -> SettingSource {
		or_key(&self.theme, "ui.theme")
	}

	pub(crate) fn source_for_log_level(&self) -> SettingSource {
		or_key(&self.log_level, "log.level")
	}
}
