//! Where `ignr` looks for its `config.toml`.
//!
//! `IGNR_CONFIG_DIR` wins when set; otherwise the platform's local config
//! directory from `directories` is used.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const CONFIG_DIR_ENV: &str = "IGNR_CONFIG_DIR";

/// Directory holding `config.toml`.
pub fn config_dir() -> Result<PathBuf> {
	resolve_config_dir(env::var_os(CONFIG_DIR_ENV))
}

/// An empty override counts as unset.
fn resolve_config_dir(override_dir: Option<OsString>) -> Result<PathBuf> {
	match override_dir {
		Some(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
		_ => ProjectDirs::from("io", "albo", "ignr")
			.map(|dirs| dirs.config_local_dir().to_path_buf())
			.ok_or_else(|| anyhow!("no home directory to place the ignr config in")),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn override_takes_precedence() {
		let dir = resolve_config_dir(Some(OsString::from("/tmp/ignr-config"))).unwrap();
		assert_eq!(dir, PathBuf::from("/tmp/ignr-config"));
	}

	#[test]
	fn empty_override_falls_back_to_platform_dir() {
		// Sandboxes without a home directory resolve to an error instead.
		if let Ok(dir) = resolve_config_dir(Some(OsString::new())) {
			assert_ne!(dir, PathBuf::new());
		}
	}
}
