//! Write combined output to disk.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::{Error, Result};

pub const DEFAULT_FILE_NAME: &str = "combined.gitignore";

/// What an export attempt did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
	/// The buffer was blank, nothing was written.
	Skipped,
	/// The buffer was written to the contained path.
	Saved(PathBuf),
}

/// Saves the combined buffer under a fixed file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exporter {
	directory: PathBuf,
	file_name: String,
}

impl Default for Exporter {
	fn default() -> Self {
		Self::new(PathBuf::from("."), DEFAULT_FILE_NAME)
	}
}

impl Exporter {
	pub fn new(directory: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
		Self {
			directory: directory.into(),
			file_name: file_name.into(),
		}
	}

	/// Path the next export will write to.
	#[must_use]
	pub fn target(&self) -> PathBuf {
		self.directory.join(&self.file_name)
	}

	#[must_use]
	pub fn file_name(&self) -> &str {
		&self.file_name
	}

	#[must_use]
	pub fn directory(&self) -> &Path {
		&self.directory
	}

	/// Write `buffer` verbatim, or do nothing when it is blank.
	pub fn export(&self, buffer: &str) -> Result<ExportOutcome> {
		if buffer.trim().is_empty() {
			debug!("export skipped: nothing to save");
			return Ok(ExportOutcome::Skipped);
		}

		let path = self.target();
		fs::write(&path, buffer.as_bytes()).map_err(|source| Error::ExportFailed {
			path: path.clone(),
			source,
		})?;
		info!("saved {} bytes to {}", buffer.len(), path.display());
		Ok(ExportOutcome::Saved(path))
	}
}
