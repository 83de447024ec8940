use std::path::PathBuf;

use ignr::Exporter;
use ignr::export::DEFAULT_FILE_NAME;
use serde::Deserialize;

use crate::cli::CliArgs;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ExportSection {
	pub(super) file_name: Option<String>,
	pub(super) directory: Option<PathBuf>,
}

impl ExportSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(name) = cli.file_name.clone() {
			self.file_name = Some(name);
		}
		if let Some(directory) = cli.directory.clone() {
			self.directory = Some(directory);
		}
	}

	pub(super) fn finalize(self) -> Exporter {
		Exporter::new(
			self.directory.unwrap_or_else(|| PathBuf::from(".")),
			self.file_name
				.unwrap_or_else(|| DEFAULT_FILE_NAME.to_string()),
		)
	}
}
