use std::sync::Arc;

use anyhow::{Context, Result};
use ignr::combine::Combined;
use ignr::{
	Combiner, ExportOutcome, Exporter, GithubSource, Picker, SessionOutcome, TemplateSource,
	filter, load_catalog, logging,
};
use log::LevelFilter;

use crate::settings::ResolvedConfig;

/// Interactive picker settings taken from the resolved configuration.
struct PickerSettings {
	input_title: Option<String>,
	initial_query: String,
	theme: Option<String>,
	show_logs: bool,
	log_level: LevelFilter,
}

/// Coordinates the interactive picker and the headless commands.
pub(crate) struct Workflow {
	source: Arc<dyn TemplateSource>,
	exporter: Exporter,
	picker: PickerSettings,
}

impl Workflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let source = GithubSource::new(config.source).context("failed to build HTTP client")?;
		Ok(Self::with_source(
			Arc::new(source),
			config.export,
			PickerSettings {
				input_title: config.input_title,
				initial_query: config.initial_query,
				theme: config.theme,
				show_logs: config.show_logs,
				log_level: config.log_level,
			},
		))
	}

	fn with_source(
		source: Arc<dyn TemplateSource>,
		exporter: Exporter,
		picker: PickerSettings,
	) -> Self {
		Self {
			source,
			exporter,
			picker,
		}
	}

	/// Catalog names containing the configured initial query.
	pub(crate) fn list(&self) -> Result<Vec<String>> {
		let catalog =
			load_catalog(self.source.as_ref()).context("failed to load the template catalog")?;
		Ok(filter::filter(catalog.names(), &self.picker.initial_query))
	}

	pub(crate) fn combine(&self, names: &[String]) -> Result<Combined> {
		Combiner::new(Arc::clone(&self.source))
			.combine(names)
			.context("failed to combine templates")
	}

	/// Write `combined` with the configured exporter and summarize the run.
	pub(crate) fn export(&self, combined: Combined) -> Result<SessionOutcome> {
		let label = combined.label();
		let exported = match self.exporter.export(&combined.text)? {
			ExportOutcome::Saved(path) => Some(path),
			ExportOutcome::Skipped => None,
		};
		Ok(SessionOutcome {
			selection: combined.names,
			label: Some(label),
			exported,
		})
	}

	/// Run the terminal picker until the user quits.
	pub(crate) fn run_interactive(self) -> Result<SessionOutcome> {
		logging::initialize(self.picker.log_level)?;

		let PickerSettings {
			input_title,
			initial_query,
			theme,
			show_logs,
			..
		} = self.picker;

		let mut picker = Picker::new(self.source)
			.with_exporter(self.exporter)
			.with_initial_query(initial_query)
			.with_logs(show_logs);
		if let Some(title) = input_title {
			picker = picker.with_input_title(title);
		}
		if let Some(theme) = theme {
			picker = picker.with_theme_name(&theme);
		}
		picker.run().context("terminal UI failed")
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;
	use std::fs;

	use ignr::FetchError;
	use tempfile::tempdir;

	use super::*;

	struct FixedSource {
		bodies: HashMap<&'static str, &'static str>,
	}

	impl FixedSource {
		fn new(bodies: &[(&'static str, &'static str)]) -> Self {
			Self {
				bodies: bodies.iter().copied().collect(),
			}
		}
	}

	impl TemplateSource for FixedSource {
		fn list_templates(&self) -> Result<Vec<String>, FetchError> {
			let mut names: Vec<String> = self.bodies.keys().map(|name| name.to_string()).collect();
			names.sort();
			Ok(names)
		}

		fn fetch_template(&self, name: &str) -> Result<String, FetchError> {
			self.bodies
				.get(name)
				.map(|body| body.to_string())
				.ok_or(FetchError::Interrupted)
		}
	}

	fn workflow(exporter: Exporter, query: &str) -> Workflow {
		let source = FixedSource::new(&[("Go", "bin/"), ("Godot", ".godot/"), ("Rust", "target/")]);
		Workflow::with_source(
			Arc::new(source),
			exporter,
			PickerSettings {
				input_title: None,
				initial_query: query.to_string(),
				theme: None,
				show_logs: false,
				log_level: LevelFilter::Off,
			},
		)
	}

	#[test]
	fn list_filters_by_initial_query() {
		assert_eq!(workflow(Exporter::default(), "go").list().unwrap(), ["Go", "Godot"]);
		assert_eq!(workflow(Exporter::default(), "").list().unwrap().len(), 3);
	}

	#[test]
	fn headless_select_writes_the_combined_file() {
		let dir = tempdir().unwrap();
		let workflow = workflow(Exporter::new(dir.path(), "combined.gitignore"), "");

		let combined = workflow
			.combine(&["Rust".to_string(), "Go".to_string()])
			.unwrap();
		let outcome = workflow.export(combined).unwrap();

		let path = dir.path().join("combined.gitignore");
		assert_eq!(fs::read_to_string(&path).unwrap(), "target/\n\nbin/");
		assert_eq!(outcome.selection, ["Rust", "Go"]);
		assert_eq!(
			outcome.label.as_deref(),
			Some("Combined .gitignore files for: Rust, Go")
		);
		assert_eq!(outcome.exported, Some(path));
	}

	#[test]
	fn unknown_template_fails_the_combine() {
		let workflow = workflow(Exporter::default(), "");
		let err = workflow
			.combine(&["Rust".to_string(), "Cobol".to_string()])
			.unwrap_err();

		assert!(err.to_string().contains("failed to combine templates"));
	}
}
