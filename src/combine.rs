//! Fetch and join the templates of a selection.
//!
//! [`Combiner::combine`] gathers one download per selected name on its own
//! worker thread and joins the bodies in selection order. The batch is
//! all-or-nothing: the first failure reported by any worker fails the whole
//! combine. [`CombinedBuffer`] holds what the output pane shows afterwards.

use std::sync::Arc;
use std::sync::mpsc::{self, Sender};
use std::thread;

use log::{info, warn};

use crate::error::{Error, FetchError, Result};
use crate::source::TemplateSource;

pub const NO_SELECTION_MESSAGE: &str = "Please select at least one language.";
pub const FETCH_FAILED_MESSAGE: &str = "An error occurred while fetching the .gitignore files.";
pub const SEPARATOR: &str = "\n\n";

/// Successful join of every selected template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combined {
	pub names: Vec<String>,
	pub text: String,
}

impl Combined {
	/// Human readable list of the templates that produced [`Self::text`].
	#[must_use]
	pub fn label(&self) -> String {
		combined_label(&self.names)
	}
}

#[must_use]
pub fn combined_label(names: &[String]) -> String {
	format!("Combined .gitignore files for: {}", names.join(", "))
}

/// Parallel template downloader.
#[derive(Clone)]
pub struct Combiner {
	source: Arc<dyn TemplateSource>,
}

impl Combiner {
	pub fn new(source: Arc<dyn TemplateSource>) -> Self {
		Self { source }
	}

	/// Download every template in `names` and join them with a blank line.
	pub fn combine(&self, names: &[String]) -> Result<Combined> {
		if names.is_empty() {
			return Err(Error::NoSelection);
		}

		let (tx, rx) = mpsc::channel();
		for (index, name) in names.iter().enumerate() {
			let tx = tx.clone();
			let source = Arc::clone(&self.source);
			let worker_name = name.clone();
			thread::Builder::new()
				.name(format!("ignr-fetch-{index}"))
				.spawn(move || {
					let result = source.fetch_template(&worker_name);
					let _ = tx.send((index, result));
				})
				.map_err(|err| Error::CombineFetchFailed {
					name: name.clone(),
					source: FetchError::Worker(err),
				})?;
		}
		drop(tx);

		let mut bodies: Vec<Option<String>> = vec![None; names.len()];
		for (index, result) in rx {
			match result {
				Ok(body) => bodies[index] = Some(body),
				Err(source) => {
					let name = names[index].clone();
					warn!("error fetching template {name}: {source}");
					return Err(Error::CombineFetchFailed { name, source });
				}
			}
		}

		let mut joined = Vec::with_capacity(bodies.len());
		for (index, body) in bodies.into_iter().enumerate() {
			match body {
				Some(body) => joined.push(body),
				None => {
					return Err(Error::CombineFetchFailed {
						name: names[index].clone(),
						source: FetchError::Interrupted,
					});
				}
			}
		}

		info!("combined {} templates", names.len());
		Ok(Combined {
			names: names.to_vec(),
			text: joined.join(SEPARATOR),
		})
	}

	/// Run [`Self::combine`] on a background thread, reporting on `reports`.
	pub fn spawn(&self, names: Vec<String>, reports: Sender<Result<Combined>>) {
		let combiner = self.clone();
		let fallback = reports.clone();
		let first = names.first().cloned().unwrap_or_default();
		let spawned = thread::Builder::new()
			.name("ignr-combine".into())
			.spawn(move || {
				let _ = reports.send(combiner.combine(&names));
			});
		if let Err(err) = spawned {
			warn!("failed to start combine worker: {err}");
			let _ = fallback.send(Err(Error::CombineFetchFailed {
				name: first,
				source: FetchError::Worker(err),
			}));
		}
	}
}

/// Contents of the output pane and the state of the download control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombinedBuffer {
	text: String,
	label: Option<String>,
	downloadable: bool,
}

impl CombinedBuffer {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Replace the buffer with the outcome of a combine attempt.
	pub fn apply(&mut self, outcome: &Result<Combined>) {
		match outcome {
			Ok(combined) => {
				self.text = combined.text.clone();
				self.label = Some(combined.label());
				self.downloadable = true;
			}
			Err(Error::NoSelection) => self.show_message(NO_SELECTION_MESSAGE),
			Err(_) => self.show_message(FETCH_FAILED_MESSAGE),
		}
	}

	fn show_message(&mut self, message: &str) {
		self.text = message.to_string();
		self.label = None;
		self.downloadable = false;
	}

	#[must_use]
	pub fn text(&self) -> &str {
		&self.text
	}

	#[must_use]
	pub fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	#[must_use]
	pub fn is_downloadable(&self) -> bool {
		self.downloadable
	}
}
