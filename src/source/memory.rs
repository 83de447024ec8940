use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use reqwest::StatusCode;

use super::TemplateSource;
use crate::error::FetchError;

/// Template source backed by in-memory maps.
///
/// Names without a body answer with a 404, mirroring the raw content host.
#[derive(Debug, Default)]
pub(crate) struct MemorySource {
	listing: Option<Vec<String>>,
	bodies: HashMap<String, String>,
	delays: HashMap<String, Duration>,
	fetches: AtomicUsize,
}

impl MemorySource {
	pub(crate) fn new() -> Self {
		Self::default()
	}

	pub(crate) fn with_listing<I, S>(mut self, names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.listing = Some(names.into_iter().map(Into::into).collect());
		self
	}

	pub(crate) fn with_template(mut self, name: &str, body: &str) -> Self {
		self.bodies.insert(name.to_string(), body.to_string());
		self
	}

	pub(crate) fn with_delay(mut self, name: &str, delay: Duration) -> Self {
		self.delays.insert(name.to_string(), delay);
		self
	}

	pub(crate) fn fetch_count(&self) -> usize {
		self.fetches.load(Ordering::SeqCst)
	}

	fn not_found(url: String) -> FetchError {
		FetchError::Status {
			url,
			status: StatusCode::NOT_FOUND,
		}
	}
}

impl TemplateSource for MemorySource {
	fn list_templates(&self) -> Result<Vec<String>, FetchError> {
		self.listing
			.clone()
			.ok_or_else(|| Self::not_found("memory://listing".to_string()))
	}

	fn fetch_template(&self, name: &str) -> Result<String, FetchError> {
		self.fetches.fetch_add(1, Ordering::SeqCst);
		if let Some(delay) = self.delays.get(name) {
			thread::sleep(*delay);
		}
		self.bodies
			.get(name)
			.cloned()
			.ok_or_else(|| Self::not_found(format!("memory://{name}")))
	}
}
