//! The catalog of template names offered for selection.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};
use std::thread;

use log::{info, warn};

use crate::error::{Error, FetchError, Result};
use crate::source::TemplateSource;

/// Ordered template names, fixed once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
	names: Vec<String>,
}

impl Catalog {
	#[must_use]
	pub fn new(names: Vec<String>) -> Self {
		Self { names }
	}

	#[must_use]
	pub fn names(&self) -> &[String] {
		&self.names
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.names.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}
}

impl<S: Into<String>> FromIterator<S> for Catalog {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		Self::new(iter.into_iter().map(Into::into).collect())
	}
}

/// Read the listing once from `source`.
pub fn load_catalog(source: &dyn TemplateSource) -> Result<Catalog> {
	match source.list_templates() {
		Ok(names) => {
			info!("catalog loaded with {} templates", names.len());
			Ok(Catalog::new(names))
		}
		Err(err) => {
			warn!("error fetching template catalog: {err}");
			Err(Error::CatalogUnavailable(err))
		}
	}
}

/// Load the catalog on a background thread and deliver the single result
/// over the returned channel.
pub fn spawn_catalog_load(source: Arc<dyn TemplateSource>) -> Receiver<Result<Catalog>> {
	let (tx, rx) = mpsc::channel();
	let worker_tx = tx.clone();
	let spawned = thread::Builder::new()
		.name("ignr-catalog".into())
		.spawn(move || {
			let _ = worker_tx.send(load_catalog(source.as_ref()));
		});
	if let Err(err) = spawned {
		warn!("failed to start catalog loader: {err}");
		let _ = tx.send(Err(Error::CatalogUnavailable(FetchError::Worker(err))));
	}
	rx
}
