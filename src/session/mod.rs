//! Session state shared by the terminal UI and its event handlers.
//!
//! [`Session`] owns the catalog, the live query, the selection and the combined
//! buffer. UI events reach it through [`Session::dispatch`]; background work
//! (the catalog load and combine batches) reports back over channels that the
//! event loop drains with [`Session::pump`].

mod event;

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use log::{debug, info, warn};
use serde::Serialize;

pub use event::SessionEvent;

use crate::catalog::{Catalog, spawn_catalog_load};
use crate::combine::{Combined, CombinedBuffer, Combiner};
use crate::error::{Error, Result};
use crate::export::{ExportOutcome, Exporter};
use crate::filter;
use crate::selection::Selection;
use crate::source::TemplateSource;

/// Lifecycle of the one-shot catalog load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogState {
	NotRequested,
	Loading,
	Ready,
	Unavailable,
}

/// Summary handed back to the caller once the UI exits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionOutcome {
	pub selection: Vec<String>,
	pub label: Option<String>,
	pub exported: Option<PathBuf>,
}

pub struct Session {
	source: Arc<dyn TemplateSource>,
	catalog: Catalog,
	catalog_state: CatalogState,
	catalog_updates: Option<Receiver<Result<Catalog>>>,
	query: String,
	filtered: Vec<String>,
	suggestions: Vec<String>,
	selection: Selection,
	buffer: CombinedBuffer,
	combiner: Combiner,
	exporter: Exporter,
	reports_tx: Sender<Result<Combined>>,
	reports_rx: Receiver<Result<Combined>>,
	pending_combines: usize,
	status: Option<String>,
	last_export: Option<PathBuf>,
}

impl Session {
	pub fn new(source: Arc<dyn TemplateSource>, exporter: Exporter) -> Self {
		let (reports_tx, reports_rx) = mpsc::channel();
		Self {
			combiner: Combiner::new(Arc::clone(&source)),
			source,
			catalog: Catalog::default(),
			catalog_state: CatalogState::NotRequested,
			catalog_updates: None,
			query: String::new(),
			filtered: Vec::new(),
			suggestions: Vec::new(),
			selection: Selection::new(),
			buffer: CombinedBuffer::new(),
			exporter,
			reports_tx,
			reports_rx,
			pending_combines: 0,
			status: None,
			last_export: None,
		}
	}

	/// Kick off the catalog load on a background thread.
	pub fn load_catalog(&mut self) {
		if self.catalog_state != CatalogState::NotRequested {
			return;
		}
		self.catalog_state = CatalogState::Loading;
		self.catalog_updates = Some(spawn_catalog_load(Arc::clone(&self.source)));
	}

	/// Install an already loaded catalog.
	pub fn set_catalog(&mut self, catalog: Catalog) {
		self.catalog = catalog;
		self.catalog_state = CatalogState::Ready;
		self.catalog_updates = None;
		self.refresh_filter();
	}

	/// Apply finished background work. Returns whether anything changed.
	pub fn pump(&mut self) -> bool {
		let mut changed = self.pump_catalog();
		loop {
			match self.reports_rx.try_recv() {
				Ok(report) => {
					self.pending_combines = self.pending_combines.saturating_sub(1);
					self.buffer.apply(&report);
					self.status = None;
					changed = true;
				}
				Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
			}
		}
		changed
	}

	fn pump_catalog(&mut self) -> bool {
		let Some(rx) = self.catalog_updates.take() else {
			return false;
		};
		match rx.try_recv() {
			Ok(Ok(catalog)) => {
				self.set_catalog(catalog);
				true
			}
			Ok(Err(err)) => {
				warn!("{err}");
				self.catalog_state = CatalogState::Unavailable;
				true
			}
			Err(TryRecvError::Empty) => {
				self.catalog_updates = Some(rx);
				false
			}
			Err(TryRecvError::Disconnected) => {
				warn!("catalog loader exited without a result");
				self.catalog_state = CatalogState::Unavailable;
				true
			}
		}
	}

	fn set_query(&mut self, query: String) {
		self.query = query;
		self.refresh_filter();
	}

	fn refresh_filter(&mut self) {
		self.filtered = filter::filter(self.catalog.names(), &self.query);
		self.suggestions = if self.query.is_empty() {
			Vec::new()
		} else {
			self.filtered.clone()
		};
	}

	fn select(&mut self, name: String) {
		if self.selection.add(name.clone()) {
			info!("selected {name}");
		} else {
			debug!("{name} is already selected");
		}
		self.set_query(String::new());
	}

	fn confirm(&mut self) {
		let matched = filter::exact_match(&self.filtered, &self.query).map(str::to_string);
		match matched {
			Some(name) => self.select(name),
			None => debug!("enter ignored: {:?} matches no suggestion", self.query),
		}
	}

	fn remove(&mut self, name: &str) {
		if self.selection.remove(name) > 0 {
			info!("removed {name}");
		}
	}

	fn combine(&mut self) {
		self.status = None;
		let names = self.selection.list();
		if names.is_empty() {
			self.buffer.apply(&Err(Error::NoSelection));
			return;
		}
		info!("combining {}", names.join(", "));
		self.pending_combines += 1;
		self.combiner.spawn(names, self.reports_tx.clone());
	}

	fn download(&mut self) {
		if !self.buffer.is_downloadable() {
			debug!("download ignored: no combined content");
			return;
		}
		match self.exporter.export(self.buffer.text()) {
			Ok(ExportOutcome::Saved(path)) => {
				self.status = Some(format!("Saved {}", path.display()));
				self.last_export = Some(path);
			}
			Ok(ExportOutcome::Skipped) => {}
			Err(err) => {
				warn!("{err}");
				self.status = Some(err.to_string());
			}
		}
	}

	#[must_use]
	pub fn catalog(&self) -> &Catalog {
		&self.catalog
	}

	#[must_use]
	pub fn catalog_state(&self) -> CatalogState {
		self.catalog_state
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	/// Catalog entries matching the query, including for an empty query.
	#[must_use]
	pub fn filtered(&self) -> &[String] {
		&self.filtered
	}

	#[must_use]
	pub fn suggestions(&self) -> &[String] {
		&self.suggestions
	}

	#[must_use]
	pub fn selection(&self) -> &Selection {
		&self.selection
	}

	#[must_use]
	pub fn buffer(&self) -> &CombinedBuffer {
		&self.buffer
	}

	#[must_use]
	pub fn exporter(&self) -> &Exporter {
		&self.exporter
	}

	#[must_use]
	pub fn is_combining(&self) -> bool {
		self.pending_combines > 0
	}

	/// Export notice since the last combine, if any.
	#[must_use]
	pub fn status(&self) -> Option<&str> {
		self.status.as_deref()
	}

	#[must_use]
	pub fn outcome(&self) -> SessionOutcome {
		SessionOutcome {
			selection: self.selection.list(),
			label: self.buffer.label().map(str::to_string),
			exported: self.last_export.clone(),
		}
	}
}

#[cfg(test)]
mod tests;
