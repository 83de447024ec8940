//! Combine `.gitignore` templates from a remote catalog into one file.
//!
//! The library splits into the network side ([`source`], [`catalog`]), pure
//! selection logic ([`filter`], [`selection`]), the parallel [`combine`] step,
//! the [`export`] writer, and the [`session`] controller that the terminal
//! [`ui`] drives. Embedders can use the pieces headlessly or run the picker
//! through [`ui::Picker`].

pub mod app_dirs;
pub mod catalog;
pub mod combine;
pub mod error;
pub mod export;
pub mod filter;
pub mod logging;
pub mod selection;
pub mod session;
pub mod source;
pub mod ui;

pub use catalog::{Catalog, load_catalog};
pub use combine::{Combined, CombinedBuffer, Combiner};
pub use error::{Error, FetchError, Result};
pub use export::{ExportOutcome, Exporter};
pub use selection::Selection;
pub use session::{Session, SessionEvent, SessionOutcome};
pub use source::{GithubSource, SourceOptions, TemplateSource};
pub use ui::Picker;
pub use ui::theme::{Theme, default_theme};
