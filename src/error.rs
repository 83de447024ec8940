use std::io;
use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Failures raised while talking to a remote template source.
#[derive(Debug, Error)]
pub enum FetchError {
	/// The request could not be sent or its body could not be read.
	#[error("request failed: {0}")]
	Transport(#[from] reqwest::Error),

	/// The server answered with a non-success status code.
	#[error("HTTP {status} from {url}")]
	Status { url: String, status: StatusCode },

	/// The listing body was not the expected JSON array.
	#[error("malformed listing: {0}")]
	Decode(#[from] serde_json::Error),

	/// A fetch worker thread could not be started.
	#[error("failed to start fetch worker: {0}")]
	Worker(#[from] io::Error),

	/// A fetch worker exited without reporting a result.
	#[error("fetch worker exited without a result")]
	Interrupted,
}

/// Errors surfaced by the catalog, combiner and exporter.
#[derive(Debug, Error)]
pub enum Error {
	/// The template listing could not be fetched or parsed.
	#[error("template catalog unavailable: {0}")]
	CatalogUnavailable(#[source] FetchError),

	/// A combine was requested with nothing selected.
	#[error("no templates selected")]
	NoSelection,

	/// At least one template of a combine batch failed to download.
	#[error("failed to fetch template '{name}': {source}")]
	CombineFetchFailed {
		name: String,
		#[source]
		source: FetchError,
	},

	/// The combined file could not be written.
	#[error("failed to write {}: {source}", .path.display())]
	ExportFailed {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
