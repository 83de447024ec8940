//! Remote template sources.
//!
//! A [`TemplateSource`] answers two questions: which templates exist, and what
//! a given template contains. [`GithubSource`] talks to the GitHub contents
//! API and the raw content host; tests substitute an in-memory source.

mod github;
#[cfg(test)]
pub(crate) mod memory;

pub use github::{
	DEFAULT_LISTING_URL, DEFAULT_SUFFIX, DEFAULT_TEMPLATE_URL, GithubSource, NAME_PLACEHOLDER,
	SourceOptions, default_user_agent, parse_listing, template_name,
};

use crate::error::FetchError;

/// Read access to a catalog of named templates.
///
/// Implementations are shared across fetch worker threads, so they must be
/// `Send + Sync`.
pub trait TemplateSource: Send + Sync {
	/// Return every template name advertised by the listing endpoint.
	fn list_templates(&self) -> Result<Vec<String>, FetchError>;

	/// Download the raw body of a single template.
	fn fetch_template(&self, name: &str) -> Result<String, FetchError>;
}
