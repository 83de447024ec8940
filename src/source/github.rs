use std::time::Duration;

use log::debug;
use reqwest::blocking::{Client, Response};
use reqwest::header::ACCEPT;
use serde::Deserialize;

use super::TemplateSource;
use crate::error::FetchError;

pub const DEFAULT_LISTING_URL: &str = "https://api.github.com/repos/github/gitignore/contents";
pub const DEFAULT_TEMPLATE_URL: &str =
	"https://raw.githubusercontent.com/github/gitignore/master/{name}.gitignore";
pub const DEFAULT_SUFFIX: &str = ".gitignore";
/// Placeholder replaced by the template name in [`SourceOptions::template_url`].
pub const NAME_PLACEHOLDER: &str = "{name}";

const GITHUB_JSON: &str = "application/vnd.github+json";

/// The GitHub API refuses requests without a user agent.
#[must_use]
pub fn default_user_agent() -> String {
	format!("ignr/{}", env!("CARGO_PKG_VERSION"))
}

/// Endpoints and transport settings for [`GithubSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceOptions {
	pub listing_url: String,
	pub template_url: String,
	pub suffix: String,
	pub user_agent: String,
	pub timeout: Option<Duration>,
	/// Drop listing entries that are not files carrying [`Self::suffix`].
	pub templates_only: bool,
}

impl Default for SourceOptions {
	fn default() -> Self {
		Self {
			listing_url: DEFAULT_LISTING_URL.to_string(),
			template_url: DEFAULT_TEMPLATE_URL.to_string(),
			suffix: DEFAULT_SUFFIX.to_string(),
			user_agent: default_user_agent(),
			timeout: None,
			templates_only: false,
		}
	}
}

#[derive(Debug, Deserialize)]
struct ListingEntry {
	name: String,
	#[serde(rename = "type", default)]
	kind: Option<String>,
}

/// Blocking HTTP client for a directory listing plus per-template raw files.
#[derive(Debug, Clone)]
pub struct GithubSource {
	client: Client,
	options: SourceOptions,
}

impl GithubSource {
	pub fn new(options: SourceOptions) -> Result<Self, FetchError> {
		let builder = Client::builder()
			.user_agent(options.user_agent.clone())
			.timeout(options.timeout);
		// Loopback test servers must not be routed through an ambient proxy.
		#[cfg(test)]
		let builder = builder.no_proxy();
		let client = builder.build()?;
		Ok(Self { client, options })
	}

	#[must_use]
	pub fn options(&self) -> &SourceOptions {
		&self.options
	}

	/// Expand the per-template URL for `name`.
	#[must_use]
	pub fn template_url(&self, name: &str) -> String {
		self.options.template_url.replace(NAME_PLACEHOLDER, name)
	}

	fn get(&self, url: &str, accept: Option<&str>) -> Result<Response, FetchError> {
		let mut request = self.client.get(url);
		if let Some(accept) = accept {
			request = request.header(ACCEPT, accept);
		}
		let response = request.send()?;
		let status = response.status();
		if !status.is_success() {
			return Err(FetchError::Status {
				url: url.to_string(),
				status,
			});
		}
		Ok(response)
	}
}

impl TemplateSource for GithubSource {
	fn list_templates(&self) -> Result<Vec<String>, FetchError> {
		let url = &self.options.listing_url;
		debug!("fetching template listing from {url}");
		let body = self.get(url, Some(GITHUB_JSON))?.text()?;
		parse_listing(&body, &self.options.suffix, self.options.templates_only)
	}

	fn fetch_template(&self, name: &str) -> Result<String, FetchError> {
		let url = self.template_url(name);
		debug!("fetching template {name} from {url}");
		Ok(self.get(&url, None)?.text()?)
	}
}

/// Strip `suffix` from a listing entry name, keeping names without it intact.
#[must_use]
pub fn template_name<'a>(entry: &'a str, suffix: &str) -> &'a str {
	entry.strip_suffix(suffix).unwrap_or(entry)
}

/// Decode a contents-API listing into template names, preserving order.
pub fn parse_listing(
	body: &str,
	suffix: &str,
	templates_only: bool,
) -> Result<Vec<String>, FetchError> {
	let entries: Vec<ListingEntry> = serde_json::from_str(body)?;
	let names = entries
		.iter()
		.filter(|entry| !templates_only || is_template(entry, suffix))
		.map(|entry| template_name(&entry.name, suffix).to_string())
		.collect();
	Ok(names)
}

fn is_template(entry: &ListingEntry, suffix: &str) -> bool {
	let is_file = entry.kind.as_deref().is_none_or(|kind| kind == "file");
	is_file && entry.name.len() > suffix.len() && entry.name.ends_with(suffix)
}

#[cfg(test)]
mod tests {
	use std::io::{Read, Write};
	use std::net::TcpListener;
	use std::thread;

	use reqwest::StatusCode;

	use super::*;

	const LISTING: &str = r#"[
		{"name": ".github", "type": "dir"},
		{"name": "Global", "type": "dir"},
		{"name": "Node.gitignore", "type": "file"},
		{"name": "Python.gitignore", "type": "file"},
		{"name": "README.md", "type": "file"}
	]"#;

	/// Answer a single HTTP request on a loopback port and return its base URL.
	fn serve_once(status_line: &'static str, body: &'static str) -> String {
		let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
		let addr = listener.local_addr().expect("local addr");
		thread::spawn(move || {
			let Ok((mut stream, _)) = listener.accept() else {
				return;
			};
			let mut request = Vec::new();
			let mut chunk = [0u8; 1024];
			while !request.windows(4).any(|window| window == b"\r\n\r\n") {
				match stream.read(&mut chunk) {
					Ok(0) | Err(_) => break,
					Ok(read) => request.extend_from_slice(&chunk[..read]),
				}
			}
			let response = format!(
				"HTTP/1.1 {status_line}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
				body.len()
			);
			let _ = stream.write_all(response.as_bytes());
		});
		format!("http://{addr}")
	}

	fn source_for(base: &str) -> GithubSource {
		GithubSource::new(SourceOptions {
			listing_url: format!("{base}/contents"),
			template_url: format!("{base}/{NAME_PLACEHOLDER}.gitignore"),
			..SourceOptions::default()
		})
		.expect("client")
	}

	#[test]
	fn listing_strips_suffix_and_keeps_order() {
		let names = parse_listing(LISTING, DEFAULT_SUFFIX, false).expect("parse");
		assert_eq!(names, vec![".github", "Global", "Node", "Python", "README.md"]);
	}

	#[test]
	fn templates_only_drops_directories_and_other_files() {
		let names = parse_listing(LISTING, DEFAULT_SUFFIX, true).expect("parse");
		assert_eq!(names, vec!["Node", "Python"]);
	}

	#[test]
	fn listing_without_type_field_is_accepted() {
		let names = parse_listing(r#"[{"name": "Rust.gitignore"}]"#, DEFAULT_SUFFIX, true)
			.expect("parse");
		assert_eq!(names, vec!["Rust"]);
	}

	#[test]
	fn malformed_listing_is_a_decode_error() {
		let err = parse_listing(r#"{"message": "rate limited"}"#, DEFAULT_SUFFIX, false)
			.unwrap_err();
		assert!(matches!(err, FetchError::Decode(_)));
	}

	#[test]
	fn template_name_only_strips_trailing_suffix() {
		assert_eq!(template_name("Go.gitignore", ".gitignore"), "Go");
		assert_eq!(template_name("community", ".gitignore"), "community");
		assert_eq!(template_name(".gitignore.md", ".gitignore"), ".gitignore.md");
	}

	#[test]
	fn template_url_substitutes_name() {
		let source = GithubSource::new(SourceOptions::default()).expect("client");
		assert_eq!(
			source.template_url("Python"),
			"https://raw.githubusercontent.com/github/gitignore/master/Python.gitignore"
		);
	}

	#[test]
	fn fetch_template_returns_body() {
		let base = serve_once("200 OK", "*.pyc\n");
		let body = source_for(&base).fetch_template("Python").expect("body");
		assert_eq!(body, "*.pyc\n");
	}

	#[test]
	fn non_success_status_is_an_error() {
		let base = serve_once("404 Not Found", "404: Not Found");
		let err = source_for(&base).fetch_template("Nope").unwrap_err();
		match err {
			FetchError::Status { url, status } => {
				assert_eq!(status, StatusCode::NOT_FOUND);
				assert!(url.ends_with("/Nope.gitignore"));
			}
			other => panic!("unexpected error: {other}"),
		}
	}

	#[test]
	fn listing_is_fetched_over_http() {
		let base = serve_once("200 OK", r#"[{"name": "Rust.gitignore", "type": "file"}]"#);
		let names = source_for(&base).list_templates().expect("listing");
		assert_eq!(names, vec!["Rust"]);
	}
}
