use std::sync::Arc;

use anyhow::Result;

use super::App;
use super::theme::{self, Theme};
use crate::catalog::Catalog;
use crate::export::Exporter;
use crate::session::{Session, SessionEvent, SessionOutcome};
use crate::source::TemplateSource;

/// Builder for the interactive template picker.
///
/// ```no_run
/// use std::sync::Arc;
///
/// use ignr::source::{GithubSource, SourceOptions};
/// use ignr::ui::Picker;
///
/// let source = GithubSource::new(SourceOptions::default())?;
/// let outcome = Picker::new(Arc::new(source))
/// 	.with_theme_name("light")
/// 	.with_initial_query("rust")
/// 	.run()?;
/// println!("{:?}", outcome.selection);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub struct Picker {
	source: Arc<dyn TemplateSource>,
	exporter: Exporter,
	catalog: Option<Catalog>,
	initial_query: Option<String>,
	input_title: Option<String>,
	theme: Option<Theme>,
	show_logs: bool,
}

impl Picker {
	pub fn new(source: Arc<dyn TemplateSource>) -> Self {
		Self {
			source,
			exporter: Exporter::default(),
			catalog: None,
			initial_query: None,
			input_title: None,
			theme: None,
			show_logs: false,
		}
	}

	pub fn with_exporter(mut self, exporter: Exporter) -> Self {
		self.exporter = exporter;
		self
	}

	/// Skip the remote listing and search this catalog instead.
	pub fn with_catalog(mut self, catalog: Catalog) -> Self {
		self.catalog = Some(catalog);
		self
	}

	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = Some(query.into());
		self
	}

	pub fn with_input_title(mut self, title: impl Into<String>) -> Self {
		self.input_title = Some(title.into());
		self
	}

	/// Unknown names leave the current theme in place.
	pub fn with_theme_name(mut self, name: &str) -> Self {
		if let Some(theme) = theme::by_name(name) {
			self.theme = Some(theme);
		}
		self
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	pub fn with_logs(mut self, show: bool) -> Self {
		self.show_logs = show;
		self
	}

	fn into_app<'a>(self) -> App<'a> {
		let mut session = Session::new(self.source, self.exporter);
		if let Some(catalog) = self.catalog {
			session.set_catalog(catalog);
		}
		if let Some(query) = self.initial_query {
			session.dispatch(SessionEvent::QueryChanged(query));
		}

		let mut app = App::new(session);
		app.set_input_title(self.input_title);
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		app.set_show_logs(self.show_logs);
		app
	}

	/// Run the picker until the user quits.
	pub fn run(self) -> Result<SessionOutcome> {
		self.into_app().run()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::session::CatalogState;
	use crate::source::memory::MemorySource;
	use crate::ui::theme::LIGHT;

	#[test]
	fn builder_applies_options_to_the_app() {
		let app = Picker::new(Arc::new(MemorySource::new()))
			.with_catalog(["Go", "Rust"].into_iter().collect())
			.with_initial_query("ru")
			.with_input_title("Templates")
			.with_theme_name("day")
			.with_logs(true)
			.into_app();

		assert_eq!(app.session.catalog_state(), CatalogState::Ready);
		assert_eq!(app.input.text(), "ru");
		assert_eq!(app.session.suggestions(), ["Rust"]);
		assert_eq!(app.input_title.as_deref(), Some("Templates"));
		assert_eq!(app.theme, LIGHT);
		assert!(app.show_logs);
	}

	#[test]
	fn unknown_theme_name_keeps_default() {
		let app = Picker::new(Arc::new(MemorySource::new()))
			.with_theme_name("neon")
			.into_app();

		assert_eq!(app.theme, Theme::default());
		assert_eq!(app.session.catalog_state(), CatalogState::NotRequested);
	}
}
