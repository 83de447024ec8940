use std::fs;
use std::thread;
use std::time::{Duration, Instant};

use tempfile::tempdir;

use super::*;
use crate::combine::{FETCH_FAILED_MESSAGE, NO_SELECTION_MESSAGE};
use crate::source::memory::MemorySource;

fn session_with(source: MemorySource, exporter: Exporter) -> Session {
	let mut session = Session::new(Arc::new(source), exporter);
	session.set_catalog(Catalog::from_iter(["Python", "Node", "Jython", "Go"]));
	session
}

fn session() -> Session {
	session_with(
		MemorySource::new()
			.with_template("Python", "A")
			.with_template("Node", "B"),
		Exporter::default(),
	)
}

fn wait_for_combines(session: &mut Session) {
	let deadline = Instant::now() + Duration::from_secs(5);
	while session.is_combining() && Instant::now() < deadline {
		thread::sleep(Duration::from_millis(5));
		session.pump();
	}
	assert!(!session.is_combining(), "combine did not finish in time");
}

#[test]
fn query_drives_suggestions() {
	let mut session = session();
	session.dispatch(SessionEvent::QueryChanged("YTH".into()));
	assert_eq!(session.suggestions(), ["Python", "Jython"]);

	session.dispatch(SessionEvent::QueryChanged(String::new()));
	assert!(session.suggestions().is_empty());
	assert_eq!(session.filtered().len(), 4);
}

#[test]
fn selecting_a_suggestion_clears_query_and_suggestions() {
	let mut session = session();
	session.dispatch(SessionEvent::QueryChanged("no".into()));
	session.dispatch(SessionEvent::SelectSuggestion("Node".into()));

	assert_eq!(session.selection().list(), vec!["Node"]);
	assert_eq!(session.query(), "");
	assert!(session.suggestions().is_empty());
}

#[test]
fn confirm_requires_an_exact_filtered_match() {
	let mut session = session();
	session.dispatch(SessionEvent::QueryChanged("Pyth".into()));
	session.dispatch(SessionEvent::Confirm);
	assert!(session.selection().is_empty());
	assert_eq!(session.query(), "Pyth");

	session.dispatch(SessionEvent::QueryChanged("Python".into()));
	session.dispatch(SessionEvent::Confirm);
	assert_eq!(session.selection().list(), vec!["Python"]);
	assert_eq!(session.query(), "");
}

#[test]
fn click_then_enter_on_same_name_yields_one_badge() {
	let mut session = session();
	session.dispatch(SessionEvent::QueryChanged("go".into()));
	session.dispatch(SessionEvent::SelectSuggestion("Go".into()));
	session.dispatch(SessionEvent::QueryChanged("Go".into()));
	session.dispatch(SessionEvent::Confirm);

	assert_eq!(session.selection().list(), vec!["Go"]);
}

#[test]
fn remove_badge_drops_selection() {
	let mut session = session();
	session.dispatch(SessionEvent::SelectSuggestion("Python".into()));
	session.dispatch(SessionEvent::SelectSuggestion("Node".into()));
	session.dispatch(SessionEvent::RemoveBadge("Python".into()));
	session.dispatch(SessionEvent::RemoveBadge("Unknown".into()));

	assert_eq!(session.selection().list(), vec!["Node"]);
}

#[test]
fn combine_without_selection_shows_message_immediately() {
	let mut session = session();
	session.dispatch(SessionEvent::Combine);

	assert!(!session.is_combining());
	assert_eq!(session.buffer().text(), NO_SELECTION_MESSAGE);
	assert!(!session.buffer().is_downloadable());
}

#[test]
fn combine_fills_buffer_and_label() {
	let mut session = session();
	session.dispatch(SessionEvent::SelectSuggestion("Python".into()));
	session.dispatch(SessionEvent::SelectSuggestion("Node".into()));
	session.dispatch(SessionEvent::Combine);
	assert!(session.is_combining());
	wait_for_combines(&mut session);

	assert_eq!(session.buffer().text(), "A\n\nB");
	assert_eq!(
		session.buffer().label(),
		Some("Combined .gitignore files for: Python, Node")
	);
	assert!(session.buffer().is_downloadable());
}

#[test]
fn combine_failure_disables_download() {
	let mut session = session();
	session.dispatch(SessionEvent::SelectSuggestion("Python".into()));
	session.dispatch(SessionEvent::SelectSuggestion("Go".into()));
	session.dispatch(SessionEvent::Combine);
	wait_for_combines(&mut session);

	assert_eq!(session.buffer().text(), FETCH_FAILED_MESSAGE);
	assert!(!session.buffer().is_downloadable());
}

#[test]
fn download_writes_combined_buffer() {
	let dir = tempdir().unwrap();
	let mut session = session_with(
		MemorySource::new().with_template("Go", "bin/\n"),
		Exporter::new(dir.path(), "combined.gitignore"),
	);
	session.dispatch(SessionEvent::SelectSuggestion("Go".into()));
	session.dispatch(SessionEvent::Combine);
	wait_for_combines(&mut session);
	session.dispatch(SessionEvent::Download);

	let path = dir.path().join("combined.gitignore");
	assert_eq!(fs::read_to_string(&path).unwrap(), "bin/\n");
	assert_eq!(session.outcome().exported, Some(path));
	assert!(session.status().is_some_and(|status| status.starts_with("Saved ")));
}

#[test]
fn download_is_ignored_while_disabled() {
	let dir = tempdir().unwrap();
	let mut session = session_with(
		MemorySource::new(),
		Exporter::new(dir.path(), "combined.gitignore"),
	);
	session.dispatch(SessionEvent::Combine);
	session.dispatch(SessionEvent::Download);

	assert!(!dir.path().join("combined.gitignore").exists());
	assert_eq!(session.outcome().exported, None);
}

#[test]
fn catalog_loads_in_background() {
	let source = MemorySource::new().with_listing(["Rust", "Ruby"]);
	let mut session = Session::new(Arc::new(source), Exporter::default());
	session.dispatch(SessionEvent::QueryChanged("ru".into()));
	session.load_catalog();
	assert_eq!(session.catalog_state(), CatalogState::Loading);

	let deadline = Instant::now() + Duration::from_secs(5);
	while session.catalog_state() == CatalogState::Loading && Instant::now() < deadline {
		thread::sleep(Duration::from_millis(5));
		session.pump();
	}

	assert_eq!(session.catalog_state(), CatalogState::Ready);
	assert_eq!(session.suggestions(), ["Rust", "Ruby"]);
}

#[test]
fn catalog_failure_leaves_catalog_empty() {
	let mut session = Session::new(Arc::new(MemorySource::new()), Exporter::default());
	session.load_catalog();

	let deadline = Instant::now() + Duration::from_secs(5);
	while session.catalog_state() == CatalogState::Loading && Instant::now() < deadline {
		thread::sleep(Duration::from_millis(5));
		session.pump();
	}

	assert_eq!(session.catalog_state(), CatalogState::Unavailable);
	assert!(session.catalog().is_empty());
	session.dispatch(SessionEvent::QueryChanged("py".into()));
	assert!(session.suggestions().is_empty());
}

#[test]
fn overlapping_combines_keep_the_last_to_finish() {
	let source = MemorySource::new()
		.with_template("Slow", "slow")
		.with_template("Fast", "fast")
		.with_delay("Slow", Duration::from_millis(300));
	let mut session = session_with(source, Exporter::default());

	session.dispatch(SessionEvent::SelectSuggestion("Slow".into()));
	session.dispatch(SessionEvent::Combine);
	session.dispatch(SessionEvent::RemoveBadge("Slow".into()));
	session.dispatch(SessionEvent::SelectSuggestion("Fast".into()));
	session.dispatch(SessionEvent::Combine);
	wait_for_combines(&mut session);

	assert_eq!(session.buffer().text(), "slow");
	assert_eq!(
		session.buffer().label(),
		Some("Combined .gitignore files for: Slow")
	);
}

#[test]
fn export_notice_clears_on_the_next_combine() {
	let dir = tempdir().unwrap();
	let mut session = session_with(
		MemorySource::new().with_template("Go", "bin/\n"),
		Exporter::new(dir.path(), "combined.gitignore"),
	);
	session.dispatch(SessionEvent::SelectSuggestion("Go".into()));
	session.dispatch(SessionEvent::Combine);
	wait_for_combines(&mut session);
	session.dispatch(SessionEvent::Download);
	assert!(session.status().is_some());

	session.dispatch(SessionEvent::SelectSuggestion("Python".into()));
	session.dispatch(SessionEvent::Combine);
	assert_eq!(session.status(), None);
	wait_for_combines(&mut session);

	assert_eq!(session.buffer().text(), FETCH_FAILED_MESSAGE);
	assert_eq!(session.status(), None);
}
