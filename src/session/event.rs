use super::Session;

/// Everything the UI can ask of a [`Session`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
	/// The search input now holds this text.
	QueryChanged(String),
	/// A suggestion row was picked (mouse click or `Tab`).
	SelectSuggestion(String),
	/// Enter was pressed in the search input.
	Confirm,
	/// The remove control of a badge was used.
	RemoveBadge(String),
	/// The combine trigger was used.
	Combine,
	/// The download trigger was used.
	Download,
}

impl Session {
	/// Route a UI event to its handler.
	pub fn dispatch(&mut self, event: SessionEvent) {
		match event {
			SessionEvent::QueryChanged(query) => self.set_query(query),
			SessionEvent::SelectSuggestion(name) => self.select(name),
			SessionEvent::Confirm => self.confirm(),
			SessionEvent::RemoveBadge(name) => self.remove(&name),
			SessionEvent::Combine => self.combine(),
			SessionEvent::Download => self.download(),
		}
	}
}
