//! The templates picked so far, in pick order.
//!
//! The UI draws one badge per entry and the combiner fetches them in this order.

/// Ordered set of chosen template names.
///
/// Membership is exact string equality; insertion order is kept so the
/// combined output follows the order in which templates were picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
	names: Vec<String>,
}

impl Selection {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Append `name` unless it is already selected. Returns whether it was added.
	pub fn add(&mut self, name: impl Into<String>) -> bool {
		let name = name.into();
		if self.contains(&name) {
			return false;
		}
		self.names.push(name);
		true
	}

	/// Remove every occurrence of `name`, returning how many were dropped.
	pub fn remove(&mut self, name: &str) -> usize {
		let before = self.names.len();
		self.names.retain(|selected| selected != name);
		before - self.names.len()
	}

	/// Snapshot of the current selection.
	#[must_use]
	pub fn list(&self) -> Vec<String> {
		self.names.clone()
	}

	#[must_use]
	pub fn as_slice(&self) -> &[String] {
		&self.names
	}

	#[must_use]
	pub fn contains(&self, name: &str) -> bool {
		self.names.iter().any(|selected| selected == name)
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
