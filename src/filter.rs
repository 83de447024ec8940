//! Case-insensitive substring filtering of the catalog.

/// Return the catalog entries containing `query`, ignoring case, in catalog
/// order. An empty query matches every entry.
#[must_use]
pub fn filter(catalog: &[String], query: &str) -> Vec<String> {
	let needle = query.to_lowercase();
	catalog
		.iter()
		.filter(|name| name.to_lowercase().contains(&needle))
		.cloned()
		.collect()
}

/// Suggestions shown for `query`: nothing for an empty query, otherwise the
/// filtered view.
#[must_use]
pub fn suggestions(catalog: &[String], query: &str) -> Vec<String> {
	if query.is_empty() {
		return Vec::new();
	}
	filter(catalog, query)
}

/// Return the filtered entry exactly equal to the trimmed `query`, if any.
#[must_use]
pub fn exact_match<'a>(filtered: &'a [String], query: &str) -> Option<&'a str> {
	let wanted = query.trim();
	filtered
		.iter()
		.find(|name| name.as_str() == wanted)
		.map(String::as_str)
}
