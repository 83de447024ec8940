use std::path::{Component, Path};

/// Trim names, dropping blanks and repeats while keeping first-seen order.
pub(crate) fn sanitize_names(values: Vec<String>) -> Vec<String> {
	let mut cleaned: Vec<String> = Vec::with_capacity(values.len());
	for value in values {
		let name = value.trim();
		if name.is_empty() || cleaned.iter().any(|seen| seen == name) {
			continue;
		}
		cleaned.push(name.to_string());
	}
	cleaned
}

/// Blank strings count as unset.
pub(super) fn non_blank(value: Option<String>) -> Option<String> {
	value.filter(|value| !value.trim().is_empty())
}

/// Whether `name` names a file directly, without any directory part.
pub(super) fn is_bare_file_name(name: &str) -> bool {
	let mut components = Path::new(name).components();
	matches!(
		(components.next(), components.next()),
		(Some(Component::Normal(_)), None)
	) && !name.contains(['/', '\\'])
}
