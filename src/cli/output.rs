use anyhow::Result;
use ignr::SessionOutcome;

/// Format the outcome as `key: value` lines.
pub(crate) fn format_outcome_plain(outcome: &SessionOutcome) -> String {
	let selection = if outcome.selection.is_empty() {
		"none".to_string()
	} else {
		outcome.selection.join(", ")
	};
	let mut lines = vec![format!("selection: {selection}")];
	if let Some(label) = &outcome.label {
		lines.push(format!("label: {label}"));
	}
	if let Some(path) = &outcome.exported {
		lines.push(format!("exported: {}", path.display()));
	}
	lines.join("\n")
}

/// Print a plain-text representation of the outcome.
pub(crate) fn print_plain(outcome: &SessionOutcome) {
	println!("{}", format_outcome_plain(outcome));
}

pub(crate) fn format_outcome_json(outcome: &SessionOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

/// Print the JSON representation of the outcome.
pub(crate) fn print_json(outcome: &SessionOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use super::*;

	fn exported_outcome() -> SessionOutcome {
		SessionOutcome {
			selection: vec!["Go".into(), "Rust".into()],
			label: Some("Combined .gitignore files for: Go, Rust".into()),
			exported: Some(PathBuf::from("combined.gitignore")),
		}
	}

	#[test]
	fn plain_format_lists_every_field() {
		insta::assert_snapshot!(format_outcome_plain(&exported_outcome()), @r"
		selection: Go, Rust
		label: Combined .gitignore files for: Go, Rust
		exported: combined.gitignore
		");
	}

	#[test]
	fn plain_format_for_empty_session() {
		let outcome = SessionOutcome::default();
		assert_eq!(format_outcome_plain(&outcome), "selection: none");
	}

	#[test]
	fn json_format_serializes_outcome() {
		let json = format_outcome_json(&exported_outcome()).expect("json");
		insta::assert_snapshot!(json, @r#"
		{
		  "selection": [
		    "Go",
		    "Rust"
		  ],
		  "label": "Combined .gitignore files for: Go, Rust",
		  "exported": "combined.gitignore"
		}
		"#);
	}
}
