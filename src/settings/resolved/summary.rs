use super::ResolvedConfig;

pub(super) fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let source = &config.source;
	let mut lines = vec![
		"Effective configuration:".to_string(),
		format!("  Listing URL: {}", source.listing_url),
		format!("  Template URL: {}", source.template_url),
		format!("  Suffix: {}", source.suffix),
		format!("  User agent: {}", source.user_agent),
		match source.timeout {
			Some(timeout) => format!("  Timeout: {}s", timeout.as_secs()),
			None => "  Timeout: none".to_string(),
		},
		format!("  Templates only: {}", bool_to_word(source.templates_only)),
		format!("  Export to: {}", config.export.target().display()),
		format!(
			"  UI theme: {}",
			config
				.theme
				.as_deref()
				.unwrap_or("(use the library default)")
		),
	];
	if let Some(title) = &config.input_title {
		lines.push(format!("  Prompt title: {title}"));
	}
	if !config.initial_query.is_empty() {
		lines.push(format!("  Initial query: {}", config.initial_query));
	}
	lines.push(format!("  Show logs: {}", bool_to_word(config.show_logs)));
	lines.push(format!("  Log level: {}", config.log_level));
	lines
}

pub(super) fn print_summary(config: &ResolvedConfig) {
	for line in summary_lines(config) {
		println!("{line}");
	}
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use ignr::{Exporter, SourceOptions};
	use log::LevelFilter;

	use super::*;

	#[test]
	fn bool_to_word_matches_expectations() {
		assert_eq!(super::bool_to_word(true), "yes");
		assert_eq!(super::bool_to_word(false), "no");
	}

	#[test]
	fn summary_reports_effective_values() {
		let config = ResolvedConfig {
			source: SourceOptions {
				listing_url: "https://example.com/list".into(),
				template_url: "https://example.com/{name}.gitignore".into(),
				user_agent: "ignr-test".into(),
				timeout: Some(Duration::from_secs(5)),
				..SourceOptions::default()
			},
			export: Exporter::new("out", "team.gitignore"),
			input_title: Some("Templates".into()),
			initial_query: "ru".into(),
			theme: Some("light".into()),
			show_logs: true,
			log_level: LevelFilter::Debug,
		};

		insta::assert_snapshot!(summary_lines(&config).join("\n"), @r"
		Effective configuration:
		  Listing URL: https://example.com/list
		  Template URL: https://example.com/{name}.gitignore
		  Suffix: .gitignore
		  User agent: ignr-test
		  Timeout: 5s
		  Templates only: no
		  Export to: out/team.gitignore
		  UI theme: light
		  Prompt title: Templates
		  Initial query: ru
		  Show logs: yes
		  Log level: DEBUG
		");
	}
}
