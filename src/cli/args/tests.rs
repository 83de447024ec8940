use clap::{CommandFactory, FromArgMatches};

use super::options::LogLevelArg;
use super::{CliArgs, OutputFormat};

fn parse(args: &[&str]) -> CliArgs {
	let mut matches = CliArgs::command()
		.try_get_matches_from(args)
		.expect("arguments parse");
	CliArgs::from_arg_matches_mut(&mut matches).expect("arguments convert")
}

#[test]
fn command_supports_custom_styles() {
	let command = CliArgs::command();
	assert!(command.get_about().is_some());
	command.debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let parsed = parse(&["ignr"]);
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.select.is_empty());
	assert!(!parsed.list);
}

#[test]
fn select_splits_on_commas() {
	let parsed = parse(&["ignr", "-s", "Rust,Go", "--select", "Node", "--stdout"]);
	assert_eq!(parsed.select, vec!["Rust", "Go", "Node"]);
	assert!(parsed.stdout);
}

#[test]
fn stdout_requires_select() {
	let result = CliArgs::command().try_get_matches_from(["ignr", "--stdout"]);
	assert!(result.is_err());
}

#[test]
fn list_conflicts_with_select() {
	let result = CliArgs::command().try_get_matches_from(["ignr", "--list", "-s", "Go"]);
	assert!(result.is_err());
}

#[test]
fn boolish_and_enum_flags_parse() {
	let parsed = parse(&[
		"ignr",
		"--templates-only",
		"yes",
		"--log-level",
		"debug",
		"-o",
		"json",
	]);
	assert_eq!(parsed.templates_only, Some(true));
	assert_eq!(parsed.log_level, Some(LogLevelArg::Debug));
	assert_eq!(parsed.output, OutputFormat::Json);
}

#[test]
fn every_log_level_flag_is_a_valid_level_filter() {
	use std::str::FromStr;

	use clap::ValueEnum;
	use log::LevelFilter;

	for level in LogLevelArg::value_variants() {
		assert!(LevelFilter::from_str(level.as_str()).is_ok(), "{level:?}");
	}
}
