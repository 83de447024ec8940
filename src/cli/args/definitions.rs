use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};

use super::options::{LogLevelArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `ignr` binary.
#[derive(Parser, Debug)]
#[command(
	name = "ignr",
	version,
	long_version = long_version(),
	about = "Search .gitignore templates, pick several, and combine them into one file",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "IGNR_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the input prompt title (default: none)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Provide an initial search query; also filters --list (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "listing-url",
		value_name = "URL",
		help = "Endpoint returning the JSON template listing (default: GitHub contents API)"
	)]
	pub(crate) listing_url: Option<String>,
	#[arg(
		long = "template-url",
		value_name = "URL",
		help = "Template URL with a {name} placeholder (default: raw.githubusercontent.com)"
	)]
	pub(crate) template_url: Option<String>,
	#[arg(
		long,
		value_name = "SUFFIX",
		help = "Suffix stripped from listing entries (default: .gitignore)"
	)]
	pub(crate) suffix: Option<String>,
	#[arg(
		long = "user-agent",
		value_name = "AGENT",
		help = "User-Agent header sent with every request (default: ignr/<version>)"
	)]
	pub(crate) user_agent: Option<String>,
	#[arg(
		long = "timeout",
		value_name = "SECS",
		help = "Per-request timeout in seconds (default: none)"
	)]
	pub(crate) timeout_secs: Option<u64>,
	#[arg(
		long = "templates-only",
		value_parser = BoolishValueParser::new(),
		help = "Drop listing entries that are not template files (default: disabled)"
	)]
	pub(crate) templates_only: Option<bool>,
	#[arg(
		short = 'd',
		long,
		value_name = "DIR",
		help = "Directory the combined file is written to (default: current directory)"
	)]
	pub(crate) directory: Option<PathBuf>,
	#[arg(
		short = 'f',
		long = "file-name",
		value_name = "NAME",
		help = "Name of the combined file (default: combined.gitignore)"
	)]
	pub(crate) file_name: Option<String>,
	#[arg(
		long = "show-logs",
		value_parser = BoolishValueParser::new(),
		help = "Open the log pane on start (default: disabled)"
	)]
	pub(crate) show_logs: Option<bool>,
	#[arg(
		long = "log-level",
		value_enum,
		help = "Lowest log level captured in the log pane (default: info)"
	)]
	pub(crate) log_level: Option<LogLevelArg>,
	#[arg(
		long,
		conflicts_with = "select",
		help = "Print the template catalog and exit (default: disabled)"
	)]
	pub(crate) list: bool,
	#[arg(
		short = 's',
		long,
		value_delimiter = ',',
		value_name = "NAME",
		help = "Combine these templates without the UI (default: none)"
	)]
	pub(crate) select: Vec<String>,
	#[arg(
		long,
		requires = "select",
		help = "Print the combined file instead of writing it (default: disabled)"
	)]
	pub(crate) stdout: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
