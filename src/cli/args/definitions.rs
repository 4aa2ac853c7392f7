use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{OutputFormat, parse_header};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `autopick` binary.
#[derive(Parser, Debug)]
#[command(
	name = "autopick",
	version,
	long_version = long_version(),
	about = "Search-as-you-type picker over JSON collections and endpoints",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "AUTOPICK_CONFIG",
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
		short = 's',
		long = "source",
		value_name = "FILE",
		help = "JSON file holding the items to search (array or array-like object)"
	)]
	pub(crate) source: Option<PathBuf>,
	#[arg(
		short = 'u',
		long = "url",
		value_name = "URL",
		help = "Endpoint to query; `{query}` is replaced with the typed text"
	)]
	pub(crate) url: Option<String>,
	#[arg(
		long = "results-property",
		value_name = "KEY",
		help = "Read results from this property of the response (default: whole response)"
	)]
	pub(crate) results_property: Option<String>,
	#[arg(
		short = 'd',
		long = "results-display",
		value_name = "FIELD",
		help = "Field holding each result's label (default: name)"
	)]
	pub(crate) results_display: Option<String>,
	#[arg(
		short = 'H',
		long = "header",
		value_name = "NAME=VALUE",
		value_parser = parse_header,
		action = ArgAction::Append,
		help = "Extra request header; Accept is always application/json"
	)]
	pub(crate) headers: Vec<(String, String)>,
	#[arg(
		long = "initial-display",
		value_name = "TEXT",
		help = "Label of the already committed item (default: none)"
	)]
	pub(crate) initial_display: Option<String>,
	#[arg(
		long = "initial-value",
		value_name = "JSON",
		help = "Identity of the already committed item; parsed as JSON, else kept as text"
	)]
	pub(crate) initial_value: Option<String>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Start with this query (default: the initial display)"
	)]
	pub(crate) query: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the input prompt title (default: none)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long = "no-results-text",
		value_name = "TEXT",
		help = "Text shown when a search finds nothing (default: \"No Results.\")"
	)]
	pub(crate) no_results_text: Option<String>,
	#[arg(
		short = 'l',
		long = "list",
		help = "Run one search for --query, print the labels and exit (default: disabled)"
	)]
	pub(crate) list: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Log filter written to the log file (default: warn)"
	)]
	pub(crate) log_level: Option<String>,
}
