use serde::Deserialize;
use serde_json::Value;

use crate::cli::CliArgs;

/// Committed state seeded at start plus presentation text.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) title: Option<String>,
	pub(super) query: Option<String>,
	pub(super) initial_display: Option<String>,
	pub(super) initial_value: Option<Value>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(query) = cli.query.clone() {
			self.query = Some(query);
		}
		if let Some(display) = cli.initial_display.clone() {
			self.initial_display = Some(display);
		}
		if let Some(raw) = cli.initial_value.as_deref() {
			self.initial_value = Some(parse_initial_value(raw));
		}
	}
}

/// Read `raw` as JSON when it parses, so `--initial-value 2` yields a number
/// and `--initial-value abc` a string.
pub(super) fn parse_initial_value(raw: &str) -> Value {
	serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
