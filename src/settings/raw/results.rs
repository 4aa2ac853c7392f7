use std::collections::BTreeMap;

use serde::Deserialize;

use crate::cli::CliArgs;

/// How responses are read and results labelled.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ResultsSection {
	pub(super) property: Option<String>,
	pub(super) display: Option<String>,
	pub(super) no_results_text: Option<String>,
}

impl ResultsSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(property) = cli.results_property.clone() {
			self.property = Some(property);
		}
		if let Some(display) = cli.results_display.clone() {
			self.display = Some(display);
		}
		if let Some(text) = cli.no_results_text.clone() {
			self.no_results_text = Some(text);
		}
	}
}

/// Extra request headers.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RequestSection {
	pub(super) headers: BTreeMap<String, String>,
}

impl RequestSection {
	/// CLI headers are merged over configured ones; names compare
	/// case-insensitively.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		for (name, value) in &cli.headers {
			self.headers
				.retain(|existing, _| !existing.eq_ignore_ascii_case(name));
			self.headers.insert(name.clone(), value.clone());
		}
	}
}
