use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;

use crate::cli::CliArgs;

/// Where candidates come from, as read from config files and environment.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SourceSection {
	/// Inline items.
	pub(super) items: Option<Vec<Value>>,
	/// JSON file holding the items.
	pub(super) file: Option<PathBuf>,
	/// Endpoint, optionally containing `{query}`.
	pub(super) url: Option<String>,
}

impl SourceSection {
	/// A source given on the command line replaces every configured one, so a
	/// config file naming a default source never conflicts with `--url`.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if cli.source.is_none() && cli.url.is_none() {
			return;
		}
		*self = Self {
			items: None,
			file: cli.source.clone(),
			url: cli.url.clone(),
		};
	}

	/// Names of the configured variants, in declaration order.
	pub(super) fn configured(&self) -> Vec<&'static str> {
		let mut configured = Vec::new();
		if self.items.is_some() {
			configured.push("source.items");
		}
		if self.file.is_some() {
			configured.push("source.file");
		}
		if self.url.is_some() {
			configured.push("source.url");
		}
		configured
	}
}
