use std::collections::BTreeMap;
use std::path::PathBuf;

use serde_json::Value;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Placeholder replaced with the query in URL templates.
pub const QUERY_PLACEHOLDER: &str = "{query}";

/// The one configured place candidates come from.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceSpec {
	/// Items given inline in a config file.
	Inline(Vec<Value>),
	/// JSON file holding an array or array-like object.
	File(PathBuf),
	/// Fixed endpoint.
	Url(String),
	/// Endpoint containing [`QUERY_PLACEHOLDER`].
	UrlTemplate(String),
}

impl SourceSpec {
	pub(crate) fn from_url(url: String) -> Self {
		if url.contains(QUERY_PLACEHOLDER) {
			Self::UrlTemplate(url)
		} else {
			Self::Url(url)
		}
	}

	pub fn is_remote(&self) -> bool {
		matches!(self, Self::Url(_) | Self::UrlTemplate(_))
	}
}

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	pub source: SourceSpec,
	pub results_property: Option<String>,
	pub results_display: Option<String>,
	pub no_results_text: Option<String>,
	pub headers: BTreeMap<String, String>,
	pub title: Option<String>,
	pub query: Option<String>,
	pub initial_display: Option<String>,
	pub initial_value: Option<Value>,
	pub log_level: Option<String>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}

#[cfg(test)]
impl ResolvedConfig {
	pub(crate) fn for_source(source: SourceSpec) -> Self {
		Self {
			source,
			results_property: None,
			results_display: None,
			no_results_text: None,
			headers: BTreeMap::new(),
			title: None,
			query: None,
			initial_display: None,
			initial_value: None,
			log_level: None,
		}
	}
}
