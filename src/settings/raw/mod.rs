use std::env;

use anyhow::Result;
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigError, ConfigSources, ResolvedConfig, SettingSource, SourceSpec};

mod results;
mod source;
mod ui;

use results::{RequestSection, ResultsSection};
use source::SourceSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	source: SourceSection,
	results: ResultsSection,
	request: RequestSection,
	ui: UiSection,
	log: LogSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LogSection {
	level: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.source.apply_cli_overrides(cli);
		self.results.apply_cli_overrides(cli);
		self.request.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		if let Some(level) = cli.log_level.clone() {
			self.log.level = Some(level);
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			source_items: self
				.source
				.items
				.is_some()
				.then_some(SettingSource::ConfigKey("source.items")),
			source_file: detect_source(
				cli.source.is_some(),
				self.source.file.is_some(),
				"AUTOPICK__SOURCE__FILE",
				"--source",
				"source.file",
			),
			source_url: detect_source(
				cli.url.is_some(),
				self.source.url.is_some(),
				"AUTOPICK__SOURCE__URL",
				"--url",
				"source.url",
			),
			results_property: detect_source(
				cli.results_property.is_some(),
				self.results.property.is_some(),
				"AUTOPICK__RESULTS__PROPERTY",
				"--results-property",
				"results.property",
			),
			results_display: detect_source(
				cli.results_display.is_some(),
				self.results.display.is_some(),
				"AUTOPICK__RESULTS__DISPLAY",
				"--results-display",
				"results.display",
			),
		};

		let configured = self.source.configured();
		let SourceSection { items, file, url } = self.source;
		let source = match (items, file, url) {
			(Some(items), None, None) => SourceSpec::Inline(items),
			(None, Some(file), None) => SourceSpec::File(file),
			(None, None, Some(url)) => SourceSpec::from_url(url),
			(None, None, None) => return Err(ConfigError::MissingSource.into()),
			_ => {
				return Err(ConfigError::ConflictingSources {
					found: configured,
					origin: sources.source_for_source(),
				}
				.into());
			}
		};

		let config = ResolvedConfig {
			source,
			results_property: self.results.property,
			results_display: self.results.display,
			no_results_text: self.results.no_results_text,
			headers: self.request.headers,
			title: self.ui.title,
			query: self.ui.query,
			initial_display: self.ui.initial_display,
			initial_value: self.ui.initial_value,
			log_level: self.log.level,
		};

		config.validate(&sources)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
