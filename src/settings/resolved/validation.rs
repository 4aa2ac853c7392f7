use super::{ConfigError, ConfigSources, ResolvedConfig, SourceSpec};

pub(super) fn validate(config: &ResolvedConfig, sources: &ConfigSources) -> Result<(), ConfigError> {
	match &config.source {
		SourceSpec::Url(url) | SourceSpec::UrlTemplate(url) if url.trim().is_empty() => {
			return Err(ConfigError::blank(
				"source.url",
				url.clone(),
				sources.source_for_url(),
				"must not be empty",
			));
		}
		SourceSpec::File(path) if path.as_os_str().is_empty() => {
			return Err(ConfigError::blank(
				"source.file",
				"",
				sources.source_for_file(),
				"must not be empty",
			));
		}
		_ => {}
	}

	if let Some(property) = &config.results_property
		&& property.trim().is_empty()
	{
		return Err(ConfigError::blank(
			"results.property",
			property.clone(),
			sources.source_for_property(),
			"must name a property of the response",
		));
	}

	if let Some(display) = &config.results_display
		&& display.trim().is_empty()
	{
		return Err(ConfigError::blank(
			"results.display",
			display.clone(),
			sources.source_for_display(),
			"must name a field of each result",
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::super::SettingSource;
	use super::*;

	#[test]
	fn validation_rejects_blank_url() {
		let config = ResolvedConfig::for_source(SourceSpec::Url("  ".into()));
		let sources = ConfigSources {
			source_url: Some(SettingSource::CliFlag("--url")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key(), Some("source.url"));
		assert!(err.to_string().contains("CLI flag `--url`"));
	}

	#[test]
	fn validation_rejects_blank_display_field() {
		let mut config = ResolvedConfig::for_source(SourceSpec::Inline(Vec::new()));
		config.results_display = Some(String::new());
		let sources = ConfigSources {
			results_display: Some(SettingSource::Environment("AUTOPICK__RESULTS__DISPLAY")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key(), Some("results.display"));
		assert!(err.to_string().contains("environment variable"));
	}

	#[test]
	fn validation_accepts_complete_remote_config() {
		let mut config =
			ResolvedConfig::for_source(SourceSpec::UrlTemplate("data/{query}.json".into()));
		config.results_property = Some("data".into());
		config.results_display = Some("title".into());
		assert!(validate(&config, &ConfigSources::default()).is_ok());
	}
}
