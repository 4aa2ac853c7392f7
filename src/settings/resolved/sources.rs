use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from, for error messages.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) source_items: Option<SettingSource>,
	pub(crate) source_file: Option<SettingSource>,
	pub(crate) source_url: Option<SettingSource>,
	pub(crate) results_property: Option<SettingSource>,
	pub(crate) results_display: Option<SettingSource>,
}

impl ConfigSources {
	/// Origin blamed when several sources are configured: the most specific
	/// one that was set.
	pub(crate) fn source_for_source(&self) -> SettingSource {
		self.source_url
			.clone()
			.or_else(|| self.source_file.clone())
			.or_else(|| self.source_items.clone())
			.unwrap_or(SettingSource::ConfigKey("source"))
	}

	pub(crate) fn source_for_url(&self) -> SettingSource {
		self.source_url
			.clone()
			.unwrap_or(SettingSource::ConfigKey("source.url"))
	}

	pub(crate) fn source_for_file(&self) -> SettingSource {
		self.source_file
			.clone()
			.unwrap_or(SettingSource::ConfigKey("source.file"))
	}

	pub(crate) fn source_for_property(&self) -> SettingSource {
		self.results_property
			.clone()
			.unwrap_or(SettingSource::ConfigKey("results.property"))
	}

	pub(crate) fn source_for_display(&self) -> SettingSource {
		self.results_display
			.clone()
			.unwrap_or(SettingSource::ConfigKey("results.display"))
	}
}
