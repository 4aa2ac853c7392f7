use thiserror::Error;

use super::SettingSource;

/// A setting that survived parsing but cannot drive a picker.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
	#[error("no source configured; pass --source FILE or --url URL, or set source.items, source.file or source.url")]
	MissingSource,
	#[error("{} are all configured (last from {origin}); configure exactly one of source.items, source.file or source.url", .found.join(" + "))]
	ConflictingSources {
		found: Vec<&'static str>,
		origin: SettingSource,
	},
	#[error("{key} from {origin} {expected} (value: {value:?})")]
	Blank {
		key: &'static str,
		value: String,
		origin: SettingSource,
		expected: &'static str,
	},
}

impl ConfigError {
	pub(crate) fn blank(
		key: &'static str,
		value: impl Into<String>,
		origin: SettingSource,
		expected: &'static str,
	) -> Self {
		Self::Blank {
			key,
			value: value.into(),
			origin,
			expected,
		}
	}

	/// The setting at fault, when a single one is.
	pub(crate) fn key(&self) -> Option<&'static str> {
		match self {
			Self::Blank { key, .. } => Some(*key),
			Self::MissingSource | Self::ConflictingSources { .. } => None,
		}
	}
}
