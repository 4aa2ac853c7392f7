use std::io;

use serde_json::Value;
use thiserror::Error;

/// Configuration errors raised synchronously by the controller.
///
/// These signal a mismatch between how the controller was configured and the
/// data it was handed. They are never retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AutocompleteError {
	/// An option was given a value of a shape it cannot interpret.
	#[error("{option} must be {expected}, got {found}")]
	TypeMismatch {
		option: &'static str,
		expected: &'static str,
		found: &'static str,
	},

	/// A result lacks the field the display rule reads its label from.
	#[error("result has no '{field}' field to display")]
	MissingField { field: String },
}

impl AutocompleteError {
	pub(crate) fn type_mismatch(option: &'static str, expected: &'static str, found: &Value) -> Self {
		Self::TypeMismatch {
			option,
			expected,
			found: json_kind(found),
		}
	}

	pub(crate) fn missing_field(field: impl Into<String>) -> Self {
		Self::MissingField {
			field: field.into(),
		}
	}
}

/// Transient failures while retrieving a remote response.
///
/// The controller records these in its error state; they never propagate out
/// of [`Autocomplete::pump`](crate::Autocomplete::pump).
#[derive(Debug, Error)]
pub enum FetchError {
	#[error("failed to read {url}: {source}")]
	Io {
		url: String,
		#[source]
		source: io::Error,
	},

	#[error("request to {url} failed with status {status}")]
	Status { url: String, status: u16 },

	#[error("response from {url} is not valid JSON: {source}")]
	Decode {
		url: String,
		#[source]
		source: serde_json::Error,
	},

	#[error("unsupported request url '{url}'")]
	UnsupportedUrl { url: String },

	#[error("request worker is no longer running")]
	Disconnected,
}

/// Name the JSON shape of a value for error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}
