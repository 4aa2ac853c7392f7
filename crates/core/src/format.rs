//! Turning raw responses into results and results into labels.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::AutocompleteError;

/// Field read for a label when no display rule is configured.
pub const DEFAULT_DISPLAY_FIELD: &str = "name";

/// Custom label function.
pub type DisplayFn = Arc<dyn Fn(&Value) -> String + Send + Sync>;
/// Custom results extraction function.
pub type ResultsFn = Arc<dyn Fn(&Value) -> Vec<Value> + Send + Sync>;

/// How a result is turned into the text shown for it.
#[derive(Clone, Default)]
pub enum ResultsDisplay {
	/// Read [`DEFAULT_DISPLAY_FIELD`].
	#[default]
	Default,
	/// Read the named field.
	Field(String),
	/// Call a function with the whole item.
	Formatter(DisplayFn),
	/// A value that is neither a field name nor a function.
	Unsupported(Value),
}

impl ResultsDisplay {
	pub fn field(name: impl Into<String>) -> Self {
		Self::Field(name.into())
	}

	pub fn formatter<F>(format: F) -> Self
	where
		F: Fn(&Value) -> String + Send + Sync + 'static,
	{
		Self::Formatter(Arc::new(format))
	}

	/// Classify a configured JSON value: strings name a field, `null` keeps the
	/// default and anything else is unsupported.
	pub fn from_value(value: Value) -> Self {
		match value {
			Value::Null => Self::Default,
			Value::String(field) => Self::Field(field),
			other => Self::Unsupported(other),
		}
	}
}

impl fmt::Debug for ResultsDisplay {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Default => f.write_str("Default"),
			Self::Field(field) => f.debug_tuple("Field").field(field).finish(),
			Self::Formatter(_) => f.write_str("Formatter(..)"),
			Self::Unsupported(value) => f.debug_tuple("Unsupported").field(value).finish(),
		}
	}
}

/// Derive the label for `item`.
pub fn format_display(item: &Value, display: &ResultsDisplay) -> Result<String, AutocompleteError> {
	match display {
		ResultsDisplay::Default => field_label(item, DEFAULT_DISPLAY_FIELD),
		ResultsDisplay::Field(field) => field_label(item, field),
		ResultsDisplay::Formatter(format) => Ok(format(item)),
		ResultsDisplay::Unsupported(value) => Err(AutocompleteError::type_mismatch(
			"results_display",
			"a field name or a formatter function",
			value,
		)),
	}
}

fn field_label(item: &Value, field: &str) -> Result<String, AutocompleteError> {
	let value = item
		.as_object()
		.and_then(|record| record.get(field))
		.ok_or_else(|| AutocompleteError::missing_field(field))?;
	Ok(label_text(value))
}

fn label_text(value: &Value) -> String {
	match value {
		Value::String(text) => text.clone(),
		other => other.to_string(),
	}
}

/// How the results collection is located inside a raw response.
#[derive(Clone, Default)]
pub struct ResultsExtractor {
	property: Option<String>,
	formatter: Option<ResultsFn>,
}

impl ResultsExtractor {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_property(mut self, property: impl Into<String>) -> Self {
		self.property = Some(property.into());
		self
	}

	pub fn with_formatter<F>(mut self, formatter: F) -> Self
	where
		F: Fn(&Value) -> Vec<Value> + Send + Sync + 'static,
	{
		self.formatter = Some(Arc::new(formatter));
		self
	}

	pub fn property(&self) -> Option<&str> {
		self.property.as_deref()
	}

	pub fn has_formatter(&self) -> bool {
		self.formatter.is_some()
	}

	pub fn extract(&self, raw: &Value) -> Vec<Value> {
		extract_results(raw, self.property.as_deref(), self.formatter.as_ref())
	}
}

impl fmt::Debug for ResultsExtractor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ResultsExtractor")
			.field("property", &self.property)
			.field("formatter", &self.formatter.as_ref().map(|_| ".."))
			.finish()
	}
}

/// Pull the results out of a raw response.
///
/// A custom formatter wins outright. Otherwise the named property is read, or
/// the response itself is used when it is already an array. Any shape that
/// does not yield an array produces an empty collection.
pub fn extract_results(raw: &Value, property: Option<&str>, formatter: Option<&ResultsFn>) -> Vec<Value> {
	if let Some(formatter) = formatter {
		return formatter(raw);
	}

	let candidate = match property {
		Some(property) => raw.get(property),
		None => Some(raw),
	};

	match candidate {
		Some(Value::Array(items)) => items.clone(),
		_ => Vec::new(),
	}
}
