//! Classification of the configured data source.
//!
//! A [`Source`] is resolved once per search: local collections are handed back
//! for synchronous filtering, remote endpoints become a URL that the request
//! runtime fetches after the debounce window.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::error::AutocompleteError;

/// Header every outgoing request carries.
pub const ACCEPT_HEADER: &str = "Accept";
/// Media type requested from remote endpoints.
pub const JSON_MEDIA_TYPE: &str = "application/json";

const LENGTH_KEY: &str = "length";

/// Builds a request URL from the current query.
pub type UrlBuilder = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Where search candidates come from.
#[derive(Clone)]
pub enum Source {
	/// An ordered collection filtered in memory.
	Collection(Vec<Value>),
	/// An object exposing `length` plus integer-indexed entries.
	ArrayLike(Map<String, Value>),
	/// A fixed endpoint URL.
	Url(String),
	/// A function producing the endpoint URL for a query.
	UrlBuilder(UrlBuilder),
	/// Anything else. Searching with it fails with a type mismatch.
	Unsupported(Value),
}

/// Outcome of resolving a [`Source`] for one search.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedSource<'a> {
	Local(Cow<'a, [Value]>),
	Remote(String),
}

impl Source {
	pub fn collection(items: impl IntoIterator<Item = Value>) -> Self {
		Self::Collection(items.into_iter().collect())
	}

	pub fn url(url: impl Into<String>) -> Self {
		Self::Url(url.into())
	}

	pub fn url_builder<F>(builder: F) -> Self
	where
		F: Fn(&str) -> String + Send + Sync + 'static,
	{
		Self::UrlBuilder(Arc::new(builder))
	}

	/// Classify a JSON value by shape.
	pub fn from_value(value: Value) -> Self {
		match value {
			Value::Array(items) => Self::Collection(items),
			Value::String(url) => Self::Url(url),
			Value::Object(map) if array_like_len(&map).is_some() => Self::ArrayLike(map),
			other => Self::Unsupported(other),
		}
	}

	pub fn is_remote(&self) -> bool {
		matches!(self, Self::Url(_) | Self::UrlBuilder(_))
	}

	/// Resolve the source for `query`.
	///
	/// URL builders are invoked here, once per call.
	pub fn resolve(&self, query: &str) -> Result<ResolvedSource<'_>, AutocompleteError> {
		match self {
			Self::Collection(items) => Ok(ResolvedSource::Local(Cow::Borrowed(items))),
			Self::ArrayLike(map) => Ok(ResolvedSource::Local(Cow::Owned(array_like_items(map)))),
			Self::Url(url) => Ok(ResolvedSource::Remote(url.clone())),
			Self::UrlBuilder(builder) => Ok(ResolvedSource::Remote(builder(query))),
			Self::Unsupported(value) => Err(AutocompleteError::type_mismatch(
				"source",
				"a collection, a url or a url builder",
				value,
			)),
		}
	}
}

impl From<Value> for Source {
	fn from(value: Value) -> Self {
		Self::from_value(value)
	}
}

impl From<Vec<Value>> for Source {
	fn from(items: Vec<Value>) -> Self {
		Self::Collection(items)
	}
}

impl fmt::Debug for Source {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Collection(items) => f.debug_tuple("Collection").field(&items.len()).finish(),
			Self::ArrayLike(map) => f
				.debug_tuple("ArrayLike")
				.field(&array_like_len(map))
				.finish(),
			Self::Url(url) => f.debug_tuple("Url").field(url).finish(),
			Self::UrlBuilder(_) => f.write_str("UrlBuilder(..)"),
			Self::Unsupported(value) => f.debug_tuple("Unsupported").field(value).finish(),
		}
	}
}

fn array_like_len(map: &Map<String, Value>) -> Option<usize> {
	map.get(LENGTH_KEY)
		.and_then(Value::as_u64)
		.and_then(|len| usize::try_from(len).ok())
}

/// Entries `0..length` in order. Holes are skipped; only keys actually
/// present are visited, so `length` never drives the work done.
fn array_like_items(map: &Map<String, Value>) -> Vec<Value> {
	let len = array_like_len(map).unwrap_or(0);
	let mut indexed: Vec<(usize, &Value)> = map
		.iter()
		.filter_map(|(key, value)| {
			let index = key.parse::<usize>().ok()?;
			(index < len && index.to_string() == *key).then_some((index, value))
		})
		.collect();
	indexed.sort_unstable_by_key(|(index, _)| *index);
	indexed.into_iter().map(|(_, value)| value.clone()).collect()
}

/// A single remote request: the resolved URL plus merged headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
	pub url: String,
	pub headers: BTreeMap<String, String>,
}

impl RequestDescriptor {
	/// Merge user headers over the defaults. `Accept` always asks for JSON.
	pub fn new(url: impl Into<String>, user_headers: &BTreeMap<String, String>) -> Self {
		let mut headers: BTreeMap<String, String> = user_headers
			.iter()
			.filter(|(name, _)| !name.eq_ignore_ascii_case(ACCEPT_HEADER))
			.map(|(name, value)| (name.clone(), value.clone()))
			.collect();
		headers.insert(ACCEPT_HEADER.to_string(), JSON_MEDIA_TYPE.to_string());
		Self {
			url: url.into(),
			headers,
		}
	}

	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(key, _)| key.eq_ignore_ascii_case(name))
			.map(|(_, value)| value.as_str())
	}
}
