//! Remote retrieval: the [`Fetcher`] seam plus the background worker that
//! runs it off the controller's event loop.

mod file;
mod runtime;
mod worker;

use serde_json::Value;

pub use file::FileFetcher;
pub(crate) use runtime::RequestRuntime;
pub(crate) use worker::RequestResponse;

use crate::error::FetchError;
use crate::source::RequestDescriptor;

/// Performs one request and parses the body as JSON.
///
/// Implementations run on the request worker thread and may block.
pub trait Fetcher: Send + Sync + 'static {
	fn fetch(&self, request: &RequestDescriptor) -> Result<Value, FetchError>;
}

impl<F> Fetcher for F
where
	F: Fn(&RequestDescriptor) -> Result<Value, FetchError> + Send + Sync + 'static,
{
	fn fetch(&self, request: &RequestDescriptor) -> Result<Value, FetchError> {
		self(request)
	}
}
