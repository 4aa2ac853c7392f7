use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::Fetcher;
use crate::error::FetchError;
use crate::source::RequestDescriptor;

const FILE_SCHEME: &str = "file://";

/// Serves requests from JSON files on disk.
///
/// Accepts `file://` URLs and bare paths; relative paths resolve against the
/// base directory when one is set. Headers are ignored.
#[derive(Debug, Default, Clone)]
pub struct FileFetcher {
	base_dir: Option<PathBuf>,
}

impl FileFetcher {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
		self.base_dir = Some(dir.into());
		self
	}

	fn path_for(&self, url: &str) -> Result<PathBuf, FetchError> {
		let raw = match url.strip_prefix(FILE_SCHEME) {
			Some(path) => path,
			None if url.contains("://") => {
				return Err(FetchError::UnsupportedUrl {
					url: url.to_string(),
				});
			}
			None => url,
		};

		let path = Path::new(raw);
		match &self.base_dir {
			Some(base) if path.is_relative() => Ok(base.join(path)),
			_ => Ok(path.to_path_buf()),
		}
	}
}

impl Fetcher for FileFetcher {
	fn fetch(&self, request: &RequestDescriptor) -> Result<Value, FetchError> {
		let path = self.path_for(&request.url)?;
		let body = fs::read_to_string(&path).map_err(|source| FetchError::Io {
			url: request.url.clone(),
			source,
		})?;
		serde_json::from_str(&body).map_err(|source| FetchError::Decode {
			url: request.url.clone(),
			source,
		})
	}
}
