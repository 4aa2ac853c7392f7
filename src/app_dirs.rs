//! Where `autopick` keeps its configuration and its log file.
//!
//! Each location can be pinned through an environment variable; otherwise the
//! platform location from the `directories` crate is used.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "albo";
const APPLICATION: &str = "autopick";
const CONFIG_FILE_NAME: &str = "config.toml";

pub const CONFIG_DIR_ENV: &str = "AUTOPICK_CONFIG_DIR";
pub const CACHE_DIR_ENV: &str = "AUTOPICK_CACHE_DIR";

/// Directories the binary reads from or writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppDir {
	/// Holds `config.toml`.
	Config,
	/// Holds the log file.
	Cache,
}

impl AppDir {
	pub fn env_var(self) -> &'static str {
		match self {
			Self::Config => CONFIG_DIR_ENV,
			Self::Cache => CACHE_DIR_ENV,
		}
	}

	/// Resolve against the process environment.
	pub fn path(self) -> Result<PathBuf> {
		self.resolve_with(|name| env::var_os(name))
	}

	/// An override wins unless it is empty.
	fn resolve_with(self, lookup: impl Fn(&str) -> Option<OsString>) -> Result<PathBuf> {
		if let Some(value) = lookup(self.env_var()).filter(|value| !value.is_empty()) {
			return Ok(PathBuf::from(value));
		}

		let dirs = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
			.ok_or_else(|| anyhow!("unable to determine a home directory for autopick"))?;
		let dir = match self {
			Self::Config => dirs.config_local_dir(),
			Self::Cache => dirs.cache_dir(),
		};
		Ok(dir.to_path_buf())
	}
}

/// The user-level configuration file, loaded before project-local ones.
pub fn config_file() -> Result<PathBuf> {
	Ok(AppDir::Config.path()?.join(CONFIG_FILE_NAME))
}
