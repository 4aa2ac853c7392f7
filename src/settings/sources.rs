use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use autopick::app_dirs;
use config::{Config, Environment, File};

use crate::cli::CliArgs;

const ENV_PREFIX: &str = "autopick";
const ENV_SEPARATOR: &str = "__";

/// One configuration file in the merge order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct ConfigLayer {
	pub(super) path: PathBuf,
	/// Files named with `--config` must exist; default locations may not.
	pub(super) required: bool,
}

/// Files to merge, lowest precedence first: the defaults unless
/// `--no-config`, then every `--config` in the order given.
pub(super) fn config_layers(cli: &CliArgs) -> Vec<ConfigLayer> {
	let defaults = if cli.no_config {
		Vec::new()
	} else {
		default_config_files()
	};

	defaults
		.into_iter()
		.map(|path| ConfigLayer {
			path,
			required: false,
		})
		.chain(cli.config.iter().map(|path| ConfigLayer {
			path: path.clone(),
			required: true,
		}))
		.collect()
}

/// Merge `layers` and the `AUTOPICK__SECTION__KEY` environment on top.
pub(super) fn build_config(layers: &[ConfigLayer]) -> Result<Config> {
	let builder = layers.iter().fold(Config::builder(), |builder, layer| {
		builder.add_source(File::from(layer.path.as_path()).required(layer.required))
	});

	builder
		.add_source(
			Environment::with_prefix(ENV_PREFIX)
				.prefix_separator(ENV_SEPARATOR)
				.separator(ENV_SEPARATOR)
				.try_parsing(true),
		)
		.build()
		.with_context(|| format!("failed to read configuration from {}", describe(layers)))
}

/// Layers that exist on disk, for error messages.
pub(super) fn describe(layers: &[ConfigLayer]) -> String {
	let present: Vec<_> = layers
		.iter()
		.map(|layer| layer.path.as_path())
		.filter(|path| path.exists())
		.map(Path::display)
		.map(|path| path.to_string())
		.collect();
	if present.is_empty() {
		"the environment".to_string()
	} else {
		format!("{} and the environment", present.join(", "))
	}
}

fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(path) = app_dirs::config_file() {
		files.push(path);
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".autopick.toml"));
		files.push(current_dir.join("autopick.toml"));
	}

	files
}
