use anyhow::{Context, Result};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::{build_config, config_layers, describe};
use crate::cli::CliArgs;

/// Resolve the settings for one run.
///
/// Config files merge first, then the environment, then the flags in `cli`;
/// the result must name exactly one source.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let layers = config_layers(cli);
	let mut raw: RawConfig = build_config(&layers)?
		.try_deserialize()
		.with_context(|| format!("invalid configuration in {}", describe(&layers)))?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}
