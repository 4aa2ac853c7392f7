use clap::ValueEnum;

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

/// Parse a `NAME=VALUE` request header.
pub(crate) fn parse_header(raw: &str) -> Result<(String, String), String> {
	let (name, value) = raw
		.split_once('=')
		.ok_or_else(|| format!("expected NAME=VALUE, got `{raw}`"))?;
	let name = name.trim();
	if name.is_empty() {
		return Err(format!("header name is empty in `{raw}`"));
	}
	Ok((name.to_string(), value.trim().to_string()))
}
