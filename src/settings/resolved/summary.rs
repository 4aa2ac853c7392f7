use super::{ResolvedConfig, SourceSpec};

pub(super) fn print_summary(config: &ResolvedConfig) {
	for line in summary_lines(config) {
		println!("{line}");
	}
}

fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let mut lines = vec!["Effective configuration:".to_string()];
	lines.push(format!("  Source: {}", describe_source(&config.source)));
	if config.source.is_remote() {
		lines.push(format!("  Debounce: {}ms", autopick::DEBOUNCE_DELAY.as_millis()));
	}
	lines.push(format!(
		"  Results property: {}",
		config.results_property.as_deref().unwrap_or("(whole response)")
	));
	lines.push(format!(
		"  Display field: {}",
		config.results_display.as_deref().unwrap_or("name")
	));
	if let Some(text) = &config.no_results_text {
		lines.push(format!("  No-results text: {text}"));
	}
	for (name, value) in &config.headers {
		lines.push(format!("  Header: {name}: {value}"));
	}
	if let Some(title) = &config.title {
		lines.push(format!("  Prompt title: {title}"));
	}
	if let Some(query) = &config.query {
		lines.push(format!("  Initial query: {query}"));
	}
	if let Some(display) = &config.initial_display {
		lines.push(format!("  Initial display: {display}"));
	}
	if let Some(value) = &config.initial_value {
		lines.push(format!("  Initial value: {value}"));
	}
	lines.push(format!(
		"  Log level: {}",
		config.log_level.as_deref().unwrap_or("(default)")
	));
	lines
}

fn describe_source(source: &SourceSpec) -> String {
	match source {
		SourceSpec::Inline(items) => format!("{} inline items", items.len()),
		SourceSpec::File(path) => format!("file {}", path.display()),
		SourceSpec::Url(url) => format!("url {url}"),
		SourceSpec::UrlTemplate(url) => format!("url template {url}"),
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn summary_names_source_and_defaults() {
		let mut config = ResolvedConfig::for_source(SourceSpec::Inline(vec![json!({"name": "a"})]));
		config.initial_value = Some(json!(2));
		let lines = summary_lines(&config);

		assert!(lines.contains(&"  Source: 1 inline items".to_string()));
		assert!(lines.contains(&"  Display field: name".to_string()));
		assert!(lines.contains(&"  Initial value: 2".to_string()));
		assert!(!lines.iter().any(|line| line.starts_with("  Debounce")));
	}

	#[test]
	fn summary_lists_headers() {
		let mut config = ResolvedConfig::for_source(SourceSpec::Url("file://x.json".into()));
		config.headers.insert("X-Token".into(), "abc".into());
		let lines = summary_lines(&config);
		assert!(lines.contains(&"  Header: X-Token: abc".to_string()));
		assert!(lines.contains(&"  Debounce: 500ms".to_string()));
	}
}
