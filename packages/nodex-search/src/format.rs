use std::borrow::Cow;

use serde_json::Value;

use crate::SearchResult;

/// Renders one result as the tagged text block the calling agent reads.
pub fn format_result(result: &SearchResult) -> String {
	format!(
		"\n\t\t<node>\n\t\t\t<node_name>{}</node_name>\n\t\t\t<node_description>{}</node_description>\n\t\t\t<node_inputs>{}</node_inputs>\n\t\t\t<node_outputs>{}</node_outputs>\n\t\t</node>",
		result.name,
		result.description,
		render_value(&result.inputs),
		render_value(&result.outputs),
	)
}

/// Concatenates the blocks of `results` in ranking order.
pub fn format_results(results: &[SearchResult]) -> String {
	results.iter().map(format_result).collect()
}

// Strings are written as-is; every other value as compact JSON.
fn render_value(value: &Value) -> Cow<'_, str> {
	match value {
		Value::String(text) => Cow::Borrowed(text.as_str()),
		other => Cow::Owned(other.to_string()),
	}
}
