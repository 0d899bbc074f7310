use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Shown to the agent when a node type ships without a description.
pub const NO_DESCRIPTION: &str = "No description available";

/// Metadata for one kind of workflow building block, as supplied by the catalog.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDescriptor {
	pub name: String,
	pub display_name: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub codex: Option<Codex>,
	/// Passed through to results untouched.
	#[serde(default)]
	pub inputs: Value,
	/// Either a list of connection-type identifiers or an expression string.
	#[serde(default)]
	pub outputs: Value,
}
impl NodeDescriptor {
	/// Reads a descriptor without failing: missing or mistyped fields fall back to empty values.
	pub fn from_value(value: &Value) -> Self {
		Self::from_value_lenient(value).0
	}

	/// Like [`Self::from_value`], also reporting the required fields that had to be defaulted.
	pub fn from_value_lenient(value: &Value) -> (Self, Vec<&'static str>) {
		let mut defaulted = Vec::new();
		let name = required_string(value, "name", &mut defaulted);
		let display_name = required_string(value, "displayName", &mut defaulted);
		let description = value.get("description").and_then(Value::as_str).map(str::to_string);
		let alias = value.get("codex").and_then(|codex| codex.get("alias")).and_then(Value::as_array);
		let codex = alias.map(|alias| Codex {
			alias: Some(alias.iter().filter_map(Value::as_str).map(str::to_string).collect()),
		});
		let inputs = value.get("inputs").cloned().unwrap_or_default();
		let outputs = value.get("outputs").cloned().unwrap_or_default();

		(Self { name, display_name, description, codex, inputs, outputs }, defaulted)
	}

	pub fn aliases(&self) -> &[String] {
		self.codex.as_ref().and_then(|codex| codex.alias.as_deref()).unwrap_or_default()
	}
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Codex {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub alias: Option<Vec<String>>,
}

/// One ranked hit handed back to the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
	pub name: String,
	pub display_name: String,
	pub description: String,
	pub inputs: Value,
	pub outputs: Value,
	pub score: u32,
}
impl SearchResult {
	pub fn new(node: &NodeDescriptor, score: u32) -> Self {
		Self {
			name: node.name.clone(),
			display_name: node.display_name.clone(),
			description: node.description.clone().unwrap_or_else(|| NO_DESCRIPTION.to_string()),
			inputs: node.inputs.clone(),
			outputs: node.outputs.clone(),
			score,
		}
	}
}

fn required_string(value: &Value, field: &'static str, defaulted: &mut Vec<&'static str>) -> String {
	match value.get(field).and_then(Value::as_str) {
		Some(text) => text.to_string(),
		None => {
			defaulted.push(field);

			String::new()
		},
	}
}
