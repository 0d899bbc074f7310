use serde_json::Value;

use crate::{Error, NodeDescriptor, Result};
use nodex_domain::normalize;

/// Searchable form of one descriptor, built once when the engine is constructed.
#[derive(Clone, Debug)]
pub struct ProcessedRecord {
	pub node: NodeDescriptor,
	pub normalized_name: String,
	pub normalized_display_name: String,
	/// Empty when the descriptor has no description.
	pub normalized_description: String,
	pub normalized_aliases: Vec<String>,
}
impl ProcessedRecord {
	pub fn new(node: NodeDescriptor) -> Self {
		let normalized_name = normalize(&node.name);
		let normalized_display_name = normalize(&node.display_name);
		let normalized_description = node.description.as_deref().map(normalize).unwrap_or_default();
		let normalized_aliases = node.aliases().iter().map(|alias| normalize(alias)).collect();

		Self {
			node,
			normalized_name,
			normalized_display_name,
			normalized_description,
			normalized_aliases,
		}
	}
}

/// Builds the record snapshot in catalog order.
pub fn preprocess(descriptors: Vec<NodeDescriptor>) -> Vec<ProcessedRecord> {
	descriptors.into_iter().map(ProcessedRecord::new).collect()
}

/// Reads a raw JSON catalog.
///
/// Only a non-array catalog is an error. Each element is read leniently, so a malformed entry
/// becomes a record with empty fields instead of aborting the whole catalog.
pub fn parse_catalog(catalog: &Value) -> Result<Vec<NodeDescriptor>> {
	let Some(entries) = catalog.as_array() else {
		return Err(Error::InvalidCatalog {
			message: format!("expected an array of node descriptors, found {}.", json_kind(catalog)),
		});
	};
	let mut descriptors = Vec::with_capacity(entries.len());

	for (index, entry) in entries.iter().enumerate() {
		let (descriptor, defaulted) = NodeDescriptor::from_value_lenient(entry);

		if !defaulted.is_empty() {
			tracing::warn!(
				index,
				name = %descriptor.name,
				fields = ?defaulted,
				"Catalog entry is missing required fields; using empty values."
			);
		}

		descriptors.push(descriptor);
	}

	Ok(descriptors)
}

fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}
