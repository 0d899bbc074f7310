use serde_json::Value;

use nodex_config::Weights;

/// The shapes a descriptor's `outputs` can take.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OutputShape<'a> {
	/// Ordered connection-type identifiers. Non-string entries never match.
	List(&'a [Value]),
	/// An expression that computes the outputs at runtime.
	Expression(&'a str),
	Unrecognized,
}
impl<'a> OutputShape<'a> {
	pub fn of(outputs: &'a Value) -> Self {
		match outputs {
			Value::Array(items) => Self::List(items),
			Value::String(expression) => Self::Expression(expression),
			_ => Self::Unrecognized,
		}
	}
}

/// How well `outputs` provides `capability`: list membership beats a mention inside an
/// expression, anything else scores zero.
pub fn score(outputs: &Value, capability: &str, weights: &Weights) -> u32 {
	match OutputShape::of(outputs) {
		OutputShape::List(items) if items.iter().any(|item| item.as_str() == Some(capability)) =>
			weights.connection_exact,
		OutputShape::Expression(expression) if expression.contains(capability) =>
			weights.connection_in_expression,
		_ => 0,
	}
}
