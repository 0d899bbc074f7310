/// Namespace prefix reserved for AI-capability connection types.
pub const CAPABILITY_PREFIX: &str = "ai_";

/// Connection types known to the workflow runtime, in registry order.
pub const DEFAULT_CONNECTION_TYPES: [&str; 13] = [
	"ai_agent",
	"ai_chain",
	"ai_document",
	"ai_embedding",
	"ai_languageModel",
	"ai_memory",
	"ai_outputParser",
	"ai_retriever",
	"ai_reranker",
	"ai_textSplitter",
	"ai_tool",
	"ai_vectorStore",
	"main",
];

/// Ordered set of connection-type identifiers owned by the workflow runtime.
///
/// The engine only reads it. Callers hand it in explicitly instead of relying on a process-wide
/// table, so tests and deployments can swap in their own list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionTypeRegistry {
	types: Vec<String>,
}
impl ConnectionTypeRegistry {
	pub fn new<I, S>(types: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self { types: types.into_iter().map(Into::into).collect() }
	}

	pub fn builtin() -> Self {
		Self::new(DEFAULT_CONNECTION_TYPES)
	}

	pub fn types(&self) -> &[String] {
		&self.types
	}

	pub fn contains(&self, identifier: &str) -> bool {
		self.types.iter().any(|known| known == identifier)
	}
}
impl Default for ConnectionTypeRegistry {
	fn default() -> Self {
		Self::builtin()
	}
}

pub fn is_capability_connection(identifier: &str) -> bool {
	identifier.starts_with(CAPABILITY_PREFIX)
}

/// Registry entries carrying the capability prefix, in registry order.
pub fn list_capability_connections(registry: &ConnectionTypeRegistry) -> Vec<&str> {
	registry
		.types()
		.iter()
		.map(String::as_str)
		.filter(|identifier| is_capability_connection(identifier))
		.collect()
}
