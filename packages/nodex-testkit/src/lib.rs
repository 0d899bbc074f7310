//! Catalog fixtures shared by integration tests.

use serde_json::{Map, Value, json};

use nodex_config::{Search, SearchCache};

/// Builds one raw descriptor in the catalog wire format.
#[derive(Clone, Debug)]
pub struct NodeFixture {
	fields: Map<String, Value>,
}
impl NodeFixture {
	pub fn new(name: &str, display_name: &str) -> Self {
		let mut fields = Map::new();

		fields.insert("name".to_string(), Value::String(name.to_string()));
		fields.insert("displayName".to_string(), Value::String(display_name.to_string()));
		fields.insert("inputs".to_string(), json!(["main"]));
		fields.insert("outputs".to_string(), json!(["main"]));

		Self { fields }
	}

	pub fn description(mut self, description: &str) -> Self {
		self.fields.insert("description".to_string(), Value::String(description.to_string()));

		self
	}

	pub fn aliases(mut self, aliases: &[&str]) -> Self {
		self.fields.insert("codex".to_string(), json!({ "alias": aliases }));

		self
	}

	pub fn inputs(mut self, inputs: Value) -> Self {
		self.fields.insert("inputs".to_string(), inputs);

		self
	}

	pub fn outputs(mut self, outputs: Value) -> Self {
		self.fields.insert("outputs".to_string(), outputs);

		self
	}

	pub fn field(mut self, key: &str, value: Value) -> Self {
		self.fields.insert(key.to_string(), value);

		self
	}

	pub fn build(self) -> Value {
		Value::Object(self.fields)
	}
}

pub fn catalog<I>(nodes: I) -> Value
where
	I: IntoIterator<Item = NodeFixture>,
{
	Value::Array(nodes.into_iter().map(NodeFixture::build).collect())
}

/// The two-node Slack catalog used for ranking checks.
pub fn slack_catalog() -> Value {
	catalog([
		NodeFixture::new("slack", "Slack").description("Send messages to Slack channels"),
		NodeFixture::new("slackTrigger", "Slack Trigger").description("Triggers on Slack events"),
	])
}

/// A catalog of AI sub-nodes and root nodes with list, expression and missing outputs.
pub fn ai_catalog() -> Value {
	catalog([
		NodeFixture::new("lmChatOpenAi", "OpenAI Chat Model")
			.description("For advanced usage with an AI chain")
			.aliases(&["GPT", "ChatGPT"])
			.inputs(json!([]))
			.outputs(json!(["ai_languageModel"])),
		NodeFixture::new("lmChatAnthropic", "Anthropic Chat Model")
			.description("Language model by Anthropic")
			.aliases(&["Claude"])
			.inputs(json!([]))
			.outputs(json!(["ai_languageModel"])),
		NodeFixture::new("agent", "AI Agent")
			.description("Generates an action plan and executes it")
			.inputs(json!("={{ ['main', 'ai_languageModel', 'ai_tool'] }}"))
			.outputs(json!(
				"={{ $parameter.hasOutputParser ? ['main', 'ai_outputParser'] : ['main'] }}"
			)),
		NodeFixture::new("memoryBufferWindow", "Window Buffer Memory")
			.description("Stores the chat history in memory")
			.inputs(json!([]))
			.outputs(json!(["ai_memory"])),
		NodeFixture::new("toolCode", "Code Tool")
			.description("Write a tool in JS or Python")
			.inputs(json!([]))
			.outputs(json!(["ai_tool"])),
		NodeFixture::new("toolHttpRequest", "HTTP Request Tool")
			.description("Makes an HTTP request and returns the response data")
			.inputs(json!([]))
			.outputs(json!(["ai_tool"])),
		NodeFixture::new("mcpClientTool", "MCP Client Tool")
			.description("Connect tools from an MCP Server")
			.inputs(json!([]))
			.outputs(json!("={{ [{ type: 'ai_tool', displayName: 'Tools' }] }}")),
		NodeFixture::new("stickyNote", "Sticky Note").field("outputs", Value::Null),
	])
}

pub fn search_config() -> Search {
	Search::default()
}

pub fn bounded_search_config(max_entries: usize) -> Search {
	Search {
		cache: SearchCache { enabled: true, max_entries: Some(max_entries) },
		..Search::default()
	}
}

pub fn uncached_search_config() -> Search {
	Search { cache: SearchCache { enabled: false, max_entries: None }, ..Search::default() }
}
