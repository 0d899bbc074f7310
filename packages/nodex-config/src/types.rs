use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
	#[serde(default)]
	pub service: Service,
	#[serde(default)]
	pub search: Search,
	#[serde(default)]
	pub registry: Registry,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	#[serde(default = "default_log_level")]
	pub log_level: String,
}
impl Default for Service {
	fn default() -> Self {
		Self { log_level: default_log_level() }
	}
}

#[derive(Clone, Debug, Deserialize)]
pub struct Search {
	#[serde(default = "default_limit")]
	pub default_limit: usize,
	/// Requested limits above this are clamped before the cache lookup.
	#[serde(default = "default_max_limit")]
	pub max_limit: usize,
	#[serde(default)]
	pub weights: Weights,
	#[serde(default)]
	pub cache: SearchCache,
}
impl Default for Search {
	fn default() -> Self {
		Self {
			default_limit: default_limit(),
			max_limit: default_max_limit(),
			weights: Weights::default(),
			cache: SearchCache::default(),
		}
	}
}

/// Additive weights for the name and connection scorers.
///
/// The defaults are the ranking that downstream agents are tuned against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Weights {
	pub name_contains: u32,
	pub display_name_contains: u32,
	pub description_contains: u32,
	pub alias_contains: u32,
	pub name_exact: u32,
	pub display_name_exact: u32,
	pub connection_exact: u32,
	pub connection_in_expression: u32,
}
impl Default for Weights {
	fn default() -> Self {
		Self {
			name_contains: 10,
			display_name_contains: 8,
			description_contains: 5,
			alias_contains: 8,
			name_exact: 20,
			display_name_exact: 15,
			connection_exact: 100,
			connection_in_expression: 50,
		}
	}
}

#[derive(Clone, Debug, Deserialize)]
pub struct SearchCache {
	#[serde(default = "default_true")]
	pub enabled: bool,
	/// Per-cache entry bound. `None` keeps every entry for the engine's lifetime.
	pub max_entries: Option<usize>,
}
impl Default for SearchCache {
	fn default() -> Self {
		Self { enabled: true, max_entries: None }
	}
}

#[derive(Debug, Default, Deserialize)]
pub struct Registry {
	/// Ordered override of the built-in connection-type list.
	pub connection_types: Option<Vec<String>>,
}

fn default_log_level() -> String {
	"info".to_string()
}

fn default_limit() -> usize {
	20
}

fn default_max_limit() -> usize {
	200
}

fn default_true() -> bool {
	true
}
