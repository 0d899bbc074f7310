use std::{
	collections::VecDeque,
	sync::{Arc, Mutex},
};

use ahash::AHashMap;
use serde_json::Value;

use crate::SearchResult;

const CACHE_KEY_SCHEMA_VERSION: i32 = 1;

/// Query signature under which a result list is cached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheKey<'a> {
	Name { query: &'a str, limit: usize },
	/// `filter` is the normalized name filter, or empty when none was given.
	Connection { capability: &'a str, filter: &'a str, limit: usize },
}
impl CacheKey<'_> {
	pub fn payload(&self) -> Value {
		match *self {
			Self::Name { query, limit } => serde_json::json!({
				"kind": "name",
				"schema_version": CACHE_KEY_SCHEMA_VERSION,
				"query": query,
				"limit": limit,
			}),
			Self::Connection { capability, filter, limit } => serde_json::json!({
				"kind": "connection",
				"schema_version": CACHE_KEY_SCHEMA_VERSION,
				"capability": capability,
				"filter": filter,
				"limit": limit,
			}),
		}
	}

	/// Stable digest of the payload. Field boundaries survive any characters in the query.
	pub fn digest(&self) -> String {
		blake3::hash(self.payload().to_string().as_bytes()).to_hex().to_string()
	}
}

pub fn cache_key_prefix(key: &str) -> &str {
	let len = key.len().min(12);

	&key[..len]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheInsert {
	pub evicted: usize,
}

#[derive(Default)]
struct Entries {
	map: AHashMap<String, Arc<[SearchResult]>>,
	order: VecDeque<String>,
}

/// Read-through cache for one query kind.
///
/// Unbounded unless `max_entries` is set, in which case the oldest key is evicted first.
/// Concurrent misses on the same key may both compute; the later insert overwrites an
/// identical value.
pub struct QueryCache {
	enabled: bool,
	max_entries: Option<usize>,
	entries: Mutex<Entries>,
}
impl QueryCache {
	pub fn new(enabled: bool, max_entries: Option<usize>) -> Self {
		Self { enabled, max_entries, entries: Mutex::new(Entries::default()) }
	}

	pub fn is_enabled(&self) -> bool {
		self.enabled
	}

	pub fn get(&self, key: &str) -> Option<Arc<[SearchResult]>> {
		if !self.enabled {
			return None;
		}

		let entries = self.entries.lock().unwrap_or_else(|err| err.into_inner());

		entries.map.get(key).cloned()
	}

	pub fn insert(&self, key: String, results: Arc<[SearchResult]>) -> CacheInsert {
		if !self.enabled {
			return CacheInsert { evicted: 0 };
		}

		let mut entries = self.entries.lock().unwrap_or_else(|err| err.into_inner());

		if entries.map.insert(key.clone(), results).is_some() {
			return CacheInsert { evicted: 0 };
		}

		entries.order.push_back(key);

		let mut evicted = 0;

		if let Some(max) = self.max_entries {
			while entries.order.len() > max {
				let Some(oldest) = entries.order.pop_front() else { break };

				entries.map.remove(&oldest);

				evicted += 1;
			}
		}

		CacheInsert { evicted }
	}

	pub fn len(&self) -> usize {
		self.entries.lock().unwrap_or_else(|err| err.into_inner()).map.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use super::{CacheKey, QueryCache, cache_key_prefix};
	use crate::SearchResult;

	fn results(names: &[&str]) -> Arc<[SearchResult]> {
		names
			.iter()
			.map(|name| SearchResult {
				name: name.to_string(),
				display_name: name.to_string(),
				description: String::new(),
				inputs: serde_json::Value::Null,
				outputs: serde_json::Value::Null,
				score: 1,
			})
			.collect()
	}

	#[test]
	fn digests_separate_fields_unambiguously() {
		let a = CacheKey::Connection { capability: "ai_tool|x", filter: "", limit: 20 };
		let b = CacheKey::Connection { capability: "ai_tool", filter: "x", limit: 20 };

		assert_ne!(a.digest(), b.digest());
	}

	#[test]
	fn digest_depends_on_kind_and_limit() {
		let name = CacheKey::Name { query: "slack", limit: 20 };

		assert_eq!(name.digest(), CacheKey::Name { query: "slack", limit: 20 }.digest());
		assert_ne!(name.digest(), CacheKey::Name { query: "slack", limit: 5 }.digest());
		assert_ne!(
			name.digest(),
			CacheKey::Connection { capability: "slack", filter: "", limit: 20 }.digest()
		);
		assert_eq!(cache_key_prefix(&name.digest()).len(), 12);
	}

	#[test]
	fn returns_what_was_stored() {
		let cache = QueryCache::new(true, None);

		assert!(cache.get("k").is_none());

		cache.insert("k".to_string(), results(&["slack"]));

		let hit = cache.get("k").expect("Entry should be cached.");

		assert_eq!(hit[0].name, "slack");
		assert_eq!(cache.len(), 1);
	}

	#[test]
	fn bounded_cache_evicts_oldest_first() {
		let cache = QueryCache::new(true, Some(2));

		assert_eq!(cache.insert("a".to_string(), results(&["a"])).evicted, 0);
		assert_eq!(cache.insert("b".to_string(), results(&["b"])).evicted, 0);
		assert_eq!(cache.insert("c".to_string(), results(&["c"])).evicted, 1);

		assert!(cache.get("a").is_none());
		assert!(cache.get("b").is_some());
		assert!(cache.get("c").is_some());
	}

	#[test]
	fn overwriting_a_key_does_not_evict() {
		let cache = QueryCache::new(true, Some(1));

		cache.insert("a".to_string(), results(&["a"]));

		assert_eq!(cache.insert("a".to_string(), results(&["a2"])).evicted, 0);
		assert_eq!(cache.get("a").expect("Entry should be cached.")[0].name, "a2");
	}

	#[test]
	fn disabled_cache_stores_nothing() {
		let cache = QueryCache::new(false, None);

		cache.insert("a".to_string(), results(&["a"]));

		assert!(cache.get("a").is_none());
		assert!(cache.is_empty());
	}
}
