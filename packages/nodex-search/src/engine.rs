use std::sync::{
	Arc,
	atomic::{AtomicU64, Ordering},
};

use serde::Serialize;
use serde_json::Value;

use crate::{
	NodeDescriptor, Result, SearchResult,
	cache::{CacheKey, QueryCache, cache_key_prefix},
	catalog::{self, ProcessedRecord},
	scoring::{self, ScoreError},
};
use nodex_config::{Search, Weights};
use nodex_domain::normalize;

/// Counters describing how queries were served. Reading them never affects results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct EngineStats {
	pub name_cache_hits: u64,
	pub name_cache_misses: u64,
	pub connection_cache_hits: u64,
	pub connection_cache_misses: u64,
	pub skipped_records: u64,
	pub cache_evictions: u64,
}

#[derive(Default)]
struct Counters {
	name_cache_hits: AtomicU64,
	name_cache_misses: AtomicU64,
	connection_cache_hits: AtomicU64,
	connection_cache_misses: AtomicU64,
	skipped_records: AtomicU64,
	cache_evictions: AtomicU64,
}
impl Counters {
	fn bump(counter: &AtomicU64, by: u64) {
		counter.fetch_add(by, Ordering::Relaxed);
	}

	fn snapshot(&self) -> EngineStats {
		EngineStats {
			name_cache_hits: self.name_cache_hits.load(Ordering::Relaxed),
			name_cache_misses: self.name_cache_misses.load(Ordering::Relaxed),
			connection_cache_hits: self.connection_cache_hits.load(Ordering::Relaxed),
			connection_cache_misses: self.connection_cache_misses.load(Ordering::Relaxed),
			skipped_records: self.skipped_records.load(Ordering::Relaxed),
			cache_evictions: self.cache_evictions.load(Ordering::Relaxed),
		}
	}
}

/// In-process index over a node catalog answering name and connection-type queries.
///
/// The record snapshot is fixed at construction. The only state that changes afterwards is the
/// pair of query caches, so one engine can be shared across threads.
pub struct NodeSearchEngine {
	records: Vec<ProcessedRecord>,
	weights: Weights,
	default_limit: usize,
	max_limit: usize,
	name_cache: QueryCache,
	connection_cache: QueryCache,
	counters: Counters,
}
impl NodeSearchEngine {
	pub fn new(descriptors: Vec<NodeDescriptor>, cfg: &Search) -> Self {
		let records = catalog::preprocess(descriptors);

		tracing::info!(records = records.len(), "Node search engine built.");

		Self {
			records,
			weights: cfg.weights,
			default_limit: cfg.default_limit,
			max_limit: cfg.max_limit,
			name_cache: QueryCache::new(cfg.cache.enabled, cfg.cache.max_entries),
			connection_cache: QueryCache::new(cfg.cache.enabled, cfg.cache.max_entries),
			counters: Counters::default(),
		}
	}

	/// Builds an engine from a raw JSON catalog. Fails only when `catalog` is not an array.
	pub fn from_json(catalog: &Value, cfg: &Search) -> Result<Self> {
		Ok(Self::new(catalog::parse_catalog(catalog)?, cfg))
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	pub fn default_limit(&self) -> usize {
		self.default_limit
	}

	pub fn stats(&self) -> EngineStats {
		self.counters.snapshot()
	}

	pub fn search_by_name_default(&self, query: &str) -> Vec<SearchResult> {
		self.search_by_name(query, self.default_limit)
	}

	/// Ranks nodes whose name, display name, description or aliases contain `query`.
	///
	/// Returns at most `limit` results, where `limit` is first capped at `search.max_limit`.
	pub fn search_by_name(&self, query: &str, limit: usize) -> Vec<SearchResult> {
		let normalized_query = normalize(query);
		let limit = self.clamp_limit(limit);
		let key = CacheKey::Name { query: &normalized_query, limit }.digest();

		if let Some(cached) = self.name_cache.get(&key) {
			Counters::bump(&self.counters.name_cache_hits, 1);
			tracing::debug!(key = cache_key_prefix(&key), "Name search cache hit.");

			return cached.to_vec();
		}

		Counters::bump(&self.counters.name_cache_misses, 1);
		tracing::debug!(key = cache_key_prefix(&key), "Name search cache miss.");

		let results = self.collect(limit, |record| {
			scoring::name::score(record, &normalized_query, &self.weights)
		});

		self.store(&self.name_cache, key, &results);

		results
	}

	pub fn search_by_connection_type_default(
		&self,
		capability: &str,
		name_filter: Option<&str>,
	) -> Vec<SearchResult> {
		self.search_by_connection_type(capability, self.default_limit, name_filter)
	}

	/// Ranks nodes that output `capability`, optionally narrowed to those matching `name_filter`.
	///
	/// A filter that is empty after normalization counts as no filter. Returns at most `limit`
	/// results, where `limit` is first capped at `search.max_limit`.
	pub fn search_by_connection_type(
		&self,
		capability: &str,
		limit: usize,
		name_filter: Option<&str>,
	) -> Vec<SearchResult> {
		let normalized_filter = name_filter.map(normalize).filter(|filter| !filter.is_empty());
		let limit = self.clamp_limit(limit);
		let key = CacheKey::Connection {
			capability,
			filter: normalized_filter.as_deref().unwrap_or_default(),
			limit,
		}
		.digest();

		if let Some(cached) = self.connection_cache.get(&key) {
			Counters::bump(&self.counters.connection_cache_hits, 1);
			tracing::debug!(key = cache_key_prefix(&key), capability, "Connection search cache hit.");

			return cached.to_vec();
		}

		Counters::bump(&self.counters.connection_cache_misses, 1);
		tracing::debug!(key = cache_key_prefix(&key), capability, "Connection search cache miss.");

		let results = self.collect(limit, |record| {
			let connection_score =
				scoring::connection::score(&record.node.outputs, capability, &self.weights);

			if connection_score == 0 {
				return Ok(0);
			}

			let Some(filter) = normalized_filter.as_deref() else { return Ok(connection_score) };
			let name_score = scoring::name::score(record, filter, &self.weights)?;

			if name_score == 0 {
				return Ok(0);
			}

			connection_score
				.checked_add(name_score)
				.ok_or(ScoreError::Overflow { score: connection_score, weight: name_score })
		});

		self.store(&self.connection_cache, key, &results);

		results
	}

	fn clamp_limit(&self, limit: usize) -> usize {
		limit.min(self.max_limit)
	}

	/// Scores every record, drops zero scores and failed records, then sorts and truncates.
	fn collect<F>(&self, limit: usize, score: F) -> Vec<SearchResult>
	where
		F: Fn(&ProcessedRecord) -> Result<u32, ScoreError>,
	{
		let mut results = Vec::new();
		let mut skipped = 0_u64;

		for record in &self.records {
			match score(record) {
				Ok(0) => {},
				Ok(value) => results.push(SearchResult::new(&record.node, value)),
				Err(err) => {
					skipped += 1;

					tracing::warn!(
						name = %record.node.name,
						error = %err,
						"Skipping node that could not be scored."
					);
				},
			}
		}

		if skipped > 0 {
			Counters::bump(&self.counters.skipped_records, skipped);
		}

		sort_and_limit(&mut results, limit);

		results
	}

	fn store(&self, cache: &QueryCache, key: String, results: &[SearchResult]) {
		if !cache.is_enabled() {
			return;
		}

		let insert = cache.insert(key, Arc::from(results));

		if insert.evicted > 0 {
			Counters::bump(&self.counters.cache_evictions, insert.evicted as u64);
		}
	}
}

/// Highest score first; equal scores keep catalog order.
fn sort_and_limit(results: &mut Vec<SearchResult>, limit: usize) {
	results.sort_by(|a, b| b.score.cmp(&a.score));
	results.truncate(limit);
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::{NodeSearchEngine, sort_and_limit};
	use crate::SearchResult;
	use nodex_config::Search;

	fn result(name: &str, score: u32) -> SearchResult {
		SearchResult {
			name: name.to_string(),
			display_name: name.to_string(),
			description: String::new(),
			inputs: serde_json::Value::Null,
			outputs: serde_json::Value::Null,
			score,
		}
	}

	#[test]
	fn sort_is_stable_for_ties() {
		let mut results =
			vec![result("a", 5), result("b", 9), result("c", 5), result("d", 9), result("e", 1)];

		sort_and_limit(&mut results, 4);

		let names: Vec<_> = results.iter().map(|result| result.name.as_str()).collect();

		assert_eq!(names, vec!["b", "d", "a", "c"]);
	}

	#[test]
	fn limit_is_clamped_to_max_limit() {
		let catalog: Vec<_> = (0..10)
			.map(|index| json!({ "name": format!("node{index}"), "displayName": "Node" }))
			.collect();
		let cfg = Search { max_limit: 3, default_limit: 2, ..Search::default() };
		let engine = NodeSearchEngine::from_json(&json!(catalog), &cfg).expect("Catalog is valid.");

		assert_eq!(engine.search_by_name("node", 50).len(), 3);
		assert_eq!(engine.search_by_name_default("node").len(), 2);
	}
}
