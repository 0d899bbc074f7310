use serde_json::json;

use nodex_config::Weights;
use nodex_search::{NO_DESCRIPTION, NodeSearchEngine, SearchResult};
use nodex_testkit::{NodeFixture, ai_catalog, catalog, search_config, slack_catalog};

fn engine(catalog: serde_json::Value) -> NodeSearchEngine {
	NodeSearchEngine::from_json(&catalog, &search_config()).expect("Fixture catalog is valid.")
}

fn names(results: &[SearchResult]) -> Vec<&str> {
	results.iter().map(|result| result.name.as_str()).collect()
}

fn scores(results: &[SearchResult]) -> Vec<u32> {
	results.iter().map(|result| result.score).collect()
}

#[test]
fn exact_name_outranks_partial_match() {
	let engine = engine(slack_catalog());
	let results = engine.search_by_name("slack", 20);

	assert_eq!(names(&results), vec!["slack", "slackTrigger"]);
	// "slack" also equals the normalized display name, which adds the display-name bonus.
	assert_eq!(scores(&results), vec![58, 23]);
}

#[test]
fn query_is_normalized_like_the_catalog() {
	let engine = engine(ai_catalog());
	let results = engine.search_by_name("ANTHRÓPIC", 20);

	assert_eq!(names(&results), vec!["lmChatAnthropic"]);
	assert_eq!(scores(&results), vec![23]);
}

#[test]
fn aliases_are_searched() {
	let engine = engine(ai_catalog());

	assert_eq!(names(&engine.search_by_name("claude", 20)), vec!["lmChatAnthropic"]);

	let gpt = engine.search_by_name("gpt", 20);

	assert_eq!(names(&gpt), vec!["lmChatOpenAi"]);
	assert_eq!(scores(&gpt), vec![8]);
}

#[test]
fn results_respect_limit_and_are_positive() {
	let engine = engine(ai_catalog());

	for limit in [0, 1, 3, 20] {
		for query in ["", "a", "tool", "chat", "nothing-matches-this"] {
			let results = engine.search_by_name(query, limit);

			assert!(results.len() <= limit, "query {query:?} limit {limit}");
			assert!(results.iter().all(|result| result.score > 0));
			assert!(results.windows(2).all(|pair| pair[0].score >= pair[1].score));
		}
	}
}

#[test]
fn equal_scores_keep_catalog_order() {
	let engine = engine(catalog([
		NodeFixture::new("zeta", "Email Zeta"),
		NodeFixture::new("alpha", "Email Alpha"),
		NodeFixture::new("emailSend", "Send Email"),
		NodeFixture::new("mid", "Email Mid"),
	]));
	let results = engine.search_by_name("email", 20);

	assert_eq!(names(&results), vec!["emailSend", "zeta", "alpha", "mid"]);
	assert_eq!(scores(&results), vec![18, 8, 8, 8]);
}

#[test]
fn missing_description_uses_placeholder() {
	let engine = engine(catalog([NodeFixture::new("noOp", "No Operation")]));
	let results = engine.search_by_name("noop", 20);

	assert_eq!(results[0].description, NO_DESCRIPTION);
	assert_eq!(results[0].inputs, json!(["main"]));
}

#[test]
fn repeated_query_is_served_from_cache() {
	let engine = engine(slack_catalog());
	let first = engine.search_by_name("Slack", 20);
	let second = engine.search_by_name("slack", 20);
	let stats = engine.stats();

	assert_eq!(first, second);
	assert_eq!(stats.name_cache_misses, 1);
	assert_eq!(stats.name_cache_hits, 1);

	engine.search_by_name("slack", 1);

	assert_eq!(engine.stats().name_cache_misses, 2);
}

#[test]
fn malformed_entries_do_not_hide_good_ones() {
	let engine = engine(json!([
		null,
		42,
		{ "name": ["slack"], "displayName": { "text": "Slack" } },
		{ "name": "slack", "displayName": "Slack", "description": "Send messages to Slack channels" },
	]));
	let results = engine.search_by_name("slack", 20);

	assert_eq!(engine.len(), 4);
	assert_eq!(names(&results), vec!["slack"]);
}

#[test]
fn records_that_fail_to_score_are_skipped() {
	let cfg = nodex_config::Search {
		weights: Weights { alias_contains: u32::MAX, ..Weights::default() },
		..search_config()
	};
	let engine =
		NodeSearchEngine::from_json(&ai_catalog(), &cfg).expect("Fixture catalog is valid.");
	let results = engine.search_by_name("chat", 20);

	assert_eq!(names(&results), vec!["lmChatAnthropic", "memoryBufferWindow"]);
	assert_eq!(scores(&results), vec![18, 5]);
	assert_eq!(engine.stats().skipped_records, 1);
}

#[test]
fn empty_catalog_returns_nothing() {
	let engine = engine(json!([]));

	assert!(engine.is_empty());
	assert!(engine.search_by_name("slack", 20).is_empty());
}

#[test]
fn non_array_catalog_is_a_construction_error() {
	assert!(NodeSearchEngine::from_json(&json!({ "nodes": [] }), &search_config()).is_err());
}
