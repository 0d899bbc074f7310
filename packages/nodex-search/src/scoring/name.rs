use crate::{
	catalog::ProcessedRecord,
	scoring::{ScoreAccumulator, ScoreError},
};
use nodex_config::Weights;

/// Relevance of `record` for an already-normalized query.
///
/// Every matching condition adds its weight, so an exact name match also collects the
/// `name_contains` weight. Zero means no match.
pub fn score(
	record: &ProcessedRecord,
	normalized_query: &str,
	weights: &Weights,
) -> Result<u32, ScoreError> {
	let query = normalized_query;
	let mut score = ScoreAccumulator::default();

	score.add_if(record.normalized_name.contains(query), weights.name_contains)?;
	score.add_if(record.normalized_display_name.contains(query), weights.display_name_contains)?;
	score.add_if(record.normalized_description.contains(query), weights.description_contains)?;
	score.add_if(
		record.normalized_aliases.iter().any(|alias| alias.contains(query)),
		weights.alias_contains,
	)?;
	score.add_if(record.normalized_name == query, weights.name_exact)?;
	score.add_if(record.normalized_display_name == query, weights.display_name_exact)?;

	Ok(score.total())
}
