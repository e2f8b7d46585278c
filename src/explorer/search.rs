use super::model::SearchResult;

/// Suggestions whose name contains `phrase` (case-insensitive), capped at `max`.
pub fn matching_suggestions(
	results: Vec<SearchResult>,
	phrase: &str,
	max: usize,
) -> Vec<SearchResult> {
	let needle = phrase.trim().to_lowercase();
	results
		.into_iter()
		.filter(|r| r.name().to_lowercase().contains(&needle))
		.take(max)
		.collect()
}

/// Font Awesome icon for a suggestion row.
pub fn suggestion_icon(result: &SearchResult) -> &'static str {
	if result.is_paper() {
		"fas fa-newspaper"
	} else {
		"fas fa-user"
	}
}
