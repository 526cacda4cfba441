//! Record identifier search.
//!
//! Narrows the record list to identifiers matching a typed query.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Indices of `ids` matching `query`, best match first.
///
/// An empty query keeps every index in its original order. Equal scores keep
/// original order.
pub fn filter_ids(query: &str, ids: &[String]) -> Vec<usize> {
    let query = query.trim();
    if query.is_empty() {
        return (0..ids.len()).collect();
    }

    let matcher = SkimMatcherV2::default();
    let mut scored: Vec<(usize, i64)> = ids
        .iter()
        .enumerate()
        .filter_map(|(i, id)| matcher.fuzzy_match(id, query).map(|score| (i, score)))
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    scored.into_iter().map(|(i, _)| i).collect()
}
