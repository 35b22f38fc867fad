//! Fuzzy filtering of notes by search query.
//!
//! Matching is a subsequence match on folded text: both the query and each
//! candidate label are decomposed (NFD), stripped of combining marks, and
//! lowercased before being handed to the Skim matcher. `"Resume"` therefore
//! matches `"résumé"`, and `"bta"` matches `"Beta"`.
//!
//! Results keep the candidates' own order. The state machine treats the result
//! as an opaque filtered list and does not rely on any ranking.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Folds `text` for case- and diacritic-insensitive comparison.
///
/// # Examples
///
/// ```
/// use notedrill::app::filter::fold;
///
/// assert_eq!(fold("Crème Brûlée"), "creme brulee");
/// ```
#[must_use]
pub fn fold(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Returns the candidates whose label fuzzy-matches `query`, in candidate order.
///
/// An empty query matches every candidate.
///
/// # Examples
///
/// ```
/// use notedrill::app::filter::fuzzy_filter;
///
/// let notes = vec!["alpha".to_string(), "beta".to_string(), "gamma".to_string()];
/// let hits = fuzzy_filter("bta", &notes, |s| s.clone());
/// assert_eq!(hits, vec!["beta".to_string()]);
/// ```
pub fn fuzzy_filter<T, F>(query: &str, candidates: &[T], label: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> String,
{
    let _span = tracing::debug_span!(
        "fuzzy_filter",
        candidates = candidates.len(),
        query_len = query.len()
    )
    .entered();

    if query.is_empty() {
        return candidates.to_vec();
    }

    let matcher = SkimMatcherV2::default().ignore_case();
    let folded_query = fold(query);

    let hits: Vec<T> = candidates
        .iter()
        .filter(|candidate| {
            matcher
                .fuzzy_match(&fold(&label(candidate)), &folded_query)
                .is_some()
        })
        .cloned()
        .collect();

    tracing::debug!(matched = hits.len(), "fuzzy filter applied");
    hits
}

/// Computes character index ranges of `label` to highlight for `query`.
///
/// Ranges are `(start, end)` with an exclusive end, in character indices, with
/// consecutive matched characters coalesced. Folded text is used for matching
/// when folding preserves the character count; otherwise the raw label is
/// matched case-insensitively so indices still line up with what is drawn.
#[must_use]
pub fn highlight_ranges(label: &str, query: &str) -> Vec<(usize, usize)> {
    if query.is_empty() {
        return vec![];
    }

    let matcher = SkimMatcherV2::default().ignore_case();
    let folded = fold(label);
    let indices = if folded.chars().count() == label.chars().count() {
        matcher.fuzzy_indices(&folded, &fold(query))
    } else {
        matcher.fuzzy_indices(label, query)
    };

    let Some((_score, indices)) = indices else {
        return vec![];
    };

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}
