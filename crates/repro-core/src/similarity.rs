//! Edit distance and candidate ranking
//!
//! Two uses: type-ahead filtering while the user is still typing, and
//! "did you mean" corrections once a value has been rejected.

/// Cap on type-ahead results so interactive lists stay readable
pub const SUGGESTION_LIMIT: usize = 20;

/// Largest edit distance still offered as a correction
pub const MAX_CORRECTION_DISTANCE: usize = 2;

/// Minimum number of single-character insertions, deletions or
/// substitutions turning `a` into `b`
pub fn edit_distance(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// A partial or rejected input together with the candidates it is matched against
#[derive(Debug, Clone, Copy)]
pub struct SuggestionQuery<'a> {
    pub input: &'a str,
    pub candidates: &'a [String],
}

impl<'a> SuggestionQuery<'a> {
    pub fn new(input: &'a str, candidates: &'a [String]) -> Self {
        Self { input, candidates }
    }

    /// Candidates containing the input (case-insensitive), in candidate order
    pub fn substring_matches(&self, limit: usize) -> Vec<String> {
        let needle = self.input.to_lowercase();
        self.candidates
            .iter()
            .filter(|candidate| candidate.to_lowercase().contains(&needle))
            .take(limit)
            .cloned()
            .collect()
    }

    /// Candidates within [`MAX_CORRECTION_DISTANCE`] edits, closest first
    ///
    /// Exact matches (distance 0) are never offered as a correction of
    /// themselves. Ties keep candidate order.
    pub fn corrections(&self, limit: usize) -> Vec<String> {
        let mut scored: Vec<(usize, &String)> = self
            .candidates
            .iter()
            .map(|candidate| (edit_distance(self.input, candidate), candidate))
            .filter(|(distance, _)| (1..=MAX_CORRECTION_DISTANCE).contains(distance))
            .collect();

        scored.sort_by_key(|(distance, _)| *distance);

        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.clone())
            .collect()
    }
}
