// Co-occurrence ranking — which terms show up in documents that mention a
// target term.
//
// The caller supplies the matched documents (a case-insensitive substring
// match upstream); this module counts unigrams over that subset and drops
// anything containing the target itself, so the ranking is context, not
// echo.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::normalize::normalize;
use super::vocab::{VocabParams, Vocabulary};

/// A term ranked by how often it appears alongside the target term.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CooccurringTerm {
    pub term: String,
    /// Raw summed count across the matched documents.
    pub count: u64,
}

#[derive(Debug, Clone)]
pub struct CooccurrenceParams {
    pub min_df: usize,
    pub max_features: usize,
}

impl Default for CooccurrenceParams {
    fn default() -> Self {
        Self {
            min_df: 3,
            max_features: 500,
        }
    }
}

/// Rank the terms most frequently co-occurring with `target_term` across
/// `corpus`. Zero matching documents yields an empty result.
pub fn rank_cooccurrences(
    target_term: &str,
    corpus: &[String],
    top_n: usize,
) -> Vec<CooccurringTerm> {
    rank_cooccurrences_with(target_term, corpus, top_n, &CooccurrenceParams::default())
}

pub fn rank_cooccurrences_with(
    target_term: &str,
    corpus: &[String],
    top_n: usize,
    params: &CooccurrenceParams,
) -> Vec<CooccurringTerm> {
    if corpus.is_empty() {
        debug!(term = target_term, "co-occurrence called with no matching documents");
        return Vec::new();
    }

    let texts: Vec<String> = corpus.iter().map(|t| normalize(t)).collect();
    let vocab = Vocabulary::build(
        &texts,
        &VocabParams {
            min_df: params.min_df,
            max_df: None,
            max_features: params.max_features,
            bigrams: false,
        },
    );
    if vocab.is_empty() {
        debug!(
            term = target_term,
            docs = corpus.len(),
            "co-occurrence vocabulary collapsed after filtering"
        );
        return Vec::new();
    }

    let totals = vocab.term_totals(0..texts.len());
    let target_lower = target_term.to_lowercase();

    let mut ranked: Vec<CooccurringTerm> = (0..vocab.len())
        // Exclude the target itself and any term containing it — those are
        // trivial self-matches, not context.
        .filter(|&id| !vocab.term(id).contains(&target_lower))
        .map(|id| CooccurringTerm {
            term: vocab.term(id).to_string(),
            count: totals[id],
        })
        .collect();

    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.term.cmp(&b.term)));
    ranked.truncate(top_n);
    ranked
}
