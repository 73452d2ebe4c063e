// TF-IDF term ranking for one period.
//
// Surfaces terms distinctive to a corpus rather than merely frequent: raw
// term frequency weighted by smoothed inverse document frequency, documents
// L2-normalized so long articles don't dominate, then averaged across the
// corpus.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::normalize::normalize;
use super::vocab::{VocabParams, Vocabulary};

/// A term with its average TF-IDF weight. Scores are non-negative and only
/// comparable within the call that produced them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredTerm {
    pub term: String,
    pub score: f64,
}

/// Vocabulary filtering for TF-IDF ranking.
#[derive(Debug, Clone)]
pub struct TfidfParams {
    pub min_df: usize,
    pub max_df: Option<f64>,
    pub max_features: usize,
}

impl Default for TfidfParams {
    fn default() -> Self {
        Self {
            min_df: 5,
            max_df: Some(0.7),
            max_features: 1000,
        }
    }
}

/// Rank the top `top_n` terms of a corpus by average TF-IDF weight.
///
/// Empty corpus or a vocabulary that collapses after filtering returns an
/// empty ranking, never an error.
pub fn rank_tfidf(corpus: &[String], top_n: usize) -> Vec<ScoredTerm> {
    rank_tfidf_with(corpus, top_n, &TfidfParams::default())
}

pub fn rank_tfidf_with(corpus: &[String], top_n: usize, params: &TfidfParams) -> Vec<ScoredTerm> {
    if corpus.is_empty() {
        debug!("TF-IDF called on empty corpus");
        return Vec::new();
    }

    let texts: Vec<String> = corpus.iter().map(|t| normalize(t)).collect();
    let vocab = Vocabulary::build(
        &texts,
        &VocabParams {
            min_df: params.min_df,
            max_df: params.max_df,
            max_features: params.max_features,
            bigrams: true,
        },
    );
    if vocab.is_empty() {
        warn!(
            docs = corpus.len(),
            min_df = params.min_df,
            "TF-IDF vocabulary collapsed after filtering"
        );
        return Vec::new();
    }

    let n_docs = texts.len() as f64;

    // Smoothed IDF: ln((1 + n) / (1 + df)) + 1 — never zero, never negative.
    let idf: Vec<f64> = (0..vocab.len())
        .map(|i| ((1.0 + n_docs) / (1.0 + f64::from(vocab.doc_freq(i)))).ln() + 1.0)
        .collect();

    let mut avg = vec![0.0f64; vocab.len()];
    for vector in vocab.doc_vectors() {
        let weights: Vec<(usize, f64)> = vector
            .iter()
            .map(|&(id, count)| (id, f64::from(count) * idf[id]))
            .collect();
        let norm = weights.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (id, w) in weights {
                avg[id] += w / norm;
            }
        }
    }
    for value in &mut avg {
        *value /= n_docs;
    }

    let mut ranked: Vec<ScoredTerm> = avg
        .iter()
        .enumerate()
        .map(|(id, &score)| ScoredTerm {
            term: vocab.term(id).to_string(),
            score,
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.term.cmp(&b.term))
    });
    ranked.truncate(top_n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_corpus_yields_empty_ranking() {
        assert!(rank_tfidf(&[], 20).is_empty());
    }

    #[test]
    fn test_degenerate_vocabulary_yields_empty_ranking() {
        // Every token is a stopword or below min_df
        let corpus = vec!["el de la".to_string(), "un con por".to_string()];
        assert!(rank_tfidf(&corpus, 20).is_empty());
    }

    #[test]
    fn test_distinctive_term_outranks_ubiquitous_term() {
        // "veracruz" is in every document (low IDF); "zika" is concentrated
        let mut corpus: Vec<String> = (0..6)
            .map(|_| "veracruz puerto comercio marítimo".to_string())
            .collect();
        corpus.extend((0..4).map(|_| "veracruz zika zika epidemia mosquito".to_string()));

        let params = TfidfParams {
            min_df: 2,
            max_df: None,
            max_features: 100,
        };
        let ranked = rank_tfidf_with(&corpus, 50, &params);
        let pos = |t: &str| ranked.iter().position(|s| s.term == t);
        let zika = pos("zika").expect("zika ranked");
        let veracruz = pos("veracruz").expect("veracruz ranked");
        assert!(zika < veracruz, "zika should outrank veracruz");
    }

    #[test]
    fn test_scores_descending_and_nonnegative() {
        let corpus: Vec<String> = vec![
            "huracán daños puerto".to_string(),
            "huracán lluvias daños".to_string(),
            "elecciones votos partido".to_string(),
            "elecciones urnas votos".to_string(),
        ];
        let params = TfidfParams {
            min_df: 1,
            max_df: None,
            max_features: 100,
        };
        let ranked = rank_tfidf_with(&corpus, 100, &params);
        assert!(!ranked.is_empty());
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert!(ranked.iter().all(|s| s.score >= 0.0));
    }

    #[test]
    fn test_top_n_truncation() {
        let corpus: Vec<String> = (0..5)
            .map(|i| format!("común término{i} término{i} extra{i}"))
            .collect();
        let params = TfidfParams {
            min_df: 1,
            max_df: None,
            max_features: 100,
        };
        assert!(rank_tfidf_with(&corpus, 3, &params).len() <= 3);
    }
}
