// Emergence detection — terms whose usage spiked in a target period
// compared to a trailing baseline window.
//
// One vocabulary is built over the union of both corpora so term indices
// align, then each side's raw counts are normalized by its own document
// count. The score is a smoothed ratio: a term absent from the baseline gets
// a large but finite score, never a division by zero.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::normalize::normalize;
use super::vocab::{VocabParams, Vocabulary};

/// A term that spiked, with the frequencies behind the ratio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergingTerm {
    pub term: String,
    pub score: f64,
    /// Average per-document frequency in the target period.
    pub target_freq: f64,
    /// Average per-document frequency in the baseline window.
    pub baseline_freq: f64,
}

#[derive(Debug, Clone)]
pub struct EmergenceParams {
    pub min_df: usize,
    pub max_features: usize,
    /// Additive smoothing on both sides of the ratio.
    pub smoothing: f64,
    /// Minimum target-period average frequency for a term to qualify — keeps
    /// rare noise terms from dominating by ratio alone.
    pub min_target_freq: f64,
}

impl Default for EmergenceParams {
    fn default() -> Self {
        // The smoothing constant and presence floor are inherited defaults
        // with no principled derivation; they are parameters, not constants,
        // so callers can tune them.
        Self {
            min_df: 3,
            max_features: 2000,
            smoothing: 0.001,
            min_target_freq: 0.01,
        }
    }
}

/// Rank terms by how much more frequent they are in `target_corpus` than in
/// `baseline_corpus`. Either corpus being empty yields an empty result.
pub fn detect_emergence(
    target_corpus: &[String],
    baseline_corpus: &[String],
    top_n: usize,
) -> Vec<EmergingTerm> {
    detect_emergence_with(target_corpus, baseline_corpus, top_n, &EmergenceParams::default())
}

pub fn detect_emergence_with(
    target_corpus: &[String],
    baseline_corpus: &[String],
    top_n: usize,
    params: &EmergenceParams,
) -> Vec<EmergingTerm> {
    if target_corpus.is_empty() || baseline_corpus.is_empty() {
        debug!(
            target = target_corpus.len(),
            baseline = baseline_corpus.len(),
            "emergence detection needs both corpora non-empty"
        );
        return Vec::new();
    }

    // Shared vocabulary over the union so indices line up across corpora.
    let mut texts: Vec<String> = Vec::with_capacity(target_corpus.len() + baseline_corpus.len());
    texts.extend(target_corpus.iter().map(|t| normalize(t)));
    texts.extend(baseline_corpus.iter().map(|t| normalize(t)));

    let vocab = Vocabulary::build(
        &texts,
        &VocabParams {
            min_df: params.min_df,
            max_df: None,
            max_features: params.max_features,
            bigrams: true,
        },
    );
    if vocab.is_empty() {
        warn!(
            docs = texts.len(),
            min_df = params.min_df,
            "emergence vocabulary collapsed after filtering"
        );
        return Vec::new();
    }

    let split = target_corpus.len();
    let target_totals = vocab.term_totals(0..split);
    let baseline_totals = vocab.term_totals(split..texts.len());
    let n_target = target_corpus.len() as f64;
    let n_baseline = baseline_corpus.len() as f64;

    let mut emerging: Vec<EmergingTerm> = (0..vocab.len())
        .filter_map(|id| {
            let target_freq = target_totals[id] as f64 / n_target;
            if target_freq <= params.min_target_freq {
                return None;
            }
            let baseline_freq = baseline_totals[id] as f64 / n_baseline;
            let score = (target_freq + params.smoothing) / (baseline_freq + params.smoothing);
            Some(EmergingTerm {
                term: vocab.term(id).to_string(),
                score,
                target_freq,
                baseline_freq,
            })
        })
        .collect();

    emerging.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.term.cmp(&b.term))
    });
    emerging.truncate(top_n);
    emerging
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(text: &str, n: usize) -> Vec<String> {
        vec![text.to_string(); n]
    }

    #[test]
    fn test_empty_corpora_yield_empty_result() {
        assert!(detect_emergence(&[], &corpus("algo pasó aquí", 3), 10).is_empty());
        assert!(detect_emergence(&corpus("algo pasó aquí", 3), &[], 10).is_empty());
        assert!(detect_emergence(&[], &[], 10).is_empty());
    }

    #[test]
    fn test_new_term_scores_higher_than_stable_term() {
        // "zika" appears only in the target year; "puerto" is stable in both
        let target = corpus("zika zika epidemia puerto mosquitos", 5);
        let baseline = corpus("comercio puerto aduana barcos llegaron", 5);

        let ranked = detect_emergence(&target, &baseline, 20);
        let zika = ranked.iter().find(|t| t.term == "zika").expect("zika found");
        let puerto = ranked.iter().find(|t| t.term == "puerto").expect("puerto found");

        assert!(zika.score > puerto.score);
        assert!(zika.baseline_freq == 0.0);
        assert!(zika.score.is_finite(), "smoothing keeps the ratio finite");
        assert!((puerto.score - 1.0).abs() < 0.01, "stable term ratio near 1");
    }

    #[test]
    fn test_scores_nonnegative_finite_and_descending() {
        let target = corpus("elecciones fraude urnas casillas votos", 4);
        let baseline = corpus("lluvias carreteras daños puentes ríos", 4);
        let ranked = detect_emergence(&target, &baseline, 50);
        assert!(!ranked.is_empty());
        for t in &ranked {
            assert!(t.score >= 0.0 && t.score.is_finite());
        }
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_presence_floor_drops_rare_terms() {
        // "rareza" appears once across 100 target docs: freq 0.01 is not
        // above the 0.01 floor, so it cannot dominate by ratio alone
        let mut target = corpus("seguridad operativo policía estatal", 99);
        target.push("seguridad operativo rareza estatal".to_string());
        let baseline = corpus("seguridad operativo policía estatal", 50);

        let params = EmergenceParams {
            min_df: 1,
            ..EmergenceParams::default()
        };
        let ranked = detect_emergence_with(&target, &baseline, 50, &params);
        assert!(ranked.iter().all(|t| t.term != "rareza"));
        assert!(ranked.iter().all(|t| t.target_freq > params.min_target_freq));
    }
}
