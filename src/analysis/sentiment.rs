// Lexicon-based sentiment counting — a pure classification pass.
//
// A document is positive-flagged if its raw text contains any positive
// keyword (case-insensitive substring, no normalization needed), and
// negative-flagged likewise; a document can be both. This is deliberately
// crude: it tracks the tone of coverage, not the tone of events.

use serde::{Deserialize, Serialize};

use super::lexicon::{NEGATIVE_WORDS, POSITIVE_WORDS};

/// Flag counts for one partition of the archive.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SentimentCounts {
    pub positive: u64,
    pub negative: u64,
    pub total: u64,
}

/// Percentages derived from the counts. Only constructible when the
/// partition is non-empty, so downstream output never divides by zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SentimentBreakdown {
    pub positive: u64,
    pub negative: u64,
    pub total: u64,
    pub pct_positive: f64,
    pub pct_negative: f64,
    /// (positive - negative) / total * 100; negative when bad news dominates.
    pub balance: f64,
}

/// Count positive- and negative-flagged documents in a corpus.
pub fn classify_sentiment(corpus: &[String]) -> SentimentCounts {
    let mut counts = SentimentCounts::default();
    for text in corpus {
        let lower = text.to_lowercase();
        if POSITIVE_WORDS.iter().any(|w| lower.contains(w)) {
            counts.positive += 1;
        }
        if NEGATIVE_WORDS.iter().any(|w| lower.contains(w)) {
            counts.negative += 1;
        }
        counts.total += 1;
    }
    counts
}

impl SentimentCounts {
    /// Derive percentages; `None` for an empty partition (the caller omits
    /// it rather than reporting NaN).
    pub fn breakdown(&self) -> Option<SentimentBreakdown> {
        if self.total == 0 {
            return None;
        }
        let total = self.total as f64;
        let positive = self.positive as f64;
        let negative = self.negative as f64;
        Some(SentimentBreakdown {
            positive: self.positive,
            negative: self.negative,
            total: self.total,
            pct_positive: positive / total * 100.0,
            pct_negative: negative / total * 100.0,
            balance: (positive - negative) / total * 100.0,
        })
    }
}
