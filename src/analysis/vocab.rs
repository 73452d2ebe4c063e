// Vocabulary building — turns normalized texts into a fixed term list plus
// sparse per-document count vectors.
//
// No dense matrix: each document is a list of (term index, count) pairs, and
// corpus statistics (document frequency, total frequency) come from a single
// pass over those pairs. At this data scale that is cheaper and simpler than
// a vectorizer matrix.

use std::collections::HashMap;

use super::lexicon::is_stopword;

/// Filtering knobs for vocabulary construction.
#[derive(Debug, Clone)]
pub struct VocabParams {
    /// A term must appear in at least this many distinct documents.
    pub min_df: usize,
    /// A term appearing in more than this fraction of documents is dropped.
    /// `None` disables the ceiling (count-based modes keep frequent terms).
    pub max_df: Option<f64>,
    /// Cap on distinct terms, keeping the highest total frequency.
    pub max_features: usize,
    /// Include adjacent bigrams alongside unigrams.
    pub bigrams: bool,
}

/// A fixed vocabulary over one corpus. Term indices are only meaningful
/// within the `Vocabulary` that produced them — nothing is persisted or
/// shared across analysis calls.
pub struct Vocabulary {
    /// Terms in alphabetical order; index into this list is the term id.
    terms: Vec<String>,
    /// Documents containing each term at least once.
    doc_freq: Vec<u32>,
    /// One sparse (term id, count) vector per input document, ids ascending.
    doc_vectors: Vec<Vec<(usize, u32)>>,
}

impl Vocabulary {
    /// Build a vocabulary from normalized texts.
    ///
    /// Tokens are whitespace-split, must be at least two characters, and
    /// stopwords are removed before n-grams are formed — so a bigram joins
    /// two surviving tokens that ended up adjacent after filtering.
    pub fn build(texts: &[String], params: &VocabParams) -> Self {
        let n_docs = texts.len();

        // Per-document term counts.
        let mut doc_counts: Vec<HashMap<String, u32>> = Vec::with_capacity(n_docs);
        for text in texts {
            let tokens: Vec<&str> = text
                .split_whitespace()
                .filter(|t| t.chars().count() >= 2 && !is_stopword(t))
                .collect();

            let mut counts: HashMap<String, u32> = HashMap::new();
            for token in &tokens {
                *counts.entry((*token).to_string()).or_insert(0) += 1;
            }
            if params.bigrams {
                for pair in tokens.windows(2) {
                    *counts.entry(format!("{} {}", pair[0], pair[1])).or_insert(0) += 1;
                }
            }
            doc_counts.push(counts);
        }

        // Corpus-wide document frequency and total frequency.
        let mut df: HashMap<&str, u32> = HashMap::new();
        let mut tf_total: HashMap<&str, u64> = HashMap::new();
        for counts in &doc_counts {
            for (term, count) in counts {
                *df.entry(term.as_str()).or_insert(0) += 1;
                *tf_total.entry(term.as_str()).or_insert(0) += u64::from(*count);
            }
        }

        // Document-frequency floor and ceiling.
        let mut retained: Vec<&str> = df
            .iter()
            .filter(|(_, &d)| {
                if (d as usize) < params.min_df {
                    return false;
                }
                match params.max_df {
                    Some(max_df) => f64::from(d) / n_docs as f64 <= max_df,
                    None => true,
                }
            })
            .map(|(&term, _)| term)
            .collect();

        // Vocabulary cap: keep the highest total frequency, ties alphabetical.
        if retained.len() > params.max_features {
            retained.sort_by(|a, b| tf_total[b].cmp(&tf_total[a]).then_with(|| a.cmp(b)));
            retained.truncate(params.max_features);
        }
        retained.sort_unstable();

        let terms: Vec<String> = retained.iter().map(|t| t.to_string()).collect();
        let index: HashMap<&str, usize> = retained
            .iter()
            .enumerate()
            .map(|(i, &t)| (t, i))
            .collect();
        let doc_freq: Vec<u32> = retained.iter().map(|t| df[t]).collect();

        let doc_vectors: Vec<Vec<(usize, u32)>> = doc_counts
            .iter()
            .map(|counts| {
                let mut vector: Vec<(usize, u32)> = counts
                    .iter()
                    .filter_map(|(term, &count)| {
                        index.get(term.as_str()).map(|&i| (i, count))
                    })
                    .collect();
                vector.sort_unstable_by_key(|&(i, _)| i);
                vector
            })
            .collect();

        Vocabulary {
            terms,
            doc_freq,
            doc_vectors,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn term(&self, id: usize) -> &str {
        &self.terms[id]
    }

    /// Number of documents containing the term at least once.
    pub fn doc_freq(&self, id: usize) -> u32 {
        self.doc_freq[id]
    }

    pub fn doc_vectors(&self) -> &[Vec<(usize, u32)>] {
        &self.doc_vectors
    }

    /// Total count of each term summed over a range of documents.
    pub fn term_totals(&self, doc_range: std::ops::Range<usize>) -> Vec<u64> {
        let mut totals = vec![0u64; self.terms.len()];
        for vector in &self.doc_vectors[doc_range] {
            for &(id, count) in vector {
                totals[id] += u64::from(count);
            }
        }
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    fn params(min_df: usize) -> VocabParams {
        VocabParams {
            min_df,
            max_df: None,
            max_features: 100,
            bigrams: false,
        }
    }

    #[test]
    fn test_min_df_floor() {
        let corpus = docs(&["duarte huyó", "duarte cayó", "clima templado"]);
        let vocab = Vocabulary::build(&corpus, &params(2));
        assert_eq!(vocab.len(), 1);
        assert_eq!(vocab.term(0), "duarte");
        assert_eq!(vocab.doc_freq(0), 2);
    }

    #[test]
    fn test_max_df_ceiling() {
        let corpus = docs(&["duarte gobierno", "duarte huracán", "duarte clima", "duarte puerto"]);
        let p = VocabParams {
            min_df: 1,
            max_df: Some(0.7),
            max_features: 100,
            bigrams: false,
        };
        let vocab = Vocabulary::build(&corpus, &p);
        // "duarte" is in 100% of documents, above the 0.7 ceiling
        assert!(!(0..vocab.len()).any(|i| vocab.term(i) == "duarte"));
        assert!((0..vocab.len()).any(|i| vocab.term(i) == "huracán"));
    }

    #[test]
    fn test_stopwords_and_short_tokens_excluded() {
        let corpus = docs(&["el puerto de veracruz y la niebla", "el puerto y la bruma"]);
        let vocab = Vocabulary::build(&corpus, &params(1));
        let terms: Vec<&str> = (0..vocab.len()).map(|i| vocab.term(i)).collect();
        assert!(terms.contains(&"puerto"));
        assert!(!terms.contains(&"el"));
        assert!(!terms.contains(&"de"));
        assert!(!terms.contains(&"y"));
    }

    #[test]
    fn test_bigrams_join_surviving_tokens() {
        let corpus = docs(&["crimen organizado creció", "crimen organizado mató"]);
        let p = VocabParams {
            min_df: 2,
            max_df: None,
            max_features: 100,
            bigrams: true,
        };
        let vocab = Vocabulary::build(&corpus, &p);
        let terms: Vec<&str> = (0..vocab.len()).map(|i| vocab.term(i)).collect();
        assert!(terms.contains(&"crimen organizado"));
    }

    #[test]
    fn test_max_features_keeps_most_frequent() {
        let corpus = docs(&[
            "puerto puerto puerto niebla",
            "puerto puerto niebla bruma",
        ]);
        let p = VocabParams {
            min_df: 1,
            max_df: None,
            max_features: 1,
            bigrams: false,
        };
        let vocab = Vocabulary::build(&corpus, &p);
        assert_eq!(vocab.len(), 1);
        assert_eq!(vocab.term(0), "puerto");
    }

    #[test]
    fn test_terms_alphabetical_and_vectors_sorted() {
        let corpus = docs(&["zona huracán alerta", "zona huracán alerta"]);
        let vocab = Vocabulary::build(&corpus, &params(1));
        let terms: Vec<&str> = (0..vocab.len()).map(|i| vocab.term(i)).collect();
        let mut sorted = terms.clone();
        sorted.sort_unstable();
        assert_eq!(terms, sorted);
        for vector in vocab.doc_vectors() {
            for pair in vector.windows(2) {
                assert!(pair[0].0 < pair[1].0);
            }
        }
    }

    #[test]
    fn test_empty_corpus() {
        let vocab = Vocabulary::build(&[], &params(1));
        assert!(vocab.is_empty());
        assert!(vocab.doc_vectors().is_empty());
    }

    #[test]
    fn test_term_totals_by_range() {
        let corpus = docs(&["zika zika", "zika", "calma"]);
        let vocab = Vocabulary::build(&corpus, &params(1));
        let zika = (0..vocab.len()).find(|&i| vocab.term(i) == "zika").unwrap();
        let totals = vocab.term_totals(0..2);
        assert_eq!(totals[zika], 3);
        let tail = vocab.term_totals(2..3);
        assert_eq!(tail[zika], 0);
    }
}
