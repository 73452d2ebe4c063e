// Candidate-name extraction — a capitalization heuristic standing in for
// real named-entity recognition.
//
// Runs over raw text (title + body), not normalized text: case is the whole
// signal. Two adjacent capitalized words form a candidate; a three-word run
// like "Miguel Ángel Yunes" yields both "Miguel Ángel" and "Ángel Yunes".
// False positives are expected — the contract is reproducibility of the
// heuristic, not accuracy.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Uppercase first letter (accented vowels and Ñ included), lowercase rest,
/// then whitespace, then a second word of the same shape.
static NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b([A-ZÁÉÍÓÚÑ][a-záéíóúñ]+)\s+([A-ZÁÉÍÓÚÑ][a-záéíóúñ]+)\b").unwrap()
});

/// A likely person or organization name with its mention count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateName {
    pub name: String,
    pub mentions: u64,
}

/// Extract candidate names from `(title, body)` pairs, ranked by frequency.
///
/// Candidates in `false_positives` are discarded, as are pairs where either
/// word has two characters or fewer (prepositions and particles slip through
/// the capitalization pattern otherwise).
pub fn extract_candidate_names(
    documents: &[(String, String)],
    false_positives: &HashSet<String>,
    top_n: usize,
) -> Vec<CandidateName> {
    let mut counts: HashMap<String, u64> = HashMap::new();

    for (title, body) in documents {
        let text = format!("{title} {body}");
        let mut at = 0;
        while let Some(caps) = NAME_RE.captures_at(&text, at) {
            let first = caps.get(1).map_or("", |m| m.as_str());
            let second = caps.get(2).map_or("", |m| m.as_str());

            if first.chars().count() > 2 && second.chars().count() > 2 {
                let name = format!("{first} {second}");
                if !false_positives.contains(&name) {
                    *counts.entry(name).or_insert(0) += 1;
                }
            }

            // Resume at the second word so overlapping pairs are counted.
            at = caps.get(2).map_or(text.len(), |m| m.start());
            if at >= text.len() {
                break;
            }
        }
    }

    let mut ranked: Vec<CandidateName> = counts
        .into_iter()
        .map(|(name, mentions)| CandidateName { name, mentions })
        .collect();
    ranked.sort_by(|a, b| b.mentions.cmp(&a.mentions).then_with(|| a.name.cmp(&b.name)));
    ranked.truncate(top_n);
    ranked
}
