// Text-signal extraction over article bodies.
//
// Five independent analysis modes share one normalization step:
//   - TF-IDF term ranking for a period (`tfidf`)
//   - emergence detection against a baseline period (`emergence`)
//   - co-occurrence ranking around a target term (`cooccurrence`)
//   - capitalized-bigram actor extraction (`actors`)
//   - lexicon-based sentiment counting (`sentiment`)
//
// Every function here is a pure batch computation: it takes an in-memory
// corpus and returns a ranked result. Empty or degenerate input (empty
// corpus, vocabulary collapsing to nothing after filtering) yields an empty
// result with a diagnostic log — never an error. The database layer decides
// which articles make up a corpus; nothing in this module touches storage.

pub mod actors;
pub mod cooccurrence;
pub mod emergence;
pub mod lexicon;
pub mod normalize;
pub mod sentiment;
pub mod tfidf;
pub mod vocab;

pub use actors::{extract_candidate_names, CandidateName};
pub use cooccurrence::{rank_cooccurrences, CooccurringTerm};
pub use emergence::{detect_emergence, EmergingTerm};
pub use normalize::normalize;
pub use sentiment::{classify_sentiment, SentimentCounts};
pub use tfidf::{rank_tfidf, ScoredTerm};
