// Full-archive report assembly.
//
// Gathers every analysis into one `ReportData` value, then hands it to the
// markdown renderer. Corpus sizes are capped so the report finishes in
// minutes even on a twenty-year archive.

use anyhow::Result;
use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};
use rusqlite::Connection;
use tracing::info;

use crate::analysis::{
    classify_sentiment, detect_emergence, extract_candidate_names, rank_tfidf, CandidateName,
    EmergingTerm, ScoredTerm, SentimentCounts,
};
use crate::config::Config;
use crate::db::models::{ArchiveStats, YearCount};
use crate::db::{queries, stats::StatsCache};
use crate::trends::{self, TrendTable};

// Corpus caps per analysis step. Large enough for a representative sample,
// small enough that a report run stays interactive.
const SENTIMENT_DOCS_PER_YEAR: usize = 10_000;
const TFIDF_DOCS: usize = 10_000;
const EMERGENCE_TARGET_DOCS: usize = 8_000;
const EMERGENCE_BASELINE_DOCS: usize = 15_000;
const ACTOR_DOCS: usize = 10_000;
const MIN_BODY_LENGTH: usize = 100;

const BASELINE_YEARS: i32 = 3;
const DISTINCTIVE_YEARS: i32 = 2;

/// Everything the markdown renderer needs, gathered in one pass.
pub struct ReportData {
    pub generated_at: String,
    pub stats: ArchiveStats,
    pub years: Vec<YearCount>,
    pub sentiment: Vec<(i32, SentimentCounts)>,
    pub emerging_year: Option<i32>,
    pub emerging: Vec<EmergingTerm>,
    pub actors_year: Option<i32>,
    pub actors: Vec<CandidateName>,
    pub distinctive: Vec<ScoredTerm>,
    pub distinctive_range: Option<(i32, i32)>,
    pub security_trends: TrendTable,
}

/// Run every analysis over the archive and assemble the report data.
pub fn build(conn: &Connection, config: &Config) -> Result<ReportData> {
    let mut cache = StatsCache::new();
    let stats = cache.get(conn)?;
    let range = queries::year_range(conn)?;
    info!(articles = stats.total_articles, "building archive report");

    let pb = ProgressBar::new(6);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Report [{bar:30}] {pos}/{len} {msg}")
            .unwrap(),
    );

    pb.set_message("timeline");
    let years = queries::articles_by_year(conn)?;
    pb.inc(1);

    pb.set_message("sentiment");
    let sentiment = sentiment_by_year(conn, range)?;
    pb.inc(1);

    pb.set_message("distinctive vocabulary");
    let (distinctive, distinctive_range) = match range {
        Some((_, last)) => {
            let from = last - DISTINCTIVE_YEARS;
            let corpus = queries::bodies_for_years(conn, from, last, MIN_BODY_LENGTH, TFIDF_DOCS)?;
            (rank_tfidf(&corpus, 20), Some((from, last)))
        }
        None => (Vec::new(), None),
    };
    pb.inc(1);

    pb.set_message("emerging terms");
    let (emerging, emerging_year) = match range {
        Some((first, last)) if last > first => {
            let target = queries::bodies_for_years(
                conn,
                last,
                last,
                MIN_BODY_LENGTH,
                EMERGENCE_TARGET_DOCS,
            )?;
            let baseline = queries::bodies_for_years(
                conn,
                (last - BASELINE_YEARS).max(first),
                last - 1,
                MIN_BODY_LENGTH,
                EMERGENCE_BASELINE_DOCS,
            )?;
            (detect_emergence(&target, &baseline, 20), Some(last))
        }
        _ => (Vec::new(), None),
    };
    pb.inc(1);

    pb.set_message("actors");
    let (actors, actors_year) = match range {
        Some((_, last)) => {
            let documents = queries::titles_and_bodies_for_year(conn, last, ACTOR_DOCS)?;
            let false_positives = config.false_positives()?;
            (
                extract_candidate_names(&documents, &false_positives, 20),
                Some(last),
            )
        }
        None => (Vec::new(), None),
    };
    pb.inc(1);

    pb.set_message("security trends");
    let security_groups = trends::category("security").unwrap_or_default();
    let security_trends = trends::mentions_by_year(conn, &security_groups)?;
    pb.inc(1);
    pb.finish_and_clear();

    Ok(ReportData {
        generated_at: Local::now().format("%Y-%m-%d %H:%M").to_string(),
        stats,
        years,
        sentiment,
        emerging_year,
        emerging,
        actors_year,
        actors,
        distinctive,
        distinctive_range,
        security_trends,
    })
}

/// Sentiment counts per publication year. Years with no usable bodies are
/// still listed (the renderer shows them as empty).
pub fn sentiment_by_year(
    conn: &Connection,
    range: Option<(i32, i32)>,
) -> Result<Vec<(i32, SentimentCounts)>> {
    let Some((first, last)) = range else {
        return Ok(Vec::new());
    };

    let mut rows = Vec::new();
    for year in first..=last {
        let corpus =
            queries::bodies_for_years(conn, year, year, MIN_BODY_LENGTH, SENTIMENT_DOCS_PER_YEAR)?;
        if corpus.is_empty() {
            continue;
        }
        rows.push((year, classify_sentiment(&corpus)));
    }
    Ok(rows)
}
