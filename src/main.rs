use std::io::BufRead;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use hemeroteca::analysis::{
    detect_emergence, extract_candidate_names, rank_cooccurrences, rank_tfidf,
};
use hemeroteca::config::Config;
use hemeroteca::db::models::Article;
use hemeroteca::db::{self, queries, stats::StatsCache};
use hemeroteca::output::terminal;
use hemeroteca::report;
use hemeroteca::status;
use hemeroteca::trends;

// Corpus caps shared by the period-based commands. The SQL side also skips
// bodies shorter than MIN_BODY_LENGTH chars.
const TFIDF_DOCS: usize = 10_000;
const EMERGENCE_TARGET_DOCS: usize = 8_000;
const EMERGENCE_BASELINE_DOCS: usize = 15_000;
const COOCCUR_DOCS: usize = 5_000;
const ACTOR_DOCS: usize = 10_000;
const MIN_BODY_LENGTH: usize = 100;

const IMPORT_BATCH: usize = 1_000;

/// Hemeroteca: analytics for a scraped Spanish-language news archive.
///
/// Imports article dumps into SQLite and answers questions about two decades
/// of regional coverage: what was written about, when, and in what tone.
#[derive(Parser)]
#[command(name = "hemeroteca", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the archive database
    Init,

    /// Import articles from a JSON-lines dump (one article object per line)
    Import {
        /// Path to the .jsonl file
        file: PathBuf,
    },

    /// Show whole-archive statistics
    Stats,

    /// Search article bodies for a keyword
    Search {
        /// The keyword (case-insensitive substring match)
        keyword: String,

        /// Max hits to show (default: 20)
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Rank the most characteristic terms for a period (TF-IDF)
    Tfidf {
        /// First year of the period (default: earliest in archive)
        #[arg(long)]
        from_year: Option<i32>,

        /// Last year of the period (default: latest in archive)
        #[arg(long)]
        to_year: Option<i32>,

        /// Number of terms to show (default: 20)
        #[arg(long, default_value = "20")]
        top: usize,
    },

    /// Find terms that surged in a year compared to the years before it
    Emerging {
        /// The year to examine (default: latest in archive)
        year: Option<i32>,

        /// How many preceding years form the baseline (default: 3)
        #[arg(long, default_value = "3")]
        comparison_years: i32,

        /// Number of terms to show (default: 20)
        #[arg(long, default_value = "20")]
        top: usize,
    },

    /// Rank terms that co-occur with a keyword in the same articles
    Cooccur {
        /// The target keyword
        term: String,

        /// Restrict to one publication year
        #[arg(long)]
        year: Option<i32>,

        /// Number of terms to show (default: 20)
        #[arg(long, default_value = "20")]
        top: usize,
    },

    /// Extract the most mentioned person-like names for a year
    Actors {
        /// The year to examine (default: latest in archive)
        year: Option<i32>,

        /// Number of names to show (default: 20)
        #[arg(long, default_value = "20")]
        top: usize,
    },

    /// Classify article tone per year with the sentiment lexicon
    Sentiment,

    /// Show publication volume over time (years, weekdays, seasonality, sections)
    Timeline,

    /// Count articles mentioning curated keyword groups, per year
    Trends {
        /// Category: security, cartels, parties, disasters, economy
        category: String,
    },

    /// Generate a full Markdown report of the archive
    Report {
        /// Output path (default: informe.md)
        #[arg(long, default_value = "informe.md")]
        output: PathBuf,
    },

    /// Show database location, size, and coverage
    Status,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("hemeroteca=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Init => {
            info!("Initializing archive database...");
            let conn = db::initialize(&config.db_path)?;
            let table_count = hemeroteca::db::schema::table_count(&conn)?;
            println!("Database initialized at: {}", config.db_path);
            println!("Tables created: {table_count}");
            println!("\nNext step: import an article dump");
            println!("  hemeroteca import articles.jsonl");
        }

        Commands::Import { file } => {
            let mut conn = db::initialize(&config.db_path)?;
            let imported = import_jsonl(&mut conn, &file)?;
            println!("Imported {} new articles from {}", imported, file.display());
        }

        Commands::Stats => {
            let conn = db::open(&config.db_path)?;
            let mut cache = StatsCache::new();
            terminal::display_stats(&cache.get(&conn)?);
        }

        Commands::Search { keyword, limit } => {
            let conn = db::open(&config.db_path)?;
            let hits = queries::search(&conn, &keyword, limit)?;
            terminal::display_search(&keyword, &hits);
        }

        Commands::Tfidf {
            from_year,
            to_year,
            top,
        } => {
            let conn = db::open(&config.db_path)?;
            let Some((first, last)) = queries::year_range(&conn)? else {
                println!("No dated articles yet. Run `hemeroteca import` first.");
                return Ok(());
            };
            let from = from_year.unwrap_or(first);
            let to = to_year.unwrap_or(last);
            anyhow::ensure!(from <= to, "from_year must not exceed to_year");

            println!("Loading bodies for {from}–{to}...");
            let corpus = queries::bodies_for_years(&conn, from, to, MIN_BODY_LENGTH, TFIDF_DOCS)?;
            info!(documents = corpus.len(), "ranking terms");
            let terms = rank_tfidf(&corpus, top);
            terminal::display_scored_terms(&format!("Characteristic Terms ({from}–{to})"), &terms);
        }

        Commands::Emerging {
            year,
            comparison_years,
            top,
        } => {
            let conn = db::open(&config.db_path)?;
            let Some((first, last)) = queries::year_range(&conn)? else {
                println!("No dated articles yet. Run `hemeroteca import` first.");
                return Ok(());
            };
            let year = year.unwrap_or(last);
            anyhow::ensure!(
                year > first,
                "no baseline years before {year} in the archive"
            );
            anyhow::ensure!(comparison_years > 0, "comparison_years must be positive");

            let baseline_from = (year - comparison_years).max(first);
            println!("Comparing {year} against {baseline_from}–{}...", year - 1);

            let target = queries::bodies_for_years(
                &conn,
                year,
                year,
                MIN_BODY_LENGTH,
                EMERGENCE_TARGET_DOCS,
            )?;
            let baseline = queries::bodies_for_years(
                &conn,
                baseline_from,
                year - 1,
                MIN_BODY_LENGTH,
                EMERGENCE_BASELINE_DOCS,
            )?;
            info!(
                target = target.len(),
                baseline = baseline.len(),
                "detecting emerging terms"
            );

            let terms = detect_emergence(&target, &baseline, top);
            terminal::display_emerging(year, &terms);
        }

        Commands::Cooccur { term, year, top } => {
            let conn = db::open(&config.db_path)?;
            let corpus = queries::bodies_matching(&conn, &term, year, COOCCUR_DOCS)?;
            info!(documents = corpus.len(), term = %term, "ranking co-occurrences");
            let terms = rank_cooccurrences(&term, &corpus, top);
            terminal::display_cooccurrences(&term, &terms);
        }

        Commands::Actors { year, top } => {
            let conn = db::open(&config.db_path)?;
            let Some((_, last)) = queries::year_range(&conn)? else {
                println!("No dated articles yet. Run `hemeroteca import` first.");
                return Ok(());
            };
            let year = year.unwrap_or(last);
            let documents = queries::titles_and_bodies_for_year(&conn, year, ACTOR_DOCS)?;
            let false_positives = config.false_positives()?;
            let actors = extract_candidate_names(&documents, &false_positives, top);
            terminal::display_actors(year, &actors);
        }

        Commands::Sentiment => {
            let conn = db::open(&config.db_path)?;
            let range = queries::year_range(&conn)?;
            let rows = report::sentiment_by_year(&conn, range)?;
            terminal::display_sentiment(&rows);
        }

        Commands::Timeline => {
            let conn = db::open(&config.db_path)?;
            terminal::display_year_counts(&queries::articles_by_year(&conn)?);
            terminal::display_day_patterns(&queries::day_of_week_patterns(&conn)?);
            terminal::display_seasonality(&queries::monthly_seasonality(&conn)?);
            terminal::display_sections(&queries::sections_distribution(&conn)?);
        }

        Commands::Trends { category } => {
            let conn = db::open(&config.db_path)?;
            let Some(groups) = trends::category(&category) else {
                anyhow::bail!(
                    "Unknown category \"{}\". Available: {}",
                    category,
                    trends::CATEGORY_NAMES.join(", ")
                );
            };
            let table = trends::mentions_by_year(&conn, &groups)?;
            terminal::display_trends(&category, &table);
        }

        Commands::Report { output } => {
            let conn = db::open(&config.db_path)?;
            let data = report::build(&conn, &config)?;
            hemeroteca::output::markdown::generate_report(&data, &output)?;
            println!("Report written to {}", output.display().to_string().bold());
        }

        Commands::Status => {
            let conn = db::open(&config.db_path)?;
            status::show(&conn, &config.db_path)?;
        }
    }

    Ok(())
}

/// Stream a JSON-lines dump into the database in batches.
///
/// Malformed lines are skipped with a warning instead of aborting the
/// import — twenty years of scrapes always contain a few broken records.
fn import_jsonl(conn: &mut rusqlite::Connection, file: &std::path::Path) -> Result<usize> {
    let handle = std::fs::File::open(file)
        .with_context(|| format!("Failed to open {}", file.display()))?;
    let line_count = std::io::BufReader::new(&handle).lines().count();
    let handle = std::fs::File::open(file)?;
    let reader = std::io::BufReader::new(handle);

    let pb = ProgressBar::new(line_count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Import [{bar:30}] {pos}/{len} ({eta})")
            .unwrap(),
    );

    let mut batch: Vec<Article> = Vec::with_capacity(IMPORT_BATCH);
    let mut imported = 0;
    let mut skipped = 0;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        pb.inc(1);
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<Article>(&line) {
            Ok(article) => batch.push(article),
            Err(e) => {
                skipped += 1;
                warn!(line = line_no + 1, error = %e, "Skipping malformed record");
            }
        }
        if batch.len() >= IMPORT_BATCH {
            imported += queries::insert_articles(conn, &batch)?;
            batch.clear();
        }
    }
    if !batch.is_empty() {
        imported += queries::insert_articles(conn, &batch)?;
    }
    pb.finish_and_clear();

    if skipped > 0 {
        println!("{}", format!("Skipped {skipped} malformed lines").yellow());
    }
    Ok(imported)
}
