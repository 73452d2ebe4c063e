// Colored terminal output for archive statistics and analysis results.
//
// This module handles all terminal-specific formatting: colors, tables,
// column alignment. The main.rs command handlers delegate here.

use colored::Colorize;

use crate::analysis::{CandidateName, CooccurringTerm, EmergingTerm, ScoredTerm, SentimentCounts};
use crate::db::models::{
    ArchiveStats, DayOfWeekCount, SearchHit, SeasonCount, SectionCount, YearCount,
};
use crate::trends::TrendTable;

/// Display the whole-archive summary.
pub fn display_stats(stats: &ArchiveStats) {
    println!("\n{}", "=== Archive Statistics ===".bold());
    println!("  Articles:       {}", stats.total_articles);
    println!(
        "  Date range:     {} — {}",
        stats.earliest_date.as_deref().unwrap_or("?"),
        stats.latest_date.as_deref().unwrap_or("?")
    );
    println!("  Sections:       {}", stats.unique_sections);
    println!("  Avg body:       {} chars", stats.avg_body_length);
    println!();
}

/// Display TF-IDF ranked terms for a period.
pub fn display_scored_terms(title: &str, terms: &[ScoredTerm]) {
    if terms.is_empty() {
        println!("No terms found. Is the archive empty for this period?");
        return;
    }

    println!("\n{}", format!("=== {title} ===").bold());
    println!();
    println!("  {:>4}  {:<32} {:>8}", "Rank".dimmed(), "Term".dimmed(), "Score".dimmed());
    println!("  {}", "-".repeat(50).dimmed());
    for (i, term) in terms.iter().enumerate() {
        println!("  {:>4}. {:<32} {:>8.4}", i + 1, term.term, term.score);
    }
    println!();
}

/// Display emerging terms with their frequency ratio.
pub fn display_emerging(year: i32, terms: &[EmergingTerm]) {
    if terms.is_empty() {
        println!("No emerging terms for {year}. Not enough articles in one of the periods?");
        return;
    }

    println!("\n{}", format!("=== Emerging Terms ({year}) ===").bold());
    println!();
    println!(
        "  {:>4}  {:<28} {:>8}  {:>10}  {:>10}",
        "Rank".dimmed(),
        "Term".dimmed(),
        "Ratio".dimmed(),
        "This year".dimmed(),
        "Baseline".dimmed(),
    );
    println!("  {}", "-".repeat(70).dimmed());
    for (i, term) in terms.iter().enumerate() {
        let ratio = format!("{:>8.1}", term.score);
        let colored_ratio = if term.baseline_freq == 0.0 {
            ratio.red().bold()
        } else if term.score >= 10.0 {
            ratio.bright_red()
        } else {
            ratio.normal()
        };
        println!(
            "  {:>4}. {:<28} {}  {:>10.4}  {:>10.4}",
            i + 1,
            term.term,
            colored_ratio,
            term.target_freq,
            term.baseline_freq,
        );
    }
    println!();
    println!(
        "  {} ratio in red means the term was absent from the baseline period",
        "i".dimmed()
    );
}

/// Display terms that co-occur with a target keyword.
pub fn display_cooccurrences(target: &str, terms: &[CooccurringTerm]) {
    if terms.is_empty() {
        println!("No articles mention \"{target}\".");
        return;
    }

    println!(
        "\n{}",
        format!("=== Terms Around \"{target}\" ===").bold()
    );
    println!();
    println!("  {:>4}  {:<32} {:>8}", "Rank".dimmed(), "Term".dimmed(), "Count".dimmed());
    println!("  {}", "-".repeat(50).dimmed());
    for (i, term) in terms.iter().enumerate() {
        println!("  {:>4}. {:<32} {:>8}", i + 1, term.term, term.count);
    }
    println!();
}

/// Display extracted actor names with mention counts.
pub fn display_actors(year: i32, actors: &[CandidateName]) {
    if actors.is_empty() {
        println!("No names extracted for {year}.");
        return;
    }

    println!("\n{}", format!("=== Most Mentioned Names ({year}) ===").bold());
    println!();
    println!(
        "  {:>4}  {:<36} {:>8}",
        "Rank".dimmed(),
        "Name".dimmed(),
        "Mentions".dimmed()
    );
    println!("  {}", "-".repeat(54).dimmed());
    for (i, actor) in actors.iter().enumerate() {
        println!("  {:>4}. {:<36} {:>8}", i + 1, actor.name, actor.mentions);
    }
    println!();
    println!(
        "  {} naive capitalized-pair extraction; treat as candidates, not truth",
        "i".dimmed()
    );
}

/// Display sentiment counts per year.
pub fn display_sentiment(rows: &[(i32, SentimentCounts)]) {
    if rows.is_empty() {
        println!("No dated articles to classify.");
        return;
    }

    println!("\n{}", "=== Sentiment by Year ===".bold());
    println!();
    println!(
        "  {:>4}  {:>8}  {:>7}  {:>7}  {:>9}",
        "Year".dimmed(),
        "Articles".dimmed(),
        "Pos %".dimmed(),
        "Neg %".dimmed(),
        "Balance".dimmed(),
    );
    println!("  {}", "-".repeat(46).dimmed());
    for (year, counts) in rows {
        match counts.breakdown() {
            Some(b) => {
                let balance = format!("{:>+8.1}", b.balance);
                let colored_balance = if b.balance < -10.0 {
                    balance.red()
                } else if b.balance > 10.0 {
                    balance.green()
                } else {
                    balance.normal()
                };
                println!(
                    "  {:>4}  {:>8}  {:>6.1}%  {:>6.1}%  {}",
                    year, b.total, b.pct_positive, b.pct_negative, colored_balance
                );
            }
            None => println!("  {:>4}  {:>8}  {:>7}  {:>7}  {:>9}", year, 0, "-", "-", "-"),
        }
    }
    println!();
}

/// Display the publication timeline: volume per year.
pub fn display_year_counts(years: &[YearCount]) {
    if years.is_empty() {
        println!("No dated articles yet. Run `hemeroteca import` first.");
        return;
    }

    let max = years.iter().map(|y| y.articles).max().unwrap_or(1).max(1);

    println!("\n{}", "=== Publication Timeline ===".bold());
    println!();
    println!(
        "  {:>4}  {:>8}  {:>9}  {:>8}",
        "Year".dimmed(),
        "Articles".dimmed(),
        "Avg len".dimmed(),
        "Sections".dimmed(),
    );
    println!("  {}", "-".repeat(70).dimmed());
    for y in years {
        let bar_len = ((y.articles as f64 / max as f64) * 30.0).round() as usize;
        println!(
            "  {:>4}  {:>8}  {:>9}  {:>8}  {}",
            y.year,
            y.articles,
            y.avg_length,
            y.sections_used,
            "█".repeat(bar_len).cyan(),
        );
    }
    println!();
}

/// Display day-of-week publishing patterns.
pub fn display_day_patterns(days: &[DayOfWeekCount]) {
    if days.is_empty() {
        return;
    }

    println!("\n{}", "=== Publishing by Day of Week ===".bold());
    println!();
    for d in days {
        println!("  {:<10}  {:>8} articles  (avg {} chars)", d.day, d.articles, d.avg_length);
    }
    println!();
}

/// Display month-of-year seasonality.
pub fn display_seasonality(months: &[SeasonCount]) {
    if months.is_empty() {
        return;
    }

    let max = months.iter().map(|m| m.articles).max().unwrap_or(1).max(1);

    println!("\n{}", "=== Seasonality ===".bold());
    println!();
    for m in months {
        let bar_len = ((m.articles as f64 / max as f64) * 30.0).round() as usize;
        println!(
            "  {:<12}  {:>8}  {}",
            m.month,
            m.articles,
            "█".repeat(bar_len).cyan()
        );
    }
    println!();
}

/// Display section distribution.
pub fn display_sections(sections: &[SectionCount]) {
    if sections.is_empty() {
        return;
    }

    println!("\n{}", "=== Sections ===".bold());
    println!();
    println!(
        "  {:<24} {:>8}  {:<12} {:<12}",
        "Section".dimmed(),
        "Articles".dimmed(),
        "First".dimmed(),
        "Last".dimmed(),
    );
    println!("  {}", "-".repeat(60).dimmed());
    for s in sections {
        println!(
            "  {:<24} {:>8}  {:<12} {:<12}",
            super::truncate_chars(&s.section, 22),
            s.articles,
            s.first_article.as_deref().unwrap_or("?"),
            s.last_article.as_deref().unwrap_or("?"),
        );
    }
    println!();
}

/// Display a keyword trend table: one row per year, one column per group.
pub fn display_trends(category: &str, table: &TrendTable) {
    if table.rows.is_empty() {
        println!("No dated articles to count for category \"{category}\".");
        return;
    }

    println!(
        "\n{}",
        format!("=== Trends: {category} ===").bold()
    );
    println!();

    print!("  {:>4}", "Year".dimmed());
    for label in &table.labels {
        print!("  {:>14}", super::truncate_chars(label, 14).dimmed());
    }
    println!();
    println!("  {}", "-".repeat(6 + 16 * table.labels.len()).dimmed());

    for row in &table.rows {
        print!("  {:>4}", row.year);
        for count in &row.counts {
            print!("  {:>14}", count);
        }
        println!();
    }
    println!();
}

/// Display keyword search hits with a body preview.
pub fn display_search(keyword: &str, hits: &[SearchHit]) {
    if hits.is_empty() {
        println!("No articles mention \"{keyword}\".");
        return;
    }

    println!(
        "\n{}",
        format!("=== Search: \"{}\" ({} hits shown) ===", keyword, hits.len()).bold()
    );
    println!();
    for hit in hits {
        println!(
            "  {}  [{}]  {}",
            hit.publication_date.as_deref().unwrap_or("????-??-??").cyan(),
            hit.section.as_deref().unwrap_or("sin sección").dimmed(),
            hit.title.bold(),
        );
        let preview = super::truncate_chars(hit.preview.trim(), 160);
        println!("      {}", preview.dimmed());
        println!();
    }
}
