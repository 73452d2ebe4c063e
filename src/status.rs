// System status display — shows DB location, size, and archive coverage.

use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

use crate::db::stats::StatsCache;
use crate::db::{queries, schema};

/// Display archive status to the terminal.
pub fn show(conn: &Connection, db_display_path: &str) -> Result<()> {
    if !Path::new(db_display_path).exists() {
        println!("Database: not initialized");
        println!("\nRun `hemeroteca init` to set up the database.");
        return Ok(());
    }

    // Database file size
    let file_size = std::fs::metadata(db_display_path)
        .map(|m| format_bytes(m.len()))
        .unwrap_or_else(|_| "unknown".to_string());
    println!("Database: {} ({})", db_display_path, file_size);
    println!("Tables: {}", schema::table_count(conn)?);

    let mut cache = StatsCache::new();
    let stats = cache.get(conn)?;
    if stats.total_articles == 0 {
        println!("Articles: none imported yet");
        println!("  Run `hemeroteca import <file.jsonl>` to load the archive");
        return Ok(());
    }

    println!(
        "Articles: {} across {} sections (avg {} chars)",
        stats.total_articles, stats.unique_sections, stats.avg_body_length
    );

    match queries::year_range(conn)? {
        Some((first, last)) => {
            println!(
                "Coverage: {} — {} ({} years)",
                stats.earliest_date.as_deref().unwrap_or("?"),
                stats.latest_date.as_deref().unwrap_or("?"),
                last - first + 1
            );
        }
        None => {
            println!("Coverage: no dated articles");
        }
    }

    Ok(())
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
