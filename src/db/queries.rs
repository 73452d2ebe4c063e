// Database queries — imports, aggregations, and corpus loaders.
//
// Every database interaction goes through this module. This keeps SQL
// contained in one place and gives the rest of the app clean Rust
// interfaces. All user-supplied values (keywords, years, limits) are bound
// parameters — nothing is interpolated into SQL text.

use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

use super::models::{
    Article, ArchiveStats, DayOfWeekCount, MonthCount, SearchHit, SeasonCount, SectionCount,
    YearCount, SPANISH_DAYS, SPANISH_MONTHS,
};

// --- Import ---

/// Insert a batch of articles in one transaction.
///
/// Articles with a duplicate article_id are skipped (re-importing a dump is
/// idempotent). Returns the number of rows actually inserted.
pub fn insert_articles(conn: &mut Connection, articles: &[Article]) -> Result<usize> {
    let tx = conn.transaction()?;
    let mut inserted = 0;
    {
        let mut stmt = tx.prepare(
            "INSERT OR IGNORE INTO articles
                (article_id, url, title, subtitle, section, author, location,
                 publication_date, body, keywords, scraped_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        )?;
        for article in articles {
            let keywords_json = serde_json::to_string(&article.keywords)?;
            inserted += stmt.execute(params![
                article.article_id,
                article.url,
                article.title,
                article.subtitle,
                article.section,
                article.author,
                article.location,
                article.publication_date,
                article.body,
                keywords_json,
                article.scraped_at,
            ])?;
        }
    }
    tx.commit()?;
    Ok(inserted)
}

// --- Archive statistics ---

pub fn archive_stats(conn: &Connection) -> Result<ArchiveStats> {
    let stats = conn.query_row(
        "SELECT
            COUNT(*),
            MIN(publication_date),
            MAX(publication_date),
            COUNT(DISTINCT section),
            CAST(COALESCE(AVG(LENGTH(body)), 0) AS INTEGER)
         FROM articles",
        [],
        |row| {
            Ok(ArchiveStats {
                total_articles: row.get::<_, i64>(0)? as u64,
                earliest_date: row.get(1)?,
                latest_date: row.get(2)?,
                unique_sections: row.get::<_, i64>(3)? as u64,
                avg_body_length: row.get::<_, i64>(4)? as u64,
            })
        },
    )?;
    Ok(stats)
}

/// First and last publication year in the archive, if any dated articles
/// exist.
pub fn year_range(conn: &Connection) -> Result<Option<(i32, i32)>> {
    let range: Option<(Option<i32>, Option<i32>)> = conn
        .query_row(
            "SELECT
                MIN(CAST(substr(publication_date, 1, 4) AS INTEGER)),
                MAX(CAST(substr(publication_date, 1, 4) AS INTEGER))
             FROM articles
             WHERE publication_date IS NOT NULL",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;
    Ok(match range {
        Some((Some(min), Some(max))) => Some((min, max)),
        _ => None,
    })
}

// --- Time-series aggregations ---

pub fn articles_by_year(conn: &Connection) -> Result<Vec<YearCount>> {
    let mut stmt = conn.prepare(
        "SELECT
            CAST(substr(publication_date, 1, 4) AS INTEGER) AS year,
            COUNT(*),
            CAST(COALESCE(AVG(LENGTH(body)), 0) AS INTEGER),
            COUNT(DISTINCT section)
         FROM articles
         WHERE publication_date IS NOT NULL
         GROUP BY year
         ORDER BY year",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(YearCount {
            year: row.get(0)?,
            articles: row.get::<_, i64>(1)? as u64,
            avg_length: row.get::<_, i64>(2)? as u64,
            sections_used: row.get::<_, i64>(3)? as u64,
        })
    })?;
    collect(rows)
}

pub fn articles_by_month(conn: &Connection) -> Result<Vec<MonthCount>> {
    let mut stmt = conn.prepare(
        "SELECT substr(publication_date, 1, 7) AS month, COUNT(*)
         FROM articles
         WHERE publication_date IS NOT NULL
         GROUP BY month
         ORDER BY month",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(MonthCount {
            month: row.get(0)?,
            articles: row.get::<_, i64>(1)? as u64,
        })
    })?;
    collect(rows)
}

pub fn day_of_week_patterns(conn: &Connection) -> Result<Vec<DayOfWeekCount>> {
    let mut stmt = conn.prepare(
        "SELECT
            CAST(strftime('%w', publication_date) AS INTEGER) AS day_num,
            COUNT(*),
            CAST(COALESCE(AVG(LENGTH(body)), 0) AS INTEGER)
         FROM articles
         WHERE publication_date IS NOT NULL
         GROUP BY day_num
         ORDER BY day_num",
    )?;
    let rows = stmt.query_map([], |row| {
        let day_num: i64 = row.get(0)?;
        Ok(DayOfWeekCount {
            day_num: day_num as u8,
            day: SPANISH_DAYS
                .get(day_num as usize)
                .unwrap_or(&"?")
                .to_string(),
            articles: row.get::<_, i64>(1)? as u64,
            avg_length: row.get::<_, i64>(2)? as u64,
        })
    })?;
    collect(rows)
}

pub fn monthly_seasonality(conn: &Connection) -> Result<Vec<SeasonCount>> {
    let mut stmt = conn.prepare(
        "SELECT CAST(substr(publication_date, 6, 2) AS INTEGER) AS month_num, COUNT(*)
         FROM articles
         WHERE publication_date IS NOT NULL
         GROUP BY month_num
         ORDER BY month_num",
    )?;
    let rows = stmt.query_map([], |row| {
        let month_num: i64 = row.get(0)?;
        Ok(SeasonCount {
            month_num: month_num as u8,
            month: SPANISH_MONTHS
                .get((month_num as usize).wrapping_sub(1))
                .unwrap_or(&"?")
                .to_string(),
            articles: row.get::<_, i64>(1)? as u64,
        })
    })?;
    collect(rows)
}

pub fn sections_distribution(conn: &Connection) -> Result<Vec<SectionCount>> {
    let mut stmt = conn.prepare(
        "SELECT
            COALESCE(section, 'Sin sección'),
            COUNT(*),
            MIN(publication_date),
            MAX(publication_date)
         FROM articles
         GROUP BY section
         ORDER BY COUNT(*) DESC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(SectionCount {
            section: row.get(0)?,
            articles: row.get::<_, i64>(1)? as u64,
            first_article: row.get(2)?,
            last_article: row.get(3)?,
        })
    })?;
    collect(rows)
}

// --- Keyword search ---

/// Case-insensitive substring search over article bodies, newest first.
pub fn search(conn: &Connection, keyword: &str, limit: usize) -> Result<Vec<SearchHit>> {
    let mut stmt = conn.prepare(
        "SELECT COALESCE(title, ''), section, publication_date, substr(body, 1, 300)
         FROM articles
         WHERE body IS NOT NULL AND instr(lower(body), lower(?1)) > 0
         ORDER BY publication_date DESC
         LIMIT ?2",
    )?;
    let rows = stmt.query_map(params![keyword, limit as i64], |row| {
        Ok(SearchHit {
            title: row.get(0)?,
            section: row.get(1)?,
            publication_date: row.get(2)?,
            preview: row.get(3)?,
        })
    })?;
    collect(rows)
}

// --- Corpus loaders for the analysis core ---

/// Bodies for a year range, skipping short items (wire-service stubs and
/// photo captions add noise, not signal). Capped at `limit` documents.
pub fn bodies_for_years(
    conn: &Connection,
    start_year: i32,
    end_year: i32,
    min_length: usize,
    limit: usize,
) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT body
         FROM articles
         WHERE publication_date IS NOT NULL
           AND CAST(substr(publication_date, 1, 4) AS INTEGER) BETWEEN ?1 AND ?2
           AND body IS NOT NULL
           AND LENGTH(body) > ?3
         LIMIT ?4",
    )?;
    let rows = stmt.query_map(
        params![start_year, end_year, min_length as i64, limit as i64],
        |row| row.get(0),
    )?;
    collect(rows)
}

/// Bodies containing `term` (case-insensitive substring), optionally
/// restricted to one year. Capped at `limit` documents.
pub fn bodies_matching(
    conn: &Connection,
    term: &str,
    year: Option<i32>,
    limit: usize,
) -> Result<Vec<String>> {
    match year {
        Some(year) => {
            let mut stmt = conn.prepare(
                "SELECT body
                 FROM articles
                 WHERE body IS NOT NULL
                   AND instr(lower(body), lower(?1)) > 0
                   AND CAST(substr(publication_date, 1, 4) AS INTEGER) = ?2
                 LIMIT ?3",
            )?;
            let rows = stmt.query_map(params![term, year, limit as i64], |row| row.get(0))?;
            collect(rows)
        }
        None => {
            let mut stmt = conn.prepare(
                "SELECT body
                 FROM articles
                 WHERE body IS NOT NULL AND instr(lower(body), lower(?1)) > 0
                 LIMIT ?2",
            )?;
            let rows = stmt.query_map(params![term, limit as i64], |row| row.get(0))?;
            collect(rows)
        }
    }
}

/// (title, body) pairs for one year — raw text for the actor extractor.
pub fn titles_and_bodies_for_year(
    conn: &Connection,
    year: i32,
    limit: usize,
) -> Result<Vec<(String, String)>> {
    let mut stmt = conn.prepare(
        "SELECT COALESCE(title, ''), COALESCE(body, '')
         FROM articles
         WHERE publication_date IS NOT NULL
           AND CAST(substr(publication_date, 1, 4) AS INTEGER) = ?1
         LIMIT ?2",
    )?;
    let rows = stmt.query_map(params![year, limit as i64], |row| {
        Ok((row.get(0)?, row.get(1)?))
    })?;
    collect(rows)
}

fn collect<T>(rows: impl Iterator<Item = rusqlite::Result<T>>) -> Result<Vec<T>> {
    let mut items = Vec::new();
    for row in rows {
        items.push(row?);
    }
    Ok(items)
}
