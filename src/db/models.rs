// Data models — Rust structs that map to database rows.
//
// These are the types that flow through the application. They're separate
// from the database queries so other modules can use them without depending
// on rusqlite directly.

use serde::{Deserialize, Serialize};

/// One scraped newspaper article. Any field can be missing in old scrapes;
/// analysis treats a missing body as an empty document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Article {
    pub article_id: Option<String>,
    pub url: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub section: Option<String>,
    pub author: Option<String>,
    pub location: Option<String>,
    /// ISO date, YYYY-MM-DD.
    pub publication_date: Option<String>,
    pub body: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub scraped_at: Option<String>,
}

/// Whole-archive summary numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveStats {
    pub total_articles: u64,
    pub earliest_date: Option<String>,
    pub latest_date: Option<String>,
    pub unique_sections: u64,
    pub avg_body_length: u64,
}

/// Publication volume for one year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearCount {
    pub year: i32,
    pub articles: u64,
    pub avg_length: u64,
    pub sections_used: u64,
}

/// Publication volume for one month (YYYY-MM).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthCount {
    pub month: String,
    pub articles: u64,
}

/// Publishing pattern for one day of the week (0 = Sunday).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayOfWeekCount {
    pub day_num: u8,
    pub day: String,
    pub articles: u64,
    pub avg_length: u64,
}

/// Seasonality: volume for one month of the year (1 = January).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonCount {
    pub month_num: u8,
    pub month: String,
    pub articles: u64,
}

/// Distribution entry for one section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionCount {
    pub section: String,
    pub articles: u64,
    pub first_article: Option<String>,
    pub last_article: Option<String>,
}

/// A keyword search hit with a body preview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub section: Option<String>,
    pub publication_date: Option<String>,
    pub preview: String,
}

pub const SPANISH_DAYS: [&str; 7] = [
    "Domingo", "Lunes", "Martes", "Miércoles", "Jueves", "Viernes", "Sábado",
];

pub const SPANISH_MONTHS: [&str; 12] = [
    "Enero", "Febrero", "Marzo", "Abril", "Mayo", "Junio", "Julio", "Agosto",
    "Septiembre", "Octubre", "Noviembre", "Diciembre",
];
