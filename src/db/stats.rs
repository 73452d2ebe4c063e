// Caching wrapper around the whole-archive summary query.
//
// Several commands (status, report, the terminal header) want the same
// COUNT/MIN/MAX aggregate. The cache is owned by the caller and lives for
// one command invocation, so it never serves numbers from before an import
// unless the caller forgets to invalidate it.

use anyhow::Result;
use rusqlite::Connection;

use super::models::ArchiveStats;
use super::queries;

#[derive(Default)]
pub struct StatsCache {
    cached: Option<ArchiveStats>,
}

impl StatsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The archive summary, computed at most once per cache lifetime.
    pub fn get(&mut self, conn: &Connection) -> Result<ArchiveStats> {
        if let Some(stats) = &self.cached {
            return Ok(stats.clone());
        }
        let stats = queries::archive_stats(conn)?;
        self.cached = Some(stats.clone());
        Ok(stats)
    }

    /// Drop the cached summary. Call after any write to the articles table.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}
