// Hemeroteca: statistical analysis of a 20-year newspaper archive.
//
// This is the library root. The `analysis` module holds the text-signal
// extraction core; everything else is storage, aggregation, and reporting
// around it.

pub mod analysis;
pub mod config;
pub mod db;
pub mod output;
pub mod report;
pub mod status;
pub mod trends;
