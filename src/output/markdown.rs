// Markdown report rendering.
//
// Takes the assembled `ReportData` and renders a self-contained Markdown
// document. Rendering is separate from data gathering so it can be tested
// without a database.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};

use crate::report::ReportData;

/// Render the report and write it to `path`.
pub fn generate_report(data: &ReportData, path: &Path) -> Result<()> {
    let markdown = render(data);
    std::fs::write(path, markdown)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    Ok(())
}

/// Render the report to a Markdown string.
pub fn render(data: &ReportData) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# Informe del Archivo");
    let _ = writeln!(out);
    let _ = writeln!(out, "Generado: {}", data.generated_at);
    let _ = writeln!(out);

    // Overview
    let _ = writeln!(out, "## Resumen");
    let _ = writeln!(out);
    let _ = writeln!(out, "- Artículos: {}", data.stats.total_articles);
    let _ = writeln!(
        out,
        "- Periodo: {} — {}",
        data.stats.earliest_date.as_deref().unwrap_or("?"),
        data.stats.latest_date.as_deref().unwrap_or("?")
    );
    let _ = writeln!(out, "- Secciones: {}", data.stats.unique_sections);
    let _ = writeln!(
        out,
        "- Longitud media del cuerpo: {} caracteres",
        data.stats.avg_body_length
    );
    let _ = writeln!(out);

    // Timeline
    if !data.years.is_empty() {
        let _ = writeln!(out, "## Volumen por año");
        let _ = writeln!(out);
        let _ = writeln!(out, "| Año | Artículos | Long. media | Secciones |");
        let _ = writeln!(out, "|-----|-----------|-------------|-----------|");
        for y in &data.years {
            let _ = writeln!(
                out,
                "| {} | {} | {} | {} |",
                y.year, y.articles, y.avg_length, y.sections_used
            );
        }
        let _ = writeln!(out);
    }

    // Sentiment
    if !data.sentiment.is_empty() {
        let _ = writeln!(out, "## Tono por año");
        let _ = writeln!(out);
        let _ = writeln!(out, "| Año | Artículos | Positivo | Negativo | Balance |");
        let _ = writeln!(out, "|-----|-----------|----------|----------|---------|");
        for (year, counts) in &data.sentiment {
            if let Some(b) = counts.breakdown() {
                let _ = writeln!(
                    out,
                    "| {} | {} | {:.1}% | {:.1}% | {:+.1} |",
                    year, b.total, b.pct_positive, b.pct_negative, b.balance
                );
            }
        }
        let _ = writeln!(out);
    }

    // Distinctive vocabulary
    if !data.distinctive.is_empty() {
        match data.distinctive_range {
            Some((from, to)) => {
                let _ = writeln!(out, "## Vocabulario distintivo ({from}–{to})");
            }
            None => {
                let _ = writeln!(out, "## Vocabulario distintivo");
            }
        }
        let _ = writeln!(out);
        for (i, term) in data.distinctive.iter().enumerate() {
            let _ = writeln!(out, "{}. **{}** ({:.4})", i + 1, term.term, term.score);
        }
        let _ = writeln!(out);
    }

    // Emerging terms
    if let Some(year) = data.emerging_year {
        let _ = writeln!(out, "## Términos emergentes ({year})");
        let _ = writeln!(out);
        if data.emerging.is_empty() {
            let _ = writeln!(out, "_Sin datos suficientes._");
        } else {
            let _ = writeln!(out, "| Término | Ratio | Frecuencia | Base |");
            let _ = writeln!(out, "|---------|-------|------------|------|");
            for term in &data.emerging {
                let _ = writeln!(
                    out,
                    "| {} | {:.1} | {:.4} | {:.4} |",
                    term.term, term.score, term.target_freq, term.baseline_freq
                );
            }
        }
        let _ = writeln!(out);
    }

    // Actors
    if let Some(year) = data.actors_year {
        let _ = writeln!(out, "## Nombres más mencionados ({year})");
        let _ = writeln!(out);
        if data.actors.is_empty() {
            let _ = writeln!(out, "_Sin datos suficientes._");
        } else {
            for (i, actor) in data.actors.iter().enumerate() {
                let _ = writeln!(out, "{}. {} ({} menciones)", i + 1, actor.name, actor.mentions);
            }
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "_Extracción ingenua por pares de palabras capitalizadas; tratar como candidatos._"
            );
        }
        let _ = writeln!(out);
    }

    // Security trends
    if !data.security_trends.rows.is_empty() {
        let _ = writeln!(out, "## Cobertura de seguridad por año");
        let _ = writeln!(out);
        let _ = write!(out, "| Año |");
        for label in &data.security_trends.labels {
            let _ = write!(out, " {label} |");
        }
        let _ = writeln!(out);
        let _ = write!(out, "|-----|");
        for _ in &data.security_trends.labels {
            let _ = write!(out, "-----|");
        }
        let _ = writeln!(out);
        for row in &data.security_trends.rows {
            let _ = write!(out, "| {} |", row.year);
            for count in &row.counts {
                let _ = write!(out, " {count} |");
            }
            let _ = writeln!(out);
        }
        let _ = writeln!(out);
    }

    out
}
