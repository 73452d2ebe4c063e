// Keyword trend tracking — article counts per year for curated topic groups.
//
// Each category is a set of labelled keyword groups (a group matches when
// any of its keywords appears in the body, so an article counts once per
// group no matter how many variants it contains). Counting happens in SQL
// with one pass over the archive; keywords are bound parameters.

use anyhow::Result;
use rusqlite::{params_from_iter, Connection};
use tracing::debug;

/// One trend line: a display label and the body substrings that count
/// toward it. Matching is case-insensitive.
#[derive(Debug, Clone)]
pub struct KeywordGroup {
    pub label: String,
    pub keywords: Vec<String>,
}

impl KeywordGroup {
    fn new(label: &str, keywords: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Counts for one year, aligned with `TrendTable::labels`.
#[derive(Debug, Clone)]
pub struct TrendRow {
    pub year: i32,
    pub counts: Vec<u64>,
}

#[derive(Debug, Clone)]
pub struct TrendTable {
    pub labels: Vec<String>,
    pub rows: Vec<TrendRow>,
}

pub const CATEGORY_NAMES: [&str; 5] = ["security", "cartels", "parties", "disasters", "economy"];

/// The keyword groups for a named category, or None for an unknown name.
pub fn category(name: &str) -> Option<Vec<KeywordGroup>> {
    let groups = match name {
        "security" => vec![
            KeywordGroup::new("Homicidios", &["homicidio", "asesinato", "asesinado"]),
            KeywordGroup::new("Secuestros", &["secuestro", "secuestrado", "plagio"]),
            KeywordGroup::new("Extorsiones", &["extorsión", "extorsion"]),
            KeywordGroup::new("Feminicidios", &["feminicidio"]),
            KeywordGroup::new("Desapariciones", &["desaparecido", "desaparición forzada"]),
            KeywordGroup::new("Robos", &["robo", "asalto"]),
        ],
        "cartels" => vec![
            KeywordGroup::new("Zetas", &["zetas"]),
            KeywordGroup::new("Cártel del Golfo", &["cártel del golfo", "cartel del golfo"]),
            KeywordGroup::new(
                "CJNG",
                &["cjng", "jalisco nueva generación", "jalisco nueva generacion"],
            ),
            KeywordGroup::new("Narco", &["narco"]),
            KeywordGroup::new("Crimen organizado", &["crimen organizado"]),
            KeywordGroup::new("Sicarios", &["sicario"]),
            KeywordGroup::new("Huachicol", &["huachicol", "robo de combustible"]),
        ],
        // Acronyms are matched with padding so PRI doesn't fire inside
        // words like "primero".
        "parties" => vec![
            KeywordGroup::new("Morena", &["morena"]),
            KeywordGroup::new("PRI", &[" pri ", "(pri)", " pri,", " pri."]),
            KeywordGroup::new("PAN", &[" pan ", "(pan)", " pan,", " pan."]),
            KeywordGroup::new("PRD", &[" prd ", "(prd)", " prd,", " prd."]),
            KeywordGroup::new("PVEM", &["partido verde", "pvem"]),
            KeywordGroup::new("MC", &["movimiento ciudadano"]),
        ],
        "disasters" => vec![
            KeywordGroup::new("Huracanes", &["huracán", "huracan"]),
            KeywordGroup::new("Inundaciones", &["inundación", "inundacion", "inunda"]),
            KeywordGroup::new("Tormentas", &["tormenta tropical"]),
            KeywordGroup::new("Sismos", &["sismo", "terremoto", "temblor"]),
            KeywordGroup::new("Sequías", &["sequía", "sequia"]),
            KeywordGroup::new("Incendios", &["incendio forestal"]),
        ],
        "economy" => vec![
            KeywordGroup::new("Desempleo", &["desempleo", "desempleado"]),
            KeywordGroup::new("Inflación", &["inflación", "inflacion"]),
            KeywordGroup::new("Salario mínimo", &["salario mínimo", "salario minimo"]),
            KeywordGroup::new("Pobreza", &["pobreza", "marginación"]),
            KeywordGroup::new("Inversión", &["inversión", "inversion"]),
            KeywordGroup::new("PEMEX", &["pemex"]),
            KeywordGroup::new("Gasolina", &["gasolina", "gasolinazo"]),
        ],
        _ => return None,
    };
    Some(groups)
}

/// Count articles mentioning each group, per publication year.
pub fn mentions_by_year(conn: &Connection, groups: &[KeywordGroup]) -> Result<TrendTable> {
    let labels: Vec<String> = groups.iter().map(|g| g.label.clone()).collect();
    if groups.is_empty() {
        return Ok(TrendTable {
            labels,
            rows: Vec::new(),
        });
    }

    // One FILTER clause per group; every keyword is a numbered parameter.
    let mut columns = Vec::with_capacity(groups.len());
    let mut bindings: Vec<String> = Vec::new();
    for group in groups {
        let mut predicates = Vec::with_capacity(group.keywords.len());
        for keyword in &group.keywords {
            bindings.push(keyword.to_lowercase());
            predicates.push(format!("instr(lower(body), ?{}) > 0", bindings.len()));
        }
        columns.push(format!(
            "COUNT(*) FILTER (WHERE {})",
            predicates.join(" OR ")
        ));
    }

    let sql = format!(
        "SELECT CAST(substr(publication_date, 1, 4) AS INTEGER) AS year, {}
         FROM articles
         WHERE publication_date IS NOT NULL AND body IS NOT NULL
         GROUP BY year
         ORDER BY year",
        columns.join(", ")
    );
    debug!(groups = groups.len(), keywords = bindings.len(), "counting keyword trends");

    let mut stmt = conn.prepare(&sql)?;
    let mapped = stmt.query_map(params_from_iter(bindings.iter()), |row| {
        let year: i32 = row.get(0)?;
        let mut counts = Vec::with_capacity(groups.len());
        for i in 0..groups.len() {
            counts.push(row.get::<_, i64>(i + 1)? as u64);
        }
        Ok(TrendRow { year, counts })
    })?;

    let mut rows = Vec::new();
    for row in mapped {
        rows.push(row?);
    }
    Ok(TrendTable { labels, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::Article;
    use crate::db::{queries, schema};

    fn seeded_db() -> Connection {
        let mut conn = Connection::open_in_memory().unwrap();
        schema::create_tables(&conn).unwrap();
        let mk = |id: &str, date: &str, body: &str| Article {
            article_id: Some(id.to_string()),
            publication_date: Some(date.to_string()),
            body: Some(body.to_string()),
            ..Article::default()
        };
        let articles = vec![
            mk("t1", "2011-05-01", "Un homicidio y un asesinato en la región."),
            mk("t2", "2011-06-01", "Reportan secuestro en la carretera."),
            mk("t3", "2012-02-01", "El huracán dejó inundaciones graves."),
            mk("t4", "2012-03-01", "Nada relevante sucedió hoy."),
        ];
        queries::insert_articles(&mut conn, &articles).unwrap();
        conn
    }

    #[test]
    fn test_known_categories_exist() {
        for name in CATEGORY_NAMES {
            assert!(category(name).is_some(), "missing category {name}");
        }
        assert!(category("astrology").is_none());
    }

    #[test]
    fn test_article_counts_once_per_group() {
        let conn = seeded_db();
        // "homicidio" and "asesinato" in the same body still count one article
        let groups = vec![KeywordGroup::new(
            "Homicidios",
            &["homicidio", "asesinato"],
        )];
        let table = mentions_by_year(&conn, &groups).unwrap();
        let row_2011 = table.rows.iter().find(|r| r.year == 2011).unwrap();
        assert_eq!(row_2011.counts, vec![1]);
    }

    #[test]
    fn test_counts_grouped_by_year() {
        let conn = seeded_db();
        let groups = vec![
            KeywordGroup::new("Secuestros", &["secuestro"]),
            KeywordGroup::new("Huracanes", &["huracán"]),
        ];
        let table = mentions_by_year(&conn, &groups).unwrap();
        assert_eq!(table.labels, vec!["Secuestros", "Huracanes"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].year, 2011);
        assert_eq!(table.rows[0].counts, vec![1, 0]);
        assert_eq!(table.rows[1].year, 2012);
        assert_eq!(table.rows[1].counts, vec![0, 1]);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let conn = seeded_db();
        let groups = vec![KeywordGroup::new("Huracanes", &["HURACÁN"])];
        let table = mentions_by_year(&conn, &groups).unwrap();
        let row_2012 = table.rows.iter().find(|r| r.year == 2012).unwrap();
        assert_eq!(row_2012.counts, vec![1]);
    }

    #[test]
    fn test_empty_groups_yield_empty_table() {
        let conn = seeded_db();
        let table = mentions_by_year(&conn, &[]).unwrap();
        assert!(table.labels.is_empty());
        assert!(table.rows.is_empty());
    }
}
