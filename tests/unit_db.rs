// Database layer checks: lifecycle, import round-trips, and corpus loaders.

use rusqlite::Connection;

use hemeroteca::db::models::Article;
use hemeroteca::db::stats::StatsCache;
use hemeroteca::db::{self, queries, schema};
use hemeroteca::trends;

fn fresh_db() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    schema::create_tables(&conn).unwrap();
    conn
}

fn article(id: &str, date: &str, body: &str) -> Article {
    Article {
        article_id: Some(id.to_string()),
        title: Some(format!("Título {id}")),
        section: Some("Estatal".to_string()),
        publication_date: Some(date.to_string()),
        body: Some(body.to_string()),
        ..Article::default()
    }
}

#[test]
fn init_and_open_lifecycle() {
    let path = std::env::temp_dir().join(format!("hemeroteca-test-{}.db", std::process::id()));
    let path_str = path.to_string_lossy().to_string();
    let _ = std::fs::remove_file(&path);

    // Opening before init fails with a hint
    let err = db::open(&path_str).unwrap_err();
    assert!(err.to_string().contains("hemeroteca init"));

    {
        let conn = db::initialize(&path_str).unwrap();
        assert_eq!(schema::table_count(&conn).unwrap(), 2);
    }
    {
        let conn = db::open(&path_str).unwrap();
        assert_eq!(queries::archive_stats(&conn).unwrap().total_articles, 0);
    }

    let _ = std::fs::remove_file(&path);
    let _ = std::fs::remove_file(path.with_extension("db-wal"));
    let _ = std::fs::remove_file(path.with_extension("db-shm"));
}

#[test]
fn import_round_trip_preserves_fields() {
    let mut conn = fresh_db();
    let original = Article {
        article_id: Some("rt1".to_string()),
        url: Some("https://ejemplo.mx/nota/rt1".to_string()),
        title: Some("Título con acentos: sesión".to_string()),
        subtitle: None,
        section: Some("Política".to_string()),
        author: Some("Redacción".to_string()),
        location: Some("Xalapa".to_string()),
        publication_date: Some("2018-09-14".to_string()),
        body: Some("Cuerpo de la nota sobre el congreso local.".to_string()),
        keywords: vec!["congreso".to_string(), "xalapa".to_string()],
        scraped_at: Some("2024-01-01T00:00:00Z".to_string()),
    };
    assert_eq!(queries::insert_articles(&mut conn, &[original]).unwrap(), 1);

    let hits = queries::search(&conn, "congreso", 10).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Título con acentos: sesión");
    assert_eq!(hits[0].section.as_deref(), Some("Política"));
    assert_eq!(hits[0].publication_date.as_deref(), Some("2018-09-14"));
}

#[test]
fn corpus_loaders_respect_caps() {
    let mut conn = fresh_db();
    let long_body = "palabra ".repeat(50);
    let articles: Vec<Article> = (0..10)
        .map(|i| article(&format!("c{i}"), "2019-05-01", &long_body))
        .collect();
    queries::insert_articles(&mut conn, &articles).unwrap();

    let capped = queries::bodies_for_years(&conn, 2019, 2019, 100, 4).unwrap();
    assert_eq!(capped.len(), 4);

    let matched = queries::bodies_matching(&conn, "palabra", Some(2019), 3).unwrap();
    assert_eq!(matched.len(), 3);

    let docs = queries::titles_and_bodies_for_year(&conn, 2019, 5).unwrap();
    assert_eq!(docs.len(), 5);
}

#[test]
fn trends_count_articles_not_occurrences() {
    let mut conn = fresh_db();
    let articles = vec![
        article("t1", "2017-01-01", "balacera tras balacera, el narco dominó la nota roja"),
        article("t2", "2017-02-01", "sesión de cabildo sin incidentes"),
        article("t3", "2018-01-01", "el narco volvió a los titulares"),
    ];
    queries::insert_articles(&mut conn, &articles).unwrap();

    let groups = trends::category("cartels").unwrap();
    let table = trends::mentions_by_year(&conn, &groups).unwrap();
    let narco_idx = table.labels.iter().position(|l| l == "Narco").unwrap();

    let row_2017 = table.rows.iter().find(|r| r.year == 2017).unwrap();
    let row_2018 = table.rows.iter().find(|r| r.year == 2018).unwrap();
    assert_eq!(row_2017.counts[narco_idx], 1);
    assert_eq!(row_2018.counts[narco_idx], 1);
}

#[test]
fn stats_cache_invalidation_after_import() {
    let mut conn = fresh_db();
    let mut cache = StatsCache::new();
    assert_eq!(cache.get(&conn).unwrap().total_articles, 0);

    queries::insert_articles(&mut conn, &[article("s1", "2020-01-01", "cuerpo")]).unwrap();
    cache.invalidate();
    let stats = cache.get(&conn).unwrap();
    assert_eq!(stats.total_articles, 1);
    assert_eq!(stats.earliest_date.as_deref(), Some("2020-01-01"));
}

#[test]
fn malformed_article_json_is_rejected_by_serde() {
    // The importer skips lines that fail to parse; this pins the contract.
    let good: Result<Article, _> =
        serde_json::from_str(r#"{"article_id":"x","body":"texto","keywords":[]}"#);
    assert!(good.is_ok());

    let bad: Result<Article, _> = serde_json::from_str(r#"{"keywords":"no-es-lista"}"#);
    assert!(bad.is_err());
}
