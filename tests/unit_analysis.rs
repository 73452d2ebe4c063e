// End-to-end checks of the analysis pipeline over small Spanish corpora.

use std::collections::HashSet;

use hemeroteca::analysis::{
    classify_sentiment, detect_emergence, extract_candidate_names, normalize, rank_cooccurrences,
    rank_tfidf,
};
use hemeroteca::analysis::cooccurrence::{rank_cooccurrences_with, CooccurrenceParams};
use hemeroteca::analysis::lexicon::default_false_positives;
use hemeroteca::analysis::tfidf::{rank_tfidf_with, TfidfParams};

fn corpus(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|t| t.to_string()).collect()
}

#[test]
fn normalization_strips_noise_and_is_idempotent() {
    let raw = "VISITA http://alcalorpolitico.com YA!!! Escribe a buzon@diario.mx, son 300 pesos.";
    let clean = normalize(raw);
    assert!(!clean.contains("http"));
    assert!(!clean.contains('@'));
    assert!(!clean.contains("300"));
    assert!(!clean.contains('!'));
    assert_eq!(normalize(&clean), clean);
    assert!(clean.len() <= raw.len());
}

#[test]
fn normalization_keeps_spanish_letters() {
    let clean = normalize("El Ñandú cruzó el río Pánuco");
    assert_eq!(clean, "el ñandú cruzó el río pánuco");
}

#[test]
fn tfidf_surfaces_the_distinctive_topic() {
    // Five documents about public works, three about a corruption scandal.
    // "corrupción" should outrank generic vocabulary shared by all docs.
    let docs = corpus(&[
        "el ayuntamiento inauguró obras de pavimentación en la colonia",
        "el ayuntamiento anunció obras de drenaje en la colonia",
        "el ayuntamiento supervisó obras de alumbrado en la colonia",
        "el ayuntamiento licitó obras de agua potable en la colonia",
        "el ayuntamiento entregó obras de banquetas en la colonia",
        "la corrupción del exgobernador alcanzó cifras récord según auditoría",
        "la corrupción documentada por la auditoría involucra empresas fantasma",
        "la corrupción y las empresas fantasma marcaron el sexenio según auditoría",
    ]);
    let params = TfidfParams {
        min_df: 2,
        max_df: None,
        max_features: 1000,
    };
    let ranked = rank_tfidf_with(&docs, 10, &params);
    assert!(!ranked.is_empty());
    assert!(ranked.iter().any(|t| t.term == "corrupción"));

    // Scores are sorted descending
    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn tfidf_enforces_the_document_frequency_floor() {
    // "duarte" in 8 of 10 documents, "clima" in 1. With min_df=2 the floor
    // keeps duarte and drops clima.
    let mut docs: Vec<String> = (0..8)
        .map(|_| "duarte audiencia judicial".to_string())
        .collect();
    docs.push("clima lluvioso costero".to_string());
    docs.push("audiencia judicial ordinaria".to_string());

    let params = TfidfParams {
        min_df: 2,
        max_df: None,
        max_features: 1000,
    };
    let ranked = rank_tfidf_with(&docs, 100, &params);
    assert!(ranked.iter().any(|t| t.term == "duarte"));
    assert!(ranked.iter().all(|t| t.term != "clima"));
}

#[test]
fn tfidf_empty_corpus_is_not_an_error() {
    assert!(rank_tfidf(&[], 10).is_empty());
    assert!(rank_tfidf(&corpus(&["", "  "]), 10).is_empty());
}

#[test]
fn emergence_flags_a_new_topic_against_the_baseline() {
    let baseline = corpus(&[
        "el puerto registró movimiento de carga estable durante el mes",
        "el puerto amplió su capacidad de carga con nueva inversión",
        "autoridades del puerto reportaron cifras de carga positivas",
    ]);
    let target = corpus(&[
        "brote de zika preocupa a las autoridades de salud del puerto",
        "confirman más casos de zika y refuerzan la fumigación",
        "la secretaría de salud emitió alerta por zika en la zona conurbada",
    ]);
    let ranked = detect_emergence(&target, &baseline, 10);
    let zika = ranked.iter().find(|t| t.term == "zika");
    assert!(zika.is_some(), "zika should emerge: {ranked:?}");
    let zika = zika.unwrap();
    assert_eq!(zika.baseline_freq, 0.0);
    assert!(zika.score.is_finite());

    // "puerto" appears in both periods; its ratio must be modest.
    if let Some(puerto) = ranked.iter().find(|t| t.term == "puerto") {
        assert!(puerto.score < zika.score);
    }
}

#[test]
fn cooccurrence_describes_context_without_echoing_the_target() {
    let docs = corpus(&[
        "duarte desvió recursos del erario hacia empresas fantasma",
        "duarte enfrenta cargos por desvío de recursos públicos",
        "el exgobernador duarte fue detenido por desvío de recursos",
    ]);
    let params = CooccurrenceParams {
        min_df: 2,
        max_features: 500,
    };
    let ranked = rank_cooccurrences_with("Duarte", &docs, 10, &params);
    assert!(!ranked.is_empty());
    assert!(ranked.iter().all(|t| !t.term.contains("duarte")));
    assert!(ranked.iter().any(|t| t.term == "recursos"));
    assert!(rank_cooccurrences("duarte", &[], 10).is_empty());
}

#[test]
fn actor_extraction_counts_repeated_names() {
    let docs = vec![(
        String::new(),
        "Javier Duarte fue acusado. Javier Duarte huyó.".to_string(),
    )];
    let actors = extract_candidate_names(&docs, &default_false_positives(), 10);
    assert_eq!(actors.len(), 1);
    assert_eq!(actors[0].name, "Javier Duarte");
    assert_eq!(actors[0].mentions, 2);
}

#[test]
fn actor_extraction_drops_known_false_positives() {
    let docs = vec![(
        "Noticias".to_string(),
        "Viajó a Estados Unidos y luego a Nueva York con Miguel Yunes.".to_string(),
    )];
    let actors = extract_candidate_names(&docs, &default_false_positives(), 10);
    let names: Vec<&str> = actors.iter().map(|a| a.name.as_str()).collect();
    assert!(!names.contains(&"Estados Unidos"));
    assert!(!names.contains(&"Nueva York"));
    assert!(names.contains(&"Miguel Yunes"));
}

#[test]
fn sentiment_pipeline_matches_expected_percentages() {
    let docs = corpus(&[
        "celebran el éxito del programa",
        "la violencia sacudió al municipio",
        "sesión ordinaria del cabildo",
    ]);
    let counts = classify_sentiment(&docs);
    let b = counts.breakdown().expect("non-empty corpus");
    assert_eq!(b.total, 3);
    assert!((b.pct_positive - 100.0 / 3.0).abs() < 0.01);
    assert!((b.pct_negative - 100.0 / 3.0).abs() < 0.01);
    assert!(b.balance.abs() < 1e-9);
}
