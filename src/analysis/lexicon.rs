// Fixed word lists the analysis modes depend on.
//
// The stopword list is an extended Spanish list: function words, the full
// conjugations of estar/haber/ser/tener, and journalistic filler (attribution
// verbs, units, time words). Ranking output is sensitive to this exact list,
// so it is kept inline rather than pulled from a generic stopword crate.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;

pub static STOPWORDS_ES: &[&str] = &[
    "de", "la", "que", "el", "en", "y", "a", "los", "del", "se", "las", "por",
    "un", "para", "con", "no", "una", "su", "al", "lo", "como", "más", "pero",
    "sus", "le", "ya", "o", "este", "sí", "porque", "esta", "entre", "cuando",
    "muy", "sin", "sobre", "también", "me", "hasta", "hay", "donde", "quien",
    "desde", "todo", "nos", "durante", "todos", "uno", "les", "ni", "contra",
    "otros", "ese", "eso", "ante", "ellos", "e", "esto", "mí", "antes", "algunos",
    "qué", "unos", "yo", "otro", "otras", "otra", "él", "tanto", "esa", "estos",
    "mucho", "quienes", "nada", "muchos", "cual", "poco", "ella", "estar", "estas",
    "algunas", "algo", "nosotros", "mi", "mis", "tú", "te", "ti", "tu", "tus",
    "ellas", "nosotras", "vosotros", "vosotras", "os", "mío", "mía", "míos", "mías",
    "tuyo", "tuya", "tuyos", "tuyas", "suyo", "suya", "suyos", "suyas", "nuestro",
    "nuestra", "nuestros", "nuestras", "vuestro", "vuestra", "vuestros", "vuestras",
    "esos", "esas", "estoy", "estás", "está", "estamos", "estáis", "están", "esté",
    "estés", "estemos", "estéis", "estén", "estaré", "estarás", "estará", "estaremos",
    "estaréis", "estarán", "estaría", "estarías", "estaríamos", "estaríais", "estarían",
    "estaba", "estabas", "estábamos", "estabais", "estaban", "estuve", "estuviste",
    "estuvo", "estuvimos", "estuvisteis", "estuvieron", "estuviera", "estuvieras",
    "estuviéramos", "estuvierais", "estuvieran", "estuviese", "estuvieses",
    "estuviésemos", "estuvieseis", "estuviesen", "estando", "estado", "estada",
    "estados", "estadas", "estad", "he", "has", "ha", "hemos", "habéis", "han",
    "haya", "hayas", "hayamos", "hayáis", "hayan", "habré", "habrás", "habrá",
    "habremos", "habréis", "habrán", "habría", "habrías", "habríamos", "habríais",
    "habrían", "había", "habías", "habíamos", "habíais", "habían", "hube", "hubiste",
    "hubo", "hubimos", "hubisteis", "hubieron", "hubiera", "hubieras", "hubiéramos",
    "hubierais", "hubieran", "hubiese", "hubieses", "hubiésemos", "hubieseis",
    "hubiesen", "habiendo", "habido", "habida", "habidos", "habidas", "soy", "eres",
    "es", "somos", "sois", "son", "sea", "seas", "seamos", "seáis", "sean", "seré",
    "serás", "será", "seremos", "seréis", "serán", "sería", "serías", "seríamos",
    "seríais", "serían", "era", "eras", "éramos", "erais", "eran", "fui", "fuiste",
    "fue", "fuimos", "fuisteis", "fueron", "fuera", "fueras", "fuéramos", "fuerais",
    "fueran", "fuese", "fueses", "fuésemos", "fueseis", "fuesen", "siendo", "sido",
    "tengo", "tienes", "tiene", "tenemos", "tenéis", "tienen", "tenga", "tengas",
    "tengamos", "tengáis", "tengan", "tendré", "tendrás", "tendrá", "tendremos",
    "tendréis", "tendrán", "tendría", "tendrías", "tendríamos", "tendríais", "tendrían",
    "tenía", "tenías", "teníamos", "teníais", "tenían", "tuve", "tuviste", "tuvo",
    "tuvimos", "tuvisteis", "tuvieron", "tuviera", "tuvieras", "tuviéramos", "tuvierais",
    "tuvieran", "tuviese", "tuvieses", "tuviésemos", "tuvieseis", "tuviesen", "teniendo",
    "tenido", "tenida", "tenidos", "tenidas", "tened", "así", "cada", "hacer", "hecho",
    "puede", "pueden", "podría", "dijo", "señaló", "indicó", "afirmó", "explicó",
    "comentó", "añadió", "aseguró", "manifestó", "expresó", "destacó", "informó",
    "año", "años", "día", "días", "vez", "veces", "parte", "además", "ahora", "después",
    "dos", "tres", "primer", "primera", "segundo", "nueva", "nuevo", "solo", "tras",
    "siempre", "menos", "según", "ser", "ver", "ir", "dar", "decir",
    "mismo", "misma", "mismos", "mismas", "luego", "bien", "manera", "forma",
    "caso", "entonces", "mientras", "aunque", "embargo", "debe", "hacia",
    "pues", "pasado", "haber", "través", "medio", "cuenta", "punto", "general",
    "tan", "ciento", "mil", "millones", "pesos", "ciudad",
];

static STOPWORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOPWORDS_ES.iter().copied().collect());

/// True if `token` is in the Spanish stopword list. Tokens are expected to be
/// already lowercased (normalization does that).
pub fn is_stopword(token: &str) -> bool {
    STOPWORD_SET.contains(token)
}

/// Words flagging a document as positive coverage (simplified Spanish lexicon).
pub static POSITIVE_WORDS: &[&str] = &[
    "éxito", "exito", "logro", "lograr", "avance", "mejora", "mejorar", "beneficio",
    "beneficiar", "positivo", "crecimiento", "crecer", "desarrollo", "desarrollar",
    "apoyo", "apoyar", "acuerdo", "colaboración", "colaborar", "progreso", "progresar",
    "inversión", "invertir", "oportunidad", "solución", "resolver", "victoria",
    "ganar", "celebrar", "celebración", "inaugurar", "inauguración", "reconocimiento",
    "reconocer", "premio", "premiar", "felicitar", "felicitación", "bienestar",
    "esperanza", "optimismo", "optimista", "satisfacción", "satisfecho", "excelente",
    "extraordinario", "notable", "destacado", "sobresaliente", "impresionante",
    "maravilloso", "fantástico", "increíble", "espectacular", "triunfo", "triunfar",
];

/// Words flagging a document as negative coverage.
pub static NEGATIVE_WORDS: &[&str] = &[
    "crisis", "problema", "problemático", "conflicto", "violencia", "violento",
    "muerte", "muerto", "matar", "asesinar", "asesinato", "homicidio", "ejecutar",
    "ejecutado", "secuestro", "secuestrar", "robo", "robar", "asalto", "asaltar",
    "corrupción", "corrupto", "fraude", "fraudulento", "desvío", "malversación",
    "escándalo", "acusación", "acusar", "denunciar", "denuncia", "delito", "crimen",
    "criminal", "narcotráfico", "narco", "cartel", "zetas", "cjng", "balacera",
    "enfrentamiento", "inseguridad", "peligro", "peligroso", "amenaza", "amenazar",
    "extorsión", "extorsionar", "desaparición", "desaparecer", "desaparecido",
    "víctima", "tragedia", "trágico", "desastre", "devastación", "destrucción",
    "destruir", "daño", "dañar", "pérdida", "perder", "fracaso", "fracasar",
    "rechazo", "rechazar", "protesta", "protestar", "manifestación", "bloqueo",
    "bloquear", "huelga", "paro", "negligencia", "negligente", "incompetencia",
    "incompetente", "impunidad", "injusticia", "ilegal", "irregularidad",
];

/// Capitalized pairs that look like names but are place names or common
/// two-word phrases. The list is manually curated and inherently incomplete;
/// `load_false_positives` lets deployments extend it from a file.
pub fn default_false_positives() -> HashSet<String> {
    [
        "Boca Del", "Del Río", "De La", "La Cruz", "El Puerto", "Las Vegas",
        "Los Angeles", "San Juan", "Nueva York", "Estados Unidos", "Al Calor",
        "Calor Político", "Monte Alto", "Paso Del", "Zona Norte", "Zona Centro",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Read additional false-positive names from a newline-separated file.
/// Blank lines and `#` comments are skipped.
pub fn load_false_positives(path: &Path) -> Result<HashSet<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read false-positive list: {}", path.display()))?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(|l| l.to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopwords_cover_function_words_and_filler() {
        for w in ["de", "que", "estuviésemos", "informó", "millones", "ciudad"] {
            assert!(is_stopword(w), "{w} should be a stopword");
        }
        assert!(!is_stopword("duarte"));
        assert!(!is_stopword("huracán"));
    }

    #[test]
    fn test_lexicons_disjoint() {
        let pos: HashSet<_> = POSITIVE_WORDS.iter().collect();
        for w in NEGATIVE_WORDS {
            assert!(!pos.contains(w), "{w} appears in both lexicons");
        }
    }

    #[test]
    fn test_default_false_positives() {
        let fp = default_false_positives();
        assert!(fp.contains("Estados Unidos"));
        assert!(!fp.contains("Javier Duarte"));
    }
}
