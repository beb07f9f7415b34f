//! Closed-vocabulary word lists for visit-note analysis
//!
//! All matching is done against lower-cased text. Sentiment, intent and
//! restriction entries are substring patterns (stems such as "interesad"
//! intentionally cover every inflection); topic keywords carry an explicit
//! match mode so short words do not fire inside longer ones.

use crate::types::{Intent, Topic};
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Spanish stop words excluded from lemma extraction
pub struct StopWords;

impl StopWords {
    pub fn spanish() -> &'static HashSet<&'static str> {
        static SET: Lazy<HashSet<&'static str>> = Lazy::new(|| {
            [
                "a", "al", "algo", "algunas", "algunos", "ante", "antes", "como", "con",
                "contra", "cual", "cuando", "de", "del", "desde", "donde", "durante", "e",
                "el", "ella", "ellas", "ellos", "en", "entre", "era", "erais", "eran", "eras",
                "eres", "es", "esa", "esas", "ese", "eso", "esos", "esta", "estaba",
                "estabais", "estaban", "estabas", "estad", "estada", "estadas", "estado",
                "estados", "estamos", "estando", "estar", "estaremos", "estará", "estarán",
                "estarás", "estaré", "estaréis", "estaría", "estaríais", "estaríamos",
                "estarían", "estarías", "estas", "este", "estemos", "esto", "estos", "estoy",
                "estuve", "estuviera", "estuvierais", "estuvieran", "estuvieras",
                "estuvieron", "estuviese", "estuvieseis", "estuviesen", "estuvieses",
                "estuvimos", "estuviste", "estuvisteis", "estuvo", "está", "estábamos",
                "estáis", "están", "estás", "esté", "estéis", "estén", "estés", "fue", "fuera",
                "fuerais", "fueran", "fueras", "fueron", "fuese", "fueseis", "fuesen",
                "fueses", "fui", "fuimos", "fuiste", "fuisteis", "ha", "habéis", "había",
                "habíais", "habíamos", "habían", "habías", "han", "has", "hasta", "hay",
                "haya", "hayáis", "hayamos", "hayan", "hayas", "he", "hemos", "hube",
                "hubiera", "hubierais", "hubieran", "hubieras", "hubieron", "hubiese",
                "hubieseis", "hubiesen", "hubieses", "hubimos", "hubiste", "hubisteis",
                "hubo", "la", "las", "le", "les", "lo", "los", "me", "mi", "mis", "mucho",
                "muchos", "muy", "más", "mí", "mía", "mías", "mío", "míos", "nada", "ni",
                "no", "nos", "nosotras", "nosotros", "nuestra", "nuestras", "nuestro",
                "nuestros", "o", "os", "otra", "otras", "otro", "otros", "para", "pero",
                "poco", "por", "porque", "que", "quien", "quienes", "qué", "se", "sea",
                "seamos", "sean", "seas", "sentid", "sentida", "sentidas", "sentido",
                "sentidos", "ser", "seremos", "será", "serán", "serás", "seré", "seréis",
                "sería", "seríais", "seríamos", "serían", "serías", "seáis", "si", "sido",
                "siendo", "sin", "sobre", "sois", "somos", "son", "soy", "su", "sus", "suya",
                "suyas", "suyo", "suyos", "sí", "también", "tanto", "te", "tendremos",
                "tendrá", "tendrán", "tendrás", "tendré", "tendréis", "tendría",
                "tendríais", "tendríamos", "tendrían", "tendrías", "tened", "tenemos",
                "tenga", "tengáis", "tengamos", "tengan", "tengas", "tengo", "tenida",
                "tenidas", "tenido", "tenidos", "teniendo", "tenéis", "tenía", "teníais",
                "teníamos", "tenían", "tenías", "ti", "tiene", "tienen", "tienes", "todo",
                "todos", "tu", "tus", "tuve", "tuviera", "tuvierais", "tuvieran", "tuvieras",
                "tuvieron", "tuviese", "tuvieseis", "tuviesen", "tuvieses", "tuvimos",
                "tuviste", "tuvisteis", "tuvo", "tuya", "tuyas", "tuyo", "tuyos", "tú", "un",
                "una", "uno", "unos", "vosotras", "vosotros", "vuestra", "vuestras",
                "vuestro", "vuestros", "y", "ya", "yo", "él", "éramos",
            ]
            .iter()
            .copied()
            .collect()
        });
        &SET
    }

    pub fn contains(word: &str) -> bool {
        Self::spanish().contains(word)
    }
}

/// A fragment test over lower-cased text
#[derive(Debug, Clone, Copy)]
pub enum Trigger {
    /// Any of the fragments is present
    Any(&'static [&'static str]),
    /// Every fragment is present
    All(&'static [&'static str]),
    /// The first fragment and any of the rest are present
    Guarded(&'static str, &'static [&'static str]),
}

impl Trigger {
    pub fn fires(&self, text: &str) -> bool {
        match self {
            Trigger::Any(fragments) => fragments.iter().any(|f| text.contains(f)),
            Trigger::All(fragments) => fragments.iter().all(|f| text.contains(f)),
            Trigger::Guarded(guard, fragments) => {
                text.contains(guard) && fragments.iter().any(|f| text.contains(f))
            }
        }
    }
}

/// A known idiom that adds to score and intensity when present
#[derive(Debug, Clone, Copy)]
pub struct PhraseBoost {
    pub trigger: Trigger,
    pub score: f64,
    pub intensity: f64,
}

/// Weighted sentiment patterns
pub struct SentimentLexicon;

impl SentimentLexicon {
    /// Positive stems and their weights
    pub const POSITIVE: &'static [(&'static str, f64)] = &[
        ("interesad", 0.6),
        ("acept", 0.5),
        ("amable", 0.4),
        ("atent", 0.3),
        ("escuch", 0.3),
        ("bien", 0.3),
        ("feliz", 0.7),
        ("content", 0.5),
        ("agrad", 0.6),
        ("recib", 0.3),
        ("gust", 0.5),
        ("abierto", 0.4),
    ];

    /// Negative stems and their (already negative) weights
    pub const NEGATIVE: &'static [(&'static str, f64)] = &[
        ("rechaz", -0.7),
        ("no ", -0.2),
        ("cerr", -0.5),
        ("molest", -0.6),
        ("enojad", -0.7),
        ("ocupad", -0.3),
        ("no puede", -0.4),
        ("no quiere", -0.6),
        ("desinteresad", -0.7),
        ("negativ", -0.5),
        ("hostil", -0.8),
    ];

    /// Markers that, placed right before a positive stem, invert it
    pub const NEGATION_MARKERS: &'static [&'static str] = &["no ", "sin "];

    /// Intensifiers that trigger the emphasis multiplier
    pub const INTENSIFIERS: &'static [&'static str] = &["muy ", "mucho", "bastante"];

    pub const EMPHASIS_SCORE_MULTIPLIER: f64 = 1.3;
    pub const EMPHASIS_INTENSITY_BONUS: f64 = 0.2;

    /// Known positive idioms
    pub const PHRASE_BOOSTS: &'static [PhraseBoost] = &[
        PhraseBoost {
            trigger: Trigger::Any(&["escuchó muy bien", "atendió muy bien"]),
            score: 0.4,
            intensity: 0.3,
        },
        // Catches spelling variants of the idiom above
        PhraseBoost {
            trigger: Trigger::All(&["escuch", "bien"]),
            score: 0.3,
            intensity: 0.2,
        },
    ];
}

/// How a topic keyword is matched against the words of a sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordMatch {
    /// Some word starts with the keyword ("catól" matches "católicos")
    Stem,
    /// Some word equals the keyword ("fe" must not match "feliz")
    Word,
}

/// Keyword to topic table
pub struct TopicLexicon;

impl TopicLexicon {
    pub const KEYWORDS: &'static [(&'static str, KeywordMatch, Topic)] = &[
        ("familia", KeywordMatch::Stem, Topic::Family),
        ("reunión", KeywordMatch::Word, Topic::Meeting),
        ("reuniones", KeywordMatch::Word, Topic::Meeting),
        ("invitación", KeywordMatch::Stem, Topic::Invitation),
        ("estudio", KeywordMatch::Stem, Topic::Study),
        ("publicación", KeywordMatch::Stem, Topic::Publication),
        ("libro", KeywordMatch::Stem, Topic::Publication),
        ("revista", KeywordMatch::Stem, Topic::Publication),
        ("biblia", KeywordMatch::Stem, Topic::Religious),
        ("dios", KeywordMatch::Word, Topic::Religious),
        ("oración", KeywordMatch::Stem, Topic::Religious),
        ("fe", KeywordMatch::Word, Topic::Religious),
        ("creencia", KeywordMatch::Stem, Topic::Religious),
        ("católic", KeywordMatch::Stem, Topic::Religious),
        ("cristian", KeywordMatch::Stem, Topic::Religious),
        ("enferm", KeywordMatch::Stem, Topic::Personal),
        ("salud", KeywordMatch::Stem, Topic::Personal),
        ("tiempo", KeywordMatch::Word, Topic::Availability),
        ("horario", KeywordMatch::Stem, Topic::Availability),
        ("conmemoración", KeywordMatch::Stem, Topic::Event),
        ("evento", KeywordMatch::Stem, Topic::Event),
        ("programar", KeywordMatch::Stem, Topic::Scheduling),
        ("cita", KeywordMatch::Word, Topic::Scheduling),
    ];
}

/// Intent triggers; several may fire for one sentence
pub struct IntentLexicon;

impl IntentLexicon {
    pub const TRIGGERS: &'static [(Intent, Trigger)] = &[
        (Intent::Question, Trigger::Any(&["pregunt"])),
        (
            Intent::Acceptance,
            Trigger::Any(&["aceptó", "recibió", "tomó"]),
        ),
        (
            Intent::Rejection,
            Trigger::Any(&[
                "rechaz",
                "no quiso",
                "no acept",
                "no quiere",
                "no le interesa",
                "cerró la puerta",
            ]),
        ),
        (
            Intent::FollowUp,
            Trigger::Any(&["volver", "regresar", "otra vez", "próxima", "seguimiento"]),
        ),
        (
            Intent::Restriction,
            Trigger::Guarded("no ", &["molestar", "tocar", "visitar"]),
        ),
    ];
}

/// Curated restriction phrases; every match is collected
pub struct RestrictionPhrases;

impl RestrictionPhrases {
    pub const ALL: &'static [&'static str] = &[
        // Explicit refusal
        "no tocar",
        "no molestar",
        "no visitar",
        "no recibir",
        "no aceptar visitas",
        "no aceptan",
        "no interesa",
        "no quiere saber nada",
        "no quiere que regresen",
        "rechazó",
        "cerró la puerta",
        "no le interesa",
        "no quiere escuchar",
        "ya dijo que no",
        // Visitor restrictions
        "que no toquen mujeres",
        "que no toquen hermanas",
        "solo hombres",
        "solo varones",
        "no quiere que vayan hermanas",
        "no acepta visitas de mujeres",
        "prefiere que vaya un hermano",
        "prefiere hombres",
        // Call ahead
        "avisar antes",
        "llamar antes",
        "solo con cita",
        "solo por teléfono",
        "solo si llama antes",
        "programar antes",
        "con aviso previo",
        // Hostility
        "agresivo",
        "gritó",
        "grosero",
        "reaccionó mal",
        "hostil",
        "se enojó",
        "levantó la voz",
        "amenazó",
        "nos insultó",
        "muy rudo",
        "maleducado",
        "reaccionó con violencia",
        // Apathy
        "no mostró interés",
        "no quiso hablar",
        "no habló",
        "no respondió",
        "actitud apática",
        "cerrado",
        "se negó",
        "ni abrió",
        "no dijo nada",
        "no quiso saber",
        "no prestó atención",
        // Soft refusals
        "no por ahora",
        "gracias pero no",
        "tal vez otro día",
        "ahora no",
        "está ocupado",
        "más adelante",
        "en otro momento",
        "no tiene tiempo",
        // Signs and physical cues
        "puso cartel de no molestar",
        "cartel de no visitas",
        "avisó por nota",
        "cerró sin hablar",
        "cerró sin decir nada",
        "se escondió",
        // Religious refusals
        "es de otra religión",
        "no quiere cambiar",
        "no está interesado en religión",
        "es muy católico",
        "dijo que ya tiene su fe",
        "no quiere hablar de religión",
    ];
}
