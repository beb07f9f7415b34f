//! Phrase banks for narrative generation
//!
//! Each category holds interchangeable phrasings of the same message.
//! Selection within a category is random; the category itself is always
//! chosen deterministically by the narrative generator.

use rand::seq::SliceRandom;
use rand::Rng;

/// Returned when no visit could be analyzed
pub const INSUFFICIENT_INFORMATION: &str = "No hay suficiente información para generar un resumen.";

/// Single positive visit, takes precedence over every other recommendation
pub const FIRST_POSITIVE_CONTACT: &str =
    "📖 Primer contacto positivo. Podría considerarse una revisita.";

/// Prefix when the latest note names the person to revisit
pub const REVISIT_WITH_PREFIX: &str = "🔁 Revisita con";

/// Prefix when the latest note asks for a follow-up without a name
pub const REVISIT_MARKER: &str = "🔁 Esta es una revisita.";

/// Used by the detailed narrative when no pattern was found
pub const NO_CLEAR_PATTERN: &str = "No hay patrones claros";

const REJECTION: &[&str] = &[
    "🛑 Parece que no quieren saber nada por ahora.",
    "🚫 Las visitas no han sido bien recibidas últimamente.",
    "🟥 Ha habido una actitud constante de rechazo.",
    "⚠️ Varias señales apuntan a desinterés firme.",
    "🔴 Rechazo claro en más de una ocasión.",
    "📉 La persona no ha mostrado apertura recientemente.",
];

const RESTRICTION: &[&str] = &[
    "🚫 Hay límites que debemos respetar al regresar.",
    "🔒 Nos han pedido ciertas condiciones para futuras visitas.",
    "⛔️ Han establecido reglas claras sobre cuándo o cómo visitar.",
    "🗒️ Es importante seguir las indicaciones que nos dieron.",
    "🔐 La interacción está limitada por petición de la persona.",
];

const FOLLOW_UP: &[&str] = &[
    "🔔 Vale la pena regresar y seguir la conversación.",
    "📞 Hay razones para dar seguimiento pronto.",
    "📌 Se puede volver en otra ocasión para continuar.",
    "📅 Es un buen momento para retomar el contacto.",
    "🕒 Hay interés. Una próxima visita podría ser útil.",
];

const HIGH_ENGAGEMENT: &[&str] = &[
    "💬 Han estado muy receptivos y con buena actitud.",
    "🌱 Muestran interés real. Es buena oportunidad para avanzar.",
    "📖 Escuchan con atención. Vale la pena seguir compartiendo.",
    "🙌 Hay apertura. Podemos ofrecer más material sin problema.",
    "✅ Muy buena disposición. Se puede proponer algo más profundo.",
];

const MODERATE_ENGAGEMENT: &[&str] = &[
    "📝 Hay algo de interés. Podríamos seguir intentando.",
    "👀 A veces escuchan, vale la pena observar su reacción.",
    "📚 Escucharon con respeto. Quizás haya una oportunidad.",
    "🔍 No es rechazo, pero tampoco mucho interés aún.",
    "🙂 Algunas respuestas positivas. Veremos cómo evoluciona.",
];

const LOW_ENGAGEMENT: &[&str] = &[
    "🔎 Poco interés hasta ahora. Tal vez otro enfoque ayude.",
    "😐 No han respondido mucho. Tocará ser pacientes.",
    "💤 La reacción ha sido mínima. Veremos si cambia.",
    "📉 Aún no conectamos del todo. Necesita tiempo.",
    "🪶 No se han mostrado muy interesados por el momento.",
];

const NEGATIVE_ENGAGEMENT: &[&str] = &[
    "⚠️ No ha ido bien. Mejor hacer una pausa.",
    "🚷 No es buen momento para insistir.",
    "❌ Han rechazado varias veces. Mejor esperar.",
    "🧱 La actitud ha sido muy cerrada.",
    "⛔️ Parece que no están cómodos con nuestras visitas.",
];

const IMPROVING_TRAJECTORY: &[&str] = &[
    "📈 Han mejorado con el tiempo. Aprovechemos eso.",
    "🆙 Poco a poco están más abiertos.",
    "🌤️ Últimamente ha habido más receptividad.",
    "👣 Se nota un avance, aunque sea pequeño.",
    "🔝 Va mejorando. Sigamos con tacto.",
];

const DECLINING_TRAJECTORY: &[&str] = &[
    "📉 Ha disminuido la apertura últimamente.",
    "⛔️ Están menos receptivos que antes.",
    "🔻 El interés parece estar bajando.",
    "🚦 Hay menos participación que en visitas anteriores.",
    "🪃 Antes escuchaban más. Ahora no tanto.",
];

const STABLE_TRAJECTORY: &[&str] = &[
    "⚖️ La actitud se ha mantenido estable.",
    "🔁 No ha habido muchos cambios últimamente.",
    "📊 La respuesta es constante, ni mejor ni peor.",
    "🟰 Siguen igual que en visitas pasadas.",
    "🛤️ La situación está estable. Podemos seguir igual.",
];

const FLUCTUATING_TRAJECTORY: &[&str] = &[
    "🔄 Algunas veces bien, otras no tanto.",
    "🎢 Cambios de actitud entre visitas.",
    "📉📈 A veces abren, a veces no.",
    "🌀 Es impredecible. Mejor ir con cuidado.",
    "⛅️ Depende del día cómo responden.",
];

/// Phrase bank category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhraseCategory {
    Rejection,
    Restriction,
    FollowUp,
    HighEngagement,
    ModerateEngagement,
    LowEngagement,
    NegativeEngagement,
    ImprovingTrajectory,
    DecliningTrajectory,
    StableTrajectory,
    FluctuatingTrajectory,
}

impl PhraseCategory {
    pub const ALL: [PhraseCategory; 11] = [
        PhraseCategory::Rejection,
        PhraseCategory::Restriction,
        PhraseCategory::FollowUp,
        PhraseCategory::HighEngagement,
        PhraseCategory::ModerateEngagement,
        PhraseCategory::LowEngagement,
        PhraseCategory::NegativeEngagement,
        PhraseCategory::ImprovingTrajectory,
        PhraseCategory::DecliningTrajectory,
        PhraseCategory::StableTrajectory,
        PhraseCategory::FluctuatingTrajectory,
    ];

    pub fn phrases(&self) -> &'static [&'static str] {
        match self {
            PhraseCategory::Rejection => REJECTION,
            PhraseCategory::Restriction => RESTRICTION,
            PhraseCategory::FollowUp => FOLLOW_UP,
            PhraseCategory::HighEngagement => HIGH_ENGAGEMENT,
            PhraseCategory::ModerateEngagement => MODERATE_ENGAGEMENT,
            PhraseCategory::LowEngagement => LOW_ENGAGEMENT,
            PhraseCategory::NegativeEngagement => NEGATIVE_ENGAGEMENT,
            PhraseCategory::ImprovingTrajectory => IMPROVING_TRAJECTORY,
            PhraseCategory::DecliningTrajectory => DECLINING_TRAJECTORY,
            PhraseCategory::StableTrajectory => STABLE_TRAJECTORY,
            PhraseCategory::FluctuatingTrajectory => FLUCTUATING_TRAJECTORY,
        }
    }

    /// Uniformly random phrase from this category
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        self.phrases().choose(rng).copied().unwrap_or_default()
    }

    /// Whether `phrase` is one of this category's phrases
    pub fn contains(&self, phrase: &str) -> bool {
        self.phrases().contains(&phrase)
    }

    /// Whether any of this category's phrases occurs inside `text`
    pub fn appears_in(&self, text: &str) -> bool {
        self.phrases().iter().any(|p| text.contains(p))
    }
}
