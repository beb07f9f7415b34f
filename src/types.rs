//! Core data types for the visit summarizer
//!
//! Closed vocabularies (topics, intents, emotional tones, narrative styles)
//! are plain enums so classification and narrative selection can match on
//! them exhaustively. The per-note analysis types are immutable once built.

use crate::error::{Result, SummarizerError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

/// Lower bound for sentiment intensity
pub const MIN_INTENSITY: f64 = 0.1;

/// Upper bound for sentiment intensity
pub const MAX_INTENSITY: f64 = 1.0;

/// Scores with a smaller magnitude than this are considered ambiguous
pub const AMBIGUITY_THRESHOLD: f64 = 0.2;

/// Emotional tone detected in a span of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionalTone {
    Enthusiasm,
    Openness,
    Curiosity,
    Hesitation,
    Indifference,
    Rejection,
    Hostility,
}

/// Recognized visit topic
///
/// Declaration order is the iteration order of topic sets, which decides
/// the primary theme of a visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Family,
    Religious,
    Event,
    Meeting,
    Study,
    Publication,
    Personal,
    Availability,
    Invitation,
    Scheduling,
    /// Fallback theme, never produced by the lexicon
    General,
}

impl Topic {
    /// Human-readable label used in narratives
    pub fn label(&self) -> &'static str {
        match self {
            Topic::Family => "Familia",
            Topic::Religious => "Creencias",
            Topic::Event => "Evento",
            Topic::Meeting => "Reunión",
            Topic::Study => "Estudio",
            Topic::Publication => "Publicación",
            Topic::Personal => "Personal",
            Topic::Availability => "Disponibilidad",
            Topic::Invitation => "Invitación",
            Topic::Scheduling => "Programación",
            Topic::General => "General",
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Recognized intent of a visit note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Acceptance,
    Rejection,
    Question,
    FollowUp,
    Restriction,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Intent::Acceptance => "acceptance",
            Intent::Rejection => "rejection",
            Intent::Question => "question",
            Intent::FollowUp => "follow_up",
            Intent::Restriction => "restriction",
        };
        f.write_str(name)
    }
}

/// Emotional reading of a span of text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    /// -1.0 (negative) to 1.0 (positive)
    pub score: f64,
    /// 0.1 (mild) to 1.0 (strong)
    pub intensity: f64,
    pub emotional_tones: BTreeSet<EmotionalTone>,
    pub is_ambiguous: bool,
}

impl SentimentAnalysis {
    /// Build an analysis, clamping score and intensity into range
    pub fn new(score: f64, intensity: f64, emotional_tones: BTreeSet<EmotionalTone>) -> Self {
        let score = if score.is_nan() { 0.0 } else { score.clamp(-1.0, 1.0) };
        let intensity = if intensity.is_nan() {
            MIN_INTENSITY
        } else {
            intensity.clamp(MIN_INTENSITY, MAX_INTENSITY)
        };

        Self {
            score,
            intensity,
            emotional_tones,
            is_ambiguous: score.abs() < AMBIGUITY_THRESHOLD,
        }
    }

    /// Zero score at minimum intensity, no tones
    pub fn neutral() -> Self {
        Self::new(0.0, MIN_INTENSITY, BTreeSet::new())
    }
}

impl Default for SentimentAnalysis {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Full analysis of one visit note (or of one sentence, before aggregation)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedNote {
    pub original: String,
    pub date: Option<DateTime<Utc>>,
    /// Recency weight in (0, 2]
    pub weight: f64,
    pub lemmas: BTreeSet<String>,
    pub sentiment: SentimentAnalysis,
    pub topics: BTreeSet<Topic>,
    pub intents: BTreeSet<Intent>,
    pub restrictions: BTreeSet<String>,
    /// Name captured from "revisita de <name>"
    pub follow_up_subject: Option<String>,
}

impl ProcessedNote {
    /// Note with no linguistic signal at all
    pub fn empty(original: impl Into<String>, date: Option<DateTime<Utc>>, weight: f64) -> Self {
        Self {
            original: original.into(),
            date,
            weight,
            lemmas: BTreeSet::new(),
            sentiment: SentimentAnalysis::neutral(),
            topics: BTreeSet::new(),
            intents: BTreeSet::new(),
            restrictions: BTreeSet::new(),
            follow_up_subject: None,
        }
    }

    /// Ambiguous sentiment and no recognizable intent
    pub fn needs_review(&self) -> bool {
        self.sentiment.is_ambiguous && self.intents.is_empty()
    }
}

/// Compact summary of a single visit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitContext {
    pub primary_theme: String,
    pub emotional_state: String,
    pub primary_intent: Option<Intent>,
    pub has_restrictions: bool,
    pub sentiment: f64,
}

/// Unit of evidence fed to the relationship model
#[derive(Debug, Clone, PartialEq)]
pub struct VisitInsight {
    pub visit_number: usize,
    pub sentiment: SentimentAnalysis,
    pub topics: BTreeSet<Topic>,
    pub intents: BTreeSet<Intent>,
    pub restrictions: BTreeSet<String>,
    pub weight: f64,
}

impl VisitInsight {
    pub fn from_note(visit_number: usize, note: &ProcessedNote) -> Self {
        Self {
            visit_number,
            sentiment: note.sentiment.clone(),
            topics: note.topics.clone(),
            intents: note.intents.clone(),
            restrictions: note.restrictions.clone(),
            weight: note.weight,
        }
    }
}

/// Narrative rendering mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NarrativeStyle {
    /// Brief summary with key points only
    Concise,
    /// Comprehensive report with all data
    Detailed,
    /// Focused on next steps and recommendations
    ActionOriented,
    #[default]
    Balanced,
}

impl NarrativeStyle {
    pub const ALL: [NarrativeStyle; 4] = [
        NarrativeStyle::Concise,
        NarrativeStyle::Detailed,
        NarrativeStyle::ActionOriented,
        NarrativeStyle::Balanced,
    ];
}

impl std::fmt::Display for NarrativeStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            NarrativeStyle::Concise => "concise",
            NarrativeStyle::Detailed => "detailed",
            NarrativeStyle::ActionOriented => "action-oriented",
            NarrativeStyle::Balanced => "balanced",
        };
        f.write_str(name)
    }
}

impl FromStr for NarrativeStyle {
    type Err = SummarizerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "concise" => Ok(NarrativeStyle::Concise),
            "detailed" => Ok(NarrativeStyle::Detailed),
            "action-oriented" | "actionoriented" | "action" => Ok(NarrativeStyle::ActionOriented),
            "balanced" => Ok(NarrativeStyle::Balanced),
            other => Err(SummarizerError::InvalidInput(format!(
                "unknown narrative style '{}'",
                other
            ))),
        }
    }
}

/// Note history of one contact, as exchanged with the persistence layer
///
/// JSON shape: `{"notes": ["..."], "dates": ["2024-05-01T10:00:00Z"]}`;
/// `dates` is optional and may be shorter than `notes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitHistory {
    pub notes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dates: Option<Vec<DateTime<Utc>>>,
}

impl VisitHistory {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let history: VisitHistory = serde_json::from_str(json)?;
        if let Some(dates) = &history.dates {
            if dates.len() > history.notes.len() {
                return Err(SummarizerError::InvalidInput(format!(
                    "{} dates for {} notes",
                    dates.len(),
                    history.notes.len()
                )));
            }
        }
        Ok(history)
    }

    pub fn dates(&self) -> Option<&[DateTime<Utc>]> {
        self.dates.as_deref()
    }
}
