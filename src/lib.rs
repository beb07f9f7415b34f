//! Visit Summarizer - field-visit note analysis and next-step recommendations
//!
//! Reads the chronological free-text notes left after each visit to a
//! contact and produces:
//! - A per-note analysis (lemmas, sentiment, topics, intents, restrictions)
//! - A relationship model (weighted sentiment, trajectory, engagement level,
//!   recurring patterns)
//! - A Spanish narrative in one of four styles recommending what to do next
//! - The list of notes that could not be classified and need a human look
//!
//! # Architecture
//!
//! - **Types**: Closed vocabularies and per-note analysis records
//! - **Config**: TOML-loadable tunables for weighting, memory and patterns
//! - **Summarizer**: The analysis pipeline and narrative generator
//!
//! The engine never fails on input: empty or "NC" notes are skipped and a
//! history without visits renders a fixed "insufficient information" text.
//!
//! # Example
//!
//! ```no_run
//! use visit_summarizer_core::{NarrativeStyle, SummarizerBuilder};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let notes = vec![
//!     "Aceptó la revista y preguntó por la familia".to_string(),
//!     "NC".to_string(),
//!     "Revisita de Pedro, quiere volver a hablar".to_string(),
//! ];
//!
//! let summarizer = SummarizerBuilder::new().build(&notes, None);
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! println!("{}", summarizer.generate_action_oriented_narrative_with(&mut rng));
//! println!("{}", summarizer.generate_narrative_with(NarrativeStyle::Detailed, &mut rng));
//! for note in summarizer.notes_to_review() {
//!     println!("revisar: {}", note);
//! }
//! ```

pub mod config;
pub mod error;
pub mod summarizer;
pub mod types;

// Re-export commonly used types
pub use config::SummarizerConfig;
pub use error::{Result, SummarizerError};
pub use summarizer::{
    EngagementLevel, RelationshipModel, SummarizerBuilder, SummaryReport, Trajectory,
    VisitSummarizer,
};
pub use types::{
    EmotionalTone, Intent, NarrativeStyle, ProcessedNote, SentimentAnalysis, Topic, VisitContext,
    VisitHistory, VisitInsight,
};
