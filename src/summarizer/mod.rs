//! Visit-note summarization engine
//!
//! Turns the chronological free-text notes of one contact into per-note
//! analyses, a relationship model and a Spanish narrative recommending the
//! next step.
//!
//! ## Pipeline
//!
//! ```text
//! notes ──► segmenter ──► analyzer (per sentence) ──► aggregator
//!                                                         │
//!            ┌────────────────────┬───────────────────────┤
//!            ▼                    ▼                       ▼
//!     context extractor   pattern recognizer      relationship model
//!            │                    │                       │
//!            └──► contextual memory     patterns ─────────┤
//!                                                         ▼
//!                                                narrative generator
//! ```
//!
//! Recency weights are computed up front from the visit dates. Per-note
//! analysis is independent; folding into the relationship model is
//! sequential and assumes oldest-first order.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use visit_summarizer_core::summarizer::VisitSummarizer;
//! use visit_summarizer_core::NarrativeStyle;
//!
//! let notes = ["Aceptó la revista", "NC", "Preguntó por la familia"];
//! let summarizer = VisitSummarizer::new(&notes, None);
//!
//! println!("{}", summarizer.generate_action_oriented_narrative());
//! println!("{}", summarizer.generate_narrative(NarrativeStyle::Detailed));
//! ```

pub mod aggregator;
pub mod analyzer;
pub mod context;
pub mod engine;
pub mod memory;
pub mod narrative;
pub mod patterns;
pub mod recency;
pub mod relationship;
pub mod segmenter;
pub mod sentiment;
pub mod utils;

// Re-exports
pub use engine::{SummarizerBuilder, SummaryReport, VisitSummarizer};
pub use memory::{ContextualMemory, MemoryInsight};
pub use narrative::NarrativeGenerator;
pub use patterns::{PatternRecognizer, SentimentTrend};
pub use recency::RecencyWeighter;
pub use relationship::{EngagementLevel, RelationshipModel, Trajectory};
