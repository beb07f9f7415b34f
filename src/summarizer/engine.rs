//! Visit summarization engine
//!
//! Built once from the full note history; every later call is a read-only
//! render over the finished model.

use super::{
    aggregator::NoteAggregator,
    analyzer::NoteAnalyzer,
    context::ContextExtractor,
    memory::ContextualMemory,
    narrative::NarrativeGenerator,
    patterns::PatternRecognizer,
    recency::RecencyWeighter,
    relationship::{EngagementLevel, RelationshipModel, Trajectory},
    segmenter,
    utils::phrases::{REVISIT_MARKER, REVISIT_WITH_PREFIX},
};
use crate::config::SummarizerConfig;
use crate::types::{Intent, NarrativeStyle, ProcessedNote, VisitContext, VisitInsight};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Builder for [`VisitSummarizer`]
#[derive(Debug, Clone, Default)]
pub struct SummarizerBuilder {
    config: SummarizerConfig,
    now: Option<DateTime<Utc>>,
}

impl SummarizerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: SummarizerConfig) -> Self {
        self.config = config;
        self
    }

    /// Reference time for recency weights (defaults to `Utc::now()`)
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    /// Process the whole history
    ///
    /// `notes` are oldest first. `dates` runs parallel to them and may be
    /// shorter; notes past its end get a neutral weight and no date.
    ///
    /// A configuration that fails [`SummarizerConfig::validate`] is replaced
    /// by the defaults.
    pub fn build<S: AsRef<str>>(
        self,
        notes: &[S],
        dates: Option<&[DateTime<Utc>]>,
    ) -> VisitSummarizer {
        let now = self.now.unwrap_or_else(Utc::now);
        let config = match self.config.validate() {
            Ok(()) => self.config,
            Err(e) => {
                warn!("Ignoring invalid configuration, using defaults: {}", e);
                SummarizerConfig::default()
            }
        };

        let weights = RecencyWeighter::new(&config.recency).weights(notes.len(), dates, now);
        let analyzer = NoteAnalyzer::new();

        let mut processed_notes = Vec::new();
        let mut visit_contexts = Vec::new();
        let mut memory = ContextualMemory::new(config.memory.capacity_for(notes.len()));
        let mut patterns = PatternRecognizer::new(config.patterns.clone());

        for (idx, raw) in notes.iter().enumerate() {
            let text = raw.as_ref().trim();
            if text.is_empty() || text == config.no_contact_marker {
                debug!("Skipping note {}: no contact", idx + 1);
                continue;
            }

            let date = dates.and_then(|d| d.get(idx)).copied();
            let weight = weights[idx];

            let sentences: Vec<ProcessedNote> = segmenter::sentences(text)
                .map(|sentence| analyzer.analyze_sentence(sentence, date, weight))
                .collect();
            let note = NoteAggregator::combine(text, date, weight, &sentences);

            let context = ContextExtractor::extract(&note);
            debug!(
                "Note {}: {} sentences, weight={:.2}, score={:.2}, theme={}",
                idx + 1,
                sentences.len(),
                weight,
                note.sentiment.score,
                context.primary_theme
            );

            memory.store(format!("Visita {}: {}", idx + 1, context.primary_theme), weight);
            patterns.learn(&note);
            visit_contexts.push(context);
            processed_notes.push(note);
        }

        let mut relationship = RelationshipModel::new();
        for (idx, note) in processed_notes.iter().enumerate() {
            relationship.incorporate(&VisitInsight::from_note(idx + 1, note));
        }
        relationship.apply_patterns(patterns.identify_significant_patterns());

        info!(
            "Summarized {} of {} notes: sentiment={:.2}, engagement={}, trajectory={}",
            relationship.visit_count,
            notes.len(),
            relationship.overall_sentiment,
            relationship.engagement_level,
            relationship.trajectory
        );

        VisitSummarizer {
            config,
            processed_notes,
            visit_contexts,
            relationship,
            memory,
            patterns,
        }
    }
}

/// Summary of one contact's visit history
#[derive(Debug, Clone)]
pub struct VisitSummarizer {
    config: SummarizerConfig,
    processed_notes: Vec<ProcessedNote>,
    visit_contexts: Vec<VisitContext>,
    relationship: RelationshipModel,
    memory: ContextualMemory,
    patterns: PatternRecognizer,
}

/// Machine-readable summary
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    pub visit_count: usize,
    pub overall_sentiment: f64,
    pub trajectory: Trajectory,
    pub engagement_level: EngagementLevel,
    pub rejection_count: usize,
    pub acceptance_count: usize,
    pub patterns: Vec<String>,
    pub visits: Vec<VisitContext>,
    pub notes_to_review: Vec<String>,
    pub style: NarrativeStyle,
    pub narrative: String,
}

impl VisitSummarizer {
    /// Summarize with default configuration and the current time
    pub fn new<S: AsRef<str>>(notes: &[S], dates: Option<&[DateTime<Utc>]>) -> Self {
        SummarizerBuilder::new().build(notes, dates)
    }

    pub fn builder() -> SummarizerBuilder {
        SummarizerBuilder::new()
    }

    fn narrator(&self) -> NarrativeGenerator<'_> {
        NarrativeGenerator::new(&self.relationship, &self.visit_contexts, &self.memory)
            .with_top_insights(self.config.memory.top_insights)
    }

    /// Render a narrative with a thread-local random source
    pub fn generate_narrative(&self, style: NarrativeStyle) -> String {
        self.generate_narrative_with(style, &mut rand::thread_rng())
    }

    pub fn generate_narrative_with<R: Rng + ?Sized>(
        &self,
        style: NarrativeStyle,
        rng: &mut R,
    ) -> String {
        self.narrator().generate(style, rng)
    }

    /// Action-oriented narrative, prefixed with a revisit marker when the
    /// latest note names someone to revisit or asks for a follow-up
    pub fn generate_action_oriented_narrative(&self) -> String {
        self.generate_action_oriented_narrative_with(&mut rand::thread_rng())
    }

    pub fn generate_action_oriented_narrative_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let narrative = self.generate_narrative_with(NarrativeStyle::ActionOriented, rng);

        match self.processed_notes.last() {
            Some(ProcessedNote {
                follow_up_subject: Some(name),
                ..
            }) => format!("{} {}. {}", REVISIT_WITH_PREFIX, capitalize(name), narrative),
            Some(last) if last.intents.contains(&Intent::FollowUp) => {
                format!("{} {}", REVISIT_MARKER, narrative)
            }
            _ => narrative,
        }
    }

    /// Original text of every note that is ambiguous and carries no intent
    pub fn notes_to_review(&self) -> Vec<&str> {
        self.processed_notes
            .iter()
            .filter(|note| note.needs_review())
            .map(|note| note.original.as_str())
            .collect()
    }

    pub fn report_with<R: Rng + ?Sized>(
        &self,
        style: NarrativeStyle,
        rng: &mut R,
    ) -> SummaryReport {
        let narrative = match style {
            NarrativeStyle::ActionOriented => self.generate_action_oriented_narrative_with(rng),
            other => self.generate_narrative_with(other, rng),
        };
        let model = &self.relationship;

        SummaryReport {
            visit_count: model.visit_count,
            overall_sentiment: model.overall_sentiment,
            trajectory: model.trajectory,
            engagement_level: model.engagement_level,
            rejection_count: model.rejection_count,
            acceptance_count: model.acceptance_count,
            patterns: model.patterns.clone(),
            visits: self.visit_contexts.clone(),
            notes_to_review: self.notes_to_review().into_iter().map(String::from).collect(),
            style,
            narrative,
        }
    }

    pub fn processed_notes(&self) -> &[ProcessedNote] {
        &self.processed_notes
    }

    pub fn visit_contexts(&self) -> &[VisitContext] {
        &self.visit_contexts
    }

    pub fn relationship(&self) -> &RelationshipModel {
        &self.relationship
    }

    pub fn memory(&self) -> &ContextualMemory {
        &self.memory
    }

    pub fn patterns(&self) -> &PatternRecognizer {
        &self.patterns
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }
}

/// Upper-case the first letter, lower-case the rest
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summarizer::utils::phrases::{PhraseCategory, FIRST_POSITIVE_CONTACT};
    use chrono::{Duration, TimeZone};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn build(notes: &[&str]) -> VisitSummarizer {
        SummarizerBuilder::new().with_now(now()).build(notes, None)
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("pEDRO"), "Pedro");
        assert_eq!(capitalize("ángel"), "Ángel");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_no_contact_notes_are_skipped() {
        let summarizer = build(&["NC", "", "   ", "Aceptó la revista"]);
        assert_eq!(summarizer.relationship().visit_count, 1);
        assert_eq!(summarizer.processed_notes().len(), 1);
        assert_eq!(summarizer.visit_contexts().len(), 1);
        assert_eq!(summarizer.memory().len(), 1);
    }

    #[test]
    fn test_memory_label_uses_raw_position() {
        let summarizer = build(&["NC", "Le dejé una revista"]);
        let labels: Vec<_> = summarizer.memory().insights().map(|i| i.label.clone()).collect();
        assert_eq!(labels, vec!["Visita 2: Publicación".to_string()]);
        assert_eq!(summarizer.memory().capacity(), 20);
    }

    #[test]
    fn test_custom_no_contact_marker() {
        let mut config = SummarizerConfig::default();
        config.no_contact_marker = "SC".to_string();

        let summarizer = SummarizerBuilder::new()
            .with_config(config)
            .with_now(now())
            .build(&["SC", "NC"], None);
        assert_eq!(summarizer.relationship().visit_count, 1);
        assert_eq!(summarizer.processed_notes()[0].original, "NC");
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let mut config = SummarizerConfig::default();
        config.recency.scale_days = 0.0;
        config.memory.min_capacity = 0;

        let dates = [now() - Duration::days(30), now() - Duration::days(90)];
        let summarizer = SummarizerBuilder::new()
            .with_config(config)
            .with_now(now())
            .build(&["Aceptó la revista", "Le dejé un libro"], Some(&dates));

        assert_eq!(summarizer.config(), &SummarizerConfig::default());
        assert_eq!(summarizer.memory().len(), 2);
        assert_eq!(summarizer.processed_notes()[0].weight, 1.0);
        assert!(summarizer.processed_notes().iter().all(|n| n.weight.is_finite()));
        assert!(summarizer.relationship().overall_sentiment.is_finite());
    }

    #[test]
    fn test_note_text_is_trimmed() {
        let summarizer = build(&["  Preguntó por la biblia  "]);
        assert_eq!(summarizer.processed_notes()[0].original, "Preguntó por la biblia");
    }

    #[test]
    fn test_first_positive_contact() {
        let summarizer = build(&["Aceptó el folleto con mucho interés"]);
        let text = summarizer.generate_action_oriented_narrative_with(&mut StdRng::seed_from_u64(9));
        assert_eq!(text, FIRST_POSITIVE_CONTACT);
    }

    #[test]
    fn test_revisit_marker_with_name() {
        let summarizer = build(&["Revisita de pedro, aceptó el libro"]);
        let text = summarizer.generate_action_oriented_narrative_with(&mut StdRng::seed_from_u64(9));
        assert!(text.starts_with("🔁 Revisita con Pedro. "), "{}", text);
    }

    #[test]
    fn test_revisit_marker_without_name() {
        let summarizer = build(&["Saludó", "Dijo que podemos volver"]);
        let text = summarizer.generate_action_oriented_narrative_with(&mut StdRng::seed_from_u64(9));
        assert!(text.starts_with("🔁 Esta es una revisita. "), "{}", text);
        assert!(PhraseCategory::FollowUp.appears_in(&text), "{}", text);
    }

    #[test]
    fn test_notes_to_review() {
        let summarizer = build(&["Dijo hola", "Preguntó algo", "Rechazó la revista"]);
        assert_eq!(summarizer.notes_to_review(), vec!["Dijo hola"]);
    }

    #[test]
    fn test_report() {
        let summarizer = build(&["Dijo hola", "Le gustó la revista"]);
        let report = summarizer.report_with(NarrativeStyle::Concise, &mut StdRng::seed_from_u64(5));

        assert_eq!(report.visit_count, 2);
        assert_eq!(report.visits.len(), 2);
        assert_eq!(report.notes_to_review, vec!["Dijo hola".to_string()]);
        assert!(report.narrative.starts_with("Relación "));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["style"], "concise");
        assert_eq!(json["visits"][1]["primary_theme"], "Publicación");
    }
}
