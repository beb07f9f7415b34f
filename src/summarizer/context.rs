//! Reduction of a processed note to a compact visit context

use crate::types::{Intent, ProcessedNote, SentimentAnalysis, Topic, VisitContext};
use std::collections::BTreeSet;

/// Intents that win the primary slot, highest priority first
const PRIORITY_INTENTS: [Intent; 3] = [Intent::FollowUp, Intent::Rejection, Intent::Restriction];

pub struct ContextExtractor;

impl ContextExtractor {
    pub fn extract(note: &ProcessedNote) -> VisitContext {
        VisitContext {
            primary_theme: Self::primary_theme(&note.topics).label().to_string(),
            emotional_state: Self::emotional_state(&note.sentiment).to_string(),
            primary_intent: Self::primary_intent(&note.intents),
            has_restrictions: !note.restrictions.is_empty(),
            sentiment: note.sentiment.score,
        }
    }

    /// First topic in declaration order, or [`Topic::General`]
    pub fn primary_theme(topics: &BTreeSet<Topic>) -> Topic {
        topics.iter().next().copied().unwrap_or(Topic::General)
    }

    pub fn primary_intent(intents: &BTreeSet<Intent>) -> Option<Intent> {
        PRIORITY_INTENTS
            .iter()
            .find(|intent| intents.contains(*intent))
            .copied()
            .or_else(|| intents.iter().next().copied())
    }

    /// Spanish label for a sentiment reading
    pub fn emotional_state(sentiment: &SentimentAnalysis) -> &'static str {
        let strong = sentiment.intensity > 0.7;
        match sentiment.score {
            s if s > 0.5 => {
                if strong {
                    "Entusiasmo"
                } else {
                    "Receptividad"
                }
            }
            s if s > 0.2 => "Interés moderado",
            s if s < -0.5 => {
                if strong {
                    "Rechazo firme"
                } else {
                    "Desinterés"
                }
            }
            s if s < -0.2 => "Indiferencia",
            _ => "Neutral",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(score: f64, intensity: f64) -> SentimentAnalysis {
        SentimentAnalysis::new(score, intensity, BTreeSet::new())
    }

    #[test]
    fn test_emotional_state_bands() {
        assert_eq!(ContextExtractor::emotional_state(&reading(0.8, 0.9)), "Entusiasmo");
        assert_eq!(ContextExtractor::emotional_state(&reading(0.8, 0.4)), "Receptividad");
        assert_eq!(ContextExtractor::emotional_state(&reading(0.3, 0.4)), "Interés moderado");
        assert_eq!(ContextExtractor::emotional_state(&reading(0.0, 0.1)), "Neutral");
        assert_eq!(ContextExtractor::emotional_state(&reading(-0.3, 0.4)), "Indiferencia");
        assert_eq!(ContextExtractor::emotional_state(&reading(-0.8, 0.4)), "Desinterés");
        assert_eq!(ContextExtractor::emotional_state(&reading(-0.8, 0.9)), "Rechazo firme");
    }

    #[test]
    fn test_band_edges_are_exclusive() {
        assert_eq!(ContextExtractor::emotional_state(&reading(0.5, 1.0)), "Interés moderado");
        assert_eq!(ContextExtractor::emotional_state(&reading(0.2, 1.0)), "Neutral");
        assert_eq!(ContextExtractor::emotional_state(&reading(-0.2, 1.0)), "Neutral");
    }

    #[test]
    fn test_primary_intent_priority() {
        let intents = BTreeSet::from([Intent::Acceptance, Intent::Rejection, Intent::FollowUp]);
        assert_eq!(ContextExtractor::primary_intent(&intents), Some(Intent::FollowUp));

        let intents = BTreeSet::from([Intent::Restriction, Intent::Rejection]);
        assert_eq!(ContextExtractor::primary_intent(&intents), Some(Intent::Rejection));

        let intents = BTreeSet::from([Intent::Question, Intent::Acceptance]);
        assert_eq!(ContextExtractor::primary_intent(&intents), Some(Intent::Acceptance));

        assert_eq!(ContextExtractor::primary_intent(&BTreeSet::new()), None);
    }

    #[test]
    fn test_extract() {
        let mut note = ProcessedNote::empty("x", None, 1.0);
        assert_eq!(ContextExtractor::extract(&note).primary_theme, "General");

        note.topics.insert(Topic::Scheduling);
        note.topics.insert(Topic::Religious);
        note.restrictions.insert("avisar antes".to_string());
        let context = ContextExtractor::extract(&note);

        assert_eq!(context.primary_theme, "Creencias");
        assert_eq!(context.emotional_state, "Neutral");
        assert!(context.has_restrictions);
        assert_eq!(context.primary_intent, None);
    }
}
