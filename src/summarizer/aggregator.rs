//! Merges sentence-level analyses into one note-level analysis

use crate::types::{ProcessedNote, SentimentAnalysis};
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

/// Combines per-sentence [`ProcessedNote`]s
pub struct NoteAggregator;

impl NoteAggregator {
    /// Union the sets, average score and intensity, keep the last follow-up name
    ///
    /// With no sentences the result is [`ProcessedNote::empty`].
    pub fn combine(
        original: &str,
        date: Option<DateTime<Utc>>,
        weight: f64,
        sentences: &[ProcessedNote],
    ) -> ProcessedNote {
        let mut note = ProcessedNote::empty(original, date, weight);
        if sentences.is_empty() {
            return note;
        }

        let mut total_score = 0.0;
        let mut total_intensity = 0.0;
        let mut tones = BTreeSet::new();

        for sentence in sentences {
            note.lemmas.extend(sentence.lemmas.iter().cloned());
            note.topics.extend(sentence.topics.iter().copied());
            note.intents.extend(sentence.intents.iter().copied());
            note.restrictions.extend(sentence.restrictions.iter().cloned());

            total_score += sentence.sentiment.score;
            total_intensity += sentence.sentiment.intensity;
            tones.extend(sentence.sentiment.emotional_tones.iter().copied());

            if let Some(name) = &sentence.follow_up_subject {
                note.follow_up_subject = Some(name.clone());
            }
        }

        let count = sentences.len() as f64;
        note.sentiment =
            SentimentAnalysis::new(total_score / count, total_intensity / count, tones);
        note
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EmotionalTone, Intent, Topic, MIN_INTENSITY};

    fn sentence(score: f64, intensity: f64) -> ProcessedNote {
        let mut note = ProcessedNote::empty("s", None, 1.0);
        note.sentiment = SentimentAnalysis::new(score, intensity, BTreeSet::new());
        note
    }

    #[test]
    fn test_empty_sentences_yield_neutral_note() {
        let note = NoteAggregator::combine("NC?", None, 0.8, &[]);
        assert_eq!(note.original, "NC?");
        assert_eq!(note.weight, 0.8);
        assert_eq!(note.sentiment.score, 0.0);
        assert_eq!(note.sentiment.intensity, MIN_INTENSITY);
        assert!(note.topics.is_empty());
    }

    #[test]
    fn test_sentiment_is_averaged() {
        let sentences = [sentence(0.8, 0.5), sentence(-0.2, 0.3)];
        let note = NoteAggregator::combine("a. b.", None, 1.0, &sentences);
        assert!((note.sentiment.score - 0.3).abs() < 1e-9);
        assert!((note.sentiment.intensity - 0.4).abs() < 1e-9);
        assert!(!note.sentiment.is_ambiguous);
    }

    #[test]
    fn test_sets_are_unioned() {
        let mut first = sentence(0.0, 0.1);
        first.topics.insert(Topic::Family);
        first.intents.insert(Intent::Question);
        first.sentiment.emotional_tones.insert(EmotionalTone::Openness);

        let mut second = sentence(0.0, 0.1);
        second.topics.insert(Topic::Study);
        second.intents.insert(Intent::Question);
        second.restrictions.insert("llamar antes".to_string());

        let note = NoteAggregator::combine("x", None, 1.0, &[first, second]);
        assert_eq!(note.topics, BTreeSet::from([Topic::Family, Topic::Study]));
        assert_eq!(note.intents, BTreeSet::from([Intent::Question]));
        assert_eq!(note.restrictions.len(), 1);
        assert!(note.sentiment.emotional_tones.contains(&EmotionalTone::Openness));
    }

    #[test]
    fn test_last_follow_up_subject_wins() {
        let mut first = sentence(0.0, 0.1);
        first.follow_up_subject = Some("Ana".to_string());
        let mut second = sentence(0.0, 0.1);
        second.follow_up_subject = Some("Luis".to_string());
        let third = sentence(0.0, 0.1);

        let note = NoteAggregator::combine("x", None, 1.0, &[first, second, third]);
        assert_eq!(note.follow_up_subject.as_deref(), Some("Luis"));
    }
}
