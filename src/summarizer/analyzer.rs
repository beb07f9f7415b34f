//! Per-sentence linguistic feature extraction
//!
//! Produces a [`ProcessedNote`] for one sentence: lemmas, sentiment, topics,
//! intents, restriction phrases and the follow-up subject name. Absence of
//! signal yields empty sets and neutral sentiment, never an error.

use crate::summarizer::sentiment::SentimentDetector;
use crate::summarizer::utils::{
    IntentLexicon, KeywordMatch, NotePatterns, RestrictionPhrases, StopWords, TopicLexicon,
};
use crate::types::{Intent, ProcessedNote, Topic};
use chrono::{DateTime, Utc};
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::BTreeSet;
use tracing::trace;

/// Lemmas must be longer than this many characters
const MIN_LEMMA_CHARS: usize = 2;

/// Sentence analyzer
pub struct NoteAnalyzer {
    stemmer: Stemmer,
    sentiment: SentimentDetector,
}

impl Default for NoteAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteAnalyzer {
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::Spanish),
            sentiment: SentimentDetector::new(),
        }
    }

    /// Analyze one trimmed sentence
    pub fn analyze_sentence(
        &self,
        sentence: &str,
        date: Option<DateTime<Utc>>,
        weight: f64,
    ) -> ProcessedNote {
        let lower = sentence.to_lowercase();

        let note = ProcessedNote {
            original: sentence.to_string(),
            date,
            weight,
            lemmas: self.lemmas(&lower),
            sentiment: self.sentiment.analyze_lowercase(&lower),
            topics: Self::topics(&lower),
            intents: Self::intents(&lower),
            restrictions: Self::restrictions(&lower),
            follow_up_subject: NotePatterns::capture_follow_up_subject(sentence),
        };

        trace!(
            "Sentence {:?}: score={:.2} topics={:?} intents={:?} restrictions={}",
            sentence,
            note.sentiment.score,
            note.topics,
            note.intents,
            note.restrictions.len()
        );

        note
    }

    /// Stemmed content words, stop words excluded
    pub fn lemmas(&self, text: &str) -> BTreeSet<String> {
        NotePatterns::word()
            .find_iter(text)
            .map(|m| m.as_str().to_lowercase())
            .filter(|word| !StopWords::contains(word))
            .map(|word| self.stemmer.stem(&word).into_owned())
            .filter(|lemma| lemma.chars().count() > MIN_LEMMA_CHARS && !StopWords::contains(lemma))
            .collect()
    }

    /// Topics whose keywords occur in lower-cased `text`
    pub fn topics(text: &str) -> BTreeSet<Topic> {
        let words: Vec<&str> = NotePatterns::word()
            .find_iter(text)
            .map(|m| m.as_str())
            .collect();

        TopicLexicon::KEYWORDS
            .iter()
            .filter(|(keyword, mode, _)| {
                words.iter().any(|word| match mode {
                    KeywordMatch::Stem => word.starts_with(keyword),
                    KeywordMatch::Word => word == keyword,
                })
            })
            .map(|(_, _, topic)| *topic)
            .collect()
    }

    /// Every intent whose trigger fires on lower-cased `text`
    pub fn intents(text: &str) -> BTreeSet<Intent> {
        IntentLexicon::TRIGGERS
            .iter()
            .filter(|(_, trigger)| trigger.fires(text))
            .map(|(intent, _)| *intent)
            .collect()
    }

    /// Every curated restriction phrase found in lower-cased `text`
    pub fn restrictions(text: &str) -> BTreeSet<String> {
        RestrictionPhrases::ALL
            .iter()
            .filter(|phrase| text.contains(*phrase))
            .map(|phrase| phrase.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lemmas_skip_stop_words_and_short_words() {
        let analyzer = NoteAnalyzer::new();
        let lemmas = analyzer.lemmas("ella y yo leímos el folleto");

        assert!(!lemmas.is_empty());
        assert!(lemmas.iter().all(|l| l.chars().count() > 2));
        assert!(!lemmas.contains("ella"));
        assert!(lemmas.iter().any(|l| l.starts_with("follet")));
    }

    #[test]
    fn test_inflections_share_a_lemma() {
        let analyzer = NoteAnalyzer::new();
        let a = analyzer.lemmas("libros");
        let b = analyzer.lemmas("libro");
        assert_eq!(a, b);
    }

    #[test]
    fn test_topics_word_and_stem_matching() {
        let topics = NoteAnalyzer::topics("habló de su fe y de la biblia");
        assert_eq!(topics, BTreeSet::from([Topic::Religious]));

        // "fe" must not fire inside "feliz"
        assert!(NoteAnalyzer::topics("estaba feliz").is_empty());

        let topics = NoteAnalyzer::topics("le dejé una revista para la familia");
        assert_eq!(topics, BTreeSet::from([Topic::Family, Topic::Publication]));
    }

    #[test]
    fn test_multiple_intents() {
        let intents = NoteAnalyzer::intents("aceptó la revista y preguntó cuándo volver");
        assert_eq!(
            intents,
            BTreeSet::from([Intent::Acceptance, Intent::Question, Intent::FollowUp])
        );
    }

    #[test]
    fn test_restriction_intent_needs_negation() {
        assert!(NoteAnalyzer::intents("pidió no molestar").contains(&Intent::Restriction));
        assert!(!NoteAnalyzer::intents("vamos a visitar").contains(&Intent::Restriction));
    }

    #[test]
    fn test_all_restrictions_collected() {
        let found = NoteAnalyzer::restrictions("dijo no por ahora, llamar antes de ir");
        assert!(found.contains("no por ahora"));
        assert!(found.contains("llamar antes"));
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_analyze_sentence() {
        let analyzer = NoteAnalyzer::new();
        let note = analyzer.analyze_sentence("Es revisita de Pedro, aceptó el libro", None, 1.5);

        assert_eq!(note.original, "Es revisita de Pedro, aceptó el libro");
        assert_eq!(note.weight, 1.5);
        assert_eq!(note.follow_up_subject.as_deref(), Some("Pedro"));
        assert!(note.intents.contains(&Intent::Acceptance));
        assert!(note.topics.contains(&Topic::Publication));
        assert!(note.sentiment.score > 0.0);
    }

    #[test]
    fn test_no_signal() {
        let analyzer = NoteAnalyzer::new();
        let note = analyzer.analyze_sentence("Dijo hola", None, 1.0);

        assert!(note.topics.is_empty());
        assert!(note.intents.is_empty());
        assert!(note.restrictions.is_empty());
        assert!(note.needs_review());
    }
}
