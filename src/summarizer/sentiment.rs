//! Lexicon-based sentiment detection
//!
//! Scores a sentence by substring matching against weighted positive and
//! negative stems. A positive stem directly preceded by a negation marker
//! subtracts half its weight instead of adding it. Two known idioms add a
//! boost, and any intensifier scales the final score.

use crate::summarizer::utils::SentimentLexicon;
use crate::types::{EmotionalTone, SentimentAnalysis};
use std::collections::BTreeSet;

/// Weights above this mark a positive stem as enthusiastic
const ENTHUSIASM_THRESHOLD: f64 = 0.5;

/// Weights below this mark a negative stem as rejection
const REJECTION_THRESHOLD: f64 = -0.6;

#[derive(Debug, Clone, Copy, Default)]
pub struct SentimentDetector;

impl SentimentDetector {
    pub fn new() -> Self {
        Self
    }

    /// Analyze a sentence
    pub fn analyze(&self, sentence: &str) -> SentimentAnalysis {
        self.analyze_lowercase(&sentence.to_lowercase())
    }

    /// Analyze text that is already lower-cased
    pub fn analyze_lowercase(&self, text: &str) -> SentimentAnalysis {
        let mut score = 0.0;
        let mut intensity = 0.0;
        let mut tones = BTreeSet::new();

        for &(pattern, weight) in SentimentLexicon::POSITIVE {
            if !text.contains(pattern) {
                continue;
            }

            if Self::is_negated(text, pattern) {
                score -= weight / 2.0;
            } else {
                score += weight;
                intensity += weight / 2.0;
                tones.insert(if weight > ENTHUSIASM_THRESHOLD {
                    EmotionalTone::Enthusiasm
                } else {
                    EmotionalTone::Openness
                });
            }
        }

        for boost in SentimentLexicon::PHRASE_BOOSTS {
            if boost.trigger.fires(text) {
                score += boost.score;
                intensity += boost.intensity;
                tones.insert(EmotionalTone::Openness);
            }
        }

        for &(pattern, weight) in SentimentLexicon::NEGATIVE {
            if !text.contains(pattern) {
                continue;
            }

            score += weight;
            intensity += weight.abs() / 2.0;
            tones.insert(if weight < REJECTION_THRESHOLD {
                EmotionalTone::Rejection
            } else {
                EmotionalTone::Hesitation
            });
        }

        if SentimentLexicon::INTENSIFIERS.iter().any(|i| text.contains(i)) {
            score *= SentimentLexicon::EMPHASIS_SCORE_MULTIPLIER;
            intensity += SentimentLexicon::EMPHASIS_INTENSITY_BONUS;
        }

        SentimentAnalysis::new(score, intensity, tones)
    }

    fn is_negated(text: &str, pattern: &str) -> bool {
        SentimentLexicon::NEGATION_MARKERS
            .iter()
            .any(|marker| text.contains(&format!("{}{}", marker, pattern)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MIN_INTENSITY;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_positive_with_emphasis() {
        let s = SentimentDetector::new().analyze("Aceptó el folleto con mucho interés");
        assert!(approx(s.score, 0.65), "score {}", s.score);
        assert!(approx(s.intensity, 0.45), "intensity {}", s.intensity);
        assert_eq!(s.emotional_tones, BTreeSet::from([EmotionalTone::Openness]));
        assert!(!s.is_ambiguous);
    }

    #[test]
    fn test_strong_negative() {
        let s = SentimentDetector::new().analyze("Rechazó la invitación");
        assert!(approx(s.score, -0.7));
        assert!(approx(s.intensity, 0.35));
        assert!(s.emotional_tones.contains(&EmotionalTone::Rejection));
    }

    #[test]
    fn test_mild_negative_is_hesitation() {
        let s = SentimentDetector::new().analyze("Estaba ocupado");
        assert!(approx(s.score, -0.3));
        assert_eq!(s.emotional_tones, BTreeSet::from([EmotionalTone::Hesitation]));
    }

    #[test]
    fn test_negated_positive() {
        let s = SentimentDetector::new().analyze("Lo dijo sin gusto");
        assert!(approx(s.score, -0.25));
        assert_eq!(s.intensity, MIN_INTENSITY);
        assert!(s.emotional_tones.is_empty());
    }

    #[test]
    fn test_idiom_boost_saturates() {
        let s = SentimentDetector::new().analyze("Escuchó muy bien");
        assert_eq!(s.score, 1.0);
        assert_eq!(s.intensity, 1.0);
        assert_eq!(s.emotional_tones, BTreeSet::from([EmotionalTone::Openness]));
    }

    #[test]
    fn test_no_signal_is_ambiguous() {
        let s = SentimentDetector::new().analyze("Saludó y se fue");
        assert_eq!(s.score, 0.0);
        assert_eq!(s.intensity, MIN_INTENSITY);
        assert!(s.is_ambiguous);
    }

    #[test]
    fn test_enthusiasm_tone() {
        let s = SentimentDetector::new().analyze("Estaba feliz");
        assert!(s.emotional_tones.contains(&EmotionalTone::Enthusiasm));
    }
}
