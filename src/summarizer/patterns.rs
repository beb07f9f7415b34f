//! Cross-visit pattern mining
//!
//! Learns lemma frequencies, the topics of every topic-bearing note and the
//! sentiment history. [`PatternRecognizer::identify_significant_patterns`]
//! turns them into at most three Spanish statements:
//! - recurring lemmas (frequency above one)
//! - the shape of the most recent sentiment samples
//! - a topic present in at least half of the topic-bearing notes

use crate::config::PatternConfig;
use crate::types::{ProcessedNote, Topic};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};

const POSITIVE_TREND_FLOOR: f64 = 0.3;
const NEGATIVE_TREND_CEILING: f64 = -0.2;
const VARIABLE_SPREAD: f64 = 0.6;

/// Shape of the most recent sentiment window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentTrend {
    ConsistentPositive,
    ConsistentNegative,
    Variable,
}

impl SentimentTrend {
    pub fn statement(&self) -> &'static str {
        match self {
            SentimentTrend::ConsistentPositive => "Tendencia positiva consistente",
            SentimentTrend::ConsistentNegative => "Tendencia negativa consistente",
            SentimentTrend::Variable => "Receptividad variable",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PatternRecognizer {
    config: PatternConfig,
    lemma_counts: HashMap<String, usize>,
    topic_sequences: Vec<BTreeSet<Topic>>,
    sentiment_history: Vec<f64>,
}

impl Default for PatternRecognizer {
    fn default() -> Self {
        Self::new(PatternConfig::default())
    }
}

impl PatternRecognizer {
    pub fn new(config: PatternConfig) -> Self {
        Self {
            config,
            lemma_counts: HashMap::new(),
            topic_sequences: Vec::new(),
            sentiment_history: Vec::new(),
        }
    }

    /// Record one processed note
    pub fn learn(&mut self, note: &ProcessedNote) {
        for lemma in &note.lemmas {
            *self.lemma_counts.entry(lemma.clone()).or_insert(0) += 1;
        }

        if !note.topics.is_empty() {
            self.topic_sequences.push(note.topics.clone());
        }

        self.sentiment_history.push(note.sentiment.score);
    }

    pub fn sentiment_history(&self) -> &[f64] {
        &self.sentiment_history
    }

    /// Lemmas seen in more than one note, most frequent first
    pub fn recurring_lemmas(&self) -> Vec<(&str, usize)> {
        let mut recurring: Vec<(&str, usize)> = self
            .lemma_counts
            .iter()
            .filter(|(_, &count)| count > 1)
            .map(|(lemma, &count)| (lemma.as_str(), count))
            .collect();

        recurring.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        recurring.truncate(self.config.max_recurring_lemmas);
        recurring
    }

    /// Trend over the last `trend_window` samples, once that many exist
    pub fn sentiment_trend(&self) -> Option<SentimentTrend> {
        let window = self.config.trend_window;
        if window == 0 || self.sentiment_history.len() < window {
            return None;
        }

        let recent = &self.sentiment_history[self.sentiment_history.len() - window..];
        let max = recent.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = recent.iter().copied().fold(f64::INFINITY, f64::min);

        if recent.iter().all(|&s| s > POSITIVE_TREND_FLOOR) {
            Some(SentimentTrend::ConsistentPositive)
        } else if recent.iter().all(|&s| s < NEGATIVE_TREND_CEILING) {
            Some(SentimentTrend::ConsistentNegative)
        } else if max - min > VARIABLE_SPREAD {
            Some(SentimentTrend::Variable)
        } else {
            None
        }
    }

    /// Most frequent topic, when it occurs in at least half of the
    /// topic-bearing notes
    ///
    /// Needs two or more topic-bearing notes. Half is rounded down, so one
    /// occurrence among three notes qualifies. Ties go to the topic declared
    /// first.
    pub fn dominant_topic(&self) -> Option<(Topic, usize)> {
        if self.topic_sequences.len() < 2 {
            return None;
        }

        let mut counts: BTreeMap<Topic, usize> = BTreeMap::new();
        for topic in self.topic_sequences.iter().flatten() {
            *counts.entry(*topic).or_insert(0) += 1;
        }

        let mut best: Option<(Topic, usize)> = None;
        for (topic, count) in counts {
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((topic, count));
            }
        }

        best.filter(|(_, count)| *count >= self.topic_sequences.len() / 2)
    }

    /// Human-readable findings, in a fixed order
    pub fn identify_significant_patterns(&self) -> Vec<String> {
        let mut patterns = Vec::new();

        let lemmas = self.recurring_lemmas();
        if !lemmas.is_empty() {
            let joined = lemmas
                .iter()
                .map(|(lemma, _)| *lemma)
                .collect::<Vec<_>>()
                .join(", ");
            patterns.push(format!("Temas recurrentes: {}", joined));
        }

        if let Some(trend) = self.sentiment_trend() {
            patterns.push(trend.statement().to_string());
        }

        if let Some((topic, _)) = self.dominant_topic() {
            patterns.push(format!("Interés consistente en: {}", topic.label()));
        }

        patterns
    }
}
