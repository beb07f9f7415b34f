//! Narrative rendering
//!
//! A read-only view over the finished relationship model, visit contexts and
//! memory. Which phrase bank is used is fully decided by the model; the
//! phrase inside the bank is drawn from the caller's random source.

use crate::summarizer::memory::ContextualMemory;
use crate::summarizer::relationship::{EngagementLevel, RelationshipModel, Trajectory};
use crate::summarizer::utils::phrases::{
    PhraseCategory, FIRST_POSITIVE_CONTACT, INSUFFICIENT_INFORMATION, NO_CLEAR_PATTERN,
};
use crate::types::{NarrativeStyle, Topic, VisitContext};
use rand::Rng;

/// Topics named by the balanced and action-oriented narratives
const HEADLINE_TOPICS: usize = 2;

pub struct NarrativeGenerator<'a> {
    model: &'a RelationshipModel,
    contexts: &'a [VisitContext],
    memory: &'a ContextualMemory,
    top_insights: usize,
}

impl<'a> NarrativeGenerator<'a> {
    pub fn new(
        model: &'a RelationshipModel,
        contexts: &'a [VisitContext],
        memory: &'a ContextualMemory,
    ) -> Self {
        Self {
            model,
            contexts,
            memory,
            top_insights: 3,
        }
    }

    /// Number of memory insights listed by the detailed narrative
    pub fn with_top_insights(mut self, count: usize) -> Self {
        self.top_insights = count;
        self
    }

    pub fn generate<R: Rng + ?Sized>(&self, style: NarrativeStyle, rng: &mut R) -> String {
        if self.model.is_empty() {
            return INSUFFICIENT_INFORMATION.to_string();
        }

        match style {
            NarrativeStyle::ActionOriented => self.action_oriented(rng),
            NarrativeStyle::Concise => self.concise(rng),
            NarrativeStyle::Detailed => self.detailed(rng),
            NarrativeStyle::Balanced => self.balanced(rng),
        }
    }

    fn action_oriented<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let model = self.model;

        if model.is_first_positive_contact() {
            return FIRST_POSITIVE_CONTACT.to_string();
        }
        if model.rejection_dominates() {
            return PhraseCategory::Rejection.pick(rng).to_string();
        }
        if model.has_restrictions {
            return PhraseCategory::Restriction.pick(rng).to_string();
        }
        if model.has_active_follow_up {
            return format!(
                "{} Temas sugeridos: {}. {}",
                PhraseCategory::FollowUp.pick(rng),
                self.headline_topics(),
                Self::trajectory_category(model.trajectory).pick(rng)
            );
        }

        Self::engagement_category(model.engagement_level)
            .pick(rng)
            .to_string()
    }

    fn concise<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let sentiment = self.model.overall_sentiment;
        let label = if sentiment > 0.3 {
            "positiva"
        } else if sentiment < -0.2 {
            "negativa"
        } else {
            "neutral"
        };

        format!("Relación {}. {}", label, self.next_step(rng))
    }

    fn balanced<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let status = Self::engagement_category(self.model.engagement_level).pick(rng);
        format!(
            "{} Temas: {}. {}",
            status,
            self.headline_topics(),
            self.next_step(rng)
        )
    }

    fn detailed<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let model = self.model;

        let topics = if model.topic_counts.is_empty() {
            Topic::General.label().to_string()
        } else {
            model
                .top_topics(model.topic_counts.len())
                .iter()
                .map(|(topic, count)| format!("{} ({})", topic.label(), count))
                .collect::<Vec<_>>()
                .join(", ")
        };

        let patterns = if model.patterns.is_empty() {
            NO_CLEAR_PATTERN.to_string()
        } else {
            model.patterns.join(". ")
        };

        let mut lines = vec![
            format!(
                "Visitas: {}. Sentimiento: {:.1}.",
                model.visit_count, model.overall_sentiment
            ),
            format!("Temas: {}.", topics),
            format!("Patrón: {}.", patterns),
        ];

        let moments = self.memory.retrieve_top_insights(self.top_insights);
        if !moments.is_empty() {
            let joined = moments
                .iter()
                .map(|insight| insight.label.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            lines.push(format!("Momentos clave: {}.", joined));
        }

        if let Some(last) = self.contexts.last() {
            lines.push(format!("Último estado: {}.", last.emotional_state));
        }

        lines.push(format!("Recomendación: {}", self.action_oriented(rng)));
        lines.join("\n")
    }

    /// Follow-up, then restriction, then the moderate bank
    fn next_step<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        let category = if self.model.has_active_follow_up {
            PhraseCategory::FollowUp
        } else if self.model.has_restrictions {
            PhraseCategory::Restriction
        } else {
            PhraseCategory::ModerateEngagement
        };
        category.pick(rng)
    }

    fn headline_topics(&self) -> String {
        let topics = self.model.top_topics(HEADLINE_TOPICS);
        if topics.is_empty() {
            return Topic::General.label().to_string();
        }
        topics
            .iter()
            .map(|(topic, _)| topic.label())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn engagement_category(level: EngagementLevel) -> PhraseCategory {
        match level {
            EngagementLevel::High => PhraseCategory::HighEngagement,
            EngagementLevel::Moderate => PhraseCategory::ModerateEngagement,
            EngagementLevel::Low => PhraseCategory::LowEngagement,
            EngagementLevel::Negative => PhraseCategory::NegativeEngagement,
        }
    }

    pub fn trajectory_category(trajectory: Trajectory) -> PhraseCategory {
        match trajectory {
            Trajectory::Improving => PhraseCategory::ImprovingTrajectory,
            Trajectory::Declining => PhraseCategory::DecliningTrajectory,
            Trajectory::Stable => PhraseCategory::StableTrajectory,
            Trajectory::Fluctuating => PhraseCategory::FluctuatingTrajectory,
        }
    }
}
