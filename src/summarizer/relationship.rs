//! Relationship accumulator
//!
//! Folds visit insights, oldest first, into a running picture of the
//! contact: weighted sentiment mean, rejection and acceptance counts,
//! trajectory and engagement level.
//!
//! The mean multiplies each sample by its recency weight but divides by the
//! raw visit count. Every threshold below is tuned against that formula.
//! Count ratios (`visit_count / 3` and friends) use integer division.

use crate::types::{Intent, Topic, VisitInsight};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Trajectory is only classified from this many visits on
pub const MIN_VISITS_FOR_TRAJECTORY: usize = 3;

/// Direction the relationship is moving in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Trajectory {
    Improving,
    Declining,
    #[default]
    Stable,
    /// Never produced by [`RelationshipModel::incorporate`]
    Fluctuating,
}

impl fmt::Display for Trajectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Trajectory::Improving => "improving",
            Trajectory::Declining => "declining",
            Trajectory::Stable => "stable",
            Trajectory::Fluctuating => "fluctuating",
        };
        f.write_str(name)
    }
}

/// Overall receptiveness of the contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EngagementLevel {
    High,
    #[default]
    Moderate,
    Low,
    Negative,
}

impl fmt::Display for EngagementLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EngagementLevel::High => "high",
            EngagementLevel::Moderate => "moderate",
            EngagementLevel::Low => "low",
            EngagementLevel::Negative => "negative",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct RelationshipModel {
    pub overall_sentiment: f64,
    pub trajectory: Trajectory,
    pub engagement_level: EngagementLevel,
    pub topic_counts: BTreeMap<Topic, usize>,
    pub rejection_count: usize,
    pub acceptance_count: usize,
    pub visit_count: usize,
    pub last_visit_sentiment: Option<f64>,
    /// Sticky once any visit asked for a follow-up
    pub has_active_follow_up: bool,
    /// Sticky once any visit carried a restriction intent
    pub has_restrictions: bool,
    pub patterns: Vec<String>,
}

impl RelationshipModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// No visit incorporated yet
    pub fn is_empty(&self) -> bool {
        self.visit_count == 0
    }

    /// Fold one visit into the model
    pub fn incorporate(&mut self, insight: &VisitInsight) {
        self.visit_count += 1;

        let n = self.visit_count as f64;
        let weighted = insight.sentiment.score * insight.weight;
        self.overall_sentiment = (self.overall_sentiment * (n - 1.0) + weighted) / n;
        self.last_visit_sentiment = Some(insight.sentiment.score);

        for topic in &insight.topics {
            *self.topic_counts.entry(*topic).or_insert(0) += 1;
        }

        if insight.intents.contains(&Intent::FollowUp) {
            self.has_active_follow_up = true;
        }
        if insight.intents.contains(&Intent::Restriction) {
            self.has_restrictions = true;
        }
        if insight.intents.contains(&Intent::Rejection) {
            self.rejection_count += 1;
        }
        if insight.intents.contains(&Intent::Acceptance) {
            self.acceptance_count += 1;
        }

        self.update_classification();
    }

    /// Record the mined patterns; touches nothing else
    pub fn apply_patterns(&mut self, patterns: Vec<String>) {
        self.patterns = patterns;
    }

    /// More than a third of the visits were rejections
    pub fn rejection_dominates(&self) -> bool {
        self.rejection_count > self.visit_count / 3
    }

    /// A lone visit that went well
    pub fn is_first_positive_contact(&self) -> bool {
        self.visit_count == 1 && self.last_sentiment() > 0.3
    }

    pub fn last_sentiment(&self) -> f64 {
        self.last_visit_sentiment.unwrap_or(0.0)
    }

    /// Up to `n` topics, most frequent first; ties keep declaration order
    pub fn top_topics(&self, n: usize) -> Vec<(Topic, usize)> {
        let mut topics: Vec<(Topic, usize)> =
            self.topic_counts.iter().map(|(t, c)| (*t, *c)).collect();
        topics.sort_by(|a, b| b.1.cmp(&a.1));
        topics.truncate(n);
        topics
    }

    fn update_classification(&mut self) {
        if self.is_first_positive_contact() {
            self.engagement_level = EngagementLevel::Moderate;
            return;
        }

        if self.visit_count >= MIN_VISITS_FOR_TRAJECTORY {
            self.trajectory = self.classify_trajectory();
        }

        self.engagement_level = self.classify_engagement();
    }

    fn classify_trajectory(&self) -> Trajectory {
        let last = self.last_sentiment();
        if self.overall_sentiment > 0.4 && last > 0.4 {
            Trajectory::Improving
        } else if self.overall_sentiment < -0.2 || self.rejection_dominates() {
            Trajectory::Declining
        } else {
            Trajectory::Stable
        }
    }

    fn classify_engagement(&self) -> EngagementLevel {
        let visits = self.visit_count;
        let sentiment = self.overall_sentiment;

        if sentiment > 0.5 && self.acceptance_count > visits / 2 {
            EngagementLevel::High
        } else if sentiment > 0.0 && self.rejection_count < visits / 4 {
            EngagementLevel::Moderate
        } else if self.rejection_dominates() || sentiment < -0.3 {
            EngagementLevel::Negative
        } else {
            EngagementLevel::Low
        }
    }
}
