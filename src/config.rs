//! Summarizer configuration
//!
//! Tunables for recency weighting, contextual memory sizing and pattern
//! mining. Defaults reproduce the thresholds the engine was calibrated
//! against, so an empty TOML file yields the stock behaviour.

use crate::error::{Result, SummarizerError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main summarizer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Note text that marks a visit with no contact ("NC")
    pub no_contact_marker: String,

    /// Recency decay curve
    pub recency: RecencyConfig,

    /// Contextual memory sizing
    pub memory: MemoryConfig,

    /// Pattern recognizer settings
    pub patterns: PatternConfig,
}

/// Logistic recency decay: `2 / (1 + e^(min(days - center, max_offset) / scale))`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecencyConfig {
    /// Age in days at which a visit weighs exactly 1.0
    pub center_days: f64,

    /// Upper clamp on `days - center`, keeps very old visits above zero
    pub max_offset_days: f64,

    /// Steepness of the curve, in days
    pub scale_days: f64,
}

/// Capacity of the contextual memory is `max(min_capacity, capacity_per_note * notes)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    pub min_capacity: usize,
    pub capacity_per_note: usize,

    /// Insights surfaced in the detailed narrative
    pub top_insights: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    /// Number of most recent sentiment samples examined for a trend
    pub trend_window: usize,

    /// Maximum lemmas listed in the recurring-themes statement
    pub max_recurring_lemmas: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            no_contact_marker: "NC".to_string(),
            recency: RecencyConfig::default(),
            memory: MemoryConfig::default(),
            patterns: PatternConfig::default(),
        }
    }
}

impl Default for RecencyConfig {
    fn default() -> Self {
        Self {
            center_days: 30.0,
            max_offset_days: 90.0,
            scale_days: 30.0,
        }
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            min_capacity: 20,
            capacity_per_note: 2,
            top_insights: 3,
        }
    }
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            trend_window: 3,
            max_recurring_lemmas: 5,
        }
    }
}

impl MemoryConfig {
    /// Capacity for a history of `note_count` notes
    pub fn capacity_for(&self, note_count: usize) -> usize {
        self.min_capacity
            .max(self.capacity_per_note.saturating_mul(note_count))
    }
}

impl SummarizerConfig {
    /// Load configuration from TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: SummarizerConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.no_contact_marker.trim().is_empty() {
            return Err(SummarizerError::Config(
                "no_contact_marker must not be blank".to_string(),
            ));
        }

        let recency = &self.recency;
        if !(recency.scale_days.is_finite() && recency.scale_days > 0.0) {
            return Err(SummarizerError::Config(
                "recency.scale_days must be a positive number".to_string(),
            ));
        }
        if !recency.center_days.is_finite() || !recency.max_offset_days.is_finite() {
            return Err(SummarizerError::Config(
                "recency.center_days and recency.max_offset_days must be finite".to_string(),
            ));
        }

        if self.memory.min_capacity == 0 {
            return Err(SummarizerError::Config(
                "memory.min_capacity must be at least 1".to_string(),
            ));
        }

        if self.patterns.trend_window == 0 {
            return Err(SummarizerError::Config(
                "patterns.trend_window must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Save configuration to TOML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let toml_str =
            toml::to_string_pretty(self).map_err(|e| SummarizerError::Config(e.to_string()))?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }
}
