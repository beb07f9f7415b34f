//! Recency weighting of visits
//!
//! A logistic decay over the age of a visit: a visit exactly `center_days`
//! old weighs 1.0, fresh visits approach 2.0 (dates at or past `now` can
//! reach it exactly) and the clamp on the exponent keeps very old visits
//! above a small positive floor.

use crate::config::RecencyConfig;
use chrono::{DateTime, Utc};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Weight given to notes without a date
pub const NEUTRAL_WEIGHT: f64 = 1.0;

/// Maps visit dates to decay weights in (0, 2]
#[derive(Debug, Clone, PartialEq)]
pub struct RecencyWeighter {
    center_days: f64,
    max_offset_days: f64,
    scale_days: f64,
}

impl Default for RecencyWeighter {
    fn default() -> Self {
        Self::new(&RecencyConfig::default())
    }
}

impl RecencyWeighter {
    pub fn new(config: &RecencyConfig) -> Self {
        Self {
            center_days: config.center_days,
            max_offset_days: config.max_offset_days,
            scale_days: config.scale_days,
        }
    }

    /// Weight for a visit `days` old
    pub fn weight_for_age(&self, days: f64) -> f64 {
        let offset = (days - self.center_days).min(self.max_offset_days);
        2.0 / (1.0 + (offset / self.scale_days).exp())
    }

    /// Weight for a visit on `date`, seen from `now`
    pub fn weight_at(&self, date: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
        let days = (now - date).num_milliseconds() as f64 / MILLIS_PER_DAY;
        self.weight_for_age(days)
    }

    /// One weight per note index
    ///
    /// `dates` runs parallel to the notes and may be shorter; indices past its
    /// end, like all indices when it is absent, get [`NEUTRAL_WEIGHT`].
    pub fn weights(
        &self,
        count: usize,
        dates: Option<&[DateTime<Utc>]>,
        now: DateTime<Utc>,
    ) -> Vec<f64> {
        (0..count)
            .map(|idx| match dates.and_then(|d| d.get(idx)) {
                Some(date) => self.weight_at(*date, now),
                None => NEUTRAL_WEIGHT,
            })
            .collect()
    }
}
