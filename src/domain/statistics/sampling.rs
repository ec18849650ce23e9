//! Sample-point selection for active-member time series.
//!
//! Long ranges are thinned so the number of census evaluations stays
//! bounded. The first and last day of the range are always sampled.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::DateRange;

/// Spans up to this many days are sampled every day.
pub const DAILY_SPAN_LIMIT: i64 = 30;
/// Spans up to this many days are sampled every third day.
pub const THIRD_DAY_SPAN_LIMIT: i64 = 90;
/// Spans up to this many days are sampled weekly; longer spans monthly.
pub const WEEKLY_SPAN_LIMIT: i64 = 365;

/// How densely a series is sampled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SamplingMode {
    /// Density chosen from the span length.
    #[default]
    Adaptive,
    /// Every day, regardless of span.
    Daily,
}

/// Concrete sampling step for one range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplingPlan {
    Daily,
    EveryThirdDay,
    Weekly,
    Monthly,
}

impl SamplingPlan {
    /// Chooses the plan for a range.
    pub fn for_range(range: &DateRange, mode: SamplingMode) -> Self {
        if mode == SamplingMode::Daily {
            return SamplingPlan::Daily;
        }
        match range.span_days() {
            span if span <= DAILY_SPAN_LIMIT => SamplingPlan::Daily,
            span if span <= THIRD_DAY_SPAN_LIMIT => SamplingPlan::EveryThirdDay,
            span if span <= WEEKLY_SPAN_LIMIT => SamplingPlan::Weekly,
            _ => SamplingPlan::Monthly,
        }
    }

    /// Days between consecutive sample points.
    pub fn step_days(&self) -> i64 {
        match self {
            SamplingPlan::Daily => 1,
            SamplingPlan::EveryThirdDay => 3,
            SamplingPlan::Weekly => 7,
            SamplingPlan::Monthly => 30,
        }
    }

    /// Sample dates in chronological order, first and last day included.
    pub fn sample_dates(&self, range: &DateRange) -> Vec<NaiveDate> {
        let span = range.span_days();
        let step = self.step_days();

        let mut dates: Vec<NaiveDate> = (0..=span)
            .step_by(step as usize)
            .map(|offset| range.nth_day(offset))
            .collect();

        if span % step != 0 {
            dates.push(range.to());
        }
        dates
    }
}
