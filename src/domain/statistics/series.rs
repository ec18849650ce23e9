//! Chart-ready active-member series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{ActiveCounts, SamplingPlan};
use crate::domain::foundation::format_calendar_date;

/// Parallel count arrays, one entry per sample point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesData {
    pub total: Vec<u64>,
    pub private: Vec<u64>,
    pub pension: Vec<u64>,
    pub union: Vec<u64>,
}

/// Active-member counts over time, ready for a line chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveSeries {
    /// `YYYY-MM-DD` label per sample point.
    pub labels: Vec<String>,
    pub series: SeriesData,
    /// Sampling step used for this range.
    pub plan: SamplingPlan,
}

impl ActiveSeries {
    pub fn new(plan: SamplingPlan) -> Self {
        Self {
            labels: Vec::new(),
            series: SeriesData::default(),
            plan,
        }
    }

    /// Appends one sample point.
    pub fn push(&mut self, date: NaiveDate, counts: ActiveCounts) {
        self.labels.push(format_calendar_date(date));
        self.series.total.push(counts.total);
        self.series.private.push(counts.private);
        self.series.pension.push(counts.pension);
        self.series.union.push(counts.union);
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
