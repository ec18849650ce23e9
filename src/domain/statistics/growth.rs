//! Daily census snapshots and their rollup into growth periods.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ActiveCounts;
use crate::domain::foundation::{format_calendar_date, ValidationError};

/// Active census recorded for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySnapshot {
    pub date: NaiveDate,
    pub total: u64,
    pub private: u64,
    pub pension: u64,
    pub union: u64,
}

impl DailySnapshot {
    pub fn from_counts(date: NaiveDate, counts: ActiveCounts) -> Self {
        Self {
            date,
            total: counts.total,
            private: counts.private,
            pension: counts.pension,
            union: counts.union,
        }
    }

    pub fn counts(&self) -> ActiveCounts {
        ActiveCounts {
            total: self.total,
            private: self.private,
            pension: self.pension,
            union: self.union,
        }
    }
}

/// Granularity of a growth report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthPeriod {
    Daily,
    Weekly,
    #[default]
    Monthly,
}

impl GrowthPeriod {
    /// Bucket key of a date: `YYYY-MM-DD`, ISO `YYYYWW`, or `YYYY-MM`.
    pub fn bucket_key(&self, date: NaiveDate) -> String {
        match self {
            GrowthPeriod::Daily => format_calendar_date(date),
            GrowthPeriod::Weekly => date.format("%G%V").to_string(),
            GrowthPeriod::Monthly => date.format("%Y-%m").to_string(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GrowthPeriod::Daily => "daily",
            GrowthPeriod::Weekly => "weekly",
            GrowthPeriod::Monthly => "monthly",
        }
    }
}

impl fmt::Display for GrowthPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GrowthPeriod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(GrowthPeriod::Daily),
            "weekly" => Ok(GrowthPeriod::Weekly),
            "monthly" => Ok(GrowthPeriod::Monthly),
            other => Err(ValidationError::invalid_format(
                "period",
                format!("expected daily, weekly or monthly, got '{}'", other),
            )),
        }
    }
}

/// One period of a growth report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthBucket {
    pub key: String,
    /// Latest snapshot recorded inside the period.
    pub closing: DailySnapshot,
}

/// Growth report: closing census per period, chronological.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipGrowth {
    pub period: GrowthPeriod,
    pub buckets: Vec<GrowthBucket>,
}

impl MembershipGrowth {
    /// Groups snapshots into periods, keeping the latest snapshot per period.
    pub fn from_snapshots(period: GrowthPeriod, mut snapshots: Vec<DailySnapshot>) -> Self {
        snapshots.sort_by_key(|s| s.date);

        let mut buckets: Vec<GrowthBucket> = Vec::new();
        for snapshot in snapshots {
            let key = period.bucket_key(snapshot.date);
            match buckets.last_mut() {
                Some(last) if last.key == key => last.closing = snapshot,
                _ => buckets.push(GrowthBucket {
                    key,
                    closing: snapshot,
                }),
            }
        }

        Self { period, buckets }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(date: &str, total: u64) -> DailySnapshot {
        DailySnapshot {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            total,
            private: total,
            pension: 0,
            union: 0,
        }
    }

    #[test]
    fn bucket_keys_per_period() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
        assert_eq!(GrowthPeriod::Daily.bucket_key(date), "2024-01-17");
        assert_eq!(GrowthPeriod::Weekly.bucket_key(date), "202403");
        assert_eq!(GrowthPeriod::Monthly.bucket_key(date), "2024-01");
    }

    #[test]
    fn weekly_key_uses_iso_year() {
        // 2024-12-30 belongs to ISO week 1 of 2025.
        let date = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
        assert_eq!(GrowthPeriod::Weekly.bucket_key(date), "202501");
    }

    #[test]
    fn period_parses_case_insensitively() {
        assert_eq!("Weekly".parse::<GrowthPeriod>().unwrap(), GrowthPeriod::Weekly);
        assert!("yearly".parse::<GrowthPeriod>().is_err());
    }

    #[test]
    fn monthly_growth_keeps_closing_snapshot() {
        let growth = MembershipGrowth::from_snapshots(
            GrowthPeriod::Monthly,
            vec![
                snapshot("2024-02-03", 12),
                snapshot("2024-01-01", 5),
                snapshot("2024-01-31", 9),
                snapshot("2024-02-01", 10),
            ],
        );

        assert_eq!(growth.buckets.len(), 2);
        assert_eq!(growth.buckets[0].key, "2024-01");
        assert_eq!(growth.buckets[0].closing.total, 9);
        assert_eq!(growth.buckets[1].key, "2024-02");
        assert_eq!(growth.buckets[1].closing.total, 12);
    }

    #[test]
    fn daily_growth_has_one_bucket_per_snapshot() {
        let growth = MembershipGrowth::from_snapshots(
            GrowthPeriod::Daily,
            vec![snapshot("2024-01-01", 1), snapshot("2024-01-02", 2)],
        );
        assert_eq!(growth.buckets.len(), 2);
    }

    #[test]
    fn snapshot_round_trips_counts() {
        let counts = ActiveCounts {
            total: 4,
            private: 1,
            pension: 1,
            union: 1,
        };
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(DailySnapshot::from_counts(date, counts).counts(), counts);
    }
}
