//! Creation-window aggregate: memberships created inside a date range.
//!
//! Unlike the census this does not look at start or end dates. A record
//! counts when its status is `"active"` and its `created_at` falls inside
//! the range.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::DateRange;
use crate::domain::membership::{
    MalformedRecord, MembershipGroup, MembershipRecord, ProductCatalog, RenewalMode,
};

/// Auto/manual split of one group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenewalSplit {
    pub auto: u64,
    pub manual: u64,
}

impl RenewalSplit {
    pub fn total(&self) -> u64 {
        self.auto + self.manual
    }

    fn add(&mut self, renewal: RenewalMode) {
        match renewal {
            RenewalMode::Auto => self.auto += 1,
            RenewalMode::Manual => self.manual += 1,
        }
    }
}

/// Union memberships split by the reference postcode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostcodeSplit {
    pub local: u64,
    pub other: u64,
}

/// Dashboard/report rollup of memberships created in a window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipAggregate {
    /// All matching records, unknown product codes included.
    pub total: u64,
    pub private: RenewalSplit,
    pub pension: RenewalSplit,
    pub union: RenewalSplit,
    pub union_postcode: PostcodeSplit,
}

impl MembershipAggregate {
    /// Returns the split of a group.
    pub fn group(&self, group: MembershipGroup) -> RenewalSplit {
        match group {
            MembershipGroup::Private => self.private,
            MembershipGroup::Pension => self.pension,
            MembershipGroup::Union => self.union,
        }
    }

    /// Sum over all groups for one renewal mode.
    pub fn renewal_total(&self, renewal: RenewalMode) -> u64 {
        MembershipGroup::ALL
            .iter()
            .map(|g| {
                let split = self.group(*g);
                match renewal {
                    RenewalMode::Auto => split.auto,
                    RenewalMode::Manual => split.manual,
                }
            })
            .sum()
    }

    fn record(
        &mut self,
        group: Option<MembershipGroup>,
        renewal: Option<RenewalMode>,
        in_local_postcode: bool,
    ) {
        self.total += 1;
        let (Some(group), Some(renewal)) = (group, renewal) else {
            return;
        };
        let split = match group {
            MembershipGroup::Private => &mut self.private,
            MembershipGroup::Pension => &mut self.pension,
            MembershipGroup::Union => &mut self.union,
        };
        split.add(renewal);

        if group == MembershipGroup::Union {
            if in_local_postcode {
                self.union_postcode.local += 1;
            } else {
                self.union_postcode.other += 1;
            }
        }
    }
}

/// Result of a creation-window tally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateTally {
    pub aggregate: MembershipAggregate,
    pub malformed: Vec<MalformedRecord>,
}

/// Tallies active records created inside `range`.
///
/// `local_postcode` is the reference value for the union local/other split.
pub fn tally_created<'a, I>(
    records: I,
    range: &DateRange,
    filter: Option<MembershipGroup>,
    catalog: &ProductCatalog,
    local_postcode: &str,
) -> AggregateTally
where
    I: IntoIterator<Item = &'a MembershipRecord>,
{
    let mut tally = AggregateTally::default();

    for record in records {
        if !record.has_active_status() {
            continue;
        }

        let group = catalog.group_of(record.category_code);
        if filter.is_some() && group != filter {
            continue;
        }

        match record.created_instant() {
            Ok(created) if range.contains_instant(created) => tally.aggregate.record(
                group,
                catalog.renewal_of(record.category_code),
                record.is_in_postcode(local_postcode),
            ),
            Ok(_) => {}
            Err(malformed) => tally.malformed.push(malformed),
        }
    }

    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{RecordId, UserId};
    use crate::domain::membership::CategoryCode;

    fn record(id: u64, code: u32, status: &str, created: &str, postcode: Option<&str>) -> MembershipRecord {
        MembershipRecord {
            id: RecordId::new(id),
            user_id: UserId::from_raw(id),
            category_code: CategoryCode::new(code),
            status: status.to_string(),
            start_date: "2020-01-01 00:00:00".to_string(),
            end_date: Some("2020-02-01 00:00:00".to_string()),
            created_at: created.to_string(),
            postcode: postcode.map(str::to_string),
        }
    }

    fn january() -> DateRange {
        DateRange::parse("2024-01-01", "2024-01-31").unwrap()
    }

    #[test]
    fn counts_by_group_and_renewal() {
        let catalog = ProductCatalog::default();
        let records = vec![
            record(1, 9503, "active", "2024-01-02 10:00:00", None),
            record(2, 10968, "active", "2024-01-03 10:00:00", None),
            record(3, 28736, "active", "2024-01-04 10:00:00", None),
            record(4, 28735, "active", "2024-01-05 10:00:00", None),
            record(5, 30734, "active", "2024-01-06 10:00:00", Some("4293")),
            record(6, 19221, "active", "2024-01-07 10:00:00", Some("8000")),
        ];

        let tally = tally_created(&records, &january(), None, &catalog, "4293");
        let agg = tally.aggregate;

        assert_eq!(agg.total, 6);
        assert_eq!(agg.private, RenewalSplit { auto: 1, manual: 1 });
        assert_eq!(agg.pension, RenewalSplit { auto: 1, manual: 1 });
        assert_eq!(agg.union, RenewalSplit { auto: 1, manual: 1 });
        assert_eq!(agg.union_postcode, PostcodeSplit { local: 1, other: 1 });
        assert_eq!(agg.renewal_total(RenewalMode::Auto), 3);
    }

    #[test]
    fn ignores_start_and_end_dates() {
        let catalog = ProductCatalog::default();
        // Lapsed in 2020 but created in the window: still counted.
        let records = vec![record(1, 9503, "active", "2024-01-15 00:00:00", None)];

        let tally = tally_created(&records, &january(), None, &catalog, "4293");
        assert_eq!(tally.aggregate.total, 1);
    }

    #[test]
    fn window_includes_whole_last_day() {
        let catalog = ProductCatalog::default();
        let records = vec![
            record(1, 9503, "active", "2024-01-31 23:59:59", None),
            record(2, 9503, "active", "2024-02-01 00:00:00", None),
            record(3, 9503, "active", "2023-12-31 23:59:59", None),
        ];

        let tally = tally_created(&records, &january(), None, &catalog, "4293");
        assert_eq!(tally.aggregate.total, 1);
    }

    #[test]
    fn filter_restricts_to_group() {
        let catalog = ProductCatalog::default();
        let records = vec![
            record(1, 9503, "active", "2024-01-02 00:00:00", None),
            record(2, 19221, "active", "2024-01-02 00:00:00", None),
            record(3, 777, "active", "2024-01-02 00:00:00", None),
        ];

        let tally = tally_created(
            &records,
            &january(),
            Some(MembershipGroup::Union),
            &catalog,
            "4293",
        );
        assert_eq!(tally.aggregate.total, 1);
        assert_eq!(tally.aggregate.union.manual, 1);
        assert_eq!(tally.aggregate.private.total(), 0);
    }

    #[test]
    fn unknown_codes_count_in_total_only() {
        let catalog = ProductCatalog::default();
        let records = vec![record(1, 777, "active", "2024-01-02 00:00:00", None)];

        let agg = tally_created(&records, &january(), None, &catalog, "4293").aggregate;
        assert_eq!(agg.total, 1);
        assert_eq!(agg.renewal_total(RenewalMode::Auto) + agg.renewal_total(RenewalMode::Manual), 0);
    }

    #[test]
    fn local_postcode_is_a_parameter() {
        let catalog = ProductCatalog::default();
        let records = vec![record(1, 30734, "active", "2024-01-02 00:00:00", Some("5000"))];

        let default_ref = tally_created(&records, &january(), None, &catalog, "4293").aggregate;
        assert_eq!(default_ref.union_postcode, PostcodeSplit { local: 0, other: 1 });

        let overridden = tally_created(&records, &january(), None, &catalog, "5000").aggregate;
        assert_eq!(overridden.union_postcode, PostcodeSplit { local: 1, other: 0 });
    }

    #[test]
    fn malformed_created_at_is_reported() {
        let catalog = ProductCatalog::default();
        let records = vec![
            record(1, 9503, "active", "n/a", None),
            record(2, 9503, "inactive", "n/a", None),
        ];

        let tally = tally_created(&records, &january(), None, &catalog, "4293");
        assert_eq!(tally.aggregate.total, 0);
        assert_eq!(tally.malformed.len(), 1);
    }

    #[test]
    fn renewal_split_uses_catalog_codes() {
        // Swapped auto/manual codes for the private group.
        let catalog = ProductCatalog::new(10968, 9503, 28736, 28735, 30734, 19221).unwrap();
        let records = vec![
            record(1, 9503, "active", "2024-01-02 00:00:00", None),
            record(2, 9503, "active", "2024-01-03 00:00:00", None),
        ];

        let agg = tally_created(&records, &january(), None, &catalog, "4293").aggregate;
        assert_eq!(agg.private, RenewalSplit { auto: 0, manual: 2 });
    }
}
