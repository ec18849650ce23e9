use serde::{Deserialize, Serialize};

use crate::domain::membership::MembershipGroup;

/// Point-in-time census of active memberships.
///
/// `total` counts every matching record, including records whose product
/// code is not in the catalog. Those records appear in no group bucket,
/// so `private + pension + union <= total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveCounts {
    pub total: u64,
    pub private: u64,
    pub pension: u64,
    pub union: u64,
}

impl ActiveCounts {
    /// Counts one record, bucketed into `group` when known.
    pub fn record(&mut self, group: Option<MembershipGroup>) {
        self.total += 1;
        match group {
            Some(MembershipGroup::Private) => self.private += 1,
            Some(MembershipGroup::Pension) => self.pension += 1,
            Some(MembershipGroup::Union) => self.union += 1,
            None => {}
        }
    }

    /// Returns the bucket of a group.
    pub fn bucket(&self, group: MembershipGroup) -> u64 {
        match group {
            MembershipGroup::Private => self.private,
            MembershipGroup::Pension => self.pension,
            MembershipGroup::Union => self.union,
        }
    }

    /// Records counted in `total` but in no group bucket.
    pub fn unbucketed(&self) -> u64 {
        self.total - (self.private + self.pension + self.union)
    }

    pub fn is_zero(&self) -> bool {
        self.total == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zero() {
        let counts = ActiveCounts::default();
        assert!(counts.is_zero());
        assert_eq!(counts.unbucketed(), 0);
    }

    #[test]
    fn unknown_group_counts_toward_total_only() {
        let mut counts = ActiveCounts::default();
        counts.record(Some(MembershipGroup::Union));
        counts.record(None);

        assert_eq!(counts.total, 2);
        assert_eq!(counts.bucket(MembershipGroup::Union), 1);
        assert_eq!(counts.unbucketed(), 1);
    }
}
