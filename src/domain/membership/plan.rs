//! Membership plan definitions and the discount policy.
//!
//! The discount policy is the pure rule set behind checkout: each plan maps
//! to a discount percentage that is frozen on the member record, and to a
//! renewal horizon computed from the purchase moment.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

/// Membership plan purchased at checkout.
///
/// Determines the booking discount percentage and the renewal horizon.
/// Unrecognized plan values fail deserialization rather than defaulting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MembershipPlan {
    /// Recurring monthly subscription.
    Monthly,
    /// Recurring yearly subscription.
    Yearly,
    /// Professional tier.
    Pro,
    /// Top professional tier.
    ProPlus,
}

impl MembershipPlan {
    /// All plan values, in display order. Used by the stats breakdown.
    pub const ALL: [MembershipPlan; 4] = [
        MembershipPlan::Monthly,
        MembershipPlan::Yearly,
        MembershipPlan::Pro,
        MembershipPlan::ProPlus,
    ];

    /// Discount applied to bookings while this plan is active.
    ///
    /// Every paid plan carries a flat 20% discount. The mapping is total
    /// over the enum, so a recognized plan can never fall through to a
    /// default.
    pub fn discount_percentage(&self) -> u8 {
        match self {
            MembershipPlan::Monthly
            | MembershipPlan::Yearly
            | MembershipPlan::Pro
            | MembershipPlan::ProPlus => 20,
        }
    }

    /// Renewal date for a plan purchased at `from`.
    ///
    /// Yearly renews one calendar year out; every other plan renews one
    /// calendar month out.
    pub fn renewal_date(&self, from: Timestamp) -> Timestamp {
        match self {
            MembershipPlan::Yearly => from.plus_one_year(),
            _ => from.plus_one_month(),
        }
    }

    /// Returns the wire name for this plan (`"pro-plus"` etc.).
    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipPlan::Monthly => "monthly",
            MembershipPlan::Yearly => "yearly",
            MembershipPlan::Pro => "pro",
            MembershipPlan::ProPlus => "pro-plus",
        }
    }
}

impl std::fmt::Display for MembershipPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn every_plan_maps_to_a_discount() {
        for plan in MembershipPlan::ALL {
            assert_eq!(plan.discount_percentage(), 20);
        }
    }

    #[test]
    fn yearly_renews_one_year_out() {
        let now = Timestamp::from_datetime(Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap());
        let renewal = MembershipPlan::Yearly.renewal_date(now);
        assert_eq!(
            renewal.as_datetime(),
            &Utc.with_ymd_and_hms(2027, 3, 10, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn monthly_renews_one_month_out() {
        let now = Timestamp::from_datetime(Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap());
        let renewal = MembershipPlan::Monthly.renewal_date(now);
        assert_eq!(
            renewal.as_datetime(),
            &Utc.with_ymd_and_hms(2026, 4, 10, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn plan_serializes_kebab_case() {
        let json = serde_json::to_string(&MembershipPlan::ProPlus).unwrap();
        assert_eq!(json, "\"pro-plus\"");
    }

    #[test]
    fn unknown_plan_fails_to_deserialize() {
        let result: Result<MembershipPlan, _> = serde_json::from_str("\"platinum\"");
        assert!(result.is_err());
    }
}
