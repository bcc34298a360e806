//! The Member record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MemberId, Timestamp};

use super::{MembershipPlan, MembershipStatus};

/// Profile details captured at checkout for a brand-new member.
#[derive(Debug, Clone, Default)]
pub struct MemberProfile {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zipcode: Option<String>,
    pub country: Option<String>,
}

/// One user's membership, plan, and cumulative booking statistics.
///
/// Looked up by email everywhere; the id exists for cross-referencing from
/// bookings. Serializes with camelCase field names to stay wire-compatible
/// with the stored JSON files and the API bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: MemberId,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub plan: MembershipPlan,
    pub status: MembershipStatus,
    /// Derived from the plan at checkout time and frozen on the record.
    /// Bookings use this value, never the live policy.
    pub discount_percentage: u8,
    pub purchase_date: Timestamp,
    pub renewal_date: Timestamp,
    pub total_bookings: u32,
    pub total_savings: f64,
    pub created_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancelled_at: Option<Timestamp>,
}

impl Member {
    /// Creates a fresh active member at checkout.
    pub fn create(profile: MemberProfile, plan: MembershipPlan, now: Timestamp) -> Self {
        Self {
            id: MemberId::new(),
            full_name: profile.full_name,
            email: profile.email,
            phone: profile.phone,
            address: profile.address,
            city: profile.city,
            state: profile.state,
            zipcode: profile.zipcode,
            country: profile.country,
            plan,
            status: MembershipStatus::Active,
            discount_percentage: plan.discount_percentage(),
            purchase_date: now,
            renewal_date: plan.renewal_date(now),
            total_bookings: 0,
            total_savings: 0.0,
            created_at: now,
            updated_at: None,
            cancelled_at: None,
        }
    }

    /// Re-checkout for an existing email: replaces the plan, reactivates the
    /// membership, and refreshes the frozen discount and renewal horizon.
    pub fn repurchase(
        &mut self,
        plan: MembershipPlan,
        full_name: String,
        phone: String,
        now: Timestamp,
    ) {
        self.plan = plan;
        self.status = MembershipStatus::Active;
        self.discount_percentage = plan.discount_percentage();
        self.purchase_date = now;
        self.renewal_date = plan.renewal_date(now);
        self.full_name = full_name;
        self.phone = phone;
    }

    /// Partial update of the two mutable contact fields.
    pub fn update_contact(
        &mut self,
        full_name: Option<String>,
        phone: Option<String>,
        now: Timestamp,
    ) {
        if let Some(name) = full_name {
            self.full_name = name;
        }
        if let Some(phone) = phone {
            self.phone = phone;
        }
        self.updated_at = Some(now);
    }

    /// Cancels the membership. Cancelled members keep their record and
    /// statistics but can no longer book.
    pub fn cancel(&mut self, now: Timestamp) {
        self.status = MembershipStatus::Cancelled;
        self.cancelled_at = Some(now);
    }

    /// Accumulates statistics after a successful booking. The only mutation
    /// the booking flow performs on a member.
    pub fn record_booking(&mut self, discount: f64) {
        self.total_bookings += 1;
        self.total_savings += discount;
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(email: &str) -> MemberProfile {
        MemberProfile {
            full_name: "Test User".to_string(),
            email: email.to_string(),
            phone: "+1234567890".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn create_freezes_discount_and_zeroes_counters() {
        let member = Member::create(profile("a@x.com"), MembershipPlan::Yearly, Timestamp::now());
        assert!(member.is_active());
        assert_eq!(member.discount_percentage, 20);
        assert_eq!(member.total_bookings, 0);
        assert_eq!(member.total_savings, 0.0);
        assert!(member.purchase_date.is_before(&member.renewal_date));
    }

    #[test]
    fn repurchase_reactivates_a_cancelled_member() {
        let now = Timestamp::now();
        let mut member = Member::create(profile("a@x.com"), MembershipPlan::Monthly, now);
        member.cancel(now);
        assert!(!member.is_active());

        member.repurchase(
            MembershipPlan::Yearly,
            "New Name".to_string(),
            "+1987654321".to_string(),
            Timestamp::now(),
        );
        assert!(member.is_active());
        assert_eq!(member.plan, MembershipPlan::Yearly);
        assert_eq!(member.full_name, "New Name");
    }

    #[test]
    fn record_booking_accumulates_stats() {
        let mut member = Member::create(profile("a@x.com"), MembershipPlan::Monthly, Timestamp::now());
        member.record_booking(200.0);
        member.record_booking(50.0);
        assert_eq!(member.total_bookings, 2);
        assert_eq!(member.total_savings, 250.0);
    }

    #[test]
    fn update_contact_only_touches_provided_fields() {
        let mut member = Member::create(profile("a@x.com"), MembershipPlan::Pro, Timestamp::now());
        member.update_contact(None, Some("+1111111111".to_string()), Timestamp::now());
        assert_eq!(member.full_name, "Test User");
        assert_eq!(member.phone, "+1111111111");
        assert!(member.updated_at.is_some());
    }

    #[test]
    fn member_serializes_camel_case() {
        let member = Member::create(profile("a@x.com"), MembershipPlan::Yearly, Timestamp::now());
        let json = serde_json::to_value(&member).unwrap();
        assert_eq!(json["fullName"], "Test User");
        assert_eq!(json["discountPercentage"], 20);
        assert_eq!(json["totalBookings"], 0);
        assert!(json.get("cancelledAt").is_none());
    }
}
