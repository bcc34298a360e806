//! Reporting service: read-only aggregation over Members and Bookings.
//!
//! Shared by the HTTP admin endpoints and the standalone admin CLI with an
//! identical contract. Only `remove_member` and `clear_all` mutate, and both
//! are CLI-only operations.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use crate::domain::booking::Booking;
use crate::domain::foundation::DomainError;
use crate::domain::membership::Member;
use crate::ports::RecordStore;

/// Aggregate statistics over the whole store.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipStats {
    pub total_members: usize,
    pub active_members: usize,
    /// Member count per plan wire name, including zero-count plans.
    pub plan_breakdown: BTreeMap<String, usize>,
    pub total_bookings: usize,
    /// Sum of member savings. The admin dashboard reads this as revenue
    /// attributable to the membership program.
    pub total_revenue: f64,
    pub average_bookings_per_member: f64,
}

/// Read-only admin view over both collections.
pub struct ReportingService {
    store: Arc<dyn RecordStore>,
}

impl ReportingService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Computes counts, sums, and the per-member booking average.
    ///
    /// The average divides by `max(total_members, 1)`: an empty store
    /// reports 0.0 rather than a division error. That floor is the
    /// documented empty-state policy.
    pub async fn stats(&self) -> Result<MembershipStats, DomainError> {
        let members = self.store.list_members().await?;
        let bookings = self.store.list_bookings().await?;

        let mut plan_breakdown: BTreeMap<String, usize> =
            crate::domain::membership::MembershipPlan::ALL
                .iter()
                .map(|plan| (plan.as_str().to_string(), 0))
                .collect();
        for member in &members {
            *plan_breakdown
                .entry(member.plan.as_str().to_string())
                .or_insert(0) += 1;
        }

        Ok(MembershipStats {
            total_members: members.len(),
            active_members: members.iter().filter(|m| m.is_active()).count(),
            plan_breakdown,
            total_bookings: bookings.len(),
            total_revenue: members.iter().map(|m| m.total_savings).sum(),
            average_bookings_per_member: bookings.len() as f64 / members.len().max(1) as f64,
        })
    }

    /// Full member dump, storage order.
    pub async fn list_members(&self) -> Result<Vec<Member>, DomainError> {
        self.store.list_members().await
    }

    /// Full booking dump, append order.
    pub async fn list_all_bookings(&self) -> Result<Vec<Booking>, DomainError> {
        self.store.list_bookings().await
    }

    /// Deletes one member by email. Existing bookings for that member stay
    /// in place, orphaned; that is a documented limitation, not a bug.
    pub async fn remove_member(&self, email: &str) -> Result<(), DomainError> {
        if self.store.delete_member(email).await? {
            tracing::info!(email, "member removed");
            Ok(())
        } else {
            Err(DomainError::not_found(email))
        }
    }

    /// Destructive reset of both collections.
    pub async fn clear_all(&self) -> Result<(), DomainError> {
        self.store.clear_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::store::InMemoryStore;
    use crate::application::{BookingRequest, BookingService, CheckoutRequest, MembershipService};
    use crate::domain::membership::MembershipPlan;

    struct Fixture {
        reporting: ReportingService,
        memberships: MembershipService,
        bookings: BookingService,
    }

    fn fixture() -> Fixture {
        let store = Arc::new(InMemoryStore::new());
        Fixture {
            reporting: ReportingService::new(store.clone()),
            memberships: MembershipService::new(store.clone()),
            bookings: BookingService::new(store),
        }
    }

    async fn checkout(f: &Fixture, email: &str, plan: MembershipPlan) {
        f.memberships
            .checkout(CheckoutRequest {
                plan,
                full_name: "Test User".to_string(),
                email: email.to_string(),
                phone: "+1234567890".to_string(),
                address: None,
                city: None,
                state: None,
                zipcode: None,
                country: None,
            })
            .await
            .unwrap();
    }

    async fn book(f: &Fixture, email: &str, price: f64) {
        f.bookings
            .create_booking(BookingRequest {
                email: email.to_string(),
                ground_name: "Ground".to_string(),
                ground_location: "Town".to_string(),
                booking_date: "2026-09-10".to_string(),
                time_slot: "10:00 AM".to_string(),
                price,
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn stats_on_empty_store_are_all_zero() {
        let f = fixture();
        let stats = f.reporting.stats().await.unwrap();
        assert_eq!(stats.total_members, 0);
        assert_eq!(stats.total_bookings, 0);
        assert_eq!(stats.total_revenue, 0.0);
        assert_eq!(stats.average_bookings_per_member, 0.0);
    }

    #[tokio::test]
    async fn stats_aggregate_members_and_bookings() {
        let f = fixture();
        checkout(&f, "a@x.com", MembershipPlan::Yearly).await;
        checkout(&f, "b@x.com", MembershipPlan::Monthly).await;
        f.memberships.cancel("b@x.com").await.unwrap();
        book(&f, "a@x.com", 1000.0).await;
        book(&f, "a@x.com", 500.0).await;

        let stats = f.reporting.stats().await.unwrap();
        assert_eq!(stats.total_members, 2);
        assert_eq!(stats.active_members, 1);
        assert_eq!(stats.plan_breakdown["yearly"], 1);
        assert_eq!(stats.plan_breakdown["monthly"], 1);
        assert_eq!(stats.plan_breakdown["pro"], 0);
        assert_eq!(stats.total_bookings, 2);
        assert_eq!(stats.total_revenue, 300.0);
        assert_eq!(stats.average_bookings_per_member, 1.0);
    }

    #[tokio::test]
    async fn remove_member_leaves_bookings_orphaned() {
        let f = fixture();
        checkout(&f, "a@x.com", MembershipPlan::Yearly).await;
        book(&f, "a@x.com", 100.0).await;

        f.reporting.remove_member("a@x.com").await.unwrap();

        assert!(f.reporting.list_members().await.unwrap().is_empty());
        assert_eq!(f.reporting.list_all_bookings().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn remove_unknown_member_is_not_found() {
        let f = fixture();
        let err = f.reporting.remove_member("ghost@x.com").await.unwrap_err();
        assert_eq!(err, DomainError::not_found("ghost@x.com"));
    }

    #[tokio::test]
    async fn clear_all_resets_both_collections() {
        let f = fixture();
        checkout(&f, "a@x.com", MembershipPlan::Pro).await;
        book(&f, "a@x.com", 100.0).await;

        f.reporting.clear_all().await.unwrap();

        assert!(f.reporting.list_members().await.unwrap().is_empty());
        assert!(f.reporting.list_all_bookings().await.unwrap().is_empty());
    }
}
