//! Booking service: discounted booking creation and per-member listing.

use std::sync::Arc;

use serde::Deserialize;

use crate::domain::booking::{Booking, BookingDetails};
use crate::domain::foundation::{DomainError, Timestamp};
use crate::ports::RecordStore;

/// Booking submission for one ground/time-slot.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub email: String,
    pub ground_name: String,
    #[serde(default)]
    pub ground_location: String,
    pub booking_date: String,
    pub time_slot: String,
    pub price: f64,
}

/// Creates bookings against active memberships and accumulates the member's
/// booking statistics.
pub struct BookingService {
    store: Arc<dyn RecordStore>,
}

impl BookingService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Creates a confirmed booking for an active member.
    ///
    /// The booking insert and the member statistics update are two
    /// sequential writes with no transaction around them: a crash in
    /// between leaves a booking whose discount is not yet reflected on the
    /// member. Accepted best-effort model at this scale.
    pub async fn create_booking(&self, request: BookingRequest) -> Result<Booking, DomainError> {
        let mut member = match self.store.find_member(&request.email).await? {
            Some(member) if member.is_active() => member,
            // Inactive and absent are indistinguishable to the caller.
            _ => return Err(DomainError::not_active(&request.email)),
        };

        let booking = Booking::create(
            &member,
            BookingDetails {
                ground_name: request.ground_name,
                ground_location: request.ground_location,
                booking_date: request.booking_date,
                time_slot: request.time_slot,
            },
            request.price,
            Timestamp::now(),
        );
        self.store.append_booking(&booking).await?;

        member.record_booking(booking.discount);
        self.store.upsert_member(&member).await?;

        tracing::info!(
            email = %booking.email,
            ground = %booking.ground_name,
            final_price = booking.final_price,
            "booking confirmed"
        );
        Ok(booking)
    }

    /// Returns the member's bookings in append order. No pagination; the
    /// target scale does not need one.
    pub async fn list_bookings(&self, email: &str) -> Result<Vec<Booking>, DomainError> {
        self.store.bookings_for_member(email).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::store::InMemoryStore;
    use crate::application::{CheckoutRequest, MembershipService};
    use crate::domain::membership::MembershipPlan;

    async fn setup_with_member(email: &str) -> (BookingService, MembershipService, Arc<InMemoryStore>) {
        let store = Arc::new(InMemoryStore::new());
        let memberships = MembershipService::new(store.clone());
        memberships
            .checkout(CheckoutRequest {
                plan: MembershipPlan::Yearly,
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
        (BookingService::new(store.clone()), memberships, store)
    }

    fn booking_request(email: &str, price: f64) -> BookingRequest {
        BookingRequest {
            email: email.to_string(),
            ground_name: "City Cricket Ground".to_string(),
            ground_location: "Downtown".to_string(),
            booking_date: "2026-09-10".to_string(),
            time_slot: "4:00 PM - 5:00 PM".to_string(),
            price,
        }
    }

    #[tokio::test]
    async fn booking_applies_member_discount() {
        let (bookings, _, _) = setup_with_member("a@x.com").await;
        let booking = bookings
            .create_booking(booking_request("a@x.com", 1000.0))
            .await
            .unwrap();
        assert_eq!(booking.discount, 200.0);
        assert_eq!(booking.final_price, 800.0);
    }

    #[tokio::test]
    async fn booking_updates_member_statistics() {
        let (bookings, memberships, _) = setup_with_member("a@x.com").await;
        bookings
            .create_booking(booking_request("a@x.com", 1000.0))
            .await
            .unwrap();
        bookings
            .create_booking(booking_request("a@x.com", 500.0))
            .await
            .unwrap();

        let member = memberships.get("a@x.com").await.unwrap();
        assert_eq!(member.total_bookings, 2);
        assert_eq!(member.total_savings, 300.0);
    }

    #[tokio::test]
    async fn booking_against_unknown_member_is_unauthorized() {
        let store = Arc::new(InMemoryStore::new());
        let bookings = BookingService::new(store.clone());

        let err = bookings
            .create_booking(booking_request("ghost@x.com", 100.0))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotActive(_)));
        assert!(store.list_bookings().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn booking_against_cancelled_member_is_unauthorized_and_persists_nothing() {
        let (bookings, memberships, store) = setup_with_member("a@x.com").await;
        memberships.cancel("a@x.com").await.unwrap();

        let err = bookings
            .create_booking(booking_request("a@x.com", 100.0))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotActive(_)));
        assert!(store.list_bookings().await.unwrap().is_empty());

        let member = memberships.get("a@x.com").await.unwrap();
        assert_eq!(member.total_bookings, 0);
    }

    #[tokio::test]
    async fn list_bookings_returns_only_that_member_in_append_order() {
        let (bookings, memberships, _) = setup_with_member("a@x.com").await;
        memberships
            .checkout(CheckoutRequest {
                plan: MembershipPlan::Monthly,
                full_name: "Other".to_string(),
                email: "b@x.com".to_string(),
                phone: "+1222333444".to_string(),
                address: None,
                city: None,
                state: None,
                zipcode: None,
                country: None,
            })
            .await
            .unwrap();

        let first = bookings
            .create_booking(booking_request("a@x.com", 100.0))
            .await
            .unwrap();
        bookings
            .create_booking(booking_request("b@x.com", 200.0))
            .await
            .unwrap();
        let second = bookings
            .create_booking(booking_request("a@x.com", 300.0))
            .await
            .unwrap();

        let listed = bookings.list_bookings("a@x.com").await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, first.id);
        assert_eq!(listed[1].id, second.id);
    }
}
