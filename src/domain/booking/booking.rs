//! The Booking record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{BookingId, MemberId, Timestamp};
use crate::domain::membership::Member;

/// Lifecycle status of a booking. There is no cancellation path; bookings
/// are confirmed at creation and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
}

/// Ground details submitted with a booking request. Free-form descriptive
/// fields; no conflict or overlap checking is performed.
#[derive(Debug, Clone, Default)]
pub struct BookingDetails {
    pub ground_name: String,
    pub ground_location: String,
    pub booking_date: String,
    pub time_slot: String,
}

/// One reserved ground/time-slot with the discount that was applied.
///
/// `email` and the discount arithmetic are denormalized from the member at
/// creation time; a later plan change never rewrites past bookings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub member_id: MemberId,
    pub email: String,
    pub ground_name: String,
    pub ground_location: String,
    pub booking_date: String,
    pub time_slot: String,
    pub original_price: f64,
    pub discount: f64,
    pub final_price: f64,
    pub status: BookingStatus,
    pub created_at: Timestamp,
}

impl Booking {
    /// Creates a confirmed booking for an active member, applying the
    /// member's frozen discount percentage to the quoted price.
    pub fn create(member: &Member, details: BookingDetails, price: f64, now: Timestamp) -> Self {
        let discount = price * f64::from(member.discount_percentage) / 100.0;
        Self {
            id: BookingId::new(),
            member_id: member.id,
            email: member.email.clone(),
            ground_name: details.ground_name,
            ground_location: details.ground_location,
            booking_date: details.booking_date,
            time_slot: details.time_slot,
            original_price: price,
            discount,
            final_price: price - discount,
            status: BookingStatus::Confirmed,
            created_at: now,
        }
    }
}
