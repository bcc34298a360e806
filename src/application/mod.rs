//! Application layer: services orchestrating domain rules over the ports.
//!
//! Business logic is written once here and parameterized over the
//! `RecordStore` port, so the file-backed and remote-table deployments share
//! identical behavior.

mod booking_service;
mod membership_service;
mod reporting;

pub use booking_service::{BookingRequest, BookingService};
pub use membership_service::{
    CheckoutReceipt, CheckoutRequest, ContactUpdate, MembershipCheck, MembershipService,
};
pub use reporting::{MembershipStats, ReportingService};
