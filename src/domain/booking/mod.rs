//! Booking domain: the Booking record and its pricing arithmetic.

mod booking;

pub use booking::{Booking, BookingDetails, BookingStatus};
