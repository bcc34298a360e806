//! CSV export of members and bookings for the admin surface.
//!
//! Presentation-only: fixed header rows, one record per line, written with
//! the `csv` crate so quoting is handled properly.

use std::io::Write;

use crate::domain::booking::Booking;
use crate::domain::foundation::DomainError;
use crate::domain::membership::Member;

const MEMBER_HEADERS: [&str; 7] = [
    "Email", "Name", "Plan", "Status", "Bookings", "Savings", "Joined",
];

const BOOKING_HEADERS: [&str; 7] = [
    "Email", "Ground", "Date", "Time", "Price", "Discount", "Status",
];

fn csv_error(e: csv::Error) -> DomainError {
    DomainError::storage(format!("CSV write failed: {}", e))
}

/// Writes the member collection as CSV.
pub fn write_members_csv<W: Write>(writer: W, members: &[Member]) -> Result<(), DomainError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(MEMBER_HEADERS).map_err(csv_error)?;
    for member in members {
        csv.write_record([
            member.email.clone(),
            member.full_name.clone(),
            member.plan.as_str().to_string(),
            member.status.to_string(),
            member.total_bookings.to_string(),
            member.total_savings.to_string(),
            member.created_at.to_rfc3339(),
        ])
        .map_err(csv_error)?;
    }
    csv.flush()
        .map_err(|e| DomainError::storage(format!("CSV flush failed: {}", e)))
}

/// Writes the booking collection as CSV.
pub fn write_bookings_csv<W: Write>(writer: W, bookings: &[Booking]) -> Result<(), DomainError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(BOOKING_HEADERS).map_err(csv_error)?;
    for booking in bookings {
        csv.write_record([
            booking.email.clone(),
            booking.ground_name.clone(),
            booking.booking_date.clone(),
            booking.time_slot.clone(),
            booking.original_price.to_string(),
            booking.discount.to_string(),
            "confirmed".to_string(),
        ])
        .map_err(csv_error)?;
    }
    csv.flush()
        .map_err(|e| DomainError::storage(format!("CSV flush failed: {}", e)))
}
