//! Record store port: persistence of the Member and Booking collections.
//!
//! The two backends (local JSON files, remote table store) are functionally
//! interchangeable behind this contract. Services depend only on these
//! operations, never on file paths or connection details.
//!
//! # Consistency
//!
//! No operation takes a lock or participates in a transaction. Concurrent
//! read-modify-write cycles on the same member race with last-writer-wins
//! semantics, which is accepted at the target scale.

use async_trait::async_trait;

use crate::domain::booking::Booking;
use crate::domain::foundation::DomainError;
use crate::domain::membership::Member;

/// Persistence contract for Members and Bookings.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Returns every member, in storage order.
    async fn list_members(&self) -> Result<Vec<Member>, DomainError>;

    /// Finds the member with the given email, if any. Email is the natural
    /// key; at most one record per email is meaningful.
    async fn find_member(&self, email: &str) -> Result<Option<Member>, DomainError>;

    /// Inserts or replaces the member record keyed by its email.
    async fn upsert_member(&self, member: &Member) -> Result<(), DomainError>;

    /// Deletes the member with the given email. Returns false when no
    /// record matched. Never touches bookings; orphaned bookings are left
    /// in place.
    async fn delete_member(&self, email: &str) -> Result<bool, DomainError>;

    /// Returns every booking, in append order.
    async fn list_bookings(&self) -> Result<Vec<Booking>, DomainError>;

    /// Returns the bookings for one member email, in append order.
    async fn bookings_for_member(&self, email: &str) -> Result<Vec<Booking>, DomainError>;

    /// Appends a new booking. Bookings are never updated or deleted.
    async fn append_booking(&self, booking: &Booking) -> Result<(), DomainError>;

    /// Removes every member and booking. Admin-only destructive reset.
    async fn clear_all(&self) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn RecordStore) {}
    }
}
