//! In-memory record store.
//!
//! Backs the service tests and is handy for local development without a
//! data directory. Mirrors the file store's semantics exactly, minus the
//! disk round trip.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::booking::Booking;
use crate::domain::foundation::DomainError;
use crate::domain::membership::Member;
use crate::ports::RecordStore;

/// Volatile `RecordStore` over two plain vectors.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    members: Mutex<Vec<Member>>,
    bookings: Mutex<Vec<Booking>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Every mutation under these locks leaves the Vec fully written, so a
    // lock poisoned by a panicking holder is still safe to keep using.
    fn lock_members(&self) -> MutexGuard<'_, Vec<Member>> {
        self.members.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_bookings(&self) -> MutexGuard<'_, Vec<Booking>> {
        self.bookings.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn list_members(&self) -> Result<Vec<Member>, DomainError> {
        Ok(self.lock_members().clone())
    }

    async fn find_member(&self, email: &str) -> Result<Option<Member>, DomainError> {
        Ok(self
            .lock_members()
            .iter()
            .find(|m| m.email == email)
            .cloned())
    }

    async fn upsert_member(&self, member: &Member) -> Result<(), DomainError> {
        let mut members = self.lock_members();
        match members.iter_mut().find(|m| m.email == member.email) {
            Some(existing) => *existing = member.clone(),
            None => members.push(member.clone()),
        }
        Ok(())
    }

    async fn delete_member(&self, email: &str) -> Result<bool, DomainError> {
        let mut members = self.lock_members();
        let before = members.len();
        members.retain(|m| m.email != email);
        Ok(members.len() < before)
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>, DomainError> {
        Ok(self.lock_bookings().clone())
    }

    async fn bookings_for_member(&self, email: &str) -> Result<Vec<Booking>, DomainError> {
        Ok(self
            .lock_bookings()
            .iter()
            .filter(|b| b.email == email)
            .cloned()
            .collect())
    }

    async fn append_booking(&self, booking: &Booking) -> Result<(), DomainError> {
        self.lock_bookings().push(booking.clone());
        Ok(())
    }

    async fn clear_all(&self) -> Result<(), DomainError> {
        self.lock_members().clear();
        self.lock_bookings().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use crate::domain::membership::{MemberProfile, MembershipPlan};

    fn member(email: &str) -> Member {
        Member::create(
            MemberProfile {
                full_name: "Test User".to_string(),
                email: email.to_string(),
                phone: "+1234567890".to_string(),
                ..Default::default()
            },
            MembershipPlan::Monthly,
            Timestamp::now(),
        )
    }

    #[tokio::test]
    async fn upsert_replaces_by_email() {
        let store = InMemoryStore::new();
        let first = member("a@x.com");
        store.upsert_member(&first).await.unwrap();

        let mut replacement = member("a@x.com");
        replacement.full_name = "Replaced".to_string();
        store.upsert_member(&replacement).await.unwrap();

        let members = store.list_members().await.unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].full_name, "Replaced");
    }

    #[tokio::test]
    async fn delete_member_reports_whether_a_record_matched() {
        let store = InMemoryStore::new();
        store.upsert_member(&member("a@x.com")).await.unwrap();

        assert!(store.delete_member("a@x.com").await.unwrap());
        assert!(!store.delete_member("a@x.com").await.unwrap());
    }

    #[tokio::test]
    async fn store_stays_usable_after_a_lock_holder_panics() {
        let store = std::sync::Arc::new(InMemoryStore::new());
        store.upsert_member(&member("a@x.com")).await.unwrap();

        let poisoner = store.clone();
        std::thread::spawn(move || {
            let _guard = poisoner.members.lock().unwrap();
            panic!("holder dies with the lock");
        })
        .join()
        .unwrap_err();

        let members = store.list_members().await.unwrap();
        assert_eq!(members.len(), 1);
        store.upsert_member(&member("b@x.com")).await.unwrap();
        assert_eq!(store.list_members().await.unwrap().len(), 2);
    }
}
