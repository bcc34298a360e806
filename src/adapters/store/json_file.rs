//! Local file-backed record store.
//!
//! Persists the two collections as pretty-printed JSON arrays, one file
//! each (`members.json`, `bookings.json`), created empty on first use.
//! Every operation reads the full collection, mutates in memory, and writes
//! the full collection back.
//!
//! Writes go to a temp file and are renamed into place, so a crash mid-write
//! never leaves a truncated file. Two concurrent writers can still lose one
//! writer's changes (last rename wins); accepted at the target scale.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;

use crate::domain::booking::Booking;
use crate::domain::foundation::DomainError;
use crate::domain::membership::Member;
use crate::ports::RecordStore;

/// `RecordStore` over two JSON array files in a data directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    members_path: PathBuf,
    bookings_path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store rooted at the given data directory. The directory
    /// and files are created lazily on first write; reads of absent files
    /// yield empty collections.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            members_path: data_dir.join("members.json"),
            bookings_path: data_dir.join("bookings.json"),
        }
    }

    async fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DomainError> {
        match fs::read(path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                DomainError::storage(format!("corrupt record file {}: {}", path.display(), e))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(DomainError::storage(format!(
                "failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    async fn write_collection<T: Serialize>(path: &Path, records: &[T]) -> Result<(), DomainError> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).await.map_err(|e| {
                DomainError::storage(format!("failed to create {}: {}", dir.display(), e))
            })?;
        }

        let json = serde_json::to_vec_pretty(records)
            .map_err(|e| DomainError::storage(format!("failed to serialize records: {}", e)))?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, &json).await.map_err(|e| {
            DomainError::storage(format!("failed to write {}: {}", tmp.display(), e))
        })?;
        fs::rename(&tmp, path).await.map_err(|e| {
            DomainError::storage(format!("failed to replace {}: {}", path.display(), e))
        })
    }

    async fn read_members(&self) -> Result<Vec<Member>, DomainError> {
        Self::read_collection(&self.members_path).await
    }

    async fn write_members(&self, members: &[Member]) -> Result<(), DomainError> {
        Self::write_collection(&self.members_path, members).await
    }

    async fn read_bookings(&self) -> Result<Vec<Booking>, DomainError> {
        Self::read_collection(&self.bookings_path).await
    }
}

#[async_trait]
impl RecordStore for JsonFileStore {
    async fn list_members(&self) -> Result<Vec<Member>, DomainError> {
        self.read_members().await
    }

    async fn find_member(&self, email: &str) -> Result<Option<Member>, DomainError> {
        Ok(self
            .read_members()
            .await?
            .into_iter()
            .find(|m| m.email == email))
    }

    async fn upsert_member(&self, member: &Member) -> Result<(), DomainError> {
        let mut members = self.read_members().await?;
        match members.iter_mut().find(|m| m.email == member.email) {
            Some(existing) => *existing = member.clone(),
            None => members.push(member.clone()),
        }
        self.write_members(&members).await
    }

    async fn delete_member(&self, email: &str) -> Result<bool, DomainError> {
        let mut members = self.read_members().await?;
        let before = members.len();
        members.retain(|m| m.email != email);
        if members.len() == before {
            return Ok(false);
        }
        self.write_members(&members).await?;
        Ok(true)
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>, DomainError> {
        self.read_bookings().await
    }

    async fn bookings_for_member(&self, email: &str) -> Result<Vec<Booking>, DomainError> {
        Ok(self
            .read_bookings()
            .await?
            .into_iter()
            .filter(|b| b.email == email)
            .collect())
    }

    async fn append_booking(&self, booking: &Booking) -> Result<(), DomainError> {
        let mut bookings = self.read_bookings().await?;
        bookings.push(booking.clone());
        Self::write_collection(&self.bookings_path, &bookings).await
    }

    async fn clear_all(&self) -> Result<(), DomainError> {
        self.write_members(&[]).await?;
        Self::write_collection::<Booking>(&self.bookings_path, &[]).await
    }
}
