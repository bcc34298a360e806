//! Remote table-backed record store.
//!
//! Talks to a PostgREST-style table API (two tables, `members` and
//! `bookings`) over HTTP. Functionally interchangeable with the file store:
//! the services cannot tell them apart. Each operation is a single targeted
//! request; there is no compare-and-swap, so concurrent stat updates on the
//! same member can still lose one increment.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::booking::Booking;
use crate::domain::foundation::DomainError;
use crate::domain::membership::Member;
use crate::ports::RecordStore;

/// `RecordStore` over a remote table API.
#[derive(Debug, Clone)]
pub struct RestTableStore {
    client: Client,
    base_url: String,
}

impl RestTableStore {
    /// Creates a store for the given API root (e.g.
    /// `https://project.example.co/rest/v1`), authenticating every request
    /// with the service key.
    pub fn new(base_url: impl Into<String>, api_key: &str) -> Result<Self, DomainError> {
        let mut headers = HeaderMap::new();
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|_| DomainError::storage("table store API key is not a valid header value"))?;
        bearer.set_sensitive(true);
        let mut key = HeaderValue::from_str(api_key)
            .map_err(|_| DomainError::storage("table store API key is not a valid header value"))?;
        key.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert("apikey", key);

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| DomainError::storage(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.base_url, table)
    }

    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        filter: Option<(&str, String)>,
    ) -> Result<Vec<T>, DomainError> {
        let mut request = self.client.get(self.table_url(table));
        if let Some((column, value)) = filter {
            request = request.query(&[(column, value)]);
        }
        let response = request
            .send()
            .await
            .map_err(|e| DomainError::storage(format!("table store unreachable: {}", e)))?;
        Self::check_status(table, response.status())?;
        response
            .json()
            .await
            .map_err(|e| DomainError::storage(format!("invalid {} payload: {}", table, e)))
    }

    async fn write<T: Serialize + ?Sized>(
        &self,
        method: reqwest::Method,
        table: &str,
        query: &[(&str, &str)],
        headers: &[(&'static str, &'static str)],
        body: Option<&T>,
    ) -> Result<(), DomainError> {
        let mut request = self
            .client
            .request(method, self.table_url(table))
            .query(query);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request
            .send()
            .await
            .map_err(|e| DomainError::storage(format!("table store unreachable: {}", e)))?;
        Self::check_status(table, response.status())
    }

    fn check_status(table: &str, status: StatusCode) -> Result<(), DomainError> {
        if status.is_success() {
            Ok(())
        } else {
            Err(DomainError::storage(format!(
                "table store returned {} for {}",
                status, table
            )))
        }
    }

    fn eq_filter(value: &str) -> String {
        format!("eq.{}", value)
    }
}

#[async_trait]
impl RecordStore for RestTableStore {
    async fn list_members(&self) -> Result<Vec<Member>, DomainError> {
        self.select("members", None).await
    }

    async fn find_member(&self, email: &str) -> Result<Option<Member>, DomainError> {
        let mut rows: Vec<Member> = self
            .select("members", Some(("email", Self::eq_filter(email))))
            .await?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.swap_remove(0))
        })
    }

    async fn upsert_member(&self, member: &Member) -> Result<(), DomainError> {
        // Merge-on-conflict keyed by the email column; one request covers
        // both the insert and the update path.
        self.write(
            reqwest::Method::POST,
            "members",
            &[("on_conflict", "email")],
            &[("Prefer", "resolution=merge-duplicates")],
            Some(member),
        )
        .await
    }

    async fn delete_member(&self, email: &str) -> Result<bool, DomainError> {
        match self.find_member(email).await? {
            None => Ok(false),
            Some(_) => {
                let filter = Self::eq_filter(email);
                self.write::<()>(
                    reqwest::Method::DELETE,
                    "members",
                    &[("email", filter.as_str())],
                    &[],
                    None,
                )
                .await?;
                Ok(true)
            }
        }
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>, DomainError> {
        self.select("bookings", None).await
    }

    async fn bookings_for_member(&self, email: &str) -> Result<Vec<Booking>, DomainError> {
        self.select("bookings", Some(("email", Self::eq_filter(email))))
            .await
    }

    async fn append_booking(&self, booking: &Booking) -> Result<(), DomainError> {
        self.write(reqwest::Method::POST, "bookings", &[], &[], Some(booking))
            .await
    }

    async fn clear_all(&self) -> Result<(), DomainError> {
        for table in ["bookings", "members"] {
            self.write::<()>(
                reqwest::Method::DELETE,
                table,
                &[("id", "not.is.null")],
                &[],
                None,
            )
            .await?;
        }
        Ok(())
    }
}
