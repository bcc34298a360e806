//! Membership service: checkout, lookup, contact updates, cancellation,
//! and the boolean active-membership check.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, MemberId, Timestamp};
use crate::domain::membership::{Member, MemberProfile, MembershipPlan};
use crate::ports::RecordStore;

/// Checkout submission. Payment has already been verified through the
/// payment gateway by the time this request is made.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub plan: MembershipPlan,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zipcode: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl CheckoutRequest {
    fn validate(&self) -> Result<(), DomainError> {
        for (field, value) in [
            ("fullName", &self.full_name),
            ("email", &self.email),
            ("phone", &self.phone),
        ] {
            if value.trim().is_empty() {
                return Err(DomainError::validation(field, "cannot be empty"));
            }
        }
        Ok(())
    }
}

/// Identifying fields returned from a successful checkout.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutReceipt {
    pub member_id: MemberId,
    pub email: String,
    pub plan: MembershipPlan,
}

/// Partial update of the two mutable contact fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactUpdate {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Result of the active-membership check. A missing member and a cancelled
/// member are reported identically: `is_active_member=false` with no plan.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipCheck {
    pub is_active_member: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<MembershipPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<u8>,
}

impl MembershipCheck {
    fn inactive() -> Self {
        Self {
            is_active_member: false,
            plan: None,
            discount_percentage: None,
        }
    }
}

/// Creates, updates, and cancels membership records.
pub struct MembershipService {
    store: Arc<dyn RecordStore>,
}

impl MembershipService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Upsert-by-email checkout.
    ///
    /// An existing member (active or cancelled) gets the new plan, a fresh
    /// frozen discount and renewal date, and reactivation; statistics and
    /// address fields are preserved. An unknown email gets a brand-new
    /// record with zeroed counters.
    pub async fn checkout(&self, request: CheckoutRequest) -> Result<CheckoutReceipt, DomainError> {
        request.validate()?;
        let now = Timestamp::now();

        let member = match self.store.find_member(&request.email).await? {
            Some(mut existing) => {
                existing.repurchase(request.plan, request.full_name, request.phone, now);
                existing
            }
            None => Member::create(
                MemberProfile {
                    full_name: request.full_name,
                    email: request.email.clone(),
                    phone: request.phone,
                    address: request.address,
                    city: request.city,
                    state: request.state,
                    zipcode: request.zipcode,
                    country: request.country,
                },
                request.plan,
                now,
            ),
        };

        self.store.upsert_member(&member).await?;
        tracing::info!(email = %member.email, plan = %member.plan, "membership activated");

        Ok(CheckoutReceipt {
            member_id: member.id,
            email: member.email,
            plan: member.plan,
        })
    }

    /// Fetches the full member record for an email.
    pub async fn get(&self, email: &str) -> Result<Member, DomainError> {
        self.store
            .find_member(email)
            .await?
            .ok_or_else(|| DomainError::not_found(email))
    }

    /// Applies a partial contact update and stamps `updated_at`.
    pub async fn update(&self, email: &str, update: ContactUpdate) -> Result<(), DomainError> {
        let mut member = self.get(email).await?;
        member.update_contact(update.full_name, update.phone, Timestamp::now());
        self.store.upsert_member(&member).await
    }

    /// Cancels the membership. Unknown emails are a NotFound error, kept
    /// consistent with get/update rather than the silent no-op some earlier
    /// deployments had.
    pub async fn cancel(&self, email: &str) -> Result<(), DomainError> {
        let mut member = self.get(email).await?;
        member.cancel(Timestamp::now());
        self.store.upsert_member(&member).await?;
        tracing::info!(email, "membership cancelled");
        Ok(())
    }

    /// Boolean gate used as a precondition by callers such as the booking
    /// flow. Never fails on a missing email.
    pub async fn verify(&self, email: &str) -> Result<MembershipCheck, DomainError> {
        match self.store.find_member(email).await? {
            Some(member) if member.is_active() => Ok(MembershipCheck {
                is_active_member: true,
                plan: Some(member.plan),
                discount_percentage: Some(member.discount_percentage),
            }),
            _ => Ok(MembershipCheck::inactive()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::store::InMemoryStore;
    use crate::domain::membership::MembershipStatus;

    fn service() -> (MembershipService, Arc<InMemoryStore>) {
        let store = Arc::new(InMemoryStore::new());
        (MembershipService::new(store.clone()), store)
    }

    fn checkout_request(email: &str, plan: MembershipPlan) -> CheckoutRequest {
        CheckoutRequest {
            plan,
            full_name: "Test User".to_string(),
            email: email.to_string(),
            phone: "+1234567890".to_string(),
            address: Some("123 Test St".to_string()),
            city: Some("Test City".to_string()),
            state: None,
            zipcode: None,
            country: None,
        }
    }

    #[tokio::test]
    async fn checkout_then_get_returns_active_member() {
        let (service, _) = service();
        service
            .checkout(checkout_request("a@x.com", MembershipPlan::Yearly))
            .await
            .unwrap();

        let member = service.get("a@x.com").await.unwrap();
        assert_eq!(member.status, MembershipStatus::Active);
        assert_eq!(member.plan, MembershipPlan::Yearly);
        assert_eq!(member.discount_percentage, 20);
    }

    #[tokio::test]
    async fn checkout_rejects_empty_required_fields() {
        let (service, store) = service();
        let mut request = checkout_request("a@x.com", MembershipPlan::Monthly);
        request.phone = "  ".to_string();

        let err = service.checkout(request).await.unwrap_err();
        assert!(matches!(err, DomainError::ValidationFailed { .. }));
        assert!(store.list_members().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn second_checkout_updates_in_place() {
        let (service, store) = service();
        service
            .checkout(checkout_request("a@x.com", MembershipPlan::Monthly))
            .await
            .unwrap();
        service
            .checkout(checkout_request("a@x.com", MembershipPlan::Yearly))
            .await
            .unwrap();

        let members = store.list_members().await.unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].plan, MembershipPlan::Yearly);
    }

    #[tokio::test]
    async fn repurchase_preserves_statistics() {
        let (service, store) = service();
        service
            .checkout(checkout_request("a@x.com", MembershipPlan::Monthly))
            .await
            .unwrap();

        let mut member = store.find_member("a@x.com").await.unwrap().unwrap();
        member.record_booking(150.0);
        store.upsert_member(&member).await.unwrap();

        service
            .checkout(checkout_request("a@x.com", MembershipPlan::Yearly))
            .await
            .unwrap();
        let member = store.find_member("a@x.com").await.unwrap().unwrap();
        assert_eq!(member.total_bookings, 1);
        assert_eq!(member.total_savings, 150.0);
    }

    #[tokio::test]
    async fn get_unknown_email_is_not_found() {
        let (service, _) = service();
        let err = service.get("ghost@x.com").await.unwrap_err();
        assert_eq!(err, DomainError::not_found("ghost@x.com"));
    }

    #[tokio::test]
    async fn update_sets_contact_fields_and_timestamp() {
        let (service, _) = service();
        service
            .checkout(checkout_request("a@x.com", MembershipPlan::Pro))
            .await
            .unwrap();

        service
            .update(
                "a@x.com",
                ContactUpdate {
                    full_name: Some("Renamed".to_string()),
                    phone: None,
                },
            )
            .await
            .unwrap();

        let member = service.get("a@x.com").await.unwrap();
        assert_eq!(member.full_name, "Renamed");
        assert_eq!(member.phone, "+1234567890");
        assert!(member.updated_at.is_some());
    }

    #[tokio::test]
    async fn cancel_unknown_email_is_not_found() {
        let (service, _) = service();
        let err = service.cancel("ghost@x.com").await.unwrap_err();
        assert_eq!(err, DomainError::not_found("ghost@x.com"));
    }

    #[tokio::test]
    async fn verify_treats_unknown_and_cancelled_identically() {
        let (service, _) = service();
        service
            .checkout(checkout_request("a@x.com", MembershipPlan::Monthly))
            .await
            .unwrap();
        service.cancel("a@x.com").await.unwrap();

        let cancelled = service.verify("a@x.com").await.unwrap();
        let unknown = service.verify("ghost@x.com").await.unwrap();

        assert!(!cancelled.is_active_member);
        assert!(!unknown.is_active_member);
        assert!(cancelled.plan.is_none());
        assert!(unknown.plan.is_none());
    }

    #[tokio::test]
    async fn verify_reports_plan_and_discount_for_active_member() {
        let (service, _) = service();
        service
            .checkout(checkout_request("a@x.com", MembershipPlan::ProPlus))
            .await
            .unwrap();

        let check = service.verify("a@x.com").await.unwrap();
        assert!(check.is_active_member);
        assert_eq!(check.plan, Some(MembershipPlan::ProPlus));
        assert_eq!(check.discount_percentage, Some(20));
    }
}
