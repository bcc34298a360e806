//! HTTP handlers connecting axum routes to the application services.

use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::{FromRequest, Json, Path, Request, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::application::{
    BookingRequest, BookingService, CheckoutRequest, ContactUpdate, MembershipService,
    ReportingService,
};
use crate::domain::foundation::DomainError;
use crate::ports::{PaymentGateway, RecordStore};

use super::dto::{
    BookingListResponse, BookingResponse, CheckoutPayload, CheckoutResponse, CreateOrderPayload,
    ErrorResponse, MemberListResponse, MemberResponse, MessageResponse, OrderResponse,
    StatsResponse, VerifyMembershipPayload, VerifyMembershipResponse, VerifyPaymentPayload,
};

/// Shared application state, cloned per request. Services are built on
/// demand from the Arc-wrapped ports.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub payment: Arc<dyn PaymentGateway>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>, payment: Arc<dyn PaymentGateway>) -> Self {
        Self { store, payment }
    }

    fn memberships(&self) -> MembershipService {
        MembershipService::new(self.store.clone())
    }

    fn bookings(&self) -> BookingService {
        BookingService::new(self.store.clone())
    }

    fn reporting(&self) -> ReportingService {
        ReportingService::new(self.store.clone())
    }
}

/// Request-body extractor that keeps malformed bodies inside the error
/// taxonomy. The stock `Json` extractor rejects with a plain-text 422;
/// every body this API serves, failures included, is JSON with a
/// `success` flag, so deserialization failures become a 400
/// `ValidationFailed` instead.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                Err(DomainError::validation("body", rejection.body_text()).into())
            }
        }
    }
}

// ── Membership endpoints ────────────────────────────────────────────────────

/// POST /api/membership/checkout
pub async fn checkout(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CheckoutPayload>,
) -> Result<Json<CheckoutResponse>, ApiError> {
    let plan = payload
        .plan
        .ok_or_else(|| DomainError::validation("plan", "is required"))?;
    let receipt = state
        .memberships()
        .checkout(CheckoutRequest {
            plan,
            full_name: payload.full_name,
            email: payload.email,
            phone: payload.phone,
            address: payload.address,
            city: payload.city,
            state: payload.state,
            zipcode: payload.zipcode,
            country: payload.country,
        })
        .await?;
    Ok(Json(receipt.into()))
}

/// GET /api/membership/:email
pub async fn get_membership(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<MemberResponse>, ApiError> {
    let member = state.memberships().get(&email).await?;
    Ok(Json(MemberResponse {
        success: true,
        member,
    }))
}

/// PUT /api/membership/:email
pub async fn update_membership(
    State(state): State<AppState>,
    Path(email): Path<String>,
    ApiJson(update): ApiJson<ContactUpdate>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.memberships().update(&email, update).await?;
    Ok(Json(MessageResponse::new(
        "Membership updated successfully",
    )))
}

/// DELETE /api/membership/:email
pub async fn cancel_membership(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.memberships().cancel(&email).await?;
    Ok(Json(MessageResponse::new(
        "Membership cancelled successfully",
    )))
}

/// POST /api/membership/verify
pub async fn verify_membership(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<VerifyMembershipPayload>,
) -> Result<Json<VerifyMembershipResponse>, ApiError> {
    if payload.email.trim().is_empty() {
        return Err(DomainError::validation("email", "is required").into());
    }
    let check = state.memberships().verify(&payload.email).await?;
    Ok(Json(VerifyMembershipResponse {
        success: true,
        check,
    }))
}

// ── Booking endpoints ───────────────────────────────────────────────────────

/// POST /api/bookings
pub async fn create_booking(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<BookingRequest>,
) -> Result<Json<BookingResponse>, ApiError> {
    let booking = state.bookings().create_booking(request).await?;
    Ok(Json(BookingResponse {
        success: true,
        message: "Booking confirmed with member discount!".to_string(),
        booking,
    }))
}

/// GET /api/bookings/:email
pub async fn list_bookings(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<BookingListResponse>, ApiError> {
    let bookings = state.bookings().list_bookings(&email).await?;
    Ok(Json(BookingListResponse {
        success: true,
        total_bookings: bookings.len(),
        bookings,
    }))
}

// ── Admin endpoints ─────────────────────────────────────────────────────────

/// GET /api/members
pub async fn list_members(
    State(state): State<AppState>,
) -> Result<Json<MemberListResponse>, ApiError> {
    let members = state.reporting().list_members().await?;
    Ok(Json(MemberListResponse {
        success: true,
        total_members: members.len(),
        members,
    }))
}

/// GET /api/stats
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, ApiError> {
    let stats = state.reporting().stats().await?;
    Ok(Json(StatsResponse {
        success: true,
        stats,
    }))
}

// ── Payment endpoints ───────────────────────────────────────────────────────

/// POST /api/payment/order
pub async fn create_payment_order(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateOrderPayload>,
) -> Result<Json<OrderResponse>, ApiError> {
    let order = state
        .payment
        .create_order(payload.amount, &payload.currency)
        .await?;
    Ok(Json(OrderResponse {
        success: true,
        order,
    }))
}

/// POST /api/payment/verify
pub async fn verify_payment(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<VerifyPaymentPayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    if state
        .payment
        .verify_signature(&payload.order_id, &payload.payment_id, &payload.signature)
    {
        Ok(Json(MessageResponse::new("Payment verified")))
    } else {
        Err(DomainError::InvalidPaymentSignature.into())
    }
}

// ── Health ──────────────────────────────────────────────────────────────────

/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(json!({ "success": true, "status": "ok" }))
}

// ── Error mapping ───────────────────────────────────────────────────────────

/// API error type that converts domain errors to HTTP responses.
pub struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            DomainError::ValidationFailed { .. } | DomainError::InvalidPaymentSignature => {
                StatusCode::BAD_REQUEST
            }
            DomainError::NotFound(_) => StatusCode::NOT_FOUND,
            DomainError::NotActive(_) => StatusCode::UNAUTHORIZED,
            DomainError::GatewayUnavailable(_) => StatusCode::BAD_GATEWAY,
            DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Internal detail goes to the log, not the caller.
        let message = match &self.0 {
            DomainError::Storage(detail) => {
                tracing::error!(%detail, "storage failure");
                "Internal server error".to_string()
            }
            DomainError::GatewayUnavailable(detail) => {
                tracing::error!(%detail, "payment gateway failure");
                "Payment gateway unavailable".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
