//! HTTP DTOs for the membership and booking API.
//!
//! Every response body carries a boolean `success` flag; failures add a
//! human-readable `message`. Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

use crate::application::{CheckoutReceipt, MembershipCheck, MembershipStats};
use crate::domain::booking::Booking;
use crate::domain::foundation::MemberId;
use crate::domain::membership::{Member, MembershipPlan};
use crate::ports::PaymentOrder;

// ── Request DTOs ────────────────────────────────────────────────────────────

/// Checkout body. Required fields arrive as options so their absence maps
/// to the 400 validation error rather than a deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutPayload {
    #[serde(default)]
    pub plan: Option<MembershipPlan>,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
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

/// Body of the boolean membership check.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyMembershipPayload {
    #[serde(default)]
    pub email: String,
}

/// Body for payment order creation. `currency` is optional and defaults
/// to INR, the gateway's settlement currency.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderPayload {
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "INR".to_string()
}

/// Body for payment signature verification.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPaymentPayload {
    pub order_id: String,
    pub payment_id: String,
    pub signature: String,
}

// ── Response DTOs ───────────────────────────────────────────────────────────

/// Generic failure body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Generic success body with only a message.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub success: bool,
    pub message: String,
    pub membership_id: MemberId,
    pub email: String,
    pub plan: MembershipPlan,
}

impl From<CheckoutReceipt> for CheckoutResponse {
    fn from(receipt: CheckoutReceipt) -> Self {
        Self {
            success: true,
            message: "Membership activated successfully!".to_string(),
            membership_id: receipt.member_id,
            email: receipt.email,
            plan: receipt.plan,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MemberResponse {
    pub success: bool,
    pub member: Member,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyMembershipResponse {
    pub success: bool,
    #[serde(flatten)]
    pub check: MembershipCheck,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookingResponse {
    pub success: bool,
    pub message: String,
    pub booking: Booking,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingListResponse {
    pub success: bool,
    pub bookings: Vec<Booking>,
    pub total_bookings: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberListResponse {
    pub success: bool,
    pub total_members: usize,
    pub members: Vec<Member>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub success: bool,
    pub stats: MembershipStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderResponse {
    pub success: bool,
    pub order: PaymentOrder,
}
