//! Payment gateway port.
//!
//! Payment custody lives entirely with the external gateway; the core only
//! needs order creation and a yes/no signature verdict. Checkout itself is
//! invoked after verification succeeds and does not re-check payment state.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::DomainError;

/// An order registered with the payment gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOrder {
    pub order_id: String,
    pub amount: f64,
    pub currency: String,
}

/// Contract for the external payment collaborator.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Registers an order with the gateway and returns its identifier.
    async fn create_order(&self, amount: f64, currency: &str) -> Result<PaymentOrder, DomainError>;

    /// Verifies the gateway's capture signature: HMAC-SHA256 over
    /// `"{order_id}|{payment_id}"` keyed by the shared secret.
    fn verify_signature(&self, order_id: &str, payment_id: &str, signature: &str) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_gateway_is_object_safe() {
        fn _accepts_dyn(_gateway: &dyn PaymentGateway) {}
    }

    #[test]
    fn payment_order_serializes_camel_case() {
        let order = PaymentOrder {
            order_id: "order_123".to_string(),
            amount: 499.0,
            currency: "INR".to_string(),
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["orderId"], "order_123");
    }
}
