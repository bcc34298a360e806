//! HTTP payment gateway with HMAC-SHA256 capture verification.
//!
//! Order creation is delegated to the remote gateway; signature
//! verification happens locally against the shared key secret. The signed
//! payload is `"{order_id}|{payment_id}"` and the gateway sends the
//! signature hex-encoded.

use async_trait::async_trait;
use hmac::{Hmac, Mac};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::domain::foundation::DomainError;
use crate::ports::{PaymentGateway, PaymentOrder};

/// Payment bridge over the gateway's REST API.
#[derive(Debug, Clone)]
pub struct HttpPaymentGateway {
    client: Client,
    api_url: String,
    key_id: String,
    key_secret: String,
}

/// Gateway order-creation response body.
#[derive(Debug, Deserialize)]
struct OrderResponse {
    id: String,
    amount: f64,
    currency: String,
}

impl HttpPaymentGateway {
    pub fn new(
        api_url: impl Into<String>,
        key_id: impl Into<String>,
        key_secret: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            key_id: key_id.into(),
            key_secret: key_secret.into(),
        }
    }

    /// Computes the expected HMAC-SHA256 signature for a captured payment.
    fn compute_signature(&self, order_id: &str, payment_id: &str) -> Vec<u8> {
        let payload = format!("{}|{}", order_id, payment_id);
        let mut mac = Hmac::<Sha256>::new_from_slice(self.key_secret.as_bytes())
            .expect("HMAC accepts any key");
        mac.update(payload.as_bytes());
        mac.finalize().into_bytes().to_vec()
    }
}

#[async_trait]
impl PaymentGateway for HttpPaymentGateway {
    async fn create_order(&self, amount: f64, currency: &str) -> Result<PaymentOrder, DomainError> {
        let response = self
            .client
            .post(format!("{}/orders", self.api_url))
            .basic_auth(&self.key_id, Some(&self.key_secret))
            .json(&json!({ "amount": amount, "currency": currency }))
            .send()
            .await
            .map_err(|e| DomainError::gateway(format!("order request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(DomainError::gateway(format!(
                "gateway returned {}",
                response.status()
            )));
        }

        let order: OrderResponse = response
            .json()
            .await
            .map_err(|e| DomainError::gateway(format!("invalid order response: {}", e)))?;

        tracing::info!(order_id = %order.id, amount, currency, "payment order created");
        Ok(PaymentOrder {
            order_id: order.id,
            amount: order.amount,
            currency: order.currency,
        })
    }

    fn verify_signature(&self, order_id: &str, payment_id: &str, signature: &str) -> bool {
        let Ok(provided) = hex::decode(signature) else {
            return false;
        };
        let expected = self.compute_signature(order_id, payment_id);
        constant_time_compare(&expected, &provided)
    }
}

/// Constant-time comparison, so timing never leaks the expected signature.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
