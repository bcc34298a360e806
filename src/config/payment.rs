//! Payment gateway configuration.

use serde::Deserialize;

use super::error::ValidationError;

/// Payment gateway credentials and endpoint.
///
/// Credentials are optional for local development; with them unset the
/// payment endpoints reject every request, which the server logs a warning
/// about at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    /// Gateway API root.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Gateway key id (basic-auth user).
    #[serde(default)]
    pub key_id: String,

    /// Shared secret: basic-auth password and HMAC signing key.
    #[serde(default)]
    pub key_secret: String,
}

impl PaymentConfig {
    pub fn is_configured(&self) -> bool {
        !self.key_id.is_empty() && !self.key_secret.is_empty()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.api_url.is_empty() {
            return Err(ValidationError::invalid("payment.api_url", "must be set"));
        }
        // One credential without the other is always a misconfiguration.
        if self.key_id.is_empty() != self.key_secret.is_empty() {
            return Err(ValidationError::invalid(
                "payment.key_id",
                "key_id and key_secret must be set together",
            ));
        }
        Ok(())
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            key_id: String::new(),
            key_secret: String::new(),
        }
    }
}

fn default_api_url() -> String {
    "https://api.payment-gateway.example/v1".to_string()
}
