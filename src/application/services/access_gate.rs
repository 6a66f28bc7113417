//! Shared-secret check for the push endpoint.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::AppError;
use serde_json::json;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the shared secret on `POST /ingest`.
pub const SECRET_HEADER: &str = "x-ingest-secret";

/// Gate admitting push requests that present the configured shared secret.
///
/// With no secret (or an empty one) configured the gate is open and every
/// request passes. Comparison goes through HMAC-SHA256 verification so it
/// runs in constant time regardless of where the presented value diverges.
#[derive(Clone)]
pub struct AccessGate {
    secret: Option<String>,
}

impl AccessGate {
    /// Creates a gate. `None` or an empty secret disables it.
    pub fn new(secret: Option<String>) -> Self {
        Self {
            secret: secret.filter(|s| !s.is_empty()),
        }
    }

    /// Returns whether a secret is required.
    pub fn is_enabled(&self) -> bool {
        self.secret.is_some()
    }

    /// Checks the secret presented by a caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the gate is enabled and the
    /// presented value is missing or does not match.
    pub fn check(&self, presented: Option<&str>) -> Result<(), AppError> {
        let Some(secret) = &self.secret else {
            return Ok(());
        };

        let Some(presented) = presented else {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": format!("{SECRET_HEADER} header is missing") }),
            ));
        };

        if Self::matches(secret, presented) {
            Ok(())
        } else {
            Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Invalid shared secret" }),
            ))
        }
    }

    fn matches(secret: &str, presented: &str) -> bool {
        let expected = Self::tag(secret, secret);
        let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
            return false;
        };
        mac.update(presented.as_bytes());
        mac.verify_slice(&expected).is_ok()
    }

    fn tag(key: &str, message: &str) -> Vec<u8> {
        match HmacSha256::new_from_slice(key.as_bytes()) {
            Ok(mut mac) => {
                mac.update(message.as_bytes());
                mac.finalize().into_bytes().to_vec()
            }
            Err(_) => Vec::new(),
        }
    }
}

impl std::fmt::Debug for AccessGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessGate")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
