//! Email relay client.
//!
//! Implements the core's relay contract against the EmailJS REST endpoint.
//! Activation is lazy and idempotent: the overlay requests it the first
//! time it opens, and a repeat activation is a no-op. The core never sees
//! this type, only the payload shape and the outcome.

use std::sync::OnceLock;
use std::time::Duration;

use folio_core::{EmailPayload, RelayCredentials, RelayError, RelayResult};

const RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
const SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Lazily-activated client for the email relay service.
pub struct EmailRelay {
    credentials: RelayCredentials,
    client: OnceLock<reqwest::Client>,
}

impl EmailRelay {
    pub fn new(credentials: RelayCredentials) -> Self {
        Self {
            credentials,
            client: OnceLock::new(),
        }
    }

    /// Activate the relay. Idempotent; a repeat call is a no-op.
    pub fn ensure_active(&self) -> RelayResult<()> {
        if self.client.get().is_some() {
            return Ok(());
        }
        if !self.credentials.is_complete() {
            return Err(RelayError::NotConfigured);
        }
        let client = reqwest::Client::builder()
            .timeout(SEND_TIMEOUT)
            .build()
            .map_err(|err| RelayError::Activation(err.to_string()))?;
        let _ = self.client.set(client);
        tracing::info!("email relay activated");
        Ok(())
    }

    /// Send the payload through the relay.
    pub async fn send(&self, payload: &EmailPayload) -> RelayResult<()> {
        self.ensure_active()?;
        let client = self.client.get().ok_or(RelayError::NotConfigured)?;

        let body = serde_json::json!({
            "service_id": self.credentials.service_id,
            "template_id": self.credentials.template_id,
            "user_id": self.credentials.public_key,
            "template_params": payload,
        });

        let response = client
            .post(RELAY_ENDPOINT)
            .json(&body)
            .send()
            .await
            .map_err(|err| RelayError::Send(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::Rejected(status.as_u16()));
        }
        tracing::info!("contact message relayed");
        Ok(())
    }
}
