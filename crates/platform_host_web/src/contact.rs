//! Contact relay adapter for the browser.

use platform_host::{
    ContactRelayConfig, ContactRelayFuture, ContactRelayService, ContactSubmission,
    CONTACT_RELAY_ENDPOINT,
};

use crate::bridge;

#[derive(Debug, Clone, Default)]
/// Posts contact submissions to the email relay with `fetch`.
pub struct WebContactRelayService {
    config: ContactRelayConfig,
}

impl WebContactRelayService {
    /// Creates an adapter bound to the given relay identifiers.
    pub fn new(config: ContactRelayConfig) -> Self {
        Self { config }
    }

    /// Relay identifiers in use.
    pub fn config(&self) -> &ContactRelayConfig {
        &self.config
    }
}

impl ContactRelayService for WebContactRelayService {
    fn submit<'a>(
        &'a self,
        submission: &'a ContactSubmission,
    ) -> ContactRelayFuture<'a, Result<(), String>> {
        Box::pin(async move {
            let body = serde_json::to_string(&self.config.request_payload(submission))
                .map_err(|err| format!("encode contact payload failed: {err}"))?;
            bridge::post_json(CONTACT_RELAY_ENDPOINT, &body).await
        })
    }
}
