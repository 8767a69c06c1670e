//! Relay identifiers and request payload shape.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::service::ContactSubmission;

/// Relay endpoint that accepts the payload built by [`ContactRelayConfig::request_payload`].
pub const CONTACT_RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
/// Fallback used when `EMAILJS_SERVICE_ID` is unset at build time.
pub const PLACEHOLDER_SERVICE_ID: &str = "YOUR_SERVICE_ID";
/// Fallback used when `EMAILJS_TEMPLATE_ID` is unset at build time.
pub const PLACEHOLDER_TEMPLATE_ID: &str = "YOUR_TEMPLATE_ID";
/// Fallback used when `EMAILJS_PUBLIC_KEY` is unset at build time.
pub const PLACEHOLDER_PUBLIC_KEY: &str = "YOUR_PUBLIC_KEY";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Opaque identifiers the email relay needs to route a contact message.
pub struct ContactRelayConfig {
    /// Relay service id.
    pub service_id: String,
    /// Relay template id.
    pub template_id: String,
    /// Relay public key (sent as `user_id`).
    pub public_key: String,
}

impl Default for ContactRelayConfig {
    fn default() -> Self {
        Self {
            service_id: PLACEHOLDER_SERVICE_ID.to_string(),
            template_id: PLACEHOLDER_TEMPLATE_ID.to_string(),
            public_key: PLACEHOLDER_PUBLIC_KEY.to_string(),
        }
    }
}

impl ContactRelayConfig {
    /// Reads the identifiers baked in from the build environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| {
            match name {
                "EMAILJS_SERVICE_ID" => option_env!("EMAILJS_SERVICE_ID"),
                "EMAILJS_TEMPLATE_ID" => option_env!("EMAILJS_TEMPLATE_ID"),
                "EMAILJS_PUBLIC_KEY" => option_env!("EMAILJS_PUBLIC_KEY"),
                _ => None,
            }
            .map(str::to_string)
        })
    }

    /// Resolves each identifier through `lookup`, keeping the placeholder for unset or blank values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let resolve = |name: &str, placeholder: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| placeholder.to_string())
        };
        Self {
            service_id: resolve("EMAILJS_SERVICE_ID", PLACEHOLDER_SERVICE_ID),
            template_id: resolve("EMAILJS_TEMPLATE_ID", PLACEHOLDER_TEMPLATE_ID),
            public_key: resolve("EMAILJS_PUBLIC_KEY", PLACEHOLDER_PUBLIC_KEY),
        }
    }

    /// Returns `false` while any identifier is still a placeholder.
    pub fn is_configured(&self) -> bool {
        self.service_id != PLACEHOLDER_SERVICE_ID
            && self.template_id != PLACEHOLDER_TEMPLATE_ID
            && self.public_key != PLACEHOLDER_PUBLIC_KEY
    }

    /// Builds the JSON body posted to [`CONTACT_RELAY_ENDPOINT`].
    pub fn request_payload(&self, submission: &ContactSubmission) -> Value {
        json!({
            "service_id": self.service_id,
            "template_id": self.template_id,
            "user_id": self.public_key,
            "template_params": {
                "from_name": submission.name,
                "from_email": submission.email,
                "message": submission.message,
            },
        })
    }
}
