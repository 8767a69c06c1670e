use platform_host::ContactRelayConfig;

use crate::WebContactRelayService;

/// Returns the browser contact relay configured from the build environment.
pub fn contact_relay_service() -> WebContactRelayService {
    WebContactRelayService::new(ContactRelayConfig::from_env())
}
