//! Browser capability bridge for host adapters.
//!
//! Calls route to the `wasm32` interop or to a native fallback that reports the capability as
//! unavailable.

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

/// POSTs a JSON body and resolves once the response status is 2xx.
pub async fn post_json(url: &str, body: &str) -> Result<(), String> {
    imp::post_json(url, body).await
}
