//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! The JS interop lives in `bridge/`, split into a `wasm32` implementation and a non-wasm
//! fallback so the crate still builds and tests natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Concrete adapter factories used by the runtime host context.
pub mod adapters;
mod bridge;
pub mod contact;

pub use adapters::contact_relay_service;
pub use contact::WebContactRelayService;
