//! Typed host-service contracts shared by the device shell and its browser adapters.
//!
//! The shell only talks to the outside world through these traits. Concrete browser adapters live
//! in `platform_host_web`; tests use the in-memory adapters defined here.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod contact;

pub use contact::config::{
    ContactRelayConfig, CONTACT_RELAY_ENDPOINT, PLACEHOLDER_PUBLIC_KEY, PLACEHOLDER_SERVICE_ID,
    PLACEHOLDER_TEMPLATE_ID,
};
pub use contact::service::{
    ContactRelayFuture, ContactRelayService, ContactSubmission, MemoryContactRelayService,
    NoopContactRelayService,
};
