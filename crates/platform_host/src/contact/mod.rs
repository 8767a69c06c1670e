//! Contact-form relay contracts.

pub mod config;
pub mod service;
