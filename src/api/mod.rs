// src/api/mod.rs
//! Typed client for the marketplace REST backend.
//!
//! Everything this application persists lives behind the remote API; this
//! module is the only place requests are built and responses decoded.
//! Responses are deserialized into exact DTOs so malformed server data fails
//! fast with a typed error instead of leaking into the UI.

pub mod client;
pub mod error;
pub mod types;

pub use client::ApiClient;
pub use error::ApiError;
