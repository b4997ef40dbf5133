//! Typed HTTP client for the assistant backend.

mod client;
mod error;
mod types;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod testing;

pub use client::{BackendGateway, HttpGateway};
pub use error::GatewayError;
pub use types::{ChatExchangeResult, ChatResource, HealthStatus, Intent, Readiness};
