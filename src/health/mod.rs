//! Background health and readiness polling.

mod monitor;

pub use monitor::{DEFAULT_INTERVAL, HealthMonitor, probe};
