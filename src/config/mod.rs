//! Configuration file management and resolution.

mod manager;

pub use manager::{
    API_BASE_ENV, ConfigFile, ConfigManager, CounselConfig, DEFAULT_BASE_URL,
    DEFAULT_HEALTH_INTERVAL_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, ResolveOptions, ResolvedConfig,
    resolve_config,
};
