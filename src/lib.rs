//! # counsel - Terminal chat client for the counselor assistant
//!
//! `counsel` talks to the counselor assistant API: it sends chat turns, asks
//! for curated resources, switches between English and Hindi, and keeps an eye
//! on whether the backend is healthy and ready.
//!
//! ## Layers
//!
//! - [`session`] owns the conversation and reconciles optimistic updates
//!   with exchange results
//! - [`gateway`] is the typed HTTP client for the four backend endpoints
//! - [`health`] polls health and readiness in the background
//! - [`i18n`] resolves UI strings with English fallback
//! - [`chat`] and [`cli`] are the terminal front end
//!
//! ## Quick Start
//!
//! ```bash
//! # Chat against a local backend
//! counsel
//!
//! # Chat in Hindi against another backend
//! counsel --lang hi --base-url https://counsel.example.org
//!
//! # Check the backend once
//! counsel status
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/counsel/config.toml`:
//!
//! ```toml
//! [counsel]
//! base_url = "http://127.0.0.1:8000"
//! language = "en"
//! health_interval_secs = 30
//! request_timeout_secs = 60
//! ```
//!
//! `COUNSEL_API_BASE` overrides `base_url`; `--base-url` overrides both.

/// Interactive chat mode.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// HTTP client for the assistant backend.
pub mod gateway;

/// Background health and readiness polling.
pub mod health;

/// UI string tables and display languages.
pub mod i18n;

/// Global output configuration (quiet mode, colors, logging).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Conversation state and its controller.
pub mod session;

/// Terminal UI components (spinner, colors, status chips).
pub mod ui;
