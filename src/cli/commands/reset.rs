use anyhow::Result;

use super::load_config;
use crate::config::ResolveOptions;
use crate::gateway::{BackendGateway, HttpGateway};
use crate::notice;
use crate::ui::Style;

/// Asks the backend to forget the conversation of `user_id`.
///
/// Returns the process exit code: `OK` on success, `UNAVAILABLE` otherwise.
pub async fn run_reset(options: &ResolveOptions, user_id: &str) -> Result<exitcode::ExitCode> {
    let config = load_config(options)?;
    let gateway = HttpGateway::new(&config.base_url, config.request_timeout)?;

    if gateway.reset_session(user_id).await {
        println!(
            "{} {}",
            Style::success("✓"),
            config.language.t("resetDone")
        );
        Ok(exitcode::OK)
    } else {
        notice!(
            "{} {}",
            Style::error("Error:"),
            config.language.t("resetFailed")
        );
        Ok(exitcode::UNAVAILABLE)
    }
}
