use anyhow::Result;

use super::load_config;
use crate::config::ResolveOptions;
use crate::gateway::HttpGateway;
use crate::health::probe;
use crate::status;
use crate::ui::{Style, status_chips};

/// Probes the backend once and prints the Health and Ready chips.
///
/// Returns the process exit code: `OK` when ready, `UNAVAILABLE` otherwise.
pub async fn run_status(options: &ResolveOptions) -> Result<exitcode::ExitCode> {
    let config = load_config(options)?;
    let gateway = HttpGateway::new(&config.base_url, config.request_timeout)?;

    status!("{}", Style::secondary(gateway.base_url()));
    let health = probe(&gateway).await;

    println!(
        "{}  {}",
        Style::header(config.language.t("apiStatus")),
        status_chips(&health, config.language)
    );

    if let Some(readiness) = health.readiness {
        status!(
            "  {}  {}",
            Style::chip("primary model", readiness.has_primary_model),
            Style::chip("search provider", readiness.has_search_provider),
        );
    }

    Ok(if health.is_ready() {
        exitcode::OK
    } else {
        exitcode::UNAVAILABLE
    })
}
