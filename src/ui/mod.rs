use anyhow::Result;
use inquire::InquireError;

mod spinner;
mod style;

pub use spinner::Spinner;
pub use style::Style;

use crate::gateway::HealthStatus;
use crate::i18n::Language;

/// Check if the inquire error is a user cancellation/interruption.
pub const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Runs a function that uses interactive prompts, treating cancellation as success.
///
/// If the user cancels the prompt (Ctrl+C or Escape), prints a newline to
/// clean up the terminal and returns `Ok(())`.
pub fn handle_prompt_cancellation<F>(f: F) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    match f() {
        Ok(()) => Ok(()),
        Err(e)
            if e.downcast_ref::<InquireError>()
                .is_some_and(is_prompt_cancelled) =>
        {
            println!();
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Renders the Health and Ready chips in `language`.
pub fn status_chips(status: &HealthStatus, language: Language) -> String {
    format!(
        "{}  {}",
        Style::chip(language.t("health"), status.reachable),
        Style::chip(language.t("ready"), status.is_ready())
    )
}
