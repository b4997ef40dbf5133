use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::i18n::Language;
use crate::output;

const TICKS: &[&str] = &["◜", "◠", "◝", "◞", "◡", "◟", "·"];

/// Indicator shown on stderr while an exchange is in flight.
///
/// Hidden in quiet mode. Cleared on [`stop`](Self::stop) or drop.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    /// Starts a spinner labelled with the localized "thinking" string.
    pub fn pending(language: Language) -> Self {
        if output::is_quiet() {
            return Self {
                bar: ProgressBar::hidden(),
            };
        }

        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg} {elapsed}") {
            bar.set_style(style.tick_strings(TICKS));
        }
        bar.set_message(language.t("thinking"));
        bar.enable_steady_tick(Duration::from_millis(120));

        Self { bar }
    }

    /// Consumes the spinner; dropping it clears the line.
    pub fn stop(self) {}
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_spinner_uses_localized_label() {
        let spinner = Spinner::pending(Language::Hi);

        assert_eq!(spinner.bar.message(), "सोच रहे हैं...");
        spinner.stop();
    }

    #[test]
    fn test_stop_clears_the_bar() {
        let spinner = Spinner::pending(Language::En);
        let bar = spinner.bar.clone();
        assert!(!bar.is_finished());

        spinner.stop();

        assert!(bar.is_finished());
    }
}
