use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::config::ResolvedConfig;
use crate::gateway::{BackendGateway, HttpGateway};
use crate::health::HealthMonitor;
use crate::i18n::{DISPLAY_LANGUAGES, Language};
use crate::session::{
    FixedIdProvider, SendOutcome, Session, SessionController, SessionSnapshot, UserIdProvider,
    UuidProvider,
};
use crate::ui::{Spinner, Style, is_prompt_cancelled, status_chips};

/// Configuration for a chat session.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Base URL of the assistant backend.
    pub base_url: String,
    /// Initial session language.
    pub language: Language,
    pub health_interval: Duration,
    pub request_timeout: Duration,
    /// Fixed user id; a random one is generated when absent.
    pub user_id: Option<String>,
}

impl ChatConfig {
    pub fn new(resolved: ResolvedConfig, user_id: Option<String>) -> Self {
        Self {
            base_url: resolved.base_url,
            language: resolved.language,
            health_interval: resolved.health_interval,
            request_timeout: resolved.request_timeout,
            user_id,
        }
    }

    fn id_provider(&self) -> Box<dyn UserIdProvider> {
        match &self.user_id {
            Some(id) => Box::new(FixedIdProvider::new(id.clone())),
            None => Box::new(UuidProvider),
        }
    }
}

/// An interactive chat session.
///
/// Wires the REPL to a [`SessionController`] and keeps a [`HealthMonitor`]
/// polling for as long as the REPL runs. Output is rendered from the
/// controller's published snapshots.
pub struct ChatSession {
    config: ChatConfig,
    controller: SessionController,
    snapshots: watch::Receiver<SessionSnapshot>,
    monitor: HealthMonitor,
}

impl ChatSession {
    pub fn new(config: ChatConfig) -> Result<Self> {
        let gateway: Arc<dyn BackendGateway> =
            Arc::new(HttpGateway::new(&config.base_url, config.request_timeout)?);
        Ok(Self::with_gateway(config, gateway))
    }

    pub fn with_gateway(config: ChatConfig, gateway: Arc<dyn BackendGateway>) -> Self {
        let controller = SessionController::new(
            Session::new(config.language),
            Arc::clone(&gateway),
            config.id_provider(),
        );
        let snapshots = controller.subscribe();
        let monitor = HealthMonitor::new(gateway, config.health_interval);
        Self {
            config,
            controller,
            snapshots,
            monitor,
        }
    }

    fn language(&self) -> Language {
        self.snapshots.borrow().language
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header(&self.config);
        self.monitor.start();

        let result = self.repl().await;

        self.monitor.stop();
        ui::print_goodbye(self.language());
        result
    }

    async fn repl(&mut self) -> Result<()> {
        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let placeholder = self.language().t("placeholder");
            let input = Text::new("")
                .with_render_config(render_config)
                .with_placeholder(&placeholder)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("/resources for reading material, /help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd).await {
                            break;
                        }
                    }
                    Input::Text(text) => {
                        self.send(&text).await;
                    }
                },
                Err(e) if is_prompt_cancelled(&e) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        Ok(())
    }

    async fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::About => ui::print_about(self.language()),
            SlashCommand::Config => {
                ui::print_config(
                    &self.config,
                    self.language(),
                    self.controller.session().user_id(),
                );
            }
            SlashCommand::Help => ui::print_help(),
            SlashCommand::History => {
                ui::print_history(&self.snapshots.borrow().messages);
            }
            SlashCommand::Lang(tag) => self.set_language(tag.as_deref()),
            SlashCommand::Quit => return false,
            SlashCommand::Reset => self.reset().await,
            SlashCommand::Resources => self.request_resources().await,
            SlashCommand::Status => self.print_status().await,
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
            }
        }
        true
    }

    async fn send(&mut self, text: &str) {
        let spinner = Spinner::pending(self.language());
        let outcome = self.controller.send_message(text).await;
        spinner.stop();
        self.print_outcome(outcome, false);
    }

    async fn request_resources(&mut self) {
        let spinner = Spinner::pending(self.language());
        let outcome = self.controller.request_resources().await;
        spinner.stop();
        self.print_outcome(outcome, true);
    }

    fn print_outcome(&self, outcome: SendOutcome, show_empty_resources: bool) {
        let language = self.language();
        match outcome {
            SendOutcome::Ignored => {}
            SendOutcome::Replied(result) => {
                ui::print_reply(&result.reply);
                let snapshot = self.snapshots.borrow();
                ui::print_resources(&snapshot.resources, language, show_empty_resources);
                ui::print_suggestions(&snapshot.suggestions, language);
            }
            SendOutcome::Failed(notice) => ui::print_notice(&notice),
        }
    }

    fn set_language(&mut self, tag: Option<&str>) {
        let Some(tag) = tag else {
            println!(
                "{} {}",
                Style::label(self.language().t("selectLanguage")),
                Style::value(self.language())
            );
            println!("Usage: /lang <code>");
            let codes: Vec<&str> = DISPLAY_LANGUAGES.iter().map(|(code, _)| *code).collect();
            println!("Codes: {}", codes.join(", "));
            println!();
            return;
        };

        let language = self.controller.set_language(tag);
        println!(
            "{} {} {}\n",
            Style::success("✓"),
            language.t("languageChanged"),
            Style::value(language)
        );
    }

    async fn reset(&mut self) {
        let language = self.language();
        if self.controller.reset_remote().await {
            println!("{} {}\n", Style::success("✓"), language.t("resetDone"));
        } else {
            ui::print_error(&language.t("resetFailed"));
        }
    }

    /// Probes right away instead of waiting for the next polling cycle.
    async fn print_status(&self) {
        let language = self.language();
        let status = self.monitor.probe_once().await;
        println!(
            "{}  {}",
            Style::header(language.t("apiStatus")),
            status_chips(&status, language)
        );
        println!();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::gateway::ChatExchangeResult;
    use crate::gateway::testing::MockGateway;

    fn config(user_id: Option<&str>) -> ChatConfig {
        ChatConfig {
            base_url: "http://127.0.0.1:8000".to_string(),
            language: Language::Hi,
            health_interval: Duration::from_secs(30),
            request_timeout: Duration::from_secs(60),
            user_id: user_id.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_fixed_user_id_is_used_for_exchanges() {
        let gateway = Arc::new(MockGateway::ready());
        let mut chat = ChatSession::with_gateway(
            config(Some("cli-user")),
            Arc::clone(&gateway) as Arc<dyn BackendGateway>,
        );

        chat.send("hello").await;

        let calls = gateway.exchange_calls();
        assert_eq!(calls[0].user_id, "cli-user");
        assert_eq!(calls[0].language, Language::Hi);
    }

    #[tokio::test]
    async fn test_commands_keep_repl_running_until_quit() {
        let gateway = Arc::new(MockGateway::ready());
        let mut chat = ChatSession::with_gateway(
            config(None),
            Arc::clone(&gateway) as Arc<dyn BackendGateway>,
        );

        assert!(chat.handle_command(SlashCommand::Lang(Some("en".to_string()))).await);
        assert_eq!(chat.language(), Language::En);
        assert!(chat.handle_command(SlashCommand::Resources).await);
        assert!(chat.handle_command(SlashCommand::Reset).await);
        assert!(chat.handle_command(SlashCommand::About).await);
        assert!(!chat.handle_command(SlashCommand::Quit).await);

        let calls = gateway.exchange_calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].message.ends_with("mental wellbeing tips"));
        assert_eq!(gateway.resets.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_about_makes_no_backend_calls() {
        let gateway = Arc::new(MockGateway::ready());
        let mut chat = ChatSession::with_gateway(
            config(None),
            Arc::clone(&gateway) as Arc<dyn BackendGateway>,
        );

        assert!(chat.handle_command(SlashCommand::About).await);

        assert!(gateway.exchange_calls().is_empty());
        assert_eq!(gateway.health_call_count(), 0);
        assert!(chat.snapshots.borrow().messages.is_empty());
    }

    #[tokio::test]
    async fn test_status_command_probes_immediately() {
        let gateway = Arc::new(MockGateway::ready());
        let mut chat = ChatSession::with_gateway(
            config(None),
            Arc::clone(&gateway) as Arc<dyn BackendGateway>,
        );
        assert!(!chat.monitor.status().is_ready());

        assert!(chat.handle_command(SlashCommand::Status).await);

        assert_eq!(gateway.health_call_count(), 1);
        assert!(chat.monitor.status().is_ready());
    }

    #[tokio::test]
    async fn test_rendering_follows_published_snapshot() {
        let gateway = Arc::new(MockGateway::ready());
        gateway.push_reply(Ok(ChatExchangeResult {
            suggestions: Some(vec!["Take a short walk".to_string()]),
            ..ChatExchangeResult::reply("Hi there")
        }));
        let mut chat = ChatSession::with_gateway(
            config(None),
            Arc::clone(&gateway) as Arc<dyn BackendGateway>,
        );

        chat.send("hello").await;

        let snapshot = chat.snapshots.borrow().clone();
        assert_eq!(snapshot.messages.len(), 2);
        assert_eq!(snapshot.suggestions, vec!["Take a short walk".to_string()]);
        assert_eq!(snapshot.language, Language::Hi);
    }
}
