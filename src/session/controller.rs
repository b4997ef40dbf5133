use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;

use super::id::UserIdProvider;
use super::state::{Message, Session, SessionSnapshot};
use crate::gateway::{BackendGateway, ChatExchangeResult, GatewayError};
use crate::i18n::Language;

/// Topic used by [`SessionController::request_resources`] before the user has said anything.
pub const FALLBACK_TOPIC: &str = "mental wellbeing tips";

/// Builds the prompt that asks the assistant for resources on `topic`.
pub fn resource_prompt(topic: Option<&str>) -> String {
    let topic = topic
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(FALLBACK_TOPIC);
    format!("Please share 3–5 reliable resources about: {topic}")
}

/// Transient, non-blocking notification for a failed exchange.
#[derive(Debug)]
pub struct Notice {
    pub message: String,
    pub error: GatewayError,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Result of [`SessionController::send_message`].
#[derive(Debug)]
pub enum SendOutcome {
    /// Empty text, or another exchange was already in flight. Nothing changed.
    Ignored,
    Replied(ChatExchangeResult),
    /// The user message stays in the transcript; no reply was added.
    Failed(Notice),
}

/// An exchange that has been started but not yet reconciled.
///
/// Produced by [`SessionController::begin_send`]; hand it back to
/// [`SessionController::finish_send`] together with the gateway result.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct PendingTurn {
    user_id: String,
    message: String,
    language: Language,
}

impl PendingTurn {
    pub async fn execute(
        &self,
        gateway: &dyn BackendGateway,
    ) -> Result<ChatExchangeResult, GatewayError> {
        gateway
            .exchange(&self.user_id, &self.message, self.language)
            .await
    }
}

/// Owns a [`Session`] and drives exchanges against a [`BackendGateway`].
///
/// At most one exchange is in flight at a time; sends made while one is
/// pending are dropped. Every state change is published to the receivers
/// handed out by [`subscribe`](Self::subscribe).
pub struct SessionController {
    session: Session,
    gateway: Arc<dyn BackendGateway>,
    ids: Box<dyn UserIdProvider>,
    snapshots: watch::Sender<SessionSnapshot>,
}

impl SessionController {
    pub fn new(
        session: Session,
        gateway: Arc<dyn BackendGateway>,
        ids: Box<dyn UserIdProvider>,
    ) -> Self {
        let (snapshots, _) = watch::channel(session.snapshot());
        Self {
            session,
            gateway,
            ids,
            snapshots,
        }
    }

    pub const fn session(&self) -> &Session {
        &self.session
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshots.subscribe()
    }

    fn publish(&self) {
        // Stored even when nobody is listening any more.
        self.snapshots.send_replace(self.session.snapshot());
    }

    /// Sends `text` as one exchange and reconciles the result.
    pub async fn send_message(&mut self, text: &str) -> SendOutcome {
        let Some(turn) = self.begin_send(text) else {
            return SendOutcome::Ignored;
        };
        let result = turn.execute(self.gateway.as_ref()).await;
        self.finish_send(turn, result)
    }

    /// Appends the user message and marks the session pending.
    ///
    /// Returns `None`, changing nothing, if `text` is blank or an exchange is
    /// already pending.
    pub fn begin_send(&mut self, text: &str) -> Option<PendingTurn> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        if self.session.is_pending() {
            tracing::debug!("exchange already in flight, dropping send");
            return None;
        }

        let user_id = self.session.user_id_or_init(self.ids.as_ref());
        self.session.push(Message::user(trimmed));
        self.session.set_pending(true);
        self.publish();

        Some(PendingTurn {
            user_id,
            message: trimmed.to_string(),
            language: self.session.language(),
        })
    }

    /// Reconciles the outcome of `turn` and clears the pending flag.
    pub fn finish_send(
        &mut self,
        turn: PendingTurn,
        result: Result<ChatExchangeResult, GatewayError>,
    ) -> SendOutcome {
        let outcome = match result {
            Ok(reply) => {
                self.session.push(Message::assistant(reply.reply.clone()));
                self.session
                    .replace_resources(reply.resources.clone().unwrap_or_default());
                self.session
                    .replace_suggestions(reply.suggestions.clone().unwrap_or_default());
                SendOutcome::Replied(reply)
            }
            Err(error) => {
                tracing::warn!(user_id = %turn.user_id, %error, "chat exchange failed");
                SendOutcome::Failed(Notice {
                    message: self.session.language().t("networkError"),
                    error,
                })
            }
        };

        self.session.set_pending(false);
        self.publish();
        outcome
    }

    /// Asks for resources on the topic of the latest user message.
    pub async fn request_resources(&mut self) -> SendOutcome {
        let prompt = resource_prompt(self.session.last_user_text());
        self.send_message(&prompt).await
    }

    /// Switches the language used for later exchanges. Unknown tags become English.
    pub fn set_language(&mut self, tag: &str) -> Language {
        let language = Language::coerce(tag);
        self.session.set_language(language);
        self.publish();
        language
    }

    /// Asks the backend to forget this session's conversation. Local state is kept.
    pub async fn reset_remote(&mut self) -> bool {
        let user_id = self.session.user_id_or_init(self.ids.as_ref());
        self.gateway.reset_session(&user_id).await
    }
}
