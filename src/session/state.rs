use serde::{Deserialize, Serialize};

use super::id::UserIdProvider;
use crate::gateway::ChatResource;
use crate::i18n::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One line of the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}

/// Conversation state of one client instance.
///
/// Messages are append-only; resources and suggestions are replaced wholesale
/// by each successful exchange.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user_id: Option<String>,
    language: Language,
    messages: Vec<Message>,
    resources: Vec<ChatResource>,
    suggestions: Vec<String>,
    pending: bool,
}

impl Session {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    /// The stable user id, if one has been assigned yet.
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Returns the user id, generating it on first use. Never changes afterwards.
    pub(crate) fn user_id_or_init(&mut self, ids: &dyn UserIdProvider) -> String {
        self.user_id.get_or_insert_with(|| ids.generate()).clone()
    }

    pub const fn language(&self) -> Language {
        self.language
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn resources(&self) -> &[ChatResource] {
        &self.resources
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    /// Text of the most recent user message.
    pub fn last_user_text(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.text.as_str())
    }

    pub(crate) const fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub(crate) const fn set_pending(&mut self, pending: bool) {
        self.pending = pending;
    }

    pub(crate) fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub(crate) fn replace_resources(&mut self, resources: Vec<ChatResource>) {
        self.resources = resources;
    }

    pub(crate) fn replace_suggestions(&mut self, suggestions: Vec<String>) {
        self.suggestions = suggestions;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            language: self.language,
            messages: self.messages.clone(),
            resources: self.resources.clone(),
            suggestions: self.suggestions.clone(),
            pending: self.pending,
        }
    }
}

/// Copy of the session published to observers after every change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSnapshot {
    pub language: Language,
    pub messages: Vec<Message>,
    pub resources: Vec<ChatResource>,
    pub suggestions: Vec<String>,
    pub pending: bool,
}
