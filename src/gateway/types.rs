use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// A resource returned alongside a reply. Only its position identifies it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatResource {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
}

/// How the backend classified the user's message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Chat,
    Resources,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Decoded body of a successful `POST /chat`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatExchangeResult {
    pub reply: String,
    #[serde(default)]
    pub intent: Intent,
    #[serde(default)]
    pub search_query: Option<String>,
    #[serde(default)]
    pub resources: Option<Vec<ChatResource>>,
    #[serde(default)]
    pub suggestions: Option<Vec<String>>,
}

impl ChatExchangeResult {
    /// A plain chat reply with no resources or suggestions.
    pub fn reply(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            intent: Intent::Chat,
            ..Self::default()
        }
    }
}

/// Upstream dependencies the backend reports on `GET /ready`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Readiness {
    #[serde(rename = "has_gemini")]
    pub has_primary_model: bool,
    #[serde(rename = "has_tavily")]
    pub has_search_provider: bool,
}

impl Readiness {
    pub const fn all_available(self) -> bool {
        self.has_primary_model && self.has_search_provider
    }
}

/// Combined result of one health and readiness probe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HealthStatus {
    pub reachable: bool,
    pub readiness: Option<Readiness>,
}

impl HealthStatus {
    /// Reachable and every upstream dependency available.
    pub fn is_ready(&self) -> bool {
        self.reachable && self.readiness.is_some_and(Readiness::all_available)
    }
}

#[derive(Debug, Serialize)]
pub(super) struct ChatRequest<'a> {
    pub user_id: &'a str,
    pub message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
}

#[derive(Debug, Serialize)]
pub(super) struct ResetRequest<'a> {
    pub user_id: &'a str,
}
