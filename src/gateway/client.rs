use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::error::GatewayError;
use super::types::{ChatExchangeResult, ChatRequest, Readiness, ResetRequest};
use crate::i18n::Language;

/// Request/response contract with the assistant backend.
///
/// Each call is a single exchange with no retry. Only [`exchange`] reports
/// failures; the probes and reset are advisory and collapse every failure
/// into a sentinel.
///
/// [`exchange`]: BackendGateway::exchange
#[async_trait]
pub trait BackendGateway: Send + Sync {
    /// `true` only if the liveness probe answered 2xx.
    async fn check_health(&self) -> bool;

    /// Upstream dependency flags, or `None` on any failure.
    async fn check_readiness(&self) -> Option<Readiness>;

    /// Sends one chat turn.
    async fn exchange(
        &self,
        user_id: &str,
        message: &str,
        language: Language,
    ) -> Result<ChatExchangeResult, GatewayError>;

    /// Clears server-side memory for `user_id`; `false` on any failure.
    async fn reset_session(&self, user_id: &str) -> bool;
}

/// [`BackendGateway`] over HTTP.
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl BackendGateway for HttpGateway {
    async fn check_health(&self) -> bool {
        let url = self.url("/");
        match self.client.get(&url).send().await {
            Ok(response) => {
                tracing::debug!(%url, status = %response.status(), "health probe");
                response.status().is_success()
            }
            Err(e) => {
                tracing::debug!(%url, error = %e, "health probe failed");
                false
            }
        }
    }

    async fn check_readiness(&self) -> Option<Readiness> {
        let url = self.url("/ready");
        let response = match self.client.get(&url).send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::debug!(%url, error = %e, "readiness probe failed");
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::debug!(%url, status = %response.status(), "backend not ready");
            return None;
        }

        match response.json::<Readiness>().await {
            Ok(readiness) => Some(readiness),
            Err(e) => {
                tracing::warn!(%url, error = %e, "unreadable readiness body");
                None
            }
        }
    }

    async fn exchange(
        &self,
        user_id: &str,
        message: &str,
        language: Language,
    ) -> Result<ChatExchangeResult, GatewayError> {
        let url = self.url("/chat");
        let request = ChatRequest {
            user_id,
            message: message.trim(),
            language: Some(language),
        };

        tracing::debug!(%url, %user_id, %language, "sending chat exchange");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|source| GatewayError::Network {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Backend {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| GatewayError::Network {
                url: url.clone(),
                source,
            })?;

        serde_json::from_str(&body).map_err(|source| GatewayError::Decode { url, source })
    }

    async fn reset_session(&self, user_id: &str) -> bool {
        let url = self.url("/reset");
        match self
            .client
            .post(&url)
            .json(&ResetRequest { user_id })
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                tracing::warn!(%url, status = %response.status(), "reset rejected");
                false
            }
            Err(e) => {
                tracing::warn!(%url, error = %e, "reset failed");
                false
            }
        }
    }
}
