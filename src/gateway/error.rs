use thiserror::Error;

/// Failure of a chat exchange.
///
/// The other gateway operations never return errors; they collapse failures
/// into `false` or `None`.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request never produced a response (unreachable, timeout, DNS).
    #[error("failed to reach {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status.
    #[error("backend returned {status}: {body}")]
    Backend { status: u16, body: String },

    /// The backend answered 2xx with a body that is not a chat result.
    #[error("invalid response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl GatewayError {
    /// HTTP status reported by the backend, if it answered at all.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Backend { status, .. } => Some(*status),
            Self::Network { .. } | Self::Decode { .. } => None,
        }
    }

    /// Whether the failure happened before the backend produced a result.
    pub const fn is_transport(&self) -> bool {
        !matches!(self, Self::Backend { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_display_carries_status_and_body() {
        let err = GatewayError::Backend {
            status: 400,
            body: r#"{"detail":"Message cannot be empty."}"#.to_string(),
        };

        assert_eq!(err.status(), Some(400));
        assert!(!err.is_transport());
        assert!(err.to_string().contains("400"));
        assert!(err.to_string().contains("Message cannot be empty."));
    }

    #[test]
    fn test_decode_error_is_transport_class() {
        let Err(source) = serde_json::from_str::<serde_json::Value>("not json") else {
            panic!("expected a parse error");
        };
        let err = GatewayError::Decode {
            url: "http://127.0.0.1:8000/chat".to_string(),
            source,
        };

        assert_eq!(err.status(), None);
        assert!(err.is_transport());
        assert!(err.to_string().contains("/chat"));
    }
}
