/// Failure of a notification endpoint call.
///
/// Every variant belongs to the same policy class (transport or parse
/// failure): it is logged, recorded in diagnostics, and recovered from by the
/// next scheduled poll. Status codes are kept for diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotificationError {
    #[error("request to {endpoint} failed: {message}")]
    Transport { endpoint: String, message: String },
    #[error("request to {endpoint} returned status {status}")]
    Status { endpoint: String, status: u16 },
    #[error("response from {endpoint} could not be decoded: {message}")]
    Decode { endpoint: String, message: String },
}

impl NotificationError {
    pub fn transport(endpoint: &str, message: impl Into<String>) -> Self {
        Self::Transport {
            endpoint: endpoint.to_string(),
            message: message.into(),
        }
    }

    pub fn decode(endpoint: &str, message: impl Into<String>) -> Self {
        Self::Decode {
            endpoint: endpoint.to_string(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        match self {
            Self::Transport { endpoint, .. }
            | Self::Status { endpoint, .. }
            | Self::Decode { endpoint, .. } => endpoint,
        }
    }

    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport { .. } => "transport",
            Self::Status { .. } => "status",
            Self::Decode { .. } => "decode",
        }
    }

    /// All failures share one handling policy; 4xx, 5xx and connection
    /// errors are not distinguished.
    #[must_use]
    pub fn is_transport_or_parse(&self) -> bool {
        true
    }
}

/// Maps a response status to success or a [`NotificationError::Status`].
pub fn ensure_success_status(endpoint: &str, status: u16) -> Result<(), NotificationError> {
    if (200..=299).contains(&status) {
        Ok(())
    } else {
        Err(NotificationError::Status {
            endpoint: endpoint.to_string(),
            status,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must not be empty")]
    EmptyEndpoint { field: &'static str },
    #[error("{field} must be an absolute path starting with '/'")]
    RelativeEndpoint { field: &'static str },
    #[error("poll interval must be greater than zero")]
    ZeroPollInterval,
    #[error("poll interval {interval_ms} ms exceeds the {max_ms} ms timer limit")]
    PollIntervalTooLarge { interval_ms: u64, max_ms: u64 },
    #[error("panel target {index} has an empty {field}")]
    EmptyTargetId { index: usize, field: &'static str },
    #[error("panel config could not be decoded: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range_is_inclusive() {
        assert!(ensure_success_status("/notifications", 200).is_ok());
        assert!(ensure_success_status("/notifications", 299).is_ok());
        assert_eq!(
            ensure_success_status("/notifications", 500),
            Err(NotificationError::Status {
                endpoint: "/notifications".to_string(),
                status: 500,
            })
        );
    }

    #[test]
    fn client_and_server_failures_share_policy() {
        let not_found = ensure_success_status("/notifications", 404).expect_err("404 fails");
        let offline = NotificationError::transport("/notifications", "connection refused");
        let garbage = NotificationError::decode("/notifications", "expected value at line 1");

        for error in [not_found, offline, garbage] {
            assert!(error.is_transport_or_parse());
            assert_eq!(error.endpoint(), "/notifications");
        }
    }

    #[test]
    fn display_names_endpoint() {
        let error = NotificationError::transport("/notifications/mark-read", "timed out");
        assert_eq!(
            error.to_string(),
            "request to /notifications/mark-read failed: timed out"
        );
        assert_eq!(error.kind(), "transport");
    }
}
