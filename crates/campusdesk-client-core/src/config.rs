use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::target::PanelTarget;

pub const DEFAULT_LIST_ENDPOINT: &str = "/notifications";
pub const DEFAULT_MARK_READ_ENDPOINT: &str = "/notifications/mark-read";
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 30_000;
/// Largest delay browser timers honor (`i32::MAX` ms); longer ones fire at once.
pub const MAX_POLL_INTERVAL_MS: u64 = 2_147_483_647;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub list_endpoint: String,
    pub mark_read_endpoint: String,
    pub poll_interval_ms: u64,
    pub targets: Vec<PanelTarget>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            list_endpoint: DEFAULT_LIST_ENDPOINT.to_string(),
            mark_read_endpoint: DEFAULT_MARK_READ_ENDPOINT.to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            targets: vec![PanelTarget::desktop(), PanelTarget::mobile()],
        }
    }
}

impl PanelConfig {
    /// Parses a partial JSON override; omitted fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|error| ConfigError::Decode(error.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_endpoint("list_endpoint", &self.list_endpoint)?;
        validate_endpoint("mark_read_endpoint", &self.mark_read_endpoint)?;
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        if self.poll_interval_ms > MAX_POLL_INTERVAL_MS {
            return Err(ConfigError::PollIntervalTooLarge {
                interval_ms: self.poll_interval_ms,
                max_ms: MAX_POLL_INTERVAL_MS,
            });
        }
        for (index, target) in self.targets.iter().enumerate() {
            if let Some((field, _)) = target.ids().into_iter().find(|(_, id)| id.trim().is_empty()) {
                return Err(ConfigError::EmptyTargetId { index, field });
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

fn validate_endpoint(field: &'static str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyEndpoint { field });
    }
    if !trimmed.starts_with('/') {
        return Err(ConfigError::RelativeEndpoint { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_poll_every_thirty_seconds_for_both_presentations() {
        let config = PanelConfig::default();
        assert_eq!(config.poll_interval(), Duration::from_secs(30));
        assert_eq!(config.list_endpoint, "/notifications");
        assert_eq!(config.mark_read_endpoint, "/notifications/mark-read");
        assert_eq!(config.targets.len(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_override_keeps_defaults() {
        let config = PanelConfig::from_json(r#"{"poll_interval_ms": 5000}"#).expect("valid override");
        assert_eq!(config.poll_interval(), Duration::from_secs(5));
        assert_eq!(config.list_endpoint, DEFAULT_LIST_ENDPOINT);
        assert_eq!(config.targets, PanelConfig::default().targets);
    }

    #[test]
    fn rejects_zero_interval() {
        let error = PanelConfig::from_json(r#"{"poll_interval_ms": 0}"#).expect_err("zero interval");
        assert_eq!(error, ConfigError::ZeroPollInterval);
    }

    #[test]
    fn rejects_interval_beyond_browser_timer_range() {
        let error = PanelConfig::from_json(r#"{"poll_interval_ms": 3000000000}"#)
            .expect_err("oversized interval");
        assert_eq!(
            error,
            ConfigError::PollIntervalTooLarge {
                interval_ms: 3_000_000_000,
                max_ms: MAX_POLL_INTERVAL_MS,
            }
        );

        let config = PanelConfig::from_json(r#"{"poll_interval_ms": 2147483647}"#)
            .expect("largest timer delay");
        assert_eq!(config.poll_interval_ms, MAX_POLL_INTERVAL_MS);
    }

    #[test]
    fn rejects_blank_and_relative_endpoints() {
        let error = PanelConfig::from_json(r#"{"list_endpoint": "  "}"#).expect_err("blank endpoint");
        assert_eq!(
            error,
            ConfigError::EmptyEndpoint {
                field: "list_endpoint"
            }
        );

        let error = PanelConfig::from_json(r#"{"mark_read_endpoint": "notifications/read"}"#)
            .expect_err("relative endpoint");
        assert_eq!(
            error,
            ConfigError::RelativeEndpoint {
                field: "mark_read_endpoint"
            }
        );
    }

    #[test]
    fn rejects_target_with_blank_id() {
        let error = PanelConfig::from_json(
            r#"{"targets": [{"name": "desktop", "toggle_id": "btn", "dropdown_id": "", "badge_id": "b", "list_id": "l"}]}"#,
        )
        .expect_err("blank dropdown id");
        assert_eq!(
            error,
            ConfigError::EmptyTargetId {
                index: 0,
                field: "dropdown_id"
            }
        );
    }

    #[test]
    fn empty_target_list_is_allowed() {
        let config = PanelConfig::from_json(r#"{"targets": []}"#).expect("no targets");
        assert!(config.targets.is_empty());
    }

    #[test]
    fn malformed_json_is_decode_error() {
        let error = PanelConfig::from_json("{not json").expect_err("malformed");
        assert!(matches!(error, ConfigError::Decode(_)));
    }
}
