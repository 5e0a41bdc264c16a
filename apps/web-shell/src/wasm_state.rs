use campusdesk_client_core::PanelStats;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub(crate) struct NotificationDiagnostics {
    pub(super) phase: String,
    pub(super) detail: String,
    pub(super) config_source: String,
    pub(super) poll_interval_ms: u64,
    pub(super) poll_ticks: u64,
    pub(super) bound_toggles: usize,
    pub(super) panel: PanelStats,
    pub(super) last_error: Option<String>,
}

impl Default for NotificationDiagnostics {
    fn default() -> Self {
        Self {
            phase: "idle".to_string(),
            detail: "notification panel not started".to_string(),
            config_source: "default".to_string(),
            poll_interval_ms: 0,
            poll_ticks: 0,
            bound_toggles: 0,
            panel: PanelStats::default(),
            last_error: None,
        }
    }
}
