use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

use super::*;

/// Routes `tracing` output to the browser console, one call per event.
struct ConsoleMakeWriter;

struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buffer);
        let line = line.trim_end();
        if line.is_empty() {
            return;
        }
        let value = JsValue::from_str(line);
        if self.level == Level::ERROR {
            web_sys::console::error_1(&value);
        } else if self.level == Level::WARN {
            web_sys::console::warn_1(&value);
        } else if self.level == Level::INFO {
            web_sys::console::info_1(&value);
        } else {
            web_sys::console::debug_1(&value);
        }
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            level: Level::INFO,
            buffer: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            level: *meta.level(),
            buffer: Vec::new(),
        }
    }
}

pub(super) fn install_tracing() {
    // The browser has no wall clock source for `SystemTime`; the console
    // timestamps lines itself.
    let _ = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .without_time()
        .with_max_level(Level::INFO)
        .try_init();
}

pub(super) fn set_phase(phase: &str, detail: &str) {
    DIAGNOSTICS.with(|state| {
        let mut state = state.borrow_mut();
        state.phase = phase.to_string();
        state.detail = detail.to_string();
    });
}

pub(super) fn document_is_loading() -> bool {
    dom::document().is_some_and(|document| document.ready_state() == "loading")
}

/// Reads the optional `window.__CAMPUSDESK_NOTIFICATIONS__` override.
/// Returns the config and a label describing where it came from.
pub(super) fn load_panel_config() -> (PanelConfig, String) {
    let Some(window) = web_sys::window() else {
        return (PanelConfig::default(), "default".to_string());
    };
    let Ok(value) = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_WINDOW_KEY)) else {
        return (PanelConfig::default(), "default".to_string());
    };
    if value.is_undefined() || value.is_null() {
        return (PanelConfig::default(), "default".to_string());
    }

    let raw = match js_sys::JSON::stringify(&value) {
        Ok(raw) => String::from(raw),
        Err(_) => {
            warn!("notification config override is not serializable; using defaults");
            return (PanelConfig::default(), "default (invalid override)".to_string());
        }
    };
    match PanelConfig::from_json(&raw) {
        Ok(config) => (config, "window".to_string()),
        Err(error) => {
            warn!(%error, "ignoring invalid notification config override");
            (PanelConfig::default(), "default (invalid override)".to_string())
        }
    }
}

pub(super) fn report_refresh(outcome: &RefreshOutcome) {
    if let RefreshOutcome::Failed(error) = outcome {
        record_last_error(error);
    }
}

pub(super) fn report_acknowledge(outcome: &AcknowledgeOutcome) {
    match outcome {
        AcknowledgeOutcome::Failed(error) => record_last_error(error),
        AcknowledgeOutcome::Refreshed(refresh) => report_refresh(refresh),
    }
}

fn record_last_error(error: &NotificationError) {
    DIAGNOSTICS.with(|state| {
        state.borrow_mut().last_error = Some(error.to_string());
    });
}

pub(super) fn sync_panel_stats(panel: &WebPanel) {
    let stats = panel.stats();
    DIAGNOSTICS.with(|state| {
        state.borrow_mut().panel = stats;
    });
}

pub(super) fn record_poll_tick() {
    DIAGNOSTICS.with(|state| {
        state.borrow_mut().poll_ticks += 1;
    });
}
