#[cfg(any(target_arch = "wasm32", test))]
mod markup;
#[cfg(target_arch = "wasm32")]
mod wasm_constants;
#[cfg(target_arch = "wasm32")]
mod wasm_state;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use async_trait::async_trait;
    use campusdesk_client_core::{
        AcknowledgeOutcome, AttachmentPreview, BadgeView, DropdownState, EMPTY_LIST_PLACEHOLDER,
        ListView, NotificationError, NotificationPanel, NotificationRecord, NotificationRow,
        NotificationTransport, PanelConfig, PanelRender, PanelTarget, PanelView, RefreshOutcome,
        RelativeAge, SystemClock, decode_notification_list, ensure_success_status,
    };
    use campusdesk_client_core::config::MAX_POLL_INTERVAL_MS;
    use futures_util::StreamExt;
    use gloo_net::http::Request;
    use gloo_timers::future::IntervalStream;
    use tracing::{debug, info, warn};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;
    use web_sys::{Element, HtmlInputElement, Node};

    use crate::markup::*;
    use crate::wasm_constants::*;
    use crate::wasm_state::NotificationDiagnostics;

    mod dom;
    mod handlers;
    mod lifecycle;
    mod network;

    use dom::DomPanelView;
    use handlers::*;
    use lifecycle::*;
    use network::GlooTransport;

    type WebPanel = NotificationPanel<GlooTransport, DomPanelView, SystemClock>;

    thread_local! {
        static PANEL: RefCell<Option<Rc<WebPanel>>> = const { RefCell::new(None) };
        static DIAGNOSTICS: RefCell<NotificationDiagnostics> = RefCell::new(NotificationDiagnostics::default());
        static POLL_LOOP_ACTIVE: Cell<bool> = const { Cell::new(false) };
        static DOM_READY_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(None) };
        static TOGGLE_CLICK_HANDLERS: RefCell<Vec<Closure<dyn FnMut(web_sys::Event)>>> = RefCell::new(Vec::new());
        static OUTSIDE_CLICK_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(None) };
        static ATTACHMENT_CHANGE_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(None) };
    }

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        install_tracing();
        set_phase("booting", "waiting for document");
        if document_is_loading() {
            install_dom_ready_handler();
        } else {
            boot();
        }
    }

    #[wasm_bindgen]
    pub fn notification_diagnostics_json() -> String {
        if let Some(panel) = current_panel() {
            sync_panel_stats(&panel);
        }
        DIAGNOSTICS.with(|state| {
            serde_json::to_string(&*state.borrow()).unwrap_or_else(|_| {
                "{\"phase\":\"error\",\"detail\":\"diagnostics serialization failed\"}".to_string()
            })
        })
    }

    #[wasm_bindgen]
    pub fn notifications_refresh() {
        schedule_refresh();
    }

    #[wasm_bindgen]
    pub fn notifications_acknowledge() {
        schedule_acknowledge();
    }

    fn boot() {
        if current_panel().is_some() {
            return;
        }

        let (config, config_source) = load_panel_config();
        let panel = Rc::new(NotificationPanel::new(
            config.clone(),
            GlooTransport::from_config(&config),
            DomPanelView,
            SystemClock,
        ));
        PANEL.with(|slot| *slot.borrow_mut() = Some(Rc::clone(&panel)));

        seed_dropdowns_from_dom(&panel, &config.targets);
        let bound_toggles = install_toggle_handlers(&config.targets);
        install_outside_click_handler(&config.targets);
        install_attachment_preview_handler();

        DIAGNOSTICS.with(|state| {
            let mut state = state.borrow_mut();
            state.config_source = config_source.clone();
            state.poll_interval_ms = config.poll_interval_ms;
            state.bound_toggles = bound_toggles;
        });

        schedule_refresh();
        start_poll_loop(config.poll_interval_ms);

        info!(
            config_source = %config_source,
            bound_toggles,
            poll_interval_ms = config.poll_interval_ms,
            "notification panel started"
        );
        set_phase("running", "polling notifications");
    }

    fn current_panel() -> Option<Rc<WebPanel>> {
        PANEL.with(|slot| slot.borrow().clone())
    }

    fn schedule_refresh() {
        let Some(panel) = current_panel() else {
            return;
        };
        spawn_local(async move {
            let outcome = panel.refresh().await;
            report_refresh(&outcome);
            sync_panel_stats(&panel);
        });
    }

    fn schedule_acknowledge() {
        let Some(panel) = current_panel() else {
            return;
        };
        spawn_local(async move {
            let outcome = panel.acknowledge().await;
            report_acknowledge(&outcome);
            sync_panel_stats(&panel);
        });
    }

    fn schedule_toggle(target: PanelTarget) {
        let Some(panel) = current_panel() else {
            return;
        };
        spawn_local(async move {
            let transition = panel.handle_toggle(&target).await;
            debug!(target = %target.name, ?transition, "notification dropdown toggled");
            sync_panel_stats(&panel);
        });
    }

    // Never cancelled; the panel lives as long as the page.
    fn start_poll_loop(interval_ms: u64) {
        if POLL_LOOP_ACTIVE.with(|active| active.replace(true)) {
            return;
        }
        let millis = u32::try_from(interval_ms.min(MAX_POLL_INTERVAL_MS)).unwrap_or(u32::MAX);
        spawn_local(async move {
            let mut ticks = IntervalStream::new(millis);
            while ticks.next().await.is_some() {
                record_poll_tick();
                schedule_refresh();
            }
        });
    }
}
