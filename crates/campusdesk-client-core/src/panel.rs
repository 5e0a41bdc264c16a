use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, warn};

use crate::age::{Clock, SystemClock};
use crate::config::PanelConfig;
use crate::dropdown::{DropdownState, DropdownTransition};
use crate::error::NotificationError;
use crate::render::{PanelRender, render};
use crate::target::PanelTarget;
use crate::transport::{NotificationTransport, PanelView};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    Applied { unread: usize },
    /// Another refresh was in flight; it will run one more fetch when done.
    Skipped,
    /// The previous rendering was left untouched.
    Failed(NotificationError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcknowledgeOutcome {
    Refreshed(RefreshOutcome),
    /// Mark-read failed; no follow-up refresh was issued.
    Failed(NotificationError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PanelStats {
    pub refresh_total: u64,
    pub refresh_applied: u64,
    pub refresh_skipped: u64,
    pub refresh_failures: u64,
    pub acknowledge_total: u64,
    pub acknowledge_failures: u64,
    pub last_unread: Option<usize>,
    pub last_error_kind: Option<String>,
    pub last_error: Option<String>,
}

/// Polls, renders and acknowledges notifications for every configured
/// presentation.
///
/// All state lives behind `Cell`/`RefCell`: the panel is shared by `Rc`
/// between the poll loop and click handlers on a single thread, and no borrow
/// is held across an `.await`.
pub struct NotificationPanel<T, V, C = SystemClock> {
    config: PanelConfig,
    transport: T,
    view: V,
    clock: C,
    refresh_in_flight: Cell<bool>,
    refresh_requested: Cell<bool>,
    dropdowns: RefCell<BTreeMap<String, DropdownState>>,
    last_render: RefCell<Option<PanelRender>>,
    stats: RefCell<PanelStats>,
}

struct InFlightGuard<'a>(&'a Cell<bool>);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl<T, V, C> NotificationPanel<T, V, C>
where
    T: NotificationTransport,
    V: PanelView,
    C: Clock,
{
    pub fn new(config: PanelConfig, transport: T, view: V, clock: C) -> Self {
        Self {
            config,
            transport,
            view,
            clock,
            refresh_in_flight: Cell::new(false),
            refresh_requested: Cell::new(false),
            dropdowns: RefCell::new(BTreeMap::new()),
            last_render: RefCell::new(None),
            stats: RefCell::new(PanelStats::default()),
        }
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn stats(&self) -> PanelStats {
        self.stats.borrow().clone()
    }

    pub fn last_render(&self) -> Option<PanelRender> {
        self.last_render.borrow().clone()
    }

    pub fn refresh_in_flight(&self) -> bool {
        self.refresh_in_flight.get()
    }

    pub fn dropdown_state(&self, dropdown_id: &str) -> DropdownState {
        self.dropdowns
            .borrow()
            .get(dropdown_id)
            .copied()
            .unwrap_or_default()
    }

    /// Fetches the list and re-renders every target from the same result.
    ///
    /// At most one fetch is in flight. Calls made meanwhile return
    /// [`RefreshOutcome::Skipped`] and are coalesced into a single follow-up
    /// fetch by the in-flight call.
    pub async fn refresh(&self) -> RefreshOutcome {
        self.stats.borrow_mut().refresh_total += 1;
        if self.refresh_in_flight.replace(true) {
            self.refresh_requested.set(true);
            self.stats.borrow_mut().refresh_skipped += 1;
            debug!("notification refresh already in flight; coalescing");
            return RefreshOutcome::Skipped;
        }
        let _guard = InFlightGuard(&self.refresh_in_flight);

        loop {
            let outcome = self.refresh_once().await;
            if !self.refresh_requested.replace(false) {
                return outcome;
            }
            debug!("running coalesced notification refresh");
        }
    }

    async fn refresh_once(&self) -> RefreshOutcome {
        match self.transport.fetch_notifications().await {
            Ok(records) => {
                let view = render(&records, self.clock.now());
                let unread = view.badge.unread;
                self.render_all(&view);
                *self.last_render.borrow_mut() = Some(view);
                {
                    let mut stats = self.stats.borrow_mut();
                    stats.refresh_applied += 1;
                    stats.last_unread = Some(unread);
                }
                debug!(count = records.len(), unread, "applied notification refresh");
                RefreshOutcome::Applied { unread }
            }
            Err(error) => {
                warn!(endpoint = error.endpoint(), %error, "failed to load notifications");
                let mut stats = self.stats.borrow_mut();
                stats.refresh_failures += 1;
                record_error(&mut stats, &error);
                RefreshOutcome::Failed(error)
            }
        }
    }

    /// Applies one computed render to every configured presentation.
    pub fn render_all(&self, view: &PanelRender) {
        for target in &self.config.targets {
            self.view.apply_render(target, view);
        }
    }

    /// Marks the current notifications read on the server, then refreshes to
    /// pick up the new read state. Local flags are never flipped ahead of the
    /// server.
    pub async fn acknowledge(&self) -> AcknowledgeOutcome {
        self.stats.borrow_mut().acknowledge_total += 1;
        match self.transport.mark_read().await {
            Ok(()) => AcknowledgeOutcome::Refreshed(self.refresh().await),
            Err(error) => {
                warn!(endpoint = error.endpoint(), %error, "failed to mark notifications read");
                let mut stats = self.stats.borrow_mut();
                stats.acknowledge_failures += 1;
                record_error(&mut stats, &error);
                AcknowledgeOutcome::Failed(error)
            }
        }
    }

    /// Records the state the page markup starts in without touching the view.
    pub fn seed_dropdown(&self, dropdown_id: &str, state: DropdownState) {
        self.dropdowns
            .borrow_mut()
            .insert(dropdown_id.to_string(), state);
    }

    /// Flips the target's dropdown and shows or hides it.
    pub fn toggle_dropdown(&self, target: &PanelTarget) -> DropdownTransition {
        let transition = self
            .dropdowns
            .borrow_mut()
            .entry(target.dropdown_id.clone())
            .or_default()
            .toggle();
        self.view.set_dropdown_visible(
            &target.dropdown_id,
            transition.resulting_state().is_visible(),
        );
        transition
    }

    /// Toggle-button click: flips the dropdown and acknowledges exactly when
    /// it goes from hidden to visible.
    pub async fn handle_toggle(&self, target: &PanelTarget) -> DropdownTransition {
        let transition = self.toggle_dropdown(target);
        if transition.should_acknowledge() {
            let _ = self.acknowledge().await;
        }
        transition
    }

    /// Click outside the dropdown and its toggle. Never acknowledges.
    pub fn dismiss_dropdown(&self, dropdown_id: &str) -> DropdownTransition {
        let transition = self
            .dropdowns
            .borrow_mut()
            .entry(dropdown_id.to_string())
            .or_default()
            .dismiss();
        if transition == DropdownTransition::Closed {
            self.view.set_dropdown_visible(dropdown_id, false);
        }
        transition
    }
}

fn record_error(stats: &mut PanelStats, error: &NotificationError) {
    stats.last_error_kind = Some(error.kind().to_string());
    stats.last_error = Some(error.to_string());
}
