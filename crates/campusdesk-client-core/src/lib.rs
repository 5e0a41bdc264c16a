//! Platform-free core of the campusdesk notification panel.
//!
//! The web shell supplies a [`NotificationTransport`] and a [`PanelView`];
//! everything else (rendering, relative ages, dropdown state, single-flight
//! polling) lives here and runs on the host for tests.

pub mod age;
pub mod attachment;
pub mod config;
pub mod dropdown;
pub mod error;
pub mod panel;
pub mod record;
pub mod render;
pub mod target;
pub mod transport;

pub use age::{Clock, FixedClock, RelativeAge, SystemClock, format_relative_age, parse_timestamp};
pub use attachment::AttachmentPreview;
pub use config::PanelConfig;
pub use dropdown::{DropdownState, DropdownTransition};
pub use error::{ConfigError, NotificationError, ensure_success_status};
pub use panel::{AcknowledgeOutcome, NotificationPanel, PanelStats, RefreshOutcome};
pub use record::{NotificationRecord, decode_notification_list, unread_count};
pub use render::{BadgeView, EMPTY_LIST_PLACEHOLDER, ListView, NotificationRow, PanelRender, render};
pub use target::PanelTarget;
pub use transport::{NotificationTransport, PanelView};
