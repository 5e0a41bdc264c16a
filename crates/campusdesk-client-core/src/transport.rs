use async_trait::async_trait;

use crate::error::NotificationError;
use crate::record::NotificationRecord;
use crate::render::PanelRender;
use crate::target::PanelTarget;

/// Backend calls made by the panel. Futures are not `Send`: the browser
/// runtime is single threaded.
#[async_trait(?Send)]
pub trait NotificationTransport {
    async fn fetch_notifications(&self) -> Result<Vec<NotificationRecord>, NotificationError>;

    /// Asks the backend to mark every unread notification of the session as
    /// read. The response body is ignored.
    async fn mark_read(&self) -> Result<(), NotificationError>;
}

/// Sink for rendered output. Implementations tolerate missing elements.
pub trait PanelView {
    fn apply_render(&self, target: &PanelTarget, render: &PanelRender);
    fn set_dropdown_visible(&self, dropdown_id: &str, visible: bool);
}
