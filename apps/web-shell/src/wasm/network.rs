use super::*;

/// `gloo-net` transport against the page's own origin; the session cookie
/// rides along with same-origin requests.
#[derive(Debug, Clone)]
pub(super) struct GlooTransport {
    list_endpoint: String,
    mark_read_endpoint: String,
}

impl GlooTransport {
    pub(super) fn from_config(config: &PanelConfig) -> Self {
        Self {
            list_endpoint: config.list_endpoint.trim().to_string(),
            mark_read_endpoint: config.mark_read_endpoint.trim().to_string(),
        }
    }
}

#[async_trait(?Send)]
impl NotificationTransport for GlooTransport {
    async fn fetch_notifications(&self) -> Result<Vec<NotificationRecord>, NotificationError> {
        let endpoint = self.list_endpoint.as_str();
        let response = Request::get(endpoint)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|error| map_network_error(endpoint, error))?;
        ensure_success_status(endpoint, response.status())?;
        let raw = response
            .text()
            .await
            .map_err(|error| map_network_error(endpoint, error))?;
        decode_notification_list(endpoint, &raw)
    }

    async fn mark_read(&self) -> Result<(), NotificationError> {
        let endpoint = self.mark_read_endpoint.as_str();
        let response = Request::post(endpoint)
            .header("content-type", "application/json")
            .send()
            .await
            .map_err(|error| map_network_error(endpoint, error))?;
        ensure_success_status(endpoint, response.status())
    }
}

fn map_network_error(endpoint: &str, error: gloo_net::Error) -> NotificationError {
    NotificationError::transport(endpoint, error.to_string())
}
