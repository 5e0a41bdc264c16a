pub(crate) const CONFIG_WINDOW_KEY: &str = "__CAMPUSDESK_NOTIFICATIONS__";
pub(crate) const HIDDEN_CLASS: &str = "hidden";
pub(crate) const ATTACHMENT_INPUT_ID: &str = "attachment";
pub(crate) const FALLBACK_LOCALE: &str = "en-US";
