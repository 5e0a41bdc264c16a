use serde::{Deserialize, Serialize};

pub const DESKTOP_TOGGLE_ID: &str = "notificationBtn";
pub const DESKTOP_DROPDOWN_ID: &str = "notificationDropdown";
pub const DESKTOP_BADGE_ID: &str = "notificationCount";
pub const DESKTOP_LIST_ID: &str = "notificationList";
pub const MOBILE_TOGGLE_ID: &str = "notificationBtnMobile";
pub const MOBILE_BADGE_ID: &str = "notificationCountMobile";

/// One presentation of the panel, addressed by page element ids.
///
/// Targets may share a dropdown or list element; the mobile toggle drives the
/// same dropdown and list as the desktop one and only owns its badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelTarget {
    pub name: String,
    pub toggle_id: String,
    pub dropdown_id: String,
    pub badge_id: String,
    pub list_id: String,
}

impl PanelTarget {
    #[must_use]
    pub fn desktop() -> Self {
        Self {
            name: "desktop".to_string(),
            toggle_id: DESKTOP_TOGGLE_ID.to_string(),
            dropdown_id: DESKTOP_DROPDOWN_ID.to_string(),
            badge_id: DESKTOP_BADGE_ID.to_string(),
            list_id: DESKTOP_LIST_ID.to_string(),
        }
    }

    #[must_use]
    pub fn mobile() -> Self {
        Self {
            name: "mobile".to_string(),
            toggle_id: MOBILE_TOGGLE_ID.to_string(),
            dropdown_id: DESKTOP_DROPDOWN_ID.to_string(),
            badge_id: MOBILE_BADGE_ID.to_string(),
            list_id: DESKTOP_LIST_ID.to_string(),
        }
    }

    pub(crate) fn ids(&self) -> [(&'static str, &str); 4] {
        [
            ("toggle_id", self.toggle_id.as_str()),
            ("dropdown_id", self.dropdown_id.as_str()),
            ("badge_id", self.badge_id.as_str()),
            ("list_id", self.list_id.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_shares_dropdown_and_list_with_desktop() {
        let desktop = PanelTarget::desktop();
        let mobile = PanelTarget::mobile();
        assert_eq!(desktop.dropdown_id, mobile.dropdown_id);
        assert_eq!(desktop.list_id, mobile.list_id);
        assert_ne!(desktop.badge_id, mobile.badge_id);
        assert_ne!(desktop.toggle_id, mobile.toggle_id);
    }
}
