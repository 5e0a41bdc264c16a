use campusdesk_client_core::PanelTarget;

pub(crate) const ROW_CLASSES: &str = "p-3 border-b border-gray-100 hover:bg-gray-50 transition-colors";
pub(crate) const ROW_AGE_CLASSES: &str = "text-xs text-gray-500 mt-1";
pub(crate) const EMPTY_PLACEHOLDER_CLASSES: &str = "text-gray-500 text-center py-4";
pub(crate) const ATTACHMENT_NAME_CLASS: &str = "font-semibold";
pub(crate) const ATTACHMENT_SIZE_CLASS: &str = "text-xs";

const ROW_MESSAGE_CLASSES: &str = "text-sm text-gray-800";
const ROW_MESSAGE_UNREAD_CLASS: &str = "font-semibold";

pub(crate) fn row_message_classes(emphasized: bool) -> String {
    if emphasized {
        format!("{ROW_MESSAGE_CLASSES} {ROW_MESSAGE_UNREAD_CLASS}")
    } else {
        ROW_MESSAGE_CLASSES.to_string()
    }
}

/// Dropdown ids in stable order, each once, even when several targets share
/// one dropdown.
pub(crate) fn unique_dropdown_ids(targets: &[PanelTarget]) -> Vec<&str> {
    let mut ids = targets
        .iter()
        .map(|target| target.dropdown_id.as_str())
        .collect::<Vec<_>>();
    ids.sort_unstable();
    ids.dedup();
    ids
}

/// Targets whose toggle controls `dropdown_id`.
pub(crate) fn toggles_for<'a>(
    targets: &'a [PanelTarget],
    dropdown_id: &'a str,
) -> impl Iterator<Item = &'a str> + 'a {
    targets
        .iter()
        .filter(move |target| target.dropdown_id == dropdown_id)
        .map(|target| target.toggle_id.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unread_rows_get_bold_message() {
        assert_eq!(row_message_classes(true), "text-sm text-gray-800 font-semibold");
        assert_eq!(row_message_classes(false), "text-sm text-gray-800");
    }

    #[test]
    fn default_targets_share_one_dropdown() {
        let targets = vec![PanelTarget::desktop(), PanelTarget::mobile()];
        assert_eq!(unique_dropdown_ids(&targets), vec!["notificationDropdown"]);
        assert_eq!(
            toggles_for(&targets, "notificationDropdown").collect::<Vec<_>>(),
            vec!["notificationBtn", "notificationBtnMobile"]
        );
        assert_eq!(toggles_for(&targets, "other").count(), 0);
    }
}
