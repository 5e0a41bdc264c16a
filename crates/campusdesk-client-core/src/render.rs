use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::age::{RelativeAge, format_relative_age};
use crate::record::{NotificationRecord, unread_count};

pub const EMPTY_LIST_PLACEHOLDER: &str = "No notifications";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRow {
    pub message: String,
    /// Unread rows are visually emphasized.
    pub emphasized: bool,
    pub age: RelativeAge,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Empty,
    Rows(Vec<NotificationRow>),
}

impl ListView {
    #[must_use]
    pub fn rows(&self) -> &[NotificationRow] {
        match self {
            Self::Empty => &[],
            Self::Rows(rows) => rows,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BadgeView {
    pub unread: usize,
}

impl BadgeView {
    #[must_use]
    pub fn visible(self) -> bool {
        self.unread > 0
    }

    /// Text for the badge, or `None` when the badge must be hidden.
    #[must_use]
    pub fn label(self) -> Option<String> {
        self.visible().then(|| self.unread.to_string())
    }
}

/// Everything one presentation needs to draw itself. Computed once per fetch
/// and applied to every target, so desktop and mobile cannot diverge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelRender {
    pub list: ListView,
    pub badge: BadgeView,
}

#[must_use]
pub fn render(records: &[NotificationRecord], now: DateTime<Utc>) -> PanelRender {
    let list = if records.is_empty() {
        ListView::Empty
    } else {
        ListView::Rows(
            records
                .iter()
                .map(|record| NotificationRow {
                    message: record.message.clone(),
                    emphasized: !record.is_read,
                    age: format_relative_age(&record.created_at, now),
                })
                .collect(),
        )
    };

    PanelRender {
        list,
        badge: BadgeView {
            unread: unread_count(records),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use quickcheck::quickcheck;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 20, 12, 0, 0)
            .single()
            .expect("valid instant")
    }

    #[test]
    fn empty_list_renders_placeholder() {
        let view = render(&[], now());
        assert_eq!(view.list, ListView::Empty);
        assert!(view.list.rows().is_empty());
        assert!(!view.badge.visible());
        assert_eq!(view.badge.label(), None);
    }

    #[test]
    fn rows_follow_server_order_and_emphasize_unread() {
        let records = vec![
            NotificationRecord::new("Status changed to Resolved", false, "2024-05-20 11:59:45"),
            NotificationRecord::new("New complaint submitted: Wifi", true, "2024-05-20 09:00:00"),
        ];
        let view = render(&records, now());

        let rows = view.list.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].message, "Status changed to Resolved");
        assert!(rows[0].emphasized);
        assert_eq!(rows[0].age, RelativeAge::JustNow);
        assert_eq!(rows[1].message, "New complaint submitted: Wifi");
        assert!(!rows[1].emphasized);
        assert_eq!(rows[1].age.to_string(), "3 hours ago");
        assert_eq!(view.badge.label(), Some("1".to_string()));
    }

    #[test]
    fn all_read_hides_badge_but_keeps_rows() {
        let records = vec![NotificationRecord::new("done", true, "2024-05-20 11:00:00")];
        let view = render(&records, now());
        assert_eq!(view.list.rows().len(), 1);
        assert!(!view.badge.visible());
    }

    quickcheck! {
        fn badge_counts_unread_and_hides_only_at_zero(flags: Vec<bool>) -> bool {
            let records = flags
                .iter()
                .map(|is_read| NotificationRecord::new("m", *is_read, "2024-05-20 11:00:00"))
                .collect::<Vec<_>>();
            let expected = flags.iter().filter(|is_read| !**is_read).count();
            let view = render(&records, now());

            let rows_match = if records.is_empty() {
                view.list == ListView::Empty
            } else {
                view.list.rows().len() == records.len()
            };
            view.badge.unread == expected && view.badge.visible() == (expected > 0) && rows_match
        }
    }
}
