use serde::{Deserialize, Serialize};

use crate::error::NotificationError;

/// One notification as served by `GET /notifications`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: String,
}

impl NotificationRecord {
    pub fn new(message: impl Into<String>, is_read: bool, created_at: impl Into<String>) -> Self {
        Self {
            id: None,
            message: message.into(),
            is_read,
            created_at: created_at.into(),
        }
    }
}

/// Decodes the list endpoint body. Order is preserved as served.
pub fn decode_notification_list(
    endpoint: &str,
    raw: &str,
) -> Result<Vec<NotificationRecord>, NotificationError> {
    serde_json::from_str(raw).map_err(|error| NotificationError::decode(endpoint, error.to_string()))
}

#[must_use]
pub fn unread_count(records: &[NotificationRecord]) -> usize {
    records.iter().filter(|record| !record.is_read).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_rows_in_server_order() {
        let records = decode_notification_list(
            "/notifications",
            r#"[
                {"id": 7, "message": "You have been assigned a complaint: Leaky tap", "is_read": false, "created_at": "2024-05-01 10:00:00"},
                {"id": 3, "message": "New complaint submitted: Wifi", "is_read": true, "created_at": "2024-04-30 08:15:00"}
            ]"#,
        )
        .expect("valid list");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, Some(7));
        assert_eq!(records[0].message, "You have been assigned a complaint: Leaky tap");
        assert!(!records[0].is_read);
        assert_eq!(records[1].created_at, "2024-04-30 08:15:00");
    }

    #[test]
    fn id_is_optional() {
        let records = decode_notification_list(
            "/notifications",
            r#"[{"message": "hello", "is_read": true, "created_at": "2024-05-01T10:00:00Z"}]"#,
        )
        .expect("valid list");
        assert_eq!(records[0].id, None);
    }

    #[test]
    fn non_json_body_is_decode_failure() {
        let error = decode_notification_list("/notifications", "<html>login</html>")
            .expect_err("html is not a list");
        assert!(matches!(error, NotificationError::Decode { .. }));
    }

    #[test]
    fn counts_only_unread_records() {
        let records = vec![
            NotificationRecord::new("a", false, ""),
            NotificationRecord::new("b", true, ""),
            NotificationRecord::new("c", false, ""),
        ];
        assert_eq!(unread_count(&records), 2);
        assert_eq!(unread_count(&[]), 0);
    }
}
