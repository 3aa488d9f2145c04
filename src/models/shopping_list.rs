use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStatus {
    #[default]
    Active,
    Archived,
}

/// A shopping list owned by one user.
///
/// Records written before archiving existed carry no `status`; they read back as
/// [`ListStatus::Active`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    pub id: Uuid,
    pub user_id: String,
    pub name: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub status: ListStatus,
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub completed_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::{ListStatus, ShoppingList};

    #[test]
    fn legacy_record_without_status_reads_as_active() {
        let raw = r#"{
            "id": "6f2c1f7e-8a4b-4a8e-9a57-3f1f3c1e2d10",
            "userId": "u1",
            "name": "Mercado",
            "createdAt": 1700000000000
        }"#;

        let list: ShoppingList = serde_json::from_str(raw).expect("legacy list should parse");
        assert_eq!(list.status, ListStatus::Active);
        assert!(list.completed_at.is_none());
        assert_eq!(list.created_at.timestamp_millis(), 1_700_000_000_000);
    }

    #[test]
    fn status_serializes_lowercase() {
        let value = serde_json::to_value(ListStatus::Archived).expect("status should serialize");
        assert_eq!(value, serde_json::json!("archived"));
    }
}
