use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use service_core::store::Record;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    Sale,
    Supply,
    System,
    Alert,
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationType::Sale => write!(f, "sale"),
            NotificationType::Supply => write!(f, "supply"),
            NotificationType::System => write!(f, "system"),
            NotificationType::Alert => write!(f, "alert"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct Notification {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "Новый заказ: букет из 15 роз")]
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    #[serde(with = "iso_millis")]
    #[schema(value_type = String, format = DateTime, example = "2024-01-15T10:00:00.000Z")]
    pub timestamp: DateTime<Utc>,
}

/// Caller-supplied part of a notification.
#[derive(Debug, Clone, PartialEq)]
pub struct NewNotification {
    pub message: String,
    pub kind: NotificationType,
}

impl Record for Notification {
    type Draft = NewNotification;

    fn from_draft(id: u64, draft: NewNotification, appended_at: DateTime<Utc>) -> Self {
        Notification {
            id,
            message: draft.message,
            kind: draft.kind,
            timestamp: appended_at,
        }
    }
}

// RFC 3339 in UTC with millisecond precision, e.g. 2024-01-15T10:00:00.000Z
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
