use chrono::{TimeZone, Utc};
use service_core::store::{RecordStore, StoreError};

use crate::models::{NewNotification, Notification, NotificationType};

/// Seed the demo notification shown to a freshly started service.
pub fn seed_notifications(store: &RecordStore<Notification>) -> Result<(), StoreError> {
    let sent_at = Utc
        .with_ymd_and_hms(2024, 1, 15, 10, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);

    let notification = store.append_at(
        NewNotification {
            message: "Новый заказ: букет из 15 роз".to_string(),
            kind: NotificationType::Sale,
        },
        sent_at,
    )?;

    tracing::debug!(
        notification_id = notification.id,
        kind = %notification.kind,
        "Seeded fixture notification"
    );
    Ok(())
}
