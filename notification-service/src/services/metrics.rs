//! Domain metrics for notification-service.

use metrics::counter;

use crate::models::NotificationType;

/// Record a stored notification, labelled by its type.
pub fn record_notification(kind: NotificationType) {
    counter!("notifications_created_total", "type" => kind.to_string()).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrics_exporter_prometheus::PrometheusBuilder;

    #[test]
    fn notifications_are_counted_per_type() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            record_notification(NotificationType::Alert);
            record_notification(NotificationType::Alert);
            record_notification(NotificationType::Supply);
        });

        let rendered = handle.render();
        assert!(
            rendered.contains(r#"notifications_created_total{type="alert"} 2"#),
            "{rendered}"
        );
        assert!(
            rendered.contains(r#"notifications_created_total{type="supply"} 1"#),
            "{rendered}"
        );
        assert!(!rendered.contains(r#"type="sale""#), "{rendered}");
    }
}
