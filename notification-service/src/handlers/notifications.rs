use axum::{extract::State, http::StatusCode, Json};
use service_core::error::{AppError, ErrorResponse};
use service_core::utils::ValidatedJson;

use crate::dtos::CreateNotificationRequest;
use crate::models::Notification;
use crate::services::record_notification;
use crate::startup::AppState;

/// List every notification in the order it was created
#[utoipa::path(
    get,
    path = "/notifications",
    responses(
        (status = 200, description = "All notifications, oldest first", body = [Notification]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Notifications"
)]
pub async fn list_notifications(
    State(state): State<AppState>,
) -> Result<Json<Vec<Notification>>, AppError> {
    let notifications = state.notifications.list()?;
    tracing::debug!(count = notifications.len(), "Listing notifications");
    Ok(Json(notifications))
}

/// Create a notification
#[utoipa::path(
    post,
    path = "/notifications",
    request_body = CreateNotificationRequest,
    responses(
        (status = 201, description = "Notification created", body = Notification),
        (status = 400, description = "Body is not a valid notification", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Notifications"
)]
pub async fn create_notification(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateNotificationRequest>,
) -> Result<(StatusCode, Json<Notification>), AppError> {
    let notification = state.notifications.append(payload.into())?;

    tracing::info!(
        notification_id = notification.id,
        kind = %notification.kind,
        "Created notification"
    );
    record_notification(notification.kind);

    Ok((StatusCode::CREATED, Json(notification)))
}
