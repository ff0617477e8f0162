use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{NewNotification, NotificationType};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateNotificationRequest {
    #[validate(length(min = 1, message = "Message is required"))]
    #[schema(example = "Поставка тюльпанов прибыла")]
    pub message: String,

    #[serde(rename = "type")]
    pub kind: NotificationType,
}

impl From<CreateNotificationRequest> for NewNotification {
    fn from(req: CreateNotificationRequest) -> Self {
        NewNotification {
            message: req.message,
            kind: req.kind,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "OK")]
    pub status: String,
    #[schema(example = "Notification Service")]
    pub service: String,
    #[schema(example = "0.1.0")]
    pub version: String,
}
