use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use validator::Validate;

/// Workflow states a request moves through after submission.
pub const CONTACT_REQUEST_STATUSES: &[&str] = &["pending", "in_progress", "completed"];

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct ContactRequest {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    pub status: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewContactRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "Phone must not be empty"))]
    pub phone: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Message must not be empty"))]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateContactRequestStatus {
    pub status: Option<String>,
}
