use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use validator::Validate;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct RolePermission {
    pub id: i64,
    pub role_id: i64,
    pub permission_id: i64,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewRole {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRole {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,
}

/// Replace-set payload for a role's permission assignments.
#[derive(Debug, Deserialize)]
pub struct SetRolePermissions {
    pub permission_ids: Vec<i64>,
}
