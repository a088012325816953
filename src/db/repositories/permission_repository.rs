use sqlx::SqlitePool;
use time::OffsetDateTime;

use crate::db::error::DatabaseError;
use crate::db::models::{NewPermission, Permission, UpdatePermission};

pub struct PermissionRepository;

impl PermissionRepository {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Permission>, DatabaseError> {
        let permissions = sqlx::query_as::<_, Permission>(
            "SELECT id, name, endpoint, created_at FROM permissions ORDER BY id",
        )
        .fetch_all(pool)
        .await?;
        Ok(permissions)
    }

    pub async fn find_by_id(
        pool: &SqlitePool,
        id: i64,
    ) -> Result<Option<Permission>, DatabaseError> {
        let permission = sqlx::query_as::<_, Permission>(
            "SELECT id, name, endpoint, created_at FROM permissions WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(permission)
    }

    pub async fn create(
        pool: &SqlitePool,
        data: &NewPermission,
    ) -> Result<Permission, DatabaseError> {
        let permission = sqlx::query_as::<_, Permission>(
            r#"
            INSERT INTO permissions (name, endpoint, created_at)
            VALUES (?1, ?2, ?3)
            RETURNING id, name, endpoint, created_at
            "#,
        )
        .bind(&data.name)
        .bind(&data.endpoint)
        .bind(OffsetDateTime::now_utc())
        .fetch_one(pool)
        .await?;
        Ok(permission)
    }

    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        data: &UpdatePermission,
    ) -> Result<Permission, DatabaseError> {
        let permission = sqlx::query_as::<_, Permission>(
            r#"
            UPDATE permissions
            SET name = COALESCE(?1, name),
                endpoint = COALESCE(?2, endpoint)
            WHERE id = ?3
            RETURNING id, name, endpoint, created_at
            "#,
        )
        .bind(&data.name)
        .bind(&data.endpoint)
        .bind(id)
        .fetch_one(pool)
        .await?;
        Ok(permission)
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM permissions WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
