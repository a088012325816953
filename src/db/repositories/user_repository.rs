use sqlx::SqlitePool;
use time::OffsetDateTime;

use crate::db::error::DatabaseError;
use crate::db::models::{NewUser, UpdateUser, User};

pub struct UserRepository;

impl UserRepository {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<User>, DatabaseError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, name, role_id, is_active, created_at, updated_at
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await?;
        Ok(users)
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, name, role_id, is_active, created_at, updated_at
            FROM users
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(user)
    }

    pub async fn create(pool: &SqlitePool, data: &NewUser) -> Result<User, DatabaseError> {
        let now = OffsetDateTime::now_utc();
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, name, role_id, is_active, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?5)
            RETURNING id, email, name, role_id, is_active, created_at, updated_at
            "#,
        )
        .bind(data.email.to_lowercase())
        .bind(&data.name)
        .bind(data.role_id)
        .bind(data.is_active.unwrap_or(true))
        .bind(now)
        .fetch_one(pool)
        .await
        .map_err(DatabaseError::from_write)?;
        Ok(user)
    }

    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        data: &UpdateUser,
    ) -> Result<User, DatabaseError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET email = COALESCE(?1, email),
                name = COALESCE(?2, name),
                role_id = COALESCE(?3, role_id),
                is_active = COALESCE(?4, is_active),
                updated_at = ?5
            WHERE id = ?6
            RETURNING id, email, name, role_id, is_active, created_at, updated_at
            "#,
        )
        .bind(data.email.as_ref().map(|e| e.to_lowercase()))
        .bind(&data.name)
        .bind(data.role_id)
        .bind(data.is_active)
        .bind(OffsetDateTime::now_utc())
        .bind(id)
        .fetch_one(pool)
        .await
        .map_err(DatabaseError::from_write)?;
        Ok(user)
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM users WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
