use sqlx::SqlitePool;
use time::OffsetDateTime;

use crate::db::error::DatabaseError;
use crate::db::models::{ContactRequest, NewContactRequest};

pub struct ContactRequestRepository;

impl ContactRequestRepository {
    /// Newest submissions first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<ContactRequest>, DatabaseError> {
        let requests = sqlx::query_as::<_, ContactRequest>(
            r#"
            SELECT id, name, phone, email, message, status, created_at, updated_at
            FROM contact_requests
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(pool)
        .await?;
        Ok(requests)
    }

    pub async fn find_by_id(
        pool: &SqlitePool,
        id: i64,
    ) -> Result<Option<ContactRequest>, DatabaseError> {
        let request = sqlx::query_as::<_, ContactRequest>(
            r#"
            SELECT id, name, phone, email, message, status, created_at, updated_at
            FROM contact_requests
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(request)
    }

    /// New submissions always start out pending.
    pub async fn create(
        pool: &SqlitePool,
        data: &NewContactRequest,
    ) -> Result<ContactRequest, DatabaseError> {
        let now = OffsetDateTime::now_utc();
        let request = sqlx::query_as::<_, ContactRequest>(
            r#"
            INSERT INTO contact_requests (name, phone, email, message, status, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, 'pending', ?5, ?5)
            RETURNING id, name, phone, email, message, status, created_at, updated_at
            "#,
        )
        .bind(&data.name)
        .bind(&data.phone)
        .bind(&data.email)
        .bind(&data.message)
        .bind(now)
        .fetch_one(pool)
        .await?;
        Ok(request)
    }

    pub async fn update_status(
        pool: &SqlitePool,
        id: i64,
        status: &str,
    ) -> Result<ContactRequest, DatabaseError> {
        let request = sqlx::query_as::<_, ContactRequest>(
            r#"
            UPDATE contact_requests
            SET status = ?1,
                updated_at = ?2
            WHERE id = ?3
            RETURNING id, name, phone, email, message, status, created_at, updated_at
            "#,
        )
        .bind(status)
        .bind(OffsetDateTime::now_utc())
        .bind(id)
        .fetch_one(pool)
        .await?;
        Ok(request)
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM contact_requests WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
