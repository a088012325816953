use sqlx::{Sqlite, SqlitePool, Transaction};
use time::OffsetDateTime;

use crate::db::error::DatabaseError;
use crate::db::models::{ContactInfo, NewContactInfo, UpdateContactInfo};

pub struct ContactInfoRepository;

impl ContactInfoRepository {
    /// The singleton row, if it has been created yet.
    pub async fn find_first(pool: &SqlitePool) -> Result<Option<ContactInfo>, DatabaseError> {
        let info = sqlx::query_as::<_, ContactInfo>(
            r#"
            SELECT id, phone, whatsapp, email, latitude, longitude, created_at, updated_at
            FROM contact_info
            ORDER BY id
            LIMIT 1
            "#,
        )
        .fetch_optional(pool)
        .await?;
        Ok(info)
    }

    pub async fn find_by_id(
        pool: &SqlitePool,
        id: i64,
    ) -> Result<Option<ContactInfo>, DatabaseError> {
        let info = sqlx::query_as::<_, ContactInfo>(
            r#"
            SELECT id, phone, whatsapp, email, latitude, longitude, created_at, updated_at
            FROM contact_info
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(info)
    }

    pub async fn create(
        tx: &mut Transaction<'_, Sqlite>,
        data: &NewContactInfo,
    ) -> Result<ContactInfo, DatabaseError> {
        let now = OffsetDateTime::now_utc();
        let info = sqlx::query_as::<_, ContactInfo>(
            r#"
            INSERT INTO contact_info (phone, whatsapp, email, latitude, longitude, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)
            RETURNING id, phone, whatsapp, email, latitude, longitude, created_at, updated_at
            "#,
        )
        .bind(&data.phone)
        .bind(&data.whatsapp)
        .bind(&data.email)
        .bind(data.latitude)
        .bind(data.longitude)
        .bind(now)
        .fetch_one(&mut **tx)
        .await?;
        Ok(info)
    }

    pub async fn update(
        tx: &mut Transaction<'_, Sqlite>,
        id: i64,
        data: &UpdateContactInfo,
    ) -> Result<ContactInfo, DatabaseError> {
        let info = sqlx::query_as::<_, ContactInfo>(
            r#"
            UPDATE contact_info
            SET phone = COALESCE(?1, phone),
                whatsapp = COALESCE(?2, whatsapp),
                email = COALESCE(?3, email),
                latitude = COALESCE(?4, latitude),
                longitude = COALESCE(?5, longitude),
                updated_at = ?6
            WHERE id = ?7
            RETURNING id, phone, whatsapp, email, latitude, longitude, created_at, updated_at
            "#,
        )
        .bind(&data.phone)
        .bind(&data.whatsapp)
        .bind(&data.email)
        .bind(data.latitude)
        .bind(data.longitude)
        .bind(OffsetDateTime::now_utc())
        .bind(id)
        .fetch_one(&mut **tx)
        .await?;
        Ok(info)
    }

    pub async fn delete(tx: &mut Transaction<'_, Sqlite>, id: i64) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM contact_info WHERE id = ?1")
            .bind(id)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }
}
