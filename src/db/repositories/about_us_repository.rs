use sqlx::{Sqlite, SqlitePool, Transaction};
use time::OffsetDateTime;

use crate::db::error::DatabaseError;
use crate::db::models::{AboutUs, NewAboutUs, UpdateAboutUs};

pub struct AboutUsRepository;

impl AboutUsRepository {
    /// The singleton row, if it has been created yet.
    pub async fn find_first(pool: &SqlitePool) -> Result<Option<AboutUs>, DatabaseError> {
        let about = sqlx::query_as::<_, AboutUs>(
            "SELECT id, image_url, created_at, updated_at FROM about_us ORDER BY id LIMIT 1",
        )
        .fetch_optional(pool)
        .await?;
        Ok(about)
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<AboutUs>, DatabaseError> {
        let about = sqlx::query_as::<_, AboutUs>(
            "SELECT id, image_url, created_at, updated_at FROM about_us WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(about)
    }

    pub async fn create(
        tx: &mut Transaction<'_, Sqlite>,
        data: &NewAboutUs,
    ) -> Result<AboutUs, DatabaseError> {
        let now = OffsetDateTime::now_utc();
        let about = sqlx::query_as::<_, AboutUs>(
            r#"
            INSERT INTO about_us (image_url, created_at, updated_at)
            VALUES (?1, ?2, ?2)
            RETURNING id, image_url, created_at, updated_at
            "#,
        )
        .bind(&data.image_url)
        .bind(now)
        .fetch_one(&mut **tx)
        .await?;
        Ok(about)
    }

    pub async fn update(
        tx: &mut Transaction<'_, Sqlite>,
        id: i64,
        data: &UpdateAboutUs,
    ) -> Result<AboutUs, DatabaseError> {
        let about = sqlx::query_as::<_, AboutUs>(
            r#"
            UPDATE about_us
            SET image_url = COALESCE(?1, image_url),
                updated_at = ?2
            WHERE id = ?3
            RETURNING id, image_url, created_at, updated_at
            "#,
        )
        .bind(&data.image_url)
        .bind(OffsetDateTime::now_utc())
        .bind(id)
        .fetch_one(&mut **tx)
        .await?;
        Ok(about)
    }

    pub async fn delete(tx: &mut Transaction<'_, Sqlite>, id: i64) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM about_us WHERE id = ?1")
            .bind(id)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }
}
