use sqlx::{Sqlite, SqlitePool, Transaction};
use time::OffsetDateTime;

use crate::db::error::DatabaseError;
use crate::db::models::{HomeSlider, NewHomeSlider, UpdateHomeSlider};

pub struct HomeSliderRepository;

impl HomeSliderRepository {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<HomeSlider>, DatabaseError> {
        let sliders = sqlx::query_as::<_, HomeSlider>(
            r#"
            SELECT id, image_url, cta_link, created_at, updated_at
            FROM home_sliders
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await?;
        Ok(sliders)
    }

    pub async fn find_by_id(
        pool: &SqlitePool,
        id: i64,
    ) -> Result<Option<HomeSlider>, DatabaseError> {
        let slider = sqlx::query_as::<_, HomeSlider>(
            r#"
            SELECT id, image_url, cta_link, created_at, updated_at
            FROM home_sliders
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(slider)
    }

    pub async fn create(
        tx: &mut Transaction<'_, Sqlite>,
        data: &NewHomeSlider,
    ) -> Result<HomeSlider, DatabaseError> {
        let now = OffsetDateTime::now_utc();
        let slider = sqlx::query_as::<_, HomeSlider>(
            r#"
            INSERT INTO home_sliders (image_url, cta_link, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?3)
            RETURNING id, image_url, cta_link, created_at, updated_at
            "#,
        )
        .bind(&data.image_url)
        .bind(&data.cta_link)
        .bind(now)
        .fetch_one(&mut **tx)
        .await?;
        Ok(slider)
    }

    pub async fn update(
        tx: &mut Transaction<'_, Sqlite>,
        id: i64,
        data: &UpdateHomeSlider,
    ) -> Result<HomeSlider, DatabaseError> {
        let slider = sqlx::query_as::<_, HomeSlider>(
            r#"
            UPDATE home_sliders
            SET image_url = COALESCE(?1, image_url),
                cta_link = COALESCE(?2, cta_link),
                updated_at = ?3
            WHERE id = ?4
            RETURNING id, image_url, cta_link, created_at, updated_at
            "#,
        )
        .bind(&data.image_url)
        .bind(&data.cta_link)
        .bind(OffsetDateTime::now_utc())
        .bind(id)
        .fetch_one(&mut **tx)
        .await?;
        Ok(slider)
    }

    pub async fn delete(tx: &mut Transaction<'_, Sqlite>, id: i64) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM home_sliders WHERE id = ?1")
            .bind(id)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }
}
