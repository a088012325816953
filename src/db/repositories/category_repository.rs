use sqlx::{Sqlite, SqlitePool, Transaction};
use time::OffsetDateTime;

use crate::db::error::DatabaseError;
use crate::db::models::{Category, NewCategory, UpdateCategory};

pub struct CategoryRepository;

impl CategoryRepository {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Category>, DatabaseError> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, image_url, is_featured, created_at, updated_at
            FROM categories
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await?;
        Ok(categories)
    }

    /// Landing page selection: featured first, then by id, first five.
    pub async fn list_landing(pool: &SqlitePool) -> Result<Vec<Category>, DatabaseError> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, image_url, is_featured, created_at, updated_at
            FROM categories
            ORDER BY is_featured DESC, id
            LIMIT 5
            "#,
        )
        .fetch_all(pool)
        .await?;
        Ok(categories)
    }

    pub async fn find_by_id(
        pool: &SqlitePool,
        id: i64,
    ) -> Result<Option<Category>, DatabaseError> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, image_url, is_featured, created_at, updated_at
            FROM categories
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(category)
    }

    pub async fn create(
        tx: &mut Transaction<'_, Sqlite>,
        data: &NewCategory,
    ) -> Result<Category, DatabaseError> {
        let now = OffsetDateTime::now_utc();
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (image_url, is_featured, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?3)
            RETURNING id, image_url, is_featured, created_at, updated_at
            "#,
        )
        .bind(&data.image_url)
        .bind(data.is_featured.unwrap_or(false))
        .bind(now)
        .fetch_one(&mut **tx)
        .await?;
        Ok(category)
    }

    pub async fn update(
        tx: &mut Transaction<'_, Sqlite>,
        id: i64,
        data: &UpdateCategory,
    ) -> Result<Category, DatabaseError> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET image_url = COALESCE(?1, image_url),
                is_featured = COALESCE(?2, is_featured),
                updated_at = ?3
            WHERE id = ?4
            RETURNING id, image_url, is_featured, created_at, updated_at
            "#,
        )
        .bind(&data.image_url)
        .bind(data.is_featured)
        .bind(OffsetDateTime::now_utc())
        .bind(id)
        .fetch_one(&mut **tx)
        .await?;
        Ok(category)
    }

    pub async fn delete(tx: &mut Transaction<'_, Sqlite>, id: i64) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM categories WHERE id = ?1")
            .bind(id)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }
}
