use sqlx::{Sqlite, SqlitePool, Transaction};
use time::OffsetDateTime;

use crate::db::error::DatabaseError;
use crate::db::models::{NewProductImage, ProductImage, UpdateProductImage};

pub struct ProductImageRepository;

impl ProductImageRepository {
    pub async fn list_for_product(
        pool: &SqlitePool,
        product_id: i64,
    ) -> Result<Vec<ProductImage>, DatabaseError> {
        let images = sqlx::query_as::<_, ProductImage>(
            r#"
            SELECT id, product_id, url, alt_text, is_main, created_at
            FROM product_images
            WHERE product_id = ?1
            ORDER BY id
            "#,
        )
        .bind(product_id)
        .fetch_all(pool)
        .await?;
        Ok(images)
    }

    pub async fn find_by_id(
        pool: &SqlitePool,
        id: i64,
    ) -> Result<Option<ProductImage>, DatabaseError> {
        let image = sqlx::query_as::<_, ProductImage>(
            r#"
            SELECT id, product_id, url, alt_text, is_main, created_at
            FROM product_images
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(image)
    }

    /// A product has at most one main image; claiming the flag clears it on
    /// the product's other images within the same transaction.
    pub async fn create(
        tx: &mut Transaction<'_, Sqlite>,
        data: &NewProductImage,
    ) -> Result<ProductImage, DatabaseError> {
        let is_main = data.is_main.unwrap_or(false);
        if is_main {
            sqlx::query("UPDATE product_images SET is_main = 0 WHERE product_id = ?1")
                .bind(data.product_id)
                .execute(&mut **tx)
                .await?;
        }

        let image = sqlx::query_as::<_, ProductImage>(
            r#"
            INSERT INTO product_images (product_id, url, alt_text, is_main, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id, product_id, url, alt_text, is_main, created_at
            "#,
        )
        .bind(data.product_id)
        .bind(&data.url)
        .bind(&data.alt_text)
        .bind(is_main)
        .bind(OffsetDateTime::now_utc())
        .fetch_one(&mut **tx)
        .await?;
        Ok(image)
    }

    pub async fn update(
        tx: &mut Transaction<'_, Sqlite>,
        id: i64,
        product_id: i64,
        data: &UpdateProductImage,
    ) -> Result<ProductImage, DatabaseError> {
        if data.is_main == Some(true) {
            sqlx::query("UPDATE product_images SET is_main = 0 WHERE product_id = ?1 AND id != ?2")
                .bind(product_id)
                .bind(id)
                .execute(&mut **tx)
                .await?;
        }

        let image = sqlx::query_as::<_, ProductImage>(
            r#"
            UPDATE product_images
            SET url = COALESCE(?1, url),
                alt_text = COALESCE(?2, alt_text),
                is_main = COALESCE(?3, is_main)
            WHERE id = ?4
            RETURNING id, product_id, url, alt_text, is_main, created_at
            "#,
        )
        .bind(&data.url)
        .bind(&data.alt_text)
        .bind(data.is_main)
        .bind(id)
        .fetch_one(&mut **tx)
        .await?;
        Ok(image)
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM product_images WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
