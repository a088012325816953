use sqlx::{Sqlite, SqlitePool, Transaction};
use time::OffsetDateTime;

use crate::db::error::DatabaseError;
use crate::db::models::{NewProduct, Product, ProductWithMainImage, UpdateProduct};

pub struct ProductRepository;

impl ProductRepository {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Product>, DatabaseError> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, category_id, stock_quantity, is_active, is_featured, created_at, updated_at
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await?;
        Ok(products)
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Product>, DatabaseError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, category_id, stock_quantity, is_active, is_featured, created_at, updated_at
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(product)
    }

    /// Products of one category, each with its main image url when one is set.
    pub async fn list_by_category(
        pool: &SqlitePool,
        category_id: i64,
    ) -> Result<Vec<ProductWithMainImage>, DatabaseError> {
        let products = sqlx::query_as::<_, ProductWithMainImage>(
            r#"
            SELECT p.id, p.category_id, p.stock_quantity, p.is_active, p.is_featured,
                   i.url AS main_image, p.created_at, p.updated_at
            FROM products p
            LEFT JOIN product_images i ON i.product_id = p.id AND i.is_main = 1
            WHERE p.category_id = ?1
            ORDER BY p.id
            "#,
        )
        .bind(category_id)
        .fetch_all(pool)
        .await?;
        Ok(products)
    }

    pub async fn create(
        tx: &mut Transaction<'_, Sqlite>,
        data: &NewProduct,
    ) -> Result<Product, DatabaseError> {
        let now = OffsetDateTime::now_utc();
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (category_id, stock_quantity, is_active, is_featured, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?5)
            RETURNING id, category_id, stock_quantity, is_active, is_featured, created_at, updated_at
            "#,
        )
        .bind(data.category_id)
        .bind(data.stock_quantity.unwrap_or(0))
        .bind(data.is_active.unwrap_or(true))
        .bind(data.is_featured.unwrap_or(false))
        .bind(now)
        .fetch_one(&mut **tx)
        .await?;
        Ok(product)
    }

    pub async fn update(
        tx: &mut Transaction<'_, Sqlite>,
        id: i64,
        data: &UpdateProduct,
    ) -> Result<Product, DatabaseError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET category_id = COALESCE(?1, category_id),
                stock_quantity = COALESCE(?2, stock_quantity),
                is_active = COALESCE(?3, is_active),
                is_featured = COALESCE(?4, is_featured),
                updated_at = ?5
            WHERE id = ?6
            RETURNING id, category_id, stock_quantity, is_active, is_featured, created_at, updated_at
            "#,
        )
        .bind(data.category_id)
        .bind(data.stock_quantity)
        .bind(data.is_active)
        .bind(data.is_featured)
        .bind(OffsetDateTime::now_utc())
        .bind(id)
        .fetch_one(&mut **tx)
        .await?;
        Ok(product)
    }

    pub async fn delete(tx: &mut Transaction<'_, Sqlite>, id: i64) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }
}
