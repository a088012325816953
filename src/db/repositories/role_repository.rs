use sqlx::{Sqlite, SqlitePool, Transaction};
use time::OffsetDateTime;

use crate::db::error::DatabaseError;
use crate::db::models::{NewRole, Role, RolePermission, UpdateRole};

pub struct RoleRepository;

impl RoleRepository {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Role>, DatabaseError> {
        let roles =
            sqlx::query_as::<_, Role>("SELECT id, name, created_at FROM roles ORDER BY id")
                .fetch_all(pool)
                .await?;
        Ok(roles)
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Role>, DatabaseError> {
        let role =
            sqlx::query_as::<_, Role>("SELECT id, name, created_at FROM roles WHERE id = ?1")
                .bind(id)
                .fetch_optional(pool)
                .await?;
        Ok(role)
    }

    pub async fn create(pool: &SqlitePool, data: &NewRole) -> Result<Role, DatabaseError> {
        let role = sqlx::query_as::<_, Role>(
            r#"
            INSERT INTO roles (name, created_at)
            VALUES (?1, ?2)
            RETURNING id, name, created_at
            "#,
        )
        .bind(&data.name)
        .bind(OffsetDateTime::now_utc())
        .fetch_one(pool)
        .await
        .map_err(DatabaseError::from_write)?;
        Ok(role)
    }

    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        data: &UpdateRole,
    ) -> Result<Role, DatabaseError> {
        let role = sqlx::query_as::<_, Role>(
            r#"
            UPDATE roles
            SET name = COALESCE(?1, name)
            WHERE id = ?2
            RETURNING id, name, created_at
            "#,
        )
        .bind(&data.name)
        .bind(id)
        .fetch_one(pool)
        .await
        .map_err(DatabaseError::from_write)?;
        Ok(role)
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM roles WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    pub async fn list_permissions(
        pool: &SqlitePool,
        role_id: i64,
    ) -> Result<Vec<RolePermission>, DatabaseError> {
        let assignments = sqlx::query_as::<_, RolePermission>(
            r#"
            SELECT id, role_id, permission_id, created_at
            FROM role_permissions
            WHERE role_id = ?1
            ORDER BY id
            "#,
        )
        .bind(role_id)
        .fetch_all(pool)
        .await?;
        Ok(assignments)
    }

    /// Replace-set semantics: drop the role's current assignments and insert
    /// the new id set, all inside one transaction.
    pub async fn replace_permissions(
        tx: &mut Transaction<'_, Sqlite>,
        role_id: i64,
        permission_ids: &[i64],
    ) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM role_permissions WHERE role_id = ?1")
            .bind(role_id)
            .execute(&mut **tx)
            .await?;

        let now = OffsetDateTime::now_utc();
        for permission_id in permission_ids {
            sqlx::query(
                r#"
                INSERT INTO role_permissions (role_id, permission_id, created_at)
                VALUES (?1, ?2, ?3)
                ON CONFLICT (role_id, permission_id) DO NOTHING
                "#,
            )
            .bind(role_id)
            .bind(permission_id)
            .bind(now)
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }
}
