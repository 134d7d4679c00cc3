//! User persistence.

use crate::error::AppError;
use crate::model::{NewUser, User};
use sqlx::PgPool;

const COLUMNS: &str = "id, first_name, last_name, email_address, created_at, updated_at";

pub struct UserService;

impl UserService {
    pub async fn list(pool: &PgPool) -> Result<Vec<User>, AppError> {
        let sql = format!("SELECT {} FROM users ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, User>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn find(pool: &PgPool, id: i64) -> Result<Option<User>, AppError> {
        let sql = format!("SELECT {} FROM users WHERE id = $1", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Insert one user. A duplicate email surfaces as a validation failure.
    pub async fn create(pool: &PgPool, user: &NewUser) -> Result<User, AppError> {
        let sql = format!(
            "INSERT INTO users (first_name, last_name, email_address) VALUES ($1, $2, $3) RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, User>(&sql)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.email_address)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }
}
