//! Course persistence.

use crate::error::AppError;
use crate::model::{Course, CourseInput};
use sqlx::PgPool;

const COLUMNS: &str =
    "id, title, description, estimated_time, materials_needed, user_id, created_at, updated_at";

pub struct CourseService;

impl CourseService {
    pub async fn list(pool: &PgPool) -> Result<Vec<Course>, AppError> {
        let sql = format!("SELECT {} FROM courses ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Course>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn find(pool: &PgPool, id: i64) -> Result<Option<Course>, AppError> {
        let sql = format!("SELECT {} FROM courses WHERE id = $1", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Course>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    pub async fn create(pool: &PgPool, input: &CourseInput) -> Result<Course, AppError> {
        let sql = format!(
            "INSERT INTO courses (title, description, estimated_time, materials_needed, user_id) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Course>(&sql)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.estimated_time)
            .bind(&input.materials_needed)
            .bind(input.user_id)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// Replace every writable column. Returns None when no row has this id.
    pub async fn update(pool: &PgPool, id: i64, input: &CourseInput) -> Result<Option<Course>, AppError> {
        let sql = format!(
            "UPDATE courses SET title = $1, description = $2, estimated_time = $3, \
             materials_needed = $4, user_id = $5, updated_at = NOW() WHERE id = $6 RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Course>(&sql)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.estimated_time)
            .bind(&input.materials_needed)
            .bind(input.user_id)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Returns false when no row has this id.
    pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, AppError> {
        tracing::debug!(id, "delete course");
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
