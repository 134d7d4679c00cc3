//! `courses` table, each row owned by a user.

use super::{ConstraintKind, ConstraintSpec, FieldKind, FieldSpec, Rule, TableDef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const TABLE: TableDef = TableDef {
    name: "courses",
    fields: &[
        FieldSpec {
            name: "title",
            column: "title",
            sql_type: "VARCHAR(255)",
            nullable: false,
            kind: FieldKind::Text,
            rules: &[
                Rule::Required("A title is required"),
                Rule::NotEmpty("Please provide a title"),
                Rule::MaxLength(255, "A title must be at most 255 characters"),
            ],
        },
        FieldSpec {
            name: "description",
            column: "description",
            sql_type: "TEXT",
            nullable: false,
            kind: FieldKind::Text,
            rules: &[
                Rule::Required("A description is required"),
                Rule::NotEmpty("Please provide a description"),
            ],
        },
        FieldSpec {
            name: "estimatedTime",
            column: "estimated_time",
            sql_type: "VARCHAR(255)",
            nullable: true,
            kind: FieldKind::Text,
            rules: &[],
        },
        FieldSpec {
            name: "materialsNeeded",
            column: "materials_needed",
            sql_type: "TEXT",
            nullable: true,
            kind: FieldKind::Text,
            rules: &[],
        },
        FieldSpec {
            name: "userId",
            column: "user_id",
            sql_type: "BIGINT",
            nullable: false,
            kind: FieldKind::Integer,
            rules: &[Rule::Required("A user id is required")],
        },
    ],
    constraints: &[ConstraintSpec {
        name: "courses_user_id_fkey",
        column: "user_id",
        kind: ConstraintKind::ForeignKey {
            table: "users",
            column: "id",
            on_delete: "CASCADE",
        },
        message: "userId must reference an existing user",
    }],
};

#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body for both create and full update.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseInput {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub estimated_time: Option<String>,
    #[serde(default)]
    pub materials_needed: Option<String>,
    pub user_id: i64,
}
