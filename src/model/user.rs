//! `users` table: names and a unique email address.

use super::{ConstraintKind, ConstraintSpec, FieldKind, FieldSpec, Rule, TableDef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const TABLE: TableDef = TableDef {
    name: "users",
    fields: &[
        FieldSpec {
            name: "firstName",
            column: "first_name",
            sql_type: "VARCHAR(255)",
            nullable: false,
            kind: FieldKind::Text,
            rules: &[
                Rule::Required("A first name is required"),
                Rule::NotEmpty("Please provide a first name"),
            ],
        },
        FieldSpec {
            name: "lastName",
            column: "last_name",
            sql_type: "VARCHAR(255)",
            nullable: false,
            kind: FieldKind::Text,
            rules: &[
                Rule::Required("A last name is required"),
                Rule::NotEmpty("Please provide a last name"),
            ],
        },
        FieldSpec {
            name: "emailAddress",
            column: "email_address",
            sql_type: "VARCHAR(255)",
            nullable: false,
            kind: FieldKind::Text,
            rules: &[
                Rule::Required("An email address is required"),
                Rule::NotEmpty("Please provide an email address"),
                Rule::Email("Please provide a valid email address"),
            ],
        },
    ],
    constraints: &[ConstraintSpec {
        name: "users_email_address_key",
        column: "email_address",
        kind: ConstraintKind::Unique,
        message: "The email address you entered already exists",
    }],
};

#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
}
