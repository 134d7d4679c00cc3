//! Entity definitions: columns, field validation rules, and named constraints.
//! Schema sync and request validation both read these tables.

pub mod course;
pub mod user;

use crate::error::AppError;
use crate::service::RequestValidator;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub use course::{Course, CourseInput};
pub use user::{NewUser, User};

/// JSON type a field accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
}

impl FieldKind {
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            FieldKind::Text => value.is_string(),
            FieldKind::Integer => value.is_i64(),
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            FieldKind::Text => "a string",
            FieldKind::Integer => "an integer",
        }
    }
}

/// One validation rule; the payload is the client-facing message.
#[derive(Clone, Copy, Debug)]
pub enum Rule {
    Required(&'static str),
    NotEmpty(&'static str),
    Email(&'static str),
    MaxLength(usize, &'static str),
}

#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    /// Key in request and response bodies.
    pub name: &'static str,
    pub column: &'static str,
    pub sql_type: &'static str,
    pub nullable: bool,
    pub kind: FieldKind,
    pub rules: &'static [Rule],
}

impl FieldSpec {
    /// Character limit declared by a `VARCHAR(n)` column type.
    pub fn column_max_length(&self) -> Option<usize> {
        let upper = self.sql_type.trim().to_ascii_uppercase();
        let inner = upper
            .strip_prefix("VARCHAR(")
            .or_else(|| upper.strip_prefix("CHARACTER VARYING("))?
            .strip_suffix(')')?;
        inner.trim().parse().ok()
    }
}

#[derive(Clone, Copy, Debug)]
pub enum ConstraintKind {
    Unique,
    ForeignKey {
        table: &'static str,
        column: &'static str,
        on_delete: &'static str,
    },
}

#[derive(Clone, Copy, Debug)]
pub struct ConstraintSpec {
    pub name: &'static str,
    pub column: &'static str,
    pub kind: ConstraintKind,
    /// Reported when the database rejects a write under this constraint.
    pub message: &'static str,
}

#[derive(Debug)]
pub struct TableDef {
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
    pub constraints: &'static [ConstraintSpec],
}

impl TableDef {
    /// Validate a request body against this table's rules, then deserialize it.
    pub fn build<T: DeserializeOwned>(&self, body: Value) -> Result<T, AppError> {
        RequestValidator::validate(&body, self.fields)?;
        serde_json::from_value(body).map_err(|e| AppError::bad_request(e.to_string()))
    }
}

/// All tables in dependency order (referenced tables first).
pub const TABLES: &[&TableDef] = &[&user::TABLE, &course::TABLE];

/// Client-facing message for a named database constraint.
pub fn constraint_message(name: &str) -> Option<&'static str> {
    TABLES
        .iter()
        .flat_map(|t| t.constraints.iter())
        .find(|c| c.name == name)
        .map(|c| c.message)
}
