//! Request validation from model field rules.

use crate::error::AppError;
use crate::model::{FieldSpec, Rule};
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

pub struct RequestValidator;

impl RequestValidator {
    /// Validate body against per-field rules. Every field is checked and the first
    /// failing rule of each field contributes one message, in field order.
    pub fn validate(body: &Value, fields: &[FieldSpec]) -> Result<(), AppError> {
        let map = body
            .as_object()
            .ok_or_else(|| AppError::bad_request("body must be a JSON object"))?;
        let errors: Vec<String> = fields
            .iter()
            .filter_map(|field| check_field(field, map.get(field.name)))
            .collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation { errors })
        }
    }
}

fn check_field(field: &FieldSpec, value: Option<&Value>) -> Option<String> {
    let value = match value {
        None | Some(Value::Null) => {
            return field.rules.iter().find_map(|rule| match rule {
                Rule::Required(message) => Some(message.to_string()),
                _ => None,
            });
        }
        Some(v) => v,
    };
    if !field.kind.accepts(value) {
        return Some(format!("{} must be {}", field.name, field.kind.describe()));
    }
    field
        .rules
        .iter()
        .find_map(|rule| check_rule(rule, value))
        .or_else(|| check_column_length(field, value))
}

/// Values the column itself cannot hold are rejected here, not by the database.
fn check_column_length(field: &FieldSpec, value: &Value) -> Option<String> {
    let max = field.column_max_length()?;
    let s = value.as_str()?;
    (s.chars().count() > max).then(|| format!("{} must be at most {} characters", field.name, max))
}

fn check_rule(rule: &Rule, value: &Value) -> Option<String> {
    let text = value.as_str();
    let failed = match rule {
        Rule::Required(_) => false,
        Rule::NotEmpty(_) => text.is_some_and(|s| s.trim().is_empty()),
        Rule::Email(_) => text.is_some_and(|s| !s.is_empty() && !email_pattern().is_match(s)),
        Rule::MaxLength(max, _) => text.is_some_and(|s| s.chars().count() > *max),
    };
    if !failed {
        return None;
    }
    let message = match rule {
        Rule::Required(m) | Rule::NotEmpty(m) | Rule::Email(m) | Rule::MaxLength(_, m) => m,
    };
    Some(message.to_string())
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap_or_else(|e| panic!("email pattern: {e}"))
    })
}
