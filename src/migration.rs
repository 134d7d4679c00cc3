//! Schema synchronization: DDL for every model table, created in dependency order.

use crate::error::AppError;
use crate::model::{ConstraintKind, TableDef, TABLES};
use sqlx::PgPool;
use std::str::FromStr;

/// How tables are reconciled with the model definitions at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SyncMode {
    /// `CREATE TABLE IF NOT EXISTS`; existing data is kept.
    #[default]
    Create,
    /// Drop every model table, then create. Development only.
    Force,
}

impl FromStr for SyncMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "create" => Ok(SyncMode::Create),
            "force" => Ok(SyncMode::Force),
            other => Err(format!("unknown sync mode '{}'", other)),
        }
    }
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// CREATE TABLE for one model: surrogate id, declared columns, timestamps, then named constraints.
pub fn create_table_sql(table: &TableDef) -> String {
    let mut col_defs: Vec<String> = vec![format!("{} BIGSERIAL PRIMARY KEY", quote("id"))];
    for field in table.fields {
        let mut def = format!("{} {}", quote(field.column), field.sql_type);
        if !field.nullable {
            def.push_str(" NOT NULL");
        }
        col_defs.push(def);
    }
    for name in ["created_at", "updated_at"] {
        col_defs.push(format!("{} TIMESTAMPTZ NOT NULL DEFAULT NOW()", quote(name)));
    }
    for c in table.constraints {
        let def = match c.kind {
            ConstraintKind::Unique => format!(
                "CONSTRAINT {} UNIQUE ({})",
                quote(c.name),
                quote(c.column)
            ),
            ConstraintKind::ForeignKey {
                table: target,
                column,
                on_delete,
            } => format!(
                "CONSTRAINT {} FOREIGN KEY ({}) REFERENCES {} ({}) ON DELETE {}",
                quote(c.name),
                quote(c.column),
                quote(target),
                quote(column),
                on_delete
            ),
        };
        col_defs.push(def);
    }
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n  {}\n)",
        quote(table.name),
        col_defs.join(",\n  ")
    )
}

/// Statements for a full sync, in execution order.
pub fn sync_statements(mode: SyncMode) -> Vec<String> {
    let mut statements = Vec::new();
    if mode == SyncMode::Force {
        for table in TABLES.iter().rev() {
            statements.push(format!("DROP TABLE IF EXISTS {} CASCADE", quote(table.name)));
        }
    }
    statements.extend(TABLES.iter().map(|t| create_table_sql(t)));
    statements
}

/// Reconcile model tables with the database in one transaction.
pub async fn sync_schema(pool: &PgPool, mode: SyncMode) -> Result<(), AppError> {
    if mode == SyncMode::Force {
        tracing::warn!("dropping and recreating all model tables");
    }
    let mut tx = pool.begin().await?;
    for sql in sync_statements(mode) {
        tracing::debug!(sql = %sql, "schema sync");
        sqlx::query(&sql).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    tracing::info!(?mode, tables = TABLES.len(), "schema synchronized");
    Ok(())
}
