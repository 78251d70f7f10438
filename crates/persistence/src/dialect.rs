//! SQL dialect rendering for the two backends.
//!
//! SQLite binds positional `?` placeholders and spells its conflict handling
//! as `INSERT OR REPLACE` / `INSERT OR IGNORE`. PostgreSQL binds numbered
//! `$n` placeholders and uses `ON CONFLICT` clauses. Callers above the
//! drivers never see either form.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// SQL dialect spoken by a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Embedded file-backed engine.
    Sqlite,
    /// Networked relational engine.
    Postgres,
}

impl Dialect {
    /// Short name used in log fields and metric labels.
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Sqlite => "sqlite",
            Dialect::Postgres => "postgres",
        }
    }

    /// Placeholder for the bind parameter at 1-based `index`.
    pub fn placeholder(&self, index: usize) -> String {
        match self {
            Dialect::Sqlite => "?".to_string(),
            Dialect::Postgres => format!("${}", index),
        }
    }

    /// Comma-separated placeholders for `count` parameters starting at `first`.
    pub fn placeholders(&self, first: usize, count: usize) -> String {
        (first..first + count)
            .map(|index| self.placeholder(index))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Boolean literal as the backend stores it.
    ///
    /// SQLite keeps booleans as integers.
    pub fn bool_literal(&self, value: bool) -> &'static str {
        match (self, value) {
            (Dialect::Sqlite, true) => "1",
            (Dialect::Sqlite, false) => "0",
            (Dialect::Postgres, true) => "TRUE",
            (Dialect::Postgres, false) => "FALSE",
        }
    }

    /// Case-insensitive pattern match operator.
    ///
    /// SQLite's `LIKE` already folds ASCII case.
    pub fn like_operator(&self) -> &'static str {
        match self {
            Dialect::Sqlite => "LIKE",
            Dialect::Postgres => "ILIKE",
        }
    }

    /// Plain insert that fails on a unique conflict.
    pub fn insert(&self, table: &str, columns: &[&str]) -> String {
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            table,
            columns.join(", "),
            self.placeholders(1, columns.len())
        )
    }

    /// Insert that replaces the existing row sharing `key`.
    pub fn upsert(&self, table: &str, key: &str, columns: &[&str]) -> String {
        match self {
            Dialect::Sqlite => format!(
                "INSERT OR REPLACE INTO {} ({}) VALUES ({})",
                table,
                columns.join(", "),
                self.placeholders(1, columns.len())
            ),
            Dialect::Postgres => {
                let assignments = columns
                    .iter()
                    .filter(|column| **column != key && **column != "created_at")
                    .map(|column| format!("{} = EXCLUDED.{}", column, column))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!(
                    "{} ON CONFLICT ({}) DO UPDATE SET {}",
                    self.insert(table, columns),
                    key,
                    assignments
                )
            }
        }
    }

    /// Insert that silently does nothing when any unique key already exists.
    pub fn insert_if_absent(&self, table: &str, columns: &[&str]) -> String {
        match self {
            Dialect::Sqlite => format!(
                "INSERT OR IGNORE INTO {} ({}) VALUES ({})",
                table,
                columns.join(", "),
                self.placeholders(1, columns.len())
            ),
            Dialect::Postgres => format!("{} ON CONFLICT DO NOTHING", self.insert(table, columns)),
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A value bound to a rendered statement.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Text(String),
    Integer(i64),
    Timestamp(DateTime<Utc>),
}

/// Ordered bind parameters that hand out dialect-correct placeholders.
#[derive(Debug, Clone)]
pub struct Params {
    dialect: Dialect,
    values: Vec<BindValue>,
}

impl Params {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            values: Vec::new(),
        }
    }

    /// Appends `value` and returns the placeholder that refers to it.
    pub fn push(&mut self, value: BindValue) -> String {
        self.values.push(value);
        self.dialect.placeholder(self.values.len())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_values(self) -> Vec<BindValue> {
        self.values
    }
}
