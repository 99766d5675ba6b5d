use serde::{Deserialize, Serialize};

/// Primary key definition preserving column order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrimaryKey {
    pub columns: Vec<String>,
}

/// Unique constraint definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UniqueConstraint {
    pub columns: Vec<String>,
}

/// Foreign key definition preserving column ordering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForeignKey {
    pub columns: Vec<String>,
    pub referenced_table: String,
    pub referenced_columns: Vec<String>,
}

/// Table-level constraint definitions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Constraint {
    PrimaryKey(PrimaryKey),
    ForeignKey(ForeignKey),
    Unique(UniqueConstraint),
}

impl Constraint {
    pub fn primary_key(columns: &[&str]) -> Self {
        Constraint::PrimaryKey(PrimaryKey {
            columns: to_owned(columns),
        })
    }

    pub fn unique(columns: &[&str]) -> Self {
        Constraint::Unique(UniqueConstraint {
            columns: to_owned(columns),
        })
    }

    pub fn foreign_key(column: &str, referenced_table: &str, referenced_column: &str) -> Self {
        Constraint::ForeignKey(ForeignKey {
            columns: vec![column.to_string()],
            referenced_table: referenced_table.to_string(),
            referenced_columns: vec![referenced_column.to_string()],
        })
    }
}

fn to_owned(columns: &[&str]) -> Vec<String> {
    columns.iter().map(|column| column.to_string()).collect()
}
