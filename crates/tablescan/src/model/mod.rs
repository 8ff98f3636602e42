
use crate::{row::Row, value::Value};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error as ThisError;

///
/// Direction
///
/// Declared sort direction of one clustering column. Partition columns
/// carry no direction; the partition key is an opaque ordering unit.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

///
/// ClusteringColumn
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ClusteringColumn {
    pub name: String,
    pub direction: Direction,
}

impl ClusteringColumn {
    #[must_use]
    pub fn new(name: impl Into<String>, direction: Direction) -> Self {
        Self {
            name: name.into(),
            direction,
        }
    }

    #[must_use]
    pub fn asc(name: impl Into<String>) -> Self {
        Self::new(name, Direction::Asc)
    }

    #[must_use]
    pub fn desc(name: impl Into<String>) -> Self {
        Self::new(name, Direction::Desc)
    }
}

///
/// ColumnModel
///
/// Non-key column surface entry. Key columns are declared separately and
/// are always filterable.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ColumnModel {
    pub name: String,
    pub indexed: bool,
}

impl ColumnModel {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            indexed: false,
        }
    }

    #[must_use]
    pub fn indexed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            indexed: true,
        }
    }
}

///
/// ModelError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ModelError {
    #[error("table '{table}' declares no partition-key column")]
    EmptyPartitionKey { table: String },

    #[error("table '{table}' declares column '{column}' more than once")]
    DuplicateColumn { table: String, column: String },
}

///
/// TableModel
///
/// Immutable runtime descriptor of one table's key model and filterable
/// column surface: ordered partition-key columns, ordered clustering-key
/// columns with per-column directions, and the non-key columns.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TableModel {
    name: String,
    partition_key: Vec<String>,
    clustering_key: Vec<ClusteringColumn>,
    columns: Vec<ColumnModel>,
}

impl TableModel {
    pub fn new(
        name: impl Into<String>,
        partition_key: Vec<String>,
        clustering_key: Vec<ClusteringColumn>,
        columns: Vec<ColumnModel>,
    ) -> Result<Self, ModelError> {
        let name = name.into();

        if partition_key.is_empty() {
            return Err(ModelError::EmptyPartitionKey { table: name });
        }

        let mut seen: Vec<&str> = Vec::new();
        let all = partition_key
            .iter()
            .map(String::as_str)
            .chain(clustering_key.iter().map(|c| c.name.as_str()))
            .chain(columns.iter().map(|c| c.name.as_str()));
        for column in all {
            if seen.contains(&column) {
                return Err(ModelError::DuplicateColumn {
                    table: name,
                    column: column.to_string(),
                });
            }
            seen.push(column);
        }

        Ok(Self {
            name,
            partition_key,
            clustering_key,
            columns,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ordered partition-key column names.
    #[must_use]
    pub fn partition_key(&self) -> &[String] {
        &self.partition_key
    }

    /// Ordered clustering-key columns with their declared directions.
    #[must_use]
    pub fn clustering_key(&self) -> &[ClusteringColumn] {
        &self.clustering_key
    }

    #[must_use]
    pub fn columns(&self) -> &[ColumnModel] {
        &self.columns
    }

    #[must_use]
    pub fn has_column(&self, column: &str) -> bool {
        self.is_key_column(column) || self.columns.iter().any(|c| c.name == column)
    }

    /// Key columns are always indexed; non-key columns per their flag.
    #[must_use]
    pub fn is_indexed(&self, column: &str) -> bool {
        self.is_key_column(column) || self.columns.iter().any(|c| c.name == column && c.indexed)
    }

    fn is_key_column(&self, column: &str) -> bool {
        self.partition_key.iter().any(|c| c == column)
            || self.clustering_key.iter().any(|c| c.name == column)
    }

    /// Table total order: partition tuple in the reference partition order
    /// (canonical value order, column-wise), then clustering columns under
    /// their declared directions. Absent cells read as `Null`.
    #[must_use]
    pub fn cmp_rows(&self, left: &Row, right: &Row) -> Ordering {
        for column in &self.partition_key {
            let ord = Value::canonical_cmp(left.get_or_null(column), right.get_or_null(column));
            if ord != Ordering::Equal {
                return ord;
            }
        }

        for column in &self.clustering_key {
            let ord = Value::canonical_cmp(
                left.get_or_null(&column.name),
                right.get_or_null(&column.name),
            );
            let ord = match column.direction {
                Direction::Asc => ord,
                Direction::Desc => ord.reverse(),
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }

        Ordering::Equal
    }
}
