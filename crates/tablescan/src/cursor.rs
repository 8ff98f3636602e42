use crate::{error::ScanError, model::TableModel, row::Row, value::Value};
use serde::{Deserialize, Serialize};

///
/// Cursor
///
/// Full key tuple of the last emitted row, in declared column order.
/// Absent at scan start, replaced after every drained row, and never
/// persisted beyond one scan's lifetime.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Cursor {
    partition: Vec<Value>,
    clustering: Vec<Value>,
}

impl Cursor {
    /// Extract the key tuple from a fetched row.
    ///
    /// A conforming source populates every key-model column; a missing
    /// key column is a contract violation, not a user error.
    pub fn from_row(model: &TableModel, row: &Row) -> Result<Self, ScanError> {
        let mut partition = Vec::with_capacity(model.partition_key().len());
        for column in model.partition_key() {
            partition.push(Self::key_cell(model, row, column)?);
        }

        let mut clustering = Vec::with_capacity(model.clustering_key().len());
        for column in model.clustering_key() {
            clustering.push(Self::key_cell(model, row, &column.name)?);
        }

        Ok(Self {
            partition,
            clustering,
        })
    }

    fn key_cell(model: &TableModel, row: &Row, column: &str) -> Result<Value, ScanError> {
        row.get(column).cloned().ok_or_else(|| {
            ScanError::row_invariant(format!(
                "row from table '{}' is missing key column '{column}'",
                model.name()
            ))
        })
    }

    /// Partition-key values in declared order.
    #[must_use]
    pub fn partition(&self) -> &[Value] {
        &self.partition
    }

    /// Clustering-key values in declared order.
    #[must_use]
    pub fn clustering(&self) -> &[Value] {
        &self.clustering
    }
}
