//! In-memory row source and table fixtures for the scan test suite.
//!
//! `MemSource` holds materialized rows in the table's total order and
//! applies the fetch contract literally: predicate, then filters, then
//! limit. Call accounting and failure injection let tests assert fetch
//! arithmetic and collaborator-failure propagation.

use crate::{
    error::FetchError,
    model::{ClusteringColumn, ColumnModel, TableModel},
    predicate::eval,
    row::Row,
    source::{Block, BlockRequest, RowSource},
};
use std::cell::Cell;

///
/// MemSource
///

pub(crate) struct MemSource {
    model: TableModel,
    rows: Vec<Row>,
    fetch_calls: Cell<usize>,
    fail_on_call: Cell<Option<usize>>,
}

impl MemSource {
    pub(crate) fn new(model: TableModel, mut rows: Vec<Row>) -> Self {
        rows.sort_by(|a, b| model.cmp_rows(a, b));

        Self {
            model,
            rows,
            fetch_calls: Cell::new(0),
            fail_on_call: Cell::new(None),
        }
    }

    pub(crate) const fn model(&self) -> &TableModel {
        &self.model
    }

    pub(crate) fn fetch_calls(&self) -> usize {
        self.fetch_calls.get()
    }

    /// Make the n-th fetch (1-based) fail with an injected error.
    pub(crate) fn fail_on_call(&self, call: usize) {
        self.fail_on_call.set(Some(call));
    }
}

impl RowSource for MemSource {
    fn fetch(&self, request: &BlockRequest) -> Result<Block, FetchError> {
        let call = self.fetch_calls.get() + 1;
        self.fetch_calls.set(call);

        if self.fail_on_call.get() == Some(call) {
            return Err(FetchError::message("injected row source failure"));
        }

        let rows: Vec<Row> = self
            .rows
            .iter()
            .filter(|row| eval::matches(&request.predicate, row))
            .filter(|row| {
                request
                    .filters
                    .iter()
                    .all(|(column, value)| row.get(column) == Some(value))
            })
            .take(request.limit)
            .cloned()
            .collect();

        Ok(Block(rows))
    }
}

///
/// FIXTURES
///
/// A simple table with one partition and one clustering column plus an
/// indexed text column, and a table with composite partition and
/// clustering keys where the middle clustering column is descending.
///

pub(crate) fn simple_model() -> TableModel {
    TableModel::new(
        "simple",
        vec!["p_key".to_string()],
        vec![ClusteringColumn::asc("c_key")],
        vec![ColumnModel::indexed("indexed_value"), ColumnModel::new("value")],
    )
    .expect("simple table model should validate")
}

pub(crate) fn simple_rows(partition_keys: i64, clustering_keys: i64) -> Vec<Row> {
    let mut rows = Vec::new();

    for p_key in 0..partition_keys {
        for c_key in 0..clustering_keys {
            let indexed_value = if c_key % 2 == 0 { "EVEN" } else { "ODD" };
            rows.push(
                Row::new()
                    .with("p_key", p_key)
                    .with("c_key", c_key)
                    .with("indexed_value", indexed_value)
                    .with("value", format!("{p_key}:{c_key}")),
            );
        }
    }

    rows
}

pub(crate) fn multi_key_model() -> TableModel {
    TableModel::new(
        "multi_key",
        vec!["p_key_a".to_string(), "p_key_b".to_string()],
        vec![
            ClusteringColumn::asc("c_key_a"),
            ClusteringColumn::desc("c_key_b"),
            ClusteringColumn::asc("c_key_c"),
        ],
        vec![ColumnModel::new("value")],
    )
    .expect("multi-key table model should validate")
}

/// 4 x 3 partitions, 5 x 2 x 3 clustering rows each: 360 rows total.
pub(crate) fn multi_key_rows() -> Vec<Row> {
    let mut rows = Vec::new();

    for p_key_a in 0..4i64 {
        for p_key_b in 0..3i64 {
            for c_key_a in 0..5i64 {
                for c_key_b in 0..2i64 {
                    for c_key_c in 0..3i64 {
                        rows.push(
                            Row::new()
                                .with("p_key_a", p_key_a)
                                .with("p_key_b", p_key_b)
                                .with("c_key_a", c_key_a)
                                .with("c_key_b", c_key_b)
                                .with("c_key_c", c_key_c)
                                .with(
                                    "value",
                                    format!(
                                        "{p_key_a}:{p_key_b}:{c_key_a}:{c_key_b}:{c_key_c}"
                                    ),
                                ),
                        );
                    }
                }
            }
        }
    }

    rows
}

/// Table with no clustering columns: one row per partition.
pub(crate) fn partition_only_model() -> TableModel {
    TableModel::new(
        "partition_only",
        vec!["p_key".to_string()],
        Vec::new(),
        vec![ColumnModel::new("value")],
    )
    .expect("partition-only table model should validate")
}

pub(crate) fn partition_only_rows(partition_keys: i64) -> Vec<Row> {
    (0..partition_keys)
        .map(|p_key| {
            Row::new()
                .with("p_key", p_key)
                .with("value", format!("{p_key}"))
        })
        .collect()
}
