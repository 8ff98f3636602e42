//! Cursor-paginated full-table scan driver for partitioned, wide-column
//! tables: bounded block fetches through a caller-supplied row source,
//! resumable range predicates built from the last-seen key, exactly-once
//! row delivery at any blocksize.

pub mod cursor;
pub mod error;
pub mod model;
pub mod obs;
pub mod predicate;
pub mod row;
pub mod scan;
pub mod source;
pub mod value;

pub(crate) mod fetch;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, fetch plumbing, or metrics surfaces are re-exported here.
///

pub mod prelude {
    pub use crate::{
        model::{ClusteringColumn, ColumnModel, Direction, TableModel},
        row::Row,
        scan::{Scan, ScanOptions},
        source::{Block, BlockRequest, RowSource},
        value::Value,
    };
}
