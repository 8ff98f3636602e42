use crate::{error::FetchError, predicate::Predicate, row::Row, value::Value};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// BlockRequest
///
/// One bounded, filtered block fetch: the single capability the scan
/// driver needs from a storage engine.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct BlockRequest {
    /// Range position within the table's total order; `Predicate::True`
    /// for the first block of a scan.
    pub predicate: Predicate,
    /// Equality constraints ANDed with the predicate, identical for every
    /// fetch of one scan.
    pub filters: BTreeMap<String, Value>,
    /// Upper bound on returned rows.
    pub limit: usize,
}

///
/// Block
///
/// Ordered rows returned by one fetch. A block shorter than the
/// requested limit is the exhaustion signal.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Block(pub Vec<Row>);

impl Block {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Row>> for Block {
    fn from(rows: Vec<Row>) -> Self {
        Self(rows)
    }
}

///
/// RowSource
///
/// Narrow fetch capability implemented by storage collaborators. The
/// instance is caller-supplied with a caller-managed lifecycle; the core
/// holds no connection state.
///
/// Contract:
/// - rows sorted in the table's total order: stable partition order,
///   then clustering columns under their declared directions
/// - at most `limit` rows returned
/// - `filters` applied as equality constraints ANDed with `predicate`
/// - failures returned unchanged; retry and timeout policy live on the
///   collaborator's side of this seam
///

pub trait RowSource {
    fn fetch(&self, request: &BlockRequest) -> Result<Block, FetchError>;
}
