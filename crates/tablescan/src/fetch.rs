use crate::{
    error::ScanError,
    predicate::Predicate,
    source::{Block, BlockRequest, RowSource},
    value::Value,
};
use std::collections::BTreeMap;

///
/// BlockFetcher
///
/// Thin adapter from driver state to one bounded source fetch: assembles
/// the request, invokes the capability, and enforces the block contract.
/// The correctness weight lives in the contract, not here.
///

pub(crate) struct BlockFetcher<'a, S: RowSource> {
    source: &'a S,
    filters: BTreeMap<String, Value>,
    limit: usize,
}

impl<'a, S: RowSource> BlockFetcher<'a, S> {
    pub(crate) const fn new(
        source: &'a S,
        filters: BTreeMap<String, Value>,
        limit: usize,
    ) -> Self {
        Self {
            source,
            filters,
            limit,
        }
    }

    pub(crate) fn fetch(&self, predicate: Predicate) -> Result<Block, ScanError> {
        let request = BlockRequest {
            predicate,
            filters: self.filters.clone(),
            limit: self.limit,
        };

        let block = self.source.fetch(&request)?;
        if block.len() > self.limit {
            return Err(ScanError::source_invariant(format!(
                "row source returned {} rows for a block of at most {}",
                block.len(),
                self.limit
            )));
        }

        Ok(block)
    }
}
