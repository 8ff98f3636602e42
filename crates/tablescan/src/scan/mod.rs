
use crate::{
    cursor::Cursor,
    error::{ConfigError, ScanError},
    fetch::BlockFetcher,
    model::TableModel,
    obs::sink::{MetricsEvent, MetricsSink, NOOP_SINK},
    predicate::{self, Predicate},
    row::Row,
    source::RowSource,
    value::Value,
};
use std::collections::BTreeMap;

///
/// Scan driver
///
/// Pull-based full-table iteration: the first block is fetched without a
/// cursor predicate, every subsequent block resumes strictly after the
/// last drained row's key, and a block shorter than the requested
/// blocksize exhausts the scan. Memory stays bounded at one block.
///

/// Rows requested per block when the caller does not override it.
pub const DEFAULT_BLOCKSIZE: usize = 500;

///
/// ScanOptions
///

#[derive(Clone, Debug)]
pub struct ScanOptions {
    blocksize: usize,
    filters: BTreeMap<String, Value>,
}

impl ScanOptions {
    #[must_use]
    pub fn new() -> Self {
        Self {
            blocksize: DEFAULT_BLOCKSIZE,
            filters: BTreeMap::new(),
        }
    }

    #[must_use]
    pub const fn with_blocksize(mut self, blocksize: usize) -> Self {
        self.blocksize = blocksize;
        self
    }

    /// Add one equality filter on an indexed column. Filters apply
    /// identically to every block fetch for the scan's lifetime.
    #[must_use]
    pub fn with_filter(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.insert(column.into(), value.into());
        self
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::new()
    }
}

///
/// ScanState
///
/// FETCHING issues one block request; DRAINING yields the block's rows;
/// EXHAUSTED is terminal. A yielded error also parks the scan in
/// EXHAUSTED: it cannot resume past a failure.
///

enum ScanState {
    Fetching,
    Draining {
        rows: std::vec::IntoIter<Row>,
        full: bool,
    },
    Exhausted,
}

///
/// Scan
///
/// Lazy, forward-only, finite row sequence over one table. Restartable
/// only by constructing a new scan; one instance per consumer.
///

pub struct Scan<'a, S: RowSource> {
    model: &'a TableModel,
    fetcher: BlockFetcher<'a, S>,
    blocksize: usize,
    cursor: Option<Cursor>,
    state: ScanState,
    sink: &'a dyn MetricsSink,
    blocks_fetched: u64,
    rows_emitted: u64,
}

impl<S: RowSource> std::fmt::Debug for Scan<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scan")
            .field("blocksize", &self.blocksize)
            .field("blocks_fetched", &self.blocks_fetched)
            .field("rows_emitted", &self.rows_emitted)
            .finish_non_exhaustive()
    }
}

impl<'a, S: RowSource> Scan<'a, S> {
    /// Validate the configuration and stage the scan.
    ///
    /// Fails before any fetch is issued: a zero blocksize and filters on
    /// unknown or unindexed columns are configuration errors with no
    /// partial results.
    pub fn new(
        source: &'a S,
        model: &'a TableModel,
        options: ScanOptions,
    ) -> Result<Self, ScanError> {
        if options.blocksize == 0 {
            return Err(ConfigError::ZeroBlocksize.into());
        }

        for column in options.filters.keys() {
            if !model.has_column(column) {
                return Err(ConfigError::UnknownFilterColumn {
                    table: model.name().to_string(),
                    column: column.clone(),
                }
                .into());
            }
            if !model.is_indexed(column) {
                return Err(ConfigError::UnindexedFilterColumn {
                    table: model.name().to_string(),
                    column: column.clone(),
                }
                .into());
            }
        }

        Ok(Self {
            model,
            fetcher: BlockFetcher::new(source, options.filters, options.blocksize),
            blocksize: options.blocksize,
            cursor: None,
            state: ScanState::Fetching,
            sink: &NOOP_SINK,
            blocks_fetched: 0,
            rows_emitted: 0,
        })
    }

    /// Install a caller-supplied metrics sink.
    #[must_use]
    pub fn with_metrics_sink(mut self, sink: &'a dyn MetricsSink) -> Self {
        self.sink = sink;
        self
    }

    fn next_predicate(&self) -> Result<Predicate, ScanError> {
        match &self.cursor {
            None => Ok(Predicate::True),
            Some(cursor) => predicate::after(self.model, cursor),
        }
    }

    fn fetch_block(&mut self) -> Result<(), ScanError> {
        let predicate = self.next_predicate()?;
        let block = self.fetcher.fetch(predicate)?;
        let full = block.len() == self.blocksize;

        self.blocks_fetched += 1;
        self.sink.record(MetricsEvent::BlockFetched { rows: block.len() });

        self.state = ScanState::Draining {
            rows: block.0.into_iter(),
            full,
        };

        Ok(())
    }
}

impl<S: RowSource> Iterator for Scan<'_, S> {
    type Item = Result<Row, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.state {
                ScanState::Exhausted => return None,

                ScanState::Fetching => {
                    if let Err(err) = self.fetch_block() {
                        self.state = ScanState::Exhausted;
                        return Some(Err(err));
                    }
                }

                ScanState::Draining { ref mut rows, full } => {
                    if let Some(row) = rows.next() {
                        match Cursor::from_row(self.model, &row) {
                            Ok(cursor) => {
                                self.cursor = Some(cursor);
                                self.rows_emitted += 1;
                                return Some(Ok(row));
                            }
                            Err(err) => {
                                self.state = ScanState::Exhausted;
                                return Some(Err(err));
                            }
                        }
                    }

                    // Block drained: a full block may have more behind it,
                    // a short block is the exhaustion signal.
                    if full {
                        self.state = ScanState::Fetching;
                    } else {
                        self.sink.record(MetricsEvent::ScanExhausted {
                            blocks: self.blocks_fetched,
                            rows: self.rows_emitted,
                        });
                        self.state = ScanState::Exhausted;
                        return None;
                    }
                }
            }
        }
    }
}
