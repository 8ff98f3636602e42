use thiserror::Error as ThisError;

///
/// ConfigError
///
/// Rejected scan configuration. Surfaced by scan construction, before any
/// fetch is issued; a scan with a configuration error emits no rows.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ConfigError {
    #[error("blocksize must be at least 1")]
    ZeroBlocksize,

    #[error("filter column '{column}' does not exist on table '{table}'")]
    UnknownFilterColumn { table: String, column: String },

    #[error("filter column '{column}' on table '{table}' is not indexed")]
    UnindexedFilterColumn { table: String, column: String },
}

///
/// FetchError
///
/// Collaborator failure from the row source, carried unchanged. The core
/// does no retry; rows emitted before the failure stand.
///

#[derive(Debug, ThisError)]
#[error(transparent)]
pub struct FetchError(Box<dyn std::error::Error + Send + Sync>);

impl FetchError {
    /// Wrap a collaborator error for propagation through the scan.
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self(source.into())
    }

    /// Convenience constructor for sources without a structured error type.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        let message: String = message.into();

        Self(message.into())
    }
}

///
/// ScanError
///
/// Top-level scan failure. The variant identifies the failing phase:
/// configuration (before any fetch), an internal consistency fault
/// (driver bug, never retried), or a propagated fetch failure.
///

#[derive(Debug, ThisError)]
pub enum ScanError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("fetch: {0}")]
    Fetch(#[from] FetchError),

    #[error("invariant violated: {0}")]
    Invariant(String),
}

impl ScanError {
    /// Cursor/key-model consistency fault.
    pub(crate) fn cursor_invariant(message: impl Into<String>) -> Self {
        Self::Invariant(message.into())
    }

    /// Fetched row violating the key-model contract.
    pub(crate) fn row_invariant(message: impl Into<String>) -> Self {
        Self::Invariant(message.into())
    }

    /// Row source violating the block contract.
    pub(crate) fn source_invariant(message: impl Into<String>) -> Self {
        Self::Invariant(message.into())
    }
}

///
/// TESTS
///
