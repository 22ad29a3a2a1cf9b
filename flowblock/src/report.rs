use std::time::SystemTime;

use crate::{BlockId, BlockMeta, Error, Label};

/// A non-fatal fault published on a block's error route.
///
/// Hosts subscribe through [`BlockHandle::errors`](crate::BlockHandle::errors)
/// to log or count faults. The block has already abandoned the event that
/// caused it and carries on with the next one.
#[derive(Debug)]
pub struct ErrorReport {
    block_id: BlockId,
    kind: &'static str,
    timestamp: u64,
    error: Error,
}

impl ErrorReport {
    pub fn new(meta: &BlockMeta, error: Error) -> Self {
        Self {
            block_id: meta.id(),
            kind: meta.kind(),
            timestamp: SystemTime::now()
                .duration_since(SystemTime::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or_default(),
            error,
        }
    }

    pub fn block_id(&self) -> BlockId {
        self.block_id
    }

    /// Kind of the reporting block.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Timestamp in nanoseconds since Unix epoch (u64 truncation).
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    pub fn error(&self) -> &Error {
        &self.error
    }

    /// Variant name of the reported error, e.g. `"Transport"`.
    pub fn label(&self) -> std::borrow::Cow<'static, str> {
        self.error.label()
    }
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{:x}: {}", self.kind, self.block_id, self.error)
    }
}
