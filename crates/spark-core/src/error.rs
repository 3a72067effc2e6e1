// File: crates/spark-core/src/error.rs
// Summary: Contract-violation error taxonomy.

use thiserror::Error;

/// Caller errors surfaced synchronously at the offending call.
/// Degenerate inputs (zero-width domains, sparse buckets, short series) are
/// handled by documented fallbacks and never reach this type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    #[error("positions and values must have the same length ({positions} vs {values})")]
    LengthMismatch { positions: usize, values: usize },

    #[error("values array length ({got}) must match sector count ({expected})")]
    SectorCountMismatch { expected: usize, got: usize },
}
