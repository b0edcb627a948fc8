use std::num::ParseIntError;

use thiserror::Error;

/// Errors raised while preparing or recording a benchmark run.
#[derive(Debug, Error)]
pub enum FibmError {
    #[error("invalid integer {value:?} for <{name}>: {source}")]
    InvalidInteger {
        name: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("the Fibonacci index must be non-negative, got {0}")]
    NegativeIndex(i32),

    #[error("failed to write the report: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize the report: {0}")]
    Csv(#[from] csv::Error),
}
