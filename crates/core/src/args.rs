//! Parsing of the two positional values, `n` and `times`.
//!
//! Both are read as 32-bit signed decimal integers. Leading or trailing whitespace is rejected.

use crate::FibmError;

fn parse_i32(name: &'static str, value: &str) -> Result<i32, FibmError> {
    value.parse::<i32>().map_err(|source| FibmError::InvalidInteger {
        name,
        value: value.to_string(),
        source,
    })
}

/// Parse the Fibonacci index. Negative indices are rejected.
pub fn parse_index(value: &str) -> Result<u32, FibmError> {
    let n = parse_i32("n", value)?;
    u32::try_from(n).map_err(|_| FibmError::NegativeIndex(n))
}

/// Parse the repeat count. Values `<= 0` are accepted and run no iterations.
pub fn parse_times(value: &str) -> Result<i32, FibmError> {
    parse_i32("times", value)
}
