//! Core of the `fibm` micro-benchmark.
//!
//! [`fib`] builds the n-th Fibonacci number bottom-up in a fresh working sequence and
//! [`BenchmarkRunner`] calls it a configurable number of times to produce a stable workload.

pub mod args;
pub mod error;
pub mod fib;
pub mod report;
pub mod runner;
pub mod utils;

pub use args::{parse_index, parse_times};
pub use error::FibmError;
pub use fib::{fib, FibInt};
pub use report::{write_report, PerformanceReport};
pub use runner::{BenchmarkOutcome, BenchmarkRunner};
