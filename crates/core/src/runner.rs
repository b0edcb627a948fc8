use std::{
    hint::black_box,
    time::{Duration, Instant},
};

use crate::{fib, FibInt};

/// Repeats [`fib`] a fixed number of times, keeping only the last result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkRunner {
    /// The Fibonacci index.
    pub index: u32,
    /// The repeat count. Values `<= 0` run no iterations.
    pub times: i32,
}

/// The result of a [`BenchmarkRunner::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkOutcome<T> {
    /// The value of the last iteration, or [`FibInt::SENTINEL`] if none ran.
    pub result: T,
    pub iterations: u64,
    /// Wall-clock time spent in the loop.
    pub elapsed: Duration,
}

impl<T> BenchmarkOutcome<T> {
    /// The number of `fib` calls per second, or zero if nothing was timed.
    pub fn calls_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.iterations as f64 / secs
        } else {
            0.0
        }
    }
}

impl BenchmarkRunner {
    pub const fn new(index: u32, times: i32) -> Self {
        Self { index, times }
    }

    /// The number of iterations the loop will execute.
    pub fn iterations(&self) -> u64 {
        self.times.max(0) as u64
    }

    pub fn run<T: FibInt>(&self) -> BenchmarkOutcome<T> {
        let iterations = self.iterations();
        let span =
            tracing::info_span!("benchmark", n = self.index, times = self.times, width = T::NAME);
        let _guard = span.enter();

        let mut result = T::SENTINEL;
        let start = Instant::now();
        for _ in 0..iterations {
            result = black_box(fib::<T>(black_box(self.index)));
        }
        let elapsed = start.elapsed();

        let outcome = BenchmarkOutcome { result, iterations, elapsed };
        tracing::debug!(
            %result,
            iterations,
            elapsed_secs = elapsed.as_secs_f64(),
            calls_per_second = outcome.calls_per_second(),
            "benchmark finished"
        );
        outcome
    }
}
