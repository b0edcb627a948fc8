use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fibm_core::{
    parse_index, parse_times, write_report, BenchmarkRunner, FibInt, PerformanceReport,
};

/// The program name recorded in performance reports.
pub const PROGRAM_NAME: &str = "fibm";

/// The integer width used for the working sequence.
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Width {
    /// 32-bit signed, wrapping on overflow.
    #[default]
    I32,
    /// 64-bit signed, wrapping on overflow.
    I64,
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "fibm",
    version,
    about = "Compute the n-th Fibonacci number `times` times and print the last result."
)]
pub struct Args {
    /// The Fibonacci index, with fib(0) = fib(1) = 1.
    #[arg(value_parser = parse_index, allow_negative_numbers = true)]
    pub n: u32,

    /// The number of repetitions. Values <= 0 print -1.
    #[arg(value_parser = parse_times, allow_negative_numbers = true)]
    pub times: i32,

    /// The integer width of the computation.
    #[arg(long, value_enum, default_value_t = Width::I32)]
    pub width: Width,

    /// Append a CSV performance report to this file.
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Extra positional values are accepted and ignored.
    #[arg(hide = true, num_args = 0.., allow_negative_numbers = true)]
    pub extra: Vec<String>,
}

/// Run the benchmark described by `args` and return the line to print.
pub fn run(args: &Args) -> Result<String> {
    let runner = BenchmarkRunner::new(args.n, args.times);
    match args.width {
        Width::I32 => run_with::<i32>(&runner, args),
        Width::I64 => run_with::<i64>(&runner, args),
    }
}

fn run_with<T: FibInt>(runner: &BenchmarkRunner, args: &Args) -> Result<String> {
    let outcome = runner.run::<T>();

    if let Some(path) = &args.report {
        let report = PerformanceReport::new(PROGRAM_NAME, runner.index, runner.times, &outcome);
        write_report(&report, path)
            .with_context(|| format!("while writing report to {}", path.display()))?;
    }

    Ok(outcome.result.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("fibm").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_run_defaults_to_i32() {
        let args = parse(&["10", "5"]);
        assert_eq!(args.width, Width::I32);
        assert_eq!(run(&args).unwrap(), "89");
    }

    #[test]
    fn test_run_zero_times_prints_sentinel() {
        assert_eq!(run(&parse(&["10", "0"])).unwrap(), "-1");
        assert_eq!(run(&parse(&["10", "-2"])).unwrap(), "-1");
    }

    #[test]
    fn test_run_wide() {
        assert_eq!(run(&parse(&["46", "1"])).unwrap(), "-1323752223");
        assert_eq!(run(&parse(&["46", "1", "--width", "i64"])).unwrap(), "2971215073");
    }

    #[test]
    fn test_missing_arguments() {
        assert!(Args::try_parse_from(["fibm"]).is_err());
        assert!(Args::try_parse_from(["fibm", "10"]).is_err());
    }

    #[test]
    fn test_extra_arguments_are_ignored() {
        let args = parse(&["10", "5", "7", "-1"]);
        assert_eq!(args.extra, ["7", "-1"]);
        assert_eq!(run(&args).unwrap(), "89");
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(Args::try_parse_from(["fibm", "ten", "1"]).is_err());
        assert!(Args::try_parse_from(["fibm", "10", "1.5"]).is_err());
        assert!(Args::try_parse_from(["fibm", "-1", "0"]).is_err());
    }

    #[test]
    fn test_run_writes_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");
        let args = parse(&["10", "3", "--report", path.to_str().unwrap()]);

        assert_eq!(run(&args).unwrap(), "89");
        let contents = std::fs::read_to_string(&path).unwrap();
        let row = contents.lines().nth(1).unwrap();
        assert!(row.starts_with("fibm,i32,10,3,89,3,"), "unexpected row: {row}");
    }
}
