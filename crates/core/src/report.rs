use std::{fs::OpenOptions, path::Path};

use csv::WriterBuilder;
use serde::Serialize;

use crate::{BenchmarkOutcome, FibInt, FibmError};

/// The performance report of a single benchmark run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceReport {
    /// The program that was benchmarked.
    pub program: String,

    /// The integer width of the working sequence.
    pub width: String,

    /// The Fibonacci index.
    pub n: u32,

    /// The requested repeat count.
    pub times: i32,

    /// The printed result.
    pub result: String,

    /// The number of `fib` calls performed.
    pub iterations: u64,

    /// The duration of the loop in seconds.
    pub duration_secs: f64,

    /// The measured throughput.
    pub calls_per_second: f64,
}

impl PerformanceReport {
    pub fn new<T: FibInt>(
        program: &str,
        n: u32,
        times: i32,
        outcome: &BenchmarkOutcome<T>,
    ) -> Self {
        Self {
            program: program.to_string(),
            width: T::NAME.to_string(),
            n,
            times,
            result: outcome.result.to_string(),
            iterations: outcome.iterations,
            duration_secs: outcome.elapsed.as_secs_f64(),
            calls_per_second: outcome.calls_per_second(),
        }
    }
}

const HEADER: [&str; 8] =
    ["program", "width", "n", "times", "result", "iterations", "duration_secs", "calls_per_second"];

/// Append `report` as a CSV row to the file at `path`.
pub fn write_report(report: &PerformanceReport, path: impl AsRef<Path>) -> Result<(), FibmError> {
    let path = path.as_ref();
    // The header is written only once per file.
    let write_header = std::fs::metadata(path).map_or(true, |meta| meta.len() == 0);

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);

    if write_header {
        writer.write_record(HEADER)?;
    }
    writer.serialize(report)?;
    writer.flush()?;

    tracing::debug!(path = %path.display(), "wrote performance report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn report(result: i32) -> PerformanceReport {
        let outcome = BenchmarkOutcome { result, iterations: 4, elapsed: Duration::from_secs(2) };
        PerformanceReport::new("fibm", 10, 4, &outcome)
    }

    #[test]
    fn test_report_fields() {
        let report = report(89);
        assert_eq!(report.width, "i32");
        assert_eq!(report.result, "89");
        assert_eq!(report.duration_secs, 2.0);
        assert_eq!(report.calls_per_second, 2.0);
    }

    #[test]
    fn test_write_report_appends_with_single_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bench.csv");

        write_report(&report(89), &path).unwrap();
        write_report(&report(-1), &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HEADER.join(","));
        assert_eq!(lines[1], "fibm,i32,10,4,89,4,2.0,2.0");
        assert_eq!(lines[2], "fibm,i32,10,4,-1,4,2.0,2.0");
    }

    #[test]
    fn test_write_report_to_empty_file_writes_header() {
        let file = tempfile::NamedTempFile::new().unwrap();
        write_report(&report(89), file.path()).unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert!(contents.starts_with("program,width,"));
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn test_write_report_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("bench.csv");
        assert!(matches!(write_report(&report(89), &path), Err(FibmError::Io(_))));
    }
}
