use std::io::Write;

use anyhow::Result;
use clap::Parser;
use fibm_cli::{run, Args};
use fibm_core::utils::setup_logger;

fn main() -> Result<()> {
    setup_logger();

    let args = Args::parse();
    let line = run(&args)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{line}")?;
    stdout.flush()?;
    Ok(())
}
