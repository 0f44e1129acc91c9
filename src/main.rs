//! CLI entry point for the pixel recovery tool

use clap::Parser;
use pixel_recovery::io::cli::{Cli, FileProcessor};
use pixel_recovery::io::logging::setup_logging;

fn main() -> pixel_recovery::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.effective_log_level())?;
    let mut processor = FileProcessor::new(cli);
    processor.process()?;
    Ok(())
}
