//! CLI entry point for the pixel jitter animation generator

use clap::Parser;
use pixeljitter::io::cli::{BatchProcessor, Cli};

fn main() -> pixeljitter::Result<()> {
    let cli = Cli::parse();
    let processor = BatchProcessor::new(cli)?;
    processor.process()?;
    Ok(())
}
