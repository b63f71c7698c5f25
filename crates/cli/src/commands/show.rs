//! Whole-tree display command.

use anyhow::Result;
use researcher_config::ResolvedConfig;

use crate::args::OutputFormat;
use crate::formatters::render_tree;

pub fn run(config: &ResolvedConfig, format: OutputFormat) -> Result<()> {
    println!("{}", render_tree(&config.redacted(), format)?);
    Ok(())
}
