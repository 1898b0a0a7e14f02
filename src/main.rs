//! incflat - flatten local `#include` directives into one stream
//!
//! incflat provides:
//! - Depth-first, pre-order inlining of resolvable includes
//! - Verbatim passthrough of includes that cannot be found
//! - Single emission of every file (diamond and cyclic includes)
//! - Configurable auxiliary include directories (CLI and incflat.toml)

use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
mod core;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
