//! CLI module - Command-line interface definition and handler

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::{self, Config};
use crate::core::includer::{FlattenStats, Includer};

/// incflat - flatten local #include directives into a single stream.
#[derive(Parser, Debug)]
#[command(name = "incflat")]
#[command(
    author,
    version,
    about,
    long_about = r#"incflat reads FILE and writes it to stdout with every resolvable
`#include` directive replaced by the (recursively flattened) content of the
included file. Each file is emitted at most once; cyclic includes terminate.

A directive is a line starting with exactly `#include ` (no leading
whitespace, lowercase, one space). Targets are looked up in the including
file's directory first, then in each include directory in order. Directives
whose target cannot be found (e.g. `#include <vector>`) are kept verbatim.

Examples:
    incflat main.cpp > submission.cpp
    incflat -I ~/lib/spcppl main.cpp
    incflat --config bundle.toml --stats main.cpp
"#
)]
pub struct Cli {
    /// Root file to flatten.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Additional include directory (repeatable, searched in order).
    #[arg(
        short = 'I',
        long = "include-dir",
        value_name = "DIR",
        long_help = "Additional directory to search for include targets. May be given\n\
several times; directories are searched in the order given, after the\n\
directory of the including file and before any config file directories."
    )]
    pub include_dirs: Vec<PathBuf>,

    /// Config file listing include directories.
    #[arg(
        short,
        long,
        value_name = "FILE",
        conflicts_with = "no_config",
        long_help = "Read `include_dirs` from this TOML file instead of ./incflat.toml.\n\n\
Example:\n\
  include_dirs = [\"../spcppl\", \"/opt/include\"]\n\n\
Relative entries are resolved against the config file's directory."
    )]
    pub config: Option<PathBuf>,

    /// Do not load ./incflat.toml.
    #[arg(long)]
    pub no_config: bool,

    /// Print flattening statistics on stderr.
    #[arg(
        long,
        long_help = "Print a summary (files, inlined and passed-through directives,\n\
skipped repeats, bytes written) to stderr after a successful run."
    )]
    pub stats: bool,

    /// Verbose mode (-v info, -vv debug, -vvv trace).
    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        conflicts_with = "quiet",
        long_help = "Increase diagnostic output on stderr. Repeat for more detail:\n\
-v reports the run summary, -vv every resolved or passed-through include,\n\
-vvv also skipped repeats. RUST_LOG is honored as well."
    )]
    pub verbose: u8,

    /// Quiet mode (errors only).
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    fn init_tracing(&self) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match (self.quiet, self.verbose) {
            (true, _) => tracing::Level::ERROR,
            (false, 0) => tracing::Level::WARN,
            (false, 1) => tracing::Level::INFO,
            (false, 2) => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }

    fn load_config(&self, cwd: &Path) -> Result<Option<Config>> {
        if let Some(path) = &self.config {
            let path = cwd.join(path);
            let config = Config::load(&path)?;
            tracing::info!(path = %path.display(), dirs = ?config.include_dirs, "loaded config");
            return Ok(Some(config));
        }
        if self.no_config {
            return Ok(None);
        }
        let config = Config::load_project(cwd)?;
        if let Some(config) = &config {
            tracing::info!(
                path = %cwd.join(config::PROJECT_CONFIG_FILE).display(),
                dirs = ?config.include_dirs,
                "loaded project config"
            );
        }
        Ok(config)
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    cli.init_tracing();

    let cwd = std::env::current_dir().context("Could not determine current directory")?;
    let config = cli.load_config(&cwd)?;
    let search = config::search_paths(&cli.include_dirs, &cwd, config.as_ref());
    let includer = Includer::new(search);
    tracing::debug!(dirs = ?includer.search_paths().dirs(), "include search paths");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = includer.flatten(&cli.file, &mut out);
    // Partial output stays emitted even when the run fails
    let flushed = out.flush();

    let stats = result.with_context(|| format!("Failed to flatten '{}'", cli.file.display()))?;
    flushed.context("Failed to write output")?;

    tracing::info!(
        files = stats.files,
        inlined = stats.inlined,
        passed_through = stats.passed_through,
        skipped = stats.skipped,
        "flattening complete"
    );

    if cli.stats {
        print_stats(&stats);
    }

    Ok(())
}

fn print_stats(stats: &FlattenStats) {
    eprintln!("Flatten Statistics:");
    eprintln!("   Files: {}", stats.files);
    eprintln!("   Inlined includes: {}", stats.inlined);
    eprintln!("   Passed through: {}", stats.passed_through);
    eprintln!("   Skipped repeats: {}", stats.skipped);
    eprintln!("   Bytes written: {}", stats.bytes_written);
}
