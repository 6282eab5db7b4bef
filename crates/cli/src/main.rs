//! Trace-driven cache simulator CLI.
//!
//! This binary replays an address trace against a set-associative LRU cache. It performs:
//! 1. **Argument parsing:** Cache geometry, trace file, and optional overrides.
//! 2. **Configuration:** Optional JSON config, with command-line values taking precedence.
//! 3. **Run:** Writes one `<address> : HIT|MISS` line per trace address to the output file.
//!
//! Exit status is 0 on success and 1 on any usage, configuration or I/O error.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cachesim_core::config::{CacheConfig, Config};
use cachesim_core::sim;

#[derive(Parser, Debug)]
#[command(
    name = "cachesim",
    author,
    version,
    about = "Trace-driven set-associative LRU cache simulator",
    long_about = "Replay a trace of memory addresses against a set-associative cache with LRU replacement \
                  and record HIT or MISS for every address.\n\n\
                  The trace holds whitespace-separated unsigned decimal addresses; reading stops at the \
                  first token that is not a number.\n\n\
                  Examples:\n  cachesim 4 1 trace.txt\n  cachesim 64 4 trace.txt --output run.log --max-addresses 1000"
)]
struct Cli {
    /// Total number of cache entries (lines).
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    num_entries: u64,

    /// Ways per set; must divide the number of entries.
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    associativity: u64,

    /// Address trace to replay.
    trace_file: PathBuf,

    /// Verdict log to create [default: cache_sim_output].
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Stop after this many addresses; the truncation is reported on stderr.
    #[arg(long)]
    max_addresses: Option<usize>,

    /// JSON configuration file for trace and output settings; the cache
    /// geometry always comes from the positional arguments.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    /// Builds the run configuration: JSON file (if any), then command-line overrides.
    ///
    /// The positional geometry is required, so it always replaces the file's
    /// `cache` section.
    fn into_config(self) -> Result<(Config, PathBuf), cachesim_core::common::ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::from_json_file(path)?,
            None => Config::default(),
        };
        config.cache = CacheConfig::new(self.num_entries, self.associativity);
        if let Some(output) = self.output {
            config.output.path = output;
        }
        if self.max_addresses.is_some() {
            config.trace.max_addresses = self.max_addresses;
        }
        Ok((config, self.trace_file))
    }
}

fn main() {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            eprintln!();
            eprintln!("Usage:");
            eprintln!("   cachesim <num_entries> <associativity> <trace_file>");
            process::exit(1);
        }
        Err(e) => e.exit(),
    };

    let (config, trace_file) = match cli.into_config() {
        Ok(parts) => parts,
        Err(e) => fail(&e),
    };

    if let Err(e) = sim::run(&config, &trace_file) {
        fail(&e);
    }
}

/// Reports a fatal error on stderr and exits with status 1.
fn fail(e: &dyn std::error::Error) -> ! {
    eprintln!("Error: {e}");
    process::exit(1);
}

/// Installs the stderr log subscriber; `RUST_LOG` overrides the `warn` default.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
