use std::io::{self, BufWriter};

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use vscope::cli::Args;
use vscope::pipeline::{self, ScopeError};
use vscope::terminal;

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Grid size that fits the terminal attached to stdout.
fn probe_grid_size() -> u16 {
    let term = terminal::size();
    if term.is_none() {
        log::debug!("stdout is not a terminal, using full grid resolution");
    }
    terminal::default_grid_size(term)
}

fn run(args: &Args) -> Result<(), ScopeError> {
    let default_size = match args.size {
        Some(size) => size,
        None => probe_grid_size(),
    };

    let config = args.to_config(default_size)?;
    log::info!("configuration: {:?}", config);

    if config.live {
        if let Err(e) = pipeline::install_interrupt_handler() {
            log::warn!("Failed to install Ctrl+C handler: {}", e);
        }
    }

    let stdin = io::stdin().lock();
    let mut stdout = BufWriter::new(io::stdout());
    pipeline::run(stdin, &mut stdout, &config)?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(&args.log_level);

    if let Err(e) = run(&args) {
        if e.is_broken_pipe() {
            log::debug!("output closed early: {}", e);
            return;
        }
        eprintln!("Error: {}", e);
        if matches!(e, ScopeError::Config(_)) {
            eprintln!("Try 'vscope --help' for more information.");
        }
        std::process::exit(1);
    }
}
