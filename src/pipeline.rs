//! Accumulate/render cycle driver.
//!
//! A single-shot run is one cycle. Live mode repeats cycles against the same
//! grid, cleared each time, until the input reaches end-of-stream.

use std::io::{self, Read, Write};

use crate::config::ScopeConfig;
use crate::histogram::{Accumulator, Grid, GridError};
use crate::render::{ansi, Renderer};

/// Errors that can abort a run.
#[derive(Debug, thiserror::Error)]
pub enum ScopeError {
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ScopeError {
    /// True when the reader of our output went away (e.g. `vscope | head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, ScopeError::Io(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

/// Totals for a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames rendered.
    pub cycles: u64,
    /// Byte pairs counted across all cycles.
    pub pairs: u64,
}

/// Consume `reader` and render histograms to `out`.
///
/// The grid is allocated once. Each cycle clears it, fills it from the
/// stream, renders, and flushes. Only live mode runs more than one cycle, and
/// it stops as soon as a cycle reports end-of-stream; that last frame is drawn
/// without the cursor rewind so following output lands below it.
pub fn run<R: Read, W: Write>(
    reader: R,
    out: &mut W,
    config: &ScopeConfig,
) -> Result<RunSummary, ScopeError> {
    let mut grid = Grid::new(config.size)?;
    let mut accumulator = Accumulator::new(reader, config.byte_limit);
    let renderer = Renderer::new(config);
    let mut summary = RunSummary::default();

    loop {
        grid.clear();
        let cycle = accumulator.fill(&mut grid)?;
        summary.cycles += 1;
        summary.pairs += cycle.pairs;
        log::debug!(
            "cycle {}: {} pairs, {:?}",
            summary.cycles,
            cycle.pairs,
            cycle.status
        );

        let again = config.live && !cycle.ended();
        renderer.render(&grid, out, again)?;
        out.flush()?;

        if !again {
            break;
        }
    }

    log::info!(
        "input ended after {} pairs in {} cycle(s)",
        summary.pairs,
        summary.cycles
    );
    Ok(summary)
}

/// Set up the Ctrl+C handler.
///
/// Live mode spends most of its time between color escapes, so an interrupt
/// could leave the terminal tinted. The handler resets SGR state and exits
/// with the conventional SIGINT status.
pub fn install_interrupt_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| {
        let mut stdout = io::stdout();
        let _ = ansi::reset(&mut stdout);
        let _ = stdout.write_all(b"\n");
        let _ = stdout.flush();
        std::process::exit(130);
    })
}
