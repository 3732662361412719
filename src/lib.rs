//! vscope library crate.
//!
//! Builds a 2D histogram of consecutive byte pairs from a stream and renders
//! it as a hex grid, a truecolor heatmap, or a PGM image.

pub mod cli;
pub mod config;
pub mod histogram;
pub mod pipeline;
pub mod render;
pub mod terminal;

pub use config::{ColorMode, ConfigError, OutputMode, ScopeConfig};
pub use pipeline::{run, RunSummary, ScopeError};
