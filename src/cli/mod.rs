//! Command-line interface definitions and helpers.
//!
//! This module contains CLI argument parsing and the numeric value parsers.

mod args;
mod parse;

pub use args::Args;
pub use parse::{parse_byte_count, parse_size};
