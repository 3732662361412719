//! Byte-pair histogram accumulation.
//!
//! Each pair of consecutive input bytes `(last, current)` is mapped to a
//! cell of an N×N [`Grid`]: `x = bucket(last)`, `y = bucket(current)`.

mod accumulator;
mod grid;

pub use accumulator::{Accumulator, Cycle, StreamStatus};
pub use grid::{bucket, Grid, GridError, MAX_GRID_SIZE};
