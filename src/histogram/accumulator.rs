//! Byte-pair accumulation from a sequential stream.

use std::io::{self, Bytes, Read};
use std::num::NonZeroU64;

use super::grid::Grid;

/// Why an accumulation cycle stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamStatus {
    /// The input reached end-of-stream. No further cycles can produce data.
    Ended,
    /// The per-cycle pair limit was hit; more input may follow.
    LimitReached,
}

/// Outcome of a single [`Accumulator::fill`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycle {
    /// Number of byte pairs counted into the grid.
    pub pairs: u64,
    pub status: StreamStatus,
}

impl Cycle {
    pub fn ended(&self) -> bool {
        self.status == StreamStatus::Ended
    }
}

/// Reads bytes one at a time and counts consecutive pairs into a [`Grid`].
///
/// The limit, if any, is a window size per cycle rather than a total cap: a
/// cycle stopped by the limit leaves the rest of the stream for the next call.
pub struct Accumulator<R> {
    bytes: Bytes<R>,
    limit: Option<NonZeroU64>,
}

impl<R: Read> Accumulator<R> {
    pub fn new(reader: R, limit: Option<NonZeroU64>) -> Self {
        Self {
            bytes: reader.bytes(),
            limit,
        }
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        self.bytes.next().transpose()
    }

    /// Run one accumulation cycle into `grid`.
    ///
    /// The grid is not cleared here; callers reset it between cycles.
    ///
    /// The byte following a limit-triggered stop has already been read and is
    /// dropped, so the next cycle seeds from the byte after it.
    pub fn fill(&mut self, grid: &mut Grid) -> io::Result<Cycle> {
        let Some(mut last) = self.next_byte()? else {
            return Ok(Cycle {
                pairs: 0,
                status: StreamStatus::Ended,
            });
        };

        let mut pairs = 0u64;
        loop {
            let Some(current) = self.next_byte()? else {
                return Ok(Cycle {
                    pairs,
                    status: StreamStatus::Ended,
                });
            };

            if self.limit.is_some_and(|limit| pairs >= limit.get()) {
                return Ok(Cycle {
                    pairs,
                    status: StreamStatus::LimitReached,
                });
            }

            grid.record(last, current);
            pairs += 1;
            last = current;
        }
    }
}
