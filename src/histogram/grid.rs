//! Square counter grid indexed by byte-pair buckets.

/// Largest supported grid edge. One bucket per byte value.
pub const MAX_GRID_SIZE: u16 = 256;

/// Errors that can occur when allocating a grid.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("grid size must be between 1 and {max}, got {size}", max = MAX_GRID_SIZE)]
    InvalidSize { size: u16 },

    #[error("failed to allocate a {size}x{size} grid: {source}")]
    Allocation {
        size: u16,
        source: std::collections::TryReserveError,
    },
}

/// Map a byte value onto one of `size` buckets.
///
/// Computes `floor(size * v / 256)` in integer math, so the result is always
/// in `0..size` (for `size = 256`, `bucket(255) == 255`).
#[inline]
pub fn bucket(v: u8, size: u16) -> u16 {
    ((u32::from(size) * u32::from(v)) >> 8) as u16
}

/// An N×N matrix of pair counters.
///
/// Cell `(x, y)` counts pairs whose first byte falls in bucket `x` and whose
/// second byte falls in bucket `y`. Counters are unbounded (`u32`) and only
/// clamped to the displayable range when rendered, so thresholds above 255
/// still compare against true counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: u16,
    cells: Vec<u32>,
}

impl Grid {
    /// Allocate a zeroed grid with `size` buckets per axis.
    pub fn new(size: u16) -> Result<Self, GridError> {
        if size == 0 || size > MAX_GRID_SIZE {
            return Err(GridError::InvalidSize { size });
        }

        let len = usize::from(size) * usize::from(size);
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|source| GridError::Allocation { size, source })?;
        cells.resize(len, 0);

        Ok(Self { size, cells })
    }

    /// Number of buckets per axis.
    pub fn size(&self) -> u16 {
        self.size
    }

    /// Flat index of cell `(x, y)`. Shared by accumulation and rendering.
    #[inline]
    pub fn index(&self, x: u16, y: u16) -> usize {
        debug_assert!(x < self.size && y < self.size);
        usize::from(x) + usize::from(self.size) * usize::from(y)
    }

    /// Count one occurrence of the pair `(last, current)`.
    pub fn record(&mut self, last: u8, current: u8) {
        let i = self.index(bucket(last, self.size), bucket(current, self.size));
        self.cells[i] = self.cells[i].saturating_add(1);
    }

    /// Raw count stored at `(x, y)`.
    pub fn count(&self, x: u16, y: u16) -> u32 {
        self.cells[self.index(x, y)]
    }

    /// Counters of one row (fixed `y`), ordered by `x`.
    pub fn row(&self, y: u16) -> &[u32] {
        let start = self.index(0, y);
        &self.cells[start..start + usize::from(self.size)]
    }

    /// Sum of all counters.
    pub fn total(&self) -> u64 {
        self.cells.iter().map(|&c| u64::from(c)).sum()
    }

    /// Reset every counter to zero, keeping the allocation.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_stays_in_range_for_every_size() {
        for size in 1..=MAX_GRID_SIZE {
            for v in 0..=u8::MAX {
                let b = bucket(v, size);
                assert!(b < size, "bucket({v}, {size}) = {b}");
                assert_eq!(u32::from(b), u32::from(size) * u32::from(v) / 256);
            }
        }
    }

    #[test]
    fn test_bucket_full_resolution_is_identity() {
        assert_eq!(bucket(0, 256), 0);
        assert_eq!(bucket(255, 256), 255);
        assert_eq!(bucket(128, 256), 128);
    }

    #[test]
    fn test_bucket_halves() {
        assert_eq!(bucket(127, 2), 0);
        assert_eq!(bucket(128, 2), 1);
        assert_eq!(bucket(255, 1), 0);
    }

    #[test]
    fn test_new_rejects_out_of_range_sizes() {
        assert!(matches!(Grid::new(0), Err(GridError::InvalidSize { size: 0 })));
        assert!(matches!(
            Grid::new(257),
            Err(GridError::InvalidSize { size: 257 })
        ));
    }

    #[test]
    fn test_new_is_zeroed() {
        let grid = Grid::new(16).unwrap();
        assert_eq!(grid.size(), 16);
        assert_eq!(grid.total(), 0);
    }

    #[test]
    fn test_record_uses_last_as_x_and_current_as_y() {
        let mut grid = Grid::new(2).unwrap();
        grid.record(0x00, 0xff);
        assert_eq!(grid.count(0, 1), 1);
        assert_eq!(grid.count(1, 0), 0);
        assert_eq!(grid.row(1), &[1, 0]);
    }

    #[test]
    fn test_counts_exceed_255() {
        let mut grid = Grid::new(1).unwrap();
        for _ in 0..1000 {
            grid.record(1, 2);
        }
        assert_eq!(grid.count(0, 0), 1000);
    }

    #[test]
    fn test_clear_resets_counts() {
        let mut grid = Grid::new(4).unwrap();
        grid.record(10, 200);
        grid.record(200, 10);
        assert_eq!(grid.total(), 2);
        grid.clear();
        assert_eq!(grid.total(), 0);
        assert_eq!(grid.size(), 4);
    }
}
