//! Cell values.
//!
//! The grid stores plain integers: `0` is empty, a power of two ≥ 2 is a
//! tile, and [`BLOCKED`] marks a cell that is permanently unusable. Blocked
//! cells only appear in preset layouts; normal play never produces them.

/// A single grid cell.
pub type Cell = i64;

/// Empty cell.
pub const EMPTY: Cell = 0;

/// Permanently blocked cell.
pub const BLOCKED: Cell = -1;

/// True for an ordinary tile (a power of two ≥ 2).
#[must_use]
pub const fn is_tile(value: Cell) -> bool {
    value >= 2 && (value & (value - 1)) == 0
}

/// True if `value` may legally appear on a board.
#[must_use]
pub const fn is_valid(value: Cell) -> bool {
    value == EMPTY || value == BLOCKED || is_tile(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_tile() {
        for v in [2, 4, 8, 1024, 65536, 1 << 40] {
            assert!(is_tile(v), "{v} should be a tile");
        }
        for v in [EMPTY, BLOCKED, 1, 3, 6, 12, -2, -4] {
            assert!(!is_tile(v), "{v} should not be a tile");
        }
    }

    #[test]
    fn test_is_valid() {
        assert!(is_valid(EMPTY));
        assert!(is_valid(BLOCKED));
        assert!(is_valid(2048));
        assert!(!is_valid(1));
        assert!(!is_valid(-8));
        assert!(!is_valid(100));
    }
}
