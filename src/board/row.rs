//! Single-row primitives.
//!
//! Every directional move reduces to sliding rows toward index 0. The board
//! gets the other three directions by reversing and transposing first.

use smallvec::SmallVec;

use crate::core::cell::{Cell, EMPTY};

/// Row buffer. Stays on the stack for boards up to 8 wide.
pub type Row = SmallVec<[Cell; 8]>;

/// Pack the non-zero cells of `row` to the left, keeping their order, and pad
/// with zeros to the original length.
///
/// Blocked cells count as non-zero here and slide like tiles.
///
/// ```
/// use tile_2048::board::compress;
///
/// assert_eq!(compress(&[0, 2, 0, 4]).as_slice(), &[2, 4, 0, 0]);
/// ```
#[must_use]
pub fn compress(row: &[Cell]) -> Row {
    let mut packed: Row = row.iter().copied().filter(|&v| v != EMPTY).collect();
    packed.resize(row.len(), EMPTY);
    packed
}

/// Merge equal neighbours in one left-to-right pass.
///
/// For each `i`, if `row[i] > 0` and `row[i] == row[i + 1]`, `row[i]` doubles
/// and `row[i + 1]` becomes empty. A freshly doubled cell is not compared again
/// in the same pass. A pair whose double would overflow `Cell` stays put.
/// Returns the sum of the doubled values.
pub fn merge(row: &mut [Cell]) -> u64 {
    let mut gained = 0u64;
    for i in 1..row.len() {
        let left = row[i - 1];
        if left <= 0 || left != row[i] {
            continue;
        }
        let Some(doubled) = left.checked_mul(2) else {
            continue;
        };
        row[i - 1] = doubled;
        row[i] = EMPTY;
        gained = gained.saturating_add(doubled as u64);
    }
    gained
}

/// Slide a row toward index 0 in place: compress, merge, compress.
///
/// Blocked cells are ordinary non-zero values here. They slide into empty
/// space but never merge. Returns whether any cell changed and the points won.
pub fn slide_left(row: &mut [Cell]) -> (bool, u64) {
    let mut packed = compress(row);
    let gained = merge(&mut packed);
    let packed = compress(&packed);
    let changed = packed.as_slice() != &*row;
    row.copy_from_slice(&packed);
    (changed, gained)
}
