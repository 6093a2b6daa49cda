use std::sync::OnceLock;

/// The number of arrangements for a 3x3 block of cells
const PERMUTATIONS: usize = 1 << 9;
/// Bit of the block mask that holds the cell itself
pub(super) const CENTER: usize = 0b000_010_000;

type LifeIndex = [bool; PERMUTATIONS];

/// Returns a Singleton lookup table for the B3/S23 ruleset
///
/// Equivalent to calling [`generate_life_index`] once and storing the result
pub(super) fn life_index() -> &'static LifeIndex {
    static CELL: OnceLock<LifeIndex> = OnceLock::new();
    CELL.get_or_init(generate_life_index)
}

/// Creates a lookup table for the B3/S23 ruleset
///
/// The table is indexed by a 9-bit number representing a cell and its neighbors,
/// laid out row-major from the top-left. The center cell is the middle-most bit, `1 << 4`.
///
/// Returns whether the center cell is alive in the next generation
pub(super) fn generate_life_index() -> LifeIndex {
    let mut indices = [false; PERMUTATIONS];
    for (i, next) in indices.iter_mut().enumerate() {
        let neighbors = (i & !CENTER).count_ones();
        let alive = i & CENTER != 0;
        *next = survives(alive, neighbors);
    }
    indices
}

/// B3/S23: a live cell survives on 2 or 3 neighbors, a dead cell is born on exactly 3
#[inline]
pub(super) fn survives(alive: bool, neighbors: u32) -> bool {
    matches!((alive, neighbors), (true, 2) | (_, 3))
}
