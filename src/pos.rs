use std::cmp::Ordering;

/// Offsets of the 3x3 block around a cell, row-major from the top-left
///
/// The center `(0, 0)` sits at index 4, which is the bit the rule table
/// reserves for the cell itself.
pub(crate) const BLOCK_OFFSETS: [Cell; 9] = [
    Cell::new(-1, -1),
    Cell::new(0, -1),
    Cell::new(1, -1),
    Cell::new(-1, 0),
    Cell::new(0, 0),
    Cell::new(1, 0),
    Cell::new(-1, 1),
    Cell::new(0, 1),
    Cell::new(1, 1),
];

/// A position on the unbounded grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}
impl Cell {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
    #[inline]
    pub fn zero() -> Self {
        Self { x: 0, y: 0 }
    }

    /// The 8 cells of the Moore neighborhood
    ///
    /// Neighbors that would fall outside of the `i64` range are skipped.
    pub fn neighbors(self) -> impl Iterator<Item = Cell> {
        BLOCK_OFFSETS
            .into_iter()
            .filter(|offset| *offset != Cell::zero())
            .filter_map(move |offset| self.checked_add(offset))
    }

    /// Whether `other` is one of the 8 cells around `self`
    pub fn is_neighbor(self, other: Cell) -> bool {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        self != other && dx <= 1 && dy <= 1
    }

    #[inline]
    pub fn checked_add(self, rhs: Cell) -> Option<Cell> {
        Some(Self {
            x: self.x.checked_add(rhs.x)?,
            y: self.y.checked_add(rhs.y)?,
        })
    }
}
impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}
impl From<(i64, i64)> for Cell {
    #[inline]
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}
impl PartialOrd for Cell {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Cell {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        // compare x coordinate first, then y coordinate
        Ord::cmp(&self.x, &other.x).then(Ord::cmp(&self.y, &other.y))
    }
}
impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn orders_by_x_then_y() {
        let mut cells = vec![Cell::new(2, 0), Cell::new(1, 5), Cell::new(1, -3)];
        cells.sort();

        assert_eq!(cells, vec![Cell::new(1, -3), Cell::new(1, 5), Cell::new(2, 0)]);
    }

    #[test]
    fn has_eight_distinct_neighbors() {
        let cell = Cell::new(-4, 7);
        let neighbors: HashSet<Cell> = cell.neighbors().collect();

        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&cell));
        assert!(neighbors.iter().all(|&n| cell.is_neighbor(n)));
    }

    #[test]
    fn neighbor_relation_is_symmetric() {
        let origin = Cell::new(3, -2);
        for x in -1..=7 {
            for y in -6..=2 {
                let other = Cell::new(x, y);
                assert_eq!(origin.is_neighbor(other), other.is_neighbor(origin));
                assert_eq!(
                    origin.neighbors().any(|n| n == other),
                    other.neighbors().any(|n| n == origin),
                );
            }
        }
    }

    #[test]
    fn neighbors_stop_at_the_edge_of_the_range() {
        let corner = Cell::new(i64::MAX, i64::MAX);

        assert_eq!(corner.neighbors().count(), 3);
    }

    #[test]
    fn checked_add_is_none_past_the_range() {
        let edge = Cell::new(i64::MIN, 0);

        assert_eq!(edge.checked_add(Cell::new(-1, 0)), None);
        assert_eq!(edge.checked_add(Cell::new(0, -1)), Some(Cell::new(i64::MIN, -1)));
        assert_eq!(edge.neighbors().count(), 5);
    }

    #[test]
    fn block_center_is_bit_four() {
        assert_eq!(BLOCK_OFFSETS[4], Cell::zero());
    }
}
