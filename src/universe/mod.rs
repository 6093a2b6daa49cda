mod rule;

use crate::pos::{BLOCK_OFFSETS, Cell};
use log::{debug, trace};
use rayon::prelude::*;
use std::collections::HashSet;

/// A Game of Life generation on an unbounded grid
///
/// Only live cells are stored. Each generation is computed from the cells
/// around the current live cells, so the grid never has to be materialized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Universe {
    alive: HashSet<Cell>,
}

impl Universe {
    #[inline]
    pub fn new(alive: HashSet<Cell>) -> Self {
        Self { alive }
    }

    #[inline]
    pub fn from_alive<I: IntoIterator<Item = Cell>>(alive: I) -> Self {
        Self::new(alive.into_iter().collect())
    }

    /// Advances to the next generation
    pub fn advance(&mut self) {
        let candidates = self.candidates();
        let next: HashSet<Cell> = candidates
            .into_iter()
            .filter(|&cell| self.next_cell_state(cell))
            .collect();
        self.replace(next);
    }

    /// Advances to the next generation, classifying candidates on the rayon pool
    ///
    /// Produces the same generation as [`Universe::advance`].
    pub fn advance_parallel(&mut self) {
        if self.alive.is_empty() {
            return;
        }

        let candidates = self.candidates();
        let next: HashSet<Cell> = candidates
            .into_par_iter()
            .filter(|&cell| self.next_cell_state(cell))
            .collect();
        self.replace(next);
    }

    /// Every cell that can be alive next generation: the live cells and their neighbors
    fn candidates(&self) -> HashSet<Cell> {
        let mut candidates = HashSet::with_capacity(self.alive.len() * 9);
        for &cell in &self.alive {
            candidates.insert(cell);
            candidates.extend(cell.neighbors());
        }
        trace!(
            "{} candidates for {} live cells",
            candidates.len(),
            self.alive.len()
        );
        candidates
    }

    /// Bit-grid of the 3x3 block centered on `cell`, read from the current generation
    fn block_mask(&self, cell: Cell) -> usize {
        BLOCK_OFFSETS
            .iter()
            .enumerate()
            .filter_map(|(bit, &offset)| cell.checked_add(offset).map(|pos| (bit, pos)))
            .filter(|(_, pos)| self.alive.contains(pos))
            .fold(0, |grid, (bit, _)| grid | (1 << bit))
    }

    #[inline]
    fn next_cell_state(&self, cell: Cell) -> bool {
        rule::life_index()[self.block_mask(cell)]
    }

    fn replace(&mut self, next: HashSet<Cell>) {
        debug!("generation: {} -> {} alive", self.alive.len(), next.len());
        self.alive = next;
    }

    /// The current generation
    #[inline]
    pub fn live_cells(&self) -> &HashSet<Cell> {
        &self.alive
    }

    /// The current generation in ascending order (x, then y)
    pub fn sorted_cells(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self.alive.iter().copied().collect();
        cells.sort_unstable();
        cells
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.alive.contains(&cell)
    }

    #[inline]
    pub fn alive_count(&self) -> usize {
        self.alive.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.alive.is_empty()
    }

    #[inline]
    pub fn take(self) -> HashSet<Cell> {
        self.alive
    }
}

impl FromIterator<Cell> for Universe {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self::from_alive(iter)
    }
}
