use crate::pos::Cell;
use regex::Regex;
use std::{collections::HashSet, sync::OnceLock};

/// Message written in place of an empty generation
pub const NO_CELLS_ALIVE: &str = "No cells are alive.";

pub trait PositionEncoder {
    fn encode(&self, cells: &HashSet<Cell>) -> String;
    fn decode(&self, value: &str) -> HashSet<Cell>;
}

/// Free-form `x, y` coordinate lists
///
/// Decoding picks every integer pair out of the text and ignores anything
/// between them, so `1,1 | 2,2` and `(1, 1) (2, 2)` read the same.
/// Encoding writes one `x, y` line per cell, sorted by x then y.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoordinateList;

impl CoordinateList {
    fn pair_regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"(-?\d+)\s*,\s*(-?\d+)").expect("valid coordinate regex"))
    }
}

impl PositionEncoder for CoordinateList {
    fn encode(&self, cells: &HashSet<Cell>) -> String {
        if cells.is_empty() {
            return NO_CELLS_ALIVE.to_owned();
        }

        let mut sorted: Vec<&Cell> = cells.iter().collect();
        sorted.sort_unstable();
        sorted
            .into_iter()
            .map(Cell::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn decode(&self, value: &str) -> HashSet<Cell> {
        Self::pair_regex()
            .captures_iter(value)
            .filter_map(|caps| {
                let (_, [x, y]) = caps.extract();
                // pairs that don't fit an i64 are dropped like any other unreadable fragment
                Some(Cell::new(x.parse().ok()?, y.parse().ok()?))
            })
            .collect()
    }
}
