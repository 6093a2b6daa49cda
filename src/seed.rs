use crate::error::Error;
use rand::Rng;
use sparselife::Cell;
use std::str::FromStr;

/// How cells inside a generated fill are chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillMode {
    /// Each cell is a coin flip
    Random,
    /// Checkerboard, alive where `x + y` is even
    Alternating,
    All,
    Empty,
}
impl FromStr for FillMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(Self::Random),
            "alternating" => Ok(Self::Alternating),
            "all" => Ok(Self::All),
            "empty" => Ok(Self::Empty),
            other => Err(Error::UnknownFill(other.to_owned())),
        }
    }
}

/// A generated initial pattern in a `width` x `height` box anchored at the origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fill {
    mode: FillMode,
    width: i64,
    height: i64,
}
impl Fill {
    /// Returns `None` for negative sizes or a box whose cell count overflows `u64`
    pub fn new(mode: FillMode, width: i64, height: i64) -> Option<Self> {
        let fill = Self { mode, width, height };
        fill.area().map(|_| fill)
    }

    /// Number of cells inside the box
    pub fn area(&self) -> Option<u64> {
        let w = u64::try_from(self.width).ok()?;
        let h = u64::try_from(self.height).ok()?;
        w.checked_mul(h)
    }

    /// Lazily yields the live cells of the fill, column by column
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let Self { mode, width, height } = self;
        let mut rng = rand::rng();
        (0..width)
            .flat_map(move |x| (0..height).map(move |y| Cell::new(x, y)))
            .filter(move |cell| match mode {
                FillMode::Random => rng.random_bool(0.5),
                FillMode::Alternating => (cell.x + cell.y) % 2 == 0,
                FillMode::All => true,
                FillMode::Empty => false,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(mode: FillMode, width: i64, height: i64) -> Vec<Cell> {
        Fill::new(mode, width, height).expect("box fits").cells().collect()
    }

    #[test]
    fn mode_names() {
        assert_eq!("alternating".parse::<FillMode>().unwrap(), FillMode::Alternating);
        assert_eq!("empty".parse::<FillMode>().unwrap(), FillMode::Empty);
        assert!(matches!(
            "checkers".parse::<FillMode>(),
            Err(Error::UnknownFill(name)) if name == "checkers"
        ));
    }

    #[test]
    fn full_box_is_column_major() {
        let cells = filled(FillMode::All, 2, 2);

        assert_eq!(
            cells,
            vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 0), Cell::new(1, 1)]
        );
    }

    #[test]
    fn checkerboard_keeps_even_cells() {
        let cells = filled(FillMode::Alternating, 4, 5);

        assert_eq!(cells.len(), 10);
        assert!(cells.iter().all(|c| (c.x + c.y) % 2 == 0));
    }

    #[test]
    fn empty_mode_and_empty_box_have_no_cells() {
        assert!(filled(FillMode::Empty, 6, 6).is_empty());
        assert!(filled(FillMode::All, 0, 9).is_empty());
    }

    #[test]
    fn random_cells_stay_in_the_box() {
        let cells = filled(FillMode::Random, 7, 3);

        assert!(cells.len() <= 21);
        assert!(cells.iter().all(|c| (0..7).contains(&c.x) && (0..3).contains(&c.y)));
    }

    #[test]
    fn oversized_box_is_rejected() {
        assert_eq!(Fill::new(FillMode::All, i64::MAX, i64::MAX), None);
        assert_eq!(Fill::new(FillMode::All, -1, 4), None);

        let huge = Fill::new(FillMode::All, 1 << 40, 1 << 20).expect("area fits in u64");
        assert_eq!(huge.area(), Some(1 << 60));
        // nothing is allocated up front, so taking a few cells is cheap
        assert_eq!(huge.cells().take(3).count(), 3);
    }
}
