use core::ops::Index;
use ndarray::Array2;

use crate::*;
pub use random::*;

mod random;

/// Produces the mine positions for a new board.
pub trait MineGenerator {
    fn generate(self, config: GameConfig) -> Result<MineLayout>;
}

/// Validated mine mask: at least one cell, and at least one cell without a mine.
#[derive(Clone, Debug, PartialEq)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub(crate) fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        let (width, height) = grid_size(&mine_mask);
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count();
        // a count that does not fit can never be below the cell total either
        let mine_count = CellCount::try_from(mine_count).unwrap_or(CellCount::MAX);
        GameConfig::new(width, height, mine_count)?;
        Ok(Self {
            mine_mask,
            mine_count,
        })
    }

    /// Fixed layout for tests, replays and hand-built puzzles.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let (width, height) = size;
        let mut mine_mask: Array2<bool> = Array2::default(size_to_shape(size));

        for &(x, y) in mine_coords {
            if x >= width || y >= height {
                return Err(GameError::OutOfBounds { x, y });
            }
            mine_mask[(x, y).to_nd_index()] = true;
        }

        Self::from_mine_mask(mine_mask)
    }

    pub fn size(&self) -> Coord2 {
        grid_size(&self.mine_mask)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most eight neighbors
        self.mine_mask
            .iter_neighbors(coords)
            .filter(|&pos| self[pos])
            .count() as u8
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

pub(crate) fn size_to_shape((width, height): Coord2) -> (usize, usize) {
    (height.into(), width.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_mine_coords_counts_unique_mines() {
        let layout = MineLayout::from_mine_coords((3, 2), &[(0, 0), (2, 1), (0, 0)]).unwrap();

        assert_eq!(layout.mine_count(), 2);
        assert_eq!(layout.size(), (3, 2));
        assert!(layout.contains_mine((2, 1)));
        assert!(!layout.contains_mine((1, 1)));
    }

    #[test]
    fn from_mine_coords_rejects_out_of_bounds() {
        assert_eq!(
            MineLayout::from_mine_coords((2, 2), &[(2, 0)]),
            Err(GameError::OutOfBounds { x: 2, y: 0 })
        );
    }

    #[test]
    fn from_mine_coords_rejects_full_board() {
        assert_eq!(
            MineLayout::from_mine_coords((1, 2), &[(0, 0), (0, 1)]),
            Err(GameError::InvalidConstruction {
                width: 1,
                height: 2,
                mines: 2
            })
        );
    }

    #[test]
    fn adjacent_counts_match_fixed_layout() {
        // * . .
        // . . *
        let layout = MineLayout::from_mine_coords((3, 2), &[(0, 0), (2, 1)]).unwrap();

        assert_eq!(layout.adjacent_mine_count((1, 0)), 2);
        assert_eq!(layout.adjacent_mine_count((2, 0)), 1);
        assert_eq!(layout.adjacent_mine_count((0, 1)), 1);
        assert_eq!(layout.adjacent_mine_count((1, 1)), 2);
    }
}
