use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Terminal-state evaluation of a board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Ongoing,
    Lost,
    Won,
}

impl Outcome {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Lost | Self::Won)
    }
}

impl Default for Outcome {
    fn default() -> Self {
        Self::Ongoing
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

/// The minefield together with everything the player has done to it.
///
/// Cells live in a single row-major `Array2` of shape `height x width`, addressed with `(x, y)`
/// coordinates through [`ToNdIndex`].
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

impl Board {
    /// Places mines with `generator`, then computes adjacency counts.
    pub fn new(config: GameConfig, generator: impl MineGenerator) -> Result<Self> {
        let layout = generator.generate(config)?;
        Ok(Self::from_layout(&layout))
    }

    /// Builds a board on a known mine layout, bypassing random placement.
    pub fn from_layout(layout: &MineLayout) -> Self {
        let cells = Array2::from_shape_fn(size_to_shape(layout.size()), |(y, x)| {
            // shape comes from `Coord` sized dimensions
            let coords = (x as Coord, y as Coord);
            if layout.contains_mine(coords) {
                Cell::new(true, 0)
            } else {
                Cell::new(false, layout.adjacent_mine_count(coords))
            }
        });
        let (width, height) = layout.size();
        log::debug!(
            "New {}x{} board with {} mines",
            width,
            height,
            layout.mine_count()
        );

        Self {
            cells,
            mine_count: layout.mine_count(),
        }
    }

    pub fn size(&self) -> Coord2 {
        grid_size(&self.cells)
    }

    pub fn width(&self) -> Coord {
        self.size().0
    }

    pub fn height(&self) -> Coord {
        self.size().1
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    /// Flags currently set on hidden cells.
    pub fn flagged_count(&self) -> CellCount {
        // bounded by the cell total, which fits `CellCount`
        self.cells
            .iter()
            .filter(|cell| cell.is_flagged() && !cell.is_revealed())
            .count() as CellCount
    }

    /// Mines not yet accounted for by a flag, negative when over-flagged.
    pub fn mines_left(&self) -> isize {
        (self.mine_count as isize) - (self.flagged_count() as isize)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (width, height) = self.size();
        let (x, y) = coords;
        if x < width && y < height {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds { x, y })
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<&Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(&self.cells[coords.to_nd_index()])
    }

    pub(crate) fn cell_at_mut(&mut self, coords: Coord2) -> Result<&mut Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(&mut self.cells[coords.to_nd_index()])
    }

    pub fn view_at(&self, coords: Coord2) -> Result<CellView> {
        Ok(self.cell_at(coords)?.view())
    }

    /// Player-visible cells, one inner iterator per row from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = CellView> + '_> + '_ {
        self.cells
            .rows()
            .into_iter()
            .map(|row| row.into_iter().map(|cell| cell.view()))
    }

    /// In-bounds neighbors of `coords`, diagonals included.
    pub fn adjacent_coords(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let cell = self.cell_at_mut(coords)?;

        Ok(if cell.toggle_flag() {
            log::debug!("Flag at {:?} set to {}", coords, cell.is_flagged());
            MarkOutcome::Changed
        } else {
            MarkOutcome::NoChange
        })
    }

    /// Reveals a hidden, unflagged cell and flood-fills outwards from cells with no adjacent
    /// mines. Flagged and already revealed cells are left untouched.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let cell = self.cell_at_mut(coords)?;
        if !cell.is_revealable() {
            return Ok(RevealOutcome::NoChange);
        }

        cell.reveal();
        let cell = *cell;
        log::debug!(
            "Reveal at {:?}, mine: {}, adjacent mines: {}",
            coords,
            cell.is_mine(),
            cell.adjacent_mines()
        );

        if cell.is_mine() {
            return Ok(RevealOutcome::HitMine);
        }

        if cell.adjacent_mines() == 0 {
            self.flood_reveal(coords);
        }

        Ok(match self.evaluate_outcome() {
            Outcome::Won => RevealOutcome::Won,
            _ => RevealOutcome::Revealed,
        })
    }

    fn flood_reveal(&mut self, origin: Coord2) {
        // the revealed flag doubles as the visited set
        let mut to_visit: Vec<Coord2> = self.revealable_neighbors(origin).collect();
        log::trace!(
            "Starting flood-fill from {:?}, initial neighbors: {:?}",
            origin,
            to_visit
        );

        while let Some(visit_coords) = to_visit.pop() {
            let cell = &mut self.cells[visit_coords.to_nd_index()];
            if !cell.is_revealable() {
                continue;
            }

            cell.reveal();
            let adjacent_mines = cell.adjacent_mines();
            log::trace!(
                "Flood revealed cell at {:?}, adjacent mines: {}",
                visit_coords,
                adjacent_mines
            );

            if adjacent_mines == 0 {
                to_visit.extend(self.revealable_neighbors(visit_coords));
            }
        }
    }

    fn revealable_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + '_ {
        self.adjacent_coords(coords)
            .filter(move |&pos| self.cells[pos.to_nd_index()].is_revealable())
    }

    /// Lost as soon as any mine is revealed, won once every safe cell is revealed.
    pub fn evaluate_outcome(&self) -> Outcome {
        if self
            .cells
            .iter()
            .any(|cell| cell.is_mine() && cell.is_revealed())
        {
            Outcome::Lost
        } else if self
            .cells
            .iter()
            .all(|cell| cell.is_mine() || cell.is_revealed())
        {
            Outcome::Won
        } else {
            Outcome::Ongoing
        }
    }

    /// Reveals every cell, flagged ones included.
    pub fn reveal_all(&mut self) {
        self.cells.iter_mut().for_each(|cell| cell.reveal());
    }
}
