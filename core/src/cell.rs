use serde::{Deserialize, Serialize};

/// One grid position.
///
/// The adjacency count is fixed once the board is built and only meaningful
/// for cells without a mine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    is_mine: bool,
    is_flagged: bool,
    is_revealed: bool,
    adjacent_mines: u8,
}

impl Cell {
    pub(crate) const fn new(is_mine: bool, adjacent_mines: u8) -> Self {
        Self {
            is_mine,
            is_flagged: false,
            is_revealed: false,
            adjacent_mines,
        }
    }

    pub const fn is_mine(&self) -> bool {
        self.is_mine
    }

    pub const fn is_flagged(&self) -> bool {
        self.is_flagged
    }

    pub const fn is_revealed(&self) -> bool {
        self.is_revealed
    }

    pub const fn adjacent_mines(&self) -> u8 {
        self.adjacent_mines
    }

    /// Hidden cells that a reveal would actually open.
    pub const fn is_revealable(&self) -> bool {
        !self.is_revealed && !self.is_flagged
    }

    pub(crate) fn reveal(&mut self) {
        self.is_revealed = true;
    }

    /// Flips the flag on a hidden cell, returns whether anything changed.
    pub(crate) fn toggle_flag(&mut self) -> bool {
        if self.is_revealed {
            return false;
        }
        self.is_flagged = !self.is_flagged;
        true
    }

    /// What a player is allowed to see of this cell.
    pub const fn view(&self) -> CellView {
        match (self.is_revealed, self.is_flagged, self.is_mine) {
            (false, false, _) => CellView::Hidden,
            (false, true, _) => CellView::Flagged,
            (true, _, true) => CellView::RevealedMine,
            (true, _, false) => CellView::RevealedCount(self.adjacent_mines),
        }
    }
}

/// Player-visible state of a cell, the only thing renderers get to read.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    RevealedMine,
    RevealedCount(u8),
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}
