use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Cannot build a {width}x{height} board with {mines} mines")]
    InvalidConstruction {
        width: Coord,
        height: Coord,
        mines: CellCount,
    },
    #[error("Coordinates ({x}, {y}) are out of bounds")]
    OutOfBounds { x: Coord, y: Coord },
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
