use serde::{Deserialize, Serialize};

use crate::*;

/// Player command consumed by a [`Session`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Reveal(Coord2),
    ToggleFlag(Coord2),
    Quit,
}

/// What applying a [`Command`] did to the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Applied {
    Reveal(RevealOutcome),
    Flag(MarkOutcome),
    Quit,
}

impl Applied {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Reveal(outcome) => outcome.has_update(),
            Self::Flag(outcome) => outcome.has_update(),
            Self::Quit => false,
        }
    }
}

/// One game from the first move until it is won, lost or abandoned.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    board: Board,
    is_over: bool,
}

impl Session {
    pub fn new(config: GameConfig, generator: impl MineGenerator) -> Result<Self> {
        Ok(Self::from_board(Board::new(config, generator)?))
    }

    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            is_over: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Hands the board back, typically to reveal and render it one last time.
    pub fn into_board(self) -> Board {
        self.board
    }

    pub fn is_game_over(&self) -> bool {
        self.is_over
    }

    pub fn outcome(&self) -> Outcome {
        self.board.evaluate_outcome()
    }

    /// Once the session is over only `Quit` is accepted, and it changes nothing.
    pub fn apply(&mut self, command: Command) -> Result<Applied> {
        match command {
            Command::Quit => {
                if !self.is_over {
                    log::debug!("Session quit");
                    self.is_over = true;
                }
                Ok(Applied::Quit)
            }
            Command::Reveal(coords) => {
                self.check_not_over()?;
                let outcome = self.board.reveal(coords)?;
                let state = self.board.evaluate_outcome();
                if state.is_finished() {
                    log::debug!("Session ended: {:?}", state);
                    self.is_over = true;
                }
                Ok(Applied::Reveal(outcome))
            }
            Command::ToggleFlag(coords) => {
                self.check_not_over()?;
                Ok(Applied::Flag(self.board.toggle_flag(coords)?))
            }
        }
    }

    fn check_not_over(&self) -> Result<()> {
        if self.is_over {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(size: Coord2, mines: &[Coord2]) -> Session {
        let layout = MineLayout::from_mine_coords(size, mines).unwrap();
        Session::from_board(Board::from_layout(&layout))
    }

    #[test]
    fn revealing_mine_ends_session_as_lost() {
        let mut session = session((2, 2), &[(0, 0)]);

        let applied = session.apply(Command::Reveal((0, 0))).unwrap();

        assert_eq!(applied, Applied::Reveal(RevealOutcome::HitMine));
        assert!(session.is_game_over());
        assert_eq!(session.outcome(), Outcome::Lost);
    }

    #[test]
    fn revealing_last_safe_cell_ends_session_as_won() {
        let mut session = session((2, 1), &[(0, 0)]);

        session.apply(Command::Reveal((1, 0))).unwrap();

        assert!(session.is_game_over());
        assert_eq!(session.outcome(), Outcome::Won);
    }

    #[test]
    fn flagging_does_not_end_session() {
        let mut session = session((2, 1), &[(0, 0)]);

        let applied = session.apply(Command::ToggleFlag((0, 0))).unwrap();

        assert_eq!(applied, Applied::Flag(MarkOutcome::Changed));
        assert!(applied.has_update());
        assert!(!session.is_game_over());
        assert_eq!(session.board().view_at((0, 0)).unwrap(), CellView::Flagged);
    }

    #[test]
    fn quit_ends_session_without_touching_board() {
        let mut session = session((3, 3), &[(1, 1)]);
        let before = session.board().clone();

        assert_eq!(session.apply(Command::Quit).unwrap(), Applied::Quit);

        assert!(session.is_game_over());
        assert_eq!(session.outcome(), Outcome::Ongoing);
        assert_eq!(session.board(), &before);
    }

    #[test]
    fn moves_after_game_over_are_rejected() {
        let mut session = session((2, 2), &[(0, 0)]);
        session.apply(Command::Reveal((0, 0))).unwrap();

        assert_eq!(
            session.apply(Command::Reveal((1, 1))),
            Err(GameError::AlreadyEnded)
        );
        assert_eq!(
            session.apply(Command::ToggleFlag((1, 1))),
            Err(GameError::AlreadyEnded)
        );
        assert_eq!(session.apply(Command::Quit), Ok(Applied::Quit));
        assert!(session.is_game_over());
        assert!(!session.board().cell_at((1, 1)).unwrap().is_revealed());
    }

    #[test]
    fn out_of_bounds_is_recoverable() {
        let mut session = session((2, 2), &[(0, 0)]);

        assert_eq!(
            session.apply(Command::Reveal((5, 1))),
            Err(GameError::OutOfBounds { x: 5, y: 1 })
        );
        assert!(!session.is_game_over());
        assert_eq!(
            session.apply(Command::Reveal((1, 1))),
            Ok(Applied::Reveal(RevealOutcome::Revealed))
        );
    }

    #[test]
    fn seeded_session_is_playable() {
        let config = GameConfig::new(9, 9, 10).unwrap();
        let mut session = Session::new(config, RandomMineGenerator::from_seed(3)).unwrap();

        let safe = (0..9)
            .flat_map(|y| (0..9).map(move |x| (x, y)))
            .find(|&coords| !session.board().cell_at(coords).unwrap().is_mine())
            .unwrap();
        session.apply(Command::Reveal(safe)).unwrap();

        assert_ne!(session.outcome(), Outcome::Lost);
    }

    #[test]
    fn reveal_all_after_loss_exposes_every_cell() {
        let mut session = session((3, 3), &[(0, 0), (2, 2)]);
        session.apply(Command::ToggleFlag((2, 2))).unwrap();
        session.apply(Command::Reveal((0, 0))).unwrap();

        let mut board = session.into_board();
        board.reveal_all();

        assert!(board.rows().flatten().all(|view| view != CellView::Hidden));
        assert_eq!(board.view_at((2, 2)).unwrap(), CellView::RevealedMine);
        assert_eq!(board.evaluate_outcome(), Outcome::Lost);
    }
}
