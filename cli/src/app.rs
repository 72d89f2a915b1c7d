use std::io::{self, BufRead, Write};

use anyhow::Context;
use minesweeper_core::{Command, GameError, Outcome, Session};

use crate::command::Input;
use crate::render::BoardView;

const HELP: &str = "\
Commands (X is the column, Y the row, both from 0):
  r X Y   reveal a cell
  f X Y   toggle a flag
  h       show this help
  q       quit";

/// Writes `prompt` and reads one trimmed line, `None` once input is exhausted.
pub(crate) fn read_line(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

/// Runs the command loop until the session ends and reports how it ended.
pub fn play(
    mut session: Session,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> anyhow::Result<Outcome> {
    writeln!(output, "{HELP}")?;

    while !session.is_game_over() {
        write!(output, "\n{}", BoardView(session.board()))?;

        let Some(line) = read_line(input, output, "> ").context("Failed to read command")? else {
            log::debug!("Input closed, quitting");
            session.apply(Command::Quit)?;
            break;
        };

        let command = match line.parse::<Input>() {
            Ok(Input::Command(command)) => command,
            Ok(Input::Help) => {
                writeln!(output, "{HELP}")?;
                continue;
            }
            Err(err) => {
                writeln!(output, "{err}. Type `h` for help.")?;
                continue;
            }
        };

        match session.apply(command) {
            Ok(applied) if command != Command::Quit && !applied.has_update() => {
                writeln!(output, "Nothing to do there.")?;
            }
            Ok(applied) => log::trace!("{:?} -> {:?}", command, applied),
            Err(GameError::OutOfBounds { .. }) => {
                writeln!(output, "Invalid coordinates, try again.")?;
            }
            Err(err) => writeln!(output, "{err}.")?,
        }
    }

    let outcome = session.outcome();
    match outcome {
        Outcome::Ongoing => writeln!(output, "Bye!")?,
        Outcome::Won | Outcome::Lost => {
            let mut board = session.into_board();
            board.reveal_all();
            write!(output, "\n{}", BoardView(&board))?;
            if outcome == Outcome::Won {
                writeln!(output, "You cleared the board!")?;
            } else {
                writeln!(output, "Boom! You hit a mine.")?;
            }
        }
    }
    Ok(outcome)
}
