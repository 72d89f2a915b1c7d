use std::str::FromStr;

use minesweeper_core::{Command, Coord, Coord2};
use thiserror::Error;

/// A line typed at the game prompt.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    Help,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command `{0}`")]
    UnknownCommand(String),
    #[error("`{0}` expects two coordinates: X (column) and Y (row)")]
    MissingCoords(String),
    #[error("`{0}` is not a valid coordinate")]
    InvalidCoord(String),
    #[error("Unexpected argument `{0}`")]
    TrailingInput(String),
}

impl FromStr for Input {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let verb = tokens.next().ok_or(ParseError::Empty)?.to_ascii_lowercase();

        let input = match verb.as_str() {
            "r" | "reveal" => Input::Command(Command::Reveal(parse_coords(&verb, &mut tokens)?)),
            "f" | "flag" => Input::Command(Command::ToggleFlag(parse_coords(&verb, &mut tokens)?)),
            "q" | "quit" | "exit" => Input::Command(Command::Quit),
            "h" | "help" | "?" => Input::Help,
            _ => return Err(ParseError::UnknownCommand(verb)),
        };

        match tokens.next() {
            Some(extra) => Err(ParseError::TrailingInput(extra.to_owned())),
            None => Ok(input),
        }
    }
}

fn parse_coords<'a>(
    verb: &str,
    tokens: &mut impl Iterator<Item = &'a str>,
) -> Result<Coord2, ParseError> {
    let (Some(x), Some(y)) = (tokens.next(), tokens.next()) else {
        return Err(ParseError::MissingCoords(verb.to_owned()));
    };
    Ok((parse_coord(x)?, parse_coord(y)?))
}

fn parse_coord(token: &str) -> Result<Coord, ParseError> {
    token
        .parse()
        .map_err(|_| ParseError::InvalidCoord(token.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_commands() {
        assert_eq!(
            "r 3 4".parse::<Input>(),
            Ok(Input::Command(Command::Reveal((3, 4))))
        );
        assert_eq!(
            "  FLAG 0 12 ".parse::<Input>(),
            Ok(Input::Command(Command::ToggleFlag((0, 12))))
        );
        assert_eq!("q".parse::<Input>(), Ok(Input::Command(Command::Quit)));
        assert_eq!("help".parse::<Input>(), Ok(Input::Help));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!("".parse::<Input>(), Err(ParseError::Empty));
        assert_eq!(
            "dig 1 1".parse::<Input>(),
            Err(ParseError::UnknownCommand("dig".into()))
        );
        assert_eq!(
            "r 1".parse::<Input>(),
            Err(ParseError::MissingCoords("r".into()))
        );
        assert_eq!(
            "f -1 2".parse::<Input>(),
            Err(ParseError::InvalidCoord("-1".into()))
        );
        assert_eq!(
            "r 1 999".parse::<Input>(),
            Err(ParseError::InvalidCoord("999".into()))
        );
        assert_eq!(
            "q now".parse::<Input>(),
            Err(ParseError::TrailingInput("now".into()))
        );
    }
}
