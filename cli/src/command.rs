use std::num::ParseIntError;
use std::str::FromStr;

use miner_core::{Action, Coord, Coord2};
use thiserror::Error;

pub const USAGE: &str =
    "Commands: `o ROW COL` to open, `f ROW COL` to flag, `r` to restart, `q` to quit";

/// A line of player input. Coordinates are stored zero-based; players type
/// them one-based, as the board is drawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Action, Coord2),
    Restart,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command `{0}`")]
    Unknown(String),
    #[error("Expected a row and a column")]
    MissingCoords,
    #[error("Unexpected `{0}` after the command")]
    Trailing(String),
    #[error("Invalid number `{text}`")]
    InvalidNumber {
        text: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Rows and columns are numbered from 1")]
    ZeroCoord,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?.to_ascii_lowercase();

        let command = match name.as_str() {
            "o" | "open" => Command::Move(Action::Open, parse_coords(&mut words)?),
            "f" | "flag" => Command::Move(Action::ToggleFlag, parse_coords(&mut words)?),
            "r" | "restart" => Command::Restart,
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            _ => return Err(CommandError::Unknown(name)),
        };

        match words.next() {
            Some(extra) => Err(CommandError::Trailing(extra.to_string())),
            None => Ok(command),
        }
    }
}

fn parse_coords<'a>(words: &mut impl Iterator<Item = &'a str>) -> Result<Coord2, CommandError> {
    let row = parse_coord(words.next())?;
    let col = parse_coord(words.next())?;
    Ok((row, col))
}

fn parse_coord(word: Option<&str>) -> Result<Coord, CommandError> {
    let text = word.ok_or(CommandError::MissingCoords)?;
    let one_based: u16 = text.parse().map_err(|source| CommandError::InvalidNumber {
        text: text.to_string(),
        source,
    })?;
    let zero_based = one_based.checked_sub(1).ok_or(CommandError::ZeroCoord)?;
    // anything past the largest board simply misses it
    Ok(Coord::try_from(zero_based).unwrap_or(Coord::MAX))
}
