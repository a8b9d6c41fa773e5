use core::fmt;

use crate::*;

/// How much of the unopened board a [`BoardView`] gives away.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Reveal {
    /// Only what the player has opened.
    #[default]
    Nothing,
    /// Unopened mines too, flagged or not; used once a game is over.
    Mines,
    /// Every cell as if it were open.
    All,
}

/// Console view of a board: one `[?]` token per cell, with 1-based row and
/// column numbers around it.
#[derive(Copy, Clone, Debug)]
pub struct BoardView<'a> {
    game: &'a Game,
    reveal: Reveal,
}

impl Game {
    pub fn render(&self, reveal: Reveal) -> BoardView<'_> {
        BoardView { game: self, reveal }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(Reveal::Nothing))
    }
}

impl Cell {
    pub fn token(&self, reveal: Reveal) -> CellToken {
        match (self.state(), reveal) {
            (CellState::Open, _) | (_, Reveal::All) => self.content_token(),
            (_, Reveal::Mines) if self.is_mine() => CellToken::Mine,
            (CellState::Flagged, _) => CellToken::Flag,
            (CellState::Hidden, _) => CellToken::Hidden,
        }
    }

    fn content_token(&self) -> CellToken {
        if self.is_mine() {
            CellToken::Mine
        } else {
            CellToken::Count(self.adjacent_mines())
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellToken {
    Hidden,
    Flag,
    Count(u8),
    Mine,
}

impl fmt::Display for CellToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hidden => f.write_str("[ ]"),
            Self::Flag => f.write_str("[P]"),
            Self::Count(count) => write!(f, "[{}]", count),
            Self::Mine => f.write_str("[x]"),
        }
    }
}

/// Centres a 1-based label in three columns, leaning right when the padding
/// is uneven, so `10` becomes `" 10"`.
fn write_label(f: &mut fmt::Formatter<'_>, index: Coord) -> fmt::Result {
    let label = usize::from(index) + 1;
    if label < 10 {
        write!(f, " {} ", label)
    } else {
        write!(f, "{:>3}", label)
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = self.game.size();

        f.write_str("   ")?;
        for col in 0..cols {
            write_label(f, col)?;
        }
        writeln!(f)?;

        for row in 0..rows {
            write_label(f, row)?;
            for col in 0..cols {
                if let Some(cell) = self.game.cell_at((row, col)) {
                    write!(f, "{}", cell.token(self.reveal))?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
