use crate::*;

/// Player-visible state of a cell. Opening is final, so a cell can never be
/// both open and flagged.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Hidden,
    Flagged,
    Open,
}

/// One grid position. Position, mine status and neighbour count are fixed when
/// the board is built; only the [`CellState`] changes during play.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    row: Coord,
    col: Coord,
    is_mine: bool,
    adjacent_mines: u8,
    state: CellState,
}

impl Cell {
    pub(crate) const fn new(coords: Coord2, is_mine: bool, adjacent_mines: u8) -> Self {
        Self {
            row: coords.0,
            col: coords.1,
            is_mine,
            adjacent_mines,
            state: CellState::Hidden,
        }
    }

    pub const fn row(&self) -> Coord {
        self.row
    }

    pub const fn col(&self) -> Coord {
        self.col
    }

    pub const fn coords(&self) -> Coord2 {
        (self.row, self.col)
    }

    pub const fn is_mine(&self) -> bool {
        self.is_mine
    }

    pub const fn adjacent_mines(&self) -> u8 {
        self.adjacent_mines
    }

    pub const fn state(&self) -> CellState {
        self.state
    }

    pub const fn is_open(&self) -> bool {
        matches!(self.state, CellState::Open)
    }

    pub const fn is_flagged(&self) -> bool {
        matches!(self.state, CellState::Flagged)
    }

    /// An open safe cell with no mines around it.
    pub const fn is_zero(&self) -> bool {
        self.is_open() && !self.is_mine && self.adjacent_mines == 0
    }

    pub(crate) fn set_state(&mut self, state: CellState) {
        self.state = state;
    }
}
