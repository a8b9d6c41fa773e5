use ndarray::Array2;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Open,
    ToggleFlag,
}

/// A single game session: the board plus the flag pool, the safe-cell
/// countdown, and the win/loss outcome.
///
/// Losing and winning are recorded separately and never reset. Moves after
/// the end are still applied, so a game that kept going past a lost mine can
/// also end up won; [`Game::state`] reports the loss first.
///
/// Moves never fail. Out-of-bounds coordinates and transitions that the rules
/// refuse leave the game untouched; callers compare the returned [`Cell`]
/// snapshot if they need to know whether anything changed.
#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    board: Array2<Cell>,
    mine_count: CellCount,
    flags_remaining: CellCount,
    safe_cells_remaining: CellCount,
    is_over: bool,
    is_won: bool,
}

impl Game {
    pub fn new(config: GameConfig, generator: impl MinefieldGenerator) -> Self {
        Self::from_layout(generator.generate(config))
    }

    /// Validates the board shape and places mines from a fresh random seed.
    pub fn new_random(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        let config = GameConfig::new(rows, cols, mines)?;
        Ok(Self::new(config, RandomMinefieldGenerator::from_entropy()))
    }

    pub fn from_layout(layout: MineLayout) -> Self {
        let size = layout.size();
        let board = Array2::from_shape_fn(size.to_nd_index(), |(row, col)| {
            let coords = (row as Coord, col as Coord);
            Cell::new(
                coords,
                layout.contains_mine(coords),
                layout.adjacent_mine_count(coords),
            )
        });

        Self {
            board,
            mine_count: layout.mine_count(),
            flags_remaining: layout.mine_count(),
            safe_cells_remaining: layout.safe_cell_count(),
            is_over: false,
            is_won: false,
        }
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.board.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn flags_remaining(&self) -> CellCount {
        self.flags_remaining
    }

    pub fn safe_cells_remaining(&self) -> CellCount {
        self.safe_cells_remaining
    }

    pub fn state(&self) -> GameState {
        if self.is_over {
            GameState::Lost
        } else if self.is_won {
            GameState::Won
        } else {
            GameState::InProgress
        }
    }

    /// Some move opened a mine.
    pub fn is_over(&self) -> bool {
        self.is_over
    }

    /// Every safe cell has been opened.
    pub fn is_won(&self) -> bool {
        self.is_won
    }

    pub fn is_finished(&self) -> bool {
        self.state().is_finished()
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        let (rows, cols) = self.size();
        coords.0 < rows && coords.1 < cols
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<Cell> {
        self.contains(coords)
            .then(|| self.board[coords.to_nd_index()])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.board.iter()
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.board.iter_neighbors(coords)
    }

    /// Applies one move to one cell, without any automatic reveal of the
    /// surrounding area. Returns the cell after the move, or `None` when the
    /// coordinates are off the board.
    pub fn apply_move(&mut self, row: Coord, col: Coord, action: Action) -> Option<Cell> {
        let coords = (row, col);
        if !self.contains(coords) {
            log::trace!("({}, {}) ignored, off the board", row, col);
            return None;
        }

        let cell = self.board[coords.to_nd_index()];
        match (action, cell.state()) {
            (_, CellState::Open) => {}
            (Action::ToggleFlag, CellState::Flagged) => {
                self.set_cell_state(coords, CellState::Hidden);
                self.flags_remaining += 1;
            }
            (Action::ToggleFlag, CellState::Hidden) => {
                if self.flags_remaining > 0 {
                    self.set_cell_state(coords, CellState::Flagged);
                    self.flags_remaining -= 1;
                } else {
                    log::debug!("({}, {}) not flagged, no flags left", row, col);
                }
            }
            (Action::Open, previous) => {
                self.set_cell_state(coords, CellState::Open);
                if previous == CellState::Flagged {
                    self.flags_remaining += 1;
                }
                self.settle_open(cell);
            }
        }

        Some(self.board[coords.to_nd_index()])
    }

    /// Applies a move the way a player expects it: opening a cell with no
    /// mines around it also opens the whole zero region and its border.
    pub fn play(&mut self, row: Coord, col: Coord, action: Action) -> Option<Cell> {
        let was_open = self.cell_at((row, col))?.is_open();
        let cell = self.apply_move(row, col, action)?;

        if action == Action::Open && !was_open && cell.is_zero() {
            let opened = reveal::open_neighbors(self, cell.coords());
            log::debug!("({}, {}) opened {} more cells", row, col, opened.len());
        }

        Some(cell)
    }

    fn set_cell_state(&mut self, coords: Coord2, state: CellState) {
        self.board[coords.to_nd_index()].set_state(state);
    }

    fn settle_open(&mut self, cell: Cell) {
        if cell.is_mine() {
            if !self.is_over {
                log::info!("({}, {}) was a mine, game lost", cell.row(), cell.col());
            }
            self.is_over = true;
            return;
        }

        self.safe_cells_remaining = self.safe_cells_remaining.saturating_sub(1);
        if self.safe_cells_remaining == 0 && !self.is_won {
            log::info!("Every safe cell is open, game won");
            self.is_won = true;
        }
    }
}
