use std::io::{self, BufRead, Write};

use miner_core::{Action, Coord2, Game, GameConfig, RandomMinefieldGenerator, Reveal};
use rand::prelude::*;

use crate::command::{Command, CommandError, USAGE};

/// One player at one terminal. Owns the current [`Game`] and swaps in a fresh
/// one on restart.
pub struct Session<R, W> {
    input: R,
    output: W,
    game: Game,
    seeds: SmallRng,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// With a `seed`, the sequence of boards is reproducible.
    pub fn new(input: R, output: W, seed: Option<u64>) -> Self {
        let mut seeds = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        let game = new_game(&mut seeds);
        Self::with_game(input, output, game, seeds)
    }

    pub fn with_game(input: R, output: W, game: Game, seeds: SmallRng) -> Self {
        Self {
            input,
            output,
            game,
            seeds,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Reads commands until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", USAGE)?;
        let mut line = String::new();
        loop {
            self.show_board()?;
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                log::debug!("End of input");
                break;
            }

            match line.parse::<Command>() {
                Ok(Command::Move(action, coords)) => self.apply(action, coords)?,
                Ok(Command::Restart) => self.restart(),
                Ok(Command::Help) => writeln!(self.output, "{}", USAGE)?,
                Ok(Command::Quit) => break,
                Err(CommandError::Empty) => {}
                Err(err) => {
                    log::debug!("Bad command {:?}: {:?}", line.trim(), err);
                    writeln!(self.output, "{}. {}", err, USAGE)?;
                }
            }
        }
        Ok(())
    }

    fn show_board(&mut self) -> io::Result<()> {
        let reveal = if self.game.is_finished() {
            Reveal::Mines
        } else {
            Reveal::Nothing
        };
        write!(self.output, "{}", self.game.render(reveal))?;
        writeln!(self.output, "Flags left: {}", self.game.flags_remaining())
    }

    fn apply(&mut self, action: Action, (row, col): Coord2) -> io::Result<()> {
        if self.game.is_finished() {
            return writeln!(self.output, "The game is finished, `r` starts a new one");
        }

        if self.game.play(row, col, action).is_none() {
            return writeln!(
                self.output,
                "There is no cell at row {}, column {}",
                u16::from(row) + 1,
                u16::from(col) + 1
            );
        }

        if self.game.is_over() {
            writeln!(self.output, "Game over!")?;
        } else if self.game.is_won() {
            writeln!(self.output, "You won!")?;
        }
        Ok(())
    }

    fn restart(&mut self) {
        log::info!("Restarting");
        self.game = new_game(&mut self.seeds);
    }
}

fn new_game(seeds: &mut SmallRng) -> Game {
    let generator = RandomMinefieldGenerator::new(seeds.random());
    log::debug!("New game, seed: {}", generator.seed());
    Game::new(GameConfig::CLASSIC, generator)
}
