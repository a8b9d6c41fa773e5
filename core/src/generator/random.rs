use super::*;

/// Places mines uniformly at random, without replacement. The same seed and
/// config always produce the same layout.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seeded from the thread-local RNG.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: GameConfig) -> MineLayout {
        use rand::prelude::*;
        use rand::seq::index;

        let size = config.size();
        let total_cells = usize::from(config.total_cells());
        let mines = usize::from(config.mines);

        // optimize for full boards
        if mines >= total_cells {
            if mines > total_cells {
                log::warn!(
                    "Minefield already full, generated anyway, requested {} but only fits {}",
                    mines,
                    total_cells
                );
            } else {
                log::warn!("Every cell is a mine, the board cannot be won");
            }
            return MineLayout::from_mine_mask(Array2::from_elem(size.to_nd_index(), true));
        }

        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());
        let mut rng = SmallRng::seed_from_u64(self.seed);
        {
            let cells = mine_mask
                .as_slice_mut()
                .expect("freshly allocated array is in standard layout");
            for place in index::sample(&mut rng, total_cells, mines) {
                cells[place] = true;
            }
        }

        let layout = MineLayout::from_mine_mask(mine_mask);
        log::debug!(
            "Generated {}x{} minefield with {} mines from seed {}",
            size.0,
            size.1,
            layout.mine_count(),
            self.seed
        );
        layout
    }
}
