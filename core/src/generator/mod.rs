use crate::*;
pub use random::*;

mod random;

pub trait MinefieldGenerator {
    fn generate(self, config: GameConfig) -> MineLayout;
}

/// Hands back a layout that was decided up front.
impl MinefieldGenerator for MineLayout {
    fn generate(self, config: GameConfig) -> MineLayout {
        if self.game_config() != config {
            log::warn!(
                "Fixed layout {:?} does not match requested config {:?}, using the layout",
                self.game_config(),
                config
            );
        }
        self
    }
}
