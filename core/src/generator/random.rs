use rand::{Rng, SeedableRng, rngs::SmallRng};

use super::*;

/// Uniform placement by rejection sampling: draw random coordinates and keep the ones that do not
/// already hold a mine, until the requested amount is placed.
#[derive(Clone, Debug)]
pub struct RandomMineGenerator<R> {
    rng: R,
}

impl<R: Rng> RandomMineGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomMineGenerator<SmallRng> {
    /// Reproducible placement, the same seed always gives the same layout.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MineGenerator for RandomMineGenerator<R> {
    fn generate(mut self, config: GameConfig) -> Result<MineLayout> {
        // rejection sampling only terminates with at least one free cell left
        let config = config.validate()?;

        let mut mine_mask: Array2<bool> = Array2::default(size_to_shape(config.size()));
        let mut mines_placed: CellCount = 0;
        let mut draws: u32 = 0;

        while mines_placed < config.mines {
            let coords: Coord2 = (
                self.rng.random_range(0..config.width),
                self.rng.random_range(0..config.height),
            );
            draws += 1;

            let cell = &mut mine_mask[coords.to_nd_index()];
            if !*cell {
                *cell = true;
                mines_placed += 1;
            }
        }
        log::debug!(
            "Placed {} mines on {}x{} in {} draws",
            mines_placed,
            config.width,
            config.height,
            draws
        );

        MineLayout::from_mine_mask(mine_mask)
    }
}
