use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::{GameError, Position};

/// Random placement of red squares and coins.
pub struct BonusSpawner {
    rng: StdRng,
    seed: u64,
    red_square_chance: u8,
    coin_chance: u8,
}

impl BonusSpawner {
    pub fn new(seed: u64, red_square_chance: u8, coin_chance: u8) -> Result<Self, GameError> {
        for chance in [red_square_chance, coin_chance] {
            if chance > 100 {
                return Err(GameError::InvalidChance(chance));
            }
        }
        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
            red_square_chance,
            coin_chance,
        })
    }

    pub fn from_random(red_square_chance: u8, coin_chance: u8) -> Result<Self, GameError> {
        let seed: u64 = rand::thread_rng().r#gen();
        Self::new(seed, red_square_chance, coin_chance)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Percent roll: a uniform draw in [0, 100) below `chance` succeeds.
    pub fn roll(&mut self, chance: u8) -> bool {
        self.rng.gen_range(0..100u8) < chance
    }

    /// Draws a row that differs from every excluded row, then independently a
    /// column that differs from every excluded column. Only one axis has to
    /// differ per excluded position for that position to be avoided, so the
    /// result never lands on a player. Returns `None` when an axis has no
    /// admissible value, which is always the case on a 2x2 board.
    pub fn generate_position(&mut self, size: usize, excluded: &[Position; 2]) -> Option<Position> {
        let row = self.draw_axis(size, [excluded[0].row, excluded[1].row])?;
        let col = self.draw_axis(size, [excluded[0].col, excluded[1].col])?;
        Some(Position { row, col })
    }

    fn draw_axis(&mut self, size: usize, excluded: [usize; 2]) -> Option<usize> {
        if !(0..size).any(|v| !excluded.contains(&v)) {
            return None;
        }
        loop {
            let value = self.rng.gen_range(0..size);
            if !excluded.contains(&value) {
                return Some(value);
            }
        }
    }

    pub fn maybe_spawn_red_square(
        &mut self,
        may_spawn: bool,
        size: usize,
        excluded: &[Position; 2],
    ) -> Option<Position> {
        if !may_spawn || !self.roll(self.red_square_chance) {
            return None;
        }
        self.generate_position(size, excluded)
    }

    pub fn maybe_spawn_coin(&mut self, size: usize, excluded: &[Position; 2]) -> Option<Position> {
        if !self.roll(self.coin_chance) {
            return None;
        }
        self.generate_position(size, excluded)
    }
}
