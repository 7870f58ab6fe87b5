use log::debug;

use crate::core::consts::TURN_BUDGET_FACTOR;
use crate::core::moves::validate;
use crate::core::{
    BonusSpawner, Cell, GameError, Grid, MoveEffect, Outcome, PlayerSlot, Position, RoundState,
    TurnSpawns, WinKind,
};

/// One duel between two players on a shared grid.
///
/// Turns alternate Player1, Player2. Each turn is `begin_turn` (bonus spawns)
/// followed by `apply_move` until a move is accepted. Once the state is
/// `RoundWon` or `RoundExhausted`, `finish` settles the outcome.
#[derive(Debug, Clone)]
pub struct Round {
    grid: Grid,
    positions: [Position; 2],
    red_square: Option<Position>,
    red_square_may_spawn: bool,
    coins: Vec<Position>,
    remaining_turns: u32,
    move_counts: [u32; 2],
    scores: [u32; 2],
    state: RoundState,
}

pub fn turn_budget(size: usize) -> u32 {
    (size as f64 * TURN_BUDGET_FACTOR).floor() as u32
}

impl Round {
    /// Clears `grid` and places Player1 top-right, Player2 bottom-left.
    pub fn start(grid: Grid) -> Round {
        let budget = turn_budget(grid.size());
        Round::with_turn_budget(grid, budget)
    }

    pub fn with_turn_budget(mut grid: Grid, remaining_turns: u32) -> Round {
        grid.clear();
        let last = grid.size() - 1;
        let positions = [Position::new(0, last), Position::new(last, 0)];
        grid.set(&positions[0], Cell::Player1Token);
        grid.set(&positions[1], Cell::Player2Token);

        let state = if remaining_turns == 0 {
            RoundState::RoundExhausted
        } else {
            RoundState::AwaitingTurn(PlayerSlot::Player1)
        };

        Round {
            grid,
            positions,
            red_square: None,
            red_square_may_spawn: true,
            coins: Vec::new(),
            remaining_turns,
            move_counts: [0, 0],
            scores: [0, 0],
            state,
        }
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn position(&self, slot: PlayerSlot) -> Position {
        self.positions[slot.index()]
    }

    pub fn red_square(&self) -> Option<Position> {
        self.red_square
    }

    pub fn coins(&self) -> &[Position] {
        &self.coins
    }

    pub fn remaining_turns(&self) -> u32 {
        self.remaining_turns
    }

    pub fn move_count(&self, slot: PlayerSlot) -> u32 {
        self.move_counts[slot.index()]
    }

    pub fn score(&self, slot: PlayerSlot) -> u32 {
        self.scores[slot.index()]
    }

    pub fn scores(&self) -> [u32; 2] {
        self.scores
    }

    /// At most one red square per round; returns false if one was already placed.
    pub fn place_red_square(&mut self, pos: Position) -> bool {
        if !self.red_square_may_spawn {
            return false;
        }
        self.red_square_may_spawn = false;
        self.red_square = Some(pos);
        self.grid.set(&pos, Cell::RedSquare);
        true
    }

    /// Coins may share a coordinate with each other or with the red square.
    pub fn place_coin(&mut self, pos: Position) {
        self.coins.push(pos);
        self.grid.set(&pos, Cell::Coin);
    }

    /// Starts the awaited player's turn: bonus spawns happen here, before any move.
    pub fn begin_turn(&mut self, spawner: &mut BonusSpawner) -> Result<TurnSpawns, GameError> {
        let RoundState::AwaitingTurn(slot) = self.state else {
            return Err(GameError::RoundNotInProgress);
        };

        let size = self.size();
        let mut spawns = TurnSpawns::default();

        if let Some(pos) =
            spawner.maybe_spawn_red_square(self.red_square_may_spawn, size, &self.positions)
        {
            self.place_red_square(pos);
            spawns.red_square = Some(pos);
        }
        if let Some(pos) = spawner.maybe_spawn_coin(size, &self.positions) {
            self.place_coin(pos);
            spawns.coin = Some(pos);
        }
        if spawns != TurnSpawns::default() {
            debug!("turn spawns for {:?}: {:?}", slot, spawns);
        }

        self.move_counts[slot.index()] += 1;
        self.state = RoundState::TurnInProgress(slot);
        Ok(spawns)
    }

    /// Applies the acting player's direction token. A rejected token leaves the
    /// round untouched so the caller can ask again.
    pub fn apply_move(&mut self, token: char) -> Result<MoveEffect, GameError> {
        let RoundState::TurnInProgress(slot) = self.state else {
            return Err(GameError::RoundNotInProgress);
        };

        let from = self.position(slot);
        let to = validate(token, from, self.size())?;

        self.grid.set(&from, Cell::Empty);
        self.grid.set(&to, slot.token());
        self.positions[slot.index()] = to;

        if to == self.positions[slot.opponent().index()] {
            self.state = RoundState::RoundWon(slot, WinKind::Capture);
            return Ok(MoveEffect::Won(WinKind::Capture));
        }
        if self.red_square == Some(to) {
            self.state = RoundState::RoundWon(slot, WinKind::RedSquare);
            return Ok(MoveEffect::Won(WinKind::RedSquare));
        }

        let collected = self.coins.iter().filter(|&&coin| coin == to).count() as u32;
        self.scores[slot.index()] += collected;

        self.state = match slot {
            PlayerSlot::Player1 => RoundState::AwaitingTurn(PlayerSlot::Player2),
            PlayerSlot::Player2 => {
                self.remaining_turns -= 1;
                if self.remaining_turns == 0 {
                    RoundState::RoundExhausted
                } else {
                    RoundState::AwaitingTurn(PlayerSlot::Player1)
                }
            }
        };

        Ok(if collected > 0 {
            MoveEffect::CollectedCoins(collected)
        } else {
            MoveEffect::Moved
        })
    }

    pub fn finish(&mut self) -> Result<Outcome, GameError> {
        let outcome = match self.state {
            RoundState::RoundWon(slot, kind) => Outcome::won(slot, kind),
            RoundState::RoundExhausted => Outcome::by_score(self.scores),
            RoundState::RoundFinished(outcome) => return Ok(outcome),
            _ => return Err(GameError::RoundNotInProgress),
        };
        self.state = RoundState::RoundFinished(outcome);
        Ok(outcome)
    }
}
