pub const MIN_BOARD_SIZE: usize = 2;
pub const MAX_BOARD_SIZE: usize = 100;

/// Number of full turn pairs per round is `size * TURN_BUDGET_FACTOR`, rounded down.
pub const TURN_BUDGET_FACTOR: f64 = 1.5;

pub const DEFAULT_RED_SQUARE_CHANCE: u8 = 30;
pub const DEFAULT_COIN_CHANCE: u8 = 30;

pub const DEFAULT_PLAYER1_TOKEN: char = 'X';
pub const DEFAULT_PLAYER2_TOKEN: char = 'O';
