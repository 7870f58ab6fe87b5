use crate::core::consts::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::core::{Direction, Position};

#[derive(Debug)]
pub enum GameError {
    InvalidSize(usize),
    UnknownDirection(char),
    OutOfBounds {
        direction: Direction,
        from: Position,
        size: usize,
    },
    NotATerminal,
    RoundNotInProgress,
    InvalidChance(u8),
    OddPlayerCount(usize),
    Io(std::io::Error),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidSize(size) => {
                write!(
                    f,
                    "Board size must be between {} and {}, got {}",
                    MIN_BOARD_SIZE, MAX_BOARD_SIZE, size
                )
            }
            GameError::UnknownDirection(token) => write!(f, "Unknown direction {:?}", token),
            GameError::OutOfBounds { direction, from, size } => write!(
                f,
                "Moving {:?} from ({}, {}) leaves the {}x{} board",
                direction, from.row, from.col, size, size
            ),
            GameError::NotATerminal => write!(f, "Not a terminal."),
            GameError::RoundNotInProgress => write!(f, "The round is not accepting this action"),
            GameError::InvalidChance(chance) => {
                write!(f, "Spawn chance must be between 0 and 100, got {}", chance)
            }
            GameError::OddPlayerCount(count) => {
                write!(f, "Player count must be even, got {}", count)
            }
            GameError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for GameError {}

impl From<std::io::Error> for GameError {
    fn from(e: std::io::Error) -> Self {
        GameError::Io(e)
    }
}
