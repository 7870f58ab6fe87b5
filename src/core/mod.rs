mod model_helpers;
mod models;
mod grid;
mod error;
mod spawner;
pub mod consts;
pub mod moves;
pub mod round;

pub use models::{
    Cell, Direction, MoveEffect, Outcome, PlayerSlot, Position, RoundState, TurnSpawns, WinKind,
};
pub use error::GameError;
pub use grid::Grid;
pub use spawner::BonusSpawner;
pub use round::Round;
