use crate::core::{Direction, GameError, Position};

impl Direction {
    pub fn all() -> [Direction; 8] {
        [
            Direction::UpLeft,
            Direction::Up,
            Direction::UpRight,
            Direction::Left,
            Direction::Right,
            Direction::DownLeft,
            Direction::Down,
            Direction::DownRight,
        ]
    }

    /// Keyboard layout: A Z E on top, Q D in the middle, W X C at the bottom.
    pub fn from_token(token: char) -> Result<Direction, GameError> {
        let upper = token.to_ascii_uppercase();
        Direction::all()
            .into_iter()
            .find(|d| d.token() == upper)
            .ok_or(GameError::UnknownDirection(token))
    }

    pub fn token(self) -> char {
        match self {
            Direction::UpLeft => 'A',
            Direction::Up => 'Z',
            Direction::UpRight => 'E',
            Direction::Left => 'Q',
            Direction::Right => 'D',
            Direction::DownLeft => 'W',
            Direction::Down => 'X',
            Direction::DownRight => 'C',
        }
    }

    /// (row, column) unit delta
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::UpLeft => (-1, -1),
            Direction::Up => (-1, 0),
            Direction::UpRight => (-1, 1),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::DownLeft => (1, -1),
            Direction::Down => (1, 0),
            Direction::DownRight => (1, 1),
        }
    }
}

pub fn apply_direction(
    direction: Direction,
    position: Position,
    size: usize,
) -> Result<Position, GameError> {
    let (di, dj) = direction.delta();
    let in_bounds = |value: usize, delta: isize| {
        value.checked_add_signed(delta).filter(|&v| v < size)
    };

    match (in_bounds(position.row, di), in_bounds(position.col, dj)) {
        (Some(row), Some(col)) => Ok(Position { row, col }),
        _ => Err(GameError::OutOfBounds {
            direction,
            from: position,
            size,
        }),
    }
}

/// Resolves a raw direction token against the board. Never mutates anything;
/// the caller decides whether to re-prompt on error.
pub fn validate(token: char, position: Position, size: usize) -> Result<Position, GameError> {
    let direction = Direction::from_token(token)?;
    apply_direction(direction, position, size)
}
