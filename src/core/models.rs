#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Player1Token,
    Player2Token,
    RedSquare,
    Coin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Position {
        Position { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerSlot {
    Player1,
    Player2,
}

impl PlayerSlot {
    pub fn index(self) -> usize {
        match self {
            PlayerSlot::Player1 => 0,
            PlayerSlot::Player2 => 1,
        }
    }

    pub fn opponent(self) -> PlayerSlot {
        match self {
            PlayerSlot::Player1 => PlayerSlot::Player2,
            PlayerSlot::Player2 => PlayerSlot::Player1,
        }
    }

    pub fn token(self) -> Cell {
        match self {
            PlayerSlot::Player1 => Cell::Player1Token,
            PlayerSlot::Player2 => Cell::Player2Token,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    UpLeft,
    Up,
    UpRight,
    Left,
    Right,
    DownLeft,
    Down,
    DownRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WinKind {
    Capture,
    RedSquare,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundState {
    AwaitingTurn(PlayerSlot),
    TurnInProgress(PlayerSlot),
    RoundWon(PlayerSlot, WinKind),
    RoundExhausted,
    RoundFinished(Outcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Player1WinByCapture,
    Player2WinByCapture,
    Player1WinByRedSquare,
    Player2WinByRedSquare,
    Player1WinByScore,
    Player2WinByScore,
    Draw,
}

/// What happened to the acting player's move, once it was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveEffect {
    Moved,
    CollectedCoins(u32),
    Won(WinKind),
}

/// Bonus tokens placed at the start of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TurnSpawns {
    pub red_square: Option<Position>,
    pub coin: Option<Position>,
}
