use crate::core::{Outcome, PlayerSlot, RoundState, WinKind};

impl Outcome {
    pub fn won(slot: PlayerSlot, kind: WinKind) -> Outcome {
        match (slot, kind) {
            (PlayerSlot::Player1, WinKind::Capture) => Outcome::Player1WinByCapture,
            (PlayerSlot::Player2, WinKind::Capture) => Outcome::Player2WinByCapture,
            (PlayerSlot::Player1, WinKind::RedSquare) => Outcome::Player1WinByRedSquare,
            (PlayerSlot::Player2, WinKind::RedSquare) => Outcome::Player2WinByRedSquare,
        }
    }

    pub fn by_score(scores: [u32; 2]) -> Outcome {
        match scores[0].cmp(&scores[1]) {
            std::cmp::Ordering::Greater => Outcome::Player1WinByScore,
            std::cmp::Ordering::Less => Outcome::Player2WinByScore,
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }

    pub fn winner(&self) -> Option<PlayerSlot> {
        match self {
            Outcome::Player1WinByCapture
            | Outcome::Player1WinByRedSquare
            | Outcome::Player1WinByScore => Some(PlayerSlot::Player1),
            Outcome::Player2WinByCapture
            | Outcome::Player2WinByRedSquare
            | Outcome::Player2WinByScore => Some(PlayerSlot::Player2),
            Outcome::Draw => None,
        }
    }

    /// `None` for score wins and draws.
    pub fn win_kind(&self) -> Option<WinKind> {
        match self {
            Outcome::Player1WinByCapture | Outcome::Player2WinByCapture => Some(WinKind::Capture),
            Outcome::Player1WinByRedSquare | Outcome::Player2WinByRedSquare => {
                Some(WinKind::RedSquare)
            }
            _ => None,
        }
    }
}

impl RoundState {
    pub fn current_player(&self) -> Option<PlayerSlot> {
        match self {
            RoundState::AwaitingTurn(slot) | RoundState::TurnInProgress(slot) => Some(*slot),
            _ => None,
        }
    }
}
