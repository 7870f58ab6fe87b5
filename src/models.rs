use crate::core::{Grid, Outcome, PlayerSlot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerColor {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
}

impl PlayerColor {
    pub fn all() -> [PlayerColor; 6] {
        [
            PlayerColor::Red,
            PlayerColor::Green,
            PlayerColor::Yellow,
            PlayerColor::Blue,
            PlayerColor::Magenta,
            PlayerColor::Cyan,
        ]
    }

    /// Menu entries are numbered from 1.
    pub fn from_menu_choice(choice: usize) -> Option<PlayerColor> {
        PlayerColor::all().get(choice.checked_sub(1)?).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            PlayerColor::Red => "Rouge",
            PlayerColor::Green => "Vert",
            PlayerColor::Yellow => "Jaune",
            PlayerColor::Blue => "Bleu",
            PlayerColor::Magenta => "Magenta",
            PlayerColor::Cyan => "Cyan",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub color: PlayerColor,
    pub token: char,
}

impl Player {
    pub fn new(name: impl Into<String>, color: PlayerColor, token: char) -> Self {
        Self {
            name: name.into(),
            color,
            token,
        }
    }
}

/// Result of one duel. `players` are indices into the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuelResult {
    pub players: [usize; 2],
    pub outcome: Outcome,
    pub scores: [u32; 2],
    pub move_counts: [u32; 2],
}

impl DuelResult {
    pub fn winner_index(&self) -> Option<usize> {
        self.outcome.winner().map(|slot| self.players[slot.index()])
    }

    pub fn winner_score(&self) -> Option<u32> {
        self.outcome.winner().map(|slot| self.scores[slot.index()])
    }
}

pub enum RenderStatus<'a> {
    Turn(PlayerSlot),
    Finished(&'a DuelResult),
}

pub struct GameRenderState<'a> {
    pub grid: &'a Grid,
    pub players: [&'a Player; 2],
    pub scores: [u32; 2],
    pub duel_index: usize,
    pub remaining_turns: u32,
    pub status: RenderStatus<'a>,
    pub error: Option<&'static str>,
}

pub struct SummaryRenderState<'a> {
    pub winners: Vec<&'a Player>,
    pub draws: usize,
    pub multiplayer: bool,
}
