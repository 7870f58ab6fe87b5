use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use serde::Deserialize;

use crate::core::consts::{DEFAULT_COIN_CHANCE, DEFAULT_RED_SQUARE_CHANCE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::core::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Duel,
    Multi,
}

#[derive(Parser, Debug, Default)]
#[command(name = "catch-me", about = "Turn-based pursuit game on a square grid")]
pub struct Args {
    /// Duel (two players) or multi (any even number, played pair by pair)
    #[arg(long, value_enum)]
    pub mode: Option<GameMode>,

    /// Board side length, prompted when absent
    #[arg(long)]
    pub size: Option<usize>,

    /// Percent chance per turn of the red square appearing
    #[arg(long)]
    pub red_square_chance: Option<u8>,

    /// Percent chance per turn of a coin appearing
    #[arg(long)]
    pub coin_chance: Option<u8>,

    #[arg(long)]
    pub results: Option<PathBuf>,

    /// Seed for bonus placement
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// JSON settings file, overridden by the flags above
    #[arg(long)]
    pub settings: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub mode: Option<GameMode>,
    pub size: Option<usize>,
    pub red_square_chance: u8,
    pub coin_chance: u8,
    pub results_path: PathBuf,
    pub log_path: PathBuf,
    pub seed: Option<u64>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            mode: None,
            size: None,
            red_square_chance: DEFAULT_RED_SQUARE_CHANCE,
            coin_chance: DEFAULT_COIN_CHANCE,
            results_path: PathBuf::from("Resultats.txt"),
            log_path: PathBuf::from("catch_me.log"),
            seed: None,
        }
    }
}

impl GameSettings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&contents)?)
    }

    pub fn from_args(args: &Args) -> Result<Self, Box<dyn std::error::Error>> {
        let base = match &args.settings {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        let settings = base.with_overrides(args);
        settings.validate()?;
        Ok(settings)
    }

    pub fn with_overrides(mut self, args: &Args) -> Self {
        if args.mode.is_some() {
            self.mode = args.mode;
        }
        if args.size.is_some() {
            self.size = args.size;
        }
        if let Some(chance) = args.red_square_chance {
            self.red_square_chance = chance;
        }
        if let Some(chance) = args.coin_chance {
            self.coin_chance = chance;
        }
        if let Some(path) = &args.results {
            self.results_path = path.clone();
        }
        if let Some(path) = &args.log_file {
            self.log_path = path.clone();
        }
        if args.seed.is_some() {
            self.seed = args.seed;
        }
        self
    }

    pub fn validate(&self) -> Result<(), GameError> {
        for chance in [self.red_square_chance, self.coin_chance] {
            if chance > 100 {
                return Err(GameError::InvalidChance(chance));
            }
        }
        match self.size {
            Some(size) if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) => Err(GameError::InvalidSize(size)),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_match_the_classic_game() {
        let settings = GameSettings::default();
        assert_eq!(settings.red_square_chance, 30);
        assert_eq!(settings.coin_chance, 30);
        assert_eq!(settings.results_path, PathBuf::from("Resultats.txt"));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let settings = GameSettings::from_json(r#"{ "coin_chance": 80, "mode": "multi", "size": 6 }"#).unwrap();
        assert_eq!(settings.coin_chance, 80);
        assert_eq!(settings.red_square_chance, 30);
        assert_eq!(settings.mode, Some(GameMode::Multi));
        assert_eq!(settings.size, Some(6));
    }

    #[test]
    fn flags_override_file_values() {
        let file = GameSettings::from_json(r#"{ "coin_chance": 80, "seed": 5 }"#).unwrap();
        let args = Args::parse_from(["catch-me", "--coin-chance", "10", "--size", "4", "--mode", "duel"]);
        let settings = file.with_overrides(&args);
        assert_eq!(settings.coin_chance, 10);
        assert_eq!(settings.seed, Some(5));
        assert_eq!(settings.size, Some(4));
        assert_eq!(settings.mode, Some(GameMode::Duel));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let args = Args::parse_from(["catch-me", "--red-square-chance", "150"]);
        assert!(matches!(
            GameSettings::default().with_overrides(&args).validate(),
            Err(GameError::InvalidChance(150))
        ));
        let args = Args::parse_from(["catch-me", "--size", "1"]);
        assert!(matches!(
            GameSettings::default().with_overrides(&args).validate(),
            Err(GameError::InvalidSize(1))
        ));
        let args = Args::parse_from(["catch-me", "--size", "101"]);
        assert!(matches!(
            GameSettings::default().with_overrides(&args).validate(),
            Err(GameError::InvalidSize(101))
        ));
    }
}
