// Catch me if you can: a turn-based pursuit game on a square grid.
// Moves: A Z E / Q D / W X C (case-insensitive). Esc to quit.
// Board: '_' empty, player tokens, '#' red square (instant win), '+' coin (one point).

mod config;
mod console_interface;
mod core;
mod logger;
mod models;
mod results;
mod session;
mod setup;
#[cfg(test)]
mod test;

use std::io;

use clap::Parser;
use log::info;

use crate::config::{Args, GameSettings};
use crate::console_interface::{ConsoleSession, KeyboardInput, install_panic_hook};
use crate::core::BonusSpawner;
use crate::logger::init_logger;
use crate::results::append_results;
use crate::session::{PlayerInput, Renderer, Session, SessionEnd};
use crate::setup::{BANNER, init_players, prompt_mode, prompt_size};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let settings = GameSettings::from_args(&args)?;
    init_logger(&settings.log_path)?;
    info!("starting with {:?}", settings);

    let roster;
    let size;
    {
        let mut input = io::stdin().lock();
        let mut output = io::stdout();
        println!("{}\n", BANNER);

        let mode = match settings.mode {
            Some(mode) => mode,
            None => prompt_mode(&mut input, &mut output)?,
        };
        size = match settings.size {
            Some(size) => size,
            None => prompt_size(&mut input, &mut output)?,
        };
        roster = init_players(mode, &mut input, &mut output)?;
    }

    let mut spawner = match settings.seed {
        Some(seed) => BonusSpawner::new(seed, settings.red_square_chance, settings.coin_chance)?,
        None => BonusSpawner::from_random(settings.red_square_chance, settings.coin_chance)?,
    };
    info!("bonus spawner seed {}", spawner.seed());

    let mut session = Session::new(roster, size)?;

    install_panic_hook();
    let (end, save) = {
        let mut console = ConsoleSession::start()?;
        let mut keyboard = KeyboardInput;
        let end = session.run(&mut spawner, &mut keyboard, &mut console)?;
        let save = if end == SessionEnd::Completed {
            console.render_summary(&session.summary())?;
            keyboard.confirm()?
        } else {
            false
        };
        (end, save)
    };

    if save {
        append_results(&settings.results_path, session.roster(), session.results())?;
        println!("\nRésultats sauvegardés.");
    } else if end == SessionEnd::Abandoned {
        println!("Partie abandonnée.");
    }

    Ok(())
}
