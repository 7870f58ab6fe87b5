use std::fs::OpenOptions;
use std::path::Path;

use env_logger::{Env, Target};

/// The game owns the terminal, so log records go to a file instead of stderr.
pub fn init_logger(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(())
}
