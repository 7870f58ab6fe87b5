use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use crate::models::{DuelResult, Player};

pub const RESULTS_HEADER: &str = "Liste des gagnants :";

fn points(score: u32) -> String {
    if score == 1 {
        format!("{} point", score)
    } else {
        format!("{} points", score)
    }
}

pub fn format_duel_line(roster: &[Player], result: &DuelResult) -> String {
    let [first, second] = result.players.map(|i| roster[i].name.as_str());
    match (result.winner_index(), result.winner_score()) {
        (Some(winner), Some(score)) => format!(
            "{} vs. {} : {} a gagné avec {}",
            first,
            second,
            roster[winner].name,
            points(score)
        ),
        _ => format!(
            "{} vs. {} : match nul avec {}",
            first,
            second,
            points(result.scores[0])
        ),
    }
}

/// One header, one line per duel, then a blank line separating runs.
pub fn format_results(roster: &[Player], results: &[DuelResult]) -> String {
    let mut out = String::new();
    out.push_str(RESULTS_HEADER);
    out.push('\n');
    for result in results {
        out.push_str(&format_duel_line(roster, result));
        out.push('\n');
    }
    out.push('\n');
    out
}

pub fn append_results(path: &Path, roster: &[Player], results: &[DuelResult]) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(format_results(roster, results).as_bytes())?;
    log::info!("saved {} duel result(s) to {}", results.len(), path.display());
    Ok(())
}
