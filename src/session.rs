use std::error::Error;

use log::{debug, info};

use crate::core::{BonusSpawner, GameError, Grid, Outcome, PlayerSlot, Round};
use crate::models::{DuelResult, GameRenderState, Player, RenderStatus, SummaryRenderState};
use crate::setup::check_player_count;

/// Source of keystrokes for the running game.
pub trait PlayerInput {
    /// Blocks until a key is pressed. `None` means the operator abandoned the session.
    fn request_move(&mut self) -> Result<Option<char>, Box<dyn Error>>;

    fn wait_for_key(&mut self) -> Result<(), Box<dyn Error>>;

    /// Yes/no question answered with 'o' or 'n'.
    fn confirm(&mut self) -> Result<bool, Box<dyn Error>>;
}

pub trait Renderer {
    fn render(&mut self, state: &GameRenderState) -> Result<(), Box<dyn Error>>;

    fn render_summary(&mut self, summary: &SummaryRenderState) -> Result<(), Box<dyn Error>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Completed,
    Abandoned,
}

/// Plays every duel of the roster in order on one board.
pub struct Session {
    roster: Vec<Player>,
    scores: Vec<u32>,
    results: Vec<DuelResult>,
    grid: Option<Grid>,
}

pub fn input_error_message(error: &GameError) -> Option<&'static str> {
    match error {
        GameError::OutOfBounds { .. } => Some("Déplacement impossible."),
        GameError::UnknownDirection(_) => Some("Saisie incorrecte."),
        _ => None,
    }
}

impl Session {
    pub fn new(roster: Vec<Player>, size: usize) -> Result<Session, GameError> {
        check_player_count(roster.len())?;
        let grid = Grid::new(size)?;
        Ok(Session {
            scores: vec![0; roster.len()],
            roster,
            results: Vec::new(),
            grid: Some(grid),
        })
    }

    pub fn roster(&self) -> &[Player] {
        &self.roster
    }

    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    pub fn results(&self) -> &[DuelResult] {
        &self.results
    }

    pub fn duel_count(&self) -> usize {
        self.roster.len() / 2
    }

    pub fn summary(&self) -> SummaryRenderState<'_> {
        SummaryRenderState {
            winners: self
                .results
                .iter()
                .filter_map(|r| r.winner_index())
                .map(|i| &self.roster[i])
                .collect(),
            draws: self.results.iter().filter(|r| r.outcome == Outcome::Draw).count(),
            multiplayer: self.duel_count() > 1,
        }
    }

    pub fn run(
        &mut self,
        spawner: &mut BonusSpawner,
        input: &mut impl PlayerInput,
        renderer: &mut impl Renderer,
    ) -> Result<SessionEnd, Box<dyn Error>> {
        for duel_index in 0..self.duel_count() {
            if self.play_duel(duel_index, spawner, input, renderer)?.is_none() {
                info!("session abandoned during duel {}", duel_index);
                return Ok(SessionEnd::Abandoned);
            }
        }
        Ok(SessionEnd::Completed)
    }

    /// Runs one duel to its end. `None` if the operator quit midway.
    ///
    /// The grid goes back to the session however the duel ends, and scores and
    /// results are only committed once the result screen was acknowledged.
    pub fn play_duel(
        &mut self,
        duel_index: usize,
        spawner: &mut BonusSpawner,
        input: &mut impl PlayerInput,
        renderer: &mut impl Renderer,
    ) -> Result<Option<DuelResult>, Box<dyn Error>> {
        let grid = self.grid.take().ok_or(GameError::RoundNotInProgress)?;
        let mut round = Round::start(grid);
        info!(
            "duel {}: {} vs. {} on a {}x{} board, {} turns",
            duel_index,
            self.roster[duel_index * 2].name,
            self.roster[duel_index * 2 + 1].name,
            round.size(),
            round.size(),
            round.remaining_turns()
        );

        let played = self.play_round(&mut round, duel_index, spawner, input, renderer);
        self.grid = Some(round.into_grid());

        let Some(result) = played? else {
            return Ok(None);
        };
        for (index, score) in result.players.into_iter().zip(result.scores) {
            self.scores[index] = score;
        }
        self.results.push(result.clone());
        Ok(Some(result))
    }

    fn play_round(
        &self,
        round: &mut Round,
        duel_index: usize,
        spawner: &mut BonusSpawner,
        input: &mut impl PlayerInput,
        renderer: &mut impl Renderer,
    ) -> Result<Option<DuelResult>, Box<dyn Error>> {
        while let Some(slot) = round.state().current_player() {
            round.begin_turn(spawner)?;
            renderer.render(&self.render_state(round, duel_index, RenderStatus::Turn(slot), None))?;

            loop {
                let Some(token) = input.request_move()? else {
                    return Ok(None);
                };
                match round.apply_move(token) {
                    Ok(effect) => {
                        debug!("{:?} played {:?}: {:?}", slot, token, effect);
                        let next = round.state().current_player().unwrap_or(slot);
                        renderer.render(&self.render_state(round, duel_index, RenderStatus::Turn(next), None))?;
                        break;
                    }
                    Err(e) => {
                        let Some(message) = input_error_message(&e) else {
                            return Err(e.into());
                        };
                        debug!("rejected {:?} from {:?}: {}", token, slot, e);
                        let state = self.render_state(round, duel_index, RenderStatus::Turn(slot), Some(message));
                        renderer.render(&state)?;
                    }
                }
            }
        }

        let outcome = round.finish()?;
        let players = [duel_index * 2, duel_index * 2 + 1];
        let points = round.scores();
        let result = DuelResult {
            players,
            outcome,
            scores: [
                self.scores[players[0]] + points[0],
                self.scores[players[1]] + points[1],
            ],
            move_counts: [
                round.move_count(PlayerSlot::Player1),
                round.move_count(PlayerSlot::Player2),
            ],
        };
        info!("duel {} finished: {:?}, scores {:?}", duel_index, outcome, result.scores);
        debug!(
            "duel {} bonuses: red square {:?}, {} coins",
            duel_index,
            round.red_square(),
            round.coins().len()
        );

        renderer.render(&self.render_state(round, duel_index, RenderStatus::Finished(&result), None))?;
        input.wait_for_key()?;
        Ok(Some(result))
    }

    fn render_state<'a>(
        &'a self,
        round: &'a Round,
        duel_index: usize,
        status: RenderStatus<'a>,
        error: Option<&'static str>,
    ) -> GameRenderState<'a> {
        let players = [&self.roster[duel_index * 2], &self.roster[duel_index * 2 + 1]];
        // session totals are only folded in once the duel ends
        let scores = match status {
            RenderStatus::Finished(result) => result.scores,
            RenderStatus::Turn(_) => [
                self.scores[duel_index * 2] + round.score(PlayerSlot::Player1),
                self.scores[duel_index * 2 + 1] + round.score(PlayerSlot::Player2),
            ],
        };
        GameRenderState {
            grid: round.grid(),
            players,
            scores,
            duel_index,
            remaining_turns: round.remaining_turns(),
            status,
            error,
        }
    }
}
