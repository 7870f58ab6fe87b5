use std::error::Error;
use std::io::{self, IsTerminal};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::core::{Cell, GameError, Grid, Outcome};
use crate::models::{GameRenderState, Player, PlayerColor, RenderStatus, SummaryRenderState};
use crate::session::{PlayerInput, Renderer};

pub type ConsoleTerminal = Terminal<CrosstermBackend<io::Stdout>>;

const EMPTY_SYMBOL: char = '_';
const RED_SQUARE_SYMBOL: char = '#';
const COIN_SYMBOL: char = '+';

const MOVE_LEGEND: &str = " A   Z   E\n     ^\nQ  < o >  D\n     v\n W   X   C";

pub fn setup_terminal() -> Result<ConsoleTerminal, Box<dyn Error>> {
    if !io::stdin().is_terminal() {
        return Err(GameError::NotATerminal.into());
    }
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

/// Restores the terminal before the default panic message is printed.
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = cleanup_terminal();
        default_hook(info);
    }));
}

/// Raw-mode terminal that is restored when dropped, whichever way the game exits.
pub struct ConsoleSession {
    terminal: ConsoleTerminal,
}

impl ConsoleSession {
    pub fn start() -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            terminal: setup_terminal()?,
        })
    }
}

impl Drop for ConsoleSession {
    fn drop(&mut self) {
        if let Err(e) = cleanup_terminal() {
            log::error!("failed to restore terminal: {}", e);
        }
    }
}

pub enum ConsoleInput {
    Key(char),
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => ConsoleInput::Quit,
                KeyCode::Char(c) => ConsoleInput::Key(c),
                KeyCode::Enter => ConsoleInput::Key('\n'),
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}

/// Keystrokes read straight from the raw-mode terminal.
pub struct KeyboardInput;

impl PlayerInput for KeyboardInput {
    fn request_move(&mut self) -> Result<Option<char>, Box<dyn Error>> {
        loop {
            match handle_input()? {
                ConsoleInput::Key(c) => return Ok(Some(c)),
                ConsoleInput::Quit => return Ok(None),
                ConsoleInput::Timeout | ConsoleInput::Unknown => {}
            }
        }
    }

    fn wait_for_key(&mut self) -> Result<(), Box<dyn Error>> {
        loop {
            match handle_input()? {
                ConsoleInput::Timeout => {}
                _ => return Ok(()),
            }
        }
    }

    fn confirm(&mut self) -> Result<bool, Box<dyn Error>> {
        loop {
            match handle_input()? {
                ConsoleInput::Key('o') | ConsoleInput::Key('O') => return Ok(true),
                ConsoleInput::Key('n') | ConsoleInput::Key('N') | ConsoleInput::Quit => {
                    return Ok(false);
                }
                _ => {}
            }
        }
    }
}

impl Renderer for ConsoleSession {
    fn render(&mut self, state: &GameRenderState) -> Result<(), Box<dyn Error>> {
        render_game(&mut self.terminal, state)
    }

    fn render_summary(&mut self, summary: &SummaryRenderState) -> Result<(), Box<dyn Error>> {
        render_summary(&mut self.terminal, summary)
    }
}

pub fn player_color(color: PlayerColor) -> Color {
    match color {
        PlayerColor::Red => Color::Red,
        PlayerColor::Green => Color::Green,
        PlayerColor::Yellow => Color::Yellow,
        PlayerColor::Blue => Color::Blue,
        PlayerColor::Magenta => Color::Magenta,
        PlayerColor::Cyan => Color::Cyan,
    }
}

fn colored_name(player: &Player) -> Span<'_> {
    Span::styled(
        player.name.as_str(),
        Style::default()
            .fg(player_color(player.color))
            .add_modifier(Modifier::BOLD),
    )
}

pub fn cell_symbol(cell: Cell, players: [&Player; 2]) -> char {
    match cell {
        Cell::Empty => EMPTY_SYMBOL,
        Cell::Player1Token => players[0].token,
        Cell::Player2Token => players[1].token,
        Cell::RedSquare => RED_SQUARE_SYMBOL,
        Cell::Coin => COIN_SYMBOL,
    }
}

pub fn render_grid_to_string(grid: &Grid, players: [&Player; 2]) -> String {
    let mut result = String::new();
    for row in grid.rows() {
        result.push('|');
        for &cell in row {
            result.push(cell_symbol(cell, players));
            result.push('|');
        }
        result.push('\n');
    }
    result
}

fn grid_lines<'a>(grid: &Grid, players: [&'a Player; 2]) -> Vec<Line<'a>> {
    grid.rows()
        .map(|row| {
            let mut spans = vec![Span::raw("|")];
            for &cell in row {
                let style = match cell {
                    Cell::Player1Token => Style::default().fg(player_color(players[0].color)),
                    Cell::Player2Token => Style::default().fg(player_color(players[1].color)),
                    Cell::RedSquare => Style::default().fg(Color::Red),
                    Cell::Coin => Style::default().fg(Color::Blue),
                    Cell::Empty => Style::default(),
                };
                spans.push(Span::styled(cell_symbol(cell, players).to_string(), style));
                spans.push(Span::raw("|"));
            }
            Line::from(spans)
        })
        .collect()
}

pub fn turns_left_text(remaining: u32) -> String {
    if remaining == 1 {
        format!("{} tour restant", remaining)
    } else {
        format!("{} tours restants", remaining)
    }
}

pub fn outcome_text(state: &GameRenderState, outcome: Outcome, move_counts: [u32; 2]) -> String {
    match outcome.winner() {
        Some(slot) if outcome.win_kind().is_some() => format!(
            "{} gagne en {} tours avec {} points.",
            state.players[slot.index()].name,
            move_counts[slot.index()],
            state.scores[slot.index()]
        ),
        Some(slot) => format!(
            "{} gagne grâce à ses {} points.",
            state.players[slot.index()].name,
            state.scores[slot.index()]
        ),
        None => "Match nul !".to_string(),
    }
}

pub fn status_text(state: &GameRenderState) -> String {
    let text = match &state.status {
        RenderStatus::Turn(slot) => format!(
            "{} | C'est à {} de jouer",
            turns_left_text(state.remaining_turns),
            state.players[slot.index()].name
        ),
        RenderStatus::Finished(result) => format!(
            "{} | Appuyez sur une touche pour continuer",
            outcome_text(state, result.outcome, result.move_counts)
        ),
    };
    match state.error {
        Some(err) => format!("{} | {}", text, err),
        None => text,
    }
}

pub fn render_game(terminal: &mut ConsoleTerminal, state: &GameRenderState) -> Result<(), Box<dyn Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Length(7),
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(f.area());

        let legend = Paragraph::new(MOVE_LEGEND)
            .block(Block::default().borders(Borders::ALL).title("Déplacements"))
            .style(Style::default().fg(Color::Blue))
            .alignment(Alignment::Center);
        f.render_widget(legend, chunks[0]);

        let [first, second] = state.players;
        let header = Paragraph::new(vec![
            Line::from(vec![colored_name(first), Span::raw("    vs.    "), colored_name(second)]),
            Line::from(format!("Score : {}    /    {}", state.scores[0], state.scores[1])),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Duel {}", state.duel_index + 1)),
        )
        .alignment(Alignment::Center);
        f.render_widget(header, chunks[1]);

        let board = Paragraph::new(grid_lines(state.grid, state.players))
            .block(Block::default().borders(Borders::ALL).title("Plateau"))
            .alignment(Alignment::Center);
        f.render_widget(board, chunks[2]);

        let status = Paragraph::new(status_text(state))
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(status, chunks[3]);
    })?;
    Ok(())
}

pub fn summary_lines<'a>(summary: &SummaryRenderState<'a>) -> Vec<Line<'a>> {
    let title = if summary.multiplayer {
        "Les vainqueurs ont été :"
    } else {
        "Le vainqueur a été :"
    };
    let mut lines = vec![Line::from(title), Line::from("")];
    lines.extend(summary.winners.iter().map(|&p| Line::from(colored_name(p))));
    if summary.draws > 0 {
        lines.push(Line::from(format!("Matchs nuls : {}", summary.draws)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(
        "Souhaitez-vous enregistrer les résultats des parties ? ('o' ou 'n')",
    ));
    lines
}

pub fn render_summary(terminal: &mut ConsoleTerminal, summary: &SummaryRenderState) -> Result<(), Box<dyn Error>> {
    terminal.draw(|f| {
        let paragraph = Paragraph::new(summary_lines(summary))
            .block(Block::default().borders(Borders::ALL).title("Résultats"))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, f.area());
    })?;
    Ok(())
}

