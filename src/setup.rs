use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::config::GameMode;
use crate::core::consts::{DEFAULT_PLAYER1_TOKEN, DEFAULT_PLAYER2_TOKEN, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::core::GameError;
use crate::models::{Player, PlayerColor};

/// Symbols the board already uses for empty cells and bonuses.
const RESERVED_TOKENS: [char; 4] = ['_', '#', '+', '|'];

pub const BANNER: &str = "\
************************************************************
*                                                          *
*               Bienvenue dans le jeu !                    *
*                                                          *
************************************************************";

/// Reads lines until one parses as `T`. Only end of input stops it.
pub fn prompt_value<T: FromStr>(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<T> {
    loop {
        write!(output, "\n? ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        if let Ok(value) = line.trim().parse() {
            return Ok(value);
        }
    }
}

/// Like `prompt_value`, re-asking with `retry` until `accept` holds.
pub fn prompt_until<T: FromStr>(
    input: &mut impl BufRead,
    output: &mut impl Write,
    retry: &str,
    accept: impl Fn(&T) -> bool,
) -> io::Result<T> {
    loop {
        let value = prompt_value(input, output)?;
        if accept(&value) {
            return Ok(value);
        }
        write!(output, "{}", retry)?;
    }
}

pub fn prompt_mode(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<GameMode> {
    writeln!(output, "Sélectionner un mode de jeu :\n1. Duel\n2. Multijoueur")?;
    let choice: u32 = prompt_until(input, output, "\nSaisie incorrecte.", |c: &u32| *c == 1 || *c == 2)?;
    Ok(if choice == 1 { GameMode::Duel } else { GameMode::Multi })
}

pub fn prompt_size(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<usize> {
    write!(output, "Saisir la taille de la matrice :")?;
    let retry = format!(
        "Veuillez saisir une taille entre {} et {} : ",
        MIN_BOARD_SIZE, MAX_BOARD_SIZE
    );
    prompt_until(input, output, &retry, |s: &usize| {
        (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(s)
    })
}

pub fn prompt_color(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<PlayerColor> {
    writeln!(output, "Choisir sa couleur :")?;
    for (i, color) in PlayerColor::all().iter().enumerate() {
        writeln!(output, "{}. {}", i + 1, color.label())?;
    }
    loop {
        let choice: usize = prompt_value(input, output)?;
        if let Some(color) = PlayerColor::from_menu_choice(choice) {
            return Ok(color);
        }
        write!(output, "Saisie incorrecte.")?;
    }
}

fn prompt_name(input: &mut impl BufRead, output: &mut impl Write, number: usize) -> io::Result<String> {
    write!(output, "Nom du joueur {} : ", number)?;
    prompt_until(input, output, "Le nom ne peut pas être vide.", |name: &String| {
        !name.is_empty()
    })
}

fn prompt_token(
    input: &mut impl BufRead,
    output: &mut impl Write,
    number: usize,
    taken: Option<char>,
) -> io::Result<char> {
    write!(output, "Saisir le caractère qui sera le pion du joueur {} : ", number)?;
    prompt_until(input, output, "Ce caractère n'est pas disponible.", |token: &char| {
        !token.is_whitespace() && !RESERVED_TOKENS.contains(token) && Some(*token) != taken
    })
}

pub fn prompt_player_count(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<usize> {
    write!(output, "Saisir le nombre de joueurs : ")?;
    prompt_until(input, output, "Veuillez saisir un nombre pair de joueurs : ", |n: &usize| {
        check_player_count(*n).is_ok()
    })
}

pub fn check_player_count(count: usize) -> Result<(), GameError> {
    if count < 2 || count % 2 != 0 {
        return Err(GameError::OddPlayerCount(count));
    }
    Ok(())
}

/// Builds the roster. Consecutive entries face each other.
pub fn init_players(
    mode: GameMode,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<Vec<Player>> {
    let mut roster = Vec::new();
    match mode {
        GameMode::Duel => {
            for number in 1..=2 {
                let name = prompt_name(input, output, number)?;
                let taken = roster.first().map(|p: &Player| p.token);
                let token = prompt_token(input, output, number, taken)?;
                let color = prompt_color(input, output)?;
                roster.push(Player::new(name, color, token));
            }
        }
        GameMode::Multi => {
            let count = prompt_player_count(input, output)?;
            for number in 1..=count {
                let name = prompt_name(input, output, number)?;
                let color = prompt_color(input, output)?;
                let token = if number % 2 == 1 {
                    DEFAULT_PLAYER1_TOKEN
                } else {
                    DEFAULT_PLAYER2_TOKEN
                };
                roster.push(Player::new(name, color, token));
            }
        }
    }
    Ok(roster)
}
