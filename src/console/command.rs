use crate::board::{Piece, Player, Square};

use super::ConsoleError;

/// Engine binding requested by `new`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewGame {
    /// Same engine binding as the configuration
    Configured,
    /// Two human players
    Human,
    /// Engine plays the given side
    Ai(Player),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Board,
    Move { from: Square, to: Square },
    Moves(Square),
    Turn,
    New(NewGame),
    Place { square: Square, piece: Piece },
    Remove(Square),
    Clear,
    Winner,
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_console_command(line: &str) -> Result<Option<ConsoleCommand>, ConsoleError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    let command = parts[0].to_ascii_lowercase();
    let arg = |idx: usize, argument: &'static str| {
        parts
            .get(idx)
            .copied()
            .ok_or_else(|| ConsoleError::MissingArgument {
                command: command.clone(),
                argument,
            })
    };

    let cmd = match command.as_str() {
        "board" | "show" => ConsoleCommand::Board,
        "move" | "m" => match parts.len() {
            2 => parse_move_pair(parts[1])?,
            _ => ConsoleCommand::Move {
                from: arg(1, "from")?.parse()?,
                to: arg(2, "to")?.parse()?,
            },
        },
        "moves" => ConsoleCommand::Moves(arg(1, "square")?.parse()?),
        "turn" => ConsoleCommand::Turn,
        "new" => ConsoleCommand::New(match parts.get(1) {
            None => NewGame::Configured,
            Some(&"none") | Some(&"human") => NewGame::Human,
            Some(name) => NewGame::Ai(name.parse()?),
        }),
        "place" => {
            let square = arg(1, "square")?.parse()?;
            let letter = arg(2, "piece")?;
            let mut chars = letter.chars();
            let piece = match (chars.next(), chars.next()) {
                (Some(c), None) => Piece::from_char(c)?,
                _ => {
                    return Err(ConsoleError::InvalidArgument {
                        argument: letter.to_string(),
                    })
                }
            };
            ConsoleCommand::Place { square, piece }
        }
        "remove" => ConsoleCommand::Remove(arg(1, "square")?.parse()?),
        "clear" => ConsoleCommand::Clear,
        "winner" => ConsoleCommand::Winner,
        "help" | "?" => ConsoleCommand::Help,
        "quit" | "exit" => ConsoleCommand::Quit,
        // A bare coordinate move such as "e2e4"
        _ if parts.len() == 1 && (4..=5).contains(&trimmed.len()) => parse_move_pair(trimmed)?,
        _ => {
            return Err(ConsoleError::UnknownCommand {
                command: trimmed.to_string(),
            })
        }
    };

    Ok(Some(cmd))
}

/// "e2e4" -> move from e2 to e4. A trailing promotion letter is accepted
/// and ignored, pawns always promote to a queen.
fn parse_move_pair(text: &str) -> Result<ConsoleCommand, ConsoleError> {
    let invalid = || ConsoleError::InvalidArgument {
        argument: text.to_string(),
    };
    let body = match text.len() {
        4 => text,
        5 if text.ends_with(|c: char| c.eq_ignore_ascii_case(&'q')) => &text[..4],
        _ => return Err(invalid()),
    };
    if !body.is_ascii() {
        return Err(invalid());
    }
    Ok(ConsoleCommand::Move {
        from: body[..2].parse()?,
        to: body[2..].parse()?,
    })
}
