//! Prompt command parsing.

use anyhow::{Result, bail};
use parlor_core::Square;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `e2e4`, or `e7e8q` (promotion is always to a queen).
    Move { from: Square, to: Square },
    /// A bare square: select a piece, or play to a highlighted target.
    Square(Square),
    Moves(Square),
    Board,
    Fen,
    New,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  e2e4          play a move (promotion always makes a queen; e7e8q is accepted)
  e2            select a piece, then enter a highlighted square to move it
  moves <sq>    list where the piece on <sq> can go
  board         redraw the board
  fen           print the position as FEN
  new           start a new game
  help          show this text
  quit          leave";

impl Command {
    pub fn parse(line: &str) -> Result<Command> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            bail!("empty command");
        };
        let head = head.to_ascii_lowercase();
        let cmd = match head.as_str() {
            "board" | "b" => Command::Board,
            "fen" => Command::Fen,
            "new" => Command::New,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            "moves" => {
                let Some(sq) = words.next() else {
                    bail!("usage: moves <square>");
                };
                Command::Moves(sq.to_ascii_lowercase().parse()?)
            }
            word => parse_coordinates(word)?,
        };
        if words.next().is_some() {
            bail!("unexpected trailing input in '{}'", line.trim());
        }
        Ok(cmd)
    }
}

fn parse_coordinates(word: &str) -> Result<Command> {
    match word.len() {
        2 => Ok(Command::Square(word.parse()?)),
        4 | 5 => {
            if !word.is_ascii() {
                bail!("unknown command '{word}'");
            }
            let from: Square = word[0..2].parse()?;
            let to: Square = word[2..4].parse()?;
            if let Some(promo) = word[4..].chars().next()
                && promo != 'q'
            {
                bail!("only queen promotion is supported, got '{promo}'");
            }
            Ok(Command::Move { from, to })
        }
        _ => bail!("unknown command '{word}' (type 'help')"),
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
