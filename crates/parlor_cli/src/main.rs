//! `parlor`: play chess against the tiered engine in a terminal.

mod command;
mod render;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use parlor_core::{
    Color, Engine, EngineConfig, Game, GameMode, Square, Strength, TieredEngine,
};

use command::{Command, HELP};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Both sides at the keyboard
    Human,
    /// Play against the engine
    Machine,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, value_enum, default_value_t = Mode::Machine)]
    mode: Mode,

    /// weak, medium or strong (easy and hard are accepted too)
    #[arg(long, default_value_t = Strength::Medium)]
    strength: Strength,

    /// Side the engine plays in machine mode
    #[arg(long, default_value_t = Color::Black)]
    machine_color: Color,

    /// TOML file overriding piece values and search settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Seed the engine for a reproducible game
    #[arg(long)]
    seed: Option<u64>,
}

fn init_logging(level: &str) {
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, level),
    )
    .target(env_logger::Target::Stderr)
    .init();
}

/// Prompt state between lines: the game plus the piece picked by a bare
/// square, if any.
struct Session {
    game: Game<TieredEngine>,
    selected: Option<Square>,
}

impl Session {
    fn show_board(&self, out: &mut impl Write) -> Result<()> {
        let targets = self
            .selected
            .map(|sq| self.game.selectable_targets(sq))
            .unwrap_or_default();
        write!(
            out,
            "{}",
            render::board(self.game.position(), self.selected, &targets)
        )?;
        Ok(())
    }

    fn show_status(&self, out: &mut impl Write) -> Result<()> {
        let status = self.game.status();
        if status.message.is_empty() {
            writeln!(out, "{} to move.", self.game.position().side_to_move)?;
        } else {
            writeln!(out, "{}", status.message)?;
        }
        Ok(())
    }

    fn play(&mut self, from: Square, to: Square, out: &mut impl Write) -> Result<()> {
        self.selected = None;
        if let Err(e) = self.game.play(from, to) {
            writeln!(out, "{e}")?;
            return Ok(());
        }
        self.show_board(out)?;
        self.show_status(out)?;
        self.reply(out)
    }

    /// Lets the engine answer while it is its turn.
    fn reply(&mut self, out: &mut impl Write) -> Result<()> {
        while self.game.is_machine_turn() && !self.game.is_over() {
            writeln!(out, "{} is thinking...", self.game.engine().name())?;
            out.flush()?;
            let Some(result) = self.game.machine_move()? else {
                break;
            };
            if let Some(mv) = result.best_move {
                writeln!(out, "{} plays {mv}", self.game.engine().name())?;
            }
            self.show_board(out)?;
            self.show_status(out)?;
        }
        Ok(())
    }

    fn select(&mut self, sq: Square, out: &mut impl Write) -> Result<()> {
        if let Some(from) = self.selected
            && self.game.selectable_targets(from).contains(&sq)
        {
            return self.play(from, sq, out);
        }
        let targets = self.game.selectable_targets(sq);
        if targets.is_empty() {
            self.selected = None;
            writeln!(out, "Nothing to move on {sq}.")?;
            return Ok(());
        }
        self.selected = Some(sq);
        self.show_board(out)?;
        Ok(())
    }

    /// Returns false when the user asked to leave.
    fn handle(&mut self, cmd: Command, out: &mut impl Write) -> Result<bool> {
        match cmd {
            Command::Move { from, to } => self.play(from, to, out)?,
            Command::Square(sq) => self.select(sq, out)?,
            Command::Moves(sq) => {
                let targets = self.game.selectable_targets(sq);
                if targets.is_empty() {
                    writeln!(out, "No legal moves from {sq}.")?;
                } else {
                    let list: Vec<String> = targets.iter().map(Square::to_string).collect();
                    writeln!(out, "{sq}: {}", list.join(" "))?;
                }
            }
            Command::Board => {
                self.show_board(out)?;
                self.show_status(out)?;
            }
            Command::Fen => writeln!(out, "{}", self.game.position().to_fen())?,
            Command::New => {
                self.game.reset();
                self.selected = None;
                self.show_board(out)?;
                self.show_status(out)?;
                self.reply(out)?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let config = match &args.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading engine config from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    let engine = match args.seed {
        Some(seed) => TieredEngine::seeded(args.strength, config, seed),
        None => TieredEngine::new(args.strength, config),
    };
    let mode = match args.mode {
        Mode::Human => GameMode::HumanVsHuman,
        Mode::Machine => GameMode::HumanVsMachine {
            machine: args.machine_color,
        },
    };
    log::info!("starting {:?} game, engine {}", mode, engine.name());

    let mut session = Session {
        game: Game::new(mode, engine),
        selected: None,
    };

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    writeln!(out, "Type 'help' for commands.")?;
    session.show_board(&mut out)?;
    session.show_status(&mut out)?;
    session.reply(&mut out)?;

    let mut lines = stdin.lock().lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match Command::parse(&line) {
            Ok(cmd) => {
                if !session.handle(cmd, &mut out)? {
                    break;
                }
            }
            Err(e) => writeln!(out, "{e}")?,
        }
    }
    Ok(())
}
