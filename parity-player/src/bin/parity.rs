//! Play a match from the command line.

use anyhow::{Context, Result};
use clap::Parser;
use parity_othello::{Board, Location, Mark};
use parity_player::{GameDriver, MatchConfig, MoveSource, PlayerConfig};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Othello on small boards against a minimax search
#[derive(Parser, Debug)]
#[command(name = "parity")]
#[command(about = "Play Othello against a minimax search", long_about = None)]
#[command(version)]
struct Cli {
    /// Match file (TOML). Overrides every other flag.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Board width
    #[arg(long, default_value_t = 4)]
    cols: usize,

    /// Board height
    #[arg(long, default_value_t = 4)]
    rows: usize,

    /// Who plays X: "human" or "alphabeta"
    #[arg(long, default_value = "human")]
    x: String,

    /// Who plays O: "human" or "alphabeta"
    #[arg(long, default_value = "alphabeta")]
    o: String,

    /// Heuristic for X (0 material, 1 mobility, 2 positional)
    #[arg(long, default_value_t = 2, allow_hyphen_values = true)]
    x_heuristic: i64,

    /// Whether X prunes
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    x_pruning: bool,

    /// Search depth for X
    #[arg(long, default_value_t = 6, allow_hyphen_values = true)]
    x_depth: i64,

    /// Heuristic for O (0 material, 1 mobility, 2 positional)
    #[arg(long, default_value_t = 2, allow_hyphen_values = true)]
    o_heuristic: i64,

    /// Whether O prunes
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    o_pruning: bool,

    /// Search depth for O
    #[arg(long, default_value_t = 6, allow_hyphen_values = true)]
    o_depth: i64,
}

impl Cli {
    fn match_config(&self) -> Result<MatchConfig> {
        if let Some(path) = &self.config {
            return MatchConfig::load(path)
                .with_context(|| format!("loading match from {}", path.display()));
        }

        let seat = |kind: &str, heuristic, pruning, max_depth| PlayerConfig {
            kind: kind.to_string(),
            heuristic: Some(heuristic),
            pruning: Some(pruning),
            max_depth: Some(max_depth),
        };
        let config = MatchConfig {
            cols: self.cols,
            rows: self.rows,
            x: seat(&self.x, self.x_heuristic, self.x_pruning, self.x_depth),
            o: seat(&self.o, self.o_heuristic, self.o_pruning, self.o_depth),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Reads moves such as `C1` or `2 0` (column, row from zero) from standard input.
struct StdinMoves;

impl MoveSource for StdinMoves {
    fn next_move(&mut self, board: &Board, mark: Mark) -> Option<Location> {
        println!("{}", board);
        loop {
            print!("{} to move: ", mark);
            io::stdout().flush().ok()?;

            let mut line = String::new();
            match io::stdin().lock().read_line(&mut line) {
                Ok(0) | Err(_) => return None,
                Ok(_) => {}
            }

            match parse_location(&line) {
                Some(loc) => return Some(loc),
                None => println!("could not read {:?}, try e.g. C1", line.trim()),
            }
        }
    }
}

fn parse_location(input: &str) -> Option<Location> {
    let input = input.trim();
    let mut parts = input.split_whitespace();
    if let (Some(col), Some(row), None) = (parts.next(), parts.next(), parts.next()) {
        return Some(Location::new(col.parse().ok()?, row.parse().ok()?));
    }

    let mut chars = input.chars();
    let letter = chars.next()?.to_ascii_uppercase();
    if !letter.is_ascii_uppercase() {
        return None;
    }
    let row: usize = chars.as_str().parse().ok()?;
    Some(Location::new(
        usize::from(letter as u8 - b'A'),
        row.checked_sub(1)?,
    ))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.match_config()?;
    info!(cols = config.cols, rows = config.rows, x = %config.x.kind, o = %config.o.kind, "starting match");

    let mut driver =
        GameDriver::from_config(&config, Some(Box::new(StdinMoves)), Some(Box::new(StdinMoves)))?;
    let report = driver.run()?;

    println!("{}", driver.game().board);
    println!("{}", report);
    Ok(())
}
