//! Tetromino Fitter
//!
//! Reads a file of tetromino blocks and prints the smallest square board
//! holding all of them, each piece drawn with its own letter. Any failure
//! prints a single `ERROR` line.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use tetrofit::Board;

/// Line printed for every kind of failure.
const FAILURE: &str = "ERROR";

/// Fits tetrominoes into the smallest square board.
#[derive(Parser)]
#[command(name = "tetrofit")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// File with 4x4 tetromino blocks separated by blank lines.
    input: PathBuf,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) => {
            println!("{FAILURE}");
            return;
        }
    };

    init_logging();
    print!("{}", outcome(&cli.input));
}

/// Logs go to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

/// Returns the text to print for `path`: the board, or the failure line.
fn outcome(path: &Path) -> String {
    match run(path) {
        Ok(board) => board.to_string(),
        Err(err) => {
            debug!("{err:#}");
            format!("{FAILURE}\n")
        }
    }
}

/// Reads, parses and solves the input file.
fn run(path: &Path) -> Result<Board> {
    let input = fs::read_to_string(path)
        .with_context(|| format!("Reading {}", path.display()))?;
    let board = tetrofit::fit(&input).with_context(|| format!("Parsing {}", path.display()))?;
    Ok(board)
}
