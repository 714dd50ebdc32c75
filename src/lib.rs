//! Tetromino Fitting Library
//!
//! Parses 4x4 tetromino blocks and finds the smallest square board on which
//! all of them fit, unrotated and without overlap.

pub mod geometry;
pub mod grid;
pub mod parser;
pub mod pieces;
pub mod solver;

pub use grid::Board;
pub use parser::{parse, BlockError, ParseError};
pub use pieces::{Piece, PieceSet};

/// Parses `input` and solves it, returning the filled board.
pub fn fit(input: &str) -> Result<Board, ParseError> {
    let pieces = parse(input)?;
    Ok(solver::solve(&pieces))
}
