//! Reads the textual piece description into canonical pieces.
//!
//! Input is a sequence of 4x4 blocks drawn with `.` (empty) and `#` (filled),
//! separated by exactly one blank line. Every block must hold exactly one
//! tetromino.

use log::trace;
use thiserror::Error;

use crate::geometry::{normalize_to_origin, Point};
use crate::pieces::{Piece, PieceSet, CELLS_PER_PIECE};

/// Rows and columns in one block.
const BLOCK_SIZE: usize = 4;

/// Adjacency totals produced by a tetromino, counting each link from both
/// ends: 6 for the tree shapes (I, T, S/Z, L/J), 8 for the square.
const TREE_LINKS: usize = 6;
const SQUARE_LINKS: usize = 8;

/// Why a single block is not a tetromino.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BlockError {
    #[error("block has {0} rows, expected 4")]
    RowCount(usize),
    #[error("row {row} has {len} characters, expected 4")]
    LineLength { row: usize, len: usize },
    #[error("unexpected character '{found}' at row {row}, column {column}")]
    InvalidChar {
        row: usize,
        column: usize,
        found: char,
    },
    #[error("block has {0} filled cells, expected 4")]
    CellCount(usize),
    #[error("filled cells are not one connected tetromino ({0} adjacency links)")]
    NotConnected(usize),
}

/// Why the input as a whole was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected blank line at line {line}")]
    UnexpectedBlankLine { line: usize },
    #[error("expected a blank line after block {block} at line {line}")]
    MissingSeparator { block: usize, line: usize },
    #[error("block {block} has fewer than 4 lines")]
    IncompleteBlock { block: usize },
    #[error("invalid block {block}")]
    Block {
        block: usize,
        #[source]
        source: BlockError,
    },
    #[error("input contains no pieces")]
    NoPieces,
    #[error("{0} pieces exceed the limit of 26")]
    TooManyPieces(usize),
}

/// Parses the full input into a labeled piece set.
///
/// Windows line endings are accepted. Parsing stops at the first error.
pub fn parse(input: &str) -> Result<PieceSet, ParseError> {
    let input = input.replace("\r\n", "\n");
    let lines: Vec<&str> = input.split('\n').collect();

    let mut pieces = Vec::new();
    let mut line_index = 0;

    while line_index < lines.len() {
        if lines[line_index].is_empty() {
            // a blank record is only allowed as the very last one
            if line_index + 1 == lines.len() {
                break;
            }
            return Err(ParseError::UnexpectedBlankLine {
                line: line_index + 1,
            });
        }

        let block = pieces.len() + 1;
        let Some(rows) = lines.get(line_index..line_index + BLOCK_SIZE) else {
            return Err(ParseError::IncompleteBlock { block });
        };
        let piece = validate_block(rows).map_err(|source| ParseError::Block { block, source })?;
        trace!("block {block}: {:?}", piece.cells());
        pieces.push(piece);
        line_index += BLOCK_SIZE;

        match lines.get(line_index) {
            None => break,
            Some(line) if line.is_empty() => line_index += 1,
            Some(_) => {
                return Err(ParseError::MissingSeparator {
                    block,
                    line: line_index + 1,
                })
            }
        }
    }

    PieceSet::new(pieces)
}

/// Validates one 4-line block and returns its canonical piece.
///
/// Checks run in order: row count, line length and character set (row by
/// row), filled cell count, then the adjacency total.
pub fn validate_block(rows: &[&str]) -> Result<Piece, BlockError> {
    if rows.len() != BLOCK_SIZE {
        return Err(BlockError::RowCount(rows.len()));
    }

    let mut filled = [[false; BLOCK_SIZE]; BLOCK_SIZE];
    let mut filled_count = 0;

    for (y, row) in rows.iter().enumerate() {
        if row.len() != BLOCK_SIZE {
            return Err(BlockError::LineLength {
                row: y + 1,
                len: row.len(),
            });
        }
        for (x, byte) in row.bytes().enumerate() {
            match byte {
                b'.' => {}
                b'#' => {
                    filled[y][x] = true;
                    filled_count += 1;
                }
                _ => {
                    let found = row
                        .get(x..)
                        .and_then(|rest| rest.chars().next())
                        .unwrap_or(char::REPLACEMENT_CHARACTER);
                    return Err(BlockError::InvalidChar {
                        row: y + 1,
                        column: x + 1,
                        found,
                    });
                }
            }
        }
    }

    if filled_count != CELLS_PER_PIECE {
        return Err(BlockError::CellCount(filled_count));
    }

    let links = adjacency_links(&filled);
    if links != TREE_LINKS && links != SQUARE_LINKS {
        return Err(BlockError::NotConnected(links));
    }

    let mut points = Vec::with_capacity(CELLS_PER_PIECE);
    for (y, row) in filled.iter().enumerate() {
        for (x, &cell) in row.iter().enumerate() {
            if cell {
                points.push(Point::new(x, y));
            }
        }
    }

    let cells: [Point; CELLS_PER_PIECE] = normalize_to_origin(points)
        .try_into()
        .map_err(|points: Vec<Point>| BlockError::CellCount(points.len()))?;
    Ok(Piece::from_normalized(cells))
}

/// Counts filled-to-filled links in the four cardinal directions, once from
/// each filled cell, so every adjacent pair contributes two.
fn adjacency_links(filled: &[[bool; BLOCK_SIZE]; BLOCK_SIZE]) -> usize {
    let last = BLOCK_SIZE - 1;
    let mut links = 0;

    for y in 0..BLOCK_SIZE {
        for x in 0..BLOCK_SIZE {
            if !filled[y][x] {
                continue;
            }
            if y > 0 && filled[y - 1][x] {
                links += 1;
            }
            if y < last && filled[y + 1][x] {
                links += 1;
            }
            if x > 0 && filled[y][x - 1] {
                links += 1;
            }
            if x < last && filled[y][x + 1] {
                links += 1;
            }
        }
    }

    links
}
