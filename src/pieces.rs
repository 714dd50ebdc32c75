//! Tetromino pieces and the labeled piece set handed to the solver.
//!
//! Each piece is a set of cell offsets normalized so its bounding box
//! starts at the origin. Pieces never rotate or reflect.

use crate::geometry::Point;
use crate::parser::ParseError;

/// Number of cells in every piece.
pub const CELLS_PER_PIECE: usize = 4;

/// Maximum number of pieces, one per uppercase letter.
pub const MAX_PIECES: usize = 26;

/// A tetromino in canonical form.
///
/// Offsets are sorted by row then column and the minimum x and y are zero.
/// Only the parser constructs pieces, so that invariant always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    cells: [Point; CELLS_PER_PIECE],
}

impl Piece {
    pub(crate) const fn from_normalized(cells: [Point; CELLS_PER_PIECE]) -> Self {
        Self { cells }
    }

    /// Returns the canonical offsets of this piece.
    #[inline]
    pub fn cells(&self) -> &[Point; CELLS_PER_PIECE] {
        &self.cells
    }

    /// Returns the absolute board cells covered when anchored at `anchor`.
    #[inline]
    pub fn translated(&self, anchor: Point) -> impl Iterator<Item = Point> + '_ {
        self.cells.iter().map(move |&offset| anchor + offset)
    }
}

/// Returns the label for the piece at `index` (`'A'` for the first).
///
/// Callers must keep `index < MAX_PIECES`; `PieceSet` guarantees that for
/// every piece it holds.
#[inline]
pub fn label(index: usize) -> u8 {
    debug_assert!(index < MAX_PIECES, "piece index {index} has no label");
    b'A' + index as u8
}

/// An ordered, non-empty sequence of at most `MAX_PIECES` pieces.
///
/// The position of a piece in the set decides its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceSet {
    pieces: Vec<Piece>,
}

impl PieceSet {
    /// Wraps parsed pieces, rejecting an empty set or one too large to label.
    pub fn new(pieces: Vec<Piece>) -> Result<Self, ParseError> {
        if pieces.is_empty() {
            return Err(ParseError::NoPieces);
        }
        if pieces.len() > MAX_PIECES {
            return Err(ParseError::TooManyPieces(pieces.len()));
        }
        Ok(Self { pieces })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Piece] {
        &self.pieces
    }

    /// Iterates over `(label, piece)` pairs in set order.
    pub fn labeled(&self) -> impl Iterator<Item = (u8, &Piece)> {
        self.pieces
            .iter()
            .enumerate()
            .map(|(index, piece)| (label(index), piece))
    }
}
