//! Backtracking placement solver.
//!
//! Pieces are placed in set order. For each piece, anchors are scanned in
//! row-major order and the first one that lets every later piece fit wins.
//! Failed branches are undone on the same board, so a size attempt uses a
//! single buffer.

use log::{debug, info};

use crate::geometry::Point;
use crate::grid::{starting_edge, Board};
use crate::pieces::{label, Piece, PieceSet};

/// Finds the smallest square board on which every piece can be placed.
///
/// Starts at `starting_edge` and grows the edge by one after each failed
/// attempt, with a fresh board per size. Always terminates: an edge of
/// `4 * pieces.len()` fits every piece in its own 4x4 slot along the top.
pub fn solve(pieces: &PieceSet) -> Board {
    let mut edge = starting_edge(pieces.len());

    loop {
        debug!("trying {edge}x{edge} board for {} pieces", pieces.len());
        if let Some(board) = solve_at(edge, pieces) {
            info!(
                "placed {} pieces on a {edge}x{edge} board ({} empty cells)",
                pieces.len(),
                board.empty_cells()
            );
            return board;
        }
        edge += 1;
    }
}

/// Attempts to place every piece on an empty board of the given edge.
///
/// Returns the filled board, or `None` if no placement exists at this size.
pub fn solve_at(edge: usize, pieces: &PieceSet) -> Option<Board> {
    let mut board = Board::new(edge);
    place_from(&mut board, pieces.as_slice(), 0).then_some(board)
}

/// Places `pieces[index..]` on `board`, leaving it untouched on failure.
fn place_from(board: &mut Board, pieces: &[Piece], index: usize) -> bool {
    let Some(piece) = pieces.get(index) else {
        // every piece is on the board
        return true;
    };
    let piece_label = label(index);
    let edge = board.edge();

    for y in 0..edge {
        for x in 0..edge {
            let anchor = Point::new(x, y);
            if !board.can_place(piece, anchor) {
                continue;
            }

            board.place(piece, anchor, piece_label);
            if place_from(board, pieces, index + 1) {
                return true;
            }
            board.remove(piece, anchor);
        }
    }

    false
}
