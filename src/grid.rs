//! Square board the solver fills in place.
//!
//! The board is a flat row-major buffer of `edge * edge` cells. Each cell
//! holds either `EMPTY` or the ASCII label of the piece covering it.

use std::fmt;

use crate::geometry::Point;
use crate::pieces::{Piece, CELLS_PER_PIECE};

/// Marker for an uncovered cell.
pub const EMPTY: u8 = b'.';

/// Smallest edge worth trying; avoids degenerate 0x0 and 1x1 boards.
pub const MIN_EDGE: usize = 2;

/// Returns the first board edge to try for `piece_count` pieces.
///
/// This is the smallest square with at least as many cells as the pieces
/// cover, clamped to `MIN_EDGE`. It is a lower bound, not a guarantee: a
/// single I piece needs an edge of 4.
pub fn starting_edge(piece_count: usize) -> usize {
    let cells = piece_count * CELLS_PER_PIECE;
    let mut edge = 0;
    while edge * edge < cells {
        edge += 1;
    }
    edge.max(MIN_EDGE)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    edge: usize,
    cells: Vec<u8>,
}

impl Board {
    /// Creates an all-empty board.
    pub fn new(edge: usize) -> Self {
        Self {
            edge,
            cells: vec![EMPTY; edge * edge],
        }
    }

    #[inline]
    pub fn edge(&self) -> usize {
        self.edge
    }

    /// Returns the cell at `point`, or `None` outside the board.
    #[inline]
    pub fn get(&self, point: Point) -> Option<u8> {
        if point.x < self.edge && point.y < self.edge {
            Some(self.cells[point.y * self.edge + point.x])
        } else {
            None
        }
    }

    /// True when every cell of `piece` anchored at `anchor` is on the board
    /// and empty.
    #[inline]
    pub fn can_place(&self, piece: &Piece, anchor: Point) -> bool {
        piece
            .translated(anchor)
            .all(|point| self.get(point) == Some(EMPTY))
    }

    /// Writes `label` into every cell of `piece` anchored at `anchor`.
    ///
    /// The placement must have been checked with `can_place`.
    pub fn place(&mut self, piece: &Piece, anchor: Point, label: u8) {
        self.fill(piece, anchor, label);
    }

    /// Clears the cells written by a matching `place` call.
    pub fn remove(&mut self, piece: &Piece, anchor: Point) {
        self.fill(piece, anchor, EMPTY);
    }

    fn fill(&mut self, piece: &Piece, anchor: Point, value: u8) {
        let edge = self.edge;
        for point in piece.translated(anchor) {
            debug_assert!(point.x < edge && point.y < edge, "{point:?} is off the board");
            self.cells[point.y * edge + point.x] = value;
        }
    }

    /// Number of cells not covered by any piece.
    pub fn empty_cells(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == EMPTY).count()
    }

    /// Iterates over the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // `max(1)` keeps `chunks` valid for a zero-sized board
        self.cells.chunks(self.edge.max(1))
    }
}

/// One line per row, each cell a `.` or a piece letter.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &cell in row {
                write!(f, "{}", cell as char)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::validate_block;

    fn piece(text: &str) -> Piece {
        let rows: Vec<&str> = text.lines().collect();
        validate_block(&rows).expect("test block is a tetromino")
    }

    #[test]
    fn test_starting_edge_is_ceiling_square_root() {
        assert_eq!(starting_edge(1), 2);
        assert_eq!(starting_edge(2), 3);
        assert_eq!(starting_edge(4), 4);
        assert_eq!(starting_edge(5), 5);
        assert_eq!(starting_edge(9), 6);
        assert_eq!(starting_edge(26), 11);
    }

    #[test]
    fn test_starting_edge_is_clamped() {
        assert_eq!(starting_edge(0), MIN_EDGE);
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(3);
        assert_eq!(board.edge(), 3);
        assert_eq!(board.empty_cells(), 9);
        assert_eq!(board.to_string(), "...\n...\n...\n");
    }

    #[test]
    fn test_can_place_respects_bounds() {
        let bar = piece("####\n....\n....\n....");
        let board = Board::new(4);

        assert!(board.can_place(&bar, Point::new(0, 3)));
        assert!(!board.can_place(&bar, Point::new(1, 0)), "bar overhangs the right edge");
        assert!(!board.can_place(&bar, Point::new(0, 4)), "anchor below the board");
    }

    #[test]
    fn test_can_place_respects_occupied_cells() {
        let square = piece("##..\n##..\n....\n....");
        let mut board = Board::new(4);
        board.place(&square, Point::new(0, 0), b'A');

        assert!(!board.can_place(&square, Point::new(1, 1)));
        assert!(!board.can_place(&square, Point::new(1, 0)));
        assert!(board.can_place(&square, Point::new(2, 0)));
        assert!(board.can_place(&piece("#...\n#...\n#...\n#..."), Point::new(3, 0)));
    }

    #[test]
    fn test_place_then_remove_restores_board() {
        let tee = piece(".#..\n###.\n....\n....");
        let mut board = Board::new(4);
        board.place(&piece("#...\n#...\n#...\n#..."), Point::new(0, 0), b'A');
        let before = board.clone();

        assert!(board.can_place(&tee, Point::new(1, 1)));
        board.place(&tee, Point::new(1, 1), b'B');
        assert_eq!(board.get(Point::new(2, 2)), Some(b'B'));
        assert_ne!(board, before);

        board.remove(&tee, Point::new(1, 1));
        assert_eq!(board, before);
    }

    #[test]
    fn test_display_renders_rows() {
        let mut board = Board::new(2);
        board.place(&piece("##..\n##..\n....\n...."), Point::ORIGIN, b'C');
        assert_eq!(board.to_string(), "CC\nCC\n");
        assert_eq!(board.empty_cells(), 0);
    }
}
