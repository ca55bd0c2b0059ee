//! Fluent builder for constructing positions.
//!
//! Used for manual arrangement and tests: positions are built piece by piece
//! or from an 8-row text diagram rather than parsed from a notation.
//!
//! # Example
//! ```
//! use chess_duel::board::{BoardBuilder, PieceKind, Player, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(4, 7), Player::White, PieceKind::King)
//!     .piece(Square(4, 0), Player::Black, PieceKind::King)
//!     .piece(Square(0, 6), Player::White, PieceKind::Pawn)
//!     .build();
//! assert_eq!(board.pieces().count(), 3);
//! ```

use super::error::DiagramError;
use super::{Board, Piece, PieceKind, Player, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Piece)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            pieces: Board::new().pieces().collect(),
        }
    }

    /// Create a builder from an 8-row diagram, top row first (y = 0).
    ///
    /// Each row holds 8 characters: a piece letter (uppercase White,
    /// lowercase Black) or `.` for an empty square. Whitespace is ignored.
    pub fn from_diagram<S: AsRef<str>>(rows: &[S]) -> Result<Self, DiagramError> {
        if rows.len() != 8 {
            return Err(DiagramError::WrongRowCount { found: rows.len() });
        }
        let mut builder = BoardBuilder::new();
        for (y, row) in rows.iter().enumerate() {
            let cells: Vec<char> = row
                .as_ref()
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
            if cells.len() != 8 {
                return Err(DiagramError::WrongRowLength {
                    row: y,
                    found: cells.len(),
                });
            }
            for (x, &c) in cells.iter().enumerate() {
                if c == '.' {
                    continue;
                }
                let piece = Piece::from_char(c)?;
                builder.pieces.push((Square(x as i8, y as i8), piece));
            }
        }
        Ok(builder)
    }

    /// Place an unmoved piece on the board.
    #[must_use]
    pub fn piece(self, square: Square, owner: Player, kind: PieceKind) -> Self {
        self.with(square, Piece::new(kind, owner))
    }

    /// Place a piece that has already moved (no castling or double step).
    #[must_use]
    pub fn moved_piece(self, square: Square, owner: Player, kind: PieceKind) -> Self {
        self.with(square, Piece::new(kind, owner).moved())
    }

    /// Place an arbitrary piece value.
    #[must_use]
    pub fn with(mut self, square: Square, piece: Piece) -> Self {
        // Remove any existing piece on this square
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, piece));
        self
    }

    /// Mark the piece on `square` (if any) as having moved.
    #[must_use]
    pub fn mark_moved(mut self, square: Square) -> Self {
        for (sq, piece) in &mut self.pieces {
            if *sq == square {
                piece.has_moved = true;
            }
        }
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Build the board. Squares outside the board are ignored.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (square, piece) in self.pieces {
            if square.is_inside() {
                board.place(square, piece);
            }
        }
        board
    }
}
