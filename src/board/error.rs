//! Error types for board-level parsing.

use std::fmt;

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Coordinates outside the 8x8 board
    OutOfBounds { x: i32, y: i32 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::OutOfBounds { x, y } => {
                write!(f, "Square ({x}, {y}) is outside the board")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for piece letter parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PieceError {
    /// Letter is not one of p, n, b, r, q, k (either case)
    InvalidChar { char: char },
}

impl fmt::Display for PieceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceError::InvalidChar { char } => {
                write!(f, "Invalid piece character '{char}'")
            }
        }
    }
}

impl std::error::Error for PieceError {}

/// Error type for player name parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerError {
    /// Name is neither white nor black
    Unknown { name: String },
}

impl fmt::Display for PlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerError::Unknown { name } => {
                write!(f, "Unknown player '{name}', expected 'white' or 'black'")
            }
        }
    }
}

impl std::error::Error for PlayerError {}

/// Error type for text diagram parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagramError {
    /// Diagram must have exactly 8 rows
    WrongRowCount { found: usize },
    /// Each row must have exactly 8 cells
    WrongRowLength { row: usize, found: usize },
    /// A cell is neither '.' nor a piece letter
    InvalidPiece(PieceError),
}

impl fmt::Display for DiagramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagramError::WrongRowCount { found } => {
                write!(f, "Diagram must have 8 rows, found {found}")
            }
            DiagramError::WrongRowLength { row, found } => {
                write!(f, "Diagram row {row} must have 8 cells, found {found}")
            }
            DiagramError::InvalidPiece(e) => write!(f, "Invalid diagram cell: {e}"),
        }
    }
}

impl std::error::Error for DiagramError {}

impl From<PieceError> for DiagramError {
    fn from(e: PieceError) -> Self {
        DiagramError::InvalidPiece(e)
    }
}
