//! Square type and algebraic notation.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the board, represented as (x, y).
///
/// `x` runs over the files a..h, `y` runs from black's back rank (`y = 0`,
/// rank 8) down to white's back rank (`y = 7`, rank 1). Coordinates are
/// signed so that offsets may step off the board; use [`Square::is_inside`]
/// before indexing a board with a computed square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub i8, pub i8); // (x, y)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(x: i8, y: i8) -> Option<Self> {
        let sq = Square(x, y);
        sq.is_inside().then_some(sq)
    }

    #[inline]
    #[must_use]
    pub const fn x(self) -> i8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn y(self) -> i8 {
        self.1
    }

    #[inline]
    #[must_use]
    pub const fn is_inside(self) -> bool {
        self.0 >= 0 && self.0 < 8 && self.1 >= 0 && self.1 < 8
    }

    /// The square reached by stepping `(dx, dy)`. May be outside the board.
    #[inline]
    #[must_use]
    pub const fn offset(self, dx: i8, dy: i8) -> Self {
        Square(self.0 + dx, self.1 + dy)
    }

    /// Row-major index (0-63, a8=0, h8=7, ..., h1=63). Caller guarantees bounds.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.1 as usize * 8 + self.0 as usize
    }

    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square((idx % 8) as i8, (idx / 8) as i8)
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_inside() {
            return write!(f, "({}, {})", self.0, self.1);
        }
        let file = (b'a' + self.0 as u8) as char;
        write!(f, "{}{}", file, 8 - self.1)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.trim().chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let file = file.to_ascii_lowercase();
        if !file.is_ascii_lowercase() || !rank.is_ascii_digit() {
            return Err(invalid());
        }
        let x = file as i16 - 'a' as i16;
        let y = 8 - (rank as i16 - '0' as i16);
        if !(0..8).contains(&x) || !(0..8).contains(&y) {
            return Err(SquareError::OutOfBounds {
                x: x as i32,
                y: y as i32,
            });
        }
        Ok(Square(x as i8, y as i8))
    }
}
