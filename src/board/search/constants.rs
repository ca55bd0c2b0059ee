//! Search score constants.

/// Score of a decided game: positive when the engine's player won.
pub const WIN_SCORE: i32 = 10_000;

/// Bound larger than any reachable score; the initial alpha-beta window.
pub const INFINITY: i32 = 1_000_000;
