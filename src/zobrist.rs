//! Zobrist hashing for board positions.
//!
//! A position hash folds in, for every occupied square, the piece kind, its
//! owner and its moved flag. Side to move is not part of the hash; callers
//! that need it (the search cache) key on it separately.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Piece, Square};

pub(crate) struct ZobristKeys {
    // piece_keys[kind][owner][has_moved][square_index]
    pub(crate) piece_keys: [[[[u64; 64]; 2]; 2]; 6],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(1234567890_u64); // fixed seed for reproducible hashes
        let mut piece_keys = [[[[0; 64]; 2]; 2]; 6];

        for kind in &mut piece_keys {
            for owner in kind.iter_mut() {
                for moved in owner.iter_mut() {
                    for key in moved.iter_mut() {
                        *key = rng.gen();
                    }
                }
            }
        }

        ZobristKeys { piece_keys }
    }

    #[inline]
    pub(crate) fn piece_key(&self, piece: Piece, sq: Square) -> u64 {
        self.piece_keys[piece.kind.index()][piece.owner.index()][usize::from(piece.has_moved)]
            [sq.index()]
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);
