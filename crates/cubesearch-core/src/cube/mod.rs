//! Puzzle state: the trait the search engine consumes and the 3x3x3 cubie
//! model implementing it.
//!
//! [`Cube`] tracks the permutation and orientation of the 8 corners and
//! 12 edges relative to fixed centres. Applying an algorithm simplifies it
//! and strips whole-cube rotations first, so wide, slice and rotation moves
//! are all evaluated as face turns.

mod group;
mod pieces;


use std::sync::LazyLock;

use crate::algorithm::Algorithm;

pub use group::{PieceGroup, SolveMask};
pub use pieces::{Corner, Edge, Face, Piece};

/// A puzzle state the search can branch over.
///
/// States are cheap to clone: every branch check starts from a fresh copy
/// of the scrambled ancestor.
pub trait PuzzleState: Clone + Default + Send + Sync {
    /// Applies an algorithm in place.
    fn apply(&mut self, alg: &Algorithm);

    /// Copy of the state with `alg` applied.
    fn applied(&self, alg: &Algorithm) -> Self {
        let mut state = self.clone();
        state.apply(alg);
        state
    }

    /// Returns true if every piece required by `mask` is home and oriented.
    fn matches(&self, mask: &SolveMask) -> bool;

    fn is_solved(&self, group: &PieceGroup) -> bool {
        self.matches(&group.mask())
    }

    /// Returns true if the piece is oriented in whatever position it occupies.
    fn is_oriented(&self, piece: Piece) -> bool;

    /// Returns true if the piece currently sits in the layer of `face`.
    fn is_in_layer(&self, piece: Piece, face: Face) -> bool;

    /// Returns true if the positions of the two pieces touch.
    fn are_adjacent(&self, a: Piece, b: Piece) -> bool;
}

/// The 3x3x3 cube as cubie permutations and orientations.
///
/// `cp[i]` is the corner occupying position `i` and `co[i]` its twist
/// (0-2); `ep`/`eo` likewise for edges with flips 0-1.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cube {
    cp: [u8; 8],
    co: [u8; 8],
    ep: [u8; 12],
    eo: [u8; 12],
}

impl Default for Cube {
    fn default() -> Self {
        Cube::SOLVED
    }
}

impl Cube {
    pub const SOLVED: Cube = Cube {
        cp: [0, 1, 2, 3, 4, 5, 6, 7],
        co: [0; 8],
        ep: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
        eo: [0; 12],
    };

    pub fn new() -> Self {
        Self::default()
    }

    /// The solved cube with `alg` applied.
    pub fn from_algorithm(alg: &Algorithm) -> Self {
        let mut cube = Cube::new();
        cube.apply(alg);
        cube
    }

    /// Cubie product: `self` followed by `other`.
    pub fn multiply(&self, other: &Cube) -> Cube {
        let mut out = Cube::SOLVED;
        for i in 0..8 {
            let from = other.cp[i] as usize;
            out.cp[i] = self.cp[from];
            out.co[i] = (self.co[from] + other.co[i]) % 3;
        }
        for i in 0..12 {
            let from = other.ep[i] as usize;
            out.ep[i] = self.ep[from];
            out.eo[i] = (self.eo[from] + other.eo[i]) % 2;
        }
        out
    }

    /// Pieces that are currently home and oriented.
    pub fn solved_mask(&self) -> SolveMask {
        let mut mask = SolveMask::EMPTY;
        for i in 0..12 {
            if self.ep[i] as usize == i && self.eo[i] == 0 {
                mask.edges |= 1 << i;
            }
        }
        for i in 0..8 {
            if self.cp[i] as usize == i && self.co[i] == 0 {
                mask.corners |= 1 << i;
            }
        }
        mask
    }

    pub fn is_fully_solved(&self) -> bool {
        *self == Cube::SOLVED
    }

    /// Position and flip of an edge cubie.
    pub fn edge_position(&self, edge: Edge) -> (Edge, u8) {
        let position = self
            .ep
            .iter()
            .position(|&e| e as usize == edge.index())
            .unwrap_or(edge.index());
        (Edge::ALL[position], self.eo[position])
    }

    /// Position and twist of a corner cubie.
    pub fn corner_position(&self, corner: Corner) -> (Corner, u8) {
        let position = self
            .cp
            .iter()
            .position(|&c| c as usize == corner.index())
            .unwrap_or(corner.index());
        (Corner::ALL[position], self.co[position])
    }

    fn position_faces(&self, piece: Piece) -> Vec<Face> {
        match piece {
            Piece::Edge(e) => self.edge_position(e).0.faces().to_vec(),
            Piece::Corner(c) => self.corner_position(c).0.faces().to_vec(),
        }
    }

    // Applies one single-layer face turn by its move ordinal.
    fn turn(&mut self, ordinal: usize) {
        if let Some(turn) = FACE_TURN_CUBES.get(ordinal) {
            *self = self.multiply(turn);
        }
    }
}

impl PuzzleState for Cube {
    fn apply(&mut self, alg: &Algorithm) {
        let mut canonical = alg.simplify();
        canonical.remove_rotations();
        for m in canonical.iter() {
            self.turn(m.index());
        }
    }

    fn matches(&self, mask: &SolveMask) -> bool {
        self.solved_mask().contains(mask)
    }

    fn is_oriented(&self, piece: Piece) -> bool {
        match piece {
            Piece::Edge(e) => self.edge_position(e).1 == 0,
            Piece::Corner(c) => self.corner_position(c).1 == 0,
        }
    }

    fn is_in_layer(&self, piece: Piece, face: Face) -> bool {
        self.position_faces(piece).contains(&face)
    }

    fn are_adjacent(&self, a: Piece, b: Piece) -> bool {
        let fa = self.position_faces(a);
        let fb = self.position_faces(b);
        let shared = fa.iter().filter(|f| fb.contains(f)).count();
        match (a, b) {
            // An edge touches a corner when all its faces are the corner's.
            (Piece::Edge(_), Piece::Corner(_)) | (Piece::Corner(_), Piece::Edge(_)) => shared == 2,
            (Piece::Corner(_), Piece::Corner(_)) => shared == 2,
            (Piece::Edge(_), Piece::Edge(_)) => {
                shared == 1 && {
                    let rest: Vec<Face> = fa
                        .iter()
                        .chain(fb.iter())
                        .copied()
                        .filter(|f| !(fa.contains(f) && fb.contains(f)))
                        .collect();
                    rest.len() == 2 && rest[0].opposite() != rest[1]
                }
            }
        }
    }
}

/// Quarter turns of the six faces in `U D F B R L` order.
const BASE_TURNS: [Cube; 6] = [
    // U
    Cube {
        cp: [3, 0, 1, 2, 4, 5, 6, 7],
        co: [0; 8],
        ep: [3, 0, 1, 2, 4, 5, 6, 7, 8, 9, 10, 11],
        eo: [0; 12],
    },
    // D
    Cube {
        cp: [0, 1, 2, 3, 5, 6, 7, 4],
        co: [0; 8],
        ep: [0, 1, 2, 3, 5, 6, 7, 4, 8, 9, 10, 11],
        eo: [0; 12],
    },
    // F
    Cube {
        cp: [1, 5, 2, 3, 0, 4, 6, 7],
        co: [1, 2, 0, 0, 2, 1, 0, 0],
        ep: [0, 9, 2, 3, 4, 8, 6, 7, 1, 5, 10, 11],
        eo: [0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0],
    },
    // B
    Cube {
        cp: [0, 1, 3, 7, 4, 5, 2, 6],
        co: [0, 0, 1, 2, 0, 0, 2, 1],
        ep: [0, 1, 2, 11, 4, 5, 6, 10, 8, 9, 3, 7],
        eo: [0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1],
    },
    // R
    Cube {
        cp: [4, 1, 2, 0, 7, 5, 6, 3],
        co: [2, 0, 0, 1, 1, 0, 0, 2],
        ep: [8, 1, 2, 3, 11, 5, 6, 7, 4, 9, 10, 0],
        eo: [0; 12],
    },
    // L
    Cube {
        cp: [0, 2, 6, 3, 4, 1, 5, 7],
        co: [0, 1, 2, 0, 0, 2, 1, 0],
        ep: [0, 1, 10, 3, 4, 5, 9, 7, 8, 2, 6, 11],
        eo: [0; 12],
    },
];

/// All 18 face turns indexed by move ordinal (`X`, `X'`, `X2` per face).
static FACE_TURN_CUBES: LazyLock<[Cube; 18]> = LazyLock::new(|| {
    let mut turns: [Cube; 18] = std::array::from_fn(|_| Cube::SOLVED);
    for (slot, base) in BASE_TURNS.iter().enumerate() {
        let half = base.multiply(base);
        let ccw = half.multiply(base);
        turns[slot * 3] = base.clone();
        turns[slot * 3 + 1] = ccw;
        turns[slot * 3 + 2] = half;
    }
    turns
});
