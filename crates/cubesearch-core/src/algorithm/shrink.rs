//! Canonicalization by joining adjacent and interleaved moves.

use smallvec::{smallvec, SmallVec};

use super::Algorithm;
use crate::moves::{Category, Join, Move};

/// Replacement for a joinable triple: zero, one or two moves.
pub type TripleJoin = SmallVec<[Move; 2]>;

/// Joins three consecutive moves.
///
/// Two shapes are recognized:
///
/// - `A B C` where `A` and `C` share layer and category and `B` is a
///   single or wide turn on the opposite layer. `B` commutes with both, so
///   the outer pair merges by the two-move rule and `B` is kept.
/// - Any ordering of a slice move's expansion, such as `R L' x'`, which
///   collapses to the slice (`M`).
pub fn join_triple(a: Move, b: Move, c: Move) -> Option<TripleJoin> {
    if matches!(b.category(), Category::Single | Category::Wide)
        && a.is_opposite(b)
        && c.is_opposite(b)
    {
        if let Some(join) = a.join(c) {
            return Some(match join {
                Join::Cancel => smallvec![b],
                Join::Merge(m) => smallvec![m, b],
            });
        }
    }
    slice_equivalent(a, b, c).map(|slice| smallvec![slice])
}

fn slice_equivalent(a: Move, b: Move, c: Move) -> Option<Move> {
    let rotations = [a, b, c].iter().filter(|m| m.is_rotation()).count();
    if rotations != 1 {
        return None;
    }
    let mut triple = [a, b, c];
    triple.sort_unstable();
    Move::SLICE_TURNS.into_iter().find(|slice| {
        let mut expansion = [Move::Empty; 3];
        expansion.copy_from_slice(&slice.equivalent());
        expansion.sort_unstable();
        expansion == triple
    })
}

impl Algorithm {
    /// Removes empty sentinels and joins moves until nothing changes.
    ///
    /// Returns true if the algorithm changed.
    pub fn shrink(&mut self) -> bool {
        let before = self.moves.len();
        self.moves.retain(|&m| m != Move::Empty);
        let mut changed = self.moves.len() != before;
        while self.shrink_step() {
            changed = true;
        }
        changed
    }

    // Applies the first available pair join, else the first triple join.
    fn shrink_step(&mut self) -> bool {
        for i in 1..self.moves.len() {
            if self.join_pair_at(i) {
                return true;
            }
        }
        for i in 2..self.moves.len() {
            if self.join_triple_at(i) {
                return true;
            }
        }
        false
    }

    /// Joins only at the tail, for algorithms built move by move.
    ///
    /// Returns true if the tail changed.
    pub fn shrink_last(&mut self) -> bool {
        let mut changed = false;
        while self.moves.last() == Some(&Move::Empty) {
            self.moves.pop();
            changed = true;
        }
        loop {
            let len = self.moves.len();
            let joined = (len >= 2 && self.join_pair_at(len - 1))
                || (len >= 3 && self.join_triple_at(len - 1));
            if !joined {
                return changed;
            }
            changed = true;
        }
    }

    // Joins the pair ending at `end`.
    fn join_pair_at(&mut self, end: usize) -> bool {
        let Some(join) = self.moves[end - 1].join(self.moves[end]) else {
            return false;
        };
        match join {
            Join::Cancel => {
                self.moves.drain(end - 1..=end);
            }
            Join::Merge(m) => {
                self.moves[end - 1] = m;
                self.moves.remove(end);
            }
        }
        true
    }

    // Joins the triple ending at `end`.
    fn join_triple_at(&mut self, end: usize) -> bool {
        let (a, b, c) = (self.moves[end - 2], self.moves[end - 1], self.moves[end]);
        match join_triple(a, b, c) {
            Some(replacement) => {
                self.moves.splice(end - 2..=end, replacement);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interleaved_join() {
        assert_eq!(
            join_triple(Move::R, Move::L, Move::R).as_deref(),
            Some(&[Move::R2, Move::L][..])
        );
        assert_eq!(
            join_triple(Move::U, Move::D2, Move::UPrime).as_deref(),
            Some(&[Move::D2][..])
        );
        assert_eq!(
            join_triple(Move::Rw, Move::L, Move::Rw).as_deref(),
            Some(&[Move::Rw2, Move::L][..])
        );
    }

    #[test]
    fn test_interleaved_requires_opposite_middle() {
        assert!(join_triple(Move::R, Move::U, Move::R).is_none());
        assert!(join_triple(Move::R, Move::M, Move::R).is_none());
        assert!(join_triple(Move::R, Move::L, Move::Rw).is_none());
    }

    #[test]
    fn test_slice_equivalence() {
        assert_eq!(
            join_triple(Move::R, Move::LPrime, Move::XPrime).as_deref(),
            Some(&[Move::M][..])
        );
        assert_eq!(
            join_triple(Move::XPrime, Move::LPrime, Move::R).as_deref(),
            Some(&[Move::M][..])
        );
        assert_eq!(
            join_triple(Move::U, Move::DPrime, Move::YPrime).as_deref(),
            Some(&[Move::E][..])
        );
        assert_eq!(
            join_triple(Move::FPrime, Move::B, Move::Z).as_deref(),
            Some(&[Move::S][..])
        );
        assert!(join_triple(Move::R, Move::L, Move::X).is_none());
    }
}
