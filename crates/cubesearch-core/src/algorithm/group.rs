//! Repetition groups: validation, development and simplification.

use super::Algorithm;
use crate::moves::Move;

/// Checks that group markers nest properly: the depth never drops below
/// zero and ends at zero.
pub fn nesting_is_valid(moves: &[Move]) -> bool {
    let mut depth: i32 = 0;
    for &m in moves {
        if m == Move::Open {
            depth += 1;
        } else if m.repetitions().is_some() {
            depth -= 1;
            if depth < 0 {
                return false;
            }
        }
    }
    depth == 0
}

impl Algorithm {
    /// Returns true if group markers are balanced and never close early.
    pub fn is_valid_grouping(&self) -> bool {
        nesting_is_valid(&self.moves)
    }

    /// Returns true if the algorithm contains any group marker.
    pub fn has_grouping(&self) -> bool {
        self.moves.iter().any(|m| m.is_grouping())
    }

    /// Expands every `(block)n` into `n` copies of the developed block.
    ///
    /// With `keep_single_groups`, groups repeated once stay wrapped in
    /// markers. An algorithm with invalid grouping develops to nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use cubesearch_core::Algorithm;
    ///
    /// let alg = Algorithm::parse("(R (U)2)2").unwrap();
    /// assert_eq!(alg.develop(false).to_string(), "R U U R U U");
    /// ```
    pub fn develop(&self, keep_single_groups: bool) -> Algorithm {
        if !self.is_valid_grouping() {
            return Algorithm::new();
        }
        if !self.has_grouping() {
            return self.clone();
        }
        let mut position = 0;
        let (moves, _) = develop_block(&self.moves, &mut position, keep_single_groups);
        Algorithm { moves }
    }

    /// Canonical form for state application: developed, grouping removed,
    /// wide and slice moves replaced by single-layer turns plus rotations,
    /// empty sentinels dropped.
    pub fn simplify(&self) -> Algorithm {
        self.develop(false)
            .moves
            .iter()
            .filter(|m| m.is_turn())
            .flat_map(|m| m.equivalent())
            .collect()
    }
}

// Develops moves from `position` up to the close marker ending this block
// (or the end of input), returning the block and its repetition count.
fn develop_block(moves: &[Move], position: &mut usize, keep_single: bool) -> (Vec<Move>, u8) {
    let mut out = Vec::new();
    while *position < moves.len() {
        let m = moves[*position];
        *position += 1;
        if let Some(repetitions) = m.repetitions() {
            return (out, repetitions);
        }
        if m != Move::Open {
            out.push(m);
            continue;
        }
        let (inner, repetitions) = develop_block(moves, position, keep_single);
        if repetitions == 1 && keep_single {
            out.push(Move::Open);
            out.extend_from_slice(&inner);
            out.push(Move::Close1);
        } else {
            for _ in 0..repetitions {
                out.extend_from_slice(&inner);
            }
        }
    }
    (out, 1)
}
