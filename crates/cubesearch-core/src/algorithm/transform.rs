//! Geometric transforms: conjugation, reversal, inversion, mirroring.

use super::Algorithm;
use crate::error::AlgorithmError;
use crate::moves::Move;

impl Algorithm {
    /// Rewrites every move as seen after `rotation`.
    pub fn transform(&mut self, rotation: Move) -> Result<(), AlgorithmError> {
        if !rotation.is_rotation() {
            return Err(AlgorithmError::NotARotation(rotation));
        }
        for m in &mut self.moves {
            *m = m.through(rotation);
        }
        Ok(())
    }

    /// Rewrites `len` moves starting at `start` through `rotation` and
    /// brackets them with `rotation'` and `rotation`, so the algorithm keeps
    /// its overall effect.
    ///
    /// # Examples
    ///
    /// ```
    /// use cubesearch_core::{Algorithm, Move};
    ///
    /// let mut alg = Algorithm::parse("R U F").unwrap();
    /// alg.transform_range(Move::Y, 1, 1).unwrap();
    /// assert_eq!(alg.to_string(), "R y' U y F");
    /// ```
    pub fn transform_range(
        &mut self,
        rotation: Move,
        start: usize,
        len: usize,
    ) -> Result<(), AlgorithmError> {
        if !rotation.is_rotation() {
            return Err(AlgorithmError::NotARotation(rotation));
        }
        let end = start
            .checked_add(len)
            .filter(|&end| end <= self.moves.len())
            .ok_or(AlgorithmError::OutOfRange {
                position: start.saturating_add(len),
                len: self.moves.len(),
            })?;
        let rewritten: Vec<Move> = std::iter::once(rotation.inverse())
            .chain(self.moves[start..end].iter().map(|m| m.through(rotation)))
            .chain(std::iter::once(rotation))
            .collect();
        self.moves.splice(start..end, rewritten);
        Ok(())
    }

    /// Reverses move order. Group markers are swapped back into place so
    /// that nesting stays valid: `(R U)2` becomes `(U R)2`.
    pub fn reverse(&mut self) {
        self.moves.reverse();
        if !self.has_grouping() {
            return;
        }
        let mut closes: Vec<usize> = Vec::new();
        for i in 0..self.moves.len() {
            let m = self.moves[i];
            if m.repetitions().is_some() {
                closes.push(i);
            } else if m == Move::Open {
                if let Some(close) = closes.pop() {
                    self.moves.swap(close, i);
                }
            }
        }
    }

    /// Inverts every move in place, keeping the order.
    pub fn invert(&mut self) {
        for m in &mut self.moves {
            *m = m.inverse();
        }
    }

    /// The algorithm that undoes this one.
    pub fn inverse(&self) -> Algorithm {
        let mut inverse = self.clone();
        inverse.reverse();
        inverse.invert();
        inverse
    }

    /// Mirrors every move across the plane between `L` and `R`.
    pub fn mirror(&mut self) {
        for m in &mut self.moves {
            *m = m.mirror();
        }
    }

    /// Removes whole-cube rotations, rewriting the moves after each one so
    /// the face turns keep their effect relative to the centres.
    ///
    /// Meant for simplified algorithms; group markers pass through untouched.
    pub fn remove_rotations(&mut self) {
        for i in (0..self.moves.len()).rev() {
            let rotation = self.moves[i];
            if !rotation.is_rotation() {
                continue;
            }
            for m in &mut self.moves[i + 1..] {
                *m = m.through(rotation);
            }
            self.moves.remove(i);
        }
    }
}
