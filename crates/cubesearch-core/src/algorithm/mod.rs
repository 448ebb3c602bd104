//! Move sequences and their algebra.
//!
//! An [`Algorithm`] is an ordered list of [`Move`]s, optionally with
//! repetition groups such as `(R U R' U')3`. The submodules provide:
//!
//! - `parse`: text cleaning and tokenizing
//! - `shrink`: joining adjacent and interleaved moves
//! - `group`: grouping validation, development and simplification
//! - `transform`: conjugation, reversal, inversion, mirroring
//!
//! # Example
//!
//! ```
//! use cubesearch_core::{Algorithm, Move};
//!
//! let mut alg = Algorithm::parse("R U R' U'").unwrap();
//! alg.push_shrink(Move::U);
//! assert_eq!(alg.to_string(), "R U R'");
//! ```

mod group;
mod parse;
mod shrink;
mod transform;


use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use rand::Rng;

use crate::error::AlgorithmError;
use crate::moves::{Amount, Category, Move};

/// Bound on random draws per requested move in [`Algorithm::fill_random`].
const RANDOM_FILL_ATTEMPTS: usize = 64;

/// Turn metrics for counting algorithm length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Metric {
    /// Every turn token, rotations included.
    #[default]
    Moves,
    /// Half-turn metric: slices count 2, rotations 0.
    Htm,
    /// Quarter-turn metric: half turns count double, slices count 2, rotations 0.
    Qtm,
    /// Slice-turn metric: every turn counts 1, rotations 0.
    Stm,
    /// Execution-turn metric: every turn counts 1, rotations included.
    Etm,
}

/// An ordered sequence of moves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Algorithm {
    moves: Vec<Move>,
}

impl Algorithm {
    /// Creates an empty algorithm.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a move list without any validation or merging.
    pub fn from_moves(moves: Vec<Move>) -> Self {
        Self { moves }
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn into_moves(self) -> Vec<Move> {
        self.moves
    }

    pub fn get(&self, position: usize) -> Option<Move> {
        self.moves.get(position).copied()
    }

    pub fn first(&self) -> Option<Move> {
        self.moves.first().copied()
    }

    pub fn last(&self) -> Option<Move> {
        self.moves.last().copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Appends a move as-is.
    pub fn push(&mut self, m: Move) {
        self.moves.push(m);
    }

    /// Appends a move and merges it into the tail where possible.
    ///
    /// Returns true if the tail changed shape (a merge or cancellation).
    pub fn push_shrink(&mut self, m: Move) -> bool {
        self.moves.push(m);
        self.shrink_last()
    }

    /// Appends another algorithm as-is.
    pub fn extend_from(&mut self, other: &Algorithm) {
        self.moves.extend_from_slice(&other.moves);
    }

    /// Appends another algorithm move by move, merging at each step.
    pub fn extend_shrink(&mut self, other: &Algorithm) {
        for &m in &other.moves {
            self.push_shrink(m);
        }
    }

    /// Concatenation of two algorithms without merging.
    pub fn concat(&self, other: &Algorithm) -> Algorithm {
        let mut moves = Vec::with_capacity(self.len() + other.len());
        moves.extend_from_slice(&self.moves);
        moves.extend_from_slice(&other.moves);
        Algorithm { moves }
    }

    /// Grows the algorithm with random moves drawn from `pool` until it
    /// reaches `target_len`, merging as it goes.
    ///
    /// The number of draws is bounded, so a pool that keeps cancelling
    /// (e.g. a single move) stops short of the target. Returns true if the
    /// target length was reached.
    pub fn fill_random<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        target_len: usize,
        pool: &[Move],
    ) -> bool {
        if pool.is_empty() {
            return self.len() >= target_len;
        }
        let mut attempts = target_len.saturating_mul(RANDOM_FILL_ATTEMPTS);
        while self.len() < target_len && attempts > 0 {
            let m = pool[rng.random_range(0..pool.len())];
            self.push_shrink(m);
            attempts -= 1;
        }
        self.len() >= target_len
    }

    /// Inserts a move before `position`. `position == len` appends.
    pub fn insert(&mut self, position: usize, m: Move) -> Result<(), AlgorithmError> {
        if position > self.moves.len() {
            return Err(self.out_of_range(position));
        }
        self.moves.insert(position, m);
        Ok(())
    }

    /// Removes and returns the move at `position`.
    pub fn remove(&mut self, position: usize) -> Result<Move, AlgorithmError> {
        if position >= self.moves.len() {
            return Err(self.out_of_range(position));
        }
        Ok(self.moves.remove(position))
    }

    /// Replaces the move at `position`, returning the old one.
    pub fn replace(&mut self, position: usize, m: Move) -> Result<Move, AlgorithmError> {
        match self.moves.get_mut(position) {
            Some(slot) => Ok(std::mem::replace(slot, m)),
            None => Err(self.out_of_range(position)),
        }
    }

    /// Copies `len` moves starting at `start`.
    pub fn sub_algorithm(&self, start: usize, len: usize) -> Result<Algorithm, AlgorithmError> {
        let end = start
            .checked_add(len)
            .filter(|&end| end <= self.moves.len())
            .ok_or_else(|| self.out_of_range(start.saturating_add(len)))?;
        Ok(Algorithm::from_moves(self.moves[start..end].to_vec()))
    }

    fn out_of_range(&self, position: usize) -> AlgorithmError {
        AlgorithmError::OutOfRange {
            position,
            len: self.moves.len(),
        }
    }

    /// Number of developed turns that change the cube relative to its
    /// centres: every turn except whole-cube rotations.
    pub fn turn_count(&self) -> usize {
        self.metric(Metric::Stm)
    }

    /// Length of the developed algorithm under the given metric.
    pub fn metric(&self, metric: Metric) -> usize {
        self.develop(false)
            .iter()
            .map(|&m| move_cost(m, metric))
            .sum()
    }
}

fn move_cost(m: Move, metric: Metric) -> usize {
    let Some(amount) = m.amount() else {
        return 0;
    };
    let quarters = if amount == Amount::Half { 2 } else { 1 };
    match (m.category(), metric) {
        (_, Metric::Moves) | (_, Metric::Etm) => 1,
        (Category::Rotation, _) => 0,
        (Category::Slice, Metric::Htm) => 2,
        (Category::Slice, Metric::Qtm) => 2 * quarters,
        (_, Metric::Qtm) => quarters,
        _ => 1,
    }
}

impl Index<usize> for Algorithm {
    type Output = Move;

    fn index(&self, index: usize) -> &Move {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a Algorithm {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl FromIterator<Move> for Algorithm {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Algorithm {
            moves: iter.into_iter().collect(),
        }
    }
}

impl From<Move> for Algorithm {
    fn from(m: Move) -> Self {
        Algorithm { moves: vec![m] }
    }
}

impl FromStr for Algorithm {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::parse(s)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut previous: Option<Move> = None;
        for &m in self.moves.iter().filter(|&&m| m != Move::Empty) {
            let tight = previous == Some(Move::Open) || m.repetitions().is_some();
            if previous.is_some() && !tight {
                f.write_str(" ")?;
            }
            write!(f, "{}", m)?;
            previous = Some(m);
        }
        Ok(())
    }
}
