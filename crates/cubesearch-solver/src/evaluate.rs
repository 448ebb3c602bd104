//! Ranking of solutions by first-two-layers progress.
//!
//! A solution only competes if it leaves the cross of the start face solved.
//! It then scores for being short and for each corner/middle-edge pair that
//! is solved, or at least parked unoriented in the layer opposite the start
//! face.

use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;
use tracing::info;

use cubesearch_config::PolicyConfig;
use cubesearch_core::{Algorithm, CubeSearchError, Face, Piece, PieceGroup, PuzzleState};

/// Length above which a solution earns no length score.
pub const LENGTH_CAP: usize = 50;

/// Relative magnitudes of the scoring terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights {
    /// Per move under [`LENGTH_CAP`].
    pub length: u32,
    /// Per solved pair.
    pub complete: u32,
    /// Per unsolved, not fully oriented pair with both pieces in the
    /// opposite layer.
    pub placed: u32,
    /// Extra for a placed pair whose pieces touch.
    pub adjacent: u32,
}

/// Named scoring policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Policy {
    /// Pairs dominate, length breaks ties.
    #[default]
    Best,
    /// Length dominates.
    Short,
}

impl Policy {
    pub const fn weights(self) -> Weights {
        match self {
            Policy::Best => Weights {
                length: 1,
                complete: 100,
                placed: 20,
                adjacent: 10,
            },
            Policy::Short => Weights {
                length: 100,
                complete: 20,
                placed: 8,
                adjacent: 4,
            },
        }
    }
}

impl From<PolicyConfig> for Policy {
    fn from(config: PolicyConfig) -> Self {
        match config {
            PolicyConfig::Best => Policy::Best,
            PolicyConfig::Short => Policy::Short,
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Best => write!(f, "best"),
            Policy::Short => write!(f, "short"),
        }
    }
}

impl FromStr for Policy {
    type Err = CubeSearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "best" => Ok(Policy::Best),
            "short" => Ok(Policy::Short),
            _ => Err(CubeSearchError::Config(format!("unknown policy '{}'", s))),
        }
    }
}

/// Scores a state reached by a solution of `length` moves.
///
/// Returns `None` when the cross of `face` is not solved.
pub fn score_state<P: PuzzleState>(
    state: &P,
    length: usize,
    face: Face,
    policy: Policy,
) -> Option<u32> {
    if !state.is_solved(&PieceGroup::Cross(face)) {
        return None;
    }
    let weights = policy.weights();
    let mut score = LENGTH_CAP.saturating_sub(length) as u32 * weights.length;
    let opposite = face.opposite();
    for pair in PieceGroup::f2l_pairs(face) {
        if state.is_solved(&pair) {
            score += weights.complete;
            continue;
        }
        let PieceGroup::Pair(corner, edge) = pair else {
            continue;
        };
        let (corner, edge) = (Piece::Corner(corner), Piece::Edge(edge));
        if state.is_oriented(corner) && state.is_oriented(edge) {
            continue;
        }
        if state.is_in_layer(corner, opposite) && state.is_in_layer(edge, opposite) {
            score += weights.placed;
            if state.are_adjacent(corner, edge) {
                score += weights.adjacent;
            }
        }
    }
    Some(score)
}

/// Scores `solution` applied after the scrambled `base` state.
pub fn score_solution<P: PuzzleState>(
    base: &P,
    solution: &Algorithm,
    face: Face,
    policy: Policy,
) -> Option<u32> {
    score_state(&base.applied(solution), solution.len(), face, policy)
}

/// Picks the highest scoring solution; the earliest one wins ties.
///
/// Returns `None` when no solution keeps the cross solved.
pub fn best_solution<P: PuzzleState>(
    base: &P,
    solutions: &[Algorithm],
    face: Face,
    policy: Policy,
) -> Option<(Algorithm, u32)> {
    let best = solutions
        .par_iter()
        .enumerate()
        .filter_map(|(index, solution)| {
            score_solution(base, solution, face, policy).map(|score| (index, score))
        })
        .max_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(&a.0)));

    let (index, score) = best?;
    info!(
        event = "evaluation",
        policy = %policy,
        face = %face,
        candidates = solutions.len() as u64,
        score = score as u64,
        solution = %solutions[index],
    );
    Some((solutions[index].clone(), score))
}
