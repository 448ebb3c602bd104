//! Parallel branch search over configured move levels.
//!
//! The search tree is rooted at a set of short prefixes. Each root is an
//! independent unit of work: workers take roots by static striping, extend
//! them depth-first through the remaining levels and check branches against
//! the tracked piece groups at every checking level.
//!
//! # Pruning
//!
//! - **Commuting pairs**: a candidate on the layer opposite the branch's last
//!   move is only tried when its ordinal is lower, so exactly one ordering of
//!   every commuting pair is explored.
//! - **Shrink regression**: a candidate that merges into the branch tail is
//!   dropped, as a shorter branch already covers it.
//! - **Solved groups**: a branch stops recording a group once one of its
//!   prefixes solved it, and stops descending when every group is solved.
//!
//! # Example
//!
//! ```
//! use cubesearch_core::{Algorithm, PieceGroup};
//! use cubesearch_solver::{DeepSearch, MoveSet, SearchLevel, ThreadCount};
//!
//! let scramble = Algorithm::parse("R U").unwrap();
//! let levels = vec![
//!     SearchLevel::extend(&MoveSet::Single),
//!     SearchLevel::extend(&MoveSet::Single).with_check(),
//! ];
//! let mut search: DeepSearch =
//!     DeepSearch::new(scramble, &[PieceGroup::All], levels, true, false).unwrap();
//! search.run(ThreadCount::Sequential);
//!
//! assert_eq!(search.solutions(), &[Algorithm::parse("U' R'").unwrap()]);
//! ```

mod level;

#[cfg(test)]
mod tests;

use std::sync::{Mutex, PoisonError};
use std::thread;

use tracing::{debug, info, trace};

use cubesearch_core::{
    Algorithm, Cube, CubeSearchError, Face, Move, PieceGroup, PuzzleState, SolveMask,
};

use crate::evaluate::{self, Policy};
use crate::partition::{available_cores, ThreadCount};
use crate::stats::SearchStats;

pub use level::{LevelAction, MoveSet, SearchLevel};

/// Most masks a search can track, one bit each.
pub const MAX_TRACKED_MASKS: usize = 64;

/// Scramble length (in effective turns) needed before the first two
/// levels are fused into two-move roots.
const FUSION_MIN_SCRAMBLE_TURNS: usize = 3;

/// Output of one root branch.
#[derive(Debug, Default)]
struct RootResult {
    solutions: Vec<Algorithm>,
    stats: SearchStats,
}

/// Multi-level branch search from a scrambled state.
#[derive(Debug)]
pub struct DeepSearch<P: PuzzleState = Cube> {
    scramble: Algorithm,
    base: P,
    groups: Vec<PieceGroup>,
    masks: Vec<SolveMask>,
    levels: Vec<SearchLevel>,
    roots: Vec<Algorithm>,
    fused: bool,
    cores: usize,
    solutions: Vec<Algorithm>,
    stats: SearchStats,
}

impl<P: PuzzleState> DeepSearch<P> {
    /// Builds a search.
    ///
    /// Groups are pooled into one mask unless `multiple_search` is set, in
    /// which case each group is tracked and recorded on its own. With
    /// `optimize_threads`, two extending first levels, a depth above two and
    /// a scramble of more than two turns once merged, the first two levels
    /// are fused into two-move roots so workers get finer-grained units.
    ///
    /// # Errors
    ///
    /// Fails when there are no levels or groups, when the first level does
    /// not extend, when an extending level has no candidates, when a
    /// repeat-inverse level has fewer than two levels before it, or when
    /// more than [`MAX_TRACKED_MASKS`] groups are tracked separately.
    pub fn new(
        scramble: Algorithm,
        groups: &[PieceGroup],
        levels: Vec<SearchLevel>,
        optimize_threads: bool,
        multiple_search: bool,
    ) -> Result<Self, CubeSearchError> {
        validate_levels(&levels)?;
        if groups.is_empty() {
            return Err(CubeSearchError::Config("no piece groups to search".into()));
        }

        let masks: Vec<SolveMask> = if multiple_search {
            groups.iter().map(PieceGroup::mask).collect()
        } else {
            vec![groups
                .iter()
                .fold(SolveMask::EMPTY, |mask, group| mask | group.mask())]
        };
        if masks.len() > MAX_TRACKED_MASKS {
            return Err(CubeSearchError::Config(format!(
                "{} groups exceed the limit of {} separately tracked groups",
                masks.len(),
                MAX_TRACKED_MASKS
            )));
        }

        let mut effective = scramble.clone();
        effective.shrink();
        let fused = optimize_threads
            && levels.len() > 2
            && levels[0].is_extend()
            && levels[1].is_extend()
            && effective.turn_count() >= FUSION_MIN_SCRAMBLE_TURNS;
        let roots = if fused {
            fused_roots(&levels[0].moves, &levels[1].moves)
        } else {
            levels[0].moves.iter().map(|&m| Algorithm::from(m)).collect()
        };

        let base = P::default().applied(&scramble);

        Ok(Self {
            scramble,
            base,
            groups: groups.to_vec(),
            masks,
            levels,
            roots,
            fused,
            cores: available_cores(),
            solutions: Vec::new(),
            stats: SearchStats::default(),
        })
    }

    /// Runs the search, replacing any earlier solutions.
    ///
    /// Solutions are ordered as a sequential run would find them, whatever
    /// the thread count.
    pub fn run(&mut self, threads: impl Into<ThreadCount>) -> &[Algorithm] {
        let threads = threads.into();
        let workers = threads.resolve(self.roots.len());

        let mut stats = SearchStats::default();
        stats.start();
        info!(
            event = "search_start",
            scramble = %self.scramble,
            roots = self.roots.len() as u64,
            depth = self.depth() as u64,
            threads = workers as u64,
            groups = self.groups.len() as u64,
            fused = self.fused,
        );

        let mut solutions = Vec::new();
        if self.fused && self.levels[0].check {
            let first = self.check_first_level();
            stats.merge(&first.stats);
            solutions.extend(first.solutions);
        }

        let results = if threads.is_sequential() || workers == 1 {
            (0..self.roots.len())
                .map(|index| self.search_root(index))
                .collect()
        } else {
            self.search_parallel(workers)
        };
        for result in results {
            stats.merge(&result.stats);
            solutions.extend(result.solutions);
        }

        stats.finish();
        info!(
            event = "search_end",
            solutions = solutions.len() as u64,
            nodes = stats.nodes,
            pruned = stats.pruned,
            checks = stats.checks,
            duration_ms = stats.elapsed().as_millis() as u64,
            speed = stats.nodes_per_second(),
        );

        self.solutions = solutions;
        self.stats = stats;
        &self.solutions
    }

    // Stripes roots over `workers` scoped threads. Results land in their
    // root's slot, so the merged order does not depend on scheduling.
    fn search_parallel(&self, workers: usize) -> Vec<RootResult> {
        let slots: Mutex<Vec<Option<RootResult>>> =
            Mutex::new((0..self.roots.len()).map(|_| None).collect());

        thread::scope(|s| {
            for worker in 0..workers {
                let slots = &slots;
                s.spawn(move || {
                    for index in (worker..self.roots.len()).step_by(workers) {
                        let result = self.search_root(index);
                        let mut slots = slots.lock().unwrap_or_else(PoisonError::into_inner);
                        slots[index] = Some(result);
                    }
                });
            }
        });

        slots
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .into_iter()
            .flatten()
            .collect()
    }

    fn search_root(&self, index: usize) -> RootResult {
        let root = &self.roots[index];
        let mut result = RootResult::default();
        let mut bits = self.all_bits();
        result.stats.record_node();

        let next_level = if self.fused {
            // Depth-one solutions were recorded once up front; only clear
            // the groups the first move already solves.
            if self.levels[0].check {
                let first: Algorithm = root.iter().take(1).copied().collect();
                bits = self.check(&first, bits, false, &mut result);
            }
            if self.levels[1].check {
                bits = self.check(root, bits, true, &mut result);
            }
            2
        } else {
            if self.levels[0].check {
                bits = self.check(root, bits, true, &mut result);
            }
            1
        };

        self.extend(root, next_level, bits, &mut result);
        result.stats.record_root();
        debug!(
            event = "root_complete",
            root = index as u64,
            prefix = %root,
            solutions = result.solutions.len() as u64,
            nodes = result.stats.nodes,
        );
        result
    }

    // Checks every first-level move once, for fused runs.
    fn check_first_level(&self) -> RootResult {
        let mut result = RootResult::default();
        for &m in &self.levels[0].moves {
            self.check(&Algorithm::from(m), self.all_bits(), true, &mut result);
        }
        result
    }

    fn extend(&self, branch: &Algorithm, level: usize, bits: u64, result: &mut RootResult) {
        if bits == 0 || level >= self.levels.len() {
            return;
        }
        let current = &self.levels[level];
        match current.action {
            LevelAction::Extend => {
                for &candidate in &current.moves {
                    self.step(branch, candidate, level, bits, result);
                }
            }
            LevelAction::RepeatInverse => {
                if let Some(m) = branch.get(level - 2) {
                    self.step(branch, m.inverse(), level, bits, result);
                }
            }
        }
    }

    fn step(
        &self,
        branch: &Algorithm,
        candidate: Move,
        level: usize,
        bits: u64,
        result: &mut RootResult,
    ) {
        if let Some(last) = branch.last() {
            if last.is_opposite(candidate) && candidate > last {
                result.stats.record_pruned();
                return;
            }
        }
        let mut next = branch.clone();
        next.push_shrink(candidate);
        if next.len() <= branch.len() {
            result.stats.record_pruned();
            return;
        }
        result.stats.record_node();

        let bits = if self.levels[level].check {
            self.check(&next, bits, true, result)
        } else {
            bits
        };
        self.extend(&next, level + 1, bits, result);
    }

    // Clears the bit of every tracked mask `alg` satisfies, recording the
    // algorithm once per cleared bit when `record` is set.
    fn check(&self, alg: &Algorithm, bits: u64, record: bool, result: &mut RootResult) -> u64 {
        result.stats.record_check();
        let state = self.base.applied(alg);
        let mut remaining = bits;
        for (index, mask) in self.masks.iter().enumerate() {
            let bit = 1u64 << index;
            if remaining & bit == 0 || !state.matches(mask) {
                continue;
            }
            remaining &= !bit;
            if record {
                trace!(event = "solution_found", mask = index as u64, solution = %alg);
                result.stats.record_solution();
                result.solutions.push(alg.clone());
            }
        }
        remaining
    }

    fn all_bits(&self) -> u64 {
        match self.masks.len() {
            MAX_TRACKED_MASKS => u64::MAX,
            n => (1u64 << n) - 1,
        }
    }

    /// Ranks the solutions for a start face. `None` when none keeps the
    /// cross of `face` solved (including when there are no solutions).
    pub fn evaluate(&self, face: Face, policy: Policy) -> Option<(Algorithm, u32)> {
        evaluate::best_solution(&self.base, &self.solutions, face, policy)
    }

    /// Cores available to the process.
    pub fn core_count(&self) -> usize {
        self.cores
    }

    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    pub fn roots(&self) -> &[Algorithm] {
        &self.roots
    }

    /// Configured depth, in levels.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Returns true if the first two levels were fused into the roots.
    pub fn is_fused(&self) -> bool {
        self.fused
    }

    pub fn scramble(&self) -> &Algorithm {
        &self.scramble
    }

    /// The scrambled state every branch starts from.
    pub fn base_state(&self) -> &P {
        &self.base
    }

    pub fn groups(&self) -> &[PieceGroup] {
        &self.groups
    }

    pub fn solutions(&self) -> &[Algorithm] {
        &self.solutions
    }

    /// Statistics of the last run.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

fn validate_levels(levels: &[SearchLevel]) -> Result<(), CubeSearchError> {
    let Some(first) = levels.first() else {
        return Err(CubeSearchError::InvalidLevel("no levels configured".into()));
    };
    if !first.is_extend() {
        return Err(CubeSearchError::InvalidLevel(
            "level 0 must extend the branch".into(),
        ));
    }
    for (index, level) in levels.iter().enumerate() {
        match level.action {
            LevelAction::Extend if level.moves.is_empty() => {
                return Err(CubeSearchError::InvalidLevel(format!(
                    "level {} has no candidate moves",
                    index
                )));
            }
            LevelAction::Extend if level.moves.iter().any(|m| !m.is_turn()) => {
                return Err(CubeSearchError::InvalidLevel(format!(
                    "level {} has non-turn candidates",
                    index
                )));
            }
            LevelAction::RepeatInverse if index < 2 => {
                return Err(CubeSearchError::InvalidLevel(format!(
                    "level {} repeats an inverse from two levels back",
                    index
                )));
            }
            _ => {}
        }
    }
    Ok(())
}

// Two-move prefixes for fused levels. Prefixes that shrink are covered by
// single-move work and are dropped.
fn fused_roots(first: &[Move], second: &[Move]) -> Vec<Algorithm> {
    let mut roots = Vec::with_capacity(first.len() * second.len());
    for &a in first {
        for &b in second {
            if a.is_opposite(b) && b > a {
                continue;
            }
            let mut root = Algorithm::from(a);
            root.push_shrink(b);
            if root.len() == 2 {
                roots.push(root);
            }
        }
    }
    roots
}
