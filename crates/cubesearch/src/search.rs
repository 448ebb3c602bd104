//! Search entry point that hides all internal wiring.

use tracing::info;

use cubesearch_config::SearchConfig;
use cubesearch_core::{Algorithm, Result};
use cubesearch_solver::{SearchBuilder, SearchStats};

/// Result of [`run_search`].
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// The scramble searched, drawn if the config asked for a random one.
    pub scramble: Algorithm,
    pub solutions: Vec<Algorithm>,
    /// Highest ranked solution and its score, when evaluation is
    /// configured and some solution keeps the cross.
    pub best: Option<(Algorithm, u32)>,
    pub stats: SearchStats,
}

/// Builds, runs and optionally ranks the search described by `config`.
pub fn run_search(config: &SearchConfig) -> Result<SearchOutcome> {
    #[cfg(feature = "console")]
    cubesearch_console::init();

    let mut search = SearchBuilder::build(config)?;
    search.run(SearchBuilder::threads(config));

    let best = match &config.evaluation {
        Some(evaluation) => {
            let (face, policy) = SearchBuilder::evaluation(Some(evaluation))?;
            search.evaluate(face, policy)
        }
        None => None,
    };

    info!(
        event = "search_outcome",
        solutions = search.solutions().len() as u64,
        ranked = best.is_some(),
    );

    Ok(SearchOutcome {
        scramble: search.scramble().clone(),
        solutions: search.solutions().to_vec(),
        best,
        stats: search.stats().clone(),
    })
}
