//! Builder module for constructing searches from configuration
//!
//! This module wires the plain configuration types to the search engine:
//! scrambles are parsed or drawn, group and move set names resolved, and
//! levels materialized.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use cubesearch_config::{
    EvaluationConfig, LevelAction as LevelActionConfig, LevelConfig, MoveSetConfig,
    ScrambleConfig, SearchConfig,
};
use cubesearch_core::{Algorithm, Cube, CubeSearchError, Face, Move, PieceGroup, Result};

use crate::evaluate::Policy;
use crate::partition::ThreadCount;
use crate::search::{DeepSearch, MoveSet, SearchLevel};

/// Builder for constructing searches from configuration.
pub struct SearchBuilder;

impl SearchBuilder {
    /// Builds a ready-to-run search from a validated configuration.
    pub fn build(config: &SearchConfig) -> Result<DeepSearch<Cube>> {
        config
            .validate()
            .map_err(|e| CubeSearchError::Config(e.to_string()))?;

        let scramble = Self::scramble(&config.scramble)?;
        let groups = Self::groups(&config.groups)?;
        let levels = Self::levels(&config.levels)?;
        debug!(
            event = "search_built",
            scramble = %scramble,
            groups = groups.len() as u64,
            depth = levels.len() as u64,
        );

        DeepSearch::new(
            scramble,
            &groups,
            levels,
            config.optimize_threads,
            config.multiple_search,
        )
    }

    /// Parses a scramble, or draws a random one from the face turns.
    ///
    /// Random scrambles without a seed use a fresh one per call.
    pub fn scramble(config: &ScrambleConfig) -> Result<Algorithm> {
        match config {
            ScrambleConfig::Text(text) if text.trim().is_empty() => Ok(Algorithm::new()),
            ScrambleConfig::Text(text) => Ok(Algorithm::parse(text)?),
            ScrambleConfig::Random(random) => {
                let seed = random.seed.unwrap_or_else(rand::random);
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                let mut scramble = Algorithm::new();
                scramble.fill_random(&mut rng, random.length, &Move::FACE_TURNS);
                Ok(scramble)
            }
        }
    }

    /// Resolves piece group names.
    pub fn groups<S: AsRef<str>>(names: &[S]) -> Result<Vec<PieceGroup>> {
        names.iter().map(|name| name.as_ref().parse()).collect()
    }

    /// Materializes every level's candidate moves.
    pub fn levels(configs: &[LevelConfig]) -> Result<Vec<SearchLevel>> {
        configs.iter().map(Self::level).collect()
    }

    /// Materializes one level.
    pub fn level(config: &LevelConfig) -> Result<SearchLevel> {
        let level = match config.action {
            LevelActionConfig::Extend => {
                let set = match &config.moves {
                    Some(moves) => Self::move_set(moves)?,
                    None => {
                        return Err(CubeSearchError::InvalidLevel(
                            "extending level without moves".into(),
                        ))
                    }
                };
                SearchLevel::extend(&set)
            }
            LevelActionConfig::RepeatInverse => SearchLevel::repeat_inverse(),
        };
        Ok(if config.check {
            level.with_check()
        } else {
            level
        })
    }

    /// Resolves a named move set or parses an explicit list.
    pub fn move_set(config: &MoveSetConfig) -> Result<MoveSet> {
        match config {
            MoveSetConfig::Named(name) => name.parse(),
            MoveSetConfig::List(list) => MoveSet::from_list(list.as_slice()),
        }
    }

    pub fn threads(config: &SearchConfig) -> ThreadCount {
        config.threads.into()
    }

    /// Start face and policy for ranking; the defaults when not configured.
    pub fn evaluation(config: Option<&EvaluationConfig>) -> Result<(Face, Policy)> {
        let Some(config) = config else {
            return Ok((Face::D, Policy::default()));
        };
        let face = config.start_face.parse::<Face>().map_err(|face| {
            CubeSearchError::Config(format!("unknown start face '{}'", face))
        })?;
        Ok((face, config.policy.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubesearch_config::{PolicyConfig, RandomScrambleConfig, ThreadCountConfig};

    fn base_config() -> SearchConfig {
        SearchConfig::new()
            .with_scramble("R U F")
            .with_group("all")
            .with_level(LevelConfig::extend("single"))
            .with_level(LevelConfig::extend("single"))
            .with_level(LevelConfig::extend("single").with_check())
    }

    #[test]
    fn test_build_from_config() {
        let mut search = SearchBuilder::build(&base_config()).unwrap();
        assert_eq!(search.depth(), 3);
        assert!(search.is_fused());
        search.run(ThreadCount::Sequential);
        assert_eq!(
            search.solutions(),
            &[Algorithm::parse("F' U' R'").unwrap()]
        );
    }

    #[test]
    fn test_build_rejects_invalid_config() {
        let config = SearchConfig::new().with_scramble("R");
        assert!(matches!(
            SearchBuilder::build(&config),
            Err(CubeSearchError::Config(_))
        ));
    }

    #[test]
    fn test_build_reports_bad_names() {
        let config = base_config().with_group("cross_q");
        assert!(matches!(
            SearchBuilder::build(&config),
            Err(CubeSearchError::UnknownPieceGroup(_))
        ));

        let config = base_config().with_level(LevelConfig::extend("everything").with_check());
        assert!(matches!(
            SearchBuilder::build(&config),
            Err(CubeSearchError::UnknownMoveSet(_))
        ));

        let config = base_config().with_scramble("R (U");
        assert!(matches!(
            SearchBuilder::build(&config),
            Err(CubeSearchError::Algorithm(_))
        ));
    }

    #[test]
    fn test_seeded_random_scramble() {
        let config = ScrambleConfig::Random(RandomScrambleConfig {
            length: 20,
            seed: Some(7),
        });
        let first = SearchBuilder::scramble(&config).unwrap();
        let second = SearchBuilder::scramble(&config).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 20);
        assert!(first.iter().all(|m| Move::FACE_TURNS.contains(m)));
    }

    #[test]
    fn test_empty_scramble() {
        let scramble = SearchBuilder::scramble(&ScrambleConfig::Text("  ".into())).unwrap();
        assert!(scramble.is_empty());
    }

    #[test]
    fn test_level_from_list() {
        let level = SearchBuilder::level(&LevelConfig::extend_list(["R", "U2"])).unwrap();
        assert_eq!(level.moves, vec![Move::R, Move::U2]);
        assert!(!level.check);

        let level = SearchBuilder::level(&LevelConfig::repeat_inverse().with_check()).unwrap();
        assert!(level.check);
        assert!(!level.is_extend());

        let missing = LevelConfig {
            moves: None,
            ..LevelConfig::default()
        };
        assert!(matches!(
            SearchBuilder::level(&missing),
            Err(CubeSearchError::InvalidLevel(_))
        ));
    }

    #[test]
    fn test_threads_and_evaluation() {
        let config = base_config().with_threads(ThreadCountConfig::Count(3));
        assert_eq!(SearchBuilder::threads(&config), ThreadCount::Specific(3));

        assert_eq!(
            SearchBuilder::evaluation(None).unwrap(),
            (Face::D, Policy::Best)
        );
        let evaluation = EvaluationConfig {
            start_face: "U".into(),
            policy: PolicyConfig::Short,
        };
        assert_eq!(
            SearchBuilder::evaluation(Some(&evaluation)).unwrap(),
            (Face::U, Policy::Short)
        );
        let evaluation = EvaluationConfig {
            start_face: "q".into(),
            ..EvaluationConfig::default()
        };
        assert!(SearchBuilder::evaluation(Some(&evaluation)).is_err());
    }
}
