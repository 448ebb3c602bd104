//! Facade runs from configuration files.

use cubesearch::prelude::*;
use cubesearch::{CubeSearchError, EvaluationConfig, PolicyConfig};
use cubesearch_test::{alg, solves};

const TOML: &str = r#"
scramble = "R U R' U'"
groups = ["f2l_d"]
threads = "sequential"

[[levels]]
moves = "ur"

[[levels]]
moves = "ur"

[[levels]]
moves = "ur"

[[levels]]
moves = "ur"
check = true

[evaluation]
start_face = "d"
policy = "short"
"#;

#[test]
fn toml_search_is_ranked() {
    let config = SearchConfig::from_toml_str(TOML).unwrap();
    let outcome = run_search(&config).unwrap();

    assert_eq!(outcome.scramble, alg("R U R' U'"));
    assert!(outcome.solutions.contains(&alg("U R U' R'")));
    for solution in &outcome.solutions {
        assert!(solves(&outcome.scramble, solution, &PieceGroup::F2l(Face::D)));
    }
    let (best, score) = outcome.best.unwrap();
    assert_eq!(best, alg("U R U' R'"));
    assert_eq!(score, 46 * 100 + 4 * 20);
    assert_eq!(outcome.stats.solutions, outcome.solutions.len() as u64);
}

#[test]
fn unranked_without_evaluation() {
    let config = SearchConfig::new()
        .with_scramble("R")
        .with_group("all")
        .with_level(LevelConfig::extend("single").with_check());
    let outcome = run_search(&config).unwrap();
    assert_eq!(outcome.solutions, vec![alg("R'")]);
    assert!(outcome.best.is_none());
}

#[test]
fn random_scramble_is_reported() {
    let config = SearchConfig::new()
        .with_random_scramble(6, 99)
        .with_group("cross_d")
        .with_level(LevelConfig::extend("single").with_check())
        .with_evaluation(EvaluationConfig {
            start_face: "d".into(),
            policy: PolicyConfig::Best,
        });
    let first = run_search(&config).unwrap();
    let second = run_search(&config).unwrap();
    assert_eq!(first.scramble.len(), 6);
    assert_eq!(first.scramble, second.scramble);
    assert_eq!(first.solutions, second.solutions);
}

#[test]
fn unknown_names_fail() {
    let config = SearchConfig::new()
        .with_scramble("R")
        .with_group("cross_x")
        .with_level(LevelConfig::extend("single").with_check());
    assert!(matches!(
        run_search(&config),
        Err(CubeSearchError::UnknownPieceGroup(_))
    ));
}
