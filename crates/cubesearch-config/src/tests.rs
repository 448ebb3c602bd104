//! Tests for search configuration.

use super::*;

const TOML: &str = r#"
    scramble = "R U R' U'"
    groups = ["cross_d", "f2l_d"]
    multiple_search = true
    optimize_threads = false
    threads = { count = 4 }

    [[levels]]
    moves = "single"

    [[levels]]
    moves = ["R", "U'", "M2"]

    [[levels]]
    action = "repeat_inverse"
    check = true

    [evaluation]
    start_face = "u"
    policy = "short"
"#;

#[test]
fn test_toml_parsing() {
    let config = SearchConfig::from_toml_str(TOML).unwrap();
    assert_eq!(config.scramble, ScrambleConfig::Text("R U R' U'".into()));
    assert_eq!(config.groups, vec!["cross_d", "f2l_d"]);
    assert!(config.multiple_search);
    assert!(!config.optimize_threads);
    assert_eq!(config.threads, ThreadCountConfig::Count(4));
    assert_eq!(config.depth(), 3);
    assert_eq!(
        config.levels[0].moves,
        Some(MoveSetConfig::Named("single".into()))
    );
    assert_eq!(
        config.levels[1].moves,
        Some(MoveSetConfig::List(vec!["R".into(), "U'".into(), "M2".into()]))
    );
    assert_eq!(config.levels[2].action, LevelAction::RepeatInverse);
    assert!(config.levels[2].check);
    let evaluation = config.evaluation.unwrap();
    assert_eq!(evaluation.start_face, "u");
    assert_eq!(evaluation.policy, PolicyConfig::Short);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        scramble: "R U R' U'"
        groups: [cross_d, f2l_d]
        multiple_search: true
        optimize_threads: false
        threads: auto
        levels:
          - moves: single
          - moves: ["R", "U'", "M2"]
          - action: repeat_inverse
            check: true
        evaluation:
          start_face: u
          policy: short
    "#;

    let from_yaml = SearchConfig::from_yaml_str(yaml).unwrap();
    let mut from_toml = SearchConfig::from_toml_str(TOML).unwrap();
    from_toml.threads = ThreadCountConfig::Auto;
    assert_eq!(from_yaml, from_toml);
}

#[test]
fn test_random_scramble() {
    let config = SearchConfig::from_toml_str(
        r#"
        scramble = { length = 20, seed = 7 }
        "#,
    )
    .unwrap();
    assert_eq!(
        config.scramble,
        ScrambleConfig::Random(RandomScrambleConfig {
            length: 20,
            seed: Some(7)
        })
    );
}

#[test]
fn test_defaults() {
    let config = SearchConfig::from_toml_str("").unwrap();
    assert_eq!(config, SearchConfig::default());
    assert!(config.optimize_threads);
    assert_eq!(config.threads, ThreadCountConfig::Auto);
    assert_eq!(EvaluationConfig::default().start_face, "d");
    assert_eq!(EvaluationConfig::default().policy, PolicyConfig::Best);
}

#[test]
fn test_unknown_thread_mode() {
    assert!(matches!(
        SearchConfig::from_toml_str(r#"threads = "many""#),
        Err(ConfigError::Toml(_))
    ));
}

#[test]
fn test_builder() {
    let config = SearchConfig::new()
        .with_scramble("F R")
        .with_group("cross_d")
        .with_level(LevelConfig::extend("single"))
        .with_level(LevelConfig::extend_list(["R", "U"]).with_check())
        .with_threads(ThreadCountConfig::Sequential)
        .with_evaluation(EvaluationConfig::default());

    assert_eq!(config.depth(), 2);
    assert!(config.levels[1].check);
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate() {
    let base = SearchConfig::new().with_scramble("R");
    assert!(base.validate().is_err());

    let no_levels = base.clone().with_group("cross_d");
    assert!(no_levels.validate().is_err());

    let early_inverse = no_levels
        .clone()
        .with_level(LevelConfig::extend("single"))
        .with_level(LevelConfig::repeat_inverse().with_check());
    assert!(matches!(
        early_inverse.validate(),
        Err(ConfigError::Invalid(_))
    ));

    let no_check = no_levels.clone().with_level(LevelConfig::extend("single"));
    assert!(no_check.validate().is_err());

    let missing_moves = no_levels.clone().with_level(LevelConfig {
        check: true,
        ..LevelConfig::default()
    });
    assert!(missing_moves.validate().is_err());

    let empty_random = no_levels
        .with_level(LevelConfig::extend("single").with_check())
        .with_random_scramble(0, 1);
    assert!(empty_random.validate().is_err());
}

#[test]
fn test_load_missing_file() {
    assert!(matches!(
        SearchConfig::load("/nonexistent/search.toml"),
        Err(ConfigError::Io(_))
    ));
}
