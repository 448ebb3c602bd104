use super::*;
use cubesearch_core::Corner;

fn alg(text: &str) -> Algorithm {
    Algorithm::parse(text).unwrap()
}

fn algs(texts: &[&str]) -> Vec<Algorithm> {
    texts.iter().map(|t| alg(t)).collect()
}

fn search(scramble: &str, groups: &[PieceGroup], levels: Vec<SearchLevel>) -> DeepSearch {
    DeepSearch::new(alg(scramble), groups, levels, true, false).unwrap()
}

fn single_levels(depth: usize) -> Vec<SearchLevel> {
    let mut levels: Vec<SearchLevel> = (0..depth)
        .map(|_| SearchLevel::extend(&MoveSet::Single))
        .collect();
    if let Some(last) = levels.pop() {
        levels.push(last.with_check());
    }
    levels
}

#[test]
fn test_one_level_finds_inverse() {
    let mut search = search("R", &[PieceGroup::All], single_levels(1));
    assert_eq!(search.run(ThreadCount::Sequential), algs(&["R'"]).as_slice());
    assert_eq!(search.stats().solutions, 1);
}

#[test]
fn test_three_levels_find_inverse() {
    for optimize in [true, false] {
        let mut search: DeepSearch = DeepSearch::new(
            alg("R U F"),
            &[PieceGroup::All],
            single_levels(3),
            optimize,
            false,
        )
        .unwrap();
        assert_eq!(search.is_fused(), optimize);
        search.run(ThreadCount::Sequential);
        assert_eq!(search.solutions(), algs(&["F' U' R'"]).as_slice());
    }
}

#[test]
fn test_commuting_pair_explored_once() {
    let mut search = search("R L", &[PieceGroup::All], single_levels(2));
    search.run(ThreadCount::Sequential);
    assert_eq!(search.solutions(), algs(&["L' R'"]).as_slice());
    assert!(search.stats().pruned > 0);
}

#[test]
fn test_shrinking_candidates_are_pruned() {
    // R R would merge into R2, which only a one-move branch may produce.
    let mut search = search("R2", &[PieceGroup::All], single_levels(2));
    search.run(ThreadCount::Sequential);
    assert!(search.solutions().is_empty());

    let mut search = self::search("R2", &[PieceGroup::All], single_levels(1));
    search.run(ThreadCount::Sequential);
    assert_eq!(search.solutions(), algs(&["R2"]).as_slice());
}

#[test]
fn test_solved_prefix_stops_branch() {
    let levels = vec![
        SearchLevel::extend(&MoveSet::Single).with_check(),
        SearchLevel::extend(&MoveSet::Single).with_check(),
    ];
    let mut search = search("R", &[PieceGroup::All], levels);
    search.run(ThreadCount::Sequential);
    assert_eq!(search.solutions(), algs(&["R'"]).as_slice());
}

#[test]
fn test_repeat_inverse_level() {
    let levels = vec![
        SearchLevel::extend(&MoveSet::Ur),
        SearchLevel::extend(&MoveSet::Ur),
        SearchLevel::repeat_inverse().with_check(),
    ];
    let mut search = search("R U R'", &[PieceGroup::All], levels);
    search.run(ThreadCount::Sequential);
    assert_eq!(search.solutions(), algs(&["R U' R'"]).as_slice());
}

#[test]
fn test_fused_roots() {
    let search = search("R U F", &[PieceGroup::All], single_levels(3));
    assert!(search.is_fused());
    // 18 x 18 pairs, minus same-layer pairs and one ordering of each
    // opposite pair.
    assert_eq!(search.root_count(), 243);
    assert!(search.roots().iter().all(|root| root.len() == 2));

    let levels = vec![
        SearchLevel::extend(&MoveSet::Ur),
        SearchLevel::extend(&MoveSet::Ur),
        SearchLevel::repeat_inverse().with_check(),
    ];
    let search = self::search("R U F", &[PieceGroup::All], levels);
    assert_eq!(search.root_count(), 18);
}

#[test]
fn test_fusion_needs_scramble_and_depth() {
    let short = search("R U", &[PieceGroup::All], single_levels(3));
    assert!(!short.is_fused());
    assert_eq!(short.root_count(), 18);

    let shallow = search("R U F", &[PieceGroup::All], single_levels(2));
    assert!(!shallow.is_fused());

    // R R R is a single R' once merged.
    let merged = search("R R R", &[PieceGroup::All], single_levels(3));
    assert!(!merged.is_fused());
    assert_eq!(merged.root_count(), 18);
}

#[test]
fn test_fused_first_level_checks_recorded_once() {
    let levels = vec![
        SearchLevel::extend(&MoveSet::Single).with_check(),
        SearchLevel::extend(&MoveSet::Single),
        SearchLevel::extend(&MoveSet::Single).with_check(),
    ];
    let groups = [PieceGroup::Cross(Face::D)];
    let mut search = search("R U F", &groups, levels);
    assert!(search.is_fused());
    search.run(ThreadCount::Sequential);
    // No single move restores the cross, so only depth-three branches
    // are recorded.
    assert!(search.solutions().iter().all(|s| s.len() == 3));
    assert!(search.solutions().contains(&alg("F' U' R'")));

    let mut search = self::search("R U R' F'", &groups, single_check_fused());
    search.run(ThreadCount::Sequential);
    let singles: Vec<&Algorithm> = search
        .solutions()
        .iter()
        .filter(|s| s.len() == 1)
        .collect();
    assert_eq!(singles, vec![&alg("F")]);
}

// First level checked, fused with the second.
fn single_check_fused() -> Vec<SearchLevel> {
    vec![
        SearchLevel::extend(&MoveSet::Single).with_check(),
        SearchLevel::extend(&MoveSet::Single),
        SearchLevel::extend(&MoveSet::Single),
    ]
}

#[test]
fn test_multiple_search_records_per_group() {
    let groups = [PieceGroup::Cross(Face::D), PieceGroup::Cross(Face::U)];
    let mut pooled = search("R", &groups, single_levels(1));
    pooled.run(ThreadCount::Sequential);
    assert_eq!(pooled.solutions(), algs(&["R'"]).as_slice());

    let mut separate: DeepSearch =
        DeepSearch::new(alg("R"), &groups, single_levels(1), true, true).unwrap();
    separate.run(ThreadCount::Sequential);
    assert_eq!(separate.solutions(), algs(&["R'", "R'"]).as_slice());
}

#[test]
fn test_multiple_search_group_limit() {
    let groups = vec![PieceGroup::Pair(Corner::DFR, cubesearch_core::Edge::FR); 65];
    let result: Result<DeepSearch, _> =
        DeepSearch::new(alg("R"), &groups, single_levels(1), true, true);
    assert!(matches!(result, Err(CubeSearchError::Config(_))));

    let groups = vec![PieceGroup::All; 64];
    let mut search: DeepSearch =
        DeepSearch::new(alg("R"), &groups, single_levels(1), true, true).unwrap();
    search.run(ThreadCount::Sequential);
    assert_eq!(search.solutions().len(), 64);
}

#[test]
fn test_invalid_levels() {
    let invalid = |levels: Vec<SearchLevel>| {
        let result: Result<DeepSearch, _> =
            DeepSearch::new(alg("R"), &[PieceGroup::All], levels, true, false);
        matches!(result, Err(CubeSearchError::InvalidLevel(_)))
    };
    assert!(invalid(Vec::new()));
    assert!(invalid(vec![SearchLevel::repeat_inverse().with_check()]));
    assert!(invalid(vec![
        SearchLevel::extend(&MoveSet::Single),
        SearchLevel::repeat_inverse().with_check(),
    ]));
    assert!(invalid(vec![
        SearchLevel::extend(&MoveSet::Custom(Vec::new())).with_check()
    ]));
    assert!(invalid(vec![
        SearchLevel::extend(&MoveSet::Custom(vec![Move::Open])).with_check()
    ]));

    let result: Result<DeepSearch, _> =
        DeepSearch::new(alg("R"), &[], single_levels(1), true, false);
    assert!(matches!(result, Err(CubeSearchError::Config(_))));
}

#[test]
fn test_threaded_matches_sequential() {
    let groups = [PieceGroup::F2l(Face::D)];
    let mut sequential = search("R U R' U'", &groups, single_levels(4));
    let mut threaded = search("R U R' U'", &groups, single_levels(4));
    assert!(sequential.is_fused());

    sequential.run(ThreadCount::Sequential);
    threaded.run(ThreadCount::Specific(4));

    assert!(!sequential.solutions().is_empty());
    assert_eq!(sequential.solutions(), threaded.solutions());
    assert_eq!(sequential.stats().nodes, threaded.stats().nodes);
    assert_eq!(
        sequential.stats().roots_completed,
        sequential.root_count() as u64
    );
}

#[test]
fn test_rerun_replaces_solutions() {
    let mut search = search("R", &[PieceGroup::All], single_levels(1));
    search.run(ThreadCount::Sequential);
    search.run(ThreadCount::Auto);
    assert_eq!(search.solutions(), algs(&["R'"]).as_slice());
}

#[test]
fn test_evaluate_solutions() {
    let mut search = search("R U", &[PieceGroup::All], single_levels(2));
    assert!(search.evaluate(Face::D, Policy::Best).is_none());

    search.run(ThreadCount::Sequential);
    let (best, score) = search.evaluate(Face::D, Policy::Best).unwrap();
    assert_eq!(best, alg("U' R'"));
    assert_eq!(score, 48 + 400);
}

#[test]
fn test_accessors() {
    let search = search("R U", &[PieceGroup::All], single_levels(2));
    assert_eq!(search.depth(), 2);
    assert_eq!(search.scramble(), &alg("R U"));
    assert_eq!(search.groups(), &[PieceGroup::All]);
    assert!(search.core_count() >= 1);
    assert_eq!(search.base_state(), &Cube::from_algorithm(&alg("R U")));
}
