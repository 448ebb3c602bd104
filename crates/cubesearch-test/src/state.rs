//! Cube state fixtures.

use cubesearch_core::{Algorithm, Cube, PieceGroup, PuzzleState};

use crate::scramble::alg;

/// State reached from solved by `text`.
pub fn cube_after(text: &str) -> Cube {
    Cube::from_algorithm(&alg(text))
}

/// Returns true if `solution` after `scramble` solves `group`.
pub fn solves(scramble: &Algorithm, solution: &Algorithm, group: &PieceGroup) -> bool {
    Cube::from_algorithm(scramble)
        .applied(solution)
        .is_solved(group)
}

/// Returns true if `solution` after `scramble` solves any of `groups`.
pub fn satisfies_any(scramble: &Algorithm, solution: &Algorithm, groups: &[PieceGroup]) -> bool {
    let state = Cube::from_algorithm(scramble).applied(solution);
    groups.iter().any(|group| state.is_solved(group))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubesearch_core::Face;

    #[test]
    fn test_solves() {
        let scramble = alg("R");
        assert!(solves(&scramble, &alg("R'"), &PieceGroup::All));
        assert!(!solves(&scramble, &alg("R"), &PieceGroup::All));
        assert!(satisfies_any(
            &scramble,
            &alg("R"),
            &[PieceGroup::All, PieceGroup::Layer(Face::L)]
        ));
        assert!(!cube_after("R").is_fully_solved());
        assert!(cube_after("R R'").is_fully_solved());
    }
}
