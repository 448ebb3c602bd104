//! Search levels and the move sets they draw candidates from.

use std::fmt;
use std::str::FromStr;

use cubesearch_core::{CubeSearchError, Move};

/// Named candidate move sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveSet {
    /// The 18 single-layer face turns.
    Single,
    /// `U`, `R` and `F` turns.
    Urf,
    /// `U` and `R` turns.
    Ur,
    /// `U` and `D` turns plus half turns of the side faces.
    UdPreserving,
    /// `R`, `U` and `M` turns.
    Rum,
    /// The 18 wide turns.
    Wide,
    /// The 9 slice turns.
    Slices,
    /// The 9 whole-cube rotations.
    Rotations,
    /// An explicit move list.
    Custom(Vec<Move>),
}

impl MoveSet {
    /// Materializes the set in canonical ordinal order (custom sets keep
    /// their given order).
    pub fn moves(&self) -> Vec<Move> {
        let faces = |layers: &[Move]| -> Vec<Move> {
            Move::FACE_TURNS
                .into_iter()
                .filter(|m| layers.iter().any(|l| l.layer() == m.layer()))
                .collect()
        };
        match self {
            MoveSet::Single => Move::FACE_TURNS.to_vec(),
            MoveSet::Urf => faces(&[Move::U, Move::F, Move::R]),
            MoveSet::Ur => faces(&[Move::U, Move::R]),
            MoveSet::UdPreserving => {
                let mut moves = faces(&[Move::U, Move::D]);
                moves.extend([Move::F2, Move::B2, Move::R2, Move::L2]);
                moves
            }
            MoveSet::Rum => {
                let mut moves = faces(&[Move::U, Move::R]);
                moves.extend([Move::M, Move::MPrime, Move::M2]);
                moves
            }
            MoveSet::Wide => Move::WIDE_TURNS.to_vec(),
            MoveSet::Slices => Move::SLICE_TURNS.to_vec(),
            MoveSet::Rotations => Move::ROTATIONS.to_vec(),
            MoveSet::Custom(moves) => moves.clone(),
        }
    }

    /// Parses each entry of a move list.
    pub fn from_list<S: AsRef<str>>(list: &[S]) -> Result<MoveSet, CubeSearchError> {
        let moves = list
            .iter()
            .map(|s| s.as_ref().parse::<Move>())
            .collect::<Result<Vec<Move>, _>>()?;
        if moves.iter().any(|m| !m.is_turn()) {
            return Err(CubeSearchError::UnknownMoveSet(format!(
                "{:?}",
                list.iter().map(AsRef::as_ref).collect::<Vec<&str>>()
            )));
        }
        Ok(MoveSet::Custom(moves))
    }
}

impl FromStr for MoveSet {
    type Err = CubeSearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(MoveSet::Single),
            "urf" => Ok(MoveSet::Urf),
            "ur" => Ok(MoveSet::Ur),
            "ud_preserving" => Ok(MoveSet::UdPreserving),
            "rum" => Ok(MoveSet::Rum),
            "wide" => Ok(MoveSet::Wide),
            "slices" => Ok(MoveSet::Slices),
            "rotations" => Ok(MoveSet::Rotations),
            _ => Err(CubeSearchError::UnknownMoveSet(s.to_string())),
        }
    }
}

impl fmt::Display for MoveSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveSet::Single => write!(f, "single"),
            MoveSet::Urf => write!(f, "urf"),
            MoveSet::Ur => write!(f, "ur"),
            MoveSet::UdPreserving => write!(f, "ud_preserving"),
            MoveSet::Rum => write!(f, "rum"),
            MoveSet::Wide => write!(f, "wide"),
            MoveSet::Slices => write!(f, "slices"),
            MoveSet::Rotations => write!(f, "rotations"),
            MoveSet::Custom(moves) => {
                let names: Vec<String> = moves.iter().map(Move::to_string).collect();
                write!(f, "[{}]", names.join(" "))
            }
        }
    }
}

/// What a level does with the branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelAction {
    /// Try every candidate of the level's move set.
    #[default]
    Extend,
    /// Append the inverse of the move added two levels back.
    RepeatInverse,
}

/// One level of the search tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchLevel {
    pub action: LevelAction,
    /// Candidates, materialized once; empty for [`LevelAction::RepeatInverse`].
    pub moves: Vec<Move>,
    /// Check the branch against the tracked groups at this level.
    pub check: bool,
}

impl SearchLevel {
    pub fn extend(set: &MoveSet) -> Self {
        Self {
            action: LevelAction::Extend,
            moves: set.moves(),
            check: false,
        }
    }

    pub fn repeat_inverse() -> Self {
        Self {
            action: LevelAction::RepeatInverse,
            moves: Vec::new(),
            check: false,
        }
    }

    pub fn with_check(mut self) -> Self {
        self.check = true;
        self
    }

    pub fn is_extend(&self) -> bool {
        self.action == LevelAction::Extend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_set_sizes() {
        assert_eq!(MoveSet::Single.moves().len(), 18);
        assert_eq!(MoveSet::Urf.moves().len(), 9);
        assert_eq!(MoveSet::Ur.moves().len(), 6);
        assert_eq!(MoveSet::UdPreserving.moves().len(), 10);
        assert_eq!(MoveSet::Rum.moves().len(), 9);
        assert_eq!(MoveSet::Wide.moves().len(), 18);
        assert_eq!(MoveSet::Slices.moves().len(), 9);
        assert_eq!(MoveSet::Rotations.moves().len(), 9);
    }

    #[test]
    fn test_sets_are_in_ordinal_order() {
        let moves = MoveSet::Urf.moves();
        assert!(moves.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(moves[0], Move::U);
    }

    #[test]
    fn test_names_round_trip() {
        for name in [
            "single",
            "urf",
            "ur",
            "ud_preserving",
            "rum",
            "wide",
            "slices",
            "rotations",
        ] {
            let set: MoveSet = name.parse().unwrap();
            assert_eq!(set.to_string(), name);
        }
        assert!(matches!(
            "everything".parse::<MoveSet>(),
            Err(CubeSearchError::UnknownMoveSet(_))
        ));
    }

    #[test]
    fn test_custom_list() {
        let set = MoveSet::from_list(&["R", "U'", "M2"]).unwrap();
        assert_eq!(set.moves(), vec![Move::R, Move::UPrime, Move::M2]);
        assert_eq!(set.to_string(), "[R U' M2]");
        assert!(MoveSet::from_list(&["R", "Q"]).is_err());
        assert!(MoveSet::from_list(&["("]).is_err());
    }

    #[test]
    fn test_level_constructors() {
        let level = SearchLevel::extend(&MoveSet::Ur).with_check();
        assert!(level.is_extend());
        assert!(level.check);
        assert_eq!(level.moves.len(), 6);
        let level = SearchLevel::repeat_inverse();
        assert_eq!(level.action, LevelAction::RepeatInverse);
        assert!(level.moves.is_empty());
    }
}
