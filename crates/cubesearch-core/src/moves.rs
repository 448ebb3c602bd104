//! The closed move alphabet and its per-move attributes.
//!
//! Every attribute (layer, category, amount, inverse, mirror, conjugation)
//! is a pure lookup keyed by the [`Move`] discriminant. The only table that
//! is materialized is the rotation conjugation table, built once on first use.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use smallvec::{smallvec, SmallVec};

use crate::algorithm::Algorithm;
use crate::error::AlgorithmError;

/// Number of moves in the alphabet, including markers and the empty sentinel.
pub const MOVE_COUNT: usize = 65;

/// The layer a move acts on.
///
/// Wide moves own the layer of their face; slices and rotation axes have
/// their own layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    U,
    D,
    F,
    B,
    R,
    L,
    E,
    S,
    M,
    X,
    Y,
    Z,
}

impl Layer {
    /// The antipodal face layer. Slices and rotation axes have none.
    pub const fn opposite(self) -> Option<Layer> {
        match self {
            Layer::U => Some(Layer::D),
            Layer::D => Some(Layer::U),
            Layer::F => Some(Layer::B),
            Layer::B => Some(Layer::F),
            Layer::R => Some(Layer::L),
            Layer::L => Some(Layer::R),
            _ => None,
        }
    }

    /// Returns true for the six outer face layers.
    pub const fn is_face(self) -> bool {
        matches!(
            self,
            Layer::U | Layer::D | Layer::F | Layer::B | Layer::R | Layer::L
        )
    }
}

/// Classification of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// One outer layer (`R`).
    Single,
    /// An outer layer plus the adjacent slice (`r`).
    Wide,
    /// A middle slice (`M`, `E`, `S`).
    Slice,
    /// A whole-cube rotation (`x`, `y`, `z`).
    Rotation,
    /// Group open/close markers.
    Grouping,
    /// The empty sentinel.
    Empty,
}

/// Turn amount in quarter turns, clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Amount {
    Cw,
    Half,
    Ccw,
}

impl Amount {
    /// Clockwise quarter turns: 1, 2 or 3.
    pub const fn quarters(self) -> u8 {
        match self {
            Amount::Cw => 1,
            Amount::Half => 2,
            Amount::Ccw => 3,
        }
    }

    /// Reduces a quarter-turn count modulo 4. A full turn yields `None`.
    pub const fn from_quarters(quarters: u8) -> Option<Amount> {
        match quarters % 4 {
            1 => Some(Amount::Cw),
            2 => Some(Amount::Half),
            3 => Some(Amount::Ccw),
            _ => None,
        }
    }

    pub const fn inverse(self) -> Amount {
        match self {
            Amount::Cw => Amount::Ccw,
            Amount::Half => Amount::Half,
            Amount::Ccw => Amount::Cw,
        }
    }

    // Position of the amount inside a move triple (X, X', X2).
    const fn offset(self) -> usize {
        match self {
            Amount::Cw => 0,
            Amount::Ccw => 1,
            Amount::Half => 2,
        }
    }
}

/// One token of the move notation.
///
/// The discriminant order is the canonical ordinal used by the search
/// tie-breaks: six single faces, six wide faces, three slices and three
/// rotation axes (each as clockwise, counter-clockwise, half), then the
/// group markers and the empty sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Move {
    U,
    UPrime,
    U2,
    D,
    DPrime,
    D2,
    F,
    FPrime,
    F2,
    B,
    BPrime,
    B2,
    R,
    RPrime,
    R2,
    L,
    LPrime,
    L2,
    Uw,
    UwPrime,
    Uw2,
    Dw,
    DwPrime,
    Dw2,
    Fw,
    FwPrime,
    Fw2,
    Bw,
    BwPrime,
    Bw2,
    Rw,
    RwPrime,
    Rw2,
    Lw,
    LwPrime,
    Lw2,
    E,
    EPrime,
    E2,
    S,
    SPrime,
    S2,
    M,
    MPrime,
    M2,
    X,
    XPrime,
    X2,
    Y,
    YPrime,
    Y2,
    Z,
    ZPrime,
    Z2,
    Open,
    Close1,
    Close2,
    Close3,
    Close4,
    Close5,
    Close6,
    Close7,
    Close8,
    Close9,
    Empty,
}

// Layer owned by each turn slot (a slot is a move triple).
const SLOT_LAYERS: [Layer; 18] = [
    Layer::U,
    Layer::D,
    Layer::F,
    Layer::B,
    Layer::R,
    Layer::L,
    Layer::U,
    Layer::D,
    Layer::F,
    Layer::B,
    Layer::R,
    Layer::L,
    Layer::E,
    Layer::S,
    Layer::M,
    Layer::X,
    Layer::Y,
    Layer::Z,
];

const SLOT_LETTERS: [&str; 18] = [
    "U", "D", "F", "B", "R", "L", "u", "d", "f", "b", "r", "l", "E", "S", "M", "x", "y", "z",
];

const TURN_COUNT: usize = 54;
const FIRST_ROTATION: usize = 45;
const FIRST_CLOSE: usize = 55;

impl Move {
    /// Every move in ordinal order.
    pub const ALL: [Move; MOVE_COUNT] = [
        Move::U,
        Move::UPrime,
        Move::U2,
        Move::D,
        Move::DPrime,
        Move::D2,
        Move::F,
        Move::FPrime,
        Move::F2,
        Move::B,
        Move::BPrime,
        Move::B2,
        Move::R,
        Move::RPrime,
        Move::R2,
        Move::L,
        Move::LPrime,
        Move::L2,
        Move::Uw,
        Move::UwPrime,
        Move::Uw2,
        Move::Dw,
        Move::DwPrime,
        Move::Dw2,
        Move::Fw,
        Move::FwPrime,
        Move::Fw2,
        Move::Bw,
        Move::BwPrime,
        Move::Bw2,
        Move::Rw,
        Move::RwPrime,
        Move::Rw2,
        Move::Lw,
        Move::LwPrime,
        Move::Lw2,
        Move::E,
        Move::EPrime,
        Move::E2,
        Move::S,
        Move::SPrime,
        Move::S2,
        Move::M,
        Move::MPrime,
        Move::M2,
        Move::X,
        Move::XPrime,
        Move::X2,
        Move::Y,
        Move::YPrime,
        Move::Y2,
        Move::Z,
        Move::ZPrime,
        Move::Z2,
        Move::Open,
        Move::Close1,
        Move::Close2,
        Move::Close3,
        Move::Close4,
        Move::Close5,
        Move::Close6,
        Move::Close7,
        Move::Close8,
        Move::Close9,
        Move::Empty,
    ];

    /// The 18 single-layer face turns.
    pub const FACE_TURNS: [Move; 18] = [
        Move::U,
        Move::UPrime,
        Move::U2,
        Move::D,
        Move::DPrime,
        Move::D2,
        Move::F,
        Move::FPrime,
        Move::F2,
        Move::B,
        Move::BPrime,
        Move::B2,
        Move::R,
        Move::RPrime,
        Move::R2,
        Move::L,
        Move::LPrime,
        Move::L2,
    ];

    /// The 18 wide-layer turns.
    pub const WIDE_TURNS: [Move; 18] = [
        Move::Uw,
        Move::UwPrime,
        Move::Uw2,
        Move::Dw,
        Move::DwPrime,
        Move::Dw2,
        Move::Fw,
        Move::FwPrime,
        Move::Fw2,
        Move::Bw,
        Move::BwPrime,
        Move::Bw2,
        Move::Rw,
        Move::RwPrime,
        Move::Rw2,
        Move::Lw,
        Move::LwPrime,
        Move::Lw2,
    ];

    /// The nine slice turns.
    pub const SLICE_TURNS: [Move; 9] = [
        Move::E,
        Move::EPrime,
        Move::E2,
        Move::S,
        Move::SPrime,
        Move::S2,
        Move::M,
        Move::MPrime,
        Move::M2,
    ];

    /// The nine whole-cube rotations.
    pub const ROTATIONS: [Move; 9] = [
        Move::X,
        Move::XPrime,
        Move::X2,
        Move::Y,
        Move::YPrime,
        Move::Y2,
        Move::Z,
        Move::ZPrime,
        Move::Z2,
    ];

    /// Canonical ordinal of the move.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Move> {
        Move::ALL.get(index).copied()
    }

    #[inline]
    const fn slot(self) -> Option<usize> {
        let index = self as usize;
        if index < TURN_COUNT {
            Some(index / 3)
        } else {
            None
        }
    }

    /// Builds a turn from its parts. Returns `None` for combinations that
    /// do not exist (a wide `M`, a single-layer `x`, ...).
    pub fn from_parts(layer: Layer, category: Category, amount: Amount) -> Option<Move> {
        let face_slot = match layer {
            Layer::U => Some(0),
            Layer::D => Some(1),
            Layer::F => Some(2),
            Layer::B => Some(3),
            Layer::R => Some(4),
            Layer::L => Some(5),
            _ => None,
        };
        let slot = match (category, layer) {
            (Category::Single, _) => face_slot?,
            (Category::Wide, _) => face_slot? + 6,
            (Category::Slice, Layer::E) => 12,
            (Category::Slice, Layer::S) => 13,
            (Category::Slice, Layer::M) => 14,
            (Category::Rotation, Layer::X) => 15,
            (Category::Rotation, Layer::Y) => 16,
            (Category::Rotation, Layer::Z) => 17,
            _ => return None,
        };
        Move::from_index(slot * 3 + amount.offset())
    }

    /// Close marker carrying the given repetition count (1-9).
    pub fn close(repetitions: u8) -> Option<Move> {
        match repetitions {
            1..=9 => Move::from_index(FIRST_CLOSE + repetitions as usize - 1),
            _ => None,
        }
    }

    pub fn layer(self) -> Option<Layer> {
        self.slot().map(|slot| SLOT_LAYERS[slot])
    }

    pub fn category(self) -> Category {
        match self.slot() {
            Some(slot) if slot < 6 => Category::Single,
            Some(slot) if slot < 12 => Category::Wide,
            Some(slot) if slot < 15 => Category::Slice,
            Some(_) => Category::Rotation,
            None if self == Move::Empty => Category::Empty,
            None => Category::Grouping,
        }
    }

    pub fn amount(self) -> Option<Amount> {
        self.slot().map(|_| match self as usize % 3 {
            0 => Amount::Cw,
            1 => Amount::Ccw,
            _ => Amount::Half,
        })
    }

    /// Same layer and category with a different amount.
    pub fn with_amount(self, amount: Amount) -> Option<Move> {
        self.slot()
            .and_then(|slot| Move::from_index(slot * 3 + amount.offset()))
    }

    /// Repetition count of a close marker.
    pub fn repetitions(self) -> Option<u8> {
        match self {
            Move::Close1
            | Move::Close2
            | Move::Close3
            | Move::Close4
            | Move::Close5
            | Move::Close6
            | Move::Close7
            | Move::Close8
            | Move::Close9 => Some((self as usize - FIRST_CLOSE + 1) as u8),
            _ => None,
        }
    }

    /// Returns true for anything that turns part of the cube, rotations included.
    #[inline]
    pub const fn is_turn(self) -> bool {
        (self as usize) < TURN_COUNT
    }

    #[inline]
    pub fn is_rotation(self) -> bool {
        self.category() == Category::Rotation
    }

    #[inline]
    pub fn is_grouping(self) -> bool {
        self.category() == Category::Grouping
    }

    /// Returns true if the two moves turn mutually opposite face layers.
    pub fn is_opposite(self, other: Move) -> bool {
        match (self.layer().and_then(Layer::opposite), other.layer()) {
            (Some(opposite), Some(layer)) => opposite == layer,
            _ => false,
        }
    }

    /// The move that undoes this one. Markers are their own inverse.
    pub fn inverse(self) -> Move {
        match self.amount() {
            Some(amount) => self.with_amount(amount.inverse()).unwrap_or(self),
            None => self,
        }
    }

    /// Left/right mirror image of the move.
    pub fn mirror(self) -> Move {
        let (Some(layer), Some(amount)) = (self.layer(), self.amount()) else {
            return self;
        };
        let category = self.category();
        let (layer, amount) = match (category, layer) {
            (Category::Single | Category::Wide, Layer::R) => (Layer::L, amount.inverse()),
            (Category::Single | Category::Wide, Layer::L) => (Layer::R, amount.inverse()),
            (_, Layer::M) | (_, Layer::X) => (layer, amount),
            _ => (layer, amount.inverse()),
        };
        Move::from_parts(layer, category, amount).unwrap_or(self)
    }

    /// What this move becomes when performed after `rotation` and expressed
    /// in the original orientation, i.e. the single move equal to
    /// `rotation self rotation'`.
    ///
    /// Non-rotation arguments leave the move unchanged.
    pub fn through(self, rotation: Move) -> Move {
        if !rotation.is_rotation() {
            return self;
        }
        CONJUGATION[rotation.index() - FIRST_ROTATION][self.index()]
    }

    /// Merges two moves on the same layer and category by summing their
    /// quarter turns. Returns `None` when the moves cannot be merged.
    pub fn join(self, other: Move) -> Option<Join> {
        let (Some(a), Some(b)) = (self.amount(), other.amount()) else {
            return None;
        };
        if self.layer() != other.layer() || self.category() != other.category() {
            return None;
        }
        Some(match Amount::from_quarters(a.quarters() + b.quarters()) {
            Some(amount) => Join::Merge(self.with_amount(amount)?),
            None => Join::Cancel,
        })
    }

    /// Replacement using only single-layer turns and rotations.
    ///
    /// Wide turns become the opposite face plus a rotation, slices become
    /// both outer faces plus a rotation. Everything else maps to itself.
    pub fn equivalent(self) -> SmallVec<[Move; 3]> {
        let (Some(layer), Some(amount)) = (self.layer(), self.amount()) else {
            return smallvec![self];
        };
        let single = |layer: Layer, amount: Amount| {
            Move::from_parts(layer, Category::Single, amount).unwrap_or(Move::Empty)
        };
        let rotation = |face: Layer, amount: Amount| {
            let (axis, inverted) = rotation_along(face);
            let amount = if inverted { amount.inverse() } else { amount };
            Move::from_parts(axis, Category::Rotation, amount).unwrap_or(Move::Empty)
        };
        match self.category() {
            Category::Wide => {
                let opposite = layer.opposite().unwrap_or(layer);
                smallvec![single(opposite, amount), rotation(layer, amount)]
            }
            Category::Slice => match layer {
                Layer::M => smallvec![
                    single(Layer::R, amount),
                    single(Layer::L, amount.inverse()),
                    rotation(Layer::R, amount.inverse()),
                ],
                Layer::E => smallvec![
                    single(Layer::U, amount),
                    single(Layer::D, amount.inverse()),
                    rotation(Layer::U, amount.inverse()),
                ],
                _ => smallvec![
                    single(Layer::F, amount.inverse()),
                    single(Layer::B, amount),
                    rotation(Layer::F, amount),
                ],
            },
            _ => smallvec![self],
        }
    }
}

/// Result of a successful [`Move::join`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Join {
    /// The moves annihilate.
    Cancel,
    /// The moves collapse into one.
    Merge(Move),
}

// Rotation axis turning in the same sense as a face, and whether it is reversed.
fn rotation_along(face: Layer) -> (Layer, bool) {
    match face {
        Layer::R => (Layer::X, false),
        Layer::L => (Layer::X, true),
        Layer::U => (Layer::Y, false),
        Layer::D => (Layer::Y, true),
        Layer::F => (Layer::Z, false),
        _ => (Layer::Z, true),
    }
}

// Slice turning in the same sense as a face, and whether it is reversed.
fn slice_along(face: Layer) -> (Layer, bool) {
    match face {
        Layer::L => (Layer::M, false),
        Layer::R => (Layer::M, true),
        Layer::D => (Layer::E, false),
        Layer::U => (Layer::E, true),
        Layer::F => (Layer::S, false),
        _ => (Layer::S, true),
    }
}

// Face whose clockwise sense a slice or rotation axis follows.
fn direction_face(layer: Layer) -> Layer {
    match layer {
        Layer::M => Layer::L,
        Layer::E => Layer::D,
        Layer::S => Layer::F,
        Layer::X => Layer::R,
        Layer::Y => Layer::U,
        Layer::Z => Layer::F,
        face => face,
    }
}

// Face that ends up in `face`'s position after a clockwise quarter rotation.
fn quarter_map(axis: Layer, face: Layer) -> Layer {
    match (axis, face) {
        (Layer::X, Layer::U) => Layer::F,
        (Layer::X, Layer::F) => Layer::D,
        (Layer::X, Layer::D) => Layer::B,
        (Layer::X, Layer::B) => Layer::U,
        (Layer::Y, Layer::F) => Layer::R,
        (Layer::Y, Layer::R) => Layer::B,
        (Layer::Y, Layer::B) => Layer::L,
        (Layer::Y, Layer::L) => Layer::F,
        (Layer::Z, Layer::U) => Layer::L,
        (Layer::Z, Layer::L) => Layer::D,
        (Layer::Z, Layer::D) => Layer::R,
        (Layer::Z, Layer::R) => Layer::U,
        (_, face) => face,
    }
}

fn conjugate(m: Move, rotation: Move) -> Move {
    let (Some(layer), Some(amount)) = (m.layer(), m.amount()) else {
        return m;
    };
    let (Some(axis), Some(turns)) = (rotation.layer(), rotation.amount()) else {
        return m;
    };
    let map = |face: Layer| (0..turns.quarters()).fold(face, |f, _| quarter_map(axis, f));
    let category = m.category();
    let (layer, amount) = match category {
        Category::Single | Category::Wide => (map(layer), amount),
        Category::Slice | Category::Rotation => {
            let face = map(direction_face(layer));
            let (layer, inverted) = if category == Category::Slice {
                slice_along(face)
            } else {
                rotation_along(face)
            };
            (layer, if inverted { amount.inverse() } else { amount })
        }
        _ => return m,
    };
    Move::from_parts(layer, category, amount).unwrap_or(m)
}

static CONJUGATION: LazyLock<[[Move; MOVE_COUNT]; 9]> = LazyLock::new(|| {
    let mut tables = [[Move::Empty; MOVE_COUNT]; 9];
    for (table, rotation) in tables.iter_mut().zip(Move::ROTATIONS) {
        for (entry, m) in table.iter_mut().zip(Move::ALL) {
            *entry = conjugate(m, rotation);
        }
    }
    tables
});

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(slot), Some(amount)) = (self.slot(), self.amount()) {
            let suffix = match amount {
                Amount::Cw => "",
                Amount::Ccw => "'",
                Amount::Half => "2",
            };
            return write!(f, "{}{}", SLOT_LETTERS[slot], suffix);
        }
        match (self, self.repetitions()) {
            (Move::Open, _) => write!(f, "("),
            (_, Some(1)) => write!(f, ")"),
            (_, Some(n)) => write!(f, "){}", n),
            _ => Ok(()),
        }
    }
}

impl FromStr for Move {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || AlgorithmError::UnknownMove(s.to_string());
        let parsed = Algorithm::tokenize(s);
        match parsed.as_slice() {
            [m] => Ok(*m),
            _ => Err(unknown()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_ordinal_order() {
        for (i, m) in Move::ALL.iter().enumerate() {
            assert_eq!(m.index(), i);
        }
        assert_eq!(Move::ALL.len(), MOVE_COUNT);
    }

    #[test]
    fn test_attributes() {
        assert_eq!(Move::RPrime.layer(), Some(Layer::R));
        assert_eq!(Move::RPrime.category(), Category::Single);
        assert_eq!(Move::RPrime.amount(), Some(Amount::Ccw));
        assert_eq!(Move::Rw2.layer(), Some(Layer::R));
        assert_eq!(Move::Rw2.category(), Category::Wide);
        assert_eq!(Move::M.category(), Category::Slice);
        assert_eq!(Move::YPrime.category(), Category::Rotation);
        assert_eq!(Move::Open.category(), Category::Grouping);
        assert_eq!(Move::Close4.category(), Category::Grouping);
        assert_eq!(Move::Empty.category(), Category::Empty);
        assert_eq!(Move::Open.layer(), None);
    }

    #[test]
    fn test_opposite_layers() {
        assert_eq!(Layer::U.opposite(), Some(Layer::D));
        assert_eq!(Layer::L.opposite(), Some(Layer::R));
        assert_eq!(Layer::M.opposite(), None);
        assert!(Move::U.is_opposite(Move::D2));
        assert!(Move::Rw.is_opposite(Move::LPrime));
        assert!(!Move::U.is_opposite(Move::U));
        assert!(!Move::M.is_opposite(Move::R));
    }

    #[test]
    fn test_inverse() {
        assert_eq!(Move::U.inverse(), Move::UPrime);
        assert_eq!(Move::UPrime.inverse(), Move::U);
        assert_eq!(Move::F2.inverse(), Move::F2);
        assert_eq!(Move::XPrime.inverse(), Move::X);
        assert_eq!(Move::Close3.inverse(), Move::Close3);
        for m in Move::ALL {
            assert_eq!(m.inverse().inverse(), m);
        }
    }

    #[test]
    fn test_mirror() {
        assert_eq!(Move::R.mirror(), Move::LPrime);
        assert_eq!(Move::LPrime.mirror(), Move::R);
        assert_eq!(Move::U.mirror(), Move::UPrime);
        assert_eq!(Move::Rw2.mirror(), Move::Lw2);
        assert_eq!(Move::M.mirror(), Move::M);
        assert_eq!(Move::X.mirror(), Move::X);
        assert_eq!(Move::Y.mirror(), Move::YPrime);
        assert_eq!(Move::E.mirror(), Move::EPrime);
        for m in Move::ALL {
            assert_eq!(m.mirror().mirror(), m);
        }
    }

    #[test]
    fn test_close_markers() {
        assert_eq!(Move::close(1), Some(Move::Close1));
        assert_eq!(Move::close(9), Some(Move::Close9));
        assert_eq!(Move::close(0), None);
        assert_eq!(Move::close(10), None);
        assert_eq!(Move::Close7.repetitions(), Some(7));
        assert_eq!(Move::Open.repetitions(), None);
    }

    #[test]
    fn test_join() {
        assert_eq!(Move::R.join(Move::R2), Some(Join::Merge(Move::RPrime)));
        assert_eq!(Move::R2.join(Move::R), Some(Join::Merge(Move::RPrime)));
        assert_eq!(Move::U.join(Move::UPrime), Some(Join::Cancel));
        assert_eq!(Move::U2.join(Move::U2), Some(Join::Cancel));
        assert_eq!(Move::X.join(Move::X), Some(Join::Merge(Move::X2)));
        assert_eq!(Move::R.join(Move::Rw), None);
        assert_eq!(Move::R.join(Move::L), None);
        assert_eq!(Move::Open.join(Move::Open), None);
    }

    #[test]
    fn test_join_is_symmetric() {
        for a in Move::ALL {
            for b in Move::ALL {
                assert_eq!(a.join(b), b.join(a), "{} {}", a, b);
            }
        }
    }

    #[test]
    fn test_conjugation_base_maps() {
        assert_eq!(Move::U.through(Move::X), Move::F);
        assert_eq!(Move::R.through(Move::X), Move::R);
        assert_eq!(Move::F.through(Move::Y), Move::R);
        assert_eq!(Move::R.through(Move::Y), Move::B);
        assert_eq!(Move::R.through(Move::Z), Move::U);
        assert_eq!(Move::U.through(Move::X2), Move::D);
        assert_eq!(Move::F.through(Move::XPrime), Move::U);
        assert_eq!(Move::M.through(Move::Y), Move::S);
        assert_eq!(Move::X.through(Move::Y), Move::ZPrime);
        assert_eq!(Move::Rw.through(Move::Y), Move::Bw);
        assert_eq!(Move::Open.through(Move::Y), Move::Open);
        assert_eq!(Move::U.through(Move::R), Move::U);
    }

    #[test]
    fn test_conjugation_by_inverse_rotation_round_trips() {
        for rotation in Move::ROTATIONS {
            for m in Move::ALL {
                assert_eq!(m.through(rotation).through(rotation.inverse()), m);
            }
        }
    }

    #[test]
    fn test_equivalents() {
        assert_eq!(Move::Rw.equivalent().as_slice(), &[Move::L, Move::X]);
        assert_eq!(Move::Lw.equivalent().as_slice(), &[Move::R, Move::XPrime]);
        assert_eq!(
            Move::M.equivalent().as_slice(),
            &[Move::R, Move::LPrime, Move::XPrime]
        );
        assert_eq!(
            Move::E2.equivalent().as_slice(),
            &[Move::U2, Move::D2, Move::Y2]
        );
        assert_eq!(
            Move::S.equivalent().as_slice(),
            &[Move::FPrime, Move::B, Move::Z]
        );
        assert_eq!(Move::U.equivalent().as_slice(), &[Move::U]);
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(Move::UPrime.to_string(), "U'");
        assert_eq!(Move::Rw2.to_string(), "r2");
        assert_eq!(Move::X.to_string(), "x");
        assert_eq!(Move::Open.to_string(), "(");
        assert_eq!(Move::Close1.to_string(), ")");
        assert_eq!(Move::Close3.to_string(), ")3");
        for m in Move::ALL.into_iter().filter(|m| m.is_turn()) {
            assert_eq!(m.to_string().parse::<Move>(), Ok(m));
        }
        assert_eq!("Rw'".parse::<Move>(), Ok(Move::RwPrime));
        assert!("R U".parse::<Move>().is_err());
    }
}
