//! Faces, cubie positions and piece identifiers.

use std::fmt;
use std::str::FromStr;

use crate::moves::Layer;

/// One of the six outer faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    U,
    D,
    F,
    B,
    R,
    L,
}

impl Face {
    pub const ALL: [Face; 6] = [Face::U, Face::D, Face::F, Face::B, Face::R, Face::L];

    pub const fn opposite(self) -> Face {
        match self {
            Face::U => Face::D,
            Face::D => Face::U,
            Face::F => Face::B,
            Face::B => Face::F,
            Face::R => Face::L,
            Face::L => Face::R,
        }
    }

    /// The face owning an outer layer.
    pub const fn from_layer(layer: Layer) -> Option<Face> {
        match layer {
            Layer::U => Some(Face::U),
            Layer::D => Some(Face::D),
            Layer::F => Some(Face::F),
            Layer::B => Some(Face::B),
            Layer::R => Some(Face::R),
            Layer::L => Some(Face::L),
            _ => None,
        }
    }

    fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::D => 'D',
            Face::F => 'F',
            Face::B => 'B',
            Face::R => 'R',
            Face::L => 'L',
        }
    }

    fn from_letter(c: char) -> Option<Face> {
        Face::ALL
            .into_iter()
            .find(|f| f.letter() == c.to_ascii_uppercase())
    }
}

impl From<Face> for Layer {
    fn from(face: Face) -> Self {
        match face {
            Face::U => Layer::U,
            Face::D => Layer::D,
            Face::F => Layer::F,
            Face::B => Layer::B,
            Face::R => Layer::R,
            Face::L => Layer::L,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Face {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Face::from_letter(c).ok_or_else(|| s.to_string()),
            _ => Err(s.to_string()),
        }
    }
}

/// Edge cubies, also used as edge positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Edge {
    UR,
    UF,
    UL,
    UB,
    DR,
    DF,
    DL,
    DB,
    FR,
    FL,
    BL,
    BR,
}

impl Edge {
    pub const ALL: [Edge; 12] = [
        Edge::UR,
        Edge::UF,
        Edge::UL,
        Edge::UB,
        Edge::DR,
        Edge::DF,
        Edge::DL,
        Edge::DB,
        Edge::FR,
        Edge::FL,
        Edge::BL,
        Edge::BR,
    ];

    pub const fn faces(self) -> [Face; 2] {
        match self {
            Edge::UR => [Face::U, Face::R],
            Edge::UF => [Face::U, Face::F],
            Edge::UL => [Face::U, Face::L],
            Edge::UB => [Face::U, Face::B],
            Edge::DR => [Face::D, Face::R],
            Edge::DF => [Face::D, Face::F],
            Edge::DL => [Face::D, Face::L],
            Edge::DB => [Face::D, Face::B],
            Edge::FR => [Face::F, Face::R],
            Edge::FL => [Face::F, Face::L],
            Edge::BL => [Face::B, Face::L],
            Edge::BR => [Face::B, Face::R],
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Edge> {
        Edge::ALL.get(index).copied()
    }

    pub fn touches(self, face: Face) -> bool {
        self.faces().contains(&face)
    }

    /// The edge between two faces, in either order.
    pub fn between(a: Face, b: Face) -> Option<Edge> {
        Edge::ALL
            .into_iter()
            .find(|e| e.touches(a) && e.touches(b) && a != b)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b] = self.faces();
        write!(f, "{}{}", a, b)
    }
}

impl FromStr for Edge {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let faces: Option<Vec<Face>> = s.trim().chars().map(Face::from_letter).collect();
        match faces.as_deref() {
            Some(&[a, b]) => Edge::between(a, b).ok_or_else(|| s.to_string()),
            _ => Err(s.to_string()),
        }
    }
}

/// Corner cubies, also used as corner positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Corner {
    URF,
    UFL,
    ULB,
    UBR,
    DFR,
    DLF,
    DBL,
    DRB,
}

impl Corner {
    pub const ALL: [Corner; 8] = [
        Corner::URF,
        Corner::UFL,
        Corner::ULB,
        Corner::UBR,
        Corner::DFR,
        Corner::DLF,
        Corner::DBL,
        Corner::DRB,
    ];

    pub const fn faces(self) -> [Face; 3] {
        match self {
            Corner::URF => [Face::U, Face::R, Face::F],
            Corner::UFL => [Face::U, Face::F, Face::L],
            Corner::ULB => [Face::U, Face::L, Face::B],
            Corner::UBR => [Face::U, Face::B, Face::R],
            Corner::DFR => [Face::D, Face::F, Face::R],
            Corner::DLF => [Face::D, Face::L, Face::F],
            Corner::DBL => [Face::D, Face::B, Face::L],
            Corner::DRB => [Face::D, Face::R, Face::B],
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Corner> {
        Corner::ALL.get(index).copied()
    }

    pub fn touches(self, face: Face) -> bool {
        self.faces().contains(&face)
    }

    /// The corner between three mutually adjacent faces, in any order.
    pub fn between(a: Face, b: Face, c: Face) -> Option<Corner> {
        if a == b || b == c || a == c {
            return None;
        }
        Corner::ALL
            .into_iter()
            .find(|k| k.touches(a) && k.touches(b) && k.touches(c))
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.faces();
        write!(f, "{}{}{}", a, b, c)
    }
}

impl FromStr for Corner {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let faces: Option<Vec<Face>> = s.trim().chars().map(Face::from_letter).collect();
        match faces.as_deref() {
            Some(&[a, b, c]) => Corner::between(a, b, c).ok_or_else(|| s.to_string()),
            _ => Err(s.to_string()),
        }
    }
}

/// A single cubie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    Edge(Edge),
    Corner(Corner),
}

impl Piece {
    pub fn is_edge(self) -> bool {
        matches!(self, Piece::Edge(_))
    }

    pub fn is_corner(self) -> bool {
        matches!(self, Piece::Corner(_))
    }

    /// Faces of the piece's home position.
    pub fn faces(self) -> Vec<Face> {
        match self {
            Piece::Edge(e) => e.faces().to_vec(),
            Piece::Corner(c) => c.faces().to_vec(),
        }
    }
}

impl From<Edge> for Piece {
    fn from(e: Edge) -> Self {
        Piece::Edge(e)
    }
}

impl From<Corner> for Piece {
    fn from(c: Corner) -> Self {
        Piece::Corner(c)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Piece::Edge(e) => write!(f, "{}", e),
            Piece::Corner(c) => write!(f, "{}", c),
        }
    }
}
