//! Named piece groups and their solve masks.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

use super::pieces::{Corner, Edge, Face, Piece};
use crate::error::CubeSearchError;

/// Pieces that must be home and oriented: bit `i` of `edges` stands for
/// [`Edge`] ordinal `i`, bit `i` of `corners` for [`Corner`] ordinal `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SolveMask {
    pub edges: u16,
    pub corners: u8,
}

impl SolveMask {
    pub const EMPTY: SolveMask = SolveMask {
        edges: 0,
        corners: 0,
    };

    pub const ALL: SolveMask = SolveMask {
        edges: 0x0FFF,
        corners: 0xFF,
    };

    pub fn from_pieces(pieces: &[Piece]) -> SolveMask {
        pieces
            .iter()
            .fold(SolveMask::EMPTY, |mask, &piece| mask.with(piece))
    }

    pub fn with(self, piece: Piece) -> SolveMask {
        match piece {
            Piece::Edge(e) => SolveMask {
                edges: self.edges | 1 << e.index(),
                ..self
            },
            Piece::Corner(c) => SolveMask {
                corners: self.corners | 1 << c.index(),
                ..self
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.edges == 0 && self.corners == 0
    }

    /// Returns true if every piece required by `other` is also in `self`.
    pub fn contains(&self, other: &SolveMask) -> bool {
        self.edges & other.edges == other.edges && self.corners & other.corners == other.corners
    }

    pub fn piece_count(&self) -> u32 {
        self.edges.count_ones() + self.corners.count_ones()
    }
}

impl BitOr for SolveMask {
    type Output = SolveMask;

    fn bitor(self, rhs: SolveMask) -> SolveMask {
        SolveMask {
            edges: self.edges | rhs.edges,
            corners: self.corners | rhs.corners,
        }
    }
}

impl BitOrAssign for SolveMask {
    fn bitor_assign(&mut self, rhs: SolveMask) {
        *self = *self | rhs;
    }
}

/// A named subset of pieces checked as one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceGroup {
    /// The four edges of a face.
    Cross(Face),
    /// All eight pieces of a face layer.
    Layer(Face),
    /// The cross of a face plus its four corner/middle-edge pairs.
    F2l(Face),
    /// One corner with the edge it pairs with.
    Pair(Corner, Edge),
    Piece(Piece),
    All,
}

impl PieceGroup {
    /// Expands the group into its individual pieces.
    pub fn pieces(&self) -> Vec<Piece> {
        match *self {
            PieceGroup::Cross(face) => edges_on(face).map(Piece::Edge).collect(),
            PieceGroup::Layer(face) => edges_on(face)
                .map(Piece::Edge)
                .chain(corners_on(face).map(Piece::Corner))
                .collect(),
            PieceGroup::F2l(face) => {
                let mut pieces: Vec<Piece> = edges_on(face).map(Piece::Edge).collect();
                for pair in PieceGroup::f2l_pairs(face) {
                    pieces.extend(pair.pieces());
                }
                pieces
            }
            PieceGroup::Pair(corner, edge) => vec![Piece::Corner(corner), Piece::Edge(edge)],
            PieceGroup::Piece(piece) => vec![piece],
            PieceGroup::All => Edge::ALL
                .into_iter()
                .map(Piece::Edge)
                .chain(Corner::ALL.into_iter().map(Piece::Corner))
                .collect(),
        }
    }

    pub fn mask(&self) -> SolveMask {
        SolveMask::from_pieces(&self.pieces())
    }

    /// The four corner/middle-edge pairs of the first two layers built on
    /// `face`, in corner ordinal order.
    ///
    /// # Examples
    ///
    /// ```
    /// use cubesearch_core::{Corner, Edge, Face, PieceGroup};
    ///
    /// let pairs = PieceGroup::f2l_pairs(Face::D);
    /// assert_eq!(pairs[0], PieceGroup::Pair(Corner::DFR, Edge::FR));
    /// ```
    pub fn f2l_pairs(face: Face) -> [PieceGroup; 4] {
        let mut pairs = [PieceGroup::All; 4];
        for (slot, corner) in pairs.iter_mut().zip(corners_on(face)) {
            let [a, b] = side_faces(corner, face);
            // Corner and its middle edge always exist for two side faces.
            if let Some(edge) = Edge::between(a, b) {
                *slot = PieceGroup::Pair(corner, edge);
            }
        }
        pairs
    }
}

fn edges_on(face: Face) -> impl Iterator<Item = Edge> {
    Edge::ALL.into_iter().filter(move |e| e.touches(face))
}

fn corners_on(face: Face) -> impl Iterator<Item = Corner> {
    Corner::ALL.into_iter().filter(move |c| c.touches(face))
}

fn side_faces(corner: Corner, face: Face) -> [Face; 2] {
    let mut sides = [face; 2];
    let mut n = 0;
    for f in corner.faces() {
        if f != face && n < 2 {
            sides[n] = f;
            n += 1;
        }
    }
    sides
}

fn face_name(face: Face) -> char {
    face.to_string()
        .chars()
        .next()
        .map_or('u', |c| c.to_ascii_lowercase())
}

impl fmt::Display for PieceGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceGroup::Cross(face) => write!(f, "cross_{}", face_name(*face)),
            PieceGroup::Layer(face) => write!(f, "layer_{}", face_name(*face)),
            PieceGroup::F2l(face) => write!(f, "f2l_{}", face_name(*face)),
            PieceGroup::Pair(corner, edge) => write!(
                f,
                "pair_{}_{}",
                corner.to_string().to_lowercase(),
                edge.to_string().to_lowercase()
            ),
            PieceGroup::Piece(Piece::Edge(edge)) => {
                write!(f, "edge_{}", edge.to_string().to_lowercase())
            }
            PieceGroup::Piece(Piece::Corner(corner)) => {
                write!(f, "corner_{}", corner.to_string().to_lowercase())
            }
            PieceGroup::All => write!(f, "all"),
        }
    }
}

impl FromStr for PieceGroup {
    type Err = CubeSearchError;

    /// Parses names such as `cross_u`, `layer_d`, `f2l_d`, `pair_dfr_fr`,
    /// `edge_uf`, `corner_urf` and `all`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || CubeSearchError::UnknownPieceGroup(s.to_string());
        let name = s.trim().to_ascii_lowercase();
        let parts: Vec<&str> = name.split('_').collect();
        let group = match parts.as_slice() {
            ["all"] => PieceGroup::All,
            ["cross", face] => PieceGroup::Cross(face.parse().map_err(|_| unknown())?),
            ["layer", face] => PieceGroup::Layer(face.parse().map_err(|_| unknown())?),
            ["f2l", face] => PieceGroup::F2l(face.parse().map_err(|_| unknown())?),
            ["edge", edge] => {
                PieceGroup::Piece(Piece::Edge(edge.parse().map_err(|_| unknown())?))
            }
            ["corner", corner] => {
                PieceGroup::Piece(Piece::Corner(corner.parse().map_err(|_| unknown())?))
            }
            ["pair", corner, edge] => {
                let corner: Corner = corner.parse().map_err(|_| unknown())?;
                let edge: Edge = edge.parse().map_err(|_| unknown())?;
                PieceGroup::Pair(corner, edge)
            }
            _ => return Err(unknown()),
        };
        Ok(group)
    }
}
