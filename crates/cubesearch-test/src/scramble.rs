//! Scramble fixtures.

use cubesearch_core::{Algorithm, Move};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A scramble with a solution known to be reachable.
#[derive(Debug, Clone, Copy)]
pub struct KnownScramble {
    pub scramble: &'static str,
    /// Inverse of the scramble, the shortest single-turn solution.
    pub inverse: &'static str,
}

pub const KNOWN_SCRAMBLES: [KnownScramble; 4] = [
    KnownScramble {
        scramble: "R",
        inverse: "R'",
    },
    KnownScramble {
        scramble: "R U",
        inverse: "U' R'",
    },
    KnownScramble {
        scramble: "R U F",
        inverse: "F' U' R'",
    },
    KnownScramble {
        scramble: "R U R' U'",
        inverse: "U R U' R'",
    },
];

impl KnownScramble {
    pub fn scramble(&self) -> Algorithm {
        alg(self.scramble)
    }

    pub fn inverse(&self) -> Algorithm {
        alg(self.inverse)
    }
}

/// Parses notation known to be valid.
///
/// # Panics
///
/// Panics if `text` does not parse.
pub fn alg(text: &str) -> Algorithm {
    match Algorithm::parse(text) {
        Ok(alg) => alg,
        Err(e) => panic!("fixture algorithm '{}' does not parse: {}", text, e),
    }
}

/// Random face-turn algorithm of `len` merged moves, reproducible per seed.
pub fn random_algorithm(len: usize, seed: u64) -> Algorithm {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut alg = Algorithm::new();
    alg.fill_random(&mut rng, len, &Move::FACE_TURNS);
    alg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_inverses() {
        for known in KNOWN_SCRAMBLES {
            assert_eq!(known.scramble().inverse(), known.inverse());
        }
    }

    #[test]
    fn test_random_is_reproducible() {
        assert_eq!(random_algorithm(15, 3), random_algorithm(15, 3));
        assert_eq!(random_algorithm(15, 3).len(), 15);
    }
}
