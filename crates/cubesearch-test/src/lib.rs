//! Shared test fixtures for CubeSearch crates.
//!
//! - [`scramble`] - Known scrambles and seeded random algorithms
//! - [`state`] - Cube states and group predicates
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! cubesearch-test = { workspace = true }
//! ```

pub mod scramble;
pub mod state;

pub use scramble::{alg, random_algorithm, KnownScramble, KNOWN_SCRAMBLES};
pub use state::{cube_after, solves, satisfies_any};
