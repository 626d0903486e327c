//! Query helpers over effectiveness profiles
//!
//! Used to summarise a creature's defensive matchups in its note.

mod matchup;

pub use matchup::{immunities, resistances, weaknesses};
