//! Engine error kinds
//!
//! Only [`EngineError::MissingTypeUniverse`] is ever returned. The other
//! kinds describe anomalies the transforms recover from locally; they are
//! logged with their `Display` text so every anomaly reads the same way.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Type universe is empty; effectiveness cannot be computed")]
    MissingTypeUniverse,

    #[error("Move {move_name} has no learn method")]
    MalformedMoveRecord { move_name: String },

    #[error("Unknown type tag: {0}")]
    UnknownTypeTag(String),

    #[error("Evolution chain exceeds {depth} levels; possible cycle")]
    EvolutionCycleSuspected { depth: usize },
}
