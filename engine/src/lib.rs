//! Species aggregation and normalization for PokeAPI data.
//!
//! This crate turns the raw records decoded by `dexnote-protocol` into one
//! self-contained [`NormalizedRecord`] per creature variant.
//!
//! # Overview
//!
//! ```text
//! dexnote-protocol (raw API records)
//!        │
//!        ▼
//! dexnote-engine (pure transforms + assembly) ← THIS CRATE
//!        │
//!        └─> dexnote-client (fetching, batching, note writing)
//! ```
//!
//! # Main Types
//!
//! - [`TypeChart`] - damage relations per type, built once per run
//! - [`EffectivenessProfile`] - multiplier per attacking type for one creature
//! - [`FormClassification`] - canonical form category and label
//! - [`MoveCatalog`] - learnset split into five buckets
//! - [`Lineage`] - flattened evolution chain
//! - [`NormalizedRecord`] - the assembled note data
//!
//! # Example Usage
//!
//! ```ignore
//! use dexnote_engine::{TypeChart, assemble, walk_lineage, EvolutionNode, MAX_EVOLUTION_DEPTH};
//!
//! let chart = TypeChart::from_records(&type_records)?;
//! let lineage = walk_lineage(&EvolutionNode::from_protocol(&chain.chain), MAX_EVOLUTION_DEPTH);
//!
//! for variant in &variants {
//!     let record = assemble(variant, &species, &lineage.names, &chart);
//!     println!("{}", record.name);
//! }
//! ```
//!
//! Every transform is a pure function of its inputs. A [`TypeChart`] is never
//! mutated after construction and can be shared across threads by reference.

pub mod display;
pub mod error;
pub mod evolution;
pub mod forms;
pub mod moves;
pub mod query;
pub mod record;
pub mod types;

pub use display::title_case;
pub use error::EngineError;
pub use evolution::{EvolutionNode, Lineage, MAX_EVOLUTION_DEPTH, walk_lineage};
pub use forms::{FormClassification, FormKind, classify_form};
pub use moves::{LearnMethod, MoveCatalog, MoveEntry, MoveRecord, move_records, normalize_moves};
pub use record::{NormalizedRecord, PokedexEntry, SpriteSet, StatBlock, assemble};
pub use types::{EffectivenessProfile, TypeChart, TypeRelations};
