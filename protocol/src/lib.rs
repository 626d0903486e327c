//! Raw PokeAPI v2 records.
//!
//! These types mirror the JSON the API serves and nothing more. Reshaping
//! into notes happens in `dexnote-engine`.

use thiserror::Error;

pub mod api;

pub use api::{
    ApiResource, ChainLink, DamageRelations, EvolutionChainRecord, FlavorTextEntry, Genus,
    MoveLearnDetail, NamedResource, PokemonAbility, PokemonMove, PokemonRecord, PokemonStat, PokemonType,
    ResourceList, SpeciesRecord, SpeciesVariety, Sprites, TypeRecord, parse_record,
};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid record format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Empty record")]
    EmptyRecord,
}
