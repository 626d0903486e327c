mod evolution;
mod pokemon;
mod species;
mod types;

use crate::ParseError;
use anyhow::Result;
use serde::Deserialize;
use serde::de::DeserializeOwned;

pub use evolution::{ChainLink, EvolutionChainRecord};
pub use pokemon::{
    MoveLearnDetail, PokemonAbility, PokemonMove, PokemonRecord, PokemonStat, PokemonType, Sprites,
};
pub use species::{ApiResource, FlavorTextEntry, Genus, SpeciesRecord, SpeciesVariety};
pub use types::{DamageRelations, TypeRecord};

/// A `{ "name", "url" }` reference to another API resource
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl NamedResource {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Numeric id from the trailing path segment of the url
    ///
    /// `https://pokeapi.co/api/v2/pokemon-species/25/` → `Some(25)`
    pub fn id(&self) -> Option<u32> {
        self.url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .and_then(|segment| segment.parse().ok())
    }
}

/// A paginated listing such as `/pokemon-species?limit=20000`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResourceList {
    #[serde(default)]
    pub count: u32,
    pub next: Option<String>,
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

/// Parse a response body into one of the record types
///
/// `kind` names the record in error messages ("type", "pokemon", ...).
pub fn parse_record<T: DeserializeOwned>(kind: &str, body: &str) -> Result<T> {
    if body.trim().is_empty() {
        return Err(ParseError::EmptyRecord.into());
    }

    let record = serde_json::from_str(body)
        .map_err(|e| ParseError::InvalidFormat(format!("invalid {} json: {}", kind, e)))?;

    Ok(record)
}
