//! `/pokemon-species/{name}` records

use super::NamedResource;
use crate::ParseError;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpeciesRecord {
    pub id: u32,
    pub name: String,

    pub generation: Option<NamedResource>,
    pub color: Option<NamedResource>,
    pub habitat: Option<NamedResource>,

    #[serde(default)]
    pub genera: Vec<Genus>,

    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,

    /// Only carries a `url`; the chain itself is a separate request
    pub evolution_chain: Option<ApiResource>,

    #[serde(default)]
    pub varieties: Vec<SpeciesVariety>,
}

impl SpeciesRecord {
    /// The variety flagged as default, falling back to the first listed
    pub fn default_variety(&self) -> Result<&SpeciesVariety, ParseError> {
        self.varieties
            .iter()
            .find(|v| v.is_default)
            .or_else(|| self.varieties.first())
            .ok_or_else(|| ParseError::MissingField(format!("{} varieties", self.name)))
    }

    /// Genus ("Mouse Pokémon") in the given language
    pub fn genus(&self, language: &str) -> Option<&str> {
        self.genera
            .iter()
            .find(|g| g.language.name == language)
            .map(|g| g.genus.as_str())
    }

    pub fn evolution_chain_url(&self) -> Option<&str> {
        self.evolution_chain.as_ref().map(|c| c.url.as_str())
    }
}

/// An unnamed `{ "url" }` reference
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiResource {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Genus {
    pub genus: String,
    pub language: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedResource,
    pub version: Option<NamedResource>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpeciesVariety {
    #[serde(default)]
    pub is_default: bool,
    pub pokemon: NamedResource,
}
