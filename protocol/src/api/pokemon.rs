//! `/pokemon/{name}` records (one per variant)

use std::collections::HashMap;

use super::NamedResource;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonRecord {
    pub id: u32,
    pub name: String,

    /// Height in decimetres
    #[serde(default)]
    pub height: u32,

    /// Weight in hectograms
    #[serde(default)]
    pub weight: u32,

    #[serde(default)]
    pub is_default: bool,

    pub species: NamedResource,

    #[serde(default)]
    pub sprites: Sprites,

    #[serde(default)]
    pub types: Vec<PokemonType>,

    #[serde(default)]
    pub stats: Vec<PokemonStat>,

    #[serde(default)]
    pub abilities: Vec<PokemonAbility>,

    #[serde(default)]
    pub moves: Vec<PokemonMove>,
}

impl PokemonRecord {
    /// Type names in slot order
    pub fn type_names(&self) -> Vec<&str> {
        let mut slots: Vec<&PokemonType> = self.types.iter().collect();
        slots.sort_by_key(|t| t.slot);
        slots.into_iter().map(|t| t.kind.name.as_str()).collect()
    }

    /// Base stat by API stat name ("hp", "special-attack", ...)
    pub fn base_stat(&self, name: &str) -> Option<u32> {
        self.stats
            .iter()
            .find(|s| s.stat.name == name)
            .map(|s| s.base_stat)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,

    /// Keyed by artwork set ("official-artwork", "home", ...)
    #[serde(default)]
    pub other: HashMap<String, serde_json::Value>,
}

impl Sprites {
    pub fn official_artwork(&self) -> Option<&str> {
        self.other
            .get("official-artwork")
            .and_then(|art| art.get("front_default"))
            .and_then(|url| url.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonType {
    #[serde(default)]
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonAbility {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub slot: u8,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonMove {
    #[serde(rename = "move")]
    pub move_: NamedResource,
    #[serde(default)]
    pub version_group_details: Vec<MoveLearnDetail>,
}

/// One way a move is learned within one version group
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MoveLearnDetail {
    #[serde(default)]
    pub level_learned_at: u32,

    /// Absent on malformed records; the engine files those under "other"
    #[serde(default)]
    pub move_learn_method: Option<NamedResource>,

    #[serde(default)]
    pub version_group: Option<NamedResource>,
}
