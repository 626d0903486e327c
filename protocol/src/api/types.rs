//! `/type/{name}` records

use super::NamedResource;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypeRecord {
    pub name: String,
    pub damage_relations: DamageRelations,
}

/// How much damage this type takes from attacking types
///
/// The API also lists the `*_to` directions; only the defensive side is
/// needed to build a chart.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DamageRelations {
    #[serde(default)]
    pub double_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub half_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub no_damage_from: Vec<NamedResource>,
}
