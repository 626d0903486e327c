//! Damage relations for every type in the API's universe

use std::collections::BTreeSet;

use dexnote_protocol::{DamageRelations, NamedResource, TypeRecord};
use indexmap::IndexMap;

use crate::error::EngineError;

/// Attacking types a defending type takes modified damage from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeRelations {
    pub double_from: BTreeSet<String>,
    pub half_from: BTreeSet<String>,
    pub zero_from: BTreeSet<String>,
}

impl TypeRelations {
    /// Create from the protocol's damage relations
    pub fn from_protocol(relations: &DamageRelations) -> Self {
        Self {
            double_from: tag_set(&relations.double_damage_from),
            half_from: tag_set(&relations.half_damage_from),
            zero_from: tag_set(&relations.no_damage_from),
        }
    }

    /// Attacking types listed in more than one category
    ///
    /// The API is not supposed to produce these. When it does, the
    /// application order (double, half, zero) decides the outcome.
    pub fn overlaps(&self) -> Vec<&str> {
        let mut all = self
            .double_from
            .iter()
            .chain(&self.half_from)
            .chain(&self.zero_from)
            .map(String::as_str)
            .collect::<Vec<_>>();
        all.sort_unstable();

        let mut overlaps: Vec<&str> = all
            .windows(2)
            .filter(|pair| pair[0] == pair[1])
            .map(|pair| pair[0])
            .collect();
        overlaps.dedup();
        overlaps
    }

    pub fn is_empty(&self) -> bool {
        self.double_from.is_empty() && self.half_from.is_empty() && self.zero_from.is_empty()
    }
}

fn tag_set(resources: &[NamedResource]) -> BTreeSet<String> {
    resources.iter().map(|r| r.name.to_lowercase()).collect()
}

/// Lookup from lowercase type tag to its [`TypeRelations`]
///
/// Keys keep the order the API listed them in, which is also the key order
/// of every [`EffectivenessProfile`](super::EffectivenessProfile) computed
/// from this chart. A chart is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeChart {
    relations: IndexMap<String, TypeRelations>,
}

impl TypeChart {
    /// Create from an already reshaped mapping
    pub fn new(relations: IndexMap<String, TypeRelations>) -> Result<Self, EngineError> {
        if relations.is_empty() {
            return Err(EngineError::MissingTypeUniverse);
        }

        for (name, rel) in &relations {
            let overlaps = rel.overlaps();
            if !overlaps.is_empty() {
                tracing::debug!(
                    defending = %name,
                    attacking = ?overlaps,
                    "type listed in several damage categories; zero absorbs"
                );
            }
        }

        Ok(Self { relations })
    }

    /// Build the chart from one record per type
    ///
    /// Every record becomes a key, including types with no relations at all
    /// (e.g. "unknown", "shadow").
    pub fn from_records<'a>(
        records: impl IntoIterator<Item = &'a TypeRecord>,
    ) -> Result<Self, EngineError> {
        let relations = records
            .into_iter()
            .map(|record| {
                (
                    record.name.to_lowercase(),
                    TypeRelations::from_protocol(&record.damage_relations),
                )
            })
            .collect();

        Self::new(relations)
    }

    /// Relations for a type (case-insensitive)
    pub fn relations(&self, tag: &str) -> Option<&TypeRelations> {
        self.relations.get(tag.to_lowercase().as_str())
    }

    /// Whether a tag belongs to the universe (case-insensitive)
    pub fn contains(&self, tag: &str) -> bool {
        self.relations(tag).is_some()
    }

    /// All known types in API order
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.relations.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }
}
