//! Per-creature damage multipliers

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use super::TypeChart;
use crate::display::title_case;
use crate::error::EngineError;

/// Multiplier per attacking type for one defending type combination
///
/// Values: 0.0 = immune, 0.25/0.5 = resisted, 1.0 = neutral, 2.0/4.0 = weak.
/// Keys are lowercase tags in chart order; serialization title-cases them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EffectivenessProfile {
    multipliers: IndexMap<String, f64>,
}

impl EffectivenessProfile {
    /// Multiplier against an attacking type (case-insensitive)
    pub fn get(&self, attacking: &str) -> Option<f64> {
        self.multipliers
            .get(attacking.to_lowercase().as_str())
            .copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.multipliers.iter().map(|(t, m)| (t.as_str(), *m))
    }

    pub fn len(&self) -> usize {
        self.multipliers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.multipliers.is_empty()
    }

    /// Copy keyed by display-cased type name ("Fire")
    pub fn titled(&self) -> IndexMap<String, f64> {
        self.multipliers
            .iter()
            .map(|(t, m)| (title_case(t), *m))
            .collect()
    }
}

impl Serialize for EffectivenessProfile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.titled().serialize(serializer)
    }
}

impl TypeChart {
    /// Damage multipliers against a creature with the given types
    ///
    /// Every attacking type starts at 1.0 and each defending type multiplies
    /// in ×2, ×0.5 or ×0. Zero absorbs, so a single immunity wins over any
    /// weakness from the other type. Repeating a defending type has no
    /// further effect. Unknown tags are skipped.
    pub fn effectiveness<S: AsRef<str>>(&self, defending: &[S]) -> EffectivenessProfile {
        let mut multipliers: IndexMap<String, f64> =
            self.types().map(|t| (t.to_string(), 1.0)).collect();
        let mut applied = BTreeSet::new();

        for tag in defending {
            let tag = tag.as_ref().to_lowercase();
            if !applied.insert(tag.clone()) {
                continue;
            }

            let Some(relations) = self.relations(&tag) else {
                tracing::debug!(error = %EngineError::UnknownTypeTag(tag), "skipping defending type");
                continue;
            };

            apply(&mut multipliers, &relations.double_from, 2.0);
            apply(&mut multipliers, &relations.half_from, 0.5);
            apply(&mut multipliers, &relations.zero_from, 0.0);
        }

        EffectivenessProfile { multipliers }
    }
}

fn apply(multipliers: &mut IndexMap<String, f64>, attackers: &BTreeSet<String>, factor: f64) {
    for attacker in attackers {
        match multipliers.get_mut(attacker) {
            Some(multiplier) => *multiplier *= factor,
            None => tracing::debug!(
                error = %EngineError::UnknownTypeTag(attacker.clone()),
                "skipping attacking type"
            ),
        }
    }
}
