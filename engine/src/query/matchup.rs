//! Type matchup summaries

use crate::types::EffectivenessProfile;

/// Attacking types that deal more than neutral damage
pub fn weaknesses(profile: &EffectivenessProfile) -> Vec<&str> {
    profile
        .iter()
        .filter(|(_, m)| *m > 1.0)
        .map(|(t, _)| t)
        .collect()
}

/// Attacking types that deal reduced but non-zero damage
pub fn resistances(profile: &EffectivenessProfile) -> Vec<&str> {
    profile
        .iter()
        .filter(|(_, m)| *m > 0.0 && *m < 1.0)
        .map(|(t, _)| t)
        .collect()
}

/// Attacking types that deal no damage
pub fn immunities(profile: &EffectivenessProfile) -> Vec<&str> {
    profile
        .iter()
        .filter(|(_, m)| *m == 0.0)
        .map(|(t, _)| t)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{TypeChart, TypeRelations};
    use indexmap::IndexMap;

    fn chart() -> TypeChart {
        let set = |names: &[&str]| names.iter().map(|n| n.to_string()).collect();
        let mut map = IndexMap::new();
        map.insert(
            "steel".to_string(),
            TypeRelations {
                double_from: set(&["fire", "ground"]),
                half_from: set(&["normal", "ice", "steel"]),
                zero_from: set(&["poison"]),
            },
        );
        map.insert(
            "water".to_string(),
            TypeRelations {
                double_from: set(&["grass"]),
                half_from: set(&["fire", "ice", "steel", "water"]),
                zero_from: set(&[]),
            },
        );
        map.insert(
            "ground".to_string(),
            TypeRelations {
                double_from: set(&["water", "grass", "ice"]),
                half_from: set(&["poison"]),
                zero_from: set(&["electric"]),
            },
        );
        for name in ["fire", "normal", "ice", "poison", "grass", "electric"] {
            map.insert(name.to_string(), TypeRelations::default());
        }
        TypeChart::new(map).unwrap()
    }

    #[test]
    fn test_weaknesses() {
        let profile = chart().effectiveness(&["steel"]);
        assert_eq!(weaknesses(&profile), vec!["ground", "fire"]);
    }

    #[test]
    fn test_weaknesses_dual_type() {
        // Water/Ground is only weak to Grass (4x)
        let profile = chart().effectiveness(&["water", "ground"]);
        assert_eq!(weaknesses(&profile), vec!["grass"]);
        assert_eq!(profile.get("grass"), Some(4.0));
    }

    #[test]
    fn test_resistances() {
        let profile = chart().effectiveness(&["steel"]);
        let resists = resistances(&profile);

        assert!(resists.contains(&"normal"));
        assert!(resists.contains(&"ice"));
        assert!(!resists.contains(&"fire"));
        // Immunities are not resistances
        assert!(!resists.contains(&"poison"));
    }

    #[test]
    fn test_immunities() {
        let profile = chart().effectiveness(&["steel", "ground"]);
        let immune = immunities(&profile);

        assert_eq!(immune, vec!["poison", "electric"]);
    }
}
