//! Learnset normalization

use dexnote_protocol::PokemonMove;
use serde::Serialize;

use crate::display::title_case;
use crate::error::EngineError;

/// How a move is learned
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LearnMethod {
    LevelUp,
    Machine,
    Tutor,
    Egg,
    /// Any other method tag the API uses ("form-change", "light-ball-egg", ...)
    Other(String),
    /// The record carried no method tag
    Missing,
}

impl LearnMethod {
    /// Parse an API method tag
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("level-up") => LearnMethod::LevelUp,
            Some("machine") => LearnMethod::Machine,
            Some("tutor") => LearnMethod::Tutor,
            Some("egg") => LearnMethod::Egg,
            Some(other) => LearnMethod::Other(other.to_string()),
            None => LearnMethod::Missing,
        }
    }
}

/// One (move, method, version group, level) fact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    /// Raw API name ("thunder-shock")
    pub name: String,
    pub method: LearnMethod,
    pub version_group: String,
    pub level: u32,
}

/// Flatten a variant's raw move list, one record per version-group detail
pub fn move_records(moves: &[PokemonMove]) -> Vec<MoveRecord> {
    moves
        .iter()
        .flat_map(|m| {
            m.version_group_details.iter().map(|detail| MoveRecord {
                name: m.move_.name.clone(),
                method: LearnMethod::from_tag(
                    detail.move_learn_method.as_ref().map(|r| r.name.as_str()),
                ),
                version_group: detail
                    .version_group
                    .as_ref()
                    .map(|r| r.name.clone())
                    .unwrap_or_default(),
                level: detail.level_learned_at,
            })
        })
        .collect()
}

/// A move as it appears in a note
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveEntry {
    /// Display-cased ("Thunder Shock")
    #[serde(rename = "move")]
    pub name: String,
    pub version_group: String,
    /// Only set in the level-up bucket
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
}

/// A learnset split by learn method
///
/// All five buckets are always serialized, empty or not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MoveCatalog {
    pub level_up: Vec<MoveEntry>,
    pub machine: Vec<MoveEntry>,
    pub tutor: Vec<MoveEntry>,
    pub egg: Vec<MoveEntry>,
    pub other: Vec<MoveEntry>,
}

impl MoveCatalog {
    /// Total entries across all buckets
    pub fn len(&self) -> usize {
        self.level_up.len()
            + self.machine.len()
            + self.tutor.len()
            + self.egg.len()
            + self.other.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Sort move records into the five buckets
///
/// Level-up moves are ordered by (version group, level); the sort is stable so
/// ties keep source order. Every other bucket keeps source order. Records
/// without a method tag land in `other`.
pub fn normalize_moves(records: impl IntoIterator<Item = MoveRecord>) -> MoveCatalog {
    let mut catalog = MoveCatalog::default();

    for record in records {
        let entry = MoveEntry {
            name: title_case(&record.name),
            version_group: record.version_group,
            level: None,
        };

        match record.method {
            LearnMethod::LevelUp => catalog.level_up.push(MoveEntry {
                level: Some(record.level),
                ..entry
            }),
            LearnMethod::Machine => catalog.machine.push(entry),
            LearnMethod::Tutor => catalog.tutor.push(entry),
            LearnMethod::Egg => catalog.egg.push(entry),
            LearnMethod::Other(_) => catalog.other.push(entry),
            LearnMethod::Missing => {
                tracing::debug!(
                    error = %EngineError::MalformedMoveRecord { move_name: record.name },
                    "filing move under other"
                );
                catalog.other.push(entry);
            }
        }
    }

    catalog
        .level_up
        .sort_by(|a, b| a.version_group.cmp(&b.version_group).then(a.level.cmp(&b.level)));

    catalog
}
