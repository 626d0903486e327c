//! Normalized record assembly

use dexnote_protocol::{NamedResource, PokemonRecord, SpeciesRecord};
use serde::Serialize;

use crate::display::title_case;
use crate::forms::{FormClassification, classify_form};
use crate::moves::{MoveCatalog, move_records, normalize_moves};
use crate::types::{EffectivenessProfile, TypeChart};

const RECORD_TYPE: &str = "creatures";
const RECORD_SUB_TYPE: &str = "pokemon";
const LANGUAGE: &str = "en";

/// Everything a note knows about one variant
///
/// Field order is serialization order. Empty and absent values are skipped so
/// notes stay sparse.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedRecord {
    #[serde(rename = "type")]
    pub record_type: &'static str,
    #[serde(rename = "subType")]
    pub sub_type: &'static str,

    /// National dex number of the species
    pub id: u32,
    pub dex_id: u32,

    pub name: String,
    pub species_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_of: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_type: Option<String>,

    #[serde(rename = "coverUrl", skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "SpriteSet::is_empty")]
    pub sprites: SpriteSet,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub habitat: Option<String>,

    pub height_m: f64,
    pub weight_kg: f64,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub abilities: Vec<String>,
    pub stats: StatBlock,

    #[serde(skip_serializing_if = "MoveCatalog::is_empty")]
    pub moves: MoveCatalog,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pokedex_entries: Vec<PokedexEntry>,
    #[serde(skip_serializing_if = "EffectivenessProfile::is_empty")]
    pub type_effectiveness: EffectivenessProfile,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub evolution_chain: Vec<String>,

    #[serde(skip)]
    pub form: FormClassification,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpriteSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub official_artwork: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shiny: Option<String>,
}

impl SpriteSet {
    /// Best image for a cover: artwork, then the default sprite, then shiny
    pub fn cover(&self) -> Option<&str> {
        self.official_artwork
            .as_deref()
            .or(self.default.as_deref())
            .or(self.shiny.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.cover().is_none()
    }
}

/// Base stats
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatBlock {
    /// Sum of every base stat the API lists
    pub total: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hp: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attack: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defense: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_attack: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_defense: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<u32>,
}

impl StatBlock {
    pub fn from_protocol(variant: &PokemonRecord) -> Self {
        Self {
            total: variant.stats.iter().map(|s| s.base_stat).sum(),
            hp: variant.base_stat("hp"),
            attack: variant.base_stat("attack"),
            defense: variant.base_stat("defense"),
            special_attack: variant.base_stat("special-attack"),
            special_defense: variant.base_stat("special-defense"),
            speed: variant.base_stat("speed"),
        }
    }
}

/// One English flavor text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PokedexEntry {
    pub version: String,
    pub text: String,
}

/// Assemble the note data for one variant of a species
///
/// `lineage` is the species' flattened evolution chain, shared by all of its
/// variants. The variant's form is judged against the species' default
/// variety, or the species name when the API lists none.
pub fn assemble(
    variant: &PokemonRecord,
    species: &SpeciesRecord,
    lineage: &[String],
    chart: &TypeChart,
) -> NormalizedRecord {
    let default_raw = species
        .default_variety()
        .map(|v| v.pokemon.name.as_str())
        .unwrap_or(species.name.as_str());
    let form = classify_form(&variant.name, default_raw);

    let base_name = title_case(&species.name);
    let name = form.display_name(&base_name, &variant.name);

    let sprites = SpriteSet {
        official_artwork: variant.sprites.official_artwork().map(str::to_string),
        default: variant.sprites.front_default.clone(),
        shiny: variant.sprites.front_shiny.clone(),
    };
    let cover = sprites.cover().map(str::to_string);

    let type_tags = variant.type_names();

    NormalizedRecord {
        record_type: RECORD_TYPE,
        sub_type: RECORD_SUB_TYPE,
        id: species.id,
        dex_id: species.id,
        name,
        species_name: base_name.clone(),
        form_of: (!form.is_default()).then(|| base_name.clone()),
        form_type: Some(form.label.clone())
            .filter(|label| !form.is_default() && !label.is_empty()),
        cover_url: cover.clone(),
        image: cover,
        sprites,
        types: type_tags.iter().map(|t| title_case(t)).collect(),
        generation: display_field(species.generation.as_ref()),
        color: display_field(species.color.as_ref()),
        category: species
            .genus(LANGUAGE)
            .filter(|g| !g.is_empty())
            .map(str::to_string),
        habitat: display_field(species.habitat.as_ref()),
        height_m: f64::from(variant.height) / 10.0,
        weight_kg: f64::from(variant.weight) / 10.0,
        abilities: variant
            .abilities
            .iter()
            .map(|a| title_case(&a.ability.name))
            .collect(),
        stats: StatBlock::from_protocol(variant),
        moves: normalize_moves(move_records(&variant.moves)),
        pokedex_entries: pokedex_entries(species),
        type_effectiveness: chart.effectiveness(&type_tags),
        evolution_chain: lineage.to_vec(),
        form,
    }
}

fn display_field(resource: Option<&NamedResource>) -> Option<String> {
    resource
        .filter(|r| !r.name.is_empty())
        .map(|r| title_case(&r.name))
}

fn pokedex_entries(species: &SpeciesRecord) -> Vec<PokedexEntry> {
    species
        .flavor_text_entries
        .iter()
        .filter(|entry| entry.language.name == LANGUAGE)
        .map(|entry| PokedexEntry {
            version: entry
                .version
                .as_ref()
                .map(|v| v.name.clone())
                .unwrap_or_default(),
            text: entry.flavor_text.replace(['\n', '\u{c}'], " ").trim().to_string(),
        })
        .collect()
}
