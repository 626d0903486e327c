//! Canned API bodies shared by the client tests

use std::collections::HashMap;

use anyhow::{Result, anyhow};
use dexnote_engine::TypeChart;
use dexnote_protocol::{PokemonRecord, SpeciesRecord, TypeRecord};
use serde_json::{Value, json};

use crate::source::DataSource;

pub const BASE_URL: &str = "http://dex.test/api/v2";

/// Serves bodies from memory; unknown urls fail like a 404 would
pub struct FixtureSource {
    bodies: HashMap<String, String>,
}

impl FixtureSource {
    pub fn new() -> Self {
        let mut bodies = HashMap::new();
        let mut add = |path: &str, body: Value| {
            bodies.insert(format!("{}/{}", BASE_URL, path), body.to_string());
        };

        let types = type_bodies();
        add(
            "type?limit=1000",
            json!({
                "count": types.len(),
                "next": null,
                "results": types.iter().map(type_ref).collect::<Vec<_>>(),
            }),
        );
        for body in types {
            let name = body["name"].as_str().unwrap().to_string();
            add(&format!("type/{}/", name), body);
        }

        add(
            "pokemon-species?limit=20000",
            json!({
                "count": 3,
                "next": null,
                "results": [
                    {"name": "bulbasaur", "url": url("pokemon-species/1/")},
                    {"name": "pikachu", "url": url("pokemon-species/25/")},
                    {"name": "missingno", "url": url("pokemon-species/0/")}
                ]
            }),
        );

        add("pokemon-species/25/", species_body());
        add(
            "pokemon-species/1/",
            json!({
                "id": 1,
                "name": "bulbasaur",
                "generation": {"name": "generation-i", "url": ""},
                "color": {"name": "green", "url": ""},
                "habitat": {"name": "grassland", "url": ""},
                "evolution_chain": null,
                "varieties": [{"is_default": true, "pokemon": {"name": "bulbasaur", "url": url("pokemon/bulbasaur/")}}]
            }),
        );
        // Its only variety has no body: the species must fail on its own
        add(
            "pokemon-species/0/",
            json!({
                "id": 0,
                "name": "missingno",
                "varieties": [{"is_default": true, "pokemon": {"name": "missingno", "url": url("pokemon/missingno/")}}]
            }),
        );

        add("pokemon/pikachu/", variant_body("pikachu"));
        add("pokemon/pikachu-gmax/", variant_body("pikachu-gmax"));
        add(
            "pokemon/bulbasaur/",
            json!({
                "id": 1,
                "name": "bulbasaur",
                "height": 7,
                "weight": 69,
                "species": {"name": "bulbasaur", "url": url("pokemon-species/1/")},
                "types": [
                    {"slot": 1, "type": {"name": "grass", "url": ""}},
                    {"slot": 2, "type": {"name": "poison", "url": ""}}
                ]
            }),
        );

        add(
            "evolution-chain/10/",
            json!({
                "id": 10,
                "chain": {
                    "species": {"name": "pichu", "url": ""},
                    "evolves_to": [{
                        "species": {"name": "pikachu", "url": ""},
                        "evolves_to": [{"species": {"name": "raichu", "url": ""}, "evolves_to": []}]
                    }]
                }
            }),
        );

        Self { bodies }
    }

    /// Drop every type body, leaving an empty type listing
    pub fn without_types(mut self) -> Self {
        self.bodies.retain(|url, _| !url.contains("/type"));
        self.bodies.insert(
            format!("{}/type?limit=1000", BASE_URL),
            json!({"count": 0, "next": null, "results": []}).to_string(),
        );
        self
    }
}

impl DataSource for FixtureSource {
    async fn get(&self, url: &str) -> Result<String> {
        self.bodies
            .get(url)
            .cloned()
            .ok_or_else(|| anyhow!("404 Not Found: {}", url))
    }
}

fn url(path: &str) -> String {
    format!("{}/{}", BASE_URL, path)
}

fn type_ref(body: &Value) -> Value {
    let name = body["name"].as_str().unwrap_or_default();
    json!({ "name": name, "url": url(&format!("type/{}/", name)) })
}

fn type_bodies() -> Vec<Value> {
    vec![
        json!({"name": "electric", "damage_relations": {
            "double_damage_from": [{"name": "ground", "url": ""}],
            "half_damage_from": [{"name": "electric", "url": ""}, {"name": "flying", "url": ""}],
            "no_damage_from": []
        }}),
        json!({"name": "ground", "damage_relations": {
            "double_damage_from": [{"name": "water", "url": ""}],
            "half_damage_from": [],
            "no_damage_from": [{"name": "electric", "url": ""}]
        }}),
        json!({"name": "flying", "damage_relations": {}}),
        json!({"name": "water", "damage_relations": {}}),
    ]
}

fn species_body() -> Value {
    json!({
        "id": 25,
        "name": "pikachu",
        "generation": {"name": "generation-i", "url": ""},
        "color": {"name": "yellow", "url": ""},
        "habitat": {"name": "forest", "url": ""},
        "genera": [{"genus": "Mouse Pokémon", "language": {"name": "en", "url": ""}}],
        "flavor_text_entries": [
            {"flavor_text": "It keeps its tail\nraised to monitor\u{c}its surroundings.",
             "language": {"name": "en", "url": ""}, "version": {"name": "yellow", "url": ""}}
        ],
        "evolution_chain": {"url": url("evolution-chain/10/")},
        "varieties": [
            {"is_default": true, "pokemon": {"name": "pikachu", "url": url("pokemon/pikachu/")}},
            {"is_default": false, "pokemon": {"name": "pikachu-gmax", "url": url("pokemon/pikachu-gmax/")}}
        ]
    })
}

fn variant_body(name: &str) -> Value {
    let id = if name == "pikachu" { 25 } else { 10199 };
    json!({
        "id": id,
        "name": name,
        "height": 4,
        "weight": 60,
        "is_default": name == "pikachu",
        "species": {"name": "pikachu", "url": url("pokemon-species/25/")},
        "sprites": {
            "front_default": "front.png",
            "front_shiny": "shiny.png",
            "other": {"official-artwork": {"front_default": "art.png"}}
        },
        "types": [{"slot": 1, "type": {"name": "electric", "url": ""}}],
        "stats": [
            {"base_stat": 35, "stat": {"name": "hp", "url": ""}},
            {"base_stat": 90, "stat": {"name": "speed", "url": ""}}
        ],
        "abilities": [
            {"ability": {"name": "static", "url": ""}},
            {"ability": {"name": "lightning-rod", "url": ""}, "is_hidden": true}
        ],
        "moves": [{
            "move": {"name": "thunder-shock", "url": ""},
            "version_group_details": [{
                "level_learned_at": 1,
                "move_learn_method": {"name": "level-up", "url": ""},
                "version_group": {"name": "yellow", "url": ""}
            }]
        }]
    })
}

pub fn fixture_chart() -> TypeChart {
    let records: Vec<TypeRecord> = type_bodies()
        .into_iter()
        .map(|body| serde_json::from_value(body).unwrap())
        .collect();
    TypeChart::from_records(&records).unwrap()
}

pub fn fixture_species() -> SpeciesRecord {
    serde_json::from_value(species_body()).unwrap()
}

pub fn fixture_variant(name: &str) -> PokemonRecord {
    serde_json::from_value(variant_body(name)).unwrap()
}
