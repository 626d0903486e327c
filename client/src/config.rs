use std::path::PathBuf;

use dexnote_engine::MAX_EVOLUTION_DEPTH;

pub const POKEAPI_URL: &str = "https://pokeapi.co/api/v2";

/// Settings for one import run
#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// API root, without a trailing slash
    pub base_url: String,
    /// Directory the notes are written to
    pub output_dir: PathBuf,
    /// Species fetched at the same time
    pub concurrency: usize,
    /// Only import the first `n` species
    pub limit: Option<usize>,
    /// Skip species whose default note already exists
    pub skip_existing: bool,
    pub max_evolution_depth: usize,
    pub user_agent: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            base_url: POKEAPI_URL.to_string(),
            output_dir: PathBuf::from("pokemon"),
            concurrency: 8,
            limit: None,
            skip_existing: false,
            max_evolution_depth: MAX_EVOLUTION_DEPTH,
            user_agent: format!("dexnote/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ImportConfig {
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}
