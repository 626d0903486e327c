//! Import PokeAPI species into a directory of Markdown notes.
//!
//! Usage:
//!   dexnote
//!   dexnote --output-dir vault/pokemon --limit 151
//!   dexnote --skip-existing --concurrency 4

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use dexnote_client::{ImportConfig, Importer, MarkdownWriter, POKEAPI_URL, PokeApi};
use dexnote_engine::MAX_EVOLUTION_DEPTH;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dexnote", version, about = "Write one Markdown note per Pokémon variant")]
struct Cli {
    /// Directory the notes are written to
    #[arg(long, env = "DEXNOTE_OUTPUT_DIR", default_value = "pokemon")]
    output_dir: PathBuf,

    /// API root
    #[arg(long, env = "POKEAPI_BASE", default_value = POKEAPI_URL)]
    base_url: String,

    /// Species fetched at the same time
    #[arg(long, default_value_t = 8)]
    concurrency: usize,

    /// Only import the first N species
    #[arg(long)]
    limit: Option<usize>,

    /// Leave species with an existing note alone
    #[arg(long)]
    skip_existing: bool,

    #[arg(long, default_value_t = MAX_EVOLUTION_DEPTH)]
    max_evolution_depth: usize,
}

impl Cli {
    fn into_config(self) -> ImportConfig {
        ImportConfig {
            base_url: self.base_url,
            output_dir: self.output_dir,
            concurrency: self.concurrency,
            limit: self.limit,
            skip_existing: self.skip_existing,
            max_evolution_depth: self.max_evolution_depth,
            ..Default::default()
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Cli::parse().into_config();
    let mut writer = MarkdownWriter::new(&config.output_dir)?;
    let importer = Importer::new(PokeApi::new(&config.user_agent)?, config);

    let summary = importer.run(&mut writer).await?;
    tracing::info!(
        species = summary.species,
        written = summary.written,
        skipped = summary.skipped,
        failed = summary.failed,
        "done"
    );

    Ok(())
}
