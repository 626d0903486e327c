//! PokeAPI importer for `dexnote`.
//!
//! Fetches raw records, runs them through `dexnote-engine`, and writes one
//! Markdown note per creature variant.
//!
//! ```ignore
//! use dexnote_client::{ImportConfig, Importer, MarkdownWriter, PokeApi};
//!
//! let config = ImportConfig::default();
//! let mut writer = MarkdownWriter::new(&config.output_dir)?;
//! let importer = Importer::new(PokeApi::new(&config.user_agent)?, config);
//! let summary = importer.run(&mut writer).await?;
//! ```

mod config;
#[cfg(test)]
mod fixtures;
mod importer;
mod source;
mod writer;

pub use config::{ImportConfig, POKEAPI_URL};
pub use importer::{ImportSummary, Importer};
pub use source::{DataSource, PokeApi};
pub use writer::{MarkdownWriter, RecordSink, note_file_name, render_note};

pub use dexnote_engine::NormalizedRecord;
