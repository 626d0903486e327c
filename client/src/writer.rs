use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dexnote_engine::query::{immunities, resistances, weaknesses};
use dexnote_engine::{NormalizedRecord, title_case};

/// Destination for assembled records
pub trait RecordSink {
    fn write(&mut self, record: &NormalizedRecord) -> Result<()>;

    /// Whether a note for `(id, name)` has already been persisted
    fn contains(&self, id: u32, name: &str) -> bool;
}

/// Writes each record as `<dir>/NNNN - Name.md` with YAML frontmatter
pub struct MarkdownWriter {
    dir: PathBuf,
}

impl MarkdownWriter {
    /// Create the writer, creating `dir` if needed
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn path_for(&self, id: u32, name: &str) -> PathBuf {
        self.dir.join(note_file_name(id, name))
    }
}

impl RecordSink for MarkdownWriter {
    fn write(&mut self, record: &NormalizedRecord) -> Result<()> {
        let path = self.path_for(record.id, &record.name);
        let note = render_note(record)?;

        fs::write(&path, note).with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), "note written");
        Ok(())
    }

    fn contains(&self, id: u32, name: &str) -> bool {
        self.path_for(id, name).exists()
    }
}

/// `"0025 - Pikachu (Gigantamax).md"`; path separators become `-`
pub fn note_file_name(id: u32, name: &str) -> String {
    format!("{:04} - {}.md", id, name).replace(['/', '\\'], "-")
}

/// Frontmatter plus a short Markdown body
pub fn render_note(record: &NormalizedRecord) -> Result<String> {
    let frontmatter = serde_yaml::to_string(record)
        .with_context(|| format!("Failed to serialize {}", record.name))?;

    Ok(format!("---\n{}---\n\n{}", frontmatter, note_body(record)))
}

fn note_body(record: &NormalizedRecord) -> String {
    let mut body = format!("# {}\n\n", record.name);
    body.push_str(&format!("**Types:** {}\n\n", record.types.join(", ")));
    body.push_str(&format!("**Abilities:** {}\n\n", record.abilities.join(", ")));

    let profile = &record.type_effectiveness;
    let matchups = [
        ("Weak to", weaknesses(profile)),
        ("Resists", resistances(profile)),
        ("Immune to", immunities(profile)),
    ];
    for (heading, types) in matchups {
        if types.is_empty() {
            continue;
        }
        let names: Vec<String> = types.into_iter().map(title_case).collect();
        body.push_str(&format!("**{}:** {}\n\n", heading, names.join(", ")));
    }

    body
}
