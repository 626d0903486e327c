//! Display casing for API identifiers

/// Render an API identifier for humans: `"mr-mime"` → `"Mr Mime"`
///
/// Hyphens and underscores become spaces and each space-separated word is
/// capitalized, with the rest of the word lowercased.
pub fn title_case(raw: &str) -> String {
    raw.replace(['-', '_'], " ")
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
