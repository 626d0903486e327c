//! Variant form classification

use std::fmt;

use serde::Serialize;

use crate::display::title_case;

/// Canonical form categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Default,
    Mega,
    Gmax,
    Alolan,
    Galarian,
    Hisuian,
    Variant,
}

impl FormKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormKind::Default => "default",
            FormKind::Mega => "mega",
            FormKind::Gmax => "gmax",
            FormKind::Alolan => "alolan",
            FormKind::Galarian => "galarian",
            FormKind::Hisuian => "hisuian",
            FormKind::Variant => "variant",
        }
    }

    /// Fixed label for the category, if it has one
    fn label(&self) -> Option<&'static str> {
        match self {
            FormKind::Default => Some(""),
            FormKind::Mega => Some("Mega"),
            FormKind::Gmax => Some("Gigantamax"),
            FormKind::Alolan => Some("Alolan"),
            FormKind::Galarian => Some("Galarian"),
            FormKind::Hisuian => Some("Hisuian"),
            FormKind::Variant => None,
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Category and display label of one variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormClassification {
    pub kind: FormKind,
    /// Empty for the default form
    pub label: String,
}

impl FormClassification {
    pub fn is_default(&self) -> bool {
        self.kind == FormKind::Default
    }

    /// Note title: `"Pikachu"` for the default form, `"Pikachu (Gigantamax)"` otherwise
    pub fn display_name(&self, base_name: &str, variant_raw: &str) -> String {
        if self.is_default() {
            return base_name.to_string();
        }

        let qualifier = if self.label.is_empty() {
            variant_raw.trim()
        } else {
            self.label.as_str()
        };

        if qualifier.is_empty() {
            base_name.to_string()
        } else {
            format!("{} ({})", base_name, qualifier)
        }
    }
}

enum Predicate {
    EqualsDefault,
    ContainsAny(&'static [&'static str]),
}

/// Evaluated top to bottom; the first match wins.
const FORM_RULES: &[(Predicate, FormKind)] = &[
    (Predicate::EqualsDefault, FormKind::Default),
    (Predicate::ContainsAny(&["mega"]), FormKind::Mega),
    (Predicate::ContainsAny(&["gmax", "gigantamax"]), FormKind::Gmax),
    (Predicate::ContainsAny(&["alola"]), FormKind::Alolan),
    (Predicate::ContainsAny(&["galar"]), FormKind::Galarian),
    (Predicate::ContainsAny(&["hisui"]), FormKind::Hisuian),
];

/// Classify a variant against its species' default variant (case-insensitive)
pub fn classify_form(variant_raw: &str, default_raw: &str) -> FormClassification {
    let name = variant_raw.to_lowercase();
    let default = default_raw.to_lowercase();

    let matched = FORM_RULES.iter().find(|(predicate, _)| match predicate {
        Predicate::EqualsDefault => name == default,
        Predicate::ContainsAny(needles) => needles.iter().any(|n| name.contains(*n)),
    });

    match matched {
        Some((_, kind)) => FormClassification {
            kind: *kind,
            label: kind.label().unwrap_or_default().to_string(),
        },
        None => FormClassification {
            kind: FormKind::Variant,
            label: title_case(variant_raw).trim().to_string(),
        },
    }
}
