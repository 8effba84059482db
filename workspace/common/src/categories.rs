use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A category label together with the colour it is charted in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryInfo {
    pub name: String,
    pub color: String,
}

/// Built-in categories offered when recording transactions and budgets.
const CATALOG: &[(&str, &str)] = &[
    ("Food", "#8884d8"),
    ("Rent", "#82ca9d"),
    ("Transport", "#ffc658"),
    ("Shopping", "#ff8042"),
    ("Entertainment", "#8dd1e1"),
    ("Utilities", "#d0ed57"),
    ("Health", "#a4de6c"),
    ("Education", "#d885a3"),
    ("Travel", "#83a6ed"),
    ("Other", "#b0b0b0"),
];

/// Colours handed out, by position, to categories not in the catalog.
pub const FALLBACK_PALETTE: &[&str] = &[
    "#8884d8", "#82ca9d", "#ffc658", "#FF8042", "#8dd1e1", "#d0ed57",
];

/// Returns the built-in category catalog.
pub fn catalog() -> Vec<CategoryInfo> {
    CATALOG
        .iter()
        .map(|(name, color)| CategoryInfo {
            name: (*name).to_string(),
            color: (*color).to_string(),
        })
        .collect()
}

impl CategoryInfo {
    /// Resolves a free-text category label into a named, coloured category.
    ///
    /// Catalog entries match case-insensitively and keep the label as given.
    /// Anything else is coloured from [`FALLBACK_PALETTE`] by `position`,
    /// the index of the category in whatever list is being rendered.
    pub fn resolve(name: &str, position: usize) -> Self {
        let color = CATALOG
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(name))
            .map(|(_, color)| *color)
            .unwrap_or(FALLBACK_PALETTE[position % FALLBACK_PALETTE.len()]);

        Self {
            name: name.to_string(),
            color: color.to_string(),
        }
    }
}
