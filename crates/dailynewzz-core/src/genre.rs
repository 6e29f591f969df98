//! The fixed genre catalog.
//!
//! The order of [`CATALOG`] defines the 1-based numbers shown in the
//! selection prompt, so it must not change between prompt and parse.

use std::fmt;

/// A news category the user can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genre {
    Technology,
    Sports,
    Entertainment,
    Business,
    Health,
    Science,
    General,
}

/// Every genre, in display order.
pub const CATALOG: [Genre; 7] = [
    Genre::Technology,
    Genre::Sports,
    Genre::Entertainment,
    Genre::Business,
    Genre::Health,
    Genre::Science,
    Genre::General,
];

impl Genre {
    /// Canonical display name, e.g. `"Technology"`.
    pub fn name(self) -> &'static str {
        match self {
            Genre::Technology => "Technology",
            Genre::Sports => "Sports",
            Genre::Entertainment => "Entertainment",
            Genre::Business => "Business",
            Genre::Health => "Health",
            Genre::Science => "Science",
            Genre::General => "General",
        }
    }

    /// Value passed as the `category` query parameter upstream.
    pub fn category(self) -> String {
        self.name().to_lowercase()
    }

    /// Look up a genre by its 1-based catalog position.
    pub fn from_position(position: usize) -> Option<Genre> {
        position
            .checked_sub(1)
            .and_then(|index| CATALOG.get(index).copied())
    }

    /// Look up a genre by exact canonical name.
    pub fn from_name(name: &str) -> Option<Genre> {
        CATALOG.iter().copied().find(|g| g.name() == name)
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Numbered list of the catalog, one genre per line.
pub fn numbered_list() -> String {
    CATALOG
        .iter()
        .enumerate()
        .map(|(idx, genre)| format!("{}. {}", idx + 1, genre))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order() {
        let names: Vec<_> = CATALOG.iter().map(|g| g.name()).collect();
        assert_eq!(
            names,
            vec!["Technology", "Sports", "Entertainment", "Business", "Health", "Science", "General"]
        );
    }

    #[test]
    fn test_from_position_bounds() {
        assert_eq!(Genre::from_position(0), None);
        assert_eq!(Genre::from_position(1), Some(Genre::Technology));
        assert_eq!(Genre::from_position(7), Some(Genre::General));
        assert_eq!(Genre::from_position(8), None);
    }

    #[test]
    fn test_from_name_is_exact() {
        assert_eq!(Genre::from_name("Health"), Some(Genre::Health));
        assert_eq!(Genre::from_name("health"), None);
        assert_eq!(Genre::from_name("Health "), None);
    }

    #[test]
    fn test_category_is_lowercase() {
        assert_eq!(Genre::Entertainment.category(), "entertainment");
    }

    #[test]
    fn test_numbered_list() {
        let list = numbered_list();
        assert!(list.starts_with("1. Technology\n2. Sports"));
        assert!(list.ends_with("7. General"));
        assert_eq!(list.lines().count(), 7);
    }
}
