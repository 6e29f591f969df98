//! Free-text genre selection.

use crate::genre::Genre;

/// Outcome of interpreting a reply to the genre prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Valid(Genre),
    Invalid,
}

/// Interpret user input as a genre, either by number or by name.
///
/// Input is trimmed and lower-cased first. An all-digit string is a 1-based
/// catalog position; anything else has its first letter capitalized and must
/// then equal a catalog name exactly. Malformed input is `Invalid`, never an
/// error.
pub fn parse_selection(input: &str) -> Selection {
    let normalized = input.trim().to_lowercase();

    let genre = if !normalized.is_empty() && normalized.chars().all(|c| c.is_ascii_digit()) {
        // Overflowing numbers fail to parse and fall out as invalid.
        normalized
            .parse::<usize>()
            .ok()
            .and_then(Genre::from_position)
    } else {
        Genre::from_name(&capitalize(&normalized))
    };

    match genre {
        Some(genre) => Selection::Valid(genre),
        None => Selection::Invalid,
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genre::CATALOG;

    #[test]
    fn test_every_position_in_range_selects_catalog_entry() {
        for (idx, genre) in CATALOG.iter().enumerate() {
            let input = (idx + 1).to_string();
            assert_eq!(parse_selection(&input), Selection::Valid(*genre));
        }
    }

    #[test]
    fn test_positions_out_of_range_are_invalid() {
        assert_eq!(parse_selection("0"), Selection::Invalid);
        assert_eq!(parse_selection("8"), Selection::Invalid);
        assert_eq!(parse_selection("100"), Selection::Invalid);
        assert_eq!(parse_selection("99999999999999999999999999"), Selection::Invalid);
    }

    #[test]
    fn test_leading_zero_is_still_a_position() {
        assert_eq!(parse_selection("03"), Selection::Valid(Genre::Entertainment));
    }

    #[test]
    fn test_only_ascii_digits_are_positions() {
        assert_eq!(parse_selection("٣"), Selection::Invalid);
        assert_eq!(parse_selection("３"), Selection::Invalid);
    }

    #[test]
    fn test_case_variants_resolve_to_canonical_name() {
        for input in ["technology", "TECHNOLOGY", "Technology", "tEcHnOlOgY", "  technology  "] {
            assert_eq!(parse_selection(input), Selection::Valid(Genre::Technology), "{input}");
        }
    }

    #[test]
    fn test_garbage_is_invalid() {
        assert_eq!(parse_selection(""), Selection::Invalid);
        assert_eq!(parse_selection("   "), Selection::Invalid);
        assert_eq!(parse_selection("tech"), Selection::Invalid);
        assert_eq!(parse_selection("-1"), Selection::Invalid);
        assert_eq!(parse_selection("3 sports"), Selection::Invalid);
        assert_eq!(parse_selection("science!"), Selection::Invalid);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("sports"), "Sports");
        assert_eq!(capitalize(""), "");
    }
}
