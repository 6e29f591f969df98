//! Headline formatting and message chunking.
//!
//! All lengths here are counted in characters, not bytes, so cuts never land
//! inside a UTF-8 sequence.

use crate::genre::Genre;
use crate::news::Article;

/// Articles rendered per response.
pub const MAX_ARTICLES: usize = 5;

/// Longest description kept for one article.
pub const DESCRIPTION_LIMIT: usize = 150;

/// Per-message limit of the chat channel.
pub const MESSAGE_LIMIT: usize = 2000;

/// Used when an article has neither description nor content.
pub const NO_DESCRIPTION: &str = "No description available.";

const ELLIPSIS: &str = "...";

/// Pick and shorten the text shown under an article title.
///
/// Prefers `description`, then `content`; empty strings count as missing.
/// The chosen text is cut at its first period and capped at
/// [`DESCRIPTION_LIMIT`]. The placeholder is returned untouched.
pub fn describe(article: &Article) -> String {
    let source = article
        .description
        .as_deref()
        .filter(|s| !s.is_empty())
        .or_else(|| article.content.as_deref().filter(|s| !s.is_empty()));

    match source {
        Some(text) => {
            let first_sentence = text.split('.').next().unwrap_or_default();
            truncate_chars(first_sentence, DESCRIPTION_LIMIT).to_string()
        }
        None => NO_DESCRIPTION.to_string(),
    }
}

/// Render one numbered entry. `position` is 1-based.
pub fn format_article(position: usize, article: &Article) -> String {
    format!(
        "{}. {}\n{}{}\nRead more: {}",
        position,
        article.title,
        describe(article),
        ELLIPSIS,
        article.url
    )
}

/// Header line naming the genre.
pub fn headline_header(genre: Genre) -> String {
    format!("📰 Top news articles in {}:", genre)
}

/// Build the full response for the first [`MAX_ARTICLES`] articles.
///
/// Entries are separated by a blank line. A body longer than
/// [`MESSAGE_LIMIT`] is cut so that body plus ellipsis is exactly the limit;
/// the header is never cut.
pub fn format_headlines(genre: Genre, articles: &[Article]) -> String {
    let body = articles
        .iter()
        .take(MAX_ARTICLES)
        .enumerate()
        .map(|(idx, article)| format_article(idx + 1, article))
        .collect::<Vec<_>>()
        .join("\n\n");

    let body = if body.chars().count() > MESSAGE_LIMIT {
        let keep = MESSAGE_LIMIT - ELLIPSIS.len();
        format!("{}{}", truncate_chars(&body, keep), ELLIPSIS)
    } else {
        body
    };

    format!("{}\n\n{}", headline_header(genre), body)
}

/// Split text into successive chunks of at most `limit` characters.
///
/// Concatenating the chunks yields the input. Empty input yields no chunks.
pub fn split_message(text: &str, limit: usize) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    if limit == 0 || text.chars().count() <= limit {
        return vec![text.to_string()];
    }

    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(limit)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Longest prefix of `s` holding at most `max` characters.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((byte_idx, _)) => &s[..byte_idx],
        None => s,
    }
}
