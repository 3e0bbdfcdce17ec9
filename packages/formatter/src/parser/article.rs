//! Article segmentation and article header extraction.

use regex::Regex;
use std::sync::LazyLock;

use super::section::{parse_section, split_sections};
use crate::config::ARTICLE_MARKER;
use crate::types::Article;

/// Opening token of a new article, including the whitespace after "Article".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ARTICLE_MARKER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{}\s*", regex::escape(ARTICLE_MARKER))).expect("valid regex")
});

/// Leading run of non-whitespace, non-quote characters.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ARTICLE_NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^[^\s"]+"#).expect("valid regex"));

/// `title:"<text>"` marker anywhere in the segment.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ARTICLE_TITLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"title:"([^"]+)""#).expect("valid regex"));

/// Split raw text on article markers.
///
/// The first item is the text before the first marker (possibly empty); every
/// following item is one article segment, starting right after `Article`.
pub fn split_articles(raw_text: &str) -> impl Iterator<Item = &str> + '_ {
    ARTICLE_MARKER_PATTERN.split(raw_text)
}

/// Extract the article number from the start of a segment.
///
/// Any leading token is accepted verbatim; a segment starting with
/// whitespace or a quote yields an empty number.
///
/// # Examples
/// ```
/// use constitution_formatter::parser::article_number;
///
/// assert_eq!(article_number("1\" title:\"Preamble\""), "1");
/// assert_eq!(article_number("XIV\"\nSection 1"), "XIV");
/// assert_eq!(article_number("\" title:\"Untitled\""), "");
/// ```
#[must_use]
pub fn article_number(segment: &str) -> &str {
    ARTICLE_NUMBER_PATTERN
        .find(segment)
        .map_or("", |m| m.as_str())
}

/// Extract the article title from a `title:"..."` marker, if any.
#[must_use]
pub fn article_title(segment: &str) -> Option<&str> {
    ARTICLE_TITLE_PATTERN
        .captures(segment)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

/// Parse one article segment, appending non-fatal diagnostics to `warnings`.
pub(crate) fn parse_article(segment: &str, warnings: &mut Vec<String>) -> Article {
    let identifier = format!("Article {}", article_number(segment));

    let title = match article_title(segment) {
        Some(title) => title.to_string(),
        None => {
            warnings.push(format!("{identifier}: no title marker"));
            String::new()
        }
    };

    let sections: Vec<_> = split_sections(segment)
        .into_iter()
        .map(|(number, body)| parse_section(number, body))
        .collect();

    for section in &sections {
        if section.section_title.is_empty() {
            warnings.push(format!("{identifier}, {}: no section title", section.label));
        }
        if section.text.is_empty() {
            warnings.push(format!("{identifier}, {}: no section text", section.label));
        }
    }

    tracing::debug!(
        article = %identifier,
        title = %title,
        sections = sections.len(),
        "Parsed article"
    );

    Article::new(identifier, title).with_sections(sections)
}
