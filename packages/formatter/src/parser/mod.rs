//! Constitution parser: raw text to [`Document`].
//!
//! Parsing is a single pass over the input:
//!
//! 1. split the text on `{article:"Article` markers,
//! 2. read the article number and `title:"..."` marker of each segment,
//! 3. split each segment on line-start `Section <number>` markers,
//! 4. read the optional `Last Amended` line, the title line and the body of
//!    each section.
//!
//! The parser never fails. Missing markers become empty strings and
//! whitespace-only segments are skipped.

mod article;
mod section;

pub use article::{article_number, article_title, split_articles};
pub use section::{parse_section, split_sections};

use crate::types::Document;

/// Parse raw constitution text into a [`Document`].
///
/// # Examples
/// ```
/// use constitution_formatter::parser::parse;
///
/// let doc = parse("{article:\"Article 1\" title:\"Preamble\"\nSection 1\nThe Title\nBody.\n");
/// assert_eq!(doc.articles[0].identifier, "Article 1");
/// assert_eq!(doc.articles[0].sections[0].text, "Body.");
///
/// assert!(parse("no markers at all").is_empty());
/// ```
#[must_use]
pub fn parse(raw_text: &str) -> Document {
    parse_with_warnings(raw_text).0
}

/// Parse raw constitution text, also returning non-fatal diagnostics.
///
/// Warnings cover text before the first article marker, articles without a
/// title marker, and sections without a title or body text.
///
/// Text before the first article marker never becomes an article; it is
/// dropped and reported as a warning, so input without markers parses to an
/// empty [`Document`].
#[must_use]
pub fn parse_with_warnings(raw_text: &str) -> (Document, Vec<String>) {
    let mut document = Document::new();
    let mut warnings = Vec::new();
    let mut segments = split_articles(raw_text);

    if let Some(leading) = segments.next() {
        if !leading.trim().is_empty() {
            tracing::debug!(bytes = leading.len(), "Ignoring text before first article");
            warnings.push("Text before the first article marker was ignored".to_string());
        }
    }

    for segment in segments {
        if segment.trim().is_empty() {
            tracing::debug!("Skipping whitespace-only article segment");
            continue;
        }
        document.add_article(article::parse_article(segment, &mut warnings));
    }

    (document, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Article, Section};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_reference_example() {
        let raw = "{article:\"Article 1\" title:\"Preamble\"\nSection 1\nLast Amended 1999\nThe Title\nBody line one.\nBody line two.\n";
        let doc = parse(raw);

        assert_eq!(
            doc,
            Document::from(vec![Article::new("Article 1", "Preamble").with_sections(vec![
                Section::new("Section 1", "The Title", "Body line one. Body line two.")
                    .with_last_amended("1999")
            ])])
        );
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse("").is_empty());
        assert!(parse("   \n\t\n").is_empty());
    }

    #[test]
    fn test_parse_without_markers() {
        let (doc, warnings) = parse_with_warnings("Preamble text only.\nSection 1\nBody");
        assert!(doc.is_empty());
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_parse_drops_leading_fragment() {
        let (doc, warnings) =
            parse_with_warnings("Preamble.\n{article:\"Article 1\" title:\"One\"\n");

        assert_eq!(doc.len(), 1);
        assert_eq!(doc.articles[0].identifier, "Article 1");
        assert_eq!(
            warnings,
            vec!["Text before the first article marker was ignored".to_string()]
        );
    }

    #[test]
    fn test_parse_skips_whitespace_segments() {
        let raw = "{article:\"Article \n\n{article:\"Article 2\" title:\"Two\"\n  \n";
        let doc = parse(raw);

        assert_eq!(doc.len(), 1);
        assert_eq!(doc.articles[0].identifier, "Article 2");
    }

    #[test]
    fn test_parse_preserves_order() {
        let raw = "\
{article:\"Article 1\" title:\"First\"
Section 2
B
b.
Section 1
A
a.
{article:\"Article 3\" title:\"Third\"
{article:\"Article 2\" title:\"Second\"
Section 1a
C
c.
";
        let doc = parse(raw);

        let ids: Vec<&str> = doc.iter().map(|a| a.identifier.as_str()).collect();
        assert_eq!(ids, vec!["Article 1", "Article 3", "Article 2"]);

        let labels: Vec<&str> = doc.articles[0]
            .sections
            .iter()
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Section 2", "Section 1"]);
        assert!(doc.articles[1].sections.is_empty());
        assert_eq!(doc.articles[2].sections[0].label, "Section 1a");
    }

    #[test]
    fn test_parse_article_without_sections_has_title() {
        let doc = parse("{article:\"Article 5\" title:\"Repealed\"\n");
        assert_eq!(doc.articles[0].title, "Repealed");
        assert!(doc.articles[0].sections.is_empty());

        let doc = parse("{article:\"Article 6\"\n");
        assert_eq!(doc.articles[0].title, "");
    }

    #[test]
    fn test_parse_malformed_article_number() {
        let doc = parse("{article:\"Article\" title:\"Lost\"\nSection 1\nT\nB");
        assert_eq!(doc.articles[0].identifier, "Article ");
        assert_eq!(doc.articles[0].title, "Lost");
        assert_eq!(doc.articles[0].sections.len(), 1);
    }

    #[test]
    fn test_parse_amendment_excluded_from_title_and_text() {
        let doc = parse("{article:\"Article 1\" title:\"X\"\nSection 1\nLast Amended 2020-01-01\nTitle\nText\n");
        let section = &doc.articles[0].sections[0];

        assert_eq!(section.last_amended.as_deref(), Some("2020-01-01"));
        assert!(!section.section_title.contains("Last Amended"));
        assert!(!section.text.contains("Last Amended"));
    }

    #[test]
    fn test_parse_with_warnings_clean_input() {
        let raw = "{article:\"Article 1\" title:\"Preamble\"\nSection 1\nThe Title\nBody.\n";
        let (doc, warnings) = parse_with_warnings(raw);
        assert_eq!(doc.len(), 1);
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
    }
}
