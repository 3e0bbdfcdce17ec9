//! Core data types for the formatter.
//!
//! A constitution is a [`Document`] of [`Article`]s, each holding an ordered
//! list of [`Section`]s. Serialized keys follow the published literal format
//! (`article`, `title`, `text` / `section`, `sectionTitle`, `secText`,
//! `lastAmended`).

use serde::{Deserialize, Serialize};

/// A single section of an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section label (e.g., "Section 3a").
    #[serde(rename = "section")]
    pub label: String,

    /// Section heading, trimmed. Empty when the body had no heading line.
    #[serde(rename = "sectionTitle")]
    pub section_title: String,

    /// Body text joined into a single whitespace-normalized line.
    #[serde(rename = "secText")]
    pub text: String,

    /// Amendment marker value (e.g., "2020-01-01").
    ///
    /// Omitted from the output entirely when the source has no amendment line.
    #[serde(
        rename = "lastAmended",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_amended: Option<String>,
}

impl Section {
    /// Create a new section without amendment metadata.
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        section_title: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            section_title: section_title.into(),
            text: text.into(),
            last_amended: None,
        }
    }

    /// Attach the amendment marker value.
    #[must_use]
    pub fn with_last_amended(mut self, last_amended: impl Into<String>) -> Self {
        self.last_amended = Some(last_amended.into());
        self
    }
}

/// A single article of a constitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Article identifier (e.g., "Article 1", "Article XIV").
    #[serde(rename = "article")]
    pub identifier: String,

    /// Article title. Empty when the source carries no title marker.
    pub title: String,

    /// Sections in source order.
    #[serde(rename = "text")]
    pub sections: Vec<Section>,
}

impl Article {
    /// Create a new article without sections.
    #[must_use]
    pub fn new(identifier: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            title: title.into(),
            sections: Vec::new(),
        }
    }

    /// Create an article with sections.
    #[must_use]
    pub fn with_sections(mut self, sections: Vec<Section>) -> Self {
        self.sections = sections;
        self
    }

    /// Article number without the "Article " prefix.
    ///
    /// # Examples
    /// ```
    /// use constitution_formatter::types::Article;
    ///
    /// assert_eq!(Article::new("Article 3", "").number(), "3");
    /// assert_eq!(Article::new("Preamble", "").number(), "Preamble");
    /// ```
    #[must_use]
    pub fn number(&self) -> &str {
        self.identifier
            .strip_prefix("Article ")
            .unwrap_or(&self.identifier)
    }
}

/// A parsed constitution: articles in source order.
///
/// Serializes as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    /// Articles in source order.
    pub articles: Vec<Article>,
}

impl Document {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an article to the document.
    pub fn add_article(&mut self, article: Article) {
        self.articles.push(article);
    }

    /// Number of articles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    /// Whether the document holds no articles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Iterate over the articles in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Article> {
        self.articles.iter()
    }

    /// Total number of sections across all articles.
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.articles.iter().map(|a| a.sections.len()).sum()
    }
}

impl From<Vec<Article>> for Document {
    fn from(articles: Vec<Article>) -> Self {
        Self { articles }
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Article;
    type IntoIter = std::slice::Iter<'a, Article>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_creation() {
        let section = Section::new("Section 1", "Title", "Body");
        assert_eq!(section.label, "Section 1");
        assert_eq!(section.section_title, "Title");
        assert_eq!(section.text, "Body");
        assert!(section.last_amended.is_none());
    }

    #[test]
    fn test_section_serialization_keys() {
        let section = Section::new("Section 2a", "Rights", "All persons.").with_last_amended("1999");
        let json = serde_json::to_value(&section).unwrap();

        assert_eq!(json["section"], "Section 2a");
        assert_eq!(json["sectionTitle"], "Rights");
        assert_eq!(json["secText"], "All persons.");
        assert_eq!(json["lastAmended"], "1999");
    }

    #[test]
    fn test_section_without_amendment_omits_key() {
        let section = Section::new("Section 1", "", "");
        let json = serde_json::to_string(&section).unwrap();

        assert_eq!(json, r#"{"section":"Section 1","sectionTitle":"","secText":""}"#);
        assert!(!json.contains("lastAmended"));
    }

    #[test]
    fn test_section_deserialization_without_amendment() {
        let section: Section =
            serde_json::from_str(r#"{"section":"Section 1","sectionTitle":"T","secText":"B"}"#)
                .unwrap();
        assert_eq!(section, Section::new("Section 1", "T", "B"));
    }

    #[test]
    fn test_article_serialization_keys() {
        let article = Article::new("Article 1", "Preamble")
            .with_sections(vec![Section::new("Section 1", "Title", "Text")]);
        let json = serde_json::to_value(&article).unwrap();

        assert_eq!(json["article"], "Article 1");
        assert_eq!(json["title"], "Preamble");
        assert!(json["text"].is_array());
        assert_eq!(json["text"][0]["section"], "Section 1");
    }

    #[test]
    fn test_article_number() {
        assert_eq!(Article::new("Article 12", "").number(), "12");
        assert_eq!(Article::new("Article ", "").number(), "");
    }

    #[test]
    fn test_document_serializes_as_array() {
        let mut doc = Document::new();
        assert_eq!(serde_json::to_string(&doc).unwrap(), "[]");

        doc.add_article(Article::new("Article 1", ""));
        let json = serde_json::to_value(&doc).unwrap();
        assert!(json.is_array());
        assert_eq!(json.as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn test_document_counts() {
        let doc = Document::from(vec![
            Article::new("Article 1", "").with_sections(vec![
                Section::new("Section 1", "", ""),
                Section::new("Section 2", "", ""),
            ]),
            Article::new("Article 2", ""),
        ]);

        assert_eq!(doc.len(), 2);
        assert!(!doc.is_empty());
        assert_eq!(doc.section_count(), 2);
        assert_eq!(
            doc.iter().map(|a| a.identifier.as_str()).collect::<Vec<_>>(),
            vec!["Article 1", "Article 2"]
        );
    }
}
