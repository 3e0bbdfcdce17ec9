//! Reading literals back into documents.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{FormatterError, Result};
use crate::types::Document;

/// Assignment statement: optional declaration keyword, identifier, `=`, the
/// JSON payload and an optional `;`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LITERAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^\s*(?:(?:var|let|const)\s+)?([A-Za-z_$][A-Za-z0-9_$]*)\s*=\s*(.*?)\s*;?\s*$")
        .expect("valid regex")
});

/// Parse a literal produced by [`to_literal`](super::to_literal).
///
/// # Returns
/// The variable name and the embedded document.
///
/// # Examples
/// ```
/// use constitution_formatter::literal::from_literal;
///
/// let (name, doc) = from_literal("var state = [];").unwrap();
/// assert_eq!(name, "state");
/// assert!(doc.is_empty());
/// ```
pub fn from_literal(literal: &str) -> Result<(String, Document)> {
    let caps = LITERAL_PATTERN.captures(literal).ok_or_else(|| {
        FormatterError::InvalidLiteral("expected `var <name> = <json>;`".to_string())
    })?;

    // Groups 1 and 2 are guaranteed to exist when the regex matches
    let (Some(name), Some(payload)) = (caps.get(1), caps.get(2)) else {
        return Err(FormatterError::InvalidLiteral(
            "expected `var <name> = <json>;`".to_string(),
        ));
    };

    if payload.as_str().is_empty() {
        return Err(FormatterError::InvalidLiteral(format!(
            "no value assigned to {}",
            name.as_str()
        )));
    }

    let document: Document = serde_json::from_str(payload.as_str())?;
    Ok((name.as_str().to_string(), document))
}
