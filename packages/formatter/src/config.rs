//! Configuration constants and validation functions for the formatter.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{FormatterError, Result};

/// Variable name used when the caller does not supply one.
pub const DEFAULT_VAR_NAME: &str = "state";

/// Indentation width (spaces) of the pretty-printed JSON payload.
pub const JSON_INDENT: usize = 2;

/// Opening token that introduces a new article in the source text.
pub const ARTICLE_MARKER: &str = "{article:\"Article";

/// Word that introduces a section. It only counts as a marker at the start
/// of a line and followed by a section number (e.g., `Section 3a`).
pub const SECTION_MARKER: &str = "Section";

/// Prefix of the optional amendment line at the top of a section body.
pub const LAST_AMENDED_PREFIX: &str = "Last Amended";

/// File extension of source documents picked up by batch runs.
pub const SOURCE_EXTENSION: &str = "txt";

/// File extension of generated literal files.
pub const OUTPUT_EXTENSION: &str = "js";

/// File name prefix of the default output when the input already ends in
/// [`OUTPUT_EXTENSION`] (`unformatted.js` -> `formatted_unformatted.js`).
pub const FORMATTED_PREFIX: &str = "formatted_";

/// JavaScript identifier: letter, `_` or `$`, then word characters or `$`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static IDENTIFIER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("valid regex"));

/// Words that cannot be bound with `var`.
const RESERVED_WORDS: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "implements", "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Validate the variable name the literal is assigned to.
///
/// # Arguments
/// * `name` - Candidate variable name
///
/// # Returns
/// * `Ok(())` if `name` is a JavaScript identifier and not a reserved word
/// * `Err(FormatterError::InvalidVariableName)` otherwise
///
/// # Examples
/// ```
/// use constitution_formatter::config::validate_var_name;
///
/// assert!(validate_var_name("state").is_ok());
/// assert!(validate_var_name("$montana_2024").is_ok());
/// assert!(validate_var_name("new york").is_err());
/// assert!(validate_var_name("class").is_err());
/// ```
pub fn validate_var_name(name: &str) -> Result<()> {
    if IDENTIFIER_PATTERN.is_match(name) && !is_reserved(name) {
        Ok(())
    } else {
        Err(FormatterError::InvalidVariableName(name.to_string()))
    }
}

/// Derive a variable name from a file stem.
///
/// Lowercases the stem and replaces every character that cannot appear in an
/// identifier with `_`. A leading digit or a reserved word gets an extra `_`;
/// an empty stem falls back to [`DEFAULT_VAR_NAME`]. The result always passes
/// [`validate_var_name`].
///
/// # Examples
/// ```
/// use constitution_formatter::config::derive_var_name;
///
/// assert_eq!(derive_var_name("newyork"), "newyork");
/// assert_eq!(derive_var_name("New York"), "new_york");
/// assert_eq!(derive_var_name("1889-montana"), "_1889_montana");
/// assert_eq!(derive_var_name(""), "state");
/// ```
#[must_use]
pub fn derive_var_name(stem: &str) -> String {
    let mut name: String = stem
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '$' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if name.is_empty() {
        return DEFAULT_VAR_NAME.to_string();
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    if is_reserved(&name) {
        name.push('_');
    }
    name
}
