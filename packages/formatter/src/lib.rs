//! Constitution Formatter - Convert plain-text constitutions into structured literals.
//!
//! This crate parses a constitution written with `{article:"Article N" title:"..."`
//! and `Section N` markers into articles and sections, and writes the result
//! as a `var <name> = <json>;` literal.
//!
//! # Example
//!
//! ```
//! use constitution_formatter::{parse, to_literal};
//!
//! let raw = "{article:\"Article 1\" title:\"Preamble\"\nSection 1\nLast Amended 1999\nThe Title\nBody line one.\nBody line two.\n";
//! let doc = parse(raw);
//!
//! let section = &doc.articles[0].sections[0];
//! assert_eq!(section.section_title, "The Title");
//! assert_eq!(section.text, "Body line one. Body line two.");
//! assert_eq!(section.last_amended.as_deref(), Some("1999"));
//!
//! let literal = to_literal(&doc, "state").unwrap();
//! assert!(literal.starts_with("var state = ["));
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Configuration constants and validation
//! - [`types`]: Core data types (Document, Article, Section)
//! - [`error`]: Error types and Result alias
//! - [`parser`]: Text-to-structure parsing
//! - [`literal`]: Literal generation and reading
//! - [`source`]: Source file reading
//! - [`formatter`]: Main formatter service
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod literal;
pub mod parser;
pub mod source;
pub mod types;

// Re-export main functions
pub use formatter::{format_constitution, format_directory, format_sources, FormatSummary};
pub use literal::{from_literal, save_literal, to_literal};
pub use parser::{parse, parse_with_warnings};

// Re-export commonly used items
pub use config::{validate_var_name, DEFAULT_VAR_NAME};
pub use error::{FormatterError, Result};
pub use types::{Article, Document, Section};
