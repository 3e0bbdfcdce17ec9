//! Formatter service that ties reading, parsing and writing together.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{derive_var_name, validate_var_name, FORMATTED_PREFIX, OUTPUT_EXTENSION};
use crate::error::{FormatterError, Result};
use crate::literal::save_literal;
use crate::parser::parse_with_warnings;
use crate::source::{list_sources, read_source};

/// Outcome of formatting one source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSummary {
    /// Path of the written literal file.
    pub output: PathBuf,

    /// Variable name the literal is assigned to.
    pub var_name: String,

    /// Number of articles parsed.
    pub articles: usize,

    /// Number of sections parsed across all articles.
    pub sections: usize,

    /// Non-fatal parser diagnostics.
    pub warnings: Vec<String>,
}

/// Convert an unformatted constitution text file into a literal file.
///
/// # Arguments
/// * `input` - Path to the unformatted constitution
/// * `output` - Path of the literal file to write
/// * `var_name` - Variable name the literal is assigned to
///
/// # Returns
/// A [`FormatSummary`] describing what was written
///
/// # Errors
/// Returns `FormatterError::OutputIsInput` when `output` names the same file
/// as `input`; the source is left untouched.
pub fn format_constitution(input: &Path, output: &Path, var_name: &str) -> Result<FormatSummary> {
    // Validate before reading so a bad name fails fast
    validate_var_name(var_name)?;

    if is_same_file(input, output) {
        return Err(FormatterError::OutputIsInput(output.to_path_buf()));
    }

    let raw_text = read_source(input)?;
    let (document, warnings) = parse_with_warnings(&raw_text);

    for warning in &warnings {
        tracing::warn!(input = %input.display(), "{warning}");
    }

    let output = save_literal(&document, var_name, output)?;

    tracing::info!(
        output = %output.display(),
        articles = document.len(),
        sections = document.section_count(),
        "Formatted constitution saved"
    );

    Ok(FormatSummary {
        output,
        var_name: var_name.to_string(),
        articles: document.len(),
        sections: document.section_count(),
        warnings,
    })
}

/// Whether two paths name the same file, either literally or after resolving
/// both on disk.
fn is_same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Default output path for a source file: same directory and stem, `.js` extension.
///
/// An input that already has the `.js` extension gets a [`FORMATTED_PREFIX`]
/// file name instead, so the default never points back at the input.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use constitution_formatter::formatter::default_output_path;
///
/// assert_eq!(
///     default_output_path(Path::new("states/montana.txt")),
///     Path::new("states/montana.js")
/// );
/// assert_eq!(
///     default_output_path(Path::new("newyork/unformatted.js")),
///     Path::new("newyork/formatted_unformatted.js")
/// );
/// ```
#[must_use]
pub fn default_output_path(input: &Path) -> PathBuf {
    let output = input.with_extension(OUTPUT_EXTENSION);
    if output != input {
        return output;
    }

    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{FORMATTED_PREFIX}{stem}.{OUTPUT_EXTENSION}"))
}

/// Format every source document in a directory.
///
/// Lists the directory with [`list_sources`] and hands the result to
/// [`format_sources`].
pub fn format_directory(
    input_dir: &Path,
    output_dir: &Path,
    var_name: Option<&str>,
    on_file: impl FnMut(&Path),
) -> Result<Vec<FormatSummary>> {
    let sources = list_sources(input_dir)?;
    tracing::debug!(
        input_dir = %input_dir.display(),
        files = sources.len(),
        "Formatting directory"
    );

    format_sources(&sources, output_dir, var_name, on_file)
}

/// Format an already-listed set of source documents into `output_dir`.
///
/// Each `<stem>.txt` is written to `<output_dir>/<stem>.js`. The variable
/// name is `var_name` when given, otherwise derived from the file stem (see
/// [`derive_var_name`]). `on_file` is called before each file is processed.
/// Processing stops at the first error.
pub fn format_sources(
    sources: &[PathBuf],
    output_dir: &Path,
    var_name: Option<&str>,
    mut on_file: impl FnMut(&Path),
) -> Result<Vec<FormatSummary>> {
    if let Some(name) = var_name {
        validate_var_name(name)?;
    }

    let mut summaries = Vec::with_capacity(sources.len());
    for source in sources {
        on_file(source);

        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = var_name.map_or_else(|| derive_var_name(&stem), str::to_string);
        let output = output_dir.join(format!("{stem}.{OUTPUT_EXTENSION}"));

        summaries.push(format_constitution(source, &output, &name)?);
    }

    Ok(summaries)
}
