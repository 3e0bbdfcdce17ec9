//! Literal writer for parsed constitutions.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::config::{validate_var_name, JSON_INDENT};
use crate::error::{FormatterError, Result};
use crate::types::Document;

/// Serialize a value as pretty-printed JSON with [`JSON_INDENT`] spaces.
///
/// Non-ASCII characters are written as-is rather than escaped.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let indent = " ".repeat(JSON_INDENT);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;

    String::from_utf8(buf).map_err(|e| {
        FormatterError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

/// Generate the literal text for a document.
///
/// The output is a single `var` statement without a trailing newline:
///
/// ```text
/// var state = [
///   {
///     "article": "Article 1",
///     ...
///   }
/// ];
/// ```
///
/// # Errors
/// Returns `FormatterError::InvalidVariableName` when `var_name` is not a
/// JavaScript identifier.
pub fn to_literal(document: &Document, var_name: &str) -> Result<String> {
    validate_var_name(var_name)?;
    let json = to_pretty_json(document)?;
    Ok(format!("var {var_name} = {json};"))
}

/// Save a document as a literal file.
///
/// Uses atomic write pattern: writes to temp file, syncs to disk, then renames.
/// The parent directory is created when missing.
///
/// # Arguments
/// * `document` - The parsed constitution
/// * `var_name` - Variable name the literal is assigned to
/// * `output_file` - Destination path
///
/// # Returns
/// Path to the saved file
pub fn save_literal(document: &Document, var_name: &str, output_file: &Path) -> Result<PathBuf> {
    // Generate before touching the filesystem so a bad name leaves no trace
    let content = to_literal(document, var_name)?;

    if let Some(parent) = output_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file_name = output_file.file_name().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("Output path has no file name: {}", output_file.display()),
        )
    })?;
    let temp_file = output_file.with_file_name(format!(".{}.tmp", file_name.to_string_lossy()));

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if output_file.exists() {
        fs::remove_file(output_file)?;
    }

    fs::rename(&temp_file, output_file)?;

    tracing::debug!(path = %output_file.display(), bytes = content.len(), "Wrote literal");

    Ok(output_file.to_path_buf())
}
