//! Source document reading.
//!
//! Source files are plain UTF-8 text using the `{article:"Article N"` and
//! `Section N` marker conventions.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::SOURCE_EXTENSION;
use crate::error::{FormatterError, Result};

/// Read a source document.
///
/// # Arguments
/// * `path` - Path to the unformatted constitution text
///
/// # Returns
/// The raw file contents. Missing files and invalid UTF-8 surface as
/// `FormatterError::Read` carrying the underlying IO error.
pub fn read_source(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|source| FormatterError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), bytes = text.len(), "Read source");
    Ok(text)
}

/// List the source documents in a directory, sorted by file name.
///
/// Only regular files with the [`SOURCE_EXTENSION`] extension are returned;
/// subdirectories are not descended into.
pub fn list_sources(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(FormatterError::NotADirectory(dir.to_path_buf()));
    }

    let mut sources = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION) {
            sources.push(path);
        }
    }
    sources.sort();

    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_source() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("constitution.txt");
        fs::write(&path, "{article:\"Article 1\"").unwrap();

        assert_eq!(read_source(&path).unwrap(), "{article:\"Article 1\"");
    }

    #[test]
    fn test_read_source_missing_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("missing.txt");

        let err = read_source(&path).unwrap_err();
        match err {
            FormatterError::Read { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_source_invalid_utf8() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("latin1.txt");
        fs::write(&path, [0x41, 0xE9, 0x42]).unwrap();

        let err = read_source(&path).unwrap_err();
        assert!(matches!(err, FormatterError::Read { .. }));
    }

    #[test]
    fn test_list_sources_filters_and_sorts() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join("texas.txt"), "").unwrap();
        fs::write(temp_dir.path().join("montana.txt"), "").unwrap();
        fs::write(temp_dir.path().join("notes.md"), "").unwrap();
        fs::create_dir(temp_dir.path().join("archive.txt")).unwrap();

        let sources = list_sources(temp_dir.path()).unwrap();
        let names: Vec<_> = sources
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .collect();
        assert_eq!(names, vec!["montana.txt", "texas.txt"]);
    }

    #[test]
    fn test_list_sources_not_a_directory() {
        let temp_dir = tempdir().unwrap();
        let file = temp_dir.path().join("file.txt");
        fs::write(&file, "").unwrap();

        assert!(matches!(
            list_sources(&file),
            Err(FormatterError::NotADirectory(_))
        ));
    }
}
