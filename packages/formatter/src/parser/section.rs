//! Section segmentation and section body parsing.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::{LAST_AMENDED_PREFIX, SECTION_MARKER};
use crate::types::Section;

/// Line-start section marker. Captures the section number with an optional
/// letter/hyphen suffix (e.g., "3", "3a", "12-A").
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SECTION_MARKER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\n{}\s+(\d+[a-zA-Z\-]*)",
        regex::escape(SECTION_MARKER)
    ))
    .expect("valid regex")
});

/// Line boundaries inside a section body: `\r\n`, a lone `\r` or `\n`, and the
/// Unicode separators (VT, FF, FS, GS, RS, NEL, LS, PS).
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LINE_BREAK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\r\n|[\n\r\x0B\x0C\x1C\x1D\x1E\x{85}\x{2028}\x{2029}]").expect("valid regex")
});

/// Split an article segment into `(section number, section body)` pairs.
///
/// Text before the first marker is dropped. Each body runs up to the next
/// marker or the end of the segment.
///
/// # Examples
/// ```
/// use constitution_formatter::parser::split_sections;
///
/// let pairs = split_sections("1\" title:\"X\"\nSection 1\nFirst\nSection 2b\nSecond");
/// assert_eq!(pairs, vec![("1", "\nFirst"), ("2b", "\nSecond")]);
/// ```
#[must_use]
pub fn split_sections(segment: &str) -> Vec<(&str, &str)> {
    let mut pairs = Vec::new();
    let mut pending: Option<(&str, usize)> = None;

    for caps in SECTION_MARKER_PATTERN.captures_iter(segment) {
        // Groups 0 and 1 always exist when the regex matches
        let (Some(marker), Some(number)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if let Some((prev_number, body_start)) = pending.take() {
            pairs.push((prev_number, &segment[body_start..marker.start()]));
        }
        pending = Some((number.as_str(), marker.end()));
    }

    if let Some((number, body_start)) = pending {
        pairs.push((number, &segment[body_start..]));
    }

    pairs
}

/// Parse one section body into a [`Section`].
///
/// Line roles, after trimming the body:
/// 1. an optional `Last Amended <value>` line,
/// 2. the section title,
/// 3. everything else, joined into a single line as the section text.
///
/// Lines end at `\n`, `\r\n`, a lone `\r` or a Unicode line separator.
/// Missing lines yield empty strings. An amendment line without a value is
/// consumed but leaves `last_amended` unset.
#[must_use]
pub fn parse_section(number: &str, body: &str) -> Section {
    let mut lines = LINE_BREAK_PATTERN.split(body.trim()).peekable();

    let last_amended = lines
        .next_if(|line| line.starts_with(LAST_AMENDED_PREFIX))
        .map(|line| line.replace(LAST_AMENDED_PREFIX, "").trim().to_string())
        .filter(|value| !value.is_empty());

    let section_title = lines.next().map(str::trim).unwrap_or_default().to_string();

    let text = lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    Section {
        label: format!("Section {number}"),
        section_title,
        text,
        last_amended,
    }
}
