// modcat: Feature Module Assembler
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Boundary markers and post-hoc segment handling.
//!
//! Every module in an artifact is bracketed by two identical comment lines:
//!
//! ```text
//! \n/*>>gallery*/\n
//! ...gallery source...\n
//! \n/*>>gallery*/\n
//! ```
//!
//! The first marker line for a name opens a segment, the next line with
//! the same name closes it. Marker-like lines for other names inside an
//! open segment are treated as module content.
//!
//! [`strip`] cuts whole segments out again, so
//! `strip(build(L), {m}) == build(L - {m})` without rebuilding.

use tracing::warn;

use crate::bundle::exclude::ExclusionSet;
use crate::error::ArtifactError;

const OPEN: &str = "/*>>";
const CLOSE: &str = "*/";

/// Marker text emitted before and after module `name`.
#[must_use]
pub fn marker(name: &str) -> String {
    format!("\n{OPEN}{name}{CLOSE}\n")
}

/// One module segment located in an artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Module name from the markers.
    pub name: String,
    /// Byte range of the whole segment, both markers and their newlines included.
    pub span: std::ops::Range<usize>,
    /// Byte range of the module source exactly as it was read.
    pub body: std::ops::Range<usize>,
}

/// Extracts the module name from a marker line, if it is one.
fn marker_name(line: &str) -> Option<&str> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);
    line.strip_prefix(OPEN)?
        .strip_suffix(CLOSE)
        .filter(|name| !name.is_empty() && !name.contains(CLOSE))
}

/// Length of the line break `text` ends with: 2 for CRLF, 1 for LF, else 0.
fn line_break_before(text: &str) -> usize {
    if text.ends_with("\r\n") {
        2
    } else {
        usize::from(text.ends_with('\n'))
    }
}

/// Locates every module segment in `artifact`, in order.
///
/// # Errors
///
/// Returns [`ArtifactError::UnbalancedMarker`] if a segment is opened but
/// never closed.
pub fn parse_segments(artifact: &str) -> Result<Vec<Segment>, ArtifactError> {
    let mut segments = Vec::new();
    // (name, line start, line end)
    let mut open: Option<(&str, usize, usize)> = None;
    let mut offset = 0;

    for line in artifact.split_inclusive('\n') {
        let start = offset;
        offset += line.len();

        let Some(name) = marker_name(line) else {
            continue;
        };

        match open {
            None => open = Some((name, start, offset)),
            Some((current, open_start, open_end)) if current == name => {
                // Markers are written as "\n/*>>name*/\n"; claim the line
                // break in front of the opening line as part of the segment.
                let span_start = open_start - line_break_before(&artifact[..open_start]);
                // Closing side is "<source>\n" + "\n/*>>name*/\n".
                let inner = &artifact[open_end..start];
                let marker_break = line_break_before(inner);
                let body_end =
                    start - marker_break - line_break_before(&inner[..inner.len() - marker_break]);
                segments.push(Segment {
                    name: name.to_string(),
                    span: span_start..offset,
                    body: open_end..body_end,
                });
                open = None;
            }
            Some(_) => {}
        }
    }

    match open {
        Some((name, ..)) => Err(ArtifactError::UnbalancedMarker(name.to_string())),
        None => Ok(segments),
    }
}

/// Module names in the order they appear in `artifact`.
///
/// # Errors
///
/// Returns an error if the markers are unbalanced.
pub fn segment_names(artifact: &str) -> Result<Vec<String>, ArtifactError> {
    Ok(parse_segments(artifact)?
        .into_iter()
        .map(|s| s.name)
        .collect())
}

/// Outcome of [`strip`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stripped {
    /// Artifact text with the excluded segments removed.
    pub text: String,
    /// Names that were removed, in first-seen order.
    pub removed: Vec<String>,
}

/// Removes the segments of every excluded module from `artifact`.
///
/// The `core` module is never removed. Exclusions that match no segment
/// are logged and ignored.
///
/// # Errors
///
/// Returns an error if the markers are unbalanced.
pub fn strip(
    artifact: &str,
    exclusions: &ExclusionSet,
    core: &str,
) -> Result<Stripped, ArtifactError> {
    let segments = parse_segments(artifact)?;

    if exclusions.contains(core) {
        warn!(module = %core, "core module cannot be stripped, keeping it");
    }

    let mut text = String::with_capacity(artifact.len());
    let mut removed: Vec<String> = Vec::new();
    let mut cursor = 0;

    for segment in &segments {
        if segment.name == core || !exclusions.contains(&segment.name) {
            continue;
        }
        text.push_str(&artifact[cursor..segment.span.start]);
        cursor = segment.span.end;
        if !removed.contains(&segment.name) {
            removed.push(segment.name.clone());
        }
    }
    text.push_str(&artifact[cursor..]);

    for name in exclusions.iter() {
        if name != core && !removed.iter().any(|r| r == name) {
            warn!(module = %name, "no segment found for module");
        }
    }

    Ok(Stripped { text, removed })
}
