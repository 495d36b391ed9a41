//! Include-directive scanning and classification.
//!
//! The only wire format this tool parses: a line beginning with the literal
//! token `#include`, followed by `<name>` (system header) or `"name"`
//! (local sibling file). Anything else after the marker is a hard error,
//! never a silently-ignored third case.

use crate::error::SqueezeError;

/// Literal prefix that marks an include-directive line.
pub const INCLUDE_MARKER: &str = "#include";

/// Closed classification of an include directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncludeKind {
    /// Angle-bracket form, `#include <stdio.h>`.
    System,
    /// Double-quote form, `#include "helper.h"`.
    Local,
}

/// One classified include directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Include {
    pub name: String,
    pub kind: IncludeKind,
}

/// Classify a single include-directive line into `(name, kind)`.
///
/// The name is the text strictly between `<` and `>`, or between the first
/// two `"` characters. A line with neither delimiter form (for example
/// `#include MACRO_NAME`) fails with [`SqueezeError::MalformedInclude`],
/// as does a dangling `<` or an unclosed quote.
pub fn classify(line: &str) -> Result<Include, SqueezeError> {
    let malformed = || SqueezeError::MalformedInclude { line: line.to_string() };

    if let Some(rest) = line.split_once('<').map(|(_, rest)| rest) {
        let (name, _) = rest.split_once('>').ok_or_else(malformed)?;
        return Ok(Include { name: name.to_string(), kind: IncludeKind::System });
    }

    if let Some(rest) = line.split_once('"').map(|(_, rest)| rest) {
        let (name, _) = rest.split_once('"').ok_or_else(malformed)?;
        return Ok(Include { name: name.to_string(), kind: IncludeKind::Local });
    }

    Err(malformed())
}

/// Extract every include-directive line from a file, in file order.
///
/// Pure line filter; classification is left to [`classify`]. A file with no
/// directives yields an empty vec.
pub fn scan(text: &str) -> Vec<&str> {
    text.lines()
        .filter(|line| line.starts_with(INCLUDE_MARKER))
        .collect()
}

/// Split scanned directive lines into `(system, local)` name lists.
///
/// Relative order within each list follows the scan order. Duplicates are
/// preserved here; deduplication of system names happens later when the
/// hoisted block is built.
pub fn partition(lines: &[&str]) -> Result<(Vec<String>, Vec<String>), SqueezeError> {
    let mut system = Vec::new();
    let mut local = Vec::new();

    for line in lines {
        let inc = classify(line)?;
        match inc.kind {
            IncludeKind::System => system.push(inc.name),
            IncludeKind::Local => local.push(inc.name),
        }
    }

    Ok((system, local))
}
