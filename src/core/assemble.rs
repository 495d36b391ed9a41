//! Body assembly: guard stripping, include elision, local inlining.
//!
//! This is where the one-level flattening becomes concrete. A local file is
//! inlined with every one of its own include directives removed; a quoted
//! include nested inside it is dropped from the output, never followed.
//! Consumers of the amalgamated header depend on that flattening, so the
//! bound is deliberate and pinned by tests here.

use tracing::debug;

use crate::core::include::{self, INCLUDE_MARKER, IncludeKind};
use crate::error::SqueezeError;
use crate::infra::io::SourceDir;

const DEFINE_MARKER: &str = "#define";

/// Drop the root header's opening guard and everything before it.
///
/// Skips the leading `#ifndef` line, then scans for the line starting with
/// `#define <guard>` and returns the lines after it. A root header without
/// that two-line structure is a fatal [`SqueezeError::MalformedGuard`].
pub fn strip_guard_prologue<'a>(
    lines: &'a [&'a str],
    guard: &str,
) -> Result<&'a [&'a str], SqueezeError> {
    let define_line = format!("{DEFINE_MARKER} {guard}");

    let pos = lines
        .iter()
        .skip(1)
        .position(|line| line.starts_with(&define_line))
        .ok_or_else(|| SqueezeError::MalformedGuard { guard: guard.to_string() })?;

    // +2: one for the skipped #ifndef line, one to step past the #define
    Ok(&lines[pos + 2..])
}

/// Assemble the output body from the root header's post-guard lines.
///
/// Non-include lines are copied verbatim, except the closing-guard line
/// which is elided wherever it occurs (the writer re-emits its own at the
/// very end). System includes are dropped, they are already hoisted. Each
/// local include becomes a labeled separator block followed by the file's
/// content minus all of its own include directives. A local file quoted
/// twice is inlined twice; nothing deduplicates content here.
pub fn assemble(
    root_text: &str,
    guard: &str,
    src: &SourceDir,
) -> Result<Vec<String>, SqueezeError> {
    let lines: Vec<&str> = root_text.lines().collect();
    let remaining = strip_guard_prologue(&lines, guard)?;

    let closing_guard = format!("#endif // {guard}");
    let mut body: Vec<String> = Vec::new();

    for line in remaining {
        if !line.starts_with(INCLUDE_MARKER) {
            if *line == closing_guard {
                continue;
            }
            body.push((*line).to_string());
            continue;
        }

        let inc = include::classify(line)?;
        match inc.kind {
            // already hoisted into the sorted block up top
            IncludeKind::System => continue,
            IncludeKind::Local => {
                debug!(file = %inc.name, "inlining local include");
                body.push("//".to_string());
                body.push(format!("// ---------- {} ----------", inc.name));
                body.push("//".to_string());
                body.push(String::new());

                let text = src.load(&inc.name)?;
                for dep_line in text.lines() {
                    // strips system AND local directives: one-level bound
                    if dep_line.starts_with(INCLUDE_MARKER) {
                        continue;
                    }
                    body.push(dep_line.to_string());
                }
            }
        }
    }

    Ok(body)
}
