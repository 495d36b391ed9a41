//! Domain error taxonomy for the squeeze pipeline.
//!
//! Every failure is fatal and surfaces synchronously; the output file is
//! only written after the whole header has been assembled in memory, so no
//! variant ever leaves a partial artifact behind.

use std::path::PathBuf;

/// Errors the pipeline can abort with.
#[derive(Debug, thiserror::Error)]
pub enum SqueezeError {
    /// An `#include` line matched neither the `<...>` nor the `"..."` form.
    #[error("malformed include directive: `{line}`")]
    MalformedInclude { line: String },

    /// A quoted include named a file absent from the source directory.
    #[error("local include \"{name}\" not found under {}", dir.display())]
    FileNotFound { name: String, dir: PathBuf },

    /// The root header lacks the expected `#ifndef`/`#define` opening pair.
    #[error("root header is missing its opening guard (expected `#define {guard}`)")]
    MalformedGuard { guard: String },

    /// The binary was invoked under an unexpected name.
    #[error("invocation error: {0}")]
    Invocation(String),

    /// Unexpected I/O failure while reading a source file.
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
