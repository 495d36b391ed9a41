//! **squeeze** - Amalgamate a multi-file C header library into one distributable single header
//!
//! Reads a root header that quote-includes its sibling files, hoists the
//! deduplicated and sorted set of system includes to the top, and inlines
//! each quoted file's content at its reference position. Resolution is
//! deliberately one level deep: includes quoted inside an inlined file are
//! stripped, never followed.

/// Command-line interface with clap integration
pub mod cli;

/// Domain error taxonomy (malformed includes, missing files, bad guards)
pub mod error;

/// Core pipeline - include resolution and assembly
pub mod core {
    /// Include-directive scanning and classification (system vs local)
    pub mod include;
    pub use include::{Include, IncludeKind};

    /// One-level-deep dependency collection over the source directory
    pub mod deps;
    pub use deps::{DepEntry, RootDeps};

    /// System-include union, dedup, and lexicographic sort
    pub mod hoist;

    /// Guard stripping and body assembly with local-file inlining
    pub mod assemble;

    /// Banner and final artifact rendering
    pub mod emit;
    pub use emit::Banner;

    /// Stage wiring and the single output write
    pub mod pipeline;
    pub use pipeline::{SqueezeArgs, run as squeeze_run};
}

/// Infrastructure - configuration and file I/O
pub mod infra {
    /// Optional squeeze.toml with built-in defaults
    pub mod config;
    pub use config::{Config, load_config};

    /// Source-directory loader every quoted include resolves against
    pub mod io;
    pub use io::SourceDir;
}

// Strategic re-exports for clean CLI interface
pub use cli::{AppContext, Cli};
pub use core::{Banner, SqueezeArgs, squeeze_run};
pub use error::SqueezeError;
pub use infra::{Config, SourceDir, load_config};
