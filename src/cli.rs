use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::error::SqueezeError;

/// Name the binary must be invoked as.
pub const TOOL_NAME: &str = "squeeze";

/// Shared application context for global flags
#[derive(Clone, Debug)]
pub struct AppContext {
    pub verbose: bool, // --verbose, per-stage diagnostics
    pub quiet: bool,   // --quiet, suppress the success summary
}

#[derive(Parser)]
#[command(name = "squeeze")]
#[command(about = "Amalgamate a multi-file C header library into one distributable single header")]
#[command(version, long_about = None)]
pub struct Cli {
    /// Output file path for the amalgamated header
    pub output: PathBuf,

    /// Source directory quoted includes are resolved against
    #[arg(long)]
    pub src_dir: Option<PathBuf>,

    /// Root header file name inside the source directory
    #[arg(long)]
    pub root: Option<String>,

    /// Include-guard token for the generated header
    #[arg(long)]
    pub guard: Option<String>,

    /// Print diagnostics at each pipeline stage
    #[arg(long)]
    pub verbose: bool,

    /// Suppress the success summary
    #[arg(long)]
    pub quiet: bool,
}

/// Refuse to run under any name other than [`TOOL_NAME`].
///
/// Guards against the binary being renamed or wrapped and then invoked
/// with stale expectations; checked before argument parsing, so a mismatch
/// never touches the filesystem.
pub fn verify_invocation(argv0: Option<&OsStr>) -> Result<(), SqueezeError> {
    let stem = argv0
        .map(Path::new)
        .and_then(Path::file_stem)
        .and_then(OsStr::to_str);

    match stem {
        Some(name) if name == TOOL_NAME => Ok(()),
        Some(name) => Err(SqueezeError::Invocation(format!(
            "expected to run as `{TOOL_NAME}`, was invoked as `{name}`"
        ))),
        None => Err(SqueezeError::Invocation(
            "could not determine the invocation name".to_string(),
        )),
    }
}
