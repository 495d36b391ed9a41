//! Source-directory file loading.

use std::path::{Path, PathBuf};

use crate::error::SqueezeError;

/// The fixed directory every quoted include is resolved against.
///
/// Reads are bounded, synchronous, and UTF-8; a quoted include naming a
/// file that does not exist here is a fatal [`SqueezeError::FileNotFound`].
#[derive(Debug, Clone)]
pub struct SourceDir {
    dir: PathBuf,
}

impl SourceDir {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self { dir: dir.as_ref().to_path_buf() }
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// Load `<source-dir>/<name>` as text.
    pub fn load(&self, name: &str) -> Result<String, SqueezeError> {
        let path = self.dir.join(name);

        std::fs::read_to_string(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                SqueezeError::FileNotFound { name: name.to_string(), dir: self.dir.clone() }
            } else {
                SqueezeError::Io { path, source }
            }
        })
    }
}
