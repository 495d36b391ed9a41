//! One-level-deep include dependency collection.
//!
//! Only files quoted directly by the root header are ever opened. Their own
//! quoted includes are recorded in the map but never visited; the recursion
//! bound is exactly one level and downstream flattening depends on it
//! staying that way.

use indexmap::IndexMap;
use tracing::debug;

use crate::core::include;
use crate::error::SqueezeError;
use crate::infra::io::SourceDir;

/// Includes found in one directly-referenced local file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepEntry {
    /// System include names, in scan order.
    pub system: Vec<String>,
    /// Local include names, in scan order. Recorded only; never followed.
    pub local: Vec<String>,
}

/// Root-header include partition plus the per-dependency map.
#[derive(Debug)]
pub struct RootDeps {
    /// System includes of the root header itself, in scan order.
    pub system: Vec<String>,
    /// Local includes of the root header, one entry per occurrence.
    pub local: Vec<String>,
    /// Per-file include partition, keyed by local include name.
    pub map: IndexMap<String, DepEntry>,
}

/// Scan the root header and each local file it quotes, one level deep.
///
/// Duplicate names in the root keep every occurrence in `local`, but the
/// map entry is overwritten by the later load (last-write-wins). A quoted
/// name with no matching file under `src` aborts with `FileNotFound`.
pub fn collect(root_text: &str, src: &SourceDir) -> Result<RootDeps, SqueezeError> {
    let root_lines = include::scan(root_text);
    let (system, local) = include::partition(&root_lines)?;
    debug!(system = system.len(), local = local.len(), "scanned root header");

    let mut map = IndexMap::new();
    for name in &local {
        let text = src.load(name)?;
        let dep_lines = include::scan(&text);
        let (dep_system, dep_local) = include::partition(&dep_lines)?;
        debug!(file = %name, system = dep_system.len(), local = dep_local.len(), "scanned dependency");

        map.insert(name.clone(), DepEntry { system: dep_system, local: dep_local });
    }

    Ok(RootDeps { system, local, map })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    fn fixture(files: &[(&str, &str)]) -> (assert_fs::TempDir, SourceDir) {
        let tmp = assert_fs::TempDir::new().expect("tempdir");
        for (name, content) in files {
            tmp.child(name).write_str(content).expect("write");
        }
        let src = SourceDir::new(tmp.path());
        (tmp, src)
    }

    #[test]
    fn collects_one_level_only() {
        let (_tmp, src) = fixture(&[
            ("a.h", "#include <stdlib.h>\n#include \"b.h\"\nvoid helper();\n"),
            // b.h intentionally absent: it must never be loaded
        ]);
        let root = "#include <stdio.h>\n#include \"a.h\"\nint main(){}\n";

        let deps = collect(root, &src).unwrap();
        assert_eq!(deps.system, vec!["stdio.h"]);
        assert_eq!(deps.local, vec!["a.h"]);

        let entry = &deps.map["a.h"];
        assert_eq!(entry.system, vec!["stdlib.h"]);
        assert_eq!(entry.local, vec!["b.h"]);
    }

    #[test]
    fn duplicate_local_keeps_both_occurrences_but_one_map_entry() {
        let (_tmp, src) = fixture(&[("a.h", "#include <string.h>\n")]);
        let root = "#include \"a.h\"\n#include \"a.h\"\n";

        let deps = collect(root, &src).unwrap();
        // every occurrence survives for the assembler to inline twice,
        // while the map collapses to the last load (same key, same file)
        assert_eq!(deps.local, vec!["a.h", "a.h"]);
        assert_eq!(deps.map.len(), 1);
        assert_eq!(deps.map["a.h"].system, vec!["string.h"]);
    }

    #[test]
    fn missing_local_file_is_fatal() {
        let (_tmp, src) = fixture(&[]);
        let err = collect("#include \"ghost.h\"\n", &src).unwrap_err();
        assert!(matches!(err, SqueezeError::FileNotFound { ref name, .. } if name == "ghost.h"));
    }
}
