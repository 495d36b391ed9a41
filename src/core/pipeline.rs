//! Stage wiring: scan, collect, hoist, assemble, render, write.
//!
//! One linear pass, single-threaded. The output file is written exactly
//! once, after the whole header exists in memory; any stage error aborts
//! the run before the filesystem is touched.

use std::path::PathBuf;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use tracing::debug;

use crate::cli::AppContext;
use crate::core::emit::{self, Banner};
use crate::core::{assemble, deps, hoist};
use crate::infra::io::SourceDir;

/// Fully-resolved inputs for one squeeze run (CLI merged over config).
#[derive(Debug)]
pub struct SqueezeArgs {
    pub output: PathBuf,
    pub src_dir: PathBuf,
    pub root: String,
    pub guard: String,
    pub banner: Banner,
}

pub fn run(args: SqueezeArgs, ctx: &AppContext) -> Result<()> {
    let src = SourceDir::new(&args.src_dir);

    let root_text = src
        .load(&args.root)
        .with_context(|| format!("Failed to load root header `{}`", args.root))?;
    debug!(root = %args.root, bytes = root_text.len(), "loaded root header");

    // One level deep: only files the root quotes directly are opened
    let collected = deps::collect(&root_text, &src)?;
    debug!(dependencies = collected.map.len(), "collected dependency map");

    let hoisted = hoist::hoisted_system_includes(&collected.system, &collected.map);
    debug!(count = hoisted.len(), "deduplicated and sorted system includes");

    let body = assemble::assemble(&root_text, &args.guard, &src)?;
    debug!(lines = body.len(), "assembled output body");

    let text = emit::render(&args.banner, &args.guard, &hoisted, &body);

    std::fs::write(&args.output, &text)
        .with_context(|| format!("Failed to write to {}", args.output.display()))?;

    if !ctx.quiet {
        println!(
            "{} Squeezed {} local file(s) into {} ({} bytes)",
            "✓".green(),
            collected.map.len(),
            args.output.display(),
            text.len()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    fn ctx() -> AppContext {
        AppContext { verbose: false, quiet: true }
    }

    fn banner() -> Banner {
        Banner {
            title: "lib.h - test".to_string(),
            author: "Tester".to_string(),
            date: "01/01/2026".to_string(),
        }
    }

    #[test]
    fn end_to_end_on_the_canonical_fixture() {
        let tmp = assert_fs::TempDir::new().expect("tempdir");
        tmp.child("src/lib.h")
            .write_str(
                "#ifndef LIB_H_\n#define LIB_H_\n\n#include <stdio.h>\n#include \"a.h\"\nint main(){}\n#endif // LIB_H_\n",
            )
            .expect("write root");
        tmp.child("src/a.h")
            .write_str("#include <stdlib.h>\nvoid helper();\n")
            .expect("write dep");

        let out = tmp.child("lib_squeezed.h");
        let args = SqueezeArgs {
            output: out.path().to_path_buf(),
            src_dir: tmp.path().join("src"),
            root: "lib.h".to_string(),
            guard: "LIB_H_".to_string(),
            banner: banner(),
        };

        run(args, &ctx()).expect("pipeline run");

        let text = std::fs::read_to_string(out.path()).expect("read output");
        // hoisted block is sorted and deduplicated
        let hoist_pos = text.find("#include <stdio.h>").unwrap();
        assert!(text.find("#include <stdlib.h>").unwrap() > hoist_pos);
        // body: separator, inlined helper, then the root's own line
        let sep = text.find("// ---------- a.h ----------").unwrap();
        let helper = text.find("void helper();").unwrap();
        let main_line = text.find("int main(){}").unwrap();
        assert!(sep < helper && helper < main_line);
        // no directives of any kind below the hoisted block
        assert_eq!(text.matches("#include").count(), 2);
        assert!(text.ends_with("#endif // LIB_H_\n"));
    }

    #[test]
    fn no_output_file_when_a_stage_fails() {
        let tmp = assert_fs::TempDir::new().expect("tempdir");
        tmp.child("src/lib.h")
            .write_str("#ifndef LIB_H_\n#define LIB_H_\n#include MACRO_NAME\n#endif // LIB_H_\n")
            .expect("write root");

        let out = tmp.child("lib_squeezed.h");
        let args = SqueezeArgs {
            output: out.path().to_path_buf(),
            src_dir: tmp.path().join("src"),
            root: "lib.h".to_string(),
            guard: "LIB_H_".to_string(),
            banner: banner(),
        };

        assert!(run(args, &ctx()).is_err());
        assert!(!out.path().exists());
    }

    #[test]
    fn root_without_local_includes_is_body_minus_guards_and_directives() {
        let tmp = assert_fs::TempDir::new().expect("tempdir");
        tmp.child("src/lib.h")
            .write_str("#ifndef LIB_H_\n#define LIB_H_\n#include <string.h>\nint x;\n#endif // LIB_H_\n")
            .expect("write root");

        let out = tmp.child("lib_squeezed.h");
        let args = SqueezeArgs {
            output: out.path().to_path_buf(),
            src_dir: tmp.path().join("src"),
            root: "lib.h".to_string(),
            guard: "LIB_H_".to_string(),
            banner: banner(),
        };
        run(args, &ctx()).expect("pipeline run");

        let text = std::fs::read_to_string(out.path()).expect("read output");
        assert!(text.contains("// All used standard libs\n#include <string.h>\nint x;\n#endif // LIB_H_\n"));
    }
}
