// tests/no_stray_file_io.rs
// Fails if screens or domain systems touch local files directly.
// Local persistence has exactly three doors: the settings io module, the
// session io module, and the draft repository. Everything else must go
// through them, so drafts keep their versioned envelope and session state
// keeps its one shape.

use std::fs;
use std::path::{Path, PathBuf};

fn collect_rs_files(dir: &Path, files: &mut Vec<PathBuf>) {
    if let Ok(entries) = fs::read_dir(dir) {
        for e in entries.flatten() {
            let p = e.path();
            if p.is_dir() {
                collect_rs_files(&p, files);
            } else if p.extension().map(|s| s == "rs").unwrap_or(false) {
                files.push(p);
            }
        }
    }
}

fn normalized(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

fn is_file_io_whitelisted(path: &Path) -> bool {
    let p = normalized(path);
    p.contains("/settings/io.rs")
        || p.contains("/session/io.rs")
        || p.contains("/drafts/mod.rs")
        // The window icon loader reads a PNG at startup.
        || p.ends_with("/src/main.rs")
}

#[test]
fn no_direct_file_io_outside_persistence_modules() {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let src_dir = Path::new(manifest_dir).join("src");

    let mut files = Vec::new();
    collect_rs_files(&src_dir, &mut files);

    let bad_patterns = [
        "std::fs::",
        "fs::File::",
        "fs::write(",
        "fs::read_to_string(",
        "File::create(",
        "File::open(",
    ];

    let mut offenders: Vec<(String, String)> = Vec::new();

    for file in files {
        if is_file_io_whitelisted(&file) {
            continue;
        }
        let Ok(contents) = fs::read_to_string(&file) else {
            continue;
        };
        for pattern in bad_patterns {
            if contents.contains(pattern) {
                offenders.push((normalized(&file), pattern.to_string()));
            }
        }
    }

    assert!(
        offenders.is_empty(),
        "direct file IO found outside the persistence modules: {offenders:#?}"
    );
}

#[test]
fn wizard_draft_keys_are_referenced_by_constant() {
    // The fixed storage keys must appear as literals only where they are
    // defined; screens referencing the raw strings would bypass the draft
    // repository's schema versioning.
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let src_dir = Path::new(manifest_dir).join("src");

    let mut files = Vec::new();
    collect_rs_files(&src_dir, &mut files);

    let key_literals = ["\"addService\"", "\"serviceDetails\"", "\"serviceSteps\""];

    let mut offenders: Vec<String> = Vec::new();

    for file in files {
        let p = normalized(&file);
        if p.contains("/marketplace/wizard.rs") {
            continue;
        }
        let Ok(contents) = fs::read_to_string(&file) else {
            continue;
        };
        for literal in key_literals {
            if contents.contains(literal) {
                offenders.push(format!("{p} contains {literal}"));
            }
        }
    }

    assert!(
        offenders.is_empty(),
        "draft key literals found outside wizard.rs: {offenders:#?}"
    );
}
