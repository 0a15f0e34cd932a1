#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scratch directory under the target dir holding a private copy of the binary.
///
/// Keep to one spawning test per file: a concurrent fork can inherit the
/// copy's write handle and fail the exec with ETXTBSY.
pub fn install_generator() -> (TempDir, PathBuf) {
    let dir = tempfile::Builder::new()
        .prefix("icon-gen-")
        .tempdir_in(env!("CARGO_TARGET_TMPDIR"))
        .unwrap();
    let exe = dir.path().join("icon-gen");
    std::fs::copy(env!("CARGO_BIN_EXE_icon-gen"), &exe).unwrap();
    (dir, exe)
}

pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|n| n.ends_with(".png.svg"))
        .collect();
    names.sort();
    names
}
