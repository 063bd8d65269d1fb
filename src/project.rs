//! Godot project discovery and container enumeration.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::ExtractError;

/// Marker file at the root of a Godot project.
pub const PROJECT_FILE: &str = "project.godot";
/// Per-project cache directory created by the editor.
pub const CACHE_DIR: &str = ".godot";
/// Import cache holding `.ctex` and `.sample` files, relative to the project root.
pub const IMPORTED_SUBDIR: &str = "imported";
/// Default output directory name, relative to the project root.
pub const DEFAULT_OUTPUT_DIR: &str = "extracted_images";

/// Texture container extension.
pub const TEXTURE_EXT: &str = "ctex";
/// Imported audio sample extension (counted, not extracted).
pub const SAMPLE_EXT: &str = "sample";

/// Resolve `path` and accept it as a project root if it has `project.godot` or `.godot/`.
pub fn find_project_root(path: &Path) -> Option<PathBuf> {
    let root = path.canonicalize().ok()?;
    if root.join(PROJECT_FILE).exists() || root.join(CACHE_DIR).exists() {
        Some(root)
    } else {
        None
    }
}

/// `<root>/.godot/imported`.
pub fn imported_dir(root: &Path) -> PathBuf {
    root.join(CACHE_DIR).join(IMPORTED_SUBDIR)
}

/// Files directly inside `dir` with extension `ext`, sorted by file name.
pub fn find_containers(dir: &Path, ext: &str) -> Result<Vec<PathBuf>, ExtractError> {
    let mut out = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) == Some(ext) {
            out.push(path.to_path_buf());
        }
    }
    Ok(out)
}

/// Number of files directly inside `dir` with extension `ext`.
pub fn count_with_extension(dir: &Path, ext: &str) -> Result<usize, ExtractError> {
    find_containers(dir, ext).map(|v| v.len())
}
