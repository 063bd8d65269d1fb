//! Output file naming.
//!
//! Godot stores imported textures as `<original name>-<hash>.ctex`, e.g.
//! `sprite.png-ab12cd34ef.ctex`. The original name is recovered by cutting at the
//! first `-`; names without a `-` just lose the `.ctex` suffix. A base without any
//! `.` gets `.webp`, the format of the embedded payload.

/// Suffix of texture containers written by the import pipeline.
pub const CONTAINER_SUFFIX: &str = ".ctex";
/// Extension appended when the recovered base name has none.
pub const DEFAULT_EXTENSION: &str = ".webp";

/// Characters replaced by [`sanitize_file_name`].
const UNSAFE_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Derive the output file name from a container's file name (not a path).
///
/// Deterministic and total. Only the first `-` is significant; a base that
/// already has a `.` anywhere keeps it as-is.
pub fn derive_output_name(container_name: &str) -> String {
    let mut base = match container_name.split_once('-') {
        Some((head, _)) => head.to_string(),
        None => container_name.replace(CONTAINER_SUFFIX, ""),
    };
    if !base.contains('.') {
        base.push_str(DEFAULT_EXTENSION);
    }
    base
}

/// Replace characters that are invalid in file names on common platforms with `_`.
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| if UNSAFE_CHARS.contains(&c) { '_' } else { c })
        .collect()
}

/// `n`-th alternative for a taken name: `icon.webp` -> `icon-1.webp`, `README` -> `README-1`.
pub fn numbered_name(name: &str, n: usize) -> String {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{}-{}.{}", stem, n, ext),
        _ => format!("{}-{}", name, n),
    }
}
