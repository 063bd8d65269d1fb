//! Payload extraction: locate the frame, name it, write it.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::ExtractError;
use crate::naming::{derive_output_name, numbered_name, sanitize_file_name};
use crate::result::{Extraction, ExtractionResult};
use crate::riff::{locate_frame, Frame};

/// Upper bound on `name-N.ext` attempts under [`CollisionPolicy::Rename`].
const MAX_RENAME_ATTEMPTS: usize = 10_000;

/// What to do when the derived output file already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CollisionPolicy {
    /// Replace the existing file (last writer wins).
    #[default]
    Overwrite,
    /// Fail this container with a collision error.
    Fail,
    /// Write to the first free `name-N.ext` instead.
    Rename,
}

/// Per-run extraction settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    pub collision: CollisionPolicy,
    /// Replace characters that are unsafe in file names before writing.
    pub sanitize_names: bool,
}

/// Locate the payload and derive its output name without touching the filesystem.
pub fn extract_frame(data: &[u8], container_name: &str) -> Result<(Frame, String), ExtractError> {
    let frame = locate_frame(data)?;
    Ok((frame, derive_output_name(container_name)))
}

/// Extract from an in-memory container into `dest`, reporting any failure as a result.
pub fn extract(
    data: &[u8],
    container_name: &str,
    dest: &Path,
    opts: &ExtractOptions,
) -> ExtractionResult {
    try_extract(data, container_name, dest, opts).into()
}

/// Read the container at `path` and extract from it into `dest`.
pub fn extract_file(path: &Path, dest: &Path, opts: &ExtractOptions) -> ExtractionResult {
    try_extract_file(path, dest, opts).into()
}

/// Like [`extract_file`], but returns the typed error.
pub fn try_extract_file(
    path: &Path,
    dest: &Path,
    opts: &ExtractOptions,
) -> Result<Extraction, ExtractError> {
    let container_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| ExtractError::NoFileName(path.to_path_buf()))?;
    let data = fs::read(path)?;
    try_extract(&data, &container_name, dest, opts)
}

/// Like [`extract`], but returns the typed error.
pub fn try_extract(
    data: &[u8],
    container_name: &str,
    dest: &Path,
    opts: &ExtractOptions,
) -> Result<Extraction, ExtractError> {
    let (frame, mut name) = extract_frame(data, container_name)?;
    if opts.sanitize_names {
        name = sanitize_file_name(&name);
    }
    let payload = &data[frame.range()];
    let (output_filename, output_path) = write_payload(dest, &name, payload, opts.collision)?;
    Ok(Extraction {
        output_filename,
        output_path,
        offset: frame.offset,
        len: payload.len(),
    })
}

/// Write `payload` as `dest/name` under `policy`. Returns the name and path actually used.
fn write_payload(
    dest: &Path,
    name: &str,
    payload: &[u8],
    policy: CollisionPolicy,
) -> Result<(String, PathBuf), ExtractError> {
    let path = dest.join(name);
    match policy {
        CollisionPolicy::Overwrite => {
            write_to(File::create(&path)?, payload)?;
            Ok((name.to_string(), path))
        }
        CollisionPolicy::Fail => match create_new(&path) {
            Ok(file) => {
                write_to(file, payload)?;
                Ok((name.to_string(), path))
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Err(ExtractError::Collision(path)),
            Err(e) => Err(e.into()),
        },
        CollisionPolicy::Rename => {
            for n in 0..=MAX_RENAME_ATTEMPTS {
                let candidate = if n == 0 { name.to_string() } else { numbered_name(name, n) };
                let candidate_path = dest.join(&candidate);
                match create_new(&candidate_path) {
                    Ok(file) => {
                        write_to(file, payload)?;
                        return Ok((candidate, candidate_path));
                    }
                    Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
                    Err(e) => return Err(e.into()),
                }
            }
            Err(ExtractError::Collision(path))
        }
    }
}

#[inline]
fn create_new(path: &Path) -> io::Result<File> {
    OpenOptions::new().write(true).create_new(true).open(path)
}

/// Write all bytes and flush; the handle is dropped (closed) on return either way.
fn write_to(mut file: File, payload: &[u8]) -> io::Result<()> {
    file.write_all(payload)?;
    file.flush()
}
