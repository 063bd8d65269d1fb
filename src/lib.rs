//! # ctexrip
//!
//! Recover the images embedded in Godot 4 compressed texture containers (`.ctex`).
//!
//! The import pipeline stores lossless/lossy textures as a RIFF/WebP stream inside a
//! `GST2` container. This crate finds that stream with a literal `RIFF` search,
//! validates the `RIFF <size> WEBP` header and its bounds, and writes the exact
//! byte range `[marker, marker + 8 + size)` to disk under the texture's original
//! name (`sprite.png-<hash>.ctex` becomes `sprite.png`).
//!
//! ## Format contract
//!
//! ```text
//! "RIFF" | size: u32 little-endian | "WEBP" | size - 4 bytes of chunks
//! ```
//!
//! Marker hits that fail the form-type or bounds check are skipped and the search
//! resumes one byte later; the first valid frame wins. The payload is never decoded.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use ctexrip::{extract_file, ExtractOptions, ExtractionResult};
//!
//! let r = extract_file(
//!     Path::new("game/.godot/imported/icon.svg-218a8f2b3041327d8a5756f3a245f83b.ctex"),
//!     Path::new("out"),
//!     &ExtractOptions::default(),
//! );
//! match r {
//!     ExtractionResult::Extracted(e) => println!("wrote {}", e.output_filename),
//!     ExtractionResult::Failed { reason, .. } => eprintln!("failed: {}", reason),
//! }
//! ```
//!
//! ## Batches
//!
//! [`extract_batch`] processes containers one at a time and returns one
//! [`BatchItem`] per input; [`BatchSummary::from_items`] counts the outcomes.
//! Nothing in the extraction path prints; reporting is the caller's job.

mod error;
mod result;
pub mod batch;
pub mod extract;
pub mod naming;
pub mod project;
pub mod riff;

pub use batch::{extract_batch, extract_batch_summary};
pub use error::ExtractError;
pub use extract::{
    extract, extract_file, extract_frame, try_extract, try_extract_file, CollisionPolicy,
    ExtractOptions,
};
pub use naming::{derive_output_name, sanitize_file_name};
pub use result::{
    display_name, BatchItem, BatchSummary, Extraction, ExtractionResult, FailureKind,
};
pub use riff::{locate_frame, Frame, SignatureScanner};

/// Whether `data` holds a structurally valid RIFF/WebP frame anywhere.
#[inline]
pub fn contains_webp(data: &[u8]) -> bool {
    locate_frame(data).is_ok()
}
