//! Extraction result types: per-container outcome and batch summary.

use std::path::{Path, PathBuf};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::ExtractError;

/// Failure classification for one container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FailureKind {
    /// No valid frame (signature absent, wrong form type, or truncated).
    NotFound,
    /// Read or write failure.
    Io,
    /// Output name already taken and the policy refused to replace it.
    Collision,
}

/// A payload that was written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Extraction {
    /// Name of the written file (after collision handling).
    pub output_filename: String,
    /// Full path of the written file.
    pub output_path: PathBuf,
    /// Offset of the frame in the container.
    pub offset: usize,
    /// Number of bytes written.
    pub len: usize,
}

/// Outcome of extracting one container. Never partially populated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", rename_all = "lowercase"))]
pub enum ExtractionResult {
    Extracted(Extraction),
    Failed { kind: FailureKind, reason: String },
}

impl ExtractionResult {
    /// Build a failure from an error.
    pub fn failed(err: &ExtractError) -> Self {
        ExtractionResult::Failed {
            kind: err.kind(),
            reason: err.to_string(),
        }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, ExtractionResult::Extracted(_))
    }

    pub fn extraction(&self) -> Option<&Extraction> {
        match self {
            ExtractionResult::Extracted(e) => Some(e),
            ExtractionResult::Failed { .. } => None,
        }
    }

    pub fn output_filename(&self) -> Option<&str> {
        self.extraction().map(|e| e.output_filename.as_str())
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            ExtractionResult::Failed { reason, .. } => Some(reason),
            ExtractionResult::Extracted(_) => None,
        }
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            ExtractionResult::Failed { kind, .. } => Some(*kind),
            ExtractionResult::Extracted(_) => None,
        }
    }
}

impl From<Result<Extraction, ExtractError>> for ExtractionResult {
    fn from(r: Result<Extraction, ExtractError>) -> Self {
        match r {
            Ok(e) => ExtractionResult::Extracted(e),
            Err(err) => ExtractionResult::failed(&err),
        }
    }
}

/// Result for one item in a batch (source path or id + outcome).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct BatchItem<T> {
    pub source: T,
    pub result: ExtractionResult,
}

/// Aggregated counts over a batch, computed from the items after the fact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// Display names of failed sources, in processing order.
    pub failed_sources: Vec<String>,
}

impl BatchSummary {
    /// Fold one more outcome into the summary.
    pub fn with(mut self, source_name: impl Into<String>, result: &ExtractionResult) -> Self {
        self.total += 1;
        if result.is_success() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
            self.failed_sources.push(source_name.into());
        }
        self
    }

    /// Summarize path-keyed batch items, naming failures by file name.
    pub fn from_items<P: AsRef<Path>>(items: &[BatchItem<P>]) -> Self {
        items.iter().fold(Self::default(), |acc, item| {
            acc.with(display_name(item.source.as_ref()), &item.result)
        })
    }

    #[inline]
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

/// File name of `path` for reporting, falling back to the full path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
