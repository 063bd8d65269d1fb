//! Sequential batch extraction over many containers.
//!
//! Every container gets exactly one result; a failure never stops the batch.
//! Counting happens afterwards via [`BatchSummary::from_items`].

use std::path::{Path, PathBuf};

use crate::extract::{extract_file, ExtractOptions};
use crate::result::{display_name, BatchItem, BatchSummary, ExtractionResult};

/// Extract every container in `paths` into `dest`, in order.
pub fn extract_batch<I, P>(paths: I, dest: &Path, opts: &ExtractOptions) -> Vec<BatchItem<PathBuf>>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    paths
        .into_iter()
        .map(|p| {
            let source = p.as_ref().to_path_buf();
            let result = extract_file(&source, dest, opts);
            log_result(&source, &result);
            BatchItem { source, result }
        })
        .collect()
}

/// Extract and summarize in one call.
pub fn extract_batch_summary<I, P>(
    paths: I,
    dest: &Path,
    opts: &ExtractOptions,
) -> (Vec<BatchItem<PathBuf>>, BatchSummary)
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let items = extract_batch(paths, dest, opts);
    let summary = BatchSummary::from_items(&items);
    tracing::debug!(
        total = summary.total,
        succeeded = summary.succeeded,
        failed = summary.failed,
        "batch finished"
    );
    (items, summary)
}

fn log_result(source: &Path, result: &ExtractionResult) {
    match result {
        ExtractionResult::Extracted(e) => tracing::debug!(
            container = %display_name(source),
            output = %e.output_filename,
            offset = e.offset,
            bytes = e.len,
            "extracted"
        ),
        ExtractionResult::Failed { kind, reason } => tracing::warn!(
            container = %display_name(source),
            ?kind,
            %reason,
            "extraction failed"
        ),
    }
}
