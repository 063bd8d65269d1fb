//! CLI for ctexrip: pull the embedded images out of a Godot 4 project's import cache.

#![cfg(feature = "cli")]

use clap::{Parser, ValueEnum};
use ctexrip::project::{
    count_with_extension, find_containers, find_project_root, imported_dir, DEFAULT_OUTPUT_DIR,
    SAMPLE_EXT, TEXTURE_EXT,
};
use ctexrip::{
    display_name, extract_batch, BatchItem, BatchSummary, CollisionPolicy, ExtractOptions,
    ExtractionResult,
};
use indexmap::IndexMap;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Failing names listed in the summary before eliding the rest.
const MAX_LISTED_FAILURES: usize = 5;
/// Output directory entries listed after a run.
const MAX_LISTED_OUTPUTS: usize = 10;

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

#[derive(Clone, Copy, ValueEnum)]
enum OnCollision {
    /// Replace the existing file (last one wins)
    Overwrite,
    /// Report the container as failed
    Fail,
    /// Write name-1.ext, name-2.ext, ...
    Rename,
}

impl From<OnCollision> for CollisionPolicy {
    fn from(v: OnCollision) -> Self {
        match v {
            OnCollision::Overwrite => CollisionPolicy::Overwrite,
            OnCollision::Fail => CollisionPolicy::Fail,
            OnCollision::Rename => CollisionPolicy::Rename,
        }
    }
}

#[derive(Parser)]
#[command(name = "ctexrip")]
#[command(version, about = "Extract images from a Godot 4 project's .ctex import cache", long_about = None)]
struct Args {
    /// Godot project directory (contains project.godot or .godot/)
    #[arg(default_value = ".")]
    project: PathBuf,

    /// Output directory (default: <project>/extracted_images)
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// What to do when two textures map to the same output name
    #[arg(long, value_enum, default_value = "overwrite")]
    on_collision: OnCollision,

    /// Replace characters that are invalid in file names (<>:"/\|?*) with '_'
    #[arg(long)]
    sanitize: bool,

    /// Output JSON per container (one line each unless --pretty), then a summary object
    #[arg(long)]
    json: bool,

    /// Pretty-print JSON (use with --json)
    #[arg(long)]
    pretty: bool,

    /// Quiet: only print failures and the summary
    #[arg(short, long)]
    quiet: bool,

    /// Verbose logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "ctexrip=debug" } else { "ctexrip=info" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let Some(root) = find_project_root(&args.project) else {
        eprintln!("Not a Godot project: {}", args.project.display());
        eprintln!("  expected a project.godot file or a .godot directory");
        std::process::exit(1);
    };
    tracing::info!(project = %root.display(), "found Godot project");

    let output = match &args.output {
        Some(dir) => dir.clone(),
        None => root.join(DEFAULT_OUTPUT_DIR),
    };
    fs::create_dir_all(&output)?;
    let output = output.canonicalize()?;
    tracing::info!(output = %output.display(), "output directory");

    let imported = imported_dir(&root);
    if !imported.is_dir() {
        eprintln!("Import cache not found: {}", imported.display());
        eprintln!("  open the project in the Godot 4 editor once to generate it");
        std::process::exit(1);
    }

    let textures = find_containers(&imported, TEXTURE_EXT)?;
    let samples = count_with_extension(&imported, SAMPLE_EXT)?;
    if textures.is_empty() && samples == 0 {
        eprintln!("No imported resources found in {}", imported.display());
        std::process::exit(1);
    }
    if !args.json {
        println!("Found {} texture file(s) (.{})", textures.len(), TEXTURE_EXT);
        println!("Found {} audio file(s) (.{})", samples, SAMPLE_EXT);
        println!();
    }

    let opts = ExtractOptions {
        collision: args.on_collision.into(),
        sanitize_names: args.sanitize,
    };
    let items = extract_batch(&textures, &output, &opts);
    let summary = BatchSummary::from_items(&items);

    if args.json {
        print_json(&items, &summary, &args)?;
    } else {
        print_items(&items, &args);
        print_summary(&summary, &output)?;
    }
    Ok(())
}

fn print_items(items: &[BatchItem<PathBuf>], args: &Args) {
    let n = items.len();
    for (i, item) in items.iter().enumerate() {
        match &item.result {
            ExtractionResult::Extracted(e) => {
                if !args.quiet {
                    println!("[{}/{}] ok {}", i + 1, n, e.output_filename);
                }
            }
            ExtractionResult::Failed { reason, .. } => {
                println!("[{}/{}] FAILED {}: {}", i + 1, n, display_name(&item.source), reason);
            }
        }
    }
}

fn print_summary(summary: &BatchSummary, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    println!();
    println!("Succeeded: {}/{}", summary.succeeded, summary.total);
    println!("Failed:    {}/{}", summary.failed, summary.total);
    if !summary.failed_sources.is_empty() {
        println!();
        println!("Failed files:");
        for name in summary.failed_sources.iter().take(MAX_LISTED_FAILURES) {
            println!("  - {}", name);
        }
        if summary.failed_sources.len() > MAX_LISTED_FAILURES {
            println!("  ... and {} more", summary.failed_sources.len() - MAX_LISTED_FAILURES);
        }
    }
    println!();
    println!("Images written to: {}", output.display());

    let mut entries: Vec<String> = fs::read_dir(output)?
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    entries.sort();
    if !entries.is_empty() {
        println!("Files in directory ({}):", entries.len());
        for name in entries.iter().take(MAX_LISTED_OUTPUTS) {
            println!("  - {}", name);
        }
        if entries.len() > MAX_LISTED_OUTPUTS {
            println!("  ... and {} more", entries.len() - MAX_LISTED_OUTPUTS);
        }
    }
    Ok(())
}

fn print_json(
    items: &[BatchItem<PathBuf>],
    summary: &BatchSummary,
    args: &Args,
) -> Result<(), Box<dyn std::error::Error>> {
    for item in items {
        if args.quiet && item.result.is_success() {
            continue;
        }
        let mut out = IndexMap::<String, serde_json::Value>::new();
        out.insert("source".to_string(), serde_json::Value::String(display_name(&item.source)));
        match &item.result {
            ExtractionResult::Extracted(e) => {
                // Hash what landed on disk, not the in-memory slice.
                let sha256 = fs::read(&e.output_path).ok().map(|b| sha256_hex(&b));
                out.insert("status".to_string(), serde_json::Value::String("extracted".into()));
                out.insert("output".to_string(), serde_json::Value::String(e.output_filename.clone()));
                out.insert("offset".to_string(), serde_json::to_value(e.offset)?);
                out.insert("size_bytes".to_string(), serde_json::to_value(e.len)?);
                out.insert("sha256".to_string(), serde_json::to_value(&sha256)?);
            }
            ExtractionResult::Failed { kind, reason } => {
                out.insert("status".to_string(), serde_json::Value::String("failed".into()));
                out.insert("kind".to_string(), serde_json::to_value(kind)?);
                out.insert("reason".to_string(), serde_json::Value::String(reason.clone()));
            }
        }
        println!("{}", to_json(&out, args.pretty)?);
    }
    println!("{}", to_json(summary, args.pretty)?);
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
