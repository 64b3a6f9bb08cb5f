//! High-level library API: watermark a single file, enumerate the images of a
//! directory, and batch-process a directory into sequentially named outputs.
//! Prefer these entrypoints over the `core` modules when embedding the crate.
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use rand::Rng;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::core::params::{WatermarkParams, WatermarkRequest};
use crate::core::render::Watermarker;
use crate::error::Result;
use crate::io::{DEFAULT_OUTPUT_DIR_NAME, batch_output_name, is_supported_image};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    /// Regular files without a supported image extension
    pub skipped: usize,
    pub errors: usize,
}

/// Watermark one file with a fresh `Watermarker` (font resolved, RNG seeded from the OS).
pub fn watermark_file(request: &WatermarkRequest) -> Result<PathBuf> {
    Watermarker::new(request.params.font.as_deref()).watermark_file(request)
}

struct Scan {
    images: Vec<PathBuf>,
    skipped: usize,
}

fn scan_directory(input_dir: &Path) -> Result<Scan> {
    let mut images: Vec<(PathBuf, SystemTime)> = Vec::new();
    let mut skipped = 0;

    for entry in WalkDir::new(input_dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if !is_supported_image(entry.path()) {
            debug!("Skipping non-image file: {:?}", entry.path());
            skipped += 1;
            continue;
        }
        let modified = entry
            .metadata()
            .ok()
            .and_then(|m| m.modified().ok())
            .unwrap_or(SystemTime::UNIX_EPOCH);
        images.push((entry.into_path(), modified));
    }

    // stable: equal mtimes keep walk order
    images.sort_by_key(|(_, modified)| *modified);
    Ok(Scan {
        images: images.into_iter().map(|(path, _)| path).collect(),
        skipped,
    })
}

/// All supported images under `input_dir` (recursive), oldest modification time first.
pub fn collect_image_files(input_dir: &Path) -> Result<Vec<PathBuf>> {
    Ok(scan_directory(input_dir)?.images)
}

/// Batch-process `input_dir` with a fresh `Watermarker` built from `params`.
pub fn process_directory(
    input_dir: &Path,
    output_dir: Option<&Path>,
    params: &WatermarkParams,
) -> Result<BatchReport> {
    let mut watermarker = Watermarker::new(params.font.as_deref());
    process_directory_with(&mut watermarker, input_dir, output_dir, params)
}

/// Watermark every image under `input_dir` into `output_dir` (default
/// `<input_dir>/watermarked`) as `1.<ext>`, `2.<ext>`, ... in modification-time order.
/// Per-file failures are logged and counted; only enumeration or output directory
/// creation failures abort the batch.
pub fn process_directory_with<R: Rng>(
    watermarker: &mut Watermarker<R>,
    input_dir: &Path,
    output_dir: Option<&Path>,
    params: &WatermarkParams,
) -> Result<BatchReport> {
    let scan = scan_directory(input_dir)?;

    let output_dir = output_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| input_dir.join(DEFAULT_OUTPUT_DIR_NAME));
    fs::create_dir_all(&output_dir)?;

    info!("Starting batch processing from directory: {:?}", input_dir);
    info!("Output directory: {:?}", output_dir);

    let mut report = BatchReport {
        skipped: scan.skipped,
        ..Default::default()
    };

    for (i, path) in scan.images.iter().enumerate() {
        let output_path = output_dir.join(batch_output_name(i + 1, path));
        let request = WatermarkRequest::new(path, Some(output_path), params.clone());

        match watermarker.watermark_file(&request) {
            Ok(_) => report.processed += 1,
            Err(e) => {
                warn!("Error processing {:?}: {}", path, e);
                report.errors += 1;
            }
        }
    }

    info!("Batch processing complete!");
    info!("Processed: {}", report.processed);
    info!("Skipped: {}", report.skipped);
    info!("Errors: {}", report.errors);
    Ok(report)
}
