/// PNG thumbnail → JPEG replacement
///
/// For every candidate the original is moved aside to `{base}(old).png`,
/// then decoded, flattened to RGB, stretched to the target size and
/// written as `{base}.jpg` in the same directory.

use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageReader, ImageResult, RgbImage};
use jpeg_encoder::{ColorType, Encoder};
use std::fs;
use std::path::{Path, PathBuf};

use super::filter::is_candidate;
use super::walker::walk_files;
use crate::error::ConvertError;
use crate::state::config::ConvertConfig;
use crate::state::data::{CandidateFile, FileOutcome, RunSummary};

/// Convert every thumbnail PNG under `root`.
///
/// A failure on one file is reported and recorded, then the walk moves on.
/// Nothing is rolled back: if the rename succeeded but the conversion did
/// not, the original stays under its "(old)" name.
pub fn convert_tree(root: &Path, config: &ConvertConfig) -> RunSummary {
    let mut summary = RunSummary::default();

    println!("🔍 Scanning folder: {}", root.display());

    for (dir, file_name) in walk_files(root) {
        if !is_candidate(&file_name) {
            continue;
        }

        let candidate = CandidateFile::new(dir, file_name);
        let source = candidate.path();

        match convert_file(&candidate, config) {
            Ok(jpg) => {
                println!("✔ {} → {}", source.display(), jpg.display());
                summary.record(FileOutcome::Converted { source, jpg });
            }
            Err(e) => {
                eprintln!("✖ Error {}: {}", source.display(), e);
                summary.record(FileOutcome::Failed {
                    source,
                    error: e.to_string(),
                });
            }
        }
    }

    println!(
        "✅ Conversion complete: {} converted, {} failed",
        summary.converted_count(),
        summary.failed_count()
    );

    summary
}

/// Rename one candidate and write its JPEG replacement.
/// Returns the path of the new JPEG.
pub fn convert_file(
    candidate: &CandidateFile,
    config: &ConvertConfig,
) -> Result<PathBuf, ConvertError> {
    let old_png_path = candidate.old_png_path();
    rename_original(&candidate.path(), &old_png_path)?;

    let thumbnail = load_thumbnail(&old_png_path, config)?;

    let jpg_path = candidate.jpg_path();
    write_jpeg(&thumbnail, &jpg_path, config)?;

    Ok(jpg_path)
}

/// Move the original out of the way without ever replacing another file
fn rename_original(from: &Path, to: &Path) -> Result<(), ConvertError> {
    // fs::rename silently replaces the destination on Unix
    if fs::symlink_metadata(to).is_ok() {
        return Err(ConvertError::DestinationExists {
            destination: to.to_path_buf(),
        });
    }

    fs::rename(from, to).map_err(|source| ConvertError::Rename {
        destination: to.to_path_buf(),
        source,
    })
}

/// Decode, drop alpha/palette, and stretch to exactly the target size
fn load_thumbnail(path: &Path, config: &ConvertConfig) -> Result<RgbImage, ConvertError> {
    let rgb = decode(path)
        .map_err(|source| ConvertError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgb8();

    let (width, height) = config.target_size();
    Ok(imageops::resize(&rgb, width, height, FilterType::Lanczos3))
}

/// Sniff the format from the file contents rather than trusting the extension
fn decode(path: &Path) -> ImageResult<DynamicImage> {
    ImageReader::open(path)?.with_guessed_format()?.decode()
}

/// Encode as JPEG and write it, replacing any existing file at `path`
fn write_jpeg(
    pixels: &RgbImage,
    path: &Path,
    config: &ConvertConfig,
) -> Result<(), ConvertError> {
    let mut buf = Vec::new();
    let mut encoder = Encoder::new(&mut buf, config.quality);
    encoder.set_optimized_huffman_tables(config.optimize);
    encoder
        .encode(pixels.as_raw(), config.width, config.height, ColorType::Rgb)
        .map_err(|source| ConvertError::Encode {
            path: path.to_path_buf(),
            source,
        })?;

    fs::write(path, &buf).map_err(|source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    })
}
