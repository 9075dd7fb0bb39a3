//! Flooding whole directories of color/mask pairs.
//!
//! Pairs are matched by file name: `rock_C.png` pairs with `rock_A.png` and
//! is written as `<output dir>/rock_C.<ext>`. Each pair is an independent
//! pipeline run, so pairs are processed in parallel.
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::PipelineError;
use crate::format::OutputFormat;
use crate::pipeline::{FloodOutcome, run_with_format};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchOptions {
    /// Marks color textures in a file name.
    pub color_pattern: String,
    /// Replaces `color_pattern` to find the matching mask.
    pub mask_pattern: String,
    /// Replaces `color_pattern` in the output file name.
    pub output_pattern: String,
    pub format: OutputFormat,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            color_pattern: "_C".to_string(),
            mask_pattern: "_A".to_string(),
            output_pattern: "_C".to_string(),
            format: OutputFormat::Png,
        }
    }
}

#[derive(Debug)]
pub enum BatchStatus {
    Done(FloodOutcome),
    /// No mask matched the color file.
    Skipped,
    Failed(PipelineError),
}

#[derive(Debug)]
pub struct BatchEntry {
    pub color: PathBuf,
    pub status: BatchStatus,
}

/// Mask path for `color`, if the name carries the color pattern and the mask exists.
pub fn match_mask(color: &Path, options: &BatchOptions) -> Option<PathBuf> {
    let name = color.file_name()?.to_str()?;
    if !name.contains(&options.color_pattern) {
        return None;
    }
    let mask = color.with_file_name(name.replace(&options.color_pattern, &options.mask_pattern));
    mask.is_file().then_some(mask)
}

pub fn output_path_for(color: &Path, output_dir: &Path, options: &BatchOptions) -> PathBuf {
    let name = color
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let renamed = name.replace(&options.color_pattern, &options.output_pattern);
    output_dir
        .join(renamed)
        .with_extension(options.format.extension())
}

/// Files in `dir` whose name contains `pattern`, sorted by path.
pub fn collect_color_files(dir: &Path, pattern: &str) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let matches = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.contains(pattern));
        if matches && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Floods every color file that has a matching mask into `output_dir`.
///
/// Entries come back in input order.
pub fn run_batch(files: &[PathBuf], output_dir: &Path, options: &BatchOptions) -> Vec<BatchEntry> {
    info!(
        "batch flooding {} files into {}",
        files.len(),
        output_dir.display()
    );

    files
        .par_iter()
        .map(|color| {
            let status = match match_mask(color, options) {
                None => {
                    warn!("no mask for {}. Skipping...", color.display());
                    BatchStatus::Skipped
                }
                Some(mask) => {
                    let output = output_path_for(color, output_dir, options);
                    match run_with_format(color, &mask, &output, options.format) {
                        Ok(outcome) => BatchStatus::Done(outcome),
                        Err(e) => {
                            warn!("flooding {} failed: {e}", color.display());
                            BatchStatus::Failed(e)
                        }
                    }
                }
            };
            BatchEntry {
                color: color.clone(),
                status,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};

    use super::{BatchOptions, collect_color_files, match_mask, output_path_for};
    use crate::format::OutputFormat;

    #[test]
    fn output_name_swaps_pattern_and_extension() {
        let options = BatchOptions {
            output_pattern: "_F".to_string(),
            format: OutputFormat::Tiff,
            ..BatchOptions::default()
        };
        let out = output_path_for(Path::new("/in/rock_C.jpg"), Path::new("/out"), &options);
        assert_eq!(out, PathBuf::from("/out/rock_F.tif"));
    }

    #[test]
    fn masks_are_matched_by_name_in_the_same_directory() {
        let dir = tempfile::tempdir().expect("temp dir");
        let color = dir.path().join("rock_C.png");
        let lonely = dir.path().join("moss_C.png");
        fs::write(&color, b"x").expect("write");
        fs::write(&lonely, b"x").expect("write");
        fs::write(dir.path().join("rock_A.png"), b"x").expect("write");
        fs::write(dir.path().join("notes.txt"), b"x").expect("write");

        let options = BatchOptions::default();
        assert_eq!(
            match_mask(&color, &options),
            Some(dir.path().join("rock_A.png"))
        );
        assert_eq!(match_mask(&lonely, &options), None);
        assert_eq!(match_mask(&dir.path().join("notes.txt"), &options), None);

        let found = collect_color_files(dir.path(), "_C").expect("listed");
        assert_eq!(found, vec![lonely, color]);
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: BatchOptions =
            serde_json::from_str(r#"{"format":"jpeg"}"#).expect("valid json");
        assert_eq!(options.format, OutputFormat::Jpeg);
        assert_eq!(options.color_pattern, "_C");
        assert_eq!(options.mask_pattern, "_A");
    }
}
