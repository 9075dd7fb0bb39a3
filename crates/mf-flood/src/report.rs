use std::path::PathBuf;

use serde::Serialize;

use crate::format::OutputFormat;

/// Timing entry for one pipeline stage.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// One composite pass of the flood stack.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelReport {
    pub level: usize,
    pub factor: usize,
    pub width: usize,
    pub height: usize,
    pub elapsed_ms: f64,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StackReport {
    /// Composite-over passes applied to the accumulator.
    pub passes: usize,
    pub levels: Vec<LevelReport>,
    pub elapsed_ms: f64,
}

/// Summary of a written flood run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FloodReport {
    pub color_path: PathBuf,
    pub alpha_path: PathBuf,
    pub output_path: PathBuf,
    pub format: OutputFormat,
    pub width: usize,
    pub height: usize,
    pub input_bytes: u64,
    pub output_bytes: u64,
    /// `(input - output) * 100 / input`; negative when the output grew.
    pub size_reduction_percent: f64,
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
    pub stack: StackReport,
}

pub fn size_reduction_percent(input_bytes: u64, output_bytes: u64) -> f64 {
    if input_bytes == 0 {
        return 0.0;
    }
    (input_bytes as f64 - output_bytes as f64) * 100.0 / input_bytes as f64
}

pub(crate) fn megabytes(bytes: u64) -> f64 {
    bytes as f64 / (1u64 << 20) as f64
}

pub(crate) fn elapsed_ms(start: std::time::Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
