use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{error, info};

use crate::error::PipelineError;
use crate::flood::flood;
use crate::format::OutputFormat;
use crate::io::{file_size, load_alpha, load_color, save_image};
use crate::report::{FloodReport, StageTiming, elapsed_ms, megabytes, size_reduction_percent};
use crate::validate::check_inputs;

/// Why a run stopped without writing an output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    MissingInput(PathBuf),
    Invalid(mf_core::Error),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInput(path) => write!(f, "input does not exist: {}", path.display()),
            Self::Invalid(e) => write!(f, "{e}"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum FloodOutcome {
    Written(FloodReport),
    /// Inputs were unusable; the cause was logged and nothing was written.
    Rejected(Rejection),
}

impl FloodOutcome {
    pub fn report(&self) -> Option<&FloodReport> {
        match self {
            Self::Written(report) => Some(report),
            Self::Rejected(_) => None,
        }
    }
}

/// Floods the texture at `color_path` using the mask at `alpha_path` and
/// writes it to `output_path` in the format named by `format_token`.
///
/// An unknown format token fails before any file is touched. Missing inputs
/// and inputs that fail validation are not errors: the cause is logged and
/// [`FloodOutcome::Rejected`] is returned.
pub fn run_mip_flooding(
    color_path: impl AsRef<Path>,
    alpha_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    format_token: &str,
) -> Result<FloodOutcome, PipelineError> {
    let format = OutputFormat::from_token(format_token)?;
    run_with_format(
        color_path.as_ref(),
        alpha_path.as_ref(),
        output_path.as_ref(),
        format,
    )
}

pub fn run_with_format(
    color_path: &Path,
    alpha_path: &Path,
    output_path: &Path,
    format: OutputFormat,
) -> Result<FloodOutcome, PipelineError> {
    info!("starting mip flooding: {}", color_path.display());
    let start = Instant::now();

    for path in [color_path, alpha_path] {
        if !path.is_file() {
            let rejection = Rejection::MissingInput(path.to_path_buf());
            error!("{rejection}. Skipping...");
            return Ok(FloodOutcome::Rejected(rejection));
        }
    }

    let mut stages = Vec::new();
    let stage = Instant::now();
    let color = load_color(color_path)?;
    let alpha = load_alpha(alpha_path)?;
    stages.push(StageTiming::new("decode", elapsed_ms(stage)));

    let input_bytes = file_size(color_path)?;
    info!("input disk size: {:.2} MB", megabytes(input_bytes));

    if let Err(cause) = check_inputs(color.dimensions(), alpha.dimensions()) {
        error!("{cause} ({}). Skipping...", color_path.display());
        return Ok(FloodOutcome::Rejected(Rejection::Invalid(cause)));
    }

    let result = flood(&color, &alpha)?;
    stages.extend(result.stages);

    let stage = Instant::now();
    save_image(&result.image, output_path, format)?;
    stages.push(StageTiming::new("encode", elapsed_ms(stage)));

    let output_bytes = file_size(output_path)?;
    let reduction = size_reduction_percent(input_bytes, output_bytes);
    info!("output disk size: {:.2} MB", megabytes(output_bytes));
    info!("final image is {reduction:.2}% smaller on disk");

    let total_ms = elapsed_ms(start);
    info!("mip flooding took {:.6} seconds", total_ms / 1000.0);

    Ok(FloodOutcome::Written(FloodReport {
        color_path: color_path.to_path_buf(),
        alpha_path: alpha_path.to_path_buf(),
        output_path: output_path.to_path_buf(),
        format,
        width: result.image.width(),
        height: result.image.height(),
        input_bytes,
        output_bytes,
        size_reduction_percent: reduction,
        total_ms,
        stages,
        stack: result.stack,
    }))
}
