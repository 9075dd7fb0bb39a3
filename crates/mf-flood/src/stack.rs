use std::time::Instant;

use log::debug;
use mf_composite::{combine_color_and_alpha, composite_over, normalize_color};
use mf_core::{Error, PixelBuffer};
use mf_pyr::{Filter, MipPlan, resize};

use crate::report::{LevelReport, StackReport, elapsed_ms};

/// Lays every mip level of `masked_color` over `accumulator`, coarsest first.
///
/// `masked_color` is the premultiplied color and `alpha` the coverage mask
/// (grey replicated across R, G, B). Per level both are reduced with
/// [`Filter::Bilinear`], un-premultiplied, given the reduced coverage as alpha,
/// enlarged back with [`Filter::NearestNeighbor`] and composited source-over.
/// Exactly `plan.len()` passes run, strictly in order, on the calling thread's
/// accumulator.
pub fn stack_mip_levels(
    accumulator: &mut PixelBuffer,
    masked_color: &PixelBuffer,
    alpha: &PixelBuffer,
    plan: &MipPlan,
) -> Result<StackReport, Error> {
    masked_color.ensure_same_size(alpha)?;
    accumulator.ensure_same_size(masked_color)?;
    if accumulator.dimensions() != plan.base_dimensions() {
        return Err(Error::DimensionMismatch {
            expected: plan.base_dimensions(),
            actual: accumulator.dimensions(),
        });
    }

    let (width, height) = plan.base_dimensions();
    let start = Instant::now();
    let mut report = plan.levels().iter().try_fold(
        StackReport {
            passes: 0,
            levels: Vec::with_capacity(plan.len()),
            elapsed_ms: 0.0,
        },
        |mut report, level| {
            let level_start = Instant::now();

            let reduced_color = resize(masked_color, level.width, level.height, Filter::Bilinear);
            let reduced_alpha = resize(alpha, level.width, level.height, Filter::Bilinear);
            let normalized = normalize_color(&reduced_color, &reduced_alpha)?;
            let combined = combine_color_and_alpha(&normalized, &reduced_alpha)?;
            let layer = resize(&combined, width, height, Filter::NearestNeighbor);
            composite_over(accumulator, &layer)?;

            let elapsed = elapsed_ms(level_start);
            debug!(
                "level {} ({}x{}, factor {}) stacked in {:.3} ms",
                level.level, level.width, level.height, level.factor, elapsed
            );
            report.passes += 1;
            report.levels.push(LevelReport {
                level: level.level,
                factor: level.factor,
                width: level.width,
                height: level.height,
                elapsed_ms: elapsed,
            });
            Ok::<_, Error>(report)
        },
    )?;
    report.elapsed_ms = elapsed_ms(start);
    Ok(report)
}
