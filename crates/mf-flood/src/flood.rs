use std::time::Instant;

use log::info;
use mf_composite::{apply_alpha, generate_average_color_image};
use mf_core::{Error, PixelBuffer};
use mf_pyr::MipPlan;

use crate::report::{StackReport, StageTiming, elapsed_ms};
use crate::stack::stack_mip_levels;
use crate::validate::check_inputs;

/// Dilated image plus how it was produced.
#[derive(Debug, Clone)]
pub struct FloodResult {
    /// Opaque `Rgba` image at the input resolution.
    pub image: PixelBuffer,
    pub level_count: usize,
    pub stack: StackReport,
    pub stages: Vec<StageTiming>,
}

/// Floods `color` outward from the coverage in `alpha`.
///
/// `alpha` carries coverage in its R channel, replicated into G and B.
/// Inputs must share a power-of-two resolution; otherwise the validation
/// error is returned and nothing is computed.
pub fn flood(color: &PixelBuffer, alpha: &PixelBuffer) -> Result<FloodResult, Error> {
    check_inputs(color.dimensions(), alpha.dimensions())?;

    let plan = MipPlan::new(color.width(), color.height());
    info!("mip levels: {}", plan.len());

    let mut stages = Vec::with_capacity(3);

    let start = Instant::now();
    let mut accumulator = generate_average_color_image(color);
    stages.push(StageTiming::new("average_fill", elapsed_ms(start)));

    let start = Instant::now();
    let masked = apply_alpha(color, alpha)?;
    stages.push(StageTiming::new("apply_alpha", elapsed_ms(start)));

    let stack = stack_mip_levels(&mut accumulator, &masked, alpha, &plan)?;
    stages.push(StageTiming::new("stack_mip_levels", stack.elapsed_ms));
    info!(
        "stacked {} levels in {:.3} ms",
        stack.passes, stack.elapsed_ms
    );

    Ok(FloodResult {
        image: accumulator,
        level_count: plan.len(),
        stack,
        stages,
    })
}
