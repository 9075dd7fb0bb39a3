//! Resampling and mip planning for the flood stack.
//!
//! Reduction policy:
//! - `Filter::Bilinear` reduces by exact 2x mean steps while the remaining
//!   factor along an axis is at least 2, then finishes with one bilinear pass.
//! - Odd trailing rows/columns are dropped by a 2x step.
//! - `Filter::NearestNeighbor` copies the source pixel whose center is
//!   closest, so upsampled levels keep hard block boundaries.
//!
//! Level policy:
//! - The level count is `round(log2(shortest side))`.
//! - Level `l` is reduced by `2^l`, clamped to at least 1x1, so the last
//!   (finest) level is the base resolution.

mod plan;
mod resize;

pub use plan::{MipLevel, MipPlan, level_count};
pub use resize::{Filter, resize};
