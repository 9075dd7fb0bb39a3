//! Umbrella crate for the `mip-flooding` workspace.
//!
//! Re-exports the pixel buffers, the resampler and mip plan, the per-pixel
//! compositing operations, and the flood pipeline with its file driver.

pub use mf_composite::*;
pub use mf_core::*;
pub use mf_flood::*;
pub use mf_pyr::*;
