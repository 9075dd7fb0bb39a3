//! Mip-flooding texture dilation.
//!
//! Transparent regions of a power-of-two texture are filled with color bled in
//! from coarser mip levels, so later mip generation or block compression does
//! not pull dark fringes in from empty texels.
//!
//! Stages:
//! 1. Validate: color and alpha share a power-of-two resolution.
//! 2. Plan: `round(log2(shortest side))` levels.
//! 3. Seed: a flat image of the mean non-black color.
//! 4. Premultiply the color by the mask.
//! 5. Stack: for each level, coarsest first, reduce, un-premultiply, reattach
//!    coverage, enlarge with nearest-neighbor and composite over the seed.
//!
//! [`flood`] runs stages on in-memory buffers; [`run_mip_flooding`] adds
//! decoding, encoding and size reporting; [`run_batch`] handles directories.

mod batch;
mod error;
mod flood;
mod format;
pub mod io;
mod pipeline;
mod report;
mod stack;
mod validate;

pub use batch::{
    BatchEntry, BatchOptions, BatchStatus, collect_color_files, match_mask, output_path_for,
    run_batch,
};
pub use error::PipelineError;
pub use flood::{FloodResult, flood};
pub use format::OutputFormat;
pub use pipeline::{FloodOutcome, Rejection, run_mip_flooding, run_with_format};
pub use report::{FloodReport, LevelReport, StackReport, StageTiming, size_reduction_percent};
pub use stack::stack_mip_levels;
pub use validate::{check_inputs, is_power_of_two, validate};
