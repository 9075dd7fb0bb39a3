//! Pixel-wise compositing for mip flooding.
//!
//! Premultiply, un-premultiply and channel reassembly run row-parallel on the
//! rayon pool and always allocate a fresh `Rgba` result. `composite_over` is
//! the only in-place operation and runs on the calling thread.
//!
//! All arithmetic is 8-bit integer: `apply_alpha` truncates `c * a / 255`,
//! `normalize_color` truncates `c * 255 / m` and saturates at 255, so a fully
//! opaque mask round-trips exactly.

mod alpha;
mod average;
mod over;
mod rows;

pub use alpha::{apply_alpha, combine_color_and_alpha, normalize_color};
pub use average::{average_color, generate_average_color_image};
pub use over::composite_over;
