//! Foundational pixel types for mip-flooding texture dilation.
//!
//! ## Buffers and Stride
//! `PixelBuffer` owns 8-bit pixels in R,G,B(,A) byte order. `stride` is the
//! distance, in bytes, between adjacent row starts and may exceed
//! `width * channels` so decoder output with padded rows can be adopted as is.
//!
//! ## Sampling Coordinates
//! Sampling uses pixel-center coordinates where integer coordinates refer to
//! pixel centers. Nearest-neighbor rounds to the closest pixel; bilinear uses
//! the floor-based 2x2 neighborhood. Borders clamp.

mod buffer;
mod color;
mod error;
mod sample;

pub use buffer::{Layout, PixelBuffer, PixelView};
pub use color::Rgb;
pub use error::Error;
pub use sample::{sample_bilinear, sample_nearest};
