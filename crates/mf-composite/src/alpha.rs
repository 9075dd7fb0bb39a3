//! Premultiply, un-premultiply and channel reassembly.
//!
//! Mask planes carry their coverage in the R channel (grey masks replicate
//! it into G and B). Every output is an opaque-or-masked `Rgba` buffer.

use mf_core::{Error, PixelBuffer};

use crate::rows::par_zip_pixels;

/// Premultiplies `color` by the mask in `alpha`: `rgb * a / 255`, alpha 255.
pub fn apply_alpha(color: &PixelBuffer, alpha: &PixelBuffer) -> Result<PixelBuffer, Error> {
    par_zip_pixels(color, alpha, |c, m, out| {
        let a = m[0] as u32;
        for i in 0..3 {
            out[i] = (c[i] as u32 * a / 255) as u8;
        }
        out[3] = 255;
    })
}

/// Reverses a premultiply after both planes were resampled together.
///
/// Each channel becomes `min(255, c * 255 / m)`; a zero mask channel yields 0.
pub fn normalize_color(color: &PixelBuffer, mask: &PixelBuffer) -> Result<PixelBuffer, Error> {
    par_zip_pixels(color, mask, |c, m, out| {
        for i in 0..3 {
            out[i] = match m[i] {
                0 => 0,
                mv => (c[i] as u32 * 255 / mv as u32).min(255) as u8,
            };
        }
        out[3] = 255;
    })
}

/// RGB from `color_map`, alpha from the mask's coverage channel.
pub fn combine_color_and_alpha(
    color_map: &PixelBuffer,
    mask: &PixelBuffer,
) -> Result<PixelBuffer, Error> {
    par_zip_pixels(color_map, mask, |c, m, out| {
        out[..3].copy_from_slice(&c[..3]);
        out[3] = m[0];
    })
}
