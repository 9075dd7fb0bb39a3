use mf_core::{Layout, PixelBuffer, Rgb};
use rayon::prelude::*;

/// Mean RGB over every pixel that is not pure black.
///
/// Black pixels count as "no data". Returns `None` when nothing but black is
/// present. Channel means truncate.
pub fn average_color(input: &PixelBuffer) -> Option<Rgb> {
    if input.width() == 0 || input.height() == 0 {
        return None;
    }

    let bpp = input.layout().channels();
    let (sum, count) = (0..input.height())
        .into_par_iter()
        .map(|y| {
            let mut sum = [0u64; 3];
            let mut count = 0u64;
            for px in input.row(y).chunks_exact(bpp) {
                let rgb = Rgb::new(px[0], px[1], px[2]);
                if rgb.is_black() {
                    continue;
                }
                sum[0] += rgb.r as u64;
                sum[1] += rgb.g as u64;
                sum[2] += rgb.b as u64;
                count += 1;
            }
            (sum, count)
        })
        .reduce(
            || ([0u64; 3], 0u64),
            |(a, na), (b, nb)| ([a[0] + b[0], a[1] + b[1], a[2] + b[2]], na + nb),
        );

    if count == 0 {
        return None;
    }
    Some(Rgb::new(
        (sum[0] / count) as u8,
        (sum[1] / count) as u8,
        (sum[2] / count) as u8,
    ))
}

/// Opaque `Rgba` image at the input's resolution filled with [`average_color`].
///
/// An all-black input produces a full-resolution opaque black image.
pub fn generate_average_color_image(input: &PixelBuffer) -> PixelBuffer {
    let fill = average_color(input).unwrap_or(Rgb::BLACK);
    PixelBuffer::new_fill(input.width(), input.height(), Layout::Rgba, fill.with_alpha(255))
}
