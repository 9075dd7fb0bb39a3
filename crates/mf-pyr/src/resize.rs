use std::borrow::Cow;

use mf_core::{PixelBuffer, PixelView, sample_bilinear, sample_nearest};

/// Sampling filter used by [`resize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    /// Smooth reduction; used for every downsample.
    Bilinear,
    /// Block-preserving; used for the upsample back to full resolution.
    NearestNeighbor,
}

/// Resamples `src` to `width x height`.
///
/// Zero target sides are clamped to 1. Reductions of 2x or more along an axis
/// are taken in exact 2x mean steps before the final bilinear pass, so a
/// power-of-two reduction averages whole source blocks.
pub fn resize(src: &PixelBuffer, width: usize, height: usize, filter: Filter) -> PixelBuffer {
    assert!(
        src.width() > 0 && src.height() > 0,
        "cannot resize an empty buffer"
    );

    let dst_w = width.max(1);
    let dst_h = height.max(1);
    if src.dimensions() == (dst_w, dst_h) {
        return src.as_view().to_buffer();
    }

    match filter {
        Filter::NearestNeighbor => resample(&src.as_view(), dst_w, dst_h, |view, x, y| {
            sample_nearest(view, x, y)
        }),
        Filter::Bilinear => {
            let mut current = Cow::Borrowed(src);
            loop {
                let halve_x = current.width() >= dst_w * 2;
                let halve_y = current.height() >= dst_h * 2;
                if !halve_x && !halve_y {
                    break;
                }
                current = Cow::Owned(halve(&current, halve_x, halve_y));
            }

            if current.dimensions() == (dst_w, dst_h) {
                return current.into_owned();
            }
            resample(&current.as_view(), dst_w, dst_h, |view, x, y| {
                sample_bilinear(view, x, y).map(|v| v.round().clamp(0.0, 255.0) as u8)
            })
        }
    }
}

/// One 2x mean step along the selected axes; odd trailing rows/columns drop.
fn halve(src: &PixelBuffer, halve_x: bool, halve_y: bool) -> PixelBuffer {
    let step_x = if halve_x { 2 } else { 1 };
    let step_y = if halve_y { 2 } else { 1 };
    let dst_w = src.width() / step_x;
    let dst_h = src.height() / step_y;
    let bpp = src.layout().channels();
    let count = (step_x * step_y) as u32;

    let mut dst = PixelBuffer::new(dst_w, dst_h, src.layout());
    for y in 0..dst_h {
        let src_row0 = src.row(y * step_y);
        let src_row1 = src.row(y * step_y + step_y - 1);
        let dst_row = dst.row_mut(y);
        for (x, out) in dst_row.chunks_exact_mut(bpp).enumerate() {
            let i0 = x * step_x * bpp;
            let i1 = i0 + (step_x - 1) * bpp;
            for (c, v) in out.iter_mut().enumerate() {
                let mut sum = src_row0[i0 + c] as u32;
                if halve_x {
                    sum += src_row0[i1 + c] as u32;
                }
                if halve_y {
                    sum += src_row1[i0 + c] as u32;
                    if halve_x {
                        sum += src_row1[i1 + c] as u32;
                    }
                }
                *v = ((sum + count / 2) / count) as u8;
            }
        }
    }
    dst
}

fn resample<F>(src: &PixelView<'_>, dst_w: usize, dst_h: usize, sample: F) -> PixelBuffer
where
    F: Fn(&PixelView<'_>, f32, f32) -> [u8; 4],
{
    let scale_x = src.width() as f32 / dst_w as f32;
    let scale_y = src.height() as f32 / dst_h as f32;
    let bpp = src.layout().channels();

    let mut dst = PixelBuffer::new(dst_w, dst_h, src.layout());
    for y in 0..dst_h {
        let sy = (y as f32 + 0.5) * scale_y - 0.5;
        let dst_row = dst.row_mut(y);
        for (x, out) in dst_row.chunks_exact_mut(bpp).enumerate() {
            let sx = (x as f32 + 0.5) * scale_x - 0.5;
            let px = sample(src, sx, sy);
            out.copy_from_slice(&px[..bpp]);
        }
    }
    dst
}
