use mf_core::{Error, Layout, PixelBuffer};
use rayon::prelude::*;

/// Maps pixel pairs of two equally sized buffers into a fresh `Rgba` buffer.
///
/// Rows are independent and are processed on the rayon pool; the call returns
/// once every row is written.
pub(crate) fn par_zip_pixels<F>(
    color: &PixelBuffer,
    mask: &PixelBuffer,
    op: F,
) -> Result<PixelBuffer, Error>
where
    F: Fn(&[u8], &[u8], &mut [u8]) + Sync,
{
    color.ensure_same_size(mask)?;

    let mut out = PixelBuffer::new(color.width(), color.height(), Layout::Rgba);
    if out.width() == 0 || out.height() == 0 {
        return Ok(out);
    }

    let stride = out.stride();
    let color_bpp = color.layout().channels();
    let mask_bpp = mask.layout().channels();
    out.data_mut()
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, dst_row)| {
            let color_row = color.row(y);
            let mask_row = mask.row(y);
            for ((dst, c), m) in dst_row
                .chunks_exact_mut(4)
                .zip(color_row.chunks_exact(color_bpp))
                .zip(mask_row.chunks_exact(mask_bpp))
            {
                op(c, m, dst);
            }
        });

    Ok(out)
}
