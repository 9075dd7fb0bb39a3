use mf_core::{Error, PixelBuffer};

/// Source-over blend of `src` onto `dst` in place.
///
/// Per channel `dst = src * a + dst * (1 - a)` with `a` the source alpha,
/// rounded to the nearest integer; destination alpha accumulates the same way.
/// A fully opaque source replaces `dst` exactly and a transparent one leaves it
/// untouched. `Rgb` sources are opaque; `Rgb` destinations drop the alpha.
pub fn composite_over(dst: &mut PixelBuffer, src: &PixelBuffer) -> Result<(), Error> {
    dst.ensure_same_size(src)?;

    let dst_bpp = dst.layout().channels();
    let src_bpp = src.layout().channels();
    let dst_has_alpha = dst.layout().has_alpha();
    for y in 0..src.height() {
        let src_row = src.row(y);
        let dst_row = dst.row_mut(y);
        for (d, s) in dst_row
            .chunks_exact_mut(dst_bpp)
            .zip(src_row.chunks_exact(src_bpp))
        {
            let a = if src_bpp == 4 { s[3] as u32 } else { 255 };
            match a {
                0 => continue,
                255 => d[..3].copy_from_slice(&s[..3]),
                _ => {
                    let inv = 255 - a;
                    for i in 0..3 {
                        d[i] = ((s[i] as u32 * a + d[i] as u32 * inv + 127) / 255) as u8;
                    }
                }
            }
            if dst_has_alpha {
                d[3] = (a + (d[3] as u32 * (255 - a) + 127) / 255) as u8;
            }
        }
    }
    Ok(())
}
