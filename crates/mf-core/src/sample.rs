use crate::buffer::{Layout, PixelView};

/// Samples the pixel closest to `(x, y)`, clamping at the borders.
pub fn sample_nearest(img: &PixelView<'_>, x: f32, y: f32) -> [u8; 4] {
    assert!(
        img.width() > 0 && img.height() > 0,
        "cannot sample an empty image"
    );

    let xi = clamp_index(x.round() as isize, img.width());
    let yi = clamp_index(y.round() as isize, img.height());
    texel(img, xi, yi)
}

/// Bilinear sample at `(x, y)` per channel, clamping at the borders.
///
/// `Rgb` views report an alpha of 255.
pub fn sample_bilinear(img: &PixelView<'_>, x: f32, y: f32) -> [f32; 4] {
    assert!(
        img.width() > 0 && img.height() > 0,
        "cannot sample an empty image"
    );

    let x0 = x.floor() as isize;
    let y0 = y.floor() as isize;
    let dx = x - x0 as f32;
    let dy = y - y0 as f32;

    let xa = clamp_index(x0, img.width());
    let xb = clamp_index(x0 + 1, img.width());
    let ya = clamp_index(y0, img.height());
    let yb = clamp_index(y0 + 1, img.height());

    let p00 = texel(img, xa, ya);
    let p10 = texel(img, xb, ya);
    let p01 = texel(img, xa, yb);
    let p11 = texel(img, xb, yb);

    let mut out = [0.0f32; 4];
    for (c, v) in out.iter_mut().enumerate() {
        let top = p00[c] as f32 * (1.0 - dx) + p10[c] as f32 * dx;
        let bottom = p01[c] as f32 * (1.0 - dx) + p11[c] as f32 * dx;
        *v = top * (1.0 - dy) + bottom * dy;
    }
    out
}

fn clamp_index(i: isize, len: usize) -> usize {
    if i < 0 { 0 } else { (i as usize).min(len - 1) }
}

#[inline]
fn texel(img: &PixelView<'_>, x: usize, y: usize) -> [u8; 4] {
    let row = img.row(y);
    match img.layout() {
        Layout::Rgb => {
            let i = x * 3;
            [row[i], row[i + 1], row[i + 2], 255]
        }
        Layout::Rgba => {
            let i = x * 4;
            [row[i], row[i + 1], row[i + 2], row[i + 3]]
        }
    }
}
