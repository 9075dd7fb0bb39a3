#![allow(dead_code)]

use std::path::Path;

use image::{GrayImage, Luma};
use mf_core::{Layout, PixelBuffer};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Texture whose every pixel differs from its neighbours.
pub fn gradient(width: usize, height: usize) -> PixelBuffer {
    let mut img = PixelBuffer::new(width, height, Layout::Rgb);
    for y in 0..height {
        for x in 0..width {
            let px = [
                ((x * 31 + y * 17) % 251) as u8,
                ((x * 7 + y * 53) % 256) as u8,
                ((x * x + 3 * y) % 256) as u8,
                255,
            ];
            img.set_pixel(x, y, px).expect("in range");
        }
    }
    img
}

/// Grey mask replicated into RGB, filled from `coverage(x, y)`.
pub fn mask(width: usize, height: usize, coverage: impl Fn(usize, usize) -> u8) -> PixelBuffer {
    let mut img = PixelBuffer::new(width, height, Layout::Rgb);
    for y in 0..height {
        for x in 0..width {
            let v = coverage(x, y);
            img.set_pixel(x, y, [v, v, v, 255]).expect("in range");
        }
    }
    img
}

/// Red left half with full coverage, black transparent right half.
pub fn half_red(side: usize) -> (PixelBuffer, PixelBuffer) {
    let mut color = PixelBuffer::new(side, side, Layout::Rgb);
    for y in 0..side {
        for x in 0..side / 2 {
            color.set_pixel(x, y, [255, 0, 0, 255]).expect("in range");
        }
    }
    let alpha = mask(side, side, |x, _| if x < side / 2 { 255 } else { 0 });
    (color, alpha)
}

pub fn write_color(path: &Path, img: &PixelBuffer) {
    mf_flood::io::to_dynamic(img)
        .expect("encodable buffer")
        .to_rgb8()
        .save(path)
        .expect("write color fixture");
}

pub fn write_mask(path: &Path, width: u32, height: u32, coverage: impl Fn(u32, u32) -> u8) {
    let gray = GrayImage::from_fn(width, height, |x, y| Luma([coverage(x, y)]));
    gray.save(path).expect("write mask fixture");
}
