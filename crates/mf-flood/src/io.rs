//! Decoding inputs into pixel buffers and encoding the flooded output.
//!
//! - `load_color`: any decodable image as `Rgb`.
//! - `load_alpha`: any decodable image as grey coverage replicated into `Rgb`.
//! - `save_image`: encode with the requested [`OutputFormat`], creating parent
//!   directories.
use std::fs;
use std::path::Path;

use image::{DynamicImage, GrayImage, RgbImage, RgbaImage};
use mf_core::{Error, Layout, PixelBuffer};

use crate::error::PipelineError;
use crate::format::OutputFormat;

pub fn load_color(path: &Path) -> Result<PixelBuffer, PipelineError> {
    color_from_dynamic(image::open(path)?)
}

pub fn load_alpha(path: &Path) -> Result<PixelBuffer, PipelineError> {
    alpha_from_dynamic(image::open(path)?)
}

pub fn color_from_dynamic(img: DynamicImage) -> Result<PixelBuffer, PipelineError> {
    let rgb: RgbImage = img.into_rgb8();
    let (w, h) = rgb.dimensions();
    Ok(PixelBuffer::from_vec(
        w as usize,
        h as usize,
        Layout::Rgb,
        rgb.into_raw(),
    )?)
}

/// Grey coverage, converted with the decoder's luma weights when the mask is
/// stored as color.
pub fn alpha_from_dynamic(img: DynamicImage) -> Result<PixelBuffer, PipelineError> {
    let luma: GrayImage = img.into_luma8();
    let (w, h) = luma.dimensions();
    let data = luma.into_raw().into_iter().flat_map(|v| [v, v, v]).collect();
    Ok(PixelBuffer::from_vec(w as usize, h as usize, Layout::Rgb, data)?)
}

pub fn to_dynamic(img: &PixelBuffer) -> Result<DynamicImage, PipelineError> {
    let (w, h) = encoder_dimensions(img)?;
    let packed = img.to_rgba().to_packed();
    let len = packed.len();
    let rgba = RgbaImage::from_raw(w, h, packed).ok_or(Error::SizeMismatch {
        expected: img.width() * img.height() * 4,
        actual: len,
    })?;
    Ok(DynamicImage::ImageRgba8(rgba))
}

pub fn save_image(
    img: &PixelBuffer,
    path: &Path,
    format: OutputFormat,
) -> Result<(), PipelineError> {
    ensure_parent_dir(path)?;
    let dynamic = to_dynamic(img)?;
    let dynamic = if format.supports_alpha() {
        dynamic
    } else {
        DynamicImage::ImageRgb8(dynamic.to_rgb8())
    };
    dynamic.save_with_format(path, format.image_format())?;
    Ok(())
}

pub fn file_size(path: &Path) -> Result<u64, PipelineError> {
    Ok(fs::metadata(path)?.len())
}

fn encoder_dimensions(img: &PixelBuffer) -> Result<(u32, u32), Error> {
    let too_large = || Error::SizeMismatch {
        expected: u32::MAX as usize,
        actual: img.width().max(img.height()),
    };
    let w = u32::try_from(img.width()).map_err(|_| too_large())?;
    let h = u32::try_from(img.height()).map_err(|_| too_large())?;
    Ok((w, h))
}

fn ensure_parent_dir(path: &Path) -> Result<(), PipelineError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
    use mf_core::{Layout, PixelBuffer};

    use super::{alpha_from_dynamic, color_from_dynamic, to_dynamic};

    #[test]
    fn grey_mask_is_replicated_into_rgb() {
        let mut gray = GrayImage::new(2, 1);
        gray.put_pixel(1, 0, Luma([77]));
        let mask = alpha_from_dynamic(DynamicImage::ImageLuma8(gray)).expect("decoded");
        assert_eq!(mask.layout(), Layout::Rgb);
        assert_eq!(mask.get_pixel(1, 0), Ok([77, 77, 77, 255]));
        assert_eq!(mask.get_pixel(0, 0), Ok([0, 0, 0, 255]));
    }

    #[test]
    fn color_keeps_channel_order() {
        let mut rgb = RgbImage::new(1, 1);
        rgb.put_pixel(0, 0, Rgb([1, 2, 3]));
        let buf = color_from_dynamic(DynamicImage::ImageRgb8(rgb)).expect("decoded");
        assert_eq!(buf.get_pixel(0, 0), Ok([1, 2, 3, 255]));
    }

    #[test]
    fn buffers_convert_to_rgba_images() {
        let buf = PixelBuffer::new_fill(3, 2, Layout::Rgb, [5, 6, 7, 0]);
        let img = to_dynamic(&buf).expect("encodable").to_rgba8();
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.get_pixel(2, 1).0, [5, 6, 7, 255]);
    }
}
