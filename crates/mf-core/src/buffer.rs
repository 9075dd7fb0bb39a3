use crate::Error;

/// Channel layout of a packed 8-bit pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    Rgb,
    Rgba,
}

impl Layout {
    /// Bytes per pixel.
    pub const fn channels(self) -> usize {
        match self {
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }

    pub const fn has_alpha(self) -> bool {
        matches!(self, Self::Rgba)
    }
}

/// Owned row-major pixel grid with an explicit byte stride.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    layout: Layout,
    stride: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocates a zeroed buffer with tightly packed rows.
    pub fn new(width: usize, height: usize, layout: Layout) -> Self {
        let stride = width
            .checked_mul(layout.channels())
            .expect("pixel buffer row overflow");
        let len = stride.checked_mul(height).expect("pixel buffer size overflow");
        Self {
            width,
            height,
            layout,
            stride,
            data: vec![0; len],
        }
    }

    /// Allocates a buffer where every pixel is `rgba` (alpha dropped for `Rgb`).
    pub fn new_fill(width: usize, height: usize, layout: Layout, rgba: [u8; 4]) -> Self {
        let mut out = Self::new(width, height, layout);
        let bpp = layout.channels();
        for px in out.data.chunks_exact_mut(bpp) {
            px.copy_from_slice(&rgba[..bpp]);
        }
        out
    }

    pub fn from_vec(
        width: usize,
        height: usize,
        layout: Layout,
        data: Vec<u8>,
    ) -> Result<Self, Error> {
        let stride = width.checked_mul(layout.channels()).ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;
        Self::from_vec_with_stride(width, height, layout, stride, data)
    }

    /// Adopts a decoded buffer whose rows are `stride` bytes apart.
    pub fn from_vec_with_stride(
        width: usize,
        height: usize,
        layout: Layout,
        stride: usize,
        data: Vec<u8>,
    ) -> Result<Self, Error> {
        check_geometry(width, height, layout, stride, data.len())?;
        Ok(Self {
            width,
            height,
            layout,
            stride,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Distance in bytes between adjacent row starts.
    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Packed pixels of row `y`, without trailing padding.
    pub fn row(&self, y: usize) -> &[u8] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.stride;
        &self.data[start..start + self.width * self.layout.channels()]
    }

    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.stride;
        let end = start + self.width * self.layout.channels();
        &mut self.data[start..end]
    }

    /// Reads pixel `(x, y)` as RGBA. `Rgb` pixels report alpha 255.
    pub fn get_pixel(&self, x: usize, y: usize) -> Result<[u8; 4], Error> {
        self.as_view().get_pixel(x, y)
    }

    /// Writes pixel `(x, y)` from RGBA. `Rgb` buffers ignore the alpha byte.
    pub fn set_pixel(&mut self, x: usize, y: usize, rgba: [u8; 4]) -> Result<(), Error> {
        let offset = self.offset(x, y)?;
        let bpp = self.layout.channels();
        self.data[offset..offset + bpp].copy_from_slice(&rgba[..bpp]);
        Ok(())
    }

    /// Fails with `DimensionMismatch` unless `other` has the same width and height.
    pub fn ensure_same_size(&self, other: &PixelBuffer) -> Result<(), Error> {
        if self.dimensions() != other.dimensions() {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            });
        }
        Ok(())
    }

    pub fn as_view(&self) -> PixelView<'_> {
        PixelView {
            width: self.width,
            height: self.height,
            layout: self.layout,
            stride: self.stride,
            data: &self.data,
        }
    }

    /// Converts to an `Rgba` buffer, filling alpha with 255 when absent.
    pub fn to_rgba(&self) -> PixelBuffer {
        self.as_view().to_rgba()
    }

    /// Row bytes concatenated without padding, ready for an encoder.
    pub fn to_packed(&self) -> Vec<u8> {
        if self.is_contiguous() {
            return self.data[..self.width * self.height * self.layout.channels()].to_vec();
        }
        let mut out = Vec::with_capacity(self.width * self.height * self.layout.channels());
        for y in 0..self.height {
            out.extend_from_slice(self.row(y));
        }
        out
    }

    pub fn is_contiguous(&self) -> bool {
        self.stride == self.width * self.layout.channels()
    }

    fn offset(&self, x: usize, y: usize) -> Result<usize, Error> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.stride + x * self.layout.channels())
    }
}

/// Borrowed read-only view over strided pixel rows.
#[derive(Debug, Clone, Copy)]
pub struct PixelView<'a> {
    width: usize,
    height: usize,
    layout: Layout,
    stride: usize,
    data: &'a [u8],
}

impl<'a> PixelView<'a> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn row(&self, y: usize) -> &'a [u8] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.stride;
        &self.data[start..start + self.width * self.layout.channels()]
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Result<[u8; 4], Error> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let bpp = self.layout.channels();
        let i = y * self.stride + x * bpp;
        let px = &self.data[i..i + bpp];
        Ok(match self.layout {
            Layout::Rgb => [px[0], px[1], px[2], 255],
            Layout::Rgba => [px[0], px[1], px[2], px[3]],
        })
    }

    /// Copies the view into an owned, tightly packed buffer.
    pub fn to_buffer(&self) -> PixelBuffer {
        let mut out = PixelBuffer::new(self.width, self.height, self.layout);
        for y in 0..self.height {
            out.row_mut(y).copy_from_slice(self.row(y));
        }
        out
    }

    pub fn to_rgba(&self) -> PixelBuffer {
        if self.layout == Layout::Rgba {
            return self.to_buffer();
        }
        let mut out = PixelBuffer::new(self.width, self.height, Layout::Rgba);
        for y in 0..self.height {
            let src = self.row(y);
            let dst = out.row_mut(y);
            for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(3)) {
                d[..3].copy_from_slice(s);
                d[3] = 255;
            }
        }
        out
    }
}

fn check_geometry(
    width: usize,
    height: usize,
    layout: Layout,
    stride: usize,
    len: usize,
) -> Result<(), Error> {
    let row_bytes = width.checked_mul(layout.channels()).ok_or(Error::SizeMismatch {
        expected: usize::MAX,
        actual: len,
    })?;
    if stride < row_bytes {
        return Err(Error::InvalidStride);
    }

    let min_len = min_required_len(row_bytes, height, stride).ok_or(Error::SizeMismatch {
        expected: usize::MAX,
        actual: len,
    })?;
    if len < min_len {
        return Err(Error::SizeMismatch {
            expected: min_len,
            actual: len,
        });
    }
    Ok(())
}

fn min_required_len(row_bytes: usize, height: usize, stride: usize) -> Option<usize> {
    if row_bytes == 0 || height == 0 {
        return Some(0);
    }

    let rows_before_last = height.checked_sub(1)?;
    let base = rows_before_last.checked_mul(stride)?;
    base.checked_add(row_bytes)
}
