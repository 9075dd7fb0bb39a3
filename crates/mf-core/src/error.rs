use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Color and alpha inputs differ in resolution.
    InputMismatch {
        color: (usize, usize),
        alpha: (usize, usize),
    },
    /// A side is zero or not an exact power of two.
    NotPowerOfTwo { width: usize, height: usize },
    UnsupportedFormat(String),
    /// Two buffers that must share a resolution do not.
    DimensionMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
    OutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    SizeMismatch { expected: usize, actual: usize },
    InvalidStride,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputMismatch { color, alpha } => write!(
                f,
                "resolution mismatch: color is {}x{}, alpha is {}x{}",
                color.0, color.1, alpha.0, alpha.1
            ),
            Self::NotPowerOfTwo { width, height } => {
                write!(f, "input is not a power of two image: {width}x{height}")
            }
            Self::UnsupportedFormat(token) => write!(f, "unknown image format: '{token}'"),
            Self::DimensionMismatch { expected, actual } => write!(
                f,
                "dimension mismatch: expected {}x{}, got {}x{}",
                expected.0, expected.1, actual.0, actual.1
            ),
            Self::OutOfRange {
                x,
                y,
                width,
                height,
            } => write!(f, "pixel ({x}, {y}) outside {width}x{height} buffer"),
            Self::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected}, got {actual}")
            }
            Self::InvalidStride => write!(f, "invalid stride"),
        }
    }
}

impl std::error::Error for Error {}
