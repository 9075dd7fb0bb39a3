use std::fmt;
use std::io;

/// Failure of a file-level flood run.
#[derive(Debug)]
pub enum PipelineError {
    Core(mf_core::Error),
    Image(image::ImageError),
    Io(io::Error),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Core(e) => write!(f, "{e}"),
            Self::Image(e) => write!(f, "image codec error: {e}"),
            Self::Io(e) => write!(f, "i/o error: {e}"),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Core(e) => Some(e),
            Self::Image(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<mf_core::Error> for PipelineError {
    fn from(e: mf_core::Error) -> Self {
        Self::Core(e)
    }
}

impl From<image::ImageError> for PipelineError {
    fn from(e: image::ImageError) -> Self {
        Self::Image(e)
    }
}

impl From<io::Error> for PipelineError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
