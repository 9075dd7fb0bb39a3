use std::fmt;
use std::str::FromStr;

use mf_core::Error;
use serde::{Deserialize, Serialize};

/// Encoders available for the flooded output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Jpeg,
    #[default]
    Png,
    Tiff,
    Bmp,
    Gif,
}

const TOKENS: &[(&str, OutputFormat)] = &[
    ("jpg", OutputFormat::Jpeg),
    ("jpeg", OutputFormat::Jpeg),
    ("png", OutputFormat::Png),
    ("tiff", OutputFormat::Tiff),
    ("tif", OutputFormat::Tiff),
    ("bmp", OutputFormat::Bmp),
    ("gif", OutputFormat::Gif),
];

impl OutputFormat {
    /// Case-insensitive lookup of a format token such as `"PNG"` or `"tif"`.
    pub fn from_token(token: &str) -> Result<Self, Error> {
        let trimmed = token.trim();
        TOKENS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(trimmed))
            .map(|&(_, format)| format)
            .ok_or_else(|| Error::UnsupportedFormat(token.to_string()))
    }

    pub fn image_format(self) -> image::ImageFormat {
        match self {
            Self::Jpeg => image::ImageFormat::Jpeg,
            Self::Png => image::ImageFormat::Png,
            Self::Tiff => image::ImageFormat::Tiff,
            Self::Bmp => image::ImageFormat::Bmp,
            Self::Gif => image::ImageFormat::Gif,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
            Self::Tiff => "tif",
            Self::Bmp => "bmp",
            Self::Gif => "gif",
        }
    }

    /// JPEG has no alpha plane; everything else is written as RGBA.
    pub fn supports_alpha(self) -> bool {
        !matches!(self, Self::Jpeg)
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
