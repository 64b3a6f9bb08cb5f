use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{Anchor, ColorMode};

pub const DEFAULT_TEXT: &str = "Watermark";
pub const DEFAULT_OPACITY: u8 = 128;
pub const DEFAULT_FONT_SIZE: u32 = 30;
pub const DEFAULT_SHADOW_OFFSET: (i32, i32) = (2, 2);
pub const DEFAULT_SHADOW_OPACITY: u8 = 100;
/// Largest accepted font size in pixels.
pub const MAX_FONT_SIZE: u32 = 4096;

/// Watermark parameters suitable for preset files; shared by every file of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatermarkParams {
    pub text: String,
    pub anchor: Anchor,
    /// Alpha of the main text
    pub opacity: u8,
    /// Pixel height of the rendered text
    pub font_size: u32,
    pub color_mode: ColorMode,
    /// (dx, dy) of the shadow relative to the text
    pub shadow_offset: (i32, i32),
    pub shadow_opacity: u8,
    /// Font file tried before the platform candidates
    pub font: Option<PathBuf>,
}

impl Default for WatermarkParams {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT.to_string(),
            anchor: Anchor::BottomRight,
            opacity: DEFAULT_OPACITY,
            font_size: DEFAULT_FONT_SIZE,
            color_mode: ColorMode::Random,
            shadow_offset: DEFAULT_SHADOW_OFFSET,
            shadow_opacity: DEFAULT_SHADOW_OPACITY,
            font: None,
        }
    }
}

impl WatermarkParams {
    /// Load a JSON preset. Missing fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&data).map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Checks what the types alone cannot guarantee.
    pub fn validate(&self) -> Result<()> {
        if self.font_size == 0 || self.font_size > MAX_FONT_SIZE {
            return Err(Error::invalid("font_size", self.font_size));
        }
        Ok(())
    }
}

/// Convert a raw opacity value (0-255) into an alpha byte.
pub fn parse_opacity(arg: &'static str, value: i64) -> Result<u8> {
    u8::try_from(value).map_err(|_| Error::invalid(arg, value))
}

/// Convert a raw font size into a pixel size in `1..=MAX_FONT_SIZE`.
pub fn parse_font_size(value: i64) -> Result<u32> {
    match u32::try_from(value) {
        Ok(size) if (1..=MAX_FONT_SIZE).contains(&size) => Ok(size),
        _ => Err(Error::invalid("font_size", value)),
    }
}

/// One watermarking operation: a source image, where to put the result, and how to draw.
#[derive(Debug, Clone)]
pub struct WatermarkRequest {
    pub source: PathBuf,
    /// `None` derives `<dir>/<stem>_watermark<ext>` next to the source
    pub output: Option<PathBuf>,
    pub params: WatermarkParams,
}

impl WatermarkRequest {
    pub fn new(source: impl Into<PathBuf>, output: Option<PathBuf>, params: WatermarkParams) -> Self {
        Self {
            source: source.into(),
            output,
            params,
        }
    }
}
