//! Shared types and enums used across the crate.
//! Includes the watermark `Anchor`, the text `ColorMode`, and the `OutputFormat`
//! chosen from an output file extension.
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::io::dotted_extension;

/// Named reference point on the image that determines where the text goes.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
    Center,
}

impl std::fmt::Display for Anchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Anchor::TopLeft => "top-left",
            Anchor::TopRight => "top-right",
            Anchor::BottomLeft => "bottom-left",
            Anchor::BottomRight => "bottom-right",
            Anchor::Center => "center",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for Anchor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Anchor as ValueEnum>::from_str(s, false).map_err(|_| Error::invalid("position", s))
    }
}

/// How the watermark text color is picked.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorMode {
    /// Each RGB channel drawn uniformly at random, once per image
    #[default]
    Random,
    /// Plain white
    Fixed,
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorMode::Random => write!(f, "random"),
            ColorMode::Fixed => write!(f, "fixed"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum OutputFormat {
    PNG,
    JPEG, // quality 90, alpha dropped
}

impl OutputFormat {
    /// `.png` encodes as PNG; every other extension (or none) falls back to JPEG.
    pub fn from_path(path: &Path) -> Self {
        match dotted_extension(path).as_str() {
            ".png" => OutputFormat::PNG,
            _ => OutputFormat::JPEG,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::PNG => write!(f, "PNG"),
            OutputFormat::JPEG => write!(f, "JPEG"),
        }
    }
}
