//! Encoding watermarked images as PNG or JPEG.
use image::buffer::ConvertBuffer;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbImage, RgbaImage};
use jpeg_encoder::{ColorType, Encoder};

use crate::error::{Error, Result};
use crate::types::OutputFormat;

pub const JPEG_QUALITY: u8 = 90;

/// Encode fully in memory so that nothing half-written ever reaches the disk.
pub fn encode_image(image: &RgbaImage, format: OutputFormat) -> Result<Vec<u8>> {
    match format {
        OutputFormat::PNG => encode_png(image),
        OutputFormat::JPEG => encode_jpeg(image),
    }
}

fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    PngEncoder::new(&mut out)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(Error::encode)?;
    Ok(out)
}

fn encode_jpeg(image: &RgbaImage) -> Result<Vec<u8>> {
    let (cols, rows) = image.dimensions();
    let (Ok(width), Ok(height)) = (u16::try_from(cols), u16::try_from(rows)) else {
        return Err(Error::Encode(format!(
            "{}x{} exceeds the JPEG size limit of 65535x65535",
            cols, rows
        )));
    };
    let rgb: RgbImage = image.convert();

    let mut out = Vec::new();
    let encoder = Encoder::new(&mut out, JPEG_QUALITY);
    encoder
        .encode(rgb.as_raw(), width, height, ColorType::Rgb)
        .map_err(Error::encode)?;
    Ok(out)
}
