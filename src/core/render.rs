//! The single-image watermarker: decode, place, draw shadow and text, encode, write.
use std::fs;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::core::color::{pick_text_color, shadow_color, with_alpha};
use crate::core::font::{Face, FontResolver};
use crate::core::params::{WatermarkParams, WatermarkRequest};
use crate::core::placement::{MARGIN, Placement, compute_placement};
use crate::error::{Error, Result};
use crate::io::{encode_image, is_webp, read_image, resolve_output_path};
use crate::types::OutputFormat;

/// Encoded result of one watermarking operation, not yet on disk
#[derive(Debug, Clone)]
pub struct Rendered {
    pub output: PathBuf,
    pub format: OutputFormat,
    pub bytes: Vec<u8>,
}

/// Owns the resolved font face and the random source for a whole run.
pub struct Watermarker<R: Rng = StdRng> {
    face: Face,
    rng: R,
}

impl Watermarker<StdRng> {
    /// Resolves the font chain once and seeds the color RNG from the OS.
    pub fn new(custom_font: Option<&Path>) -> Self {
        Self::with_face_and_rng(FontResolver::new(custom_font).resolve(), StdRng::from_os_rng())
    }

    /// Same as `new` but with reproducible colors.
    pub fn with_seed(custom_font: Option<&Path>, seed: u64) -> Self {
        Self::with_face_and_rng(
            FontResolver::new(custom_font).resolve(),
            StdRng::seed_from_u64(seed),
        )
    }
}

impl<R: Rng> Watermarker<R> {
    pub fn with_face_and_rng(face: Face, rng: R) -> Self {
        Self { face, rng }
    }

    pub fn face(&self) -> &Face {
        &self.face
    }

    /// Draws the shadow and then the text onto `image`; returns where the text went.
    pub fn draw(&mut self, image: &mut RgbaImage, params: &WatermarkParams) -> Placement {
        let (text_width, text_height) = self.face.measure(&params.text, params.font_size);
        let at = compute_placement(
            params.anchor,
            image.width(),
            image.height(),
            text_width,
            text_height,
            MARGIN,
        );

        let color = pick_text_color(params.color_mode, &mut self.rng);
        let (dx, dy) = params.shadow_offset;
        debug!(
            "Placing {:?} ({}x{}) at ({}, {}) in color {:?}",
            params.text, text_width, text_height, at.x, at.y, color.0
        );

        self.face.draw(
            image,
            &params.text,
            at.offset(dx, dy),
            params.font_size,
            with_alpha(shadow_color(color), params.shadow_opacity),
        );
        self.face.draw(
            image,
            &params.text,
            at,
            params.font_size,
            with_alpha(color, params.opacity),
        );
        at
    }

    /// Produces the encoded output without touching the output location.
    pub fn render(&mut self, request: &WatermarkRequest) -> Result<Rendered> {
        if is_webp(&request.source) {
            return Err(Error::UnsupportedFormat {
                path: request.source.clone(),
            });
        }
        request.params.validate()?;

        let mut image = read_image(&request.source)?;
        self.draw(&mut image, &request.params);

        let output = resolve_output_path(&request.source, request.output.as_deref());
        let format = OutputFormat::from_path(&output);
        let bytes = encode_image(&image, format)?;
        Ok(Rendered {
            output,
            format,
            bytes,
        })
    }

    /// Renders and writes the result, creating the output directory if needed.
    pub fn watermark_file(&mut self, request: &WatermarkRequest) -> Result<PathBuf> {
        let rendered = self.render(request)?;

        if let Some(parent) = rendered.output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&rendered.output, &rendered.bytes)?;

        info!(
            "Processed: {} -> {} ({})",
            request.source.display(),
            rendered.output.display(),
            rendered.format
        );
        Ok(rendered.output)
    }
}
