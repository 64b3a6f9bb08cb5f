//! Text and shadow colors.
use image::{Rgb, Rgba};
use rand::Rng;

use crate::types::ColorMode;

/// How much darker than the text the shadow is, per channel.
pub const SHADOW_DARKEN: u8 = 100;

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

pub fn pick_text_color<R: Rng>(mode: ColorMode, rng: &mut R) -> Rgb<u8> {
    match mode {
        ColorMode::Random => Rgb([rng.random(), rng.random(), rng.random()]),
        ColorMode::Fixed => WHITE,
    }
}

pub fn shadow_color(text: Rgb<u8>) -> Rgb<u8> {
    Rgb(text.0.map(|c| c.saturating_sub(SHADOW_DARKEN)))
}

pub fn with_alpha(color: Rgb<u8>, alpha: u8) -> Rgba<u8> {
    let [r, g, b] = color.0;
    Rgba([r, g, b, alpha])
}
