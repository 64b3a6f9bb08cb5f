use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use watermark::core::params::{parse_font_size, parse_opacity};
use watermark::{Anchor, ColorMode, WatermarkParams};

/// Single-dash multi-letter flags accepted for compatibility, and their long forms.
const LEGACY_FLAGS: &[(&str, &str)] = &[("-sox", "--sox"), ("-soy", "--soy"), ("-sa", "--sa")];

/// Rewrite `-sox`, `-soy` and `-sa` to their long forms so that clap does not read
/// them as `-s` followed by a value.
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(|arg| {
            let arg: OsString = arg.into();
            LEGACY_FLAGS
                .iter()
                .find(|(legacy, _)| arg.to_str() == Some(*legacy))
                .map(|(_, long)| OsString::from(*long))
                .unwrap_or(arg)
        })
        .collect()
}

#[derive(Parser, Debug)]
#[command(
    name = "watermark",
    version,
    about = "Add a text watermark to an image or to every image in a directory"
)]
pub struct CliArgs {
    /// Input image file, or a directory processed recursively (batch mode)
    pub input: Option<PathBuf>,

    /// Watermark text [default: Watermark]
    #[arg(short = 't', long)]
    pub text: Option<String>,

    /// Output file (single mode) or directory (batch mode).
    /// Defaults to <name>_watermark<ext> next to the input, or <input>/watermarked
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Watermark position [default: bottom-right]
    #[arg(short = 'p', long, value_enum)]
    pub position: Option<Anchor>,

    /// Text opacity, 0-255 [default: 128]
    #[arg(short = 'a', long, allow_negative_numbers = true)]
    pub opacity: Option<i64>,

    /// Font size in pixels, 1 to 4096 [default: 30]
    #[arg(short = 's', long, allow_negative_numbers = true)]
    pub size: Option<i64>,

    /// Use plain white text instead of a random color
    #[arg(short = 'n', long, default_value_t = false)]
    pub no_random_color: bool,

    /// Shadow X offset in pixels (also -sox) [default: 2]
    #[arg(long = "shadow-offset-x", visible_alias = "sox", allow_negative_numbers = true)]
    pub shadow_offset_x: Option<i32>,

    /// Shadow Y offset in pixels (also -soy) [default: 2]
    #[arg(long = "shadow-offset-y", visible_alias = "soy", allow_negative_numbers = true)]
    pub shadow_offset_y: Option<i32>,

    /// Shadow opacity, 0-255 (also -sa) [default: 100]
    #[arg(long = "shadow-opacity", visible_alias = "sa", allow_negative_numbers = true)]
    pub shadow_opacity: Option<i64>,

    /// Font file tried before the platform fonts [default: ./SimHei.ttf]
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// JSON preset with watermark parameters; command-line flags override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seed for the random text color, for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

impl CliArgs {
    /// Layer the flags over the preset (if any) over the built-in defaults, then validate.
    pub fn to_params(&self) -> watermark::Result<WatermarkParams> {
        let mut params = match &self.config {
            Some(path) => WatermarkParams::from_json_file(path)?,
            None => WatermarkParams::default(),
        };

        if let Some(text) = &self.text {
            params.text = text.clone();
        }
        if let Some(position) = self.position {
            params.anchor = position;
        }
        if let Some(opacity) = self.opacity {
            params.opacity = parse_opacity("opacity", opacity)?;
        }
        if let Some(size) = self.size {
            params.font_size = parse_font_size(size)?;
        }
        if self.no_random_color {
            params.color_mode = ColorMode::Fixed;
        }
        if let Some(dx) = self.shadow_offset_x {
            params.shadow_offset.0 = dx;
        }
        if let Some(dy) = self.shadow_offset_y {
            params.shadow_offset.1 = dy;
        }
        if let Some(shadow_opacity) = self.shadow_opacity {
            params.shadow_opacity = parse_opacity("shadow_opacity", shadow_opacity)?;
        }
        if let Some(font) = &self.font {
            params.font = Some(font.clone());
        }

        params.validate()?;
        Ok(params)
    }
}
