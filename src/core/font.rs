//! Font resolution and text drawing.
//!
//! Resolution is an ordered list of resolvers; the first one that produces a face
//! wins and the last one (the built-in bitmap face) always succeeds:
//!
//! 1. the first existing file among the custom font and the platform candidates,
//! 2. a generic sans-serif face found by scanning the usual font directories,
//! 3. the built-in 5x7 bitmap face.
//!
//! Font files that exist but cannot be parsed are logged and skipped, never propagated.
use std::path::{Path, PathBuf};

use ab_glyph::{Font, FontVec, GlyphId, PxScale, ScaleFont, point};
use image::{Pixel, Rgba, RgbaImage};
use imageproc::drawing::text_size;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::core::glyphs;
use crate::core::placement::Placement;
use crate::error::{Error, Result};

/// Custom font tried first when none is configured.
pub const DEFAULT_CUSTOM_FONT: &str = "./SimHei.ttf";

pub const PLATFORM_FONT_PATHS: &[&str] = &[
    "/System/Library/Fonts/PingFang.ttc",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
    "C:/Windows/Fonts/simhei.ttf",
    "C:/Windows/Fonts/arial.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
];

pub const FONT_SEARCH_DIRS: &[&str] = &[
    "/usr/share/fonts",
    "/usr/local/share/fonts",
    "/Library/Fonts",
    "/System/Library/Fonts",
    "C:/Windows/Fonts",
];

/// Generic sans-serif file names, most preferred first.
pub const SANS_SERIF_FILES: &[&str] = &[
    "DejaVuSans.ttf",
    "LiberationSans-Regular.ttf",
    "FreeSans.ttf",
    "NotoSans-Regular.ttf",
    "Arial.ttf",
    "arial.ttf",
    "Helvetica.ttc",
    "Verdana.ttf",
];

const SEARCH_DEPTH: usize = 4;

/// A face able to measure and draw text at any pixel size.
pub enum Face {
    Outline { font: FontVec, source: PathBuf },
    Builtin,
}

impl std::fmt::Debug for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Face::Outline { source, .. } => write!(f, "Outline({})", source.display()),
            Face::Builtin => write!(f, "Builtin"),
        }
    }
}

impl Face {
    /// Rendered width and height of `text` at `font_size` pixels.
    pub fn measure(&self, text: &str, font_size: u32) -> (u32, u32) {
        match self {
            Face::Outline { font, .. } => text_size(PxScale::from(font_size as f32), font, text),
            Face::Builtin => glyphs::measure(text, glyphs::scale_for(font_size)),
        }
    }

    /// Composites `text` with its top-left corner at `at`. Pixels outside the image are clipped.
    pub fn draw(
        &self,
        image: &mut RgbaImage,
        text: &str,
        at: Placement,
        font_size: u32,
        color: Rgba<u8>,
    ) {
        let (x0, y0) = (i64::from(at.x), i64::from(at.y));
        match self {
            Face::Outline { font, .. } => {
                draw_outline(image, font, text, x0, y0, font_size, color);
            }
            Face::Builtin => {
                let (width, height) = (i64::from(image.width()), i64::from(image.height()));
                glyphs::rasterize(
                    text,
                    glyphs::scale_for(font_size),
                    -x0..width - x0,
                    -y0..height - y0,
                    |dx, dy| blend_pixel(image, x0 + dx, y0 + dy, color),
                );
            }
        }
    }
}

/// Glyph layout matches `imageproc::drawing::text_size`, so the drawn text fills the
/// measured box. Each covered pixel is composited once with alpha `coverage * color.a`.
fn draw_outline(
    image: &mut RgbaImage,
    font: &FontVec,
    text: &str,
    x0: i64,
    y0: i64,
    font_size: u32,
    color: Rgba<u8>,
) {
    if color.0[3] == 0 {
        return;
    }
    let scale = PxScale::from(font_size as f32);
    let scaled = font.as_scaled(scale);
    let mut caret = 0f32;
    let mut last: Option<GlyphId> = None;

    for ch in text.chars() {
        let id = scaled.glyph_id(ch);
        let glyph = id.with_scale_and_position(scale, point(caret, scaled.ascent()));
        caret += scaled.h_advance(id);
        let Some(outlined) = font.outline_glyph(glyph) else {
            continue;
        };
        if let Some(last) = last {
            caret += scaled.kern(id, last);
        }
        last = Some(id);

        let bounds = outlined.px_bounds();
        let left = x0 + bounds.min.x.round() as i64;
        let top = y0 + bounds.min.y.round() as i64;
        outlined.draw(|gx, gy, coverage| {
            let alpha = (coverage.clamp(0.0, 1.0) * f32::from(color.0[3])).round() as u8;
            let mut px = color;
            px.0[3] = alpha;
            blend_pixel(image, left + i64::from(gx), top + i64::from(gy), px);
        });
    }
}

fn blend_pixel(image: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if x < 0 || y < 0 || x >= i64::from(image.width()) || y >= i64::from(image.height()) {
        return;
    }
    let pixel = image.get_pixel_mut(x as u32, y as u32);
    match color.0[3] {
        0 => {}
        255 => *pixel = color,
        _ => pixel.blend(&color),
    }
}

/// Parse a font file; `.ttc` collections use their first face.
pub fn load_font_file(path: &Path) -> Result<FontVec> {
    let data = std::fs::read(path).map_err(|e| Error::FontLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    FontVec::try_from_vec_and_index(data, 0).map_err(|e| Error::FontLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

type Resolver = fn(&FontResolver) -> Option<Face>;

/// Ordered font lookup; see the module docs for the chain.
#[derive(Debug, Clone)]
pub struct FontResolver {
    /// Tried in order, the first existing file is the only one loaded
    pub candidates: Vec<PathBuf>,
    /// Scanned for `SANS_SERIF_FILES` when the candidates yield nothing
    pub search_dirs: Vec<PathBuf>,
}

impl FontResolver {
    pub fn new(custom: Option<&Path>) -> Self {
        let custom = custom
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CUSTOM_FONT));
        let mut candidates = vec![custom];
        candidates.extend(PLATFORM_FONT_PATHS.iter().map(PathBuf::from));
        Self {
            candidates,
            search_dirs: FONT_SEARCH_DIRS.iter().map(PathBuf::from).collect(),
        }
    }

    pub fn resolve(&self) -> Face {
        const CHAIN: &[(&str, Resolver)] = &[
            ("configured font", FontResolver::from_candidates),
            ("generic sans-serif", FontResolver::from_sans_serif_search),
            ("built-in bitmap", FontResolver::builtin),
        ];

        for (name, resolver) in CHAIN {
            if let Some(face) = resolver(self) {
                info!("Using {} face: {:?}", name, face);
                return face;
            }
            debug!("No {} face available", name);
        }
        Face::Builtin
    }

    fn from_candidates(&self) -> Option<Face> {
        let path = self.candidates.iter().find(|p| p.is_file())?;
        match load_font_file(path) {
            Ok(font) => Some(Face::Outline {
                font,
                source: path.clone(),
            }),
            Err(e) => {
                warn!("{}; falling back to a generic face", e);
                None
            }
        }
    }

    fn from_sans_serif_search(&self) -> Option<Face> {
        for path in self.sans_serif_candidates() {
            match load_font_file(&path) {
                Ok(font) => return Some(Face::Outline { font, source: path }),
                Err(e) => warn!("{}", e),
            }
        }
        None
    }

    fn builtin(&self) -> Option<Face> {
        warn!("No usable font file found, using the built-in bitmap face");
        Some(Face::Builtin)
    }

    /// Files under the search dirs named in `SANS_SERIF_FILES`, in preference order.
    pub fn sans_serif_candidates(&self) -> Vec<PathBuf> {
        let mut found: Vec<(usize, PathBuf)> = Vec::new();
        for dir in self.search_dirs.iter().filter(|d| d.is_dir()) {
            for entry in WalkDir::new(dir)
                .max_depth(SEARCH_DEPTH)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
            {
                let rank = {
                    let name = entry.file_name().to_string_lossy();
                    SANS_SERIF_FILES.iter().position(|f| *f == name)
                };
                if let Some(rank) = rank {
                    found.push((rank, entry.into_path()));
                }
            }
        }
        found.sort_by_key(|(rank, _)| *rank);
        found.into_iter().map(|(_, path)| path).collect()
    }
}
