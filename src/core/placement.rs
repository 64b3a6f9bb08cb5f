//! Watermark placement: turns an anchor plus image and text extents into the
//! top-left drawing coordinate of the text.
use crate::types::Anchor;

/// Inset from the image edges used by every anchor except `Center`.
pub const MARGIN: i32 = 10;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
}

impl Placement {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Placement {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// Coordinates may go negative when the text is larger than the image; drawing clips.
/// They saturate at the `i32` range for text far larger than any image.
pub fn compute_placement(
    anchor: Anchor,
    image_width: u32,
    image_height: u32,
    text_width: u32,
    text_height: u32,
    margin: i32,
) -> Placement {
    let (w, h) = (i64::from(image_width), i64::from(image_height));
    let (tw, th) = (i64::from(text_width), i64::from(text_height));
    let margin = i64::from(margin);

    let (x, y) = match anchor {
        Anchor::TopLeft => (margin, margin),
        Anchor::TopRight => (w - tw - margin, margin),
        Anchor::BottomLeft => (margin, h - th - margin),
        Anchor::BottomRight => (w - tw - margin, h - th - margin),
        Anchor::Center => ((w - tw) / 2, (h - th) / 2),
    };
    Placement {
        x: clamp_i32(x),
        y: clamp_i32(y),
    }
}

fn clamp_i32(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
