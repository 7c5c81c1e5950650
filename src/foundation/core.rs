use std::str::FromStr;

use crate::foundation::error::{TableError, TableResult};

pub use kurbo::Point;

/// Straight (non-premultiplied) RGBA8 colour.
pub type Rgba8 = [u8; 4];

/// Fully transparent black, the "transparent" end of ring gradients.
pub const TRANSPARENT: Rgba8 = [0, 0, 0, 0];

/// Axis-aligned rectangle given by its top-left corner and size.
///
/// Origins may be negative (a 4:3 frame wider than the surface overflows to the left); sizes are
/// expected to be non-negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(self) -> f64 {
        self.y + self.height
    }

    pub fn center(self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn is_empty(self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Overlapping region of two rects, `None` when they do not overlap.
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        let out = Rect::new(x0, y0, x1 - x0, y1 - y0);
        (!out.is_empty()).then_some(out)
    }

    /// Square bounding box of a circle.
    pub fn around_circle(center: Point, radius: f64) -> Self {
        Self::new(
            center.x - radius,
            center.y - radius,
            radius * 2.0,
            radius * 2.0,
        )
    }
}

/// Pixel dimensions of a drawing surface at the moment of rendering.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The whole surface as a rect anchored at the origin.
    pub fn bounds(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }

    pub fn pixel_count(self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }
}

impl std::fmt::Display for SurfaceSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for SurfaceSize {
    type Err = TableError;

    /// Parses `"1920x1080"` (also accepts `X` and surrounding whitespace).
    fn from_str(s: &str) -> TableResult<Self> {
        let s = s.trim();
        let (w, h) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| TableError::validation(format!("surface size '{s}' is not WxH")))?;
        let parse = |v: &str, axis: &str| -> TableResult<u32> {
            v.trim().parse::<u32>().map_err(|e| {
                TableError::validation(format!("surface {axis} '{}' is invalid: {e}", v.trim()))
            })
        };
        Ok(Self::new(parse(w, "width")?, parse(h, "height")?))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
