use std::f64::consts::FRAC_PI_4;

use crate::foundation::core::Rect;

/// Frame aspect ratio, width over height.
pub const FRAME_ASPECT: f64 = 4.0 / 3.0;

/// Centered 4:3 frame spanning the full surface height.
///
/// `width = floor(H * 4/3)`, `x = floor((W - width) / 2)`, `y = 0`. When the frame is wider than
/// the surface the origin goes negative and the frame overflows both sides; that is accepted.
pub fn frame_layout(surface_width: f64, surface_height: f64) -> Rect {
    let width = (surface_height * FRAME_ASPECT).floor();
    let x = ((surface_width - width) / 2.0).floor();
    Rect::new(x, 0.0, width, surface_height)
}

/// Stroke width that keeps a line centred on a region of `value` pixels crisp.
///
/// Odd regions get an odd stroke (3), even regions an even one (4).
pub fn pixel_perfect_line_width(value: u32) -> u32 {
    if value % 2 == 1 { 3 } else { 4 }
}

/// Same as [`pixel_perfect_line_width`] for a pixel dimension carried as `f64`.
///
/// The dimension is truncated to whole pixels first; negative or NaN values count as 0.
pub fn pixel_perfect_line_width_px(value: f64) -> u32 {
    pixel_perfect_line_width(value as u32)
}

/// Diameter of the corner target inscribed in `rect`'s corner.
///
/// With `a = width/2` and `b = height/2`:
///
/// ```text
/// y = PI/4 - asin(-(b - a) / b)
/// X = b - b * sin(y)
/// ```
///
/// Returns `None` when `b <= 0` or the `asin` argument falls outside `[-1, 1]` (a rect more than
/// twice as wide as it is tall).
pub fn corner_target_diameter(rect: Rect) -> Option<f64> {
    let a = rect.width / 2.0;
    let b = rect.height / 2.0;
    if !(b > 0.0) {
        return None;
    }
    let s = -(b - a) / b;
    if !(-1.0..=1.0).contains(&s) {
        return None;
    }
    let y = FRAC_PI_4 - s.asin();
    Some(b - b * y.sin())
}

#[cfg(test)]
#[path = "../../tests/unit/layout/frame.rs"]
mod tests;
