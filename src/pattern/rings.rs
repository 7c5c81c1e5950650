use std::iter::FusedIterator;

use crate::{
    foundation::core::{Point, Rect},
    render::surface::{DrawSurface, GradientStop, RadialGradient},
};

/// Rings whose inner radius is below this are not drawn; each band also starts this far inside
/// its nominal radius so neighbouring bands blend.
pub const RING_FEATHER_PX: f64 = 5.0;

/// Target width of the first ring, as a fraction of the clip rect height.
const START_WIDTH_DIVISOR: f64 = 50.0;

/// Minimum number of rings worth of radius the first ring may take.
const MIN_RING_COUNT: f64 = 20.0;

/// One band of a ring target.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Ring {
    /// 1-based position in the progression.
    pub step: u32,
    /// Nominal inner radius (`curR`).
    pub radius: f64,
    /// Ring width (`prgValue`).
    pub width: f64,
}

impl Ring {
    /// Radii the gradient spans: `[radius - 5, radius + width]`.
    pub fn band(self) -> (f64, f64) {
        (self.radius - RING_FEATHER_PX, self.radius + self.width)
    }

    pub fn gradient(self, center: Point, stops: Vec<GradientStop>) -> RadialGradient {
        let (inner_radius, outer_radius) = self.band();
        RadialGradient {
            center,
            inner_radius,
            outer_radius,
            stops,
        }
    }
}

/// Lazy geometric progression of ring widths for one target.
///
/// Widths follow `start * q^(step - 1)` with `q = (1 / start)^(5 / outer_radius)`, so they shrink
/// from `start` towards one pixel, packing coarse rings in the middle and fine rings at the rim.
/// The sequence ends at the first ring that starts inside [`RING_FEATHER_PX`], is one pixel wide or
/// less, or would cross `outer_radius`.
#[derive(Clone, Debug)]
pub struct RingProgression {
    outer_radius: f64,
    start_width: f64,
    ratio: f64,
    cur_r: f64,
    step: u32,
    done: bool,
}

impl RingProgression {
    /// Progression for a target of `outer_radius` inside a rect `rect_height` pixels tall.
    pub fn new(outer_radius: f64, rect_height: f64) -> Self {
        let mut start_width = (rect_height / START_WIDTH_DIVISOR).floor();
        if outer_radius / start_width < MIN_RING_COUNT {
            start_width = outer_radius / 10.0;
        }
        let ratio = (1.0 / start_width).powf(1.0 / (outer_radius / 5.0));

        Self {
            outer_radius,
            start_width,
            ratio,
            cur_r: start_width,
            step: 1,
            done: !(outer_radius.is_finite() && outer_radius > 0.0),
        }
    }

    pub fn start_width(&self) -> f64 {
        self.start_width
    }

    /// Common ratio `q` between consecutive ring widths.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }
}

impl Iterator for RingProgression {
    type Item = Ring;

    fn next(&mut self) -> Option<Ring> {
        if self.done {
            return None;
        }
        let width = self.start_width * self.ratio.powf(f64::from(self.step - 1));
        let stop = !(self.cur_r >= RING_FEATHER_PX)
            || !(width > 1.0)
            || self.cur_r + width > self.outer_radius;
        if stop {
            self.done = true;
            return None;
        }

        let ring = Ring {
            step: self.step,
            radius: self.cur_r,
            width,
        };
        self.cur_r += width;
        self.step += 1;
        Some(ring)
    }
}

impl FusedIterator for RingProgression {}

/// Paint one concentric moire target centred at `center`, clipped to `rect`.
///
/// `rect` also sets the starting ring width. Returns the number of rings painted.
pub fn draw_ring_target<S: DrawSurface + ?Sized>(
    surface: &mut S,
    center: Point,
    outer_radius: f64,
    rect: Rect,
    stops: &[GradientStop],
) -> usize {
    RingProgression::new(outer_radius, rect.height).fold(0, |painted, ring| {
        surface.fill_radial_gradient(&ring.gradient(center, stops.to_vec()), rect);
        painted + 1
    })
}

#[cfg(test)]
#[path = "../../tests/unit/pattern/rings.rs"]
mod tests;
