use crate::foundation::core::{Point, Rect, Rgba8, SurfaceSize};

/// Dash pattern for a stroked line: `on` pixels drawn, `off` pixels skipped, starting `phase`
/// pixels into the pattern.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Dash {
    pub on: f64,
    pub off: f64,
    pub phase: f64,
}

/// Stroke parameters for [`DrawSurface::stroke_line`]. Caps are always butt.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LineStyle {
    pub width: f64,
    pub color: Rgba8,
    pub dash: Option<Dash>,
}

impl LineStyle {
    pub fn solid(width: f64, color: Rgba8) -> Self {
        Self {
            width,
            color,
            dash: None,
        }
    }

    pub fn dashed(width: f64, color: Rgba8, dash: Dash) -> Self {
        Self {
            width,
            color,
            dash: Some(dash),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba8,
}

/// Concentric radial gradient running from `inner_radius` (offset 0) to `outer_radius`
/// (offset 1). Outside that band the nearest end stop is padded.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RadialGradient {
    pub center: Point,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub stops: Vec<GradientStop>,
}

/// The drawing capability the table is painted through.
///
/// Every operation paints source-over in surface pixel coordinates; geometry partially or fully
/// outside the surface is clipped, never an error.
pub trait DrawSurface {
    fn size(&self) -> SurfaceSize;

    /// Reset `region` to fully transparent pixels.
    fn clear(&mut self, region: Rect);

    fn fill_rect(&mut self, rect: Rect, color: Rgba8);

    fn stroke_line(&mut self, from: Point, to: Point, style: &LineStyle);

    /// Fill `clip` with `gradient`.
    fn fill_radial_gradient(&mut self, gradient: &RadialGradient, clip: Rect);
}
