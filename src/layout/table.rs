use crate::{
    foundation::core::{Point, Rect, SurfaceSize},
    layout::frame::{corner_target_diameter, frame_layout, pixel_perfect_line_width_px},
};

/// Where a ring target sits within the frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetPlacement {
    Center,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// One radial ring target: centre, outer radius and the rect it is clipped to.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TargetSpec {
    pub placement: TargetPlacement,
    pub center: Point,
    pub outer_radius: f64,
    pub clip: Rect,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuideAxis {
    Horizontal,
    Vertical,
}

/// A solid alignment line spanning the frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GuideLine {
    pub axis: GuideAxis,
    pub from: Point,
    pub to: Point,
    pub width: f64,
}

/// Geometry of one full table for a given surface size.
///
/// Computed once per render. `corner_target_radius` feeds both the corner target centres and
/// the corner guide lines, so the two always coincide bit for bit.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TableLayout {
    pub surface: SurfaceSize,
    pub frame: Rect,
    pub corner_target_radius: Option<f64>,
    pub targets: Vec<TargetSpec>,
    pub guides: Vec<GuideLine>,
}

impl TableLayout {
    pub fn compute(surface: SurfaceSize) -> Self {
        let frame = frame_layout(f64::from(surface.width), f64::from(surface.height));
        let corner_target_radius = corner_target_diameter(frame).map(|d| d / 2.0);

        let mut targets = Vec::with_capacity(5);
        targets.push(TargetSpec {
            placement: TargetPlacement::Center,
            center: frame.center(),
            outer_radius: frame.height / 2.0,
            clip: frame,
        });
        if let Some(r) = corner_target_radius {
            let (left, right) = (frame.x + r, frame.right() - r);
            let (top, bottom) = (frame.y + r, frame.bottom() - r);
            for (placement, x, y) in [
                (TargetPlacement::TopLeft, left, top),
                (TargetPlacement::TopRight, right, top),
                (TargetPlacement::BottomLeft, left, bottom),
                (TargetPlacement::BottomRight, right, bottom),
            ] {
                targets.push(TargetSpec {
                    placement,
                    center: Point::new(x, y),
                    outer_radius: r,
                    clip: frame,
                });
            }
        }

        let guides = guide_lines(frame, corner_target_radius);

        Self {
            surface,
            frame,
            corner_target_radius,
            targets,
            guides,
        }
    }

    pub fn target(&self, placement: TargetPlacement) -> Option<&TargetSpec> {
        self.targets.iter().find(|t| t.placement == placement)
    }
}

fn guide_lines(frame: Rect, corner_radius: Option<f64>) -> Vec<GuideLine> {
    let h_width = f64::from(pixel_perfect_line_width_px(frame.height));
    let v_width = f64::from(pixel_perfect_line_width_px(frame.width));
    let center = frame.center();

    let mut ys = vec![center.y];
    let mut xs = vec![center.x];
    if let Some(r) = corner_radius {
        ys.extend([frame.y + r, frame.bottom() - r]);
        xs.extend([frame.x + r, frame.right() - r]);
    }

    let horizontal = ys.into_iter().map(|y| GuideLine {
        axis: GuideAxis::Horizontal,
        from: Point::new(frame.x, y),
        to: Point::new(frame.right(), y),
        width: h_width,
    });
    let vertical = xs.into_iter().map(|x| GuideLine {
        axis: GuideAxis::Vertical,
        from: Point::new(x, frame.y),
        to: Point::new(x, frame.bottom()),
        width: v_width,
    });
    horizontal.chain(vertical).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/table.rs"]
mod tests;
