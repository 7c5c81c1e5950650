use crate::{
    foundation::core::{Point, Rect, Rgba8, SurfaceSize},
    render::surface::{DrawSurface, LineStyle, RadialGradient},
};

/// One call made against a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    Clear {
        region: Rect,
    },
    FillRect {
        rect: Rect,
        color: Rgba8,
    },
    StrokeLine {
        from: Point,
        to: Point,
        style: LineStyle,
    },
    FillRadialGradient {
        gradient: RadialGradient,
        clip: Rect,
    },
}

/// A surface that paints nothing and remembers every draw call in order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingSurface {
    size: SurfaceSize,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }

    pub fn gradients(&self) -> impl Iterator<Item = (&RadialGradient, &Rect)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::FillRadialGradient { gradient, clip } => Some((gradient, clip)),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (&Point, &Point, &LineStyle)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::StrokeLine { from, to, style } => Some((from, to, style)),
            _ => None,
        })
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn clear(&mut self, region: Rect) {
        self.ops.push(DrawOp::Clear { region });
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba8) {
        self.ops.push(DrawOp::FillRect { rect, color });
    }

    fn stroke_line(&mut self, from: Point, to: Point, style: &LineStyle) {
        self.ops.push(DrawOp::StrokeLine {
            from,
            to,
            style: *style,
        });
    }

    fn fill_radial_gradient(&mut self, gradient: &RadialGradient, clip: Rect) {
        self.ops.push(DrawOp::FillRadialGradient {
            gradient: gradient.clone(),
            clip,
        });
    }
}
