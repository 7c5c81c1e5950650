use crate::{
    foundation::core::{Point, Rect, Rgba8, SurfaceSize},
    foundation::error::{TableError, TableResult},
    render::frame::FrameRGBA,
    render::surface::{DrawSurface, LineStyle, RadialGradient},
};

/// [`DrawSurface`] rasterized on the CPU by `vello_cpu`.
///
/// Draw calls are recorded into a `vello_cpu::RenderContext` and resolved into the pixmap by
/// [`CpuSurface::finish`]. The context is kept across renders of the same size.
///
/// Once an opaque fill has covered the whole surface, every pixel read back is fully opaque;
/// soft gradient edges rounded by the u8 pipeline cannot leave alpha below 255.
pub struct CpuSurface {
    size: SurfaceSize,
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
    opaque_base: bool,
}

impl CpuSurface {
    pub fn new(size: SurfaceSize) -> TableResult<Self> {
        let (width, height) = raster_dims(size)?;
        Ok(Self {
            size,
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
            pixmap: vello_cpu::Pixmap::new(width, height),
            opaque_base: false,
        })
    }

    /// Point the surface at a new size. Buffers are only reallocated when the size changes.
    pub fn resize(&mut self, size: SurfaceSize) -> TableResult<()> {
        let (width, height) = raster_dims(size)?;
        if self.ctx.width() != width || self.ctx.height() != height {
            self.ctx = vello_cpu::RenderContext::new(width, height);
            self.pixmap = vello_cpu::Pixmap::new(width, height);
        } else {
            self.ctx.reset();
        }
        self.size = size;
        self.width = width;
        self.height = height;
        self.opaque_base = false;
        Ok(())
    }

    /// Rasterize everything drawn since the last clear and read the pixels back.
    pub fn finish(&mut self) -> FrameRGBA {
        self.ctx.flush();
        self.pixmap.data_as_u8_slice_mut().fill(0);
        self.ctx.render_to_pixmap(&mut self.pixmap);
        if self.opaque_base {
            // Premultiplied channels never exceed alpha, so raising alpha keeps them valid.
            for px in self.pixmap.data_as_u8_slice_mut().chunks_exact_mut(4) {
                px[3] = 255;
            }
        }
        FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }

    fn reset_paint_state(&mut self) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_blend_mode(vello_cpu::peniko::BlendMode::default());
    }
}

impl DrawSurface for CpuSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn clear(&mut self, region: Rect) {
        let bounds = self.size.bounds();
        let Some(region) = region.intersect(bounds) else {
            return;
        };
        self.opaque_base = false;
        if region == bounds {
            // Nothing drawn so far can show through; drop the recorded scene.
            self.ctx.reset();
            return;
        }
        self.reset_paint_state();
        self.ctx.set_blend_mode(vello_cpu::peniko::BlendMode::new(
            vello_cpu::peniko::Mix::Normal,
            vello_cpu::peniko::Compose::Clear,
        ));
        self.ctx.set_paint(color_to_cpu([0, 0, 0, 255]));
        self.ctx.fill_rect(&rect_to_cpu(region));
        self.ctx.set_blend_mode(vello_cpu::peniko::BlendMode::default());
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba8) {
        if rect.is_empty() {
            return;
        }
        let bounds = self.size.bounds();
        if color[3] == 255 && rect.intersect(bounds) == Some(bounds) {
            self.opaque_base = true;
        }
        self.reset_paint_state();
        self.ctx.set_paint(color_to_cpu(color));
        self.ctx.fill_rect(&rect_to_cpu(rect));
    }

    fn stroke_line(&mut self, from: Point, to: Point, style: &LineStyle) {
        if from == to || !(style.width > 0.0) {
            return;
        }
        let mut stroke =
            vello_cpu::kurbo::Stroke::new(style.width).with_caps(vello_cpu::kurbo::Cap::Butt);
        if let Some(dash) = style.dash {
            stroke = stroke.with_dashes(dash.phase, [dash.on, dash.off]);
        }

        let mut path = vello_cpu::kurbo::BezPath::new();
        path.move_to(point_to_cpu(from));
        path.line_to(point_to_cpu(to));

        self.reset_paint_state();
        self.ctx.set_stroke(stroke);
        self.ctx.set_paint(color_to_cpu(style.color));
        self.ctx.stroke_path(&path);
    }

    fn fill_radial_gradient(&mut self, gradient: &RadialGradient, clip: Rect) {
        let band = Rect::around_circle(gradient.center, gradient.outer_radius);
        let Some(area) = clip.intersect(band) else {
            return;
        };

        let stops: Vec<(f32, vello_cpu::peniko::Color)> = gradient
            .stops
            .iter()
            .map(|s| (s.offset, color_to_cpu(s.color)))
            .collect();
        let center = point_to_cpu(gradient.center);
        let paint = vello_cpu::peniko::Gradient::new_two_point_radial(
            center,
            gradient.inner_radius as f32,
            center,
            gradient.outer_radius as f32,
        )
        .with_stops(stops.as_slice());

        self.reset_paint_state();
        self.ctx.set_paint(paint);
        self.ctx.fill_rect(&rect_to_cpu(area));
    }
}

fn raster_dims(size: SurfaceSize) -> TableResult<(u16, u16)> {
    if size.is_empty() {
        return Err(TableError::validation(format!(
            "cpu surface needs a non-zero size, got {size}"
        )));
    }
    let width: u16 = size
        .width
        .try_into()
        .map_err(|_| TableError::validation("surface width exceeds u16"))?;
    let height: u16 = size
        .height
        .try_into()
        .map_err(|_| TableError::validation("surface height exceeds u16"))?;
    Ok((width, height))
}

fn color_to_cpu([r, g, b, a]: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(r, g, b, a)
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x, r.y, r.right(), r.bottom())
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
