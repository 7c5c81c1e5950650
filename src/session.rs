use crate::{
    foundation::core::SurfaceSize,
    foundation::error::TableResult,
    pattern::table::{TableRender, render_table},
    render::{cpu::CpuSurface, frame::FrameRGBA},
    settings::TableStyle,
};

/// Owner of the CPU drawing surface; repaints the table whenever the surface size changes.
///
/// Call [`TableRenderer::render`] once at startup and again on every resize. Each call is a full
/// repaint; only raster buffers are reused between calls of the same size.
pub struct TableRenderer {
    style: TableStyle,
    surface: Option<CpuSurface>,
    last: Option<TableRender>,
}

impl TableRenderer {
    pub fn new(style: TableStyle) -> Self {
        Self {
            style,
            surface: None,
            last: None,
        }
    }

    pub fn style(&self) -> &TableStyle {
        &self.style
    }

    /// Summary of the most recent non-empty render.
    pub fn last_render(&self) -> Option<&TableRender> {
        self.last.as_ref()
    }

    /// Repaint for `size` and read back the pixels.
    ///
    /// A zero-area size yields an empty frame without allocating raster buffers.
    #[tracing::instrument(skip(self))]
    pub fn render(&mut self, size: SurfaceSize) -> TableResult<FrameRGBA> {
        if size.is_empty() {
            self.last = None;
            return Ok(FrameRGBA::empty(size.width, size.height));
        }

        let surface = match &mut self.surface {
            Some(surface) => {
                surface.resize(size)?;
                surface
            }
            slot => slot.insert(CpuSurface::new(size)?),
        };

        let summary = render_table(surface, size, &self.style);
        tracing::debug!(
            moire_rows = summary.moire_rows,
            rings = summary.total_rings(),
            "table painted"
        );
        let frame = surface.finish();
        self.last = Some(summary);
        Ok(frame)
    }
}

/// One-shot render of the table at `size`.
pub fn render_table_rgba(size: SurfaceSize, style: &TableStyle) -> TableResult<FrameRGBA> {
    TableRenderer::new(*style).render(size)
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
