use crate::{
    foundation::core::SurfaceSize,
    layout::table::{TableLayout, TargetPlacement},
    pattern::{lines::draw_line_moire, rings::draw_ring_target},
    render::surface::{DrawSurface, LineStyle},
    settings::TableStyle,
};

/// What one call to [`render_table`] drew.
#[derive(Clone, Debug, PartialEq)]
pub struct TableRender {
    pub layout: TableLayout,
    /// Dashed rows of the line texture.
    pub moire_rows: usize,
    /// Rings painted per target, in drawing order.
    pub rings: Vec<(TargetPlacement, usize)>,
}

impl TableRender {
    pub fn total_rings(&self) -> usize {
        self.rings.iter().map(|(_, n)| n).sum()
    }
}

/// Repaint the whole alignment table for a surface of `size`.
///
/// Order: clear, background, frame, line texture, centre target, four corner targets, guide
/// lines. Nothing carries over between calls; the same size always produces the same draw calls.
#[tracing::instrument(skip(surface, style))]
pub fn render_table<S: DrawSurface + ?Sized>(
    surface: &mut S,
    size: SurfaceSize,
    style: &TableStyle,
) -> TableRender {
    let bounds = size.bounds();
    surface.clear(bounds);
    surface.fill_rect(bounds, style.background);

    let layout = TableLayout::compute(size);
    tracing::debug!(
        frame = ?layout.frame,
        corner_target_radius = ?layout.corner_target_radius,
        "table layout"
    );

    surface.fill_rect(layout.frame, style.frame);
    let moire_rows = draw_line_moire(surface, layout.frame, style.texture);

    let stops = style.ring_stops();
    let rings = layout
        .targets
        .iter()
        .map(|t| {
            let painted = draw_ring_target(surface, t.center, t.outer_radius, t.clip, &stops);
            tracing::debug!(
                placement = ?t.placement,
                outer_radius = t.outer_radius,
                rings = painted,
                "ring target"
            );
            (t.placement, painted)
        })
        .collect();

    for guide in &layout.guides {
        surface.stroke_line(
            guide.from,
            guide.to,
            &LineStyle::solid(guide.width, style.guide),
        );
    }

    TableRender {
        layout,
        moire_rows,
        rings,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pattern/table.rs"]
mod tests;
