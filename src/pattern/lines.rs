use std::iter::FusedIterator;

use crate::{
    foundation::core::{Point, Rect, Rgba8},
    layout::frame::pixel_perfect_line_width_px,
    render::surface::{Dash, DrawSurface, LineStyle},
};

/// One dashed row of the line moire texture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoireRow {
    pub index: u32,
    pub from: Point,
    pub to: Point,
    pub dash: Dash,
}

/// Rows of `cell`-long dashes, each row `cell` tall, consecutive rows shifted by one dash.
///
/// The dash phase alternates per generated row (`0`, `cell`, `0`, ...). Rows are produced while the
/// row's top offset does not exceed the rect height.
#[derive(Clone, Debug)]
pub struct MoireRows {
    rect: Rect,
    cell: f64,
    offset: f64,
    index: u32,
}

impl MoireRows {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            cell: f64::from(pixel_perfect_line_width_px(rect.height) * 2),
            offset: 0.0,
            index: 0,
        }
    }

    /// Dash length, dash gap and row pitch.
    pub fn cell_size(&self) -> f64 {
        self.cell
    }
}

impl Iterator for MoireRows {
    type Item = MoireRow;

    fn next(&mut self) -> Option<MoireRow> {
        if !(self.offset <= self.rect.height) {
            return None;
        }
        let y = self.rect.y + self.offset + self.cell / 2.0;
        let phase = if self.index % 2 == 0 { 0.0 } else { self.cell };
        let row = MoireRow {
            index: self.index,
            from: Point::new(self.rect.x, y),
            to: Point::new(self.rect.right(), y),
            dash: Dash {
                on: self.cell,
                off: self.cell,
                phase,
            },
        };
        self.offset += self.cell;
        self.index += 1;
        Some(row)
    }
}

impl FusedIterator for MoireRows {}

/// Paint the checkerboard-like dashed texture over `rect`. Returns the number of rows drawn.
pub fn draw_line_moire<S: DrawSurface + ?Sized>(
    surface: &mut S,
    rect: Rect,
    color: Rgba8,
) -> usize {
    let rows = MoireRows::new(rect);
    let width = rows.cell_size();
    rows.fold(0, |drawn, row| {
        surface.stroke_line(row.from, row.to, &LineStyle::dashed(width, color, row.dash));
        drawn + 1
    })
}

#[cfg(test)]
#[path = "../../tests/unit/pattern/lines.rs"]
mod tests;
