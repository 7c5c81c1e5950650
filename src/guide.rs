//! # moiretable guide
//!
//! A walkthrough of what the alignment table contains, how each piece is sized, and how a
//! render flows from a surface size to pixels.
//!
//! ---
//!
//! ## The table
//!
//! The drawing surface is filled black. Inside it sits the **frame**, a 4:3 rectangle spanning
//! the full surface height and centred horizontally:
//!
//! - `frame.width = floor(H * 4/3)`
//! - `frame.x = floor((W - frame.width) / 2)`, `frame.y = 0`
//!
//! On surfaces narrower than 4:3 the frame is wider than the surface and `frame.x` is negative.
//! Everything is still drawn in frame coordinates and clipped by the surface.
//!
//! The frame is painted white, then covered with:
//!
//! 1. the **line moire** texture ([`MoireRows`](crate::MoireRows)): rows of dashes one cell tall,
//!    consecutive rows shifted by one dash, which reads as a fine checkerboard;
//! 2. five **ring targets** ([`RingProgression`](crate::RingProgression)), one at the frame
//!    centre with radius `H/2` and four tangent to the frame corners;
//! 3. six **guide lines**: three horizontal, three vertical, through the target centres.
//!
//! ---
//!
//! ## Crisp strokes
//!
//! [`pixel_perfect_line_width`](crate::pixel_perfect_line_width) picks 3 px for odd dimensions
//! and 4 px for even ones. A line through the middle of an odd region is centred on a
//! half-pixel, one through an even region on a pixel edge; matching the stroke parity keeps
//! both edges on pixel boundaries.
//!
//! The line texture cell is twice that width (6 or 8 px), used for the stroke width, the dash
//! length, the gap and the row pitch.
//!
//! ---
//!
//! ## Corner targets
//!
//! [`corner_target_diameter`](crate::corner_target_diameter) solves, in closed form, for the
//! circle tucked into a frame corner:
//!
//! ```text
//! a = width / 2, b = height / 2
//! y = PI/4 - asin(-(b - a) / b)
//! X = b - b * sin(y)
//! ```
//!
//! `X` is the target diameter. The corner target radius `X / 2` is computed exactly once per
//! layout ([`TableLayout`](crate::TableLayout)) and used for both the target centres (inset by
//! the radius on both axes) and the four off-centre guide lines, so lines and targets coincide.
//!
//! ---
//!
//! ## Ring progression
//!
//! Each target is a stack of soft bands (transparent, light, dark, dark, light, transparent).
//! Band widths form a geometric progression:
//!
//! ```text
//! start = floor(rect.height / 50), or outR / 10 if that leaves room for fewer than 20 rings
//! q     = (1 / start) ^ (1 / (outR / 5))
//! width(step) = start * q^(step - 1)
//! ```
//!
//! Radii start at `start`. A band spans `[r - 5, r + width]`. The progression stops at the first
//! band that starts inside 5 px, is 1 px wide or less, or would cross `outR`.
//!
//! ---
//!
//! ## Surfaces and rendering
//!
//! [`render_table`](crate::render_table) paints through the
//! [`DrawSurface`](crate::DrawSurface) trait and returns a [`TableRender`](crate::TableRender)
//! summary. Two surfaces ship with the crate:
//!
//! - [`CpuSurface`](crate::CpuSurface): rasterizes with `vello_cpu` into premultiplied RGBA8;
//! - [`RecordingSurface`](crate::RecordingSurface): records [`DrawOp`](crate::DrawOp)s, useful
//!   for tests and for inspecting a layout as JSON.
//!
//! [`TableRenderer`](crate::TableRenderer) is the entry point for interactive hosts: call
//! `render(size)` at startup and on every resize. Each call repaints from scratch.
//!
//! ```rust,no_run
//! use moiretable::{SurfaceSize, TableRenderer, TableStyle, write_image};
//!
//! # fn main() -> moiretable::TableResult<()> {
//! let mut renderer = TableRenderer::new(TableStyle::default());
//! let frame = renderer.render(SurfaceSize::new(1920, 1080))?;
//! assert_eq!(frame.data.len(), 1920 * 1080 * 4);
//! write_image(&frame, std::path::Path::new("table.png"))?;
//! # Ok(())
//! # }
//! ```
