//! moiretable renders a film camera alignment table.
//!
//! The table is a centred 4:3 frame (full surface height) filled with a dashed line moire
//! texture, five radial ring targets (one centred, four tangent to the frame corners) and six
//! pixel-exact guide lines through the target centres. It is recomputed from scratch for every
//! surface size.
//!
//! # Pipeline overview
//!
//! 1. **Layout**: `SurfaceSize -> TableLayout` (frame rect, corner target radius, targets, guides)
//! 2. **Paint**: [`render_table`] drives any [`DrawSurface`]
//! 3. **Raster**: [`CpuSurface`] resolves the draw calls with `vello_cpu` into a [`FrameRGBA`]
//! 4. **Export** (optional): [`write_image`] / [`encode_png`]
//!
//! For a walkthrough of the geometry see [`crate::guide`].
#![forbid(unsafe_code)]

mod export;
mod foundation;
mod layout;
mod pattern;
mod render;
mod session;
mod settings;

/// Standalone documentation of the table geometry and rendering model.
pub mod guide;

pub use export::png::{encode_png, write_image};
pub use foundation::core::{Point, Rect, Rgba8, SurfaceSize, TRANSPARENT};
pub use foundation::error::{TableError, TableResult};
pub use layout::frame::{
    FRAME_ASPECT, corner_target_diameter, frame_layout, pixel_perfect_line_width,
    pixel_perfect_line_width_px,
};
pub use layout::table::{GuideAxis, GuideLine, TableLayout, TargetPlacement, TargetSpec};
pub use pattern::lines::{MoireRow, MoireRows, draw_line_moire};
pub use pattern::rings::{RING_FEATHER_PX, Ring, RingProgression, draw_ring_target};
pub use pattern::table::{TableRender, render_table};
pub use render::cpu::CpuSurface;
pub use render::frame::FrameRGBA;
pub use render::recording::{DrawOp, RecordingSurface};
pub use render::surface::{Dash, DrawSurface, GradientStop, LineStyle, RadialGradient};
pub use session::{TableRenderer, render_table_rgba};
pub use settings::TableStyle;
