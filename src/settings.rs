use std::{fs::File, io::BufReader, path::Path};

use crate::foundation::{
    core::{Rgba8, TRANSPARENT},
    error::{TableError, TableResult},
};
use crate::render::surface::GradientStop;

/// Colours of the alignment table, as straight RGBA8.
///
/// Missing fields in JSON fall back to the defaults: black surround, white frame, black line
/// texture and guides, white/black rings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableStyle {
    /// Surface area outside the frame.
    pub background: Rgba8,
    /// Frame fill below the textures.
    pub frame: Rgba8,
    /// Dashes of the line moire texture.
    pub texture: Rgba8,
    pub guide: Rgba8,
    pub ring_light: Rgba8,
    pub ring_dark: Rgba8,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            background: [0, 0, 0, 255],
            frame: [255, 255, 255, 255],
            texture: [0, 0, 0, 255],
            guide: [0, 0, 0, 255],
            ring_light: [255, 255, 255, 255],
            ring_dark: [0, 0, 0, 255],
        }
    }
}

impl TableStyle {
    pub fn from_json_str(s: &str) -> TableResult<Self> {
        serde_json::from_str(s).map_err(|e| TableError::serde(format!("table style: {e}")))
    }

    pub fn from_json_path(path: &Path) -> TableResult<Self> {
        let f = File::open(path).map_err(|e| {
            TableError::validation(format!("open table style '{}': {e}", path.display()))
        })?;
        serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            TableError::serde(format!("parse table style '{}': {e}", path.display()))
        })
    }

    /// Colour stops of one soft-edged ring band.
    pub fn ring_stops(&self) -> Vec<GradientStop> {
        [
            (0.0, TRANSPARENT),
            (0.1, self.ring_light),
            (0.45, self.ring_dark),
            (0.55, self.ring_dark),
            (0.9, self.ring_light),
            (1.0, TRANSPARENT),
        ]
        .into_iter()
        .map(|(offset, color)| GradientStop { offset, color })
        .collect()
    }
}

#[cfg(test)]
#[path = "../tests/unit/settings.rs"]
mod tests;
