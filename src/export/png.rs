use std::{io::Cursor, path::Path};

use crate::{
    foundation::error::{TableError, TableResult},
    render::frame::FrameRGBA,
};

fn to_image(frame: &FrameRGBA) -> TableResult<image::RgbaImage> {
    if frame.data.is_empty() {
        return Err(TableError::export(format!(
            "nothing to export for an empty {}x{} frame",
            frame.width, frame.height
        )));
    }
    image::RgbaImage::from_raw(frame.width, frame.height, frame.to_straight_rgba8())
        .ok_or_else(|| TableError::export("frame byte length does not match its dimensions"))
}

/// Encode a frame as PNG bytes.
pub fn encode_png(frame: &FrameRGBA) -> TableResult<Vec<u8>> {
    let img = to_image(frame)?;
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)
        .map_err(|e| TableError::export(format!("encode png: {e}")))?;
    Ok(out.into_inner())
}

/// Write a frame to `path`, picking the format from the extension (PNG when unknown).
///
/// Formats without an alpha channel get the RGB channels only.
pub fn write_image(frame: &FrameRGBA, path: &Path) -> TableResult<()> {
    let img = to_image(frame)?;
    let format = image::ImageFormat::from_path(path).unwrap_or(image::ImageFormat::Png);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            TableError::export(format!("create output dir '{}': {e}", parent.display()))
        })?;
    }

    let img = match format {
        image::ImageFormat::Jpeg | image::ImageFormat::Bmp | image::ImageFormat::Pnm => {
            image::DynamicImage::ImageRgb8(image::DynamicImage::ImageRgba8(img).to_rgb8())
        }
        _ => image::DynamicImage::ImageRgba8(img),
    };
    img.save_with_format(path, format)
        .map_err(|e| TableError::export(format!("write '{}': {e}", path.display())))?;

    tracing::info!(path = %path.display(), format = ?format, "wrote table image");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/export/png.rs"]
mod tests;
