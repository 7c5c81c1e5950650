use std::path::PathBuf;

use super::*;

fn checker(width: u32, height: u32) -> FrameRGBA {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let v = if (x + y) % 2 == 0 { 255 } else { 0 };
            data.extend_from_slice(&[v, v, v, 255]);
        }
    }
    FrameRGBA {
        width,
        height,
        data,
        premultiplied: true,
    }
}

#[test]
fn encoded_png_decodes_to_same_pixels() {
    let frame = checker(5, 3);
    let bytes = encode_png(&frame).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (5, 3));
    assert_eq!(decoded.into_raw(), frame.data);
}

#[test]
fn empty_frame_cannot_be_exported() {
    let err = encode_png(&FrameRGBA::empty(0, 10)).unwrap_err();
    assert!(matches!(err, TableError::Export(_)));
}

#[test]
fn mismatched_buffer_is_an_export_error() {
    let mut frame = checker(4, 4);
    frame.data.truncate(8);
    assert!(matches!(encode_png(&frame), Err(TableError::Export(_))));
}

#[test]
fn write_image_creates_parent_dirs() {
    let dir = PathBuf::from("target").join("unit_export");
    let out = dir.join("nested").join("checker.png");
    let _ = std::fs::remove_file(&out);

    write_image(&checker(6, 6), &out).unwrap();
    let decoded = image::open(&out).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (6, 6));
}
