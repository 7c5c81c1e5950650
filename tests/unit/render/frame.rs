use super::*;

#[test]
fn pixel_lookup_is_row_major_and_bounded() {
    let frame = FrameRGBA {
        width: 2,
        height: 2,
        data: vec![
            1, 1, 1, 255, 2, 2, 2, 255, //
            3, 3, 3, 255, 4, 4, 4, 255,
        ],
        premultiplied: true,
    };
    assert_eq!(frame.pixel(0, 0), Some([1, 1, 1, 255]));
    assert_eq!(frame.pixel(1, 0), Some([2, 2, 2, 255]));
    assert_eq!(frame.pixel(0, 1), Some([3, 3, 3, 255]));
    assert_eq!(frame.pixel(2, 0), None);
    assert_eq!(frame.pixel(0, 2), None);
}

#[test]
fn unpremultiply_restores_straight_colors() {
    let frame = FrameRGBA {
        width: 3,
        height: 1,
        data: vec![128, 0, 64, 128, 10, 20, 30, 255, 0, 0, 0, 0],
        premultiplied: true,
    };
    let straight = frame.to_straight_rgba8();
    assert_eq!(&straight[0..4], &[255, 0, 128, 128]);
    assert_eq!(&straight[4..8], &[10, 20, 30, 255]);
    assert_eq!(&straight[8..12], &[0, 0, 0, 0]);
}

#[test]
fn empty_frame_has_no_pixels() {
    let frame = FrameRGBA::empty(0, 480);
    assert!(frame.data.is_empty());
    assert_eq!(frame.pixel(0, 0), None);
}
