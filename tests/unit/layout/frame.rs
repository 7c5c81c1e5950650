use super::*;

#[test]
fn frame_fills_a_4_by_3_surface_exactly() {
    let f = frame_layout(1200.0, 900.0);
    assert_eq!(f, Rect::new(0.0, 0.0, 1200.0, 900.0));
    assert_eq!(pixel_perfect_line_width_px(f.height), 4);
}

#[test]
fn frame_overflows_a_narrow_surface() {
    let f = frame_layout(1000.0, 900.0);
    assert_eq!(f.width, 1200.0);
    assert_eq!(f.height, 900.0);
    assert_eq!(f.x, -100.0);
    assert_eq!(f.y, 0.0);
}

#[test]
fn frame_is_centered_and_floored() {
    for (w, h) in [(1920u32, 1080u32), (1921, 1081), (333, 77), (1, 1), (5000, 7)] {
        let (wf, hf) = (f64::from(w), f64::from(h));
        let f = frame_layout(wf, hf);
        assert_eq!(f.height, hf);
        assert_eq!(f.width, (hf * 4.0 / 3.0).floor());
        assert_eq!(f.x, ((wf - f.width) / 2.0).floor());
        assert_eq!(f.y, 0.0);
    }
}

#[test]
fn zero_surface_gives_zero_frame() {
    assert_eq!(frame_layout(0.0, 0.0), Rect::new(0.0, 0.0, 0.0, 0.0));
    let f = frame_layout(640.0, 0.0);
    assert_eq!(f.width, 0.0);
    assert_eq!(f.x, 320.0);
}

#[test]
fn line_width_follows_parity() {
    for v in 0u32..200 {
        let expected = if v % 2 == 1 { 3 } else { 4 };
        assert_eq!(pixel_perfect_line_width(v), expected, "value {v}");
    }
    assert_eq!(pixel_perfect_line_width(u32::MAX), 3);
    assert_eq!(pixel_perfect_line_width_px(899.0), 3);
    assert_eq!(pixel_perfect_line_width_px(-3.0), 4);
}

#[test]
fn corner_solve_on_square_reduces_to_quarter_pi() {
    for side in [2.0, 100.0, 600.0, 1337.0] {
        let b = side / 2.0;
        let expected = b - b * FRAC_PI_4.sin();
        let d = corner_target_diameter(Rect::new(0.0, 0.0, side, side)).unwrap();
        assert!((d - expected).abs() < 1e-9, "side {side}: {d} vs {expected}");
    }
}

#[test]
fn corner_solve_800_by_600() {
    let d = corner_target_diameter(Rect::new(0.0, 0.0, 800.0, 600.0)).unwrap();
    let (a, b) = (400.0f64, 300.0f64);
    let y = FRAC_PI_4 - (-(b - a) / b).asin();
    assert_eq!(d, b - b * y.sin());
    assert!((d - 170.710_678_118_654_76).abs() < 1e-9);

    let radius = d / 2.0;
    assert!(radius > 0.0);
    assert!(radius < b);
}

#[test]
fn corner_solve_is_stable_and_translation_free() {
    let a = corner_target_diameter(Rect::new(0.0, 0.0, 1200.0, 900.0)).unwrap();
    let b = corner_target_diameter(Rect::new(-100.0, 7.0, 1200.0, 900.0)).unwrap();
    assert_eq!(a.to_bits(), b.to_bits());
    assert!((a - 256.066_017_177_982_1).abs() < 1e-9);
}

#[test]
fn corner_solve_rejects_degenerate_rects() {
    assert_eq!(corner_target_diameter(Rect::new(0.0, 0.0, 100.0, 0.0)), None);
    assert_eq!(corner_target_diameter(Rect::new(0.0, 0.0, 500.0, 100.0)), None);
}
