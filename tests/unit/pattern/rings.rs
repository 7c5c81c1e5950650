use super::*;
use crate::foundation::core::SurfaceSize;
use crate::render::recording::RecordingSurface;
use crate::settings::TableStyle;

fn assert_ring_invariants(outer_radius: f64, rect_height: f64) -> Vec<Ring> {
    let rings: Vec<Ring> = RingProgression::new(outer_radius, rect_height).collect();
    for r in &rings {
        assert!(r.radius >= RING_FEATHER_PX, "{r:?}");
        assert!(r.width > 1.0, "{r:?}");
        assert!(r.radius + r.width <= outer_radius, "{r:?}");
    }
    for pair in rings.windows(2) {
        assert_eq!(pair[1].step, pair[0].step + 1);
        assert_eq!(pair[1].radius, pair[0].radius + pair[0].width);
        assert!(pair[1].width < pair[0].width);
    }
    rings
}

#[test]
fn center_target_of_900_high_frame() {
    let p = RingProgression::new(450.0, 900.0);
    assert_eq!(p.start_width(), 18.0);
    assert!((p.ratio() - 0.968_394_976_112_486_3).abs() < 1e-12);

    let rings = assert_ring_invariants(450.0, 900.0);
    assert_eq!(rings.len(), 44);
    assert_eq!(
        rings[0],
        Ring {
            step: 1,
            radius: 18.0,
            width: 18.0
        }
    );
    assert_eq!(rings[43].step, 44);
}

#[test]
fn small_targets_switch_to_tenth_of_radius() {
    // 900 / 50 = 18 would leave room for fewer than 20 rings in a 120px target.
    let p = RingProgression::new(120.0, 900.0);
    assert_eq!(p.start_width(), 12.0);
    let rings = assert_ring_invariants(120.0, 900.0);
    assert_eq!(rings.len(), 20);
}

#[test]
fn corner_target_of_900_high_frame() {
    let r = 128.033_008_588_991;
    let rings = assert_ring_invariants(r, 900.0);
    assert_eq!(rings.len(), 19);
    assert!((rings[0].width - r / 10.0).abs() < 1e-12);
}

#[test]
fn degenerate_radii_produce_no_rings() {
    for r in [0.0, -10.0, f64::NAN, f64::INFINITY] {
        assert_eq!(RingProgression::new(r, 900.0).count(), 0, "radius {r}");
    }
    assert_eq!(RingProgression::new(450.0, 0.0).count(), 0);
}

#[test]
fn tiny_frames_stop_before_the_feather_radius() {
    // start width 2 (< 5) ends the progression immediately.
    assert_eq!(RingProgression::new(50.0, 100.0).count(), 0);
    assert_eq!(RingProgression::new(30.0, 600.0).count(), 0);
}

#[test]
fn progression_is_restartable_and_fused() {
    let p = RingProgression::new(540.0, 1080.0);
    let a: Vec<Ring> = p.clone().collect();
    let b: Vec<Ring> = p.collect();
    assert_eq!(a, b);
    assert_eq!(a.len(), 41);

    let mut p = RingProgression::new(540.0, 1080.0);
    for _ in p.by_ref() {}
    assert_eq!(p.next(), None);
    assert_eq!(p.next(), None);
}

#[test]
fn ring_band_starts_inside_nominal_radius() {
    let ring = Ring {
        step: 3,
        radius: 40.0,
        width: 12.0,
    };
    assert_eq!(ring.band(), (35.0, 52.0));
    let g = ring.gradient(Point::new(1.0, 2.0), TableStyle::default().ring_stops());
    assert_eq!(g.inner_radius, 35.0);
    assert_eq!(g.outer_radius, 52.0);
    assert_eq!(g.center, Point::new(1.0, 2.0));
    assert_eq!(g.stops.len(), 6);
}

#[test]
fn draw_paints_one_clipped_gradient_per_ring() {
    let rect = Rect::new(-100.0, 0.0, 1200.0, 900.0);
    let center = rect.center();
    let mut surface = RecordingSurface::new(SurfaceSize::new(1000, 900));
    let stops = TableStyle::default().ring_stops();

    let painted = draw_ring_target(&mut surface, center, 450.0, rect, &stops);
    assert_eq!(painted, 44);
    assert_eq!(surface.gradients().count(), 44);

    let expected: Vec<Ring> = RingProgression::new(450.0, 900.0).collect();
    for ((g, clip), ring) in surface.gradients().zip(expected) {
        assert_eq!(*clip, rect);
        assert_eq!(g.center, center);
        assert_eq!((g.inner_radius, g.outer_radius), ring.band());
        assert_eq!(g.stops, stops);
    }
}

#[test]
fn draw_with_zero_radius_paints_nothing() {
    let mut surface = RecordingSurface::new(SurfaceSize::new(10, 10));
    let stops = TableStyle::default().ring_stops();
    let painted = draw_ring_target(
        &mut surface,
        Point::new(5.0, 5.0),
        0.0,
        Rect::new(0.0, 0.0, 10.0, 10.0),
        &stops,
    );
    assert_eq!(painted, 0);
    assert!(surface.ops().is_empty());
}
