use geotrack_core::project::{render, LIVE_HALO_RADIUS, LIVE_MARKER_RADIUS};
use geotrack_core::{PositionSample, Viewport};

fn sample(lat: f64, lng: f64, t: u64) -> PositionSample {
    PositionSample {
        lat,
        lng,
        timestamp_ms: t,
        speed_ms: None,
    }
}

#[test]
fn test_fewer_than_two_points_draws_nothing() {
    let vp = Viewport::default();
    assert!(render(&[], None, &vp).is_none());
    assert!(render(&[sample(59.91, 10.75, 0)], None, &vp).is_none());
}

#[test]
fn test_same_meridian_collapses_to_vertical_line() {
    // Alle punkter på samme lengdegrad: null spenn i X, men ingen
    // divisjon på null – alt skal ligge på én vertikal linje.
    let vp = Viewport::default();
    let route = vec![
        sample(59.90, 10.75, 0),
        sample(59.92, 10.75, 1000),
        sample(59.95, 10.75, 2000),
    ];

    let frame = render(&route, None, &vp).unwrap();
    assert_eq!(frame.path.len(), 3);

    let x0 = frame.path[0].x;
    for p in &frame.path {
        assert!((p.x - x0).abs() < 1e-9);
        assert!(p.x.is_finite() && p.y.is_finite());
        assert!(p.x >= 0.0 && p.x <= vp.width);
        assert!(p.y >= 0.0 && p.y <= vp.height);
    }
}

#[test]
fn test_y_axis_is_inverted() {
    // Nordligste punkt skal øverst på flaten (minst Y)
    let vp = Viewport::default();
    let route = vec![sample(59.90, 10.70, 0), sample(59.95, 10.80, 1000)];

    let frame = render(&route, None, &vp).unwrap();
    assert!(frame.path[1].y < frame.path[0].y);
}

#[test]
fn test_start_marker_is_first_projected_point() {
    let vp = Viewport::default();
    let route = vec![sample(59.90, 10.70, 0), sample(59.95, 10.80, 1000)];

    let frame = render(&route, None, &vp).unwrap();
    assert_eq!(frame.start_marker, frame.path[0]);
    assert!(frame.live_marker.is_none());
}

#[test]
fn test_live_marker_with_halo() {
    let vp = Viewport::default();
    let route = vec![sample(59.90, 10.70, 0), sample(59.95, 10.80, 1000)];
    let current = sample(59.95, 10.80, 2000);

    let frame = render(&route, Some(&current), &vp).unwrap();
    let marker = frame.live_marker.unwrap();

    assert_eq!(marker.at, frame.path[1]); // samme koordinater
    assert_eq!(marker.radius, LIVE_MARKER_RADIUS);
    assert_eq!(marker.halo_radius, LIVE_HALO_RADIUS);
    assert!(marker.halo_radius > marker.radius);
}

#[test]
fn test_render_is_idempotent() {
    let vp = Viewport::default();
    let route = vec![
        sample(59.90, 10.70, 0),
        sample(59.91, 10.72, 1000),
        sample(59.93, 10.71, 2000),
    ];
    let current = sample(59.93, 10.71, 2000);

    let a = render(&route, Some(&current), &vp);
    let b = render(&route, Some(&current), &vp);
    assert_eq!(a, b);
}
