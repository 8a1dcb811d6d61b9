use serde::Serialize;

use crate::types::{PositionSample, Viewport};

pub const START_MARKER_RADIUS: f64 = 6.0;
pub const LIVE_MARKER_RADIUS: f64 = 8.0;
pub const LIVE_HALO_RADIUS: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CanvasPoint {
    pub x: f64,
    pub y: f64,
}

/// Markør for siste rå posisjon, med halo som skiller "live" fra historikk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LiveMarker {
    pub at: CanvasPoint,
    pub radius: f64,
    pub halo_radius: f64,
}

/// Én ferdig tegnet frame: polyline gjennom hele ruten, startmarkør,
/// og eventuelt live-markør. Ren verdi uten tegnetilstand – samme
/// input gir alltid samme frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub path: Vec<CanvasPoint>,
    pub start_marker: CanvasPoint,
    pub live_marker: Option<LiveMarker>,
}

#[derive(Debug, Clone, Copy)]
struct Bounds {
    min_lat: f64,
    max_lat: f64,
    min_lng: f64,
    max_lng: f64,
}

fn bounds_of(route: &[PositionSample]) -> Bounds {
    let mut b = Bounds {
        min_lat: f64::INFINITY,
        max_lat: f64::NEG_INFINITY,
        min_lng: f64::INFINITY,
        max_lng: f64::NEG_INFINITY,
    };
    for p in route {
        b.min_lat = b.min_lat.min(p.lat);
        b.max_lat = b.max_lat.max(p.lat);
        b.min_lng = b.min_lng.min(p.lng);
        b.max_lng = b.max_lng.max(p.lng);
    }
    b
}

// Spenn på null (alle punkter på samme meridian/parallell) gir
// divisor 1.0 i stedet for divisjon på null; ruten kollapser da til
// en rett linje innenfor flaten. Stilltiende fallback, aldri en feil.
fn span_or_one(span: f64) -> f64 {
    if span == 0.0 {
        1.0
    } else {
        span
    }
}

fn project(p: &PositionSample, b: &Bounds, vp: &Viewport) -> CanvasPoint {
    let scale_x = (vp.width - 2.0 * vp.padding) / span_or_one(b.max_lng - b.min_lng);
    let scale_y = (vp.height - 2.0 * vp.padding) / span_or_one(b.max_lat - b.min_lat);

    // Y inverteres: breddegrad øker nordover, canvas-Y nedover.
    CanvasPoint {
        x: vp.padding + (p.lng - b.min_lng) * scale_x,
        y: vp.height - vp.padding - (p.lat - b.min_lat) * scale_y,
    }
}

/// Projiserer ruten inn i viewporten og bygger en frame.
/// Under 2 punkter tegnes ingenting (`None`), som i kildeatferden.
pub fn render(
    route: &[PositionSample],
    current: Option<&PositionSample>,
    viewport: &Viewport,
) -> Option<Frame> {
    if route.len() < 2 {
        return None;
    }

    let b = bounds_of(route);
    let path: Vec<CanvasPoint> = route.iter().map(|p| project(p, &b, viewport)).collect();
    let start_marker = path[0];

    // Live-markør projiseres mot rutens bounding box, også når den rå
    // posisjonen ligger utenfor (f.eks. avviste samples under pause).
    let live_marker = current.map(|c| LiveMarker {
        at: project(c, &b, viewport),
        radius: LIVE_MARKER_RADIUS,
        halo_radius: LIVE_HALO_RADIUS,
    });

    Some(Frame {
        path,
        start_marker,
        live_marker,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(lat: f64, lng: f64) -> PositionSample {
        PositionSample {
            lat,
            lng,
            timestamp_ms: 0,
            speed_ms: None,
        }
    }

    #[test]
    fn test_corners_map_into_padding() {
        let vp = Viewport::default();
        let route = [p(0.0, 0.0), p(1.0, 1.0)];
        let b = bounds_of(&route);

        let sw = project(&route[0], &b, &vp);
        let ne = project(&route[1], &b, &vp);

        assert!((sw.x - vp.padding).abs() < 1e-9);
        assert!((sw.y - (vp.height - vp.padding)).abs() < 1e-9);
        assert!((ne.x - (vp.width - vp.padding)).abs() < 1e-9);
        assert!((ne.y - vp.padding).abs() < 1e-9);
    }

    #[test]
    fn test_zero_span_uses_unit_divisor() {
        assert_eq!(span_or_one(0.0), 1.0);
        assert_eq!(span_or_one(0.5), 0.5);
    }
}
