use geotrack_core::stats::haversine_km;
use geotrack_core::{PositionSample, StaticPositionSource, Tracker};

// Liten GPS-trace som CSV-fixture, spilt gjennom hele pipelinen.
const TRACE: &str = "\
lat,lng,timestamp_ms,speed_ms
59.9100,10.7500,0,
59.9105,10.7512,5000,2.1
59.9111,10.7525,10000,2.3
59.9118,10.7531,15000,
59.9125,10.7540,20000,2.0
";

fn read_trace() -> Vec<PositionSample> {
    let mut reader = csv::Reader::from_reader(TRACE.as_bytes());
    reader
        .deserialize()
        .collect::<Result<Vec<PositionSample>, _>>()
        .unwrap()
}

#[test]
fn test_csv_trace_replays_through_pipeline() {
    let samples = read_trace();
    assert_eq!(samples.len(), 5);
    assert_eq!(samples[1].speed_ms, Some(2.1));
    assert_eq!(samples[3].speed_ms, None);

    let mut t = Tracker::new(StaticPositionSource::new());
    t.start(0).unwrap();
    let gen = t.generation();

    for s in &samples {
        t.on_sample(gen, *s);
    }
    t.on_tick(gen, 20_000);

    assert_eq!(t.route().len(), 5);

    let expected_km: f64 = samples
        .windows(2)
        .map(|pair| haversine_km(&pair[0], &pair[1]))
        .sum();
    let stats = t.stats();

    assert!((stats.distance_km - expected_km).abs() < 1e-12);
    assert_eq!(stats.duration_s, 20.0);
    assert!(stats.avg_speed_kmh > 0.0);
    assert!(stats.max_speed_kmh >= stats.avg_speed_kmh);

    // Frame tegnes og live-markøren står på siste punkt
    let frame = t.frame().unwrap();
    assert_eq!(frame.path.len(), 5);
    assert!(frame.live_marker.is_some());
}
