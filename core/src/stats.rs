use crate::types::{PositionSample, WorkoutStats};

/// Jordradius i km (middelverdi).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

const MS_PER_HOUR: f64 = 3_600_000.0;

/// Storsirkelavstand (haversine) mellom to punkter, i km.
pub fn haversine_km(a: &PositionSample, b: &PositionSample) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Full rekalkulering av statistikk fra ruten. O(n) per kall, ingen
/// inkrementell tilstand – resultatet er alltid konsistent med ruten
/// slik den står nå, uansett hvor mange ganger vi kalles.
///
/// `duration_s` eies av tickeren (veggklokke), ikke av timestamps,
/// og flyter urørt gjennom.
///
/// Segmenter med dt == 0 skal ikke forekomme (strengt økende
/// timestamps), men vaktes likevel: de holdes utenfor både max og
/// snitt i stedet for å gi uendelig fart.
pub fn compute(route: &[PositionSample], duration_s: f64) -> WorkoutStats {
    let mut distance_km = 0.0;
    let mut max_kmh = 0.0f64;
    let mut speed_sum = 0.0;
    let mut speed_cnt = 0usize;

    for pair in route.windows(2) {
        let seg_km = haversine_km(&pair[0], &pair[1]);
        distance_km += seg_km;

        let dt_ms = pair[1].timestamp_ms.saturating_sub(pair[0].timestamp_ms);
        if dt_ms == 0 {
            continue;
        }
        let kmh = seg_km / (dt_ms as f64 / MS_PER_HOUR);

        speed_sum += kmh;
        speed_cnt += 1;
        if kmh > max_kmh {
            max_kmh = kmh;
        }
    }

    let avg_kmh = if speed_cnt > 0 {
        speed_sum / speed_cnt as f64
    } else {
        0.0
    };

    WorkoutStats {
        duration_s,
        distance_km,
        avg_speed_kmh: avg_kmh,
        max_speed_kmh: max_kmh,
    }
}
