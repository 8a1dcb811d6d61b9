use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionSample {
    pub lat: f64,                // grader, [-90, 90]
    pub lng: f64,                // grader, [-180, 180]
    pub timestamp_ms: u64,       // ms, strengt økende innen en rute
    pub speed_ms: Option<f64>,   // m/s fra kilden, hvis tilgjengelig
}

/// Effektiv forbindelsesklasse fra nettverksmonitoren.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectiveType {
    #[serde(rename = "slow-2g")]
    Slow2g,
    #[serde(rename = "2g")]
    Cell2g,
    #[serde(rename = "3g")]
    Cell3g,
    #[serde(rename = "4g")]
    Cell4g,
    #[serde(rename = "unknown")]
    Unknown,
}

/// Øyeblikksbilde av nettverkskvalitet. Erstattes i sin helhet ved
/// hver oppdatering, ingen historikk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetworkQuality {
    pub effective_type: EffectiveType,
    pub downlink_mbps: f64,
    pub rtt_ms: u32,
    pub save_data: bool,
}

/// Parametre for posisjonskilden, avledet av sampling-policyen.
/// Aldri persistert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplingConfig {
    pub high_accuracy: bool,
    pub timeout_ms: u32,
    pub maximum_age_ms: u32,
}

impl Default for SamplingConfig {
    // Raden for 3g/4g/unknown/ingen data ennå
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout_ms: 10_000,
            maximum_age_ms: 1_000,
        }
    }
}

/// Rekalkuleres i sin helhet fra ruten ved hver endring; durationen
/// kommer fra tickeren, ikke fra sample-timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct WorkoutStats {
    pub duration_s: f64,
    pub distance_km: f64,
    pub avg_speed_kmh: f64,
    pub max_speed_kmh: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Idle,
    Tracking,
    Paused,
    Stopped,
}

/// Tegneflatens geometri. Default matcher 400x300-canvas med 20 px padding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 300.0,
            padding: 20.0,
        }
    }
}

/// Lesesnapshot for presentasjonslaget. Kun verdier ut, aldri inn.
#[derive(Debug, Clone, Serialize)]
pub struct TrackerSnapshot {
    pub state: SessionState,
    pub stats: WorkoutStats,
    pub current_position: Option<PositionSample>,
    pub last_error: Option<String>,
    pub online: bool,
    pub network: Option<NetworkQuality>,
    pub route_len: usize,
    pub start_time_utc: Option<DateTime<Utc>>,
}
