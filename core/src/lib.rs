pub mod errors;
pub mod metrics;
pub mod policy;
pub mod project;
pub mod session;
pub mod source;
pub mod stats;
pub mod types;

pub use errors::TrackError;
pub use project::Frame;
pub use session::{Generation, Tracker};
pub use source::{PositionSource, StaticPositionSource, SubscriptionId};
pub use types::{
    EffectiveType, NetworkQuality, PositionSample, SamplingConfig, SessionState, TrackerSnapshot,
    Viewport, WorkoutStats,
};
