use thiserror::Error;

use crate::types::SessionState;

/// Feil fra kommandoene (start/pause/resume/stop).
///
/// Asynkrone posisjonsfeil går IKKE her – de leveres på feilkanalen
/// og lagres som rådgivende `last_error`-tekst på økten.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackError {
    /// Posisjonskilde mangler ved start. Økten forblir Idle.
    #[error("posisjonskilde er ikke tilgjengelig")]
    CapabilityUnavailable,

    /// Kommando i feil tilstand, f.eks. resume uten pause.
    #[error("ugyldig kommando `{command}` i tilstand {state:?}")]
    InvalidTransition {
        command: &'static str,
        state: SessionState,
    },
}
