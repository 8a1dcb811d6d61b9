use chrono::{DateTime, TimeZone, Utc};
use log::{debug, info, warn};

use crate::errors::TrackError;
use crate::metrics;
use crate::policy;
use crate::project::{self, Frame};
use crate::source::{PositionSource, SubscriptionId};
use crate::stats;
use crate::types::{
    NetworkQuality, PositionSample, SessionState, TrackerSnapshot, Viewport, WorkoutStats,
};

/// Generasjonsnummer for økten. Alle leveranser fra kilden merkes med
/// generasjonen de ble abonnert under; etternølere fra en avsluttet
/// økt faller på gulvet.
pub type Generation = u64;

/// Sporingskjernen: tilstandsmaskin, rute og pipeline.
///
/// Én logisk tråd: hvert entry point (kommando, sample, tick,
/// nettverksendring) kjører hele pipelinen ferdig før neste hendelse,
/// så rute og statistikk er alltid konsistente utenfra.
pub struct Tracker<S: PositionSource> {
    source: S,
    viewport: Viewport,

    state: SessionState,
    generation: Generation,
    subscription: Option<SubscriptionId>,

    // Økt-eide data, nullstilles ved neste start
    route: Vec<PositionSample>,
    current: Option<PositionSample>,
    stats: WorkoutStats,
    start_ms: Option<u64>,
    start_time_utc: Option<DateTime<Utc>>,
    paused_at_ms: Option<u64>,
    last_error: Option<String>,
    frame: Option<Frame>,

    // Miljøsignaler, uavhengige av økten
    network: Option<NetworkQuality>,
    online: bool,
}

impl<S: PositionSource> Tracker<S> {
    pub fn new(source: S) -> Self {
        Self::with_viewport(source, Viewport::default())
    }

    pub fn with_viewport(source: S, viewport: Viewport) -> Self {
        Self {
            source,
            viewport,
            state: SessionState::Idle,
            generation: 0,
            subscription: None,
            route: Vec::new(),
            current: None,
            stats: WorkoutStats::default(),
            start_ms: None,
            start_time_utc: None,
            paused_at_ms: None,
            last_error: None,
            frame: None,
            network: None,
            online: true,
        }
    }

    /// Start ny økt. Gyldig fra Idle og Stopped; nullstiller rute,
    /// statistikk, frame og siste feil, og abonnerer med gjeldende
    /// policy-config. Feiler med `CapabilityUnavailable` (og forblir
    /// Idle/Stopped) hvis posisjonskilden mangler.
    pub fn start(&mut self, now_ms: u64) -> Result<(), TrackError> {
        match self.state {
            SessionState::Idle | SessionState::Stopped => {}
            state => {
                return Err(TrackError::InvalidTransition {
                    command: "start",
                    state,
                })
            }
        }
        if !self.source.is_available() {
            return Err(TrackError::CapabilityUnavailable);
        }

        self.generation += 1;
        self.route.clear();
        self.current = None;
        self.stats = WorkoutStats::default();
        self.frame = None;
        self.last_error = None;
        self.start_ms = Some(now_ms);
        self.start_time_utc = Utc.timestamp_millis_opt(now_ms as i64).single();
        self.paused_at_ms = None;

        let cfg = policy::config_for(self.network.as_ref());
        self.subscription = Some(self.source.subscribe(&cfg));
        self.state = SessionState::Tracking;

        info!(
            "økt {} startet (high_accuracy={}, timeout={} ms)",
            self.generation, cfg.high_accuracy, cfg.timeout_ms
        );
        Ok(())
    }

    /// Pause: abonnementet løper videre, men accept-gaten flippes til
    /// avvis-og-husk-siste. Durationen fryses på siste verdi.
    pub fn pause(&mut self, now_ms: u64) -> Result<(), TrackError> {
        if self.state != SessionState::Tracking {
            return Err(TrackError::InvalidTransition {
                command: "pause",
                state: self.state,
            });
        }
        self.paused_at_ms = Some(now_ms);
        self.state = SessionState::Paused;
        info!("økt {} pauset", self.generation);
        Ok(())
    }

    /// Resume: gaten flippes tilbake. Startpunktet skyves frem med
    /// pauselengden slik at durationen fortsetter fra frossen verdi i
    /// stedet for å "ta igjen" pausen.
    pub fn resume(&mut self, now_ms: u64) -> Result<(), TrackError> {
        if self.state != SessionState::Paused {
            return Err(TrackError::InvalidTransition {
                command: "resume",
                state: self.state,
            });
        }
        if let (Some(start), Some(paused_at)) = (self.start_ms, self.paused_at_ms.take()) {
            self.start_ms = Some(start + now_ms.saturating_sub(paused_at));
        }
        self.state = SessionState::Tracking;
        info!("økt {} gjenopptatt", self.generation);
        Ok(())
    }

    /// Stopp: synkron teardown av abonnementet. Rute, statistikk og
    /// siste frame blir stående lesbare frem til neste start.
    pub fn stop(&mut self) -> Result<(), TrackError> {
        if !matches!(self.state, SessionState::Tracking | SessionState::Paused) {
            return Err(TrackError::InvalidTransition {
                command: "stop",
                state: self.state,
            });
        }
        if let Some(id) = self.subscription.take() {
            self.source.unsubscribe(id);
        }
        self.paused_at_ms = None;
        self.state = SessionState::Stopped;
        info!(
            "økt {} stoppet ({} punkter, {:.2} km)",
            self.generation,
            self.route.len(),
            self.stats.distance_km
        );
        Ok(())
    }

    /// Sample fra posisjonskilden.
    ///
    /// Feil generasjon eller avsluttet økt: full no-op, heller ikke
    /// rå posisjon oppdateres. I levende økt oppdateres rå posisjon
    /// alltid; append gates på Tracking + strengt økende timestamp.
    pub fn on_sample(&mut self, gen: Generation, sample: PositionSample) {
        if gen != self.generation
            || !matches!(self.state, SessionState::Tracking | SessionState::Paused)
        {
            debug!("dropper sample fra utgått abonnement (gen {gen})");
            return;
        }

        self.current = Some(sample);

        if self.state == SessionState::Tracking {
            let in_order = self
                .route
                .last()
                .map_or(true, |last| sample.timestamp_ms > last.timestamp_ms);
            if in_order {
                self.route.push(sample);
                metrics::samples_accepted_total(metrics::global()).inc();
                self.stats = stats::compute(&self.route, self.stats.duration_s);
            } else {
                // Ute av rekkefølge: stilltiende avvist, ingen feil
                debug!(
                    "avviser sample med timestamp {} (siste aksepterte {})",
                    sample.timestamp_ms,
                    self.route.last().map(|p| p.timestamp_ms).unwrap_or(0)
                );
                metrics::samples_rejected_total(metrics::global()).inc();
            }
        } else {
            metrics::samples_rejected_total(metrics::global()).inc();
        }

        self.redraw();
    }

    /// 1 Hz veggklokke-tick. Driver durationen uavhengig av om nye
    /// samples kommer; kjører kun i Tracking, så Paused fryser den.
    pub fn on_tick(&mut self, gen: Generation, now_ms: u64) {
        if gen != self.generation || self.state != SessionState::Tracking {
            return;
        }
        if let Some(start) = self.start_ms {
            self.stats.duration_s = now_ms.saturating_sub(start) as f64 / 1000.0;
        }
    }

    /// Asynkron feil fra posisjonskilden. Rådgivende tekst på økten,
    /// tilstanden røres ikke – én timeout skal ikke drepe en økt.
    pub fn on_position_error(&mut self, gen: Generation, message: &str) {
        if gen != self.generation || self.subscription.is_none() {
            debug!("dropper feil fra utgått abonnement (gen {gen})");
            return;
        }
        warn!("posisjonsfeil i økt {}: {}", self.generation, message);
        self.last_error = Some(message.to_string());
    }

    /// Ny nettverkskvalitet. Policyen rekalkuleres, og et levende
    /// abonnement rives ned og reetableres med ny config – nøyaktig
    /// én gang per endring – slik at økten tilpasser seg underveis.
    pub fn on_network_change(&mut self, quality: NetworkQuality) {
        self.network = Some(quality);

        if let Some(id) = self.subscription.take() {
            self.source.unsubscribe(id);
            let cfg = policy::config_for(self.network.as_ref());
            self.subscription = Some(self.source.subscribe(&cfg));
            metrics::resubscribes_total(metrics::global()).inc();
            info!(
                "nettverk endret ({:?}), re-abonnerer med timeout {} ms",
                quality.effective_type, cfg.timeout_ms
            );
        }
    }

    /// Online/offline er et eget signal, uavhengig av kvalitetsdata.
    pub fn on_online_change(&mut self, online: bool) {
        self.online = online;
    }

    fn redraw(&mut self) {
        self.frame = project::render(&self.route, self.current.as_ref(), &self.viewport);
        if self.frame.is_some() {
            metrics::frames_rendered_total(metrics::global()).inc();
        }
    }

    // ----- lesetilgang for presentasjonslaget -----

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn route(&self) -> &[PositionSample] {
        &self.route
    }

    pub fn stats(&self) -> WorkoutStats {
        self.stats
    }

    pub fn current_position(&self) -> Option<PositionSample> {
        self.current
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn network(&self) -> Option<NetworkQuality> {
        self.network
    }

    pub fn is_online(&self) -> bool {
        self.online
    }

    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    pub fn snapshot(&self) -> TrackerSnapshot {
        TrackerSnapshot {
            state: self.state,
            stats: self.stats,
            current_position: self.current,
            last_error: self.last_error.clone(),
            online: self.online,
            network: self.network,
            route_len: self.route.len(),
            start_time_utc: self.start_time_utc,
        }
    }
}
