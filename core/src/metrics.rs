use once_cell::sync::Lazy;
use prometheus::{IntCounter, Registry};

/// Prometheus-tellere for sporingskjernen. Registreres én gang i et
/// eget registry slik at embedderen kan hente dem via `gather()`.
pub struct Metrics {
    pub registry: Registry,
    samples_accepted: IntCounter,
    samples_rejected: IntCounter,
    resubscribes: IntCounter,
    frames_rendered: IntCounter,
}

impl Metrics {
    fn new() -> Self {
        let registry = Registry::new();

        let samples_accepted = IntCounter::new(
            "geotrack_samples_accepted_total",
            "Samples akseptert og lagt til ruten",
        )
        .unwrap();
        let samples_rejected = IntCounter::new(
            "geotrack_samples_rejected_total",
            "Samples avvist (ute av rekkefølge eller pauset)",
        )
        .unwrap();
        let resubscribes = IntCounter::new(
            "geotrack_resubscribes_total",
            "Re-abonnementer etter endret nettverkskvalitet",
        )
        .unwrap();
        let frames_rendered = IntCounter::new(
            "geotrack_frames_rendered_total",
            "Frames projisert og tegnet",
        )
        .unwrap();

        for c in [
            &samples_accepted,
            &samples_rejected,
            &resubscribes,
            &frames_rendered,
        ] {
            registry.register(Box::new(c.clone())).unwrap();
        }

        Self {
            registry,
            samples_accepted,
            samples_rejected,
            resubscribes,
            frames_rendered,
        }
    }
}

static METRICS: Lazy<Metrics> = Lazy::new(Metrics::new);

pub fn global() -> &'static Metrics {
    &METRICS
}

pub fn samples_accepted_total(m: &Metrics) -> &IntCounter {
    &m.samples_accepted
}

pub fn samples_rejected_total(m: &Metrics) -> &IntCounter {
    &m.samples_rejected
}

pub fn resubscribes_total(m: &Metrics) -> &IntCounter {
    &m.resubscribes
}

pub fn frames_rendered_total(m: &Metrics) -> &IntCounter {
    &m.frames_rendered
}
