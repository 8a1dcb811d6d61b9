use crate::types::SamplingConfig;

pub type SubscriptionId = u64;

/// Abonnementskontrakt mot posisjonskilden.
///
/// Selve leveringen av samples og feil skjer utenfor traiten: den
/// eksterne hendelsesløkka kaller `Tracker::on_sample` /
/// `Tracker::on_position_error` med øktens generasjonsnummer.
pub trait PositionSource {
    /// Finnes capabilityen i det hele tatt? Sjekkes ved start.
    fn is_available(&self) -> bool;

    /// Start strømmen med gitte parametre. Returnerer handle for
    /// senere teardown.
    fn subscribe(&mut self, config: &SamplingConfig) -> SubscriptionId;

    /// Synkron teardown; etter retur skal ingen nye leveranser
    /// startes for dette handlet.
    fn unsubscribe(&mut self, id: SubscriptionId);
}

/// Statisk kilde uten ekte posisjonsstrøm, til tester og offline
/// kjøring. Holder rede på aktivt abonnement og teller opp/ned.
#[derive(Debug)]
pub struct StaticPositionSource {
    pub available: bool,
    next_id: SubscriptionId,
    active: Option<(SubscriptionId, SamplingConfig)>,
    pub subscribe_count: u64,
    pub unsubscribe_count: u64,
}

impl StaticPositionSource {
    pub fn new() -> Self {
        Self {
            available: true,
            next_id: 1,
            active: None,
            subscribe_count: 0,
            unsubscribe_count: 0,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    /// Config for det aktive abonnementet, hvis noe.
    pub fn active_config(&self) -> Option<SamplingConfig> {
        self.active.map(|(_, cfg)| cfg)
    }

    pub fn active_id(&self) -> Option<SubscriptionId> {
        self.active.map(|(id, _)| id)
    }
}

impl Default for StaticPositionSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionSource for StaticPositionSource {
    fn is_available(&self) -> bool {
        self.available
    }

    fn subscribe(&mut self, config: &SamplingConfig) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.active = Some((id, *config));
        self.subscribe_count += 1;
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        if self.active.map(|(a, _)| a) == Some(id) {
            self.active = None;
        }
        self.unsubscribe_count += 1;
    }
}
