use crate::types::{EffectiveType, NetworkQuality, SamplingConfig};

/// Sampling-policy: ren mapping fra nettverkskvalitet til
/// posisjonsparametre. Dårlig nett gir grovere sampling.
///
/// | betingelse                  | accuracy | timeout | max alder |
/// |-----------------------------|----------|---------|-----------|
/// | slow-2g eller data-sparing  | lav      | 30 s    | 10 s      |
/// | 2g                          | høy      | 20 s    | 5 s       |
/// | ellers (3g/4g/ukjent/ingen) | høy      | 10 s    | 1 s       |
pub fn config_for(network: Option<&NetworkQuality>) -> SamplingConfig {
    let Some(q) = network else {
        return SamplingConfig::default();
    };

    if q.effective_type == EffectiveType::Slow2g || q.save_data {
        SamplingConfig {
            high_accuracy: false,
            timeout_ms: 30_000,
            maximum_age_ms: 10_000,
        }
    } else if q.effective_type == EffectiveType::Cell2g {
        SamplingConfig {
            high_accuracy: true,
            timeout_ms: 20_000,
            maximum_age_ms: 5_000,
        }
    } else {
        SamplingConfig::default()
    }
}
