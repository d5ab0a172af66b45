//! Simulated network latency for repository calls.

use std::time::Duration;

use boarding_config::LatencyConfig;
use boarding_core::Operation;
use rand::Rng;
use tracing::trace;

#[derive(Clone, Debug, PartialEq)]
pub struct Latency {
    config: LatencyConfig,
}

impl Default for Latency {
    fn default() -> Self {
        Self::new(LatencyConfig::default())
    }
}

impl Latency {
    pub fn new(config: LatencyConfig) -> Self {
        Self { config }
    }

    pub fn disabled() -> Self {
        Self::new(LatencyConfig::disabled())
    }

    #[must_use]
    pub fn config(&self) -> &LatencyConfig {
        &self.config
    }

    /// Scaled base delay of `operation`, before jitter.
    #[must_use]
    pub fn base_for(&self, operation: Operation) -> Duration {
        if !self.config.enabled {
            return Duration::ZERO;
        }
        let base_ms = match operation {
            Operation::List => self.config.list_ms,
            Operation::Get => self.config.get_ms,
            Operation::Create => self.config.create_ms,
            Operation::Update => self.config.update_ms,
            Operation::Delete => self.config.delete_ms,
            Operation::Dropdown => self.config.dropdown_ms,
        };
        // A scale that does not fit a Duration disables the delay.
        Duration::try_from_secs_f64(base_ms as f64 * self.config.scale / 1000.0)
            .unwrap_or(Duration::ZERO)
    }

    /// Delay to apply to one call: base ± random jitter, never below 1 ms
    /// while latency is enabled.
    #[must_use]
    pub fn sample(&self, operation: Operation) -> Duration {
        let base = self.base_for(operation);
        if !self.config.enabled {
            return Duration::ZERO;
        }
        let jitter = self.config.jitter_ms as i64;
        let offset_ms = if jitter == 0 {
            0
        } else {
            rand::thread_rng().gen_range(-jitter..=jitter)
        };
        let millis = (base.as_millis() as i64 + offset_ms).max(1);
        Duration::from_millis(millis as u64)
    }

    /// Sleeps for one sampled delay. Never holds a store lock.
    pub async fn simulate(&self, operation: Operation) {
        let delay = self.sample(operation);
        if delay.is_zero() {
            return;
        }
        trace!(operation = %operation, delay_ms = delay.as_millis() as u64, "simulating latency");
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_is_zero() {
        let latency = Latency::disabled();
        for operation in Operation::ALL {
            assert_eq!(latency.sample(operation), Duration::ZERO);
        }
    }

    #[test]
    fn test_deterministic_uses_base_delays() {
        let latency = Latency::new(LatencyConfig::deterministic());
        assert_eq!(latency.sample(Operation::List), Duration::from_millis(300));
        assert_eq!(latency.sample(Operation::Get), Duration::from_millis(200));
        assert_eq!(latency.sample(Operation::Create), Duration::from_millis(500));
        assert_eq!(latency.sample(Operation::Update), Duration::from_millis(500));
        assert_eq!(latency.sample(Operation::Delete), Duration::from_millis(300));
        assert_eq!(latency.sample(Operation::Dropdown), Duration::from_millis(200));
    }

    #[test]
    fn test_jitter_stays_in_range() {
        let latency = Latency::default();
        for _ in 0..200 {
            let ms = latency.sample(Operation::Get).as_millis();
            assert!((100..=300).contains(&ms), "sampled {ms} ms");
        }
    }

    #[test]
    fn test_scale_applies() {
        let latency = Latency::new(LatencyConfig {
            scale: 0.5,
            ..LatencyConfig::deterministic()
        });
        assert_eq!(latency.sample(Operation::Create), Duration::from_millis(250));
    }

    #[test]
    fn test_unrepresentable_scale_does_not_panic() {
        for scale in [f64::INFINITY, f64::NAN, -1.0, f64::MAX] {
            let latency = Latency::new(LatencyConfig {
                scale,
                ..LatencyConfig::deterministic()
            });
            assert_eq!(latency.base_for(Operation::Get), Duration::ZERO);
            assert_eq!(latency.sample(Operation::Get), Duration::from_millis(1));
        }
    }

    #[test]
    fn test_enabled_latency_never_zero() {
        let latency = Latency::new(LatencyConfig {
            scale: 0.0,
            ..LatencyConfig::deterministic()
        });
        assert_eq!(latency.sample(Operation::List), Duration::from_millis(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulate_sleeps_for_base() {
        let latency = Latency::new(LatencyConfig::deterministic());
        let start = tokio::time::Instant::now();
        latency.simulate(Operation::Delete).await;
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(300), "slept {elapsed:?}");
        assert!(elapsed < Duration::from_millis(310), "slept {elapsed:?}");
    }
}
