//! Pseudo-random telemetry source.
//!
//! Values are drawn uniformly from plausible indoor ranges and rounded to two
//! decimals, the way a cheap sensor board would report them.

use chrono::Local;
use dash_core::{Sample, Sampler};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt::Write as _;
use std::ops::{Range, RangeInclusive};
use tracing::warn;

/// Degrees Celsius.
pub const TEMPERATURE: Range<f64> = 20.0..25.0;
/// Relative humidity, percent.
pub const HUMIDITY: Range<f64> = 40.0..50.0;
/// hPa.
pub const PRESSURE: Range<f64> = 1000.0..1005.0;
/// Milliseconds.
pub const PING: RangeInclusive<u32> = 20..=70;

const FALLBACK_FORMAT: &str = "%H:%M:%S";

/// A [`Sampler`] producing uniformly distributed readings stamped with the
/// local wall-clock time.
#[derive(Debug)]
pub struct RandomSampler<R = StdRng> {
    rng:              R,
    timestamp_format: String,
}

impl RandomSampler<StdRng> {
    /// Sampler seeded from the operating system.
    pub fn from_entropy(timestamp_format: impl Into<String>) -> Self {
        Self::with_rng(StdRng::from_os_rng(), timestamp_format)
    }
}

impl<R: Rng> RandomSampler<R> {
    pub fn with_rng(rng: R, timestamp_format: impl Into<String>) -> Self {
        Self {
            rng,
            timestamp_format: timestamp_format.into(),
        }
    }

    fn timestamp(&self) -> String {
        let now = Local::now();
        let mut out = String::new();
        if write!(out, "{}", now.format(&self.timestamp_format)).is_err() {
            warn!(
                "Invalid timestamp format '{}'; using {FALLBACK_FORMAT}",
                self.timestamp_format
            );
            out = now.format(FALLBACK_FORMAT).to_string();
        }
        out
    }
}

impl<R: Rng> Sampler for RandomSampler<R> {
    fn sample(&mut self) -> Sample {
        let temperature = round2(self.rng.random_range(TEMPERATURE));
        let humidity    = round2(self.rng.random_range(HUMIDITY));
        let pressure    = round2(self.rng.random_range(PRESSURE));
        let ping        = self.rng.random_range(PING);

        Sample::new(self.timestamp(), temperature, humidity, pressure, ping)
    }
}

/// Round to two decimal places.
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> RandomSampler {
        RandomSampler::with_rng(StdRng::seed_from_u64(seed), "%H:%M:%S")
    }

    fn has_two_decimals(v: f64) -> bool {
        ((v * 100.0).round() - v * 100.0).abs() < 1e-6
    }

    #[test]
    fn values_stay_in_range() {
        let mut sampler = seeded(7);
        for _ in 0..500 {
            let s = sampler.sample();
            // Rounding can land exactly on the open upper bound.
            assert!((20.0..=25.0).contains(&s.temperature()), "{s:?}");
            assert!((40.0..=50.0).contains(&s.humidity()), "{s:?}");
            assert!((1000.0..=1005.0).contains(&s.pressure()), "{s:?}");
            assert!(PING.contains(&s.ping()), "{s:?}");
        }
    }

    #[test]
    fn values_are_rounded_to_hundredths() {
        let mut sampler = seeded(42);
        for _ in 0..100 {
            let s = sampler.sample();
            assert!(has_two_decimals(s.temperature()), "{}", s.temperature());
            assert!(has_two_decimals(s.humidity()), "{}", s.humidity());
            assert!(has_two_decimals(s.pressure()), "{}", s.pressure());
        }
    }

    #[test]
    fn same_seed_same_readings() {
        let (mut a, mut b) = (seeded(3), seeded(3));
        for _ in 0..10 {
            let (x, y) = (a.sample(), b.sample());
            assert_eq!(x.temperature(), y.temperature());
            assert_eq!(x.ping(), y.ping());
        }
    }

    #[test]
    fn timestamp_uses_configured_format() {
        let mut sampler = seeded(1);
        let stamp = sampler.sample().timestamp().to_string();
        assert_eq!(stamp.len(), 8, "{stamp}");
        assert_eq!(stamp.matches(':').count(), 2, "{stamp}");
    }

    #[test]
    fn broken_format_falls_back() {
        let mut sampler = RandomSampler::with_rng(StdRng::seed_from_u64(1), "%!");
        let stamp = sampler.sample().timestamp().to_string();
        assert_eq!(stamp.len(), 8, "{stamp}");
    }
}
