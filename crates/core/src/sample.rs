use serde::{Deserialize, Serialize};

/// One telemetry reading.
///
/// Samples are immutable once built: fields are only reachable through the
/// read accessors below. The serialized field names form the export layout
/// consumed by other tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    timestamp:   String,
    temperature: f64,
    humidity:    f64,
    pressure:    f64,
    ping:        u32,
}

impl Sample {
    pub fn new(
        timestamp: impl Into<String>,
        temperature: f64,
        humidity: f64,
        pressure: f64,
        ping: u32,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            temperature,
            humidity,
            pressure,
            ping,
        }
    }

    /// Display-formatted creation time.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Degrees Celsius.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Relative humidity in percent.
    pub fn humidity(&self) -> f64 {
        self.humidity
    }

    /// Pressure in hPa.
    pub fn pressure(&self) -> f64 {
        self.pressure
    }

    /// Round-trip latency in milliseconds.
    pub fn ping(&self) -> u32 {
        self.ping
    }
}

/// Produces a fresh [`Sample`] on every call.
///
/// Implementations are trusted to return well-formed data synchronously.
pub trait Sampler {
    fn sample(&mut self) -> Sample;
}

/// Selects one numeric field of a [`Sample`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Temperature,
    Humidity,
    Pressure,
    Ping,
}

impl Metric {
    /// Metrics that get a chart, in display order.
    pub const CHARTED: [Metric; 3] = [Metric::Temperature, Metric::Humidity, Metric::Pressure];

    /// Read this metric's value from `sample`.
    #[inline]
    pub fn value(self, sample: &Sample) -> f64 {
        match self {
            Metric::Temperature => sample.temperature,
            Metric::Humidity    => sample.humidity,
            Metric::Pressure    => sample.pressure,
            Metric::Ping        => f64::from(sample.ping),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Metric::Temperature => "Temperature",
            Metric::Humidity    => "Humidity",
            Metric::Pressure    => "Pressure",
            Metric::Ping        => "Ping",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Metric::Temperature => "°C",
            Metric::Humidity    => "%",
            Metric::Pressure    => "hPa",
            Metric::Ping        => "ms",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_selects_field() {
        let s = Sample::new("12:00:00", 21.5, 44.0, 1002.25, 33);
        assert_eq!(Metric::Temperature.value(&s), 21.5);
        assert_eq!(Metric::Humidity.value(&s), 44.0);
        assert_eq!(Metric::Pressure.value(&s), 1002.25);
        assert_eq!(Metric::Ping.value(&s), 33.0);
    }

    #[test]
    fn serializes_with_export_field_names() {
        let s = Sample::new("12:00:00", 21.5, 44.0, 1002.25, 33);
        let json = serde_json::to_value(&s).unwrap();
        let obj = json.as_object().unwrap();
        let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["humidity", "ping", "pressure", "temperature", "timestamp"]);
        assert_eq!(obj["ping"], 33);
    }
}
