use common::subject_observer::Observer;
use dipstick::{Gauge, Input, InputScope, Log};
use log::{trace, warn, Level};
use weather::{display::DisplayOutcome, station::WeatherStation, Measurement};

/// Gauges only carry integers: readings are multiplied by this factor before being recorded.
pub const DEFAULT_FACTOR: f64 = 10.0;

/// Publishes every measurement as gauges. Produces no display line.
pub struct MetricsGateway {
    temperature: Gauge,
    humidity: Gauge,
    pressure: Gauge,
    factor: f64,
}

impl MetricsGateway {
    pub fn new(scope: &impl InputScope, factor: f64) -> Self {
        MetricsGateway {
            temperature: scope.gauge("temperature"),
            humidity: scope.gauge("humidity"),
            pressure: scope.gauge("pressure"),
            factor,
        }
    }

    pub fn to_log(level: Level, factor: f64) -> Self {
        Self::new(&Log::to_log().level(level).metrics(), factor)
    }

    fn scale(&self, value: f32) -> Option<isize> {
        let scaled = (f64::from(value) * self.factor).round();
        (scaled.is_finite() && scaled.abs() < isize::MAX as f64).then_some(scaled as isize)
    }

    fn record(&self, gauge: &Gauge, name: &str, value: f32) {
        match self.scale(value) {
            Some(scaled) => gauge.value(scaled),
            None => warn!("Skipping {} gauge, {} cannot be recorded", name, value),
        }
    }
}

impl Observer<WeatherStation, Measurement, DisplayOutcome> for MetricsGateway {
    fn update(&self, _: &WeatherStation, event: Measurement) -> DisplayOutcome {
        trace!(
            "Sending metrics: temperature={}, humidity={}, pressure={}",
            event.temperature,
            event.humidity,
            event.pressure
        );
        self.record(&self.temperature, "temperature", event.temperature);
        self.record(&self.humidity, "humidity", event.humidity);
        self.record(&self.pressure, "pressure", event.pressure);
        Ok(None)
    }
}
