use common::subject_observer::Observer;

use crate::{station::WeatherStation, Measurement};

use super::{one_decimal, DisplayLine, DisplayOutcome};

/// Mean of temperature and humidity, not the meteorological heat index.
pub struct HeatIndexDisplay;

impl HeatIndexDisplay {
    pub fn heat_index(measurement: &Measurement) -> f32 {
        (measurement.temperature + measurement.humidity) / 2.0
    }

    pub fn render(&self, measurement: &Measurement) -> DisplayLine {
        format!("Heat index: {:.1}", one_decimal(Self::heat_index(measurement))).into()
    }
}

impl Observer<WeatherStation, Measurement, DisplayOutcome> for HeatIndexDisplay {
    fn update(&self, _: &WeatherStation, event: Measurement) -> DisplayOutcome {
        Ok(Some(self.render(&event)))
    }
}
