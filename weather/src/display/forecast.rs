use common::subject_observer::Observer;
use strum::Display;

use crate::{station::WeatherStation, Measurement};

use super::{DisplayLine, DisplayOutcome};

/// Pressures strictly below this value, in inches of mercury, announce rain.
pub const RAINY_PRESSURE_THRESHOLD: f32 = 29.92;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Outlook {
    #[strum(serialize = "Watch out for cooler, rainy weather")]
    Rainy,
    #[strum(serialize = "Improving weather on the way!")]
    Improving,
}

impl Outlook {
    pub fn from_pressure(pressure: f32) -> Self {
        if pressure < RAINY_PRESSURE_THRESHOLD {
            Outlook::Rainy
        } else {
            Outlook::Improving
        }
    }
}

pub struct ForecastDisplay;

impl ForecastDisplay {
    pub fn render(&self, measurement: &Measurement) -> DisplayLine {
        format!("Forecast: {}", Outlook::from_pressure(measurement.pressure)).into()
    }
}

impl Observer<WeatherStation, Measurement, DisplayOutcome> for ForecastDisplay {
    fn update(&self, _: &WeatherStation, event: Measurement) -> DisplayOutcome {
        Ok(Some(self.render(&event)))
    }
}
