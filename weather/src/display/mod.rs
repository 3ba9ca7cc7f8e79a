mod current_conditions;
mod forecast;
mod heat_index;
mod statistics;

use std::{fmt, rc::Rc};

use common::subject_observer::Observer;
use serde::Deserialize;
use strum::{Display, EnumIter, EnumString};
use thiserror::Error;

use crate::{station::WeatherStation, Measurement};

pub use current_conditions::CurrentConditionsDisplay;
pub use forecast::{ForecastDisplay, Outlook, RAINY_PRESSURE_THRESHOLD};
pub use heat_index::HeatIndexDisplay;
pub use statistics::StatisticsDisplay;

/// One line of text derived from a measurement by one display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLine(String);

impl DisplayLine {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for DisplayLine {
    fn from(value: String) -> Self {
        DisplayLine(value)
    }
}

impl AsRef<str> for DisplayLine {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for DisplayLine {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<DisplayLine> for &str {
    fn eq(&self, other: &DisplayLine) -> bool {
        *self == other.0
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DisplayError {
    #[error("{display} could not render {measurement:?}: {reason}")]
    Render {
        display: String,
        measurement: Measurement,
        reason: String,
    },
}

/// Rounds half away from zero to one decimal, so that exact ties such as 72.25 print as 72.3.
///
/// Widening to `f64` keeps `value * 10.0` exact for any `f32`.
pub(crate) fn one_decimal(value: f32) -> f64 {
    (f64::from(value) * 10.0).round() / 10.0
}

/// What an observer hands back to the station: a line, nothing, or a failure.
pub type DisplayOutcome = Result<Option<DisplayLine>, DisplayError>;

pub type SharedDisplay = Rc<dyn Observer<WeatherStation, Measurement, DisplayOutcome>>;

/// The built-in displays, iterated in their default registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Display, EnumIter, EnumString)]
pub enum DisplayKind {
    CurrentConditions,
    Statistics,
    Forecast,
    HeatIndex,
}

impl DisplayKind {
    pub fn observer(self) -> SharedDisplay {
        match self {
            DisplayKind::CurrentConditions => Rc::new(CurrentConditionsDisplay),
            DisplayKind::Statistics => Rc::new(StatisticsDisplay),
            DisplayKind::Forecast => Rc::new(ForecastDisplay),
            DisplayKind::HeatIndex => Rc::new(HeatIndexDisplay),
        }
    }
}
