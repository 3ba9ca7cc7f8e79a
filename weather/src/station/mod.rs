mod weather_station;

pub use weather_station::WeatherStation;

use crate::{
    display::{DisplayError, DisplayLine},
    sink::SinkError,
    Measurement,
};

/// Failure of the observer registered at `position` during one update.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayFailure {
    pub position: usize,
    pub error: DisplayError,
}

/// Result of one `set_measurements` call.
#[derive(Debug)]
pub struct UpdateReport {
    pub measurement: Measurement,
    /// Lines produced, in registration order.
    pub lines: Vec<DisplayLine>,
    pub failures: Vec<DisplayFailure>,
    /// Set when the sink rejected a line; later lines of the update are not emitted.
    pub sink_error: Option<SinkError>,
}
