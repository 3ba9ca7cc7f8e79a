use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// Snapshot of the three readings the station broadcasts.
///
/// Any value is accepted, including NaN and out of range ones. [`Measurement::check`]
/// only reports implausible readings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Validate)]
pub struct Measurement {
    /// Degrees Fahrenheit.
    #[validate(range(min = -130.0, max = 200.0))]
    pub temperature: f32,
    /// Relative humidity, in percent.
    #[validate(range(min = 0.0, max = 100.0))]
    pub humidity: f32,
    /// Inches of mercury.
    #[validate(range(min = 25.0, max = 33.0))]
    pub pressure: f32,
}

#[derive(Error, Debug)]
pub enum MeasurementError {
    #[error("Non finite {0}")]
    NonFinite(&'static str),
    #[error("Out of range: {0}")]
    OutOfRange(ValidationErrors),
}

impl Measurement {
    pub fn new(temperature: f32, humidity: f32, pressure: f32) -> Self {
        Measurement {
            temperature,
            humidity,
            pressure,
        }
    }

    pub fn check(&self) -> Result<(), MeasurementError> {
        [
            ("temperature", self.temperature),
            ("humidity", self.humidity),
            ("pressure", self.pressure),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite())
        .map_or(Ok(()), |(name, _)| Err(MeasurementError::NonFinite(name)))?;

        self.validate().map_err(MeasurementError::OutOfRange)
    }
}

#[cfg(test)]
mod tests {
    use super::{Measurement, MeasurementError};

    #[test]
    fn test_default_is_zeroed() {
        let result = Measurement::default();

        assert_eq!(Measurement::new(0.0, 0.0, 0.0), result);
    }

    #[test]
    fn test_check() {
        // Given
        let measurement = Measurement::new(80.0, 65.0, 30.4);
        // When
        let result = measurement.check();
        // Then
        assert!(
            matches!(result, Ok(())),
            "Should accept plausible readings"
        );

        // Given
        let measurement = Measurement::new(80.0, f32::NAN, 30.4);
        // When
        let result = measurement.check();
        // Then
        assert!(
            matches!(result, Err(MeasurementError::NonFinite("humidity"))),
            "Should report non finite readings"
        );

        // Given
        let measurement = Measurement::new(80.0, 120.0, 30.4);
        // When
        let result = measurement.check();
        // Then
        match result {
            Err(MeasurementError::OutOfRange(errors)) => {
                assert!(errors.field_errors().contains_key("humidity"))
            }
            other => panic!("Should report out of range readings, got {:?}", other),
        }
    }
}
