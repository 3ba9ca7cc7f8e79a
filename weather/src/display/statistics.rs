use common::subject_observer::Observer;

use crate::{station::WeatherStation, Measurement};

use super::{one_decimal, DisplayLine, DisplayOutcome};

/// Placeholder statistics derived from the current temperature alone.
///
/// No history is kept between updates: average, maximum and minimum are fixed
/// offsets of the latest reading.
pub struct StatisticsDisplay;

impl StatisticsDisplay {
    pub fn render(&self, measurement: &Measurement) -> DisplayLine {
        let temperature = measurement.temperature;
        format!(
            "Weather statistics: Avg/Max/Min temperature = {:.1}/{:.1}/{:.1}",
            one_decimal(temperature - 2.0),
            one_decimal(temperature + 2.0),
            one_decimal(temperature - 5.0)
        )
        .into()
    }
}

impl Observer<WeatherStation, Measurement, DisplayOutcome> for StatisticsDisplay {
    fn update(&self, _: &WeatherStation, event: Measurement) -> DisplayOutcome {
        Ok(Some(self.render(&event)))
    }
}

#[cfg(test)]
mod tests {
    use common_test::{gen_reading, get_seeded_rng};

    use crate::{display::one_decimal, Measurement};

    use super::StatisticsDisplay;

    #[test]
    fn test_render() {
        let result = StatisticsDisplay.render(&Measurement::new(80.0, 65.0, 30.4));

        assert_eq!(
            result,
            "Weather statistics: Avg/Max/Min temperature = 78.0/82.0/75.0"
        );
    }

    #[test]
    fn test_render_does_not_accumulate() {
        // Given
        let display = StatisticsDisplay;
        display.render(&Measurement::new(100.0, 0.0, 0.0));

        // When
        let result = display.render(&Measurement::new(10.0, 0.0, 0.0));

        // Then
        assert_eq!(
            result, "Weather statistics: Avg/Max/Min temperature = 8.0/12.0/5.0",
            "Should only depend on the latest temperature"
        );
    }

    #[test]
    fn test_render_offsets() {
        let mut rng = get_seeded_rng().unwrap();
        for _ in 0..100 {
            // Given
            let (t, h, p) = gen_reading(&mut rng);

            let measurement = Measurement::new(t, h, p);

            // When
            let result = StatisticsDisplay.render(&measurement);

            // Then
            let expected = format!(
                "Weather statistics: Avg/Max/Min temperature = {:.1}/{:.1}/{:.1}",
                one_decimal(t - 2.0),
                one_decimal(t + 2.0),
                one_decimal(t - 5.0)
            );
            assert_eq!(expected, result.as_str(), "Offsets should hold for {}", t);
            assert_eq!(result, StatisticsDisplay.render(&measurement));
        }
    }

    #[test]
    fn test_render_rounds_ties_up() {
        let result = StatisticsDisplay.render(&Measurement::new(80.25, 0.0, 0.0));

        assert_eq!(
            result,
            "Weather statistics: Avg/Max/Min temperature = 78.3/82.3/75.3"
        );
    }
}
