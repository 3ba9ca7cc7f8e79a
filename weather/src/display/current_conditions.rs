use common::subject_observer::Observer;

use crate::{station::WeatherStation, Measurement};

use super::{one_decimal, DisplayLine, DisplayOutcome};

pub struct CurrentConditionsDisplay;

impl CurrentConditionsDisplay {
    pub fn render(&self, measurement: &Measurement) -> DisplayLine {
        format!(
            "Current conditions: {:.1}°F, {:.1}% humidity",
            one_decimal(measurement.temperature),
            one_decimal(measurement.humidity)
        )
        .into()
    }
}

impl Observer<WeatherStation, Measurement, DisplayOutcome> for CurrentConditionsDisplay {
    fn update(&self, _: &WeatherStation, event: Measurement) -> DisplayOutcome {
        Ok(Some(self.render(&event)))
    }
}

#[cfg(test)]
mod tests {
    use common_test::{gen_reading, get_seeded_rng};

    use crate::{display::one_decimal, Measurement};

    use super::CurrentConditionsDisplay;

    #[test]
    fn test_render() {
        let result = CurrentConditionsDisplay.render(&Measurement::new(82.0, 70.0, 29.2));

        assert_eq!(result, "Current conditions: 82.0°F, 70.0% humidity");
    }

    #[test]
    fn test_render_keeps_one_decimal() {
        let result = CurrentConditionsDisplay.render(&Measurement::new(-3.14159, 100.04, 0.0));

        assert_eq!(result, "Current conditions: -3.1°F, 100.0% humidity");
    }

    #[test]
    fn test_render_rounds_ties_up() {
        let result = CurrentConditionsDisplay.render(&Measurement::new(72.25, 40.75, 30.0));

        assert_eq!(result, "Current conditions: 72.3°F, 40.8% humidity");
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut rng = get_seeded_rng().unwrap();
        for _ in 0..100 {
            // Given
            let (t, h, p) = gen_reading(&mut rng);
            let measurement = Measurement::new(t, h, p);

            // When
            let first = CurrentConditionsDisplay.render(&measurement);
            let second = CurrentConditionsDisplay.render(&measurement);

            // Then
            assert_eq!(first, second);
            assert_eq!(
                format!(
                    "Current conditions: {:.1}°F, {:.1}% humidity",
                    one_decimal(t),
                    one_decimal(h)
                ),
                first.as_str()
            );
        }
    }
}
