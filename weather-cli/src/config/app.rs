use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use weather::{display::DisplayKind, Measurement};

use crate::AppError;

const DEFAULT_CONFIG: &str = include_str!("../../resources/config/default.toml");
const DEFAULT_CONFIG_PREFIX: &str = "APP";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Print a header before each update.
    pub banner: bool,
    /// Register the metrics gateway after the displays.
    pub metrics: bool,
    /// Scale applied to readings before they become integer gauges.
    pub metrics_factor: f64,
    pub displays: Vec<DisplayKind>,
    pub readings: Vec<Measurement>,
}

impl AppConfig {
    pub fn new() -> Result<Self, AppError> {
        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(Environment::with_prefix(DEFAULT_CONFIG_PREFIX))
            .build()?;

        config.try_deserialize().map_err(|e| e.into())
    }
}

#[cfg(test)]
mod tests {
    use weather::{display::DisplayKind, Measurement};

    use super::AppConfig;

    #[test]
    fn test_new() {
        let result = AppConfig::new();
        assert!(
            matches!(result, Ok(_)),
            "By default, it should return a valid config"
        );
        let config = result.unwrap();
        assert_eq!(
            vec![
                DisplayKind::CurrentConditions,
                DisplayKind::Statistics,
                DisplayKind::Forecast,
                DisplayKind::HeatIndex
            ],
            config.displays
        );
        assert_eq!(
            vec![
                Measurement::new(80.0, 65.0, 30.4),
                Measurement::new(82.0, 70.0, 29.2)
            ],
            config.readings
        );

        temp_env::with_var("APP_METRICS", Some("true"), || {
            let result = AppConfig::new();
            assert!(
                matches!(result, Ok(x) if x.metrics),
                "Should take into account env vars"
            )
        });

        temp_env::with_var("APP_BANNER", Some("invalid"), || {
            let result = AppConfig::new();
            assert!(
                matches!(result, Err(_)),
                "Should return error when config is not valid"
            )
        });
    }
}
