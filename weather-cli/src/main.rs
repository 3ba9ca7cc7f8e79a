mod config;

use std::{
    io::{self, Write},
    rc::Rc,
};

use common::subject_observer::Subject;
use log::{debug, info, Level};
use thiserror::Error;
use weather::{
    sink::{LineSink, WriterSink},
    station::WeatherStation,
};
use weather_ext::gateways::MetricsGateway;

use crate::config::app::AppConfig;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ::config::ConfigError),
}

fn build_station(config: &AppConfig, sink: impl LineSink + 'static) -> WeatherStation {
    let mut station = WeatherStation::with_displays(sink, &config.displays);
    if config.metrics {
        station.register_observer(Rc::new(MetricsGateway::to_log(
            Level::Info,
            config.metrics_factor,
        )));
    }
    station
}

/// Feeds every configured reading to the station, writing the banners to `out`.
fn replay(
    station: &mut WeatherStation,
    config: &AppConfig,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    for (index, reading) in config.readings.iter().enumerate() {
        if config.banner {
            if index > 0 {
                writeln!(out)?;
            }
            writeln!(out, "--- Weather Update {} ---", index + 1)?;
            out.flush()?;
        }
        let report =
            station.set_measurements(reading.temperature, reading.humidity, reading.pressure);
        if let Some(err) = report.sink_error {
            return Err(err.into());
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    config::log::init();

    let config = AppConfig::new()?;
    debug!("Running weather station with configuration: {:?}", config);

    let mut station = build_station(&config, WriterSink::stdout());
    replay(&mut station, &config, &mut io::stdout())?;
    info!("Replayed {} readings", config.readings.len());

    Ok(())
}
