use std::rc::Rc;

use common::subject_observer::{Observer, SharedObservers, Subject};
use log::{debug, error, trace, warn};
use strum::IntoEnumIterator;

use crate::{
    display::{DisplayKind, DisplayLine, DisplayOutcome},
    sink::{LineSink, SinkError, WriterSink},
    Measurement,
};

use super::{DisplayFailure, UpdateReport};

pub struct WeatherStation {
    observers: SharedObservers<Self, Measurement, DisplayOutcome>,
    measurement: Measurement,
    sink: Box<dyn LineSink>,
}

impl Subject<Measurement, DisplayOutcome> for WeatherStation {
    fn register_observer(
        &mut self,
        observer: Rc<dyn Observer<Self, Measurement, DisplayOutcome>>,
    ) {
        self.observers.push(observer);
        debug!("Registered observer #{}", self.observers.len());
    }

    fn unregister_observer(
        &mut self,
        observer: Rc<dyn Observer<Self, Measurement, DisplayOutcome>>,
    ) {
        self.observers.retain(|obs| !Rc::ptr_eq(obs, &observer));
    }

    fn notify_observers(&self, event: Measurement) -> Vec<DisplayOutcome> {
        trace!(
            "Notifying {} observers of {:?}",
            self.observers.len(),
            event
        );
        self.observers
            .iter()
            .map(|obs| obs.update(self, event))
            .collect()
    }
}

impl Default for WeatherStation {
    /// Station writing to stdout with every built-in display registered.
    fn default() -> Self {
        Self::with_displays(
            WriterSink::stdout(),
            &DisplayKind::iter().collect::<Vec<_>>(),
        )
    }
}

impl WeatherStation {
    /// Station with an empty registry.
    pub fn new(sink: impl LineSink + 'static) -> Self {
        WeatherStation {
            observers: vec![],
            measurement: Measurement::default(),
            sink: Box::new(sink),
        }
    }

    pub fn with_displays(sink: impl LineSink + 'static, displays: &[DisplayKind]) -> Self {
        let mut station = Self::new(sink);
        for kind in displays {
            station.register_observer(kind.observer());
        }
        station
    }

    pub fn measurement(&self) -> Measurement {
        self.measurement
    }

    pub fn temperature(&self) -> f32 {
        self.measurement.temperature
    }

    pub fn humidity(&self) -> f32 {
        self.measurement.humidity
    }

    pub fn pressure(&self) -> f32 {
        self.measurement.pressure
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Stores the new readings, notifies every observer, then emits the collected lines.
    ///
    /// Values are never rejected. A failing observer only loses its own line.
    pub fn set_measurements(
        &mut self,
        temperature: f32,
        humidity: f32,
        pressure: f32,
    ) -> UpdateReport {
        self.measurement = Measurement::new(temperature, humidity, pressure);
        if let Err(err) = self.measurement.check() {
            warn!("Implausible measurement {:?}: {}", self.measurement, err);
        }

        let (lines, failures) = collect_outcomes(self.notify_observers(self.measurement));
        let sink_error = self.emit(&lines).err();

        UpdateReport {
            measurement: self.measurement,
            lines,
            failures,
            sink_error,
        }
    }

    fn emit(&mut self, lines: &[DisplayLine]) -> Result<(), SinkError> {
        lines
            .iter()
            .try_for_each(|line| self.sink.emit(line))
            .and_then(|_| self.sink.flush())
            .inspect_err(|err| error!("Display output interrupted: {}", err))
    }
}

fn collect_outcomes(outcomes: Vec<DisplayOutcome>) -> (Vec<DisplayLine>, Vec<DisplayFailure>) {
    let mut lines = Vec::with_capacity(outcomes.len());
    let mut failures = vec![];
    for (position, outcome) in outcomes.into_iter().enumerate() {
        match outcome {
            Ok(Some(line)) => lines.push(line),
            Ok(None) => {}
            Err(error) => {
                warn!("Observer #{} failed: {}", position, error);
                failures.push(DisplayFailure { position, error });
            }
        }
    }
    (lines, failures)
}
