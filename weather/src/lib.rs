pub mod display;
pub mod measurement;
pub mod sink;
pub mod station;

pub use measurement::Measurement;
