mod metrics_gateway;

pub use metrics_gateway::{MetricsGateway, DEFAULT_FACTOR};
