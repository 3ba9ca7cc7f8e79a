use env_logger::{Builder, Env};

/// Shows the station's warnings about implausible readings and failing displays unless `RUST_LOG` says otherwise.
pub const DEFAULT_FILTER: &str = "warn";

fn builder() -> Builder {
    Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
}

pub fn init() {
    builder().init();
}
