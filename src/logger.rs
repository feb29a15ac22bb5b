use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Installs an `env_logger` backend once per process. `RUST_LOG` overrides
/// the default `info` level, e.g. `RUST_LOG=chained_hash=trace`.
pub fn init() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Info)
            .format_timestamp_millis()
            .parse_default_env();

        // Another backend may already be installed by the host program.
        let _ = builder.try_init();
    });
}

#[cfg(test)]
mod tests {
    use log::{debug, info};

    use super::*;

    #[test]
    fn init_is_idempotent() {
        init();
        init();
        debug!("debug message in test");
        info!("info message in test");
        if std::env::var_os("RUST_LOG").is_none() {
            assert_eq!(log::max_level(), LevelFilter::Info);
        }
    }
}
