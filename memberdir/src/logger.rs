use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Configure `env_logger` once for the whole process; `RUST_LOG` overrides
/// the defaults.
pub fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Info)
            .filter_module("probetable", LevelFilter::Warn)
            .format_timestamp_millis()
            .parse_default_env();

        // Another logger may already be installed
        let _ = builder.try_init();
    });
}
