//! Diagnostic logging setup.
//!
//! Events go to stderr so stdout carries only reports. The filter comes from
//! `INVENTORY_LOG` (e.g. `INVENTORY_LOG=debug`) and defaults to errors only.

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "INVENTORY_LOG";

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("error"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
