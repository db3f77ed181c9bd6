//! Tracing setup for the binary.
//!
//! Logs go to stderr so reports written to stdout stay clean. `RUST_LOG`
//! takes precedence; otherwise `--debug` selects `debug` and the default is
//! `warn`.

use super::messages::macros::set_debug_mode;
use tracing_subscriber::EnvFilter;

pub fn init(debug: bool) {
    set_debug_mode(debug);

    let crate_name = env!("CARGO_PKG_NAME").replace('-', "_");
    let level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(format!("{}={}", crate_name, level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
