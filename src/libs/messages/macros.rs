//! Macros for user-facing messages.
//!
//! In debug mode every message goes through `tracing` so it is interleaved
//! with the request logs; otherwise it is printed plainly. Report output is
//! written to stdout, so status messages other than `msg_print!` go to
//! stderr to keep redirected reports clean.
//!
//! ## Debug Mode Detection
//!
//! Debug mode is on when `--debug` was passed (see [`set_debug_mode`]) or
//! when `HSUTIL_DEBUG` or `RUST_LOG` is set. The result is computed once.
//!
//! ## Macros
//!
//! - **`msg_print!`**: plain message to stdout
//! - **`msg_success!`**: ✅ prefix
//! - **`msg_info!`**: ℹ️ prefix
//! - **`msg_warning!`**: ⚠️ prefix
//! - **`msg_error_anyhow!`** / **`msg_bail_anyhow!`**: build or return an `anyhow::Error`
//!
//! ```rust,ignore
//! use hsutil::libs::messages::Message;
//! use hsutil::{msg_info, msg_success};
//!
//! msg_info!(Message::ReportTestMode);
//! msg_success!(Message::ConfigSaved);
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Forces debug mode on or off. Only the first call (or first check) wins.
pub fn set_debug_mode(enabled: bool) {
    let _ = DEBUG_MODE.set(enabled || env_requests_debug());
}

fn env_requests_debug() -> bool {
    std::env::var("HSUTIL_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok()
}

#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(env_requests_debug)
}

#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            eprintln!("✅ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            eprintln!("⚠️  {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            eprintln!("ℹ️  {}", $msg);
        }
    };
}

/// Creates an `anyhow::Error` from a message with ❌ prefix.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}

/// Returns early with an error created from a message.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
