//! Core library modules for hsutil.
//!
//! ## Modules
//!
//! - **Aggregation**: [`aggregate`] turns paged activity into a [`matrix::ResultMatrix`]
//! - **Reporting**: [`window`] for the time frame, [`formatter`] for units, [`view`] for output
//! - **Infrastructure**: [`config`], [`data_storage`], [`error`], [`logging`], [`messages`]

pub mod aggregate;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod formatter;
pub mod logging;
pub mod matrix;
pub mod messages;
pub mod view;
pub mod window;
