//! # hsutil - Hubstaff reporting utility
//!
//! Builds a table of how much time each employee tracked on each project of
//! a Hubstaff organization within a time frame.
//!
//! ## Features
//!
//! - **Paged API Access**: Lazy, hop-capped page sequences over the Hubstaff API
//! - **Aggregation**: Dense project-by-employee matrix in first-seen order
//! - **Test Mode**: Fixture-backed data source for offline runs
//! - **Output**: HTML, terminal table, CSV and JSON
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hsutil::commands::Cli;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
