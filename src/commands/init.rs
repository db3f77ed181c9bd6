//! Configuration initialization command.
//!
//! Runs an interactive wizard that collects the Hubstaff credentials and
//! organization, prefilled with the values already stored.

use crate::{
    libs::{config::Config, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

/// Command-line arguments for the initialization command.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove the existing configuration instead of creating a new one
    #[arg(short, long)]
    delete: bool,
}

/// Executes the initialization command.
///
/// Runs the setup wizard and saves its result, or removes the stored
/// configuration when `--delete` is given.
///
/// # Arguments
///
/// * `init_args` - Parsed command-line arguments
///
/// # Returns
///
/// Returns `Ok(())` once the configuration is saved or deleted, or an error
/// if a prompt is aborted or the file cannot be written.
pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        if Config::delete()? {
            msg_success!(Message::ConfigDeleted);
        } else {
            msg_info!(Message::ConfigNothingToDelete);
        }
        return Ok(());
    }

    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
