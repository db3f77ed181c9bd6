pub mod init;
pub mod table;

use crate::libs::logging;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Generate a table of how much time each employee worked on each project")]
    Table(table::TableArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Turn debug logging on
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parses the command line, sets up logging and runs the chosen command.
    ///
    /// # Returns
    ///
    /// Returns the result of the executed command.
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        logging::init(cli.debug);

        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Table(args) => table::cmd(args).await,
        }
    }
}
