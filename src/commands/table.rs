//! The `table` command: hours per employee per project for a time frame.

use crate::{
    api::{FixtureSource, HubstaffClient, PageSource},
    libs::{
        aggregate,
        config::Config,
        formatter::TimeUnit,
        matrix::{EmployeeRef, ProjectRef, ResultMatrix},
        messages::Message,
        view::{OutputFormat, View},
        window::{parse_date, yesterday, ReportWindow, DATE_FORMAT},
    },
    msg_bail_anyhow, msg_error_anyhow, msg_info, msg_warning,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;

/// Command-line arguments for the table command.
///
/// The time frame is either one day (`--date`, yesterday by default) or an
/// inclusive `--from`/`--to` range; the two forms are mutually exclusive.
#[derive(Debug, Args)]
pub struct TableArgs {
    /// Use the bundled test data instead of the Hubstaff API
    #[arg(long)]
    test: bool,

    /// Use test data from this fixture file (implies --test)
    #[arg(long, value_name = "PATH")]
    fixture: Option<PathBuf>,

    /// Path to the configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Unit of time for the table (rounds down to the nearest integer)
    #[arg(long, value_enum, default_value_t = TimeUnit::Seconds)]
    unit: TimeUnit,

    /// Single day (24 hour period) to report, DD-MM-YYYY. Defaults to yesterday
    #[arg(long, value_parser = parse_date, conflicts_with_all = ["from", "to"])]
    date: Option<NaiveDate>,

    /// First day of a multi-day time frame, DD-MM-YYYY
    #[arg(long, value_parser = parse_date, requires = "to")]
    from: Option<NaiveDate>,

    /// Last day (inclusive) of a multi-day time frame, DD-MM-YYYY
    #[arg(long, value_parser = parse_date, requires = "from")]
    to: Option<NaiveDate>,

    /// What to label employee columns with
    #[arg(long = "emp-ref", value_enum, default_value_t = EmployeeRef::Name)]
    emp_ref: EmployeeRef,

    /// What to label project rows with
    #[arg(long = "proj-ref", value_enum, default_value_t = ProjectRef::Name)]
    proj_ref: ProjectRef,

    /// Output format of the table
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,
}

impl TableArgs {
    /// The reporting window selected by `--date` or `--from`/`--to`.
    ///
    /// # Returns
    ///
    /// Returns the window in local time, or an error if `--from` is after `--to`.
    pub fn window(&self) -> Result<ReportWindow> {
        match (self.from, self.to) {
            (Some(from), Some(to)) => {
                if from > to {
                    msg_bail_anyhow!(Message::ReportRangeInverted(
                        from.format(DATE_FORMAT).to_string(),
                        to.format(DATE_FORMAT).to_string()
                    ));
                }
                Ok(ReportWindow::for_range(from, to))
            }
            _ => Ok(ReportWindow::for_date(self.date.unwrap_or_else(yesterday))),
        }
    }
}

/// Executes the table command.
///
/// Picks the data source (a fixture file, the bundled test data, or the live
/// API after loading the configuration and logging in), builds the matrix and
/// writes it to stdout in the requested format.
///
/// # Arguments
///
/// * `args` - Parsed command-line arguments
///
/// # Returns
///
/// Returns `Ok(())` after the table is written, or when there was no activity
/// to report. Configuration, login, transport and pagination failures are
/// returned as errors and nothing is printed to stdout.
pub async fn cmd(args: TableArgs) -> Result<()> {
    let window = args.window()?;
    msg_info!(Message::ReportTimeFrame(window.start.clone(), window.end.clone()));

    let matrix = if let Some(path) = &args.fixture {
        msg_info!(Message::ReportFixture(path.display().to_string()));
        build(&FixtureSource::from_path(path)?, &window, &args).await?
    } else if args.test {
        msg_info!(Message::ReportTestMode);
        build(&FixtureSource::bundled()?, &window, &args).await?
    } else {
        let config = Config::load(args.config.as_deref())
            .map_err(|e| msg_error_anyhow!(Message::ConfigLoadFailed(e.to_string())))?;
        let hubstaff = config.hubstaff()?;
        let password = hubstaff.password_or_prompt()?;

        msg_info!(Message::Connecting(hubstaff.org_name.clone()));
        let client = HubstaffClient::connect(hubstaff, &password)
            .await
            .map_err(|e| msg_error_anyhow!(Message::ConnectFailed(e.to_string())))?;
        build(&client, &window, &args).await?
    };

    if matrix.is_empty() {
        msg_warning!(Message::ReportEmpty);
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    View::render(&matrix, args.unit, args.format, &mut out)?;
    out.flush()?;
    Ok(())
}

async fn build<S: PageSource>(source: &S, window: &ReportWindow, args: &TableArgs) -> Result<ResultMatrix> {
    aggregate::build(source, window, args.emp_ref, args.proj_ref)
        .await
        .map_err(|e| msg_error_anyhow!(Message::ReportFailed(e.to_string())))
}
