use hsutil::commands::Cli;
use std::process::ExitCode;

// Requests are awaited one after another; a single thread is all the report needs.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match Cli::menu().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
