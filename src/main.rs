use std::io::{self, Write};
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use netrc::cli::{self, Cli};
use netrc::ExitStatus;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();

    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            return fail(ExitStatus::InvalidCommand);
        }
    };

    match cli::run(&args) {
        Ok(output) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = stdout.write_all(output.as_bytes()).and_then(|()| stdout.flush()) {
                tracing::debug!("Could not write output: {}", e);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            fail(e.exit_status())
        }
    }
}

fn fail(status: ExitStatus) -> ExitCode {
    let _ = Cli::command().write_help(&mut io::stderr());
    status.into()
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("NETRC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
