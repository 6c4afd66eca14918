//! Menu-driven clinic appointment tracker over a flat data file.

use std::{io, path::PathBuf, process::ExitCode};

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use apptbook::session::Session;

/// Menu-driven clinic appointment tracker.
#[derive(Debug, Parser)]
#[command(name = "apptbook", version, about)]
struct Cli {
    /// Flat data file holding one appointment per line.
    #[arg(long, default_value = "clinic_data.csv")]
    data_file: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut session = match Session::open(cli.data_file) {
        Ok(session) => session,
        Err(err) => {
            error!(%err, "could not open data file");
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    if let Err(err) = session.run(&mut stdin.lock(), &mut io::stdout()) {
        error!(%err, "session ended with an error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
