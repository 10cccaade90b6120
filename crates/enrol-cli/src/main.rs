//! `enrol` binary

use std::io::Write;
use std::process::ExitCode;

use enrol_cli::{command, log_filter, run, EXIT_FAILURE};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbosity: u8) {
    let filter = if verbosity > 0 {
        EnvFilter::new(log_filter(verbosity))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_filter(0)))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let matches = command().get_matches();
    init_tracing(matches.get_count("verbose"));

    let today = chrono::Local::now().date_naive();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let code = match run(&matches, today, &mut out) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            eprintln!("error: {err:#}");
            EXIT_FAILURE
        }
    };
    let _ = out.flush();
    ExitCode::from(code)
}
