//! fixarr CLI - walk a fixed-capacity array through every operation.

mod cli;
mod demo;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use fixarr::array::RandomSampler;

fn main() -> ExitCode {
    // Initialize logging subscriber
    use tracing_subscriber::{fmt, EnvFilter};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();
    let mut sampler = RandomSampler::from_config(&demo::config_from(&cli));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = demo::run(&cli, &mut sampler, &mut out)
        .and_then(|()| out.flush().map_err(demo::DemoError::from));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
