use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use tracker_osc_probe::{Mode, ProbeConfig, Shutdown, modes};

/// OSC test tool: sends scripted tracking parameters to a local receiver.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Test mode
    #[arg(long, value_enum, default_value_t = Mode::Face)]
    mode: Mode,
}

fn init_logging() {
    // RUST_LOG picks the filter (default "info"); OSC_PROBE_LOG_FORMAT=json
    // switches to newline-delimited JSON.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if std::env::var("OSC_PROBE_LOG_FORMAT").as_deref() == Ok("json") {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .compact()
            .init();
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match run(cli.mode) {
        Ok(code) => code,
        Err(err) => {
            error!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(mode: Mode) -> Result<ExitCode, Box<dyn Error>> {
    let config = ProbeConfig::default();
    // Finite modes keep the default Ctrl-C behaviour; only the unbounded
    // loop needs to observe the interrupt.
    let shutdown = match mode {
        Mode::Continuous => Shutdown::on_interrupt()?,
        Mode::Face | Mode::Eye => Shutdown::never(),
    };

    let report = modes::run(mode, &config, &shutdown)?;
    let status = report.exit_status(mode);
    if mode != Mode::Continuous {
        if status != 0 {
            error!(%report, "No message could be sent");
        } else if report.failed > 0 {
            warn!(%report, "Test finished with failures");
        } else {
            info!("Test complete!");
        }
    }
    Ok(ExitCode::from(status))
}
