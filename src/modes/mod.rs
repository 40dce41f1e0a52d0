use std::fmt;

use clap::ValueEnum;
use tracing::info;

use crate::catalog::Channel;
use crate::config::ProbeConfig;
use crate::error::ConnectError;
use crate::osc::OscSender;
use crate::shutdown::Shutdown;

pub mod continuous;
pub mod scripted;

pub use continuous::run_continuous;
pub use scripted::run_catalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    /// Send the face expression catalog once.
    #[default]
    Face,
    /// Send the eye tracking catalog once.
    Eye,
    /// Sweep /jawOpen from 0.00 to 0.99 until interrupted.
    Continuous,
}

impl Mode {
    pub fn channel(self) -> Channel {
        match self {
            Mode::Face | Mode::Continuous => Channel::Face,
            Mode::Eye => Channel::Eye,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Face => f.write_str("face"),
            Mode::Eye => f.write_str("eye"),
            Mode::Continuous => f.write_str("continuous"),
        }
    }
}

/// Counters for one driver run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    pub attempted: usize,
    pub sent: usize,
    pub failed: usize,
}

impl RunReport {
    pub(crate) fn record(&mut self, ok: bool) {
        self.attempted += 1;
        if ok {
            self.sent += 1;
        } else {
            self.failed += 1;
        }
    }

    /// True when messages were attempted and none of them made it out.
    pub fn all_failed(&self) -> bool {
        self.attempted > 0 && self.sent == 0
    }

    /// Process exit status for a run of `mode` that produced this report.
    ///
    /// Continuous mode only ends on interrupt and always exits 0. The finite
    /// modes exit 1 only when no message at all could be sent.
    pub fn exit_status(&self, mode: Mode) -> u8 {
        match mode {
            Mode::Continuous => 0,
            Mode::Face | Mode::Eye if self.all_failed() => 1,
            Mode::Face | Mode::Eye => 0,
        }
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} attempted, {} sent, {} failed",
            self.attempted, self.sent, self.failed
        )
    }
}

/// Opens the sender for `mode`'s channel and drives it to completion (or
/// until `shutdown` fires, for continuous mode). The socket is closed before
/// this returns.
pub fn run(mode: Mode, config: &ProbeConfig, shutdown: &Shutdown) -> Result<RunReport, ConnectError> {
    let channel = mode.channel();
    let port = config.port_for(channel);
    let mut sender = OscSender::open(&config.host, port)?;
    info!(%mode, destination = %sender.destination(), "OSC sender ready");

    let report = match mode {
        Mode::Face | Mode::Eye => run_catalog(&mut sender, channel, config.catalog_interval),
        Mode::Continuous => run_continuous(
            &mut sender,
            &config.continuous_address,
            config.continuous_interval,
            shutdown,
        ),
    };
    drop(sender);
    Ok(report)
}
