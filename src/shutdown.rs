use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, bounded};

/// Cancellation token for the continuous loop.
///
/// Fires when a value arrives on the paired sender or when every sender has
/// been dropped.
#[derive(Debug)]
pub struct Shutdown {
    rx: Receiver<()>,
    // Held by tokens that must never fire.
    _keepalive: Option<Sender<()>>,
}

impl Shutdown {
    pub fn new() -> (Sender<()>, Self) {
        let (tx, rx) = bounded(1);
        (
            tx,
            Self {
                rx,
                _keepalive: None,
            },
        )
    }

    /// A token that is never requested, for runs that end on their own.
    pub fn never() -> Self {
        let (tx, rx) = bounded(1);
        Self {
            rx,
            _keepalive: Some(tx),
        }
    }

    /// Routes Ctrl-C (and SIGTERM) into a new token.
    pub fn on_interrupt() -> Result<Self, ctrlc::Error> {
        let (tx, shutdown) = Self::new();
        ctrlc::set_handler(move || {
            let _ = tx.try_send(());
        })?;
        Ok(shutdown)
    }

    /// Blocks for up to `timeout`. Returns true if shutdown was requested.
    pub fn wait(&self, timeout: Duration) -> bool {
        match self.rx.recv_timeout(timeout) {
            Ok(()) | Err(RecvTimeoutError::Disconnected) => true,
            Err(RecvTimeoutError::Timeout) => false,
        }
    }
}
