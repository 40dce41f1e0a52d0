use std::thread::sleep;
use std::time::Duration;

use tracing::{info, warn};

use super::RunReport;
use crate::catalog::{Channel, messages_for};
use crate::osc::OscMessage;
use crate::traits::Transmit;

/// Sends every message of `channel`'s catalog in order, pausing `interval`
/// after each one. A failed message is logged and skipped; the rest of the
/// catalog is still attempted.
pub fn run_catalog<T: Transmit>(transport: &mut T, channel: Channel, interval: Duration) -> RunReport {
    let messages = messages_for(channel);
    let total = messages.len();
    let mut report = RunReport::default();

    info!(total, "Sending {channel} tracking OSC messages");
    for (i, &(address, value)) in messages.iter().enumerate() {
        info!("Sending message {}/{}: {} = {}", i + 1, total, address, value);
        let result = OscMessage::new(address, value)
            .map_err(|e| e.to_string())
            .and_then(|msg| transport.transmit(&msg).map_err(|e| e.to_string()));
        if let Err(err) = &result {
            warn!(address, "Failed to send message: {err}");
        }
        report.record(result.is_ok());
        sleep(interval);
    }

    if report.failed > 0 {
        warn!(%report, "{channel} catalog finished with failures");
    } else {
        info!(%report, "{channel} catalog complete");
    }
    report
}
