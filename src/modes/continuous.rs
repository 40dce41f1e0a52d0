use std::time::Duration;

use tracing::{info, warn};

use super::RunReport;
use crate::catalog::continuous_value;
use crate::osc::OscMessage;
use crate::shutdown::Shutdown;
use crate::traits::Transmit;

/// Sends `continuous_value(n)` to `address` for n = 0, 1, 2, ... until
/// `shutdown` fires. The interval wait doubles as the shutdown check, so an
/// interrupt ends the loop without waiting out the remaining interval.
pub fn run_continuous<T: Transmit>(
    transport: &mut T,
    address: &str,
    interval: Duration,
    shutdown: &Shutdown,
) -> RunReport {
    let mut report = RunReport::default();
    let mut counter: u64 = 0;

    info!(address, "Sending continuous test messages (Ctrl+C to stop)");
    loop {
        let value = continuous_value(counter);
        let result = OscMessage::new(address, value)
            .map_err(|e| e.to_string())
            .and_then(|msg| transport.transmit(&msg).map_err(|e| e.to_string()));
        match &result {
            Ok(()) => info!("Sent: {address} = {value:.2}"),
            Err(err) => warn!(address, value, "Failed to send message: {err}"),
        }
        report.record(result.is_ok());
        counter = counter.wrapping_add(1);

        if shutdown.wait(interval) {
            break;
        }
    }

    info!(%report, "Continuous test stopped");
    report
}
