use std::time::Duration;

use crate::catalog::Channel;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const FACE_PORT: u16 = 8888;
pub const EYE_PORT: u16 = 8889;

/// Fixed settings for a probe run. The binary always uses `Default`; tests
/// point it at ephemeral ports and shrink the intervals.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeConfig {
    pub host: String,
    pub face_port: u16,
    pub eye_port: u16,
    /// Pause after each message of the face and eye catalogs.
    pub catalog_interval: Duration,
    /// Pause between continuous-mode messages.
    pub continuous_interval: Duration,
    pub continuous_address: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            face_port: FACE_PORT,
            eye_port: EYE_PORT,
            catalog_interval: Duration::from_millis(500),
            continuous_interval: Duration::from_millis(1000),
            continuous_address: "/jawOpen".to_string(),
        }
    }
}

impl ProbeConfig {
    pub fn port_for(&self, channel: Channel) -> u16 {
        match channel {
            Channel::Face => self.face_port,
            Channel::Eye => self.eye_port,
        }
    }
}
