//! Scripted OSC sender for exercising face and eye tracking receivers.
//!
//! Encodes `(address, float32)` pairs as OSC 1.0 messages and writes each one
//! as a single UDP datagram, following one of the canned catalogs in
//! [`catalog`].

pub mod catalog;
pub mod config;
pub mod error;
pub mod modes;
pub mod osc;
pub mod shutdown;
pub mod traits;

pub use catalog::Channel;
pub use config::ProbeConfig;
pub use error::{ConnectError, MessageError, TransportError};
pub use modes::{Mode, RunReport};
pub use osc::{OscMessage, OscSender};
pub use shutdown::Shutdown;
pub use traits::Transmit;
