pub mod encoder;
mod message;
mod sender;

pub use message::OscMessage;
pub use sender::{MAX_DATAGRAM_LEN, OscSender};
