use crate::error::TransportError;
use crate::osc::OscMessage;

/// Something that can put an OSC message on the wire.
pub trait Transmit {
    fn transmit(&mut self, msg: &OscMessage) -> Result<(), TransportError>;
}
