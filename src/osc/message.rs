use std::fmt;

use crate::error::MessageError;

/// A single-argument OSC message: one address and one float32.
///
/// Construction validates the address and argument, so every `OscMessage` in
/// hand can be encoded without further checks.
#[derive(Debug, Clone, PartialEq)]
pub struct OscMessage {
    address: String,
    argument: f32,
}

impl OscMessage {
    pub fn new(address: impl Into<String>, argument: f32) -> Result<Self, MessageError> {
        let address = address.into();
        validate_address(&address)?;
        if !argument.is_finite() {
            return Err(MessageError::NonFiniteArgument);
        }
        Ok(Self { address, argument })
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn argument(&self) -> f32 {
        self.argument
    }
}

impl fmt::Display for OscMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.address, self.argument)
    }
}

fn validate_address(address: &str) -> Result<(), MessageError> {
    if address.is_empty() {
        return Err(MessageError::EmptyAddress);
    }
    if !address.starts_with('/') {
        return Err(MessageError::MissingLeadingSlash(address.to_string()));
    }
    let bad_byte = |b: &u8| !b.is_ascii() || b.is_ascii_whitespace() || *b == 0;
    if address.as_bytes().iter().any(bad_byte) {
        return Err(MessageError::InvalidAddress(address.to_string()));
    }
    Ok(())
}
