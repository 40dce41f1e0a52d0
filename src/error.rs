use std::io;

use thiserror::Error;

/// Failure to set up the UDP socket for a destination. Fatal at startup.
#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("could not resolve {target}: {source}")]
    Resolve {
        target: String,
        #[source]
        source: io::Error,
    },

    #[error("{target} did not resolve to any address")]
    NoAddress { target: String },

    #[error("could not bind local UDP socket: {0}")]
    Bind(#[source] io::Error),

    #[error("could not connect UDP socket to {target}: {source}")]
    Connect {
        target: String,
        #[source]
        source: io::Error,
    },
}

/// Failure of a single datagram write. The driver logs it and moves on.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("socket write failed: {0}")]
    Io(#[from] io::Error),

    #[error("encoded message is {len} bytes, larger than a UDP datagram allows")]
    TooLarge { len: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MessageError {
    #[error("OSC address is empty")]
    EmptyAddress,

    #[error("OSC address {0:?} does not start with '/'")]
    MissingLeadingSlash(String),

    #[error("OSC address {0:?} must be ASCII without whitespace or NUL bytes")]
    InvalidAddress(String),

    #[error("OSC float argument must be finite")]
    NonFiniteArgument,
}
