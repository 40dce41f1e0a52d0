use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs, UdpSocket};

use tracing::debug;

use super::encoder;
use super::message::OscMessage;
use crate::error::{ConnectError, TransportError};
use crate::traits::Transmit;

/// Largest payload a single IPv4 UDP datagram can carry.
pub const MAX_DATAGRAM_LEN: usize = 65_507;

/// UDP client bound to one OSC destination for its whole lifetime.
#[derive(Debug)]
pub struct OscSender {
    destination: SocketAddr,
    socket: UdpSocket,
}

impl OscSender {
    /// Resolves `host:port`, binds an ephemeral local socket of the same
    /// address family and connects it to the destination.
    pub fn open(host: &str, port: u16) -> Result<Self, ConnectError> {
        let target = format!("{host}:{port}");
        let destination = (host, port)
            .to_socket_addrs()
            .map_err(|source| ConnectError::Resolve {
                target: target.clone(),
                source,
            })?
            .next()
            .ok_or_else(|| ConnectError::NoAddress {
                target: target.clone(),
            })?;

        let local: SocketAddr = match destination {
            SocketAddr::V4(_) => (Ipv4Addr::UNSPECIFIED, 0).into(),
            SocketAddr::V6(_) => (Ipv6Addr::UNSPECIFIED, 0).into(),
        };
        let socket = UdpSocket::bind(local).map_err(ConnectError::Bind)?;
        socket
            .connect(destination)
            .map_err(|source| ConnectError::Connect { target, source })?;

        if let Ok(local_addr) = socket.local_addr() {
            debug!(%local_addr, %destination, "OSC sender opened");
        }
        Ok(Self {
            destination,
            socket,
        })
    }

    pub fn destination(&self) -> SocketAddr {
        self.destination
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// Encodes `msg` and writes it as one datagram. Returns the number of
    /// bytes handed to the OS; nothing is known about delivery.
    pub fn send(&self, msg: &OscMessage) -> Result<usize, TransportError> {
        let len = encoder::encoded_len(msg);
        if len > MAX_DATAGRAM_LEN {
            return Err(TransportError::TooLarge { len });
        }
        let buf = encoder::encode(msg);
        let sent = self.socket.send(&buf)?;
        debug!(bytes = sent, destination = %self.destination, address = msg.address(), "OSC datagram sent");
        Ok(sent)
    }
}

impl Transmit for OscSender {
    fn transmit(&mut self, msg: &OscMessage) -> Result<(), TransportError> {
        self.send(msg).map(|_| ())
    }
}
