//! UDP GELF transport

use crate::{Transport, TransportError};
use graylog_protocol::{encode_gelf, LogLevel, Payload};
use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, trace};

/// Fire-and-forget GELF sender over a single UDP socket.
///
/// The socket is bound to an ephemeral local port and connected to the
/// Graylog input at construction time, so concurrent `send` calls need no
/// further synchronization.
#[derive(Debug)]
pub struct UdpTransport {
    socket: UdpSocket,
    target: SocketAddr,
    facility: String,
}

impl UdpTransport {
    /// Resolve `server:port`, bind a local socket and connect it.
    pub fn connect(server: &str, port: u16, facility: &str) -> Result<Self, TransportError> {
        let endpoint = format!("{server}:{port}");
        let target = endpoint
            .to_socket_addrs()
            .map_err(|_| TransportError::Resolve(endpoint.clone()))?
            .next()
            .ok_or_else(|| TransportError::Resolve(endpoint.clone()))?;

        let bind_addr: SocketAddr = if target.is_ipv4() {
            "0.0.0.0:0".parse().expect("valid bind address")
        } else {
            "[::]:0".parse().expect("valid bind address")
        };
        let socket = UdpSocket::bind(bind_addr)?;
        socket.connect(target)?;

        debug!(endpoint = %endpoint, facility, "GELF UDP transport connected");

        Ok(Self {
            socket,
            target,
            facility: facility.to_string(),
        })
    }

    pub fn facility(&self) -> &str {
        &self.facility
    }

    fn unix_timestamp() -> f64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs_f64()
    }
}

impl Transport for UdpTransport {
    fn send(
        &self,
        level: LogLevel,
        message: &str,
        payload: &Payload,
    ) -> Result<(), TransportError> {
        let datagram = encode_gelf(level, message, payload, &self.facility, Self::unix_timestamp())?;
        let sent = self.socket.send(&datagram)?;
        trace!(level = %level, bytes = sent, target = %self.target, "GELF record dispatched");
        Ok(())
    }

    fn endpoint(&self) -> String {
        self.target.to_string()
    }
}
