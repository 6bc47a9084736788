//! Non-blocking UDP transport carrying encoded OSC packets.

use std::io;
use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};

use rosc::OscPacket;

/// One datagram socket bound locally and aimed at the remote mixer.
pub struct UdpLink {
    socket: UdpSocket,
    remote: SocketAddr,
}

impl UdpLink {
    /// Bind the local endpoint and aim at the remote. The socket is
    /// non-blocking; [`UdpLink::recv_packet`] returns None when nothing
    /// is waiting.
    pub fn bind(local: &str, remote: &str) -> io::Result<Self> {
        let socket = UdpSocket::bind(local)?;
        socket.set_nonblocking(true)?;
        let remote = remote
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("remote address {} did not resolve", remote),
                )
            })?;
        Ok(UdpLink { socket, remote })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    pub fn remote_addr(&self) -> SocketAddr {
        self.remote
    }

    pub fn send(&self, packet: &[u8]) -> io::Result<()> {
        self.socket.send_to(packet, self.remote)?;
        Ok(())
    }

    /// Pull the next decodable packet off the socket. Malformed
    /// datagrams are skipped; None means nothing is waiting.
    pub fn recv_packet(&self) -> io::Result<Option<OscPacket>> {
        let mut buf = [0u8; 4096];
        loop {
            match self.socket.recv(&mut buf) {
                Ok(n) => match rosc::decoder::decode_udp(&buf[..n]) {
                    Ok((_, packet)) => return Ok(Some(packet)),
                    Err(e) => {
                        log::debug!(target: "link", "skipping malformed datagram: {}", e);
                    }
                },
                Err(ref e) if e.kind() == io::ErrorKind::WouldBlock => return Ok(None),
                Err(e) => return Err(e),
            }
        }
    }
}
