#![allow(dead_code)]
//! Test harness utilities for faderdeck-net integration tests.

use std::collections::HashMap;
use std::net::{SocketAddr, UdpSocket};
use std::time::{Duration, Instant};

use rosc::{OscMessage, OscPacket, OscType};

use faderdeck_net::dispatch::poll_pass;
use faderdeck_net::link::UdpLink;
use faderdeck_net::queue::SendQueue;
use faderdeck_net::session::Session;
use faderdeck_types::{ControlId, ControlSurface};

/// A scripted stand-in for the remote mixer on the far end of the link.
///
/// Because the tests are single-threaded, exchanges are split:
/// 1. submit packets through the panel's queue
/// 2. `recv()` / `recv_all()` pulls what actually hit the wire
/// 3. `send_float()` etc. answers, which the next `poll_pass` consumes
pub struct FakeMixer {
    socket: UdpSocket,
    panel_addr: Option<SocketAddr>,
}

impl FakeMixer {
    pub fn start() -> std::io::Result<Self> {
        let socket = UdpSocket::bind("127.0.0.1:0")?;
        socket.set_read_timeout(Some(Duration::from_millis(20)))?;
        Ok(Self {
            socket,
            panel_addr: None,
        })
    }

    pub fn addr(&self) -> String {
        self.socket.local_addr().unwrap().to_string()
    }

    /// Receive one packet, remembering the panel's address for replies.
    pub fn recv(&mut self) -> Option<OscPacket> {
        let mut buf = [0u8; 4096];
        match self.socket.recv_from(&mut buf) {
            Ok((n, from)) => {
                self.panel_addr = Some(from);
                rosc::decoder::decode_udp(&buf[..n]).ok().map(|(_, p)| p)
            }
            Err(_) => None,
        }
    }

    /// Collect every packet arriving within the window.
    pub fn recv_all(&mut self, window: Duration) -> Vec<OscPacket> {
        let start = Instant::now();
        let mut packets = Vec::new();
        while Instant::now().duration_since(start) < window {
            if let Some(packet) = self.recv() {
                packets.push(packet);
            }
        }
        packets
    }

    pub fn send(&self, packet: &OscPacket) {
        let to = self.panel_addr.expect("no panel datagram seen yet");
        let buf = rosc::encoder::encode(packet).unwrap();
        self.socket.send_to(&buf, to).unwrap();
    }

    pub fn send_float(&self, addr: &str, value: f32) {
        self.send(&OscPacket::Message(OscMessage {
            addr: addr.to_string(),
            args: vec![OscType::Float(value)],
        }));
    }

    pub fn send_str(&self, addr: &str, value: &str) {
        self.send(&OscPacket::Message(OscMessage {
            addr: addr.to_string(),
            args: vec![OscType::String(value.to_string())],
        }));
    }

    /// Report a bus selection plus its slot names, the way the remote
    /// answers a `/1/bus*` set.
    pub fn announce_bus(&self, bus: &str, names: &[&str]) {
        self.send_float(&format!("/1/bus{}", bus), 1.0);
        for (i, name) in names.iter().enumerate() {
            self.send_str(&format!("/1/trackname{}", i + 1), name);
        }
    }
}

/// Headless control surface recording every synchronized update.
pub struct PanelStub {
    pub values: HashMap<ControlId, i32>,
    pub adjusting: bool,
}

impl PanelStub {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
            adjusting: false,
        }
    }
}

impl ControlSurface for PanelStub {
    fn value(&self, id: ControlId) -> i32 {
        self.values.get(&id).copied().unwrap_or(0)
    }

    fn set_value(&mut self, id: ControlId, value: i32) {
        self.values.insert(id, value);
    }

    fn is_adjusting(&self) -> bool {
        self.adjusting
    }
}

/// Bind a panel link aimed at the fake mixer.
pub fn panel_link(mixer: &FakeMixer) -> UdpLink {
    UdpLink::bind("127.0.0.1:0", &mixer.addr()).unwrap()
}

/// Flatten packets into their messages, bundle order preserved.
pub fn flatten(packets: &[OscPacket]) -> Vec<OscMessage> {
    let mut messages = Vec::new();
    for packet in packets {
        flatten_into(packet, &mut messages);
    }
    messages
}

fn flatten_into(packet: &OscPacket, out: &mut Vec<OscMessage>) {
    match packet {
        OscPacket::Message(msg) => out.push(msg.clone()),
        OscPacket::Bundle(bundle) => {
            for inner in &bundle.content {
                flatten_into(inner, out);
            }
        }
    }
}

pub fn addrs(messages: &[OscMessage]) -> Vec<String> {
    messages.iter().map(|m| m.addr.clone()).collect()
}

/// Drive the panel loop until `done` returns true, or panic on timeout.
pub fn drive_until<F>(
    link: &UdpLink,
    queue: &mut SendQueue,
    session: &mut Session,
    surface: &mut PanelStub,
    timeout: Duration,
    mut done: F,
) where
    F: FnMut(&Session, &PanelStub) -> bool,
{
    let start = Instant::now();
    while Instant::now().duration_since(start) < timeout {
        poll_pass(link, queue, session, surface).unwrap();
        if done(session, surface) {
            return;
        }
        std::thread::sleep(Duration::from_millis(2));
    }
    panic!("Timed out driving the panel loop");
}

/// Answer with one neutral echo and return the packet it releases from
/// the queue, or panic if nothing comes out.
pub fn release_next(
    mixer: &mut FakeMixer,
    link: &UdpLink,
    queue: &mut SendQueue,
    session: &mut Session,
    surface: &mut PanelStub,
) -> Vec<OscMessage> {
    mixer.send_float("/2/pan", 0.5);
    let start = Instant::now();
    while Instant::now().duration_since(start) < Duration::from_secs(2) {
        poll_pass(link, queue, session, surface).unwrap();
        if let Some(packet) = mixer.recv() {
            return flatten(&[packet]);
        }
    }
    panic!("No packet released after an echo");
}
