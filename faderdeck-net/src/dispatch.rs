//! Inbound packet dispatch and the per-pass polling pump.
//!
//! Everything the remote sends is an echo of its own state. The
//! dispatcher folds those echoes into the [`Session`], pushes refreshed
//! values to the [`ControlSurface`], and treats any inbound traffic as
//! the drain signal for the outbound queue.

use std::io;

use rosc::{OscMessage, OscPacket, OscType};

use faderdeck_types::{refresh_bindings, slider_from_wire, ControlSurface, Page};

use crate::address::Inbound;
use crate::link::UdpLink;
use crate::queue::SendQueue;
use crate::session::Session;

/// Apply one inbound packet to the session and surface. Bundles are
/// walked recursively in order. `in_flight` gates the selected-name
/// refresh: parameter echoes only belong to a channel this panel asked
/// for while one of its own packets is outstanding.
pub fn handle_packet(
    packet: &OscPacket,
    session: &mut Session,
    surface: &mut dyn ControlSurface,
    in_flight: bool,
) {
    match packet {
        OscPacket::Message(msg) => handle_message(msg, session, surface, in_flight),
        OscPacket::Bundle(bundle) => {
            for inner in &bundle.content {
                handle_packet(inner, session, surface, in_flight);
            }
        }
    }
}

fn handle_message(
    msg: &OscMessage,
    session: &mut Session,
    surface: &mut dyn ControlSurface,
    in_flight: bool,
) {
    match Inbound::parse(&msg.addr) {
        Inbound::BusSelect { page, bus } => {
            // the remote reports the deselected bus with 0.0
            if float_arg(msg) == Some(1.0) {
                session.set_active(page, bus);
            }
        }
        Inbound::SlotName { slot } => {
            let name = match string_arg(msg) {
                Some(name) => name,
                None => return,
            };
            match session.active() {
                Some((Page::One, bus)) => {
                    session.channels_mut(bus).set_name(slot, name);
                }
                other => {
                    log::debug!(
                        target: "dispatch",
                        "dropping name for slot {} with active bus {:?}",
                        slot,
                        other
                    );
                }
            }
        }
        Inbound::Param { param } => {
            if let Some(value) = float_arg(msg) {
                session.cache_value(param, value);
            }
        }
        Inbound::SelectedName => {
            if !in_flight {
                return;
            }
            let name = match string_arg(msg) {
                Some(name) => name,
                None => return,
            };
            for (control, param) in refresh_bindings(name) {
                // parameters the remote has not echoed yet stay put
                if let Some(value) = session.cached(*param) {
                    let position = if control.is_toggle() {
                        (value != 0.0) as i32
                    } else {
                        slider_from_wire(value)
                    };
                    surface.set_value(*control, position);
                }
            }
        }
        Inbound::Other => {}
    }
}

/// Drain every datagram currently readable, dispatch each packet, then
/// fire the drain signal: at most one queued packet goes out per pass
/// that saw traffic. The stall watchdog runs on every pass. Returns the
/// number of packets processed.
pub fn poll_pass(
    link: &UdpLink,
    queue: &mut SendQueue,
    session: &mut Session,
    surface: &mut dyn ControlSurface,
) -> io::Result<usize> {
    let mut seen = 0;
    while let Some(packet) = link.recv_packet()? {
        handle_packet(&packet, session, surface, queue.is_in_flight());
        seen += 1;
    }
    if seen > 0 {
        match queue.drain() {
            Some(packet) => link.send(&packet)?,
            None => session.mark_ready(),
        }
    }
    queue.check_stall();
    Ok(seen)
}

/// Hand a packet to the queue, transmitting immediately when the wire
/// is free.
pub fn submit(link: &UdpLink, queue: &mut SendQueue, packet: Vec<u8>) -> io::Result<()> {
    if let Some(packet) = queue.enqueue(packet) {
        link.send(&packet)?;
    }
    Ok(())
}

fn float_arg(msg: &OscMessage) -> Option<f32> {
    match msg.args.first() {
        Some(OscType::Float(v)) => Some(*v),
        _ => None,
    }
}

fn string_arg(msg: &OscMessage) -> Option<&str> {
    match msg.args.first() {
        Some(OscType::String(s)) => Some(s.as_str()),
        _ => None,
    }
}
