//! Outbound packet construction for the remote's relative-addressing
//! dialect.
//!
//! The remote cannot address a channel by index. A selection is a bundle
//! of relative moves: one bus-select, a full rewind of `count()`
//! track-minus messages, then `slot - 1` track-plus messages. Fader and
//! toggle pushes ride a terminal parameter message in the same bundle so
//! the remote applies navigation and value in order.

use std::io;

use rosc::{OscBundle, OscMessage, OscPacket, OscTime, OscType};

use faderdeck_types::{wire_from_slider, Bus, ChannelMap, FaderParam, Page};

use crate::address;
use crate::session::Session;

/// Channels re-selected by the periodic refresh and by the tail of the
/// discovery burst. The last selection decides whose parameter echoes
/// settle on page 2.
pub const SYNC_CHANNELS: [(Bus, &str); 4] = [
    (Bus::Input, "Mic 1"),
    (Bus::Input, "SPDIF"),
    (Bus::Output, "Main"),
    (Bus::Output, "Speaker B"),
];

/// Bus sets opening the discovery burst. Each one makes the remote dump
/// the track names of that bus; Playback goes out first and again last.
const DISCOVERY_BUSES: [Bus; 4] = [Bus::Playback, Bus::Input, Bus::Output, Bus::Playback];

fn float_msg(addr: String, value: f32) -> OscMessage {
    OscMessage {
        addr,
        args: vec![OscType::Float(value)],
    }
}

/// Immediate timetag (0,1): execute as soon as received.
fn immediate() -> OscTime {
    OscTime {
        seconds: 0,
        fractional: 1,
    }
}

fn encode_bundle(messages: Vec<OscMessage>) -> io::Result<Vec<u8>> {
    let bundle = OscPacket::Bundle(OscBundle {
        timetag: immediate(),
        content: messages.into_iter().map(OscPacket::Message).collect(),
    });
    rosc::encoder::encode(&bundle)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))
}

/// The message sequence selecting `name` on a bus: bus-select, full
/// rewind, then forward steps to the target slot.
///
/// The rewind lands on slot 1, so slots 0 and 1 both take zero forward
/// steps. A name missing from the registry degrades to the bus-select
/// alone; relative moves against an unknown slot would land anywhere.
pub fn navigate_messages(map: &ChannelMap, page: Page, bus: Bus, name: &str) -> Vec<OscMessage> {
    let mut messages = vec![float_msg(address::bus_select(page, bus), 1.0)];
    let slot = match map.id_for_name(name) {
        Some(slot) => slot,
        None => {
            log::debug!(target: "engine", "{:?} not in the {} registry, selecting bus only", name, bus);
            return messages;
        }
    };
    for _ in 0..map.count() {
        messages.push(float_msg(address::track_prev(page), 1.0));
    }
    for _ in 1..slot.get() {
        messages.push(float_msg(address::track_next(page), 1.0));
    }
    messages
}

/// Encode a channel-select bundle with no terminal parameter. Used by
/// the discovery burst and the periodic refresh; the remote answers with
/// `/2/trackname` and the channel's parameter values.
pub fn select_channel(map: &ChannelMap, page: Page, bus: Bus, name: &str) -> io::Result<Vec<u8>> {
    encode_bundle(navigate_messages(map, page, bus, name))
}

/// Encode a fader move: select the channel, then set `param` from the
/// slider position in the same bundle.
pub fn set_fader(
    map: &ChannelMap,
    page: Page,
    bus: Bus,
    name: &str,
    param: FaderParam,
    position: i32,
) -> io::Result<Vec<u8>> {
    with_terminal(map, page, bus, name, param, wire_from_slider(position))
}

/// Encode a toggle push: select the channel, then send 1.0 at `param`.
/// The remote flips its own state on every push.
pub fn push_toggle(
    map: &ChannelMap,
    page: Page,
    bus: Bus,
    name: &str,
    param: FaderParam,
) -> io::Result<Vec<u8>> {
    with_terminal(map, page, bus, name, param, 1.0)
}

fn with_terminal(
    map: &ChannelMap,
    page: Page,
    bus: Bus,
    name: &str,
    param: FaderParam,
    value: f32,
) -> io::Result<Vec<u8>> {
    let mut messages = navigate_messages(map, page, bus, name);
    // An unknown channel keeps the bundle to the bare bus-select.
    if map.id_for_name(name).is_some() {
        messages.push(float_msg(address::param(page, param), value));
    }
    encode_bundle(messages)
}

/// Encode a bare bus-set message, e.g. `/1/busInput` = 1.0.
pub fn set_bus(page: Page, bus: Bus) -> io::Result<Vec<u8>> {
    let msg = OscPacket::Message(float_msg(address::bus_select(page, bus), 1.0));
    rosc::encoder::encode(&msg)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))
}

/// Packets of the initial synchronization burst, in send order: the bus
/// sets that make the remote dump its track names, then one select per
/// panel channel.
pub fn discovery_burst(session: &Session) -> io::Result<Vec<Vec<u8>>> {
    let mut packets = Vec::with_capacity(DISCOVERY_BUSES.len() + SYNC_CHANNELS.len());
    for bus in DISCOVERY_BUSES {
        packets.push(set_bus(Page::One, bus)?);
    }
    packets.extend(refresh_round(session)?);
    Ok(packets)
}

/// Packets re-selecting the four panel channels, refreshing their
/// parameter echoes.
pub fn refresh_round(session: &Session) -> io::Result<Vec<Vec<u8>>> {
    SYNC_CHANNELS
        .iter()
        .map(|(bus, name)| select_channel(session.channels(*bus), Page::Two, *bus, name))
        .collect()
}
