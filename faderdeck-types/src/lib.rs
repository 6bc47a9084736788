//! # faderdeck-types
//!
//! Shared type definitions for the faderdeck remote-control panel.
//! This crate contains the mixer data model used across faderdeck-net and
//! the panel binary: busses and pages, per-bus channel registries, the
//! page-2 parameter names, the fader value scale, and the control surface
//! the protocol layer writes synchronized values into.

mod bus;
mod channel;
mod control;
mod fader;
mod param;

pub use bus::{Bus, Page};
pub use channel::{Channel, ChannelMap};
pub use control::{refresh_bindings, send_targets, ControlId, ControlSurface, ControlTarget};
pub use fader::{slider_from_wire, wire_from_slider, SLIDER_MAX};
pub use param::FaderParam;

/// Slot index of a channel within its bus, as numbered by the remote
/// device's track-name reports (1-based in practice).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct SlotId(u32);

impl SlotId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
    pub fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
