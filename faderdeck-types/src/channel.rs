use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::SlotId;

/// A single mixer channel as reported by the remote device.
///
/// Identity is `name` (exact, case-sensitive). `label` is a display tag
/// and `pattern` the OSC fragment associated with the channel; neither
/// takes part in protocol addressing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub label: String,
    pub name: String,
    pub pattern: String,
}

impl Channel {
    pub fn named(name: &str) -> Self {
        Channel {
            label: String::new(),
            name: name.to_string(),
            pattern: String::new(),
        }
    }
}

/// Ordered slot-to-channel registry for one bus.
///
/// Slots are assigned by the remote's track-name reports (1-based in
/// practice, though any slot number is accepted). The remote is the
/// source of truth for how many channels exist, so there is no capacity
/// limit and entries are never removed during a session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChannelMap {
    channels: BTreeMap<SlotId, Channel>,
}

impl ChannelMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or rename the channel at `slot`.
    pub fn set_name(&mut self, slot: SlotId, name: &str) {
        match self.channels.get_mut(&slot) {
            Some(channel) => channel.name = name.to_string(),
            None => {
                self.channels.insert(slot, Channel::named(name));
            }
        }
    }

    /// Find the slot of a channel by name. Scans in slot order, so the
    /// lowest slot wins when the remote reports duplicate names.
    pub fn id_for_name(&self, name: &str) -> Option<SlotId> {
        self.channels
            .iter()
            .find(|(_, channel)| channel.name == name)
            .map(|(slot, _)| *slot)
    }

    /// Get a channel's name by slot.
    pub fn name_for_slot(&self, slot: SlotId) -> Option<&str> {
        self.channels.get(&slot).map(|c| c.name.as_str())
    }

    /// Number of known slots.
    pub fn count(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Iterate (slot, channel) pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &Channel)> + '_ {
        self.channels.iter().map(|(slot, channel)| (*slot, channel))
    }
}
