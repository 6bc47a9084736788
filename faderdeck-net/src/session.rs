//! Per-connection protocol state.
//!
//! A [`Session`] holds everything the inbound dispatcher learns from
//! echo traffic: the lifecycle phase, the bus the remote last reported
//! selected, the parameter cache for the selected channel, and one
//! channel registry per bus.

use std::collections::HashMap;

use faderdeck_types::{Bus, ChannelMap, FaderParam, Page};

/// Lifecycle of a panel session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No traffic exchanged yet.
    Uninitialized,
    /// The initial burst is queued; waiting for it to drain.
    Discovering,
    /// The burst has drained; the periodic refresh may run.
    Ready,
}

#[derive(Debug, Clone)]
pub struct Session {
    phase: Phase,
    active: Option<(Page, Bus)>,
    values: HashMap<FaderParam, f32>,
    input: ChannelMap,
    output: ChannelMap,
    playback: ChannelMap,
}

impl Session {
    pub fn new() -> Self {
        Session {
            phase: Phase::Uninitialized,
            active: None,
            values: HashMap::new(),
            input: ChannelMap::new(),
            output: ChannelMap::new(),
            playback: ChannelMap::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Mark the initial burst as queued.
    pub fn begin_discovery(&mut self) {
        self.phase = Phase::Discovering;
    }

    /// Mark the initial burst as fully drained. No-op outside discovery.
    pub fn mark_ready(&mut self) {
        if self.phase == Phase::Discovering {
            log::info!(target: "session", "initial sync complete");
            self.phase = Phase::Ready;
        }
    }

    pub fn channels(&self, bus: Bus) -> &ChannelMap {
        match bus {
            Bus::Input => &self.input,
            Bus::Output => &self.output,
            Bus::Playback => &self.playback,
        }
    }

    pub fn channels_mut(&mut self, bus: Bus) -> &mut ChannelMap {
        match bus {
            Bus::Input => &mut self.input,
            Bus::Output => &mut self.output,
            Bus::Playback => &mut self.playback,
        }
    }

    /// The bus the remote last reported selected, with its page.
    pub fn active(&self) -> Option<(Page, Bus)> {
        self.active
    }

    pub fn set_active(&mut self, page: Page, bus: Bus) {
        self.active = Some((page, bus));
    }

    /// Record an echoed parameter value, overwriting any earlier echo.
    pub fn cache_value(&mut self, param: FaderParam, value: f32) {
        self.values.insert(param, value);
    }

    /// The last echoed value for a parameter, if one arrived yet.
    pub fn cached(&self, param: FaderParam) -> Option<f32> {
        self.values.get(&param).copied()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
