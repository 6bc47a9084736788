//! The headless control surface backing the command loop.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use faderdeck_types::{ControlId, ControlSurface, SLIDER_MAX};

/// How long after a user edit the panel still counts as being adjusted,
/// holding off the periodic refresh so echoes cannot fight the user.
const ADJUST_HOLD: Duration = Duration::from_millis(250);

/// The fixed control set as plain values. User edits are tracked apart
/// from synchronized updates so the runtime knows what to transmit.
pub struct Panel {
    values: HashMap<ControlId, i32>,
    edits: Vec<(ControlId, i32)>,
    last_edit: Option<Instant>,
}

impl Panel {
    pub fn new() -> Self {
        let mut values = HashMap::new();
        for id in ControlId::ALL {
            values.insert(id, 0);
        }
        Panel {
            values,
            edits: Vec::new(),
            last_edit: None,
        }
    }

    /// Apply a user edit: move the control and queue it for
    /// transmission. Fader positions clamp to the slider range, toggle
    /// values collapse to 0 or 1.
    pub fn adjust(&mut self, id: ControlId, value: i32) {
        let value = if id.is_toggle() {
            (value != 0) as i32
        } else {
            value.clamp(0, SLIDER_MAX)
        };
        self.values.insert(id, value);
        self.edits.push((id, value));
        self.last_edit = Some(Instant::now());
    }

    /// Flip a toggle control, returning the new state.
    pub fn flip(&mut self, id: ControlId) -> i32 {
        let next = if self.value(id) == 0 { 1 } else { 0 };
        self.adjust(id, next);
        next
    }

    /// Drain the user edits queued since the last call.
    pub fn take_edits(&mut self) -> Vec<(ControlId, i32)> {
        std::mem::take(&mut self.edits)
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlSurface for Panel {
    fn value(&self, id: ControlId) -> i32 {
        self.values.get(&id).copied().unwrap_or(0)
    }

    /// Synchronized update from the remote: moves the control without
    /// queueing anything for transmission.
    fn set_value(&mut self, id: ControlId, value: i32) {
        self.values.insert(id, value);
    }

    fn is_adjusting(&self) -> bool {
        match self.last_edit {
            Some(at) => at.elapsed() < ADJUST_HOLD,
            None => false,
        }
    }
}
