use serde::{Deserialize, Serialize};

use crate::{Bus, FaderParam};

/// A panel control. Sliders hold positions in 0..=SLIDER_MAX; the EQ
/// toggle holds 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlId {
    Phones,
    Main,
    Bass,
    Mid,
    Treble,
    Mic1Vol,
    Mic1Gain,
    Mic2Vol,
    Mic2Gain,
    Midi,
    EqToggle,
}

impl ControlId {
    pub const ALL: [ControlId; 11] = [
        ControlId::Phones,
        ControlId::Main,
        ControlId::Bass,
        ControlId::Mid,
        ControlId::Treble,
        ControlId::Mic1Vol,
        ControlId::Mic1Gain,
        ControlId::Mic2Vol,
        ControlId::Mic2Gain,
        ControlId::Midi,
        ControlId::EqToggle,
    ];

    /// Display label shown next to the control.
    pub fn label(&self) -> &'static str {
        match self {
            ControlId::Phones => "Slave",
            ControlId::Main => "Master",
            ControlId::Bass => "Bass",
            ControlId::Mid => "Mid",
            ControlId::Treble => "Treble",
            ControlId::Mic1Vol => "Mic 1 Level",
            ControlId::Mic1Gain => "Mic 1 Gain",
            ControlId::Mic2Vol => "Mic 2 Level",
            ControlId::Mic2Gain => "Mic 2 Gain",
            ControlId::Midi => "Midi",
            ControlId::EqToggle => "Enable EQ",
        }
    }

    /// Parse a control name as typed on the command surface.
    pub fn parse(s: &str) -> Option<ControlId> {
        match s.to_lowercase().as_str() {
            "phones" | "slave" => Some(ControlId::Phones),
            "main" | "master" => Some(ControlId::Main),
            "bass" => Some(ControlId::Bass),
            "mid" => Some(ControlId::Mid),
            "treble" => Some(ControlId::Treble),
            "mic1" | "mic1vol" => Some(ControlId::Mic1Vol),
            "mic1gain" => Some(ControlId::Mic1Gain),
            "mic2" | "mic2vol" => Some(ControlId::Mic2Vol),
            "mic2gain" => Some(ControlId::Mic2Gain),
            "midi" => Some(ControlId::Midi),
            "eq" => Some(ControlId::EqToggle),
            _ => None,
        }
    }

    /// Whether this control is a momentary toggle rather than a fader.
    /// Toggles send a 1.0 push and mirror the remote's 0/1 state.
    pub fn is_toggle(&self) -> bool {
        matches!(self, ControlId::EqToggle)
    }
}

/// One remote target of a control: the channel to select and the
/// parameter to set on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlTarget {
    pub bus: Bus,
    pub channel: &'static str,
    pub param: FaderParam,
}

/// Remote targets driven by a control. The EQ controls fan out to both
/// output channels so the mains and the second speaker pair stay matched.
pub fn send_targets(id: ControlId) -> &'static [ControlTarget] {
    use Bus::{Input, Output};
    use FaderParam::{EqEnable, EqGain1, EqGain2, EqGain3, Gain, Volume};
    match id {
        ControlId::Phones => &[ControlTarget { bus: Output, channel: "Speaker B", param: Volume }],
        ControlId::Main => &[ControlTarget { bus: Output, channel: "Main", param: Volume }],
        ControlId::Bass => &[
            ControlTarget { bus: Output, channel: "Main", param: EqGain1 },
            ControlTarget { bus: Output, channel: "Speaker B", param: EqGain1 },
        ],
        ControlId::Mid => &[
            ControlTarget { bus: Output, channel: "Main", param: EqGain2 },
            ControlTarget { bus: Output, channel: "Speaker B", param: EqGain2 },
        ],
        ControlId::Treble => &[
            ControlTarget { bus: Output, channel: "Main", param: EqGain3 },
            ControlTarget { bus: Output, channel: "Speaker B", param: EqGain3 },
        ],
        ControlId::Mic1Vol => &[ControlTarget { bus: Input, channel: "Mic 1", param: Volume }],
        ControlId::Mic1Gain => &[ControlTarget { bus: Input, channel: "Mic 1", param: Gain }],
        ControlId::Mic2Vol => &[ControlTarget { bus: Input, channel: "Mic 2", param: Volume }],
        ControlId::Mic2Gain => &[ControlTarget { bus: Input, channel: "Mic 2", param: Gain }],
        ControlId::Midi => &[ControlTarget { bus: Input, channel: "SPDIF", param: Volume }],
        ControlId::EqToggle => &[
            ControlTarget { bus: Output, channel: "Main", param: EqEnable },
            ControlTarget { bus: Output, channel: "Speaker B", param: EqEnable },
        ],
    }
}

/// Controls to update when the remote reports the named channel on the
/// parameter page, paired with the cached parameter each one reads.
pub fn refresh_bindings(name: &str) -> &'static [(ControlId, FaderParam)] {
    use ControlId::{Bass, EqToggle, Main, Mic1Gain, Mic1Vol, Mid, Midi, Phones, Treble};
    use FaderParam::{EqEnable, EqGain1, EqGain2, EqGain3, Gain, Volume};
    match name {
        "Mic 1" => &[(Mic1Vol, Volume), (Mic1Gain, Gain)],
        "SPDIF" => &[(Midi, Volume)],
        "Main" => &[
            (Main, Volume),
            (Bass, EqGain1),
            (Mid, EqGain2),
            (Treble, EqGain3),
            (EqToggle, EqEnable),
        ],
        "Speaker B" => &[(Phones, Volume)],
        _ => &[],
    }
}

/// Panel-side control surface the protocol code writes synchronized
/// values into. Implemented by the concrete panel; the protocol layer
/// never sees widget types.
pub trait ControlSurface {
    /// Current position of a control.
    fn value(&self, id: ControlId) -> i32;
    /// Update a control from a synchronized remote value.
    fn set_value(&mut self, id: ControlId, value: i32);
    /// Whether the user is currently adjusting a control.
    fn is_adjusting(&self) -> bool;
}
