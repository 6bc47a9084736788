use serde::{Deserialize, Serialize};

/// A page-2 channel parameter, echoed by the remote and settable from
/// the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaderParam {
    Volume,
    Pan,
    Mute,
    Solo,
    Gain,
    EqEnable,
    EqGain1,
    EqGain2,
    EqGain3,
}

impl FaderParam {
    pub const ALL: [FaderParam; 9] = [
        FaderParam::Volume,
        FaderParam::Pan,
        FaderParam::Mute,
        FaderParam::Solo,
        FaderParam::Gain,
        FaderParam::EqEnable,
        FaderParam::EqGain1,
        FaderParam::EqGain2,
        FaderParam::EqGain3,
    ];

    /// The parameter name as it appears in OSC addresses ("/2/volume" etc).
    pub fn as_str(&self) -> &'static str {
        match self {
            FaderParam::Volume => "volume",
            FaderParam::Pan => "pan",
            FaderParam::Mute => "mute",
            FaderParam::Solo => "solo",
            FaderParam::Gain => "gain",
            FaderParam::EqEnable => "eqEnable",
            FaderParam::EqGain1 => "eqGain1",
            FaderParam::EqGain2 => "eqGain2",
            FaderParam::EqGain3 => "eqGain3",
        }
    }

    pub fn parse(s: &str) -> Option<FaderParam> {
        match s {
            "volume" => Some(FaderParam::Volume),
            "pan" => Some(FaderParam::Pan),
            "mute" => Some(FaderParam::Mute),
            "solo" => Some(FaderParam::Solo),
            "gain" => Some(FaderParam::Gain),
            "eqEnable" => Some(FaderParam::EqEnable),
            "eqGain1" => Some(FaderParam::EqGain1),
            "eqGain2" => Some(FaderParam::EqGain2),
            "eqGain3" => Some(FaderParam::EqGain3),
            _ => None,
        }
    }
}

impl std::fmt::Display for FaderParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
