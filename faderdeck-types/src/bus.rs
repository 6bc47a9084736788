use serde::{Deserialize, Serialize};

/// OSC page prefix. The remote exposes two control pages: page 1 carries
/// the bus layout and per-slot track names, page 2 carries the currently
/// selected channel's parameters and navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Page {
    One,
    Two,
}

impl Page {
    /// The page digit as it appears in OSC addresses ("/1/...", "/2/...").
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::One => "1",
            Page::Two => "2",
        }
    }

    pub fn parse(s: &str) -> Option<Page> {
        match s {
            "1" => Some(Page::One),
            "2" => Some(Page::Two),
            _ => None,
        }
    }
}

/// Channel group on the remote mixer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bus {
    Input,
    Output,
    Playback,
}

impl Bus {
    pub const ALL: [Bus; 3] = [Bus::Input, Bus::Output, Bus::Playback];

    /// The bus name as it appears in OSC addresses ("/1/busInput" etc).
    pub fn as_str(&self) -> &'static str {
        match self {
            Bus::Input => "Input",
            Bus::Output => "Output",
            Bus::Playback => "Playback",
        }
    }

    pub fn parse(s: &str) -> Option<Bus> {
        match s {
            "Input" => Some(Bus::Input),
            "Output" => Some(Bus::Output),
            "Playback" => Some(Bus::Playback),
            _ => None,
        }
    }
}

impl std::fmt::Display for Bus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
