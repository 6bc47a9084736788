//! OSC address grammar of the remote mixer.
//!
//! Outbound addresses are built with the functions below; inbound
//! addresses are classified by [`Inbound::parse`]. Page 1 carries the
//! bank layout (bus selection and per-slot track names), page 2 carries
//! the selected channel's parameters.

use faderdeck_types::{Bus, FaderParam, Page, SlotId};

/// Bus-select address, e.g. `/1/busInput`.
pub fn bus_select(page: Page, bus: Bus) -> String {
    format!("/{}/bus{}", page.as_str(), bus.as_str())
}

/// Relative cursor move to the previous channel.
pub fn track_prev(page: Page) -> String {
    format!("/{}/track-", page.as_str())
}

/// Relative cursor move to the next channel.
pub fn track_next(page: Page) -> String {
    format!("/{}/track+", page.as_str())
}

/// Parameter address on a page, e.g. `/2/volume`.
pub fn param(page: Page, param: FaderParam) -> String {
    format!("/{}/{}", page.as_str(), param.as_str())
}

/// A classified inbound address.
///
/// The remote reports state with bare messages: bus selections echo on
/// both pages, slot names arrive as `/1/trackname<N>`, the selected
/// channel's own name as `/2/trackname`, and parameter values under
/// their page-2 addresses. Everything else is noise to this panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inbound {
    /// `/<page>/bus<Bus>`
    BusSelect { page: Page, bus: Bus },
    /// `/1/trackname<N>`, the name of slot N on the active bus.
    SlotName { slot: SlotId },
    /// `/2/trackname`, the name of the currently selected channel.
    SelectedName,
    /// `/2/<param>`, a parameter echo for the selected channel.
    Param { param: FaderParam },
    /// Anything this panel does not react to.
    Other,
}

impl Inbound {
    pub fn parse(addr: &str) -> Inbound {
        let (page, rest) = match addr.strip_prefix('/').and_then(|a| a.split_once('/')) {
            Some((prefix, rest)) => match Page::parse(prefix) {
                Some(page) => (page, rest),
                None => return Inbound::Other,
            },
            None => return Inbound::Other,
        };

        if let Some(bus) = rest.strip_prefix("bus").and_then(Bus::parse) {
            return Inbound::BusSelect { page, bus };
        }

        match page {
            Page::One => {
                if let Some(digits) = rest.strip_prefix("trackname") {
                    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                        if let Ok(n) = digits.parse::<u32>() {
                            return Inbound::SlotName {
                                slot: SlotId::new(n),
                            };
                        }
                    }
                }
            }
            Page::Two => {
                if rest == "trackname" {
                    return Inbound::SelectedName;
                }
                if let Some(param) = FaderParam::parse(rest) {
                    return Inbound::Param { param };
                }
            }
        }

        Inbound::Other
    }
}
