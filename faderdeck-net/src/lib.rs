//! OSC protocol layer for the faderdeck panel.
//!
//! This crate speaks the remote mixer's UDP/OSC dialect: the address
//! grammar, channel-select bundle construction, the paced outbound queue,
//! and the inbound dispatcher that keeps session state and the control
//! surface in sync with echo traffic.

pub mod address;
pub mod dispatch;
pub mod engine;
pub mod link;
pub mod queue;
pub mod session;

pub use address::Inbound;
pub use dispatch::{handle_packet, poll_pass, submit};
pub use link::UdpLink;
pub use queue::SendQueue;
pub use session::{Phase, Session};
