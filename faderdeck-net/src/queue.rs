//! Paced outbound queue.
//!
//! The remote processes one packet at a time and sends no explicit ACK;
//! its ordinary echo traffic doubles as the ready signal. At most one
//! packet is in flight, everything else waits in FIFO order until the
//! dispatcher observes inbound traffic and fires [`SendQueue::drain`].

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Default bound on waiting packets (the in-flight one not counted).
pub const DEFAULT_CAPACITY: usize = 64;

/// Default time to wait for echo traffic before declaring a stall.
pub const DEFAULT_REPLY_TIMEOUT: Duration = Duration::from_millis(1500);

pub struct SendQueue {
    pending: VecDeque<Vec<u8>>,
    in_flight: bool,
    sent_at: Option<Instant>,
    capacity: usize,
    reply_timeout: Option<Duration>,
}

impl SendQueue {
    /// `reply_timeout` of None disables the stall watchdog.
    pub fn new(capacity: usize, reply_timeout: Option<Duration>) -> Self {
        SendQueue {
            pending: VecDeque::new(),
            in_flight: false,
            sent_at: None,
            capacity,
            reply_timeout,
        }
    }

    /// Accept a packet. Returns it back when the wire is free and the
    /// caller should transmit immediately; otherwise the packet waits
    /// its turn, or is dropped with a warning when the queue is full.
    pub fn enqueue(&mut self, packet: Vec<u8>) -> Option<Vec<u8>> {
        if !self.in_flight {
            self.in_flight = true;
            self.sent_at = Some(Instant::now());
            return Some(packet);
        }
        if self.pending.len() >= self.capacity {
            log::warn!(
                target: "queue",
                "send queue full ({} packets), dropping newest",
                self.capacity
            );
            return None;
        }
        self.pending.push_back(packet);
        None
    }

    /// Echo traffic arrived: the remote finished the in-flight packet.
    /// Returns the next packet to transmit, or None when the queue is
    /// empty and the wire goes idle.
    pub fn drain(&mut self) -> Option<Vec<u8>> {
        match self.pending.pop_front() {
            Some(packet) => {
                self.sent_at = Some(Instant::now());
                Some(packet)
            }
            None => {
                self.in_flight = false;
                self.sent_at = None;
                None
            }
        }
    }

    /// Flush the queue if the in-flight packet has outlived the reply
    /// timeout. Waiting packets are discarded, not re-sent: the select
    /// sequences are relative moves and cannot safely be replayed
    /// against an unknown cursor position. Returns true on a flush.
    pub fn check_stall(&mut self) -> bool {
        let timeout = match self.reply_timeout {
            Some(timeout) => timeout,
            None => return false,
        };
        let sent_at = match self.sent_at {
            Some(sent_at) => sent_at,
            None => return false,
        };
        if sent_at.elapsed() < timeout {
            return false;
        }
        log::warn!(
            target: "queue",
            "no echo for {:?}, discarding {} waiting packets",
            timeout,
            self.pending.len()
        );
        self.pending.clear();
        self.in_flight = false;
        self.sent_at = None;
        true
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Number of packets waiting behind the in-flight one.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
