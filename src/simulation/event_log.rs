//! Short ticker of trip, wreck, power-up and weather messages shown on the HUD.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Ticks a message stays on the ticker.
pub const TICKER_LIFETIME: u32 = 600;

/// One ticker line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggedEvent {
    /// Tick the message was logged on
    pub frame: u32,
    /// Message text
    pub description: String,
    /// Message category
    pub color: EventColor,
}

/// Which kind of game moment produced a message; picks its HUD color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventColor {
    /// Pickups and drop-offs
    Trip,
    /// Taxi wrecks
    Wreck,
    /// Coin and invincibility power-ups
    Power,
    /// Rain starting or stopping
    Weather,
}

/// Bounded ticker, newest message first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLog {
    events: VecDeque<LoggedEvent>,
    capacity: usize,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(8)
    }
}

impl EventLog {
    /// Creates a ticker holding at most `capacity` messages.
    pub fn new(capacity: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes a message, evicting the oldest when full.
    pub fn log(&mut self, frame: u32, description: impl Into<String>, color: EventColor) {
        if self.events.len() == self.capacity {
            self.events.pop_back();
        }
        if self.capacity > 0 {
            self.events.push_front(LoggedEvent {
                frame,
                description: description.into(),
                color,
            });
        }
    }

    /// All retained messages, newest first.
    pub fn events(&self) -> &VecDeque<LoggedEvent> {
        &self.events
    }

    /// Messages logged within [`TICKER_LIFETIME`] ticks of `now`.
    pub fn recent(&self, now: u32) -> impl Iterator<Item = &LoggedEvent> {
        self.events
            .iter()
            .take_while(move |e| now.saturating_sub(e.frame) < TICKER_LIFETIME)
    }
}
