//! Countdowns shared by cars, the driver and passengers.
//!
//! A [`HitWindow`] is the invincibility period that follows a damaging hit;
//! a [`Bounce`] is the short vertical shove that follows any contact.

use serde::{Deserialize, Serialize};

/// Post-hit countdown during which no further damage is taken.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HitWindow {
    remaining: u32,
    duration: u32,
}

impl HitWindow {
    /// Creates a closed window that lasts `duration` ticks once started.
    pub fn new(duration: u32) -> Self {
        Self {
            remaining: 0,
            duration,
        }
    }

    /// `true` while the window is counting down.
    pub fn is_running(&self) -> bool {
        self.remaining > 0
    }

    /// Ticks left before the window closes.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Opens the window for its full duration.
    pub fn start(&mut self) {
        self.remaining = self.duration;
    }

    /// Counts down one tick.
    ///
    /// # Returns
    ///
    /// `true` on the tick the window closes, `false` otherwise.
    pub fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.remaining == 0
    }
}

/// Which way a bounce pushes the entity along the Y axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BounceDirection {
    /// Towards smaller Y (up the screen).
    Up,
    /// Towards larger Y (down the screen).
    Down,
}

/// Vertical displacement applied for a fixed number of ticks after contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bounce {
    remaining: u32,
    duration: u32,
    direction: BounceDirection,
    /// Displacement per tick.
    pub speed: f64,
}

impl Bounce {
    /// Creates an idle bounce.
    pub fn new(duration: u32, speed: f64) -> Self {
        Self {
            remaining: 0,
            duration,
            direction: BounceDirection::Up,
            speed,
        }
    }

    /// Starts (or restarts) the bounce away from a partner at `other_y`.
    ///
    /// An entity below its partner is pushed further down, anything else is
    /// pushed up.
    pub fn trigger(&mut self, own_y: f64, other_y: f64) {
        self.remaining = self.duration;
        self.direction = if own_y > other_y {
            BounceDirection::Down
        } else {
            BounceDirection::Up
        };
    }

    /// `true` while displacement is still being applied.
    pub fn is_active(&self) -> bool {
        self.remaining > 0
    }

    /// Current direction of the bounce.
    pub fn direction(&self) -> BounceDirection {
        self.direction
    }

    /// Consumes one tick of the bounce.
    ///
    /// # Returns
    ///
    /// The Y offset to apply this tick (zero once the bounce is over).
    pub fn step(&mut self) -> f64 {
        if self.remaining == 0 {
            return 0.0;
        }
        self.remaining -= 1;
        match self.direction {
            BounceDirection::Down => self.speed,
            BounceDirection::Up => -self.speed,
        }
    }
}
