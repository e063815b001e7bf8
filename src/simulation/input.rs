//! Player input for one tick.

use serde::{Deserialize, Serialize};

/// Directions held by the player this tick.
///
/// `up` drives the taxi forward (the road scrolls down); the other
/// directions steer the taxi or walk the driver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveIntent {
    /// Move forward.
    pub up: bool,
    /// Walk down (driver on foot only).
    pub down: bool,
    /// Steer or walk left.
    pub left: bool,
    /// Steer or walk right.
    pub right: bool,
}

impl MoveIntent {
    /// No keys held.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Only the forward key held.
    pub fn forward() -> Self {
        Self {
            up: true,
            ..Self::default()
        }
    }
}
