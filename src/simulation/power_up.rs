//! Collectible power-ups and the session-wide timers they start.

use geo::Point;
use serde::{Deserialize, Serialize};

use super::collision::{Collider, Collision, EntityKind, PickupKind};
use super::locatable::Locatable;
use super::params::Params;

/// Result of advancing a [`PowerTimer`] by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerPhase {
    /// Counting towards the duration.
    Running,
    /// Reached the duration this tick.
    Expired,
    /// Not active.
    Idle,
}

/// Frame counter for one kind of power.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerTimer {
    frames: u32,
    duration: u32,
    active: bool,
}

impl PowerTimer {
    /// Creates an idle timer lasting `duration` ticks once activated.
    pub fn new(duration: u32) -> Self {
        Self {
            frames: 0,
            duration,
            active: false,
        }
    }

    /// Restarts the countdown from zero.
    pub fn activate(&mut self) {
        self.frames = 0;
        self.active = true;
    }

    /// `true` between activation and the tick after expiry.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Ticks counted since activation.
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Counts one tick.
    ///
    /// A timer that has reached its duration reports `Expired` once and
    /// goes idle on the following tick.
    pub fn advance(&mut self) -> PowerPhase {
        if self.active && self.frames < self.duration {
            self.frames += 1;
            if self.frames == self.duration {
                PowerPhase::Expired
            } else {
                PowerPhase::Running
            }
        } else {
            self.active = false;
            PowerPhase::Idle
        }
    }
}

/// Both power timers, owned by the world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUpState {
    /// Priority boost for the riding passenger.
    pub coin: PowerTimer,
    /// Damage immunity for the taxi and driver.
    pub invincible: PowerTimer,
}

impl PowerUpState {
    /// Creates idle timers with the configured durations.
    pub fn new(params: &Params) -> Self {
        Self {
            coin: PowerTimer::new(params.coin.duration),
            invincible: PowerTimer::new(params.invincible_power.duration),
        }
    }

    /// Starts the timer matching a collected pickup.
    pub fn activate(&mut self, kind: PickupKind) {
        match kind {
            PickupKind::Coin => self.coin.activate(),
            PickupKind::InvinciblePower => self.invincible.activate(),
        }
        tracing::debug!(?kind, "power activated");
    }
}

/// A single-use collectible lying on the road.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pickup {
    /// Which power this grants.
    pub kind: PickupKind,
    /// Current position.
    pub pos: Point<f64>,
    /// Collision radius.
    pub radius: f64,
    consumed: bool,
}

impl Pickup {
    /// Places an uncollected pickup.
    pub fn new(kind: PickupKind, pos: Point<f64>, params: &Params) -> Self {
        let radius = match kind {
            PickupKind::Coin => params.coin.radius,
            PickupKind::InvinciblePower => params.invincible_power.radius,
        };
        Self {
            kind,
            pos,
            radius,
            consumed: false,
        }
    }

    /// `true` once collected.
    pub fn is_consumed(&self) -> bool {
        self.consumed
    }
}

impl Locatable for Pickup {
    fn pos(&self) -> Point<f64> {
        self.pos
    }

    fn pos_mut(&mut self) -> &mut Point<f64> {
        &mut self.pos
    }

    fn radius(&self) -> f64 {
        self.radius
    }
}

impl Collision for Pickup {
    fn collider(&self) -> Collider {
        Collider {
            kind: EntityKind::Pickup(self.kind),
            pos: self.pos,
            radius: self.radius,
            damage: 0.0,
        }
    }

    fn test(&self, other: &Collider) -> bool {
        if self.consumed {
            return false;
        }
        match other.kind {
            EntityKind::Taxi | EntityKind::Driver => self.collider().overlaps(other),
            EntityKind::EnemyCar
            | EntityKind::OtherCar
            | EntityKind::DamagedTaxi
            | EntityKind::Passenger
            | EntityKind::Fireball
            | EntityKind::Pickup(_) => false,
        }
    }

    fn resolve(&mut self, _other: &Collider) {
        self.consumed = true;
    }
}
