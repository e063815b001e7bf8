//! Passenger lifecycle and priority rules.
//!
//! ```text
//! Idle -> WalkingToTaxi -> Riding -> WalkingToFlag -> Delivered
//!                            ^  |
//!                            |  v (taxi wrecked)
//!                           Ejected
//! ```

use geo::Point;
use serde::{Deserialize, Serialize};

use super::collision::{Collider, Collision, EntityKind};
use super::geometric_utils;
use super::locatable::Locatable;
use super::params::Params;
use super::timers::HitWindow;

/// Where a passenger is in its ride.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PassengerState {
    /// Waiting at the roadside.
    Idle,
    /// Walking towards a stopped taxi.
    WalkingToTaxi,
    /// Inside the taxi.
    Riding,
    /// Thrown out of a wrecked taxi, following the driver on foot.
    Ejected,
    /// Dropped off, walking to the flag.
    WalkingToFlag,
    /// Reached the flag.
    Delivered,
}

/// Trip details a passenger is created with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PassengerProfile {
    /// Urgency tier, 1 to 3.
    pub priority: u8,
    /// X coordinate of the drop-off flag.
    pub end_x: f64,
    /// How far up the road the flag is placed.
    pub y_distance: f64,
    /// Umbrella holders keep their priority in the rain.
    pub has_umbrella: bool,
}

/// A fare waiting for, riding in, or leaving the taxi.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Passenger {
    /// Unique identifier within the session.
    pub id: usize,
    /// Current position.
    pub pos: Point<f64>,
    /// Collision radius.
    pub radius: f64,
    /// Trip details fixed at creation.
    pub profile: PassengerProfile,
    state: PassengerState,
    priority: u8,
    priority_adjusted: bool,
    health: f64,
    dead: bool,
    hit_window: HitWindow,
    walk_speed_x: f64,
    walk_speed_y: f64,
    snap_distance: f64,
    eject_offset_x: f64,
}

impl Passenger {
    /// Creates an idle passenger.
    pub fn new(id: usize, pos: Point<f64>, profile: PassengerProfile, params: &Params) -> Self {
        let passenger = &params.passenger;
        Self {
            id,
            pos,
            radius: passenger.radius,
            profile,
            state: PassengerState::Idle,
            priority: profile.priority,
            priority_adjusted: false,
            health: passenger.health,
            dead: false,
            hit_window: HitWindow::new(params.collision.hit_invincibility_ticks),
            walk_speed_x: passenger.walk_speed_x,
            walk_speed_y: passenger.walk_speed_y,
            snap_distance: passenger.pickup_snap_distance,
            eject_offset_x: passenger.eject_offset_x,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> PassengerState {
        self.state
    }

    /// Current priority tier.
    pub fn priority(&self) -> u8 {
        self.priority
    }

    /// Priority from the world file.
    pub fn original_priority(&self) -> u8 {
        self.profile.priority
    }

    /// `true` while the coin boost is applied.
    pub fn is_priority_adjusted(&self) -> bool {
        self.priority_adjusted
    }

    /// Health on the 0..1 scale.
    pub fn health(&self) -> f64 {
        self.health
    }

    /// Health on the 0..100 display scale.
    pub fn health_percent(&self) -> f64 {
        self.health * 100.0
    }

    /// `true` once health has reached zero.
    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// `true` while the passenger still waits for a ride.
    pub fn is_waiting(&self) -> bool {
        matches!(self.state, PassengerState::Idle | PassengerState::WalkingToTaxi)
    }

    /// `true` once the passenger has been dropped off.
    pub fn is_dropped_off(&self) -> bool {
        matches!(
            self.state,
            PassengerState::WalkingToFlag | PassengerState::Delivered
        )
    }

    /// Takes one step towards the taxi, boarding once close enough.
    ///
    /// # Returns
    ///
    /// `true` on the tick the passenger boards.
    pub fn walk_to_taxi(&mut self, taxi_pos: Point<f64>) -> bool {
        if !self.is_waiting() {
            return false;
        }
        self.state = PassengerState::WalkingToTaxi;
        self.pos = geometric_utils::step_towards(
            self.pos,
            taxi_pos,
            self.walk_speed_x,
            self.walk_speed_y,
        );
        if self.distance_to(taxi_pos) <= self.snap_distance {
            self.pos = taxi_pos;
            self.state = PassengerState::Riding;
            tracing::debug!(passenger = self.id, "passenger boarded");
            return true;
        }
        false
    }

    /// Pins a riding passenger to the taxi.
    pub fn sync_with_taxi(&mut self, taxi_pos: Point<f64>) {
        if self.state == PassengerState::Riding {
            self.pos = taxi_pos;
        }
    }

    /// Keeps an ejected passenger beside the walking driver.
    pub fn follow_driver(&mut self, driver_pos: Point<f64>) {
        if self.state == PassengerState::Ejected {
            self.pos = Point::new(driver_pos.x() - self.eject_offset_x, driver_pos.y());
        }
    }

    /// Throws a riding passenger out of a wrecked taxi.
    pub fn eject(&mut self, driver_pos: Point<f64>) {
        if self.state == PassengerState::Riding {
            self.state = PassengerState::Ejected;
            self.follow_driver(driver_pos);
        }
    }

    /// Puts an ejected passenger back in the taxi.
    pub fn reboard(&mut self) {
        if self.state == PassengerState::Ejected {
            self.state = PassengerState::Riding;
        }
    }

    /// Leaves the taxi at the flag.
    pub fn drop_off(&mut self) {
        if self.state == PassengerState::Riding {
            self.state = PassengerState::WalkingToFlag;
        }
    }

    /// Takes one step towards the flag.
    ///
    /// # Returns
    ///
    /// `true` on the tick the passenger reaches it.
    pub fn walk_to_flag(&mut self, flag_pos: Point<f64>) -> bool {
        if self.state != PassengerState::WalkingToFlag {
            return false;
        }
        self.pos = geometric_utils::step_towards(
            self.pos,
            flag_pos,
            self.walk_speed_x,
            self.walk_speed_y,
        );
        if self.distance_to(flag_pos) <= self.snap_distance {
            self.state = PassengerState::Delivered;
            return true;
        }
        false
    }

    /// Recomputes priority from the weather and the coin power.
    ///
    /// Rain without an umbrella forces priority 1. Otherwise priority is the
    /// original one, boosted by one tier (never below 1) while the coin power
    /// runs.
    pub fn adjust_priority_for_weather(&mut self, raining: bool, coin_active: bool) {
        self.priority = if raining && !self.profile.has_umbrella {
            1
        } else if coin_active && self.profile.priority > 1 {
            self.profile.priority - 1
        } else {
            self.profile.priority
        };
    }

    /// Applies the coin boost once per activation.
    pub fn increase_priority(&mut self) {
        if self.priority > 1 && !self.priority_adjusted {
            self.priority -= 1;
            self.priority_adjusted = true;
        }
    }

    /// Reverts the coin boost.
    pub fn decrease_priority(&mut self) {
        if self.priority_adjusted {
            self.priority += 1;
            self.priority_adjusted = false;
        }
    }

    /// Counts down the hit window.
    pub fn advance_timers(&mut self) {
        self.hit_window.tick();
    }
}

/// Looks up a passenger by ID.
pub fn by_id_mut(passengers: &mut [Passenger], id: usize) -> Option<&mut Passenger> {
    passengers.iter_mut().find(|p| p.id == id)
}

impl Locatable for Passenger {
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

impl Collision for Passenger {
    fn collider(&self) -> Collider {
        Collider {
            kind: EntityKind::Passenger,
            pos: self.pos,
            radius: self.radius,
            damage: 0.0,
        }
    }

    fn test(&self, other: &Collider) -> bool {
        match other.kind {
            EntityKind::Taxi
            | EntityKind::EnemyCar
            | EntityKind::OtherCar
            | EntityKind::DamagedTaxi
            | EntityKind::Fireball => self.collider().overlaps(other),
            EntityKind::Driver | EntityKind::Passenger | EntityKind::Pickup(_) => false,
        }
    }

    fn resolve(&mut self, other: &Collider) {
        if self.dead {
            return;
        }
        if !self.hit_window.is_running() {
            match other.kind {
                EntityKind::EnemyCar | EntityKind::OtherCar => self.health -= other.damage,
                // Fireballs are stopped by the passenger without hurting them.
                EntityKind::Taxi
                | EntityKind::DamagedTaxi
                | EntityKind::Driver
                | EntityKind::Passenger
                | EntityKind::Fireball
                | EntityKind::Pickup(_) => {}
            }
            self.hit_window.start();
        }
        if self.health <= 0.0 {
            self.dead = true;
            tracing::debug!(passenger = self.id, "passenger died");
        }
    }
}
