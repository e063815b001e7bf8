//! Car state machine shared by the taxi, traffic and taxi wrecks.
//!
//! A car is `Active` until an unguarded hit opens its invincibility window;
//! the window closes after a fixed number of ticks. Independently, a car
//! whose health drops to zero becomes `destroyed` for good.

use geo::Point;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{Collider, Collision, EntityKind};
use super::locatable::Locatable;
use super::params::{Params, TrafficParams};
use super::timers::{Bounce, HitWindow};

/// Vehicle variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CarKind {
    /// The player's taxi.
    Taxi,
    /// Traffic that shoots fireballs.
    EnemyCar,
    /// Harmless-looking traffic.
    OtherCar,
    /// Wreck left behind by a destroyed taxi.
    DamagedTaxi,
}

impl CarKind {
    /// The collision kind for this vehicle.
    pub fn entity_kind(self) -> EntityKind {
        match self {
            Self::Taxi => EntityKind::Taxi,
            Self::EnemyCar => EntityKind::EnemyCar,
            Self::OtherCar => EntityKind::OtherCar,
            Self::DamagedTaxi => EntityKind::DamagedTaxi,
        }
    }
}

/// A vehicle with health, a hit window and a bounce.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Car {
    /// Unique identifier within the session.
    pub id: usize,
    /// Which vehicle this is.
    pub kind: CarKind,
    /// Current position.
    pub pos: Point<f64>,
    /// Collision radius.
    pub radius: f64,
    /// Damage dealt to whatever this car hits.
    pub damage: f64,
    /// Sideways step (taxi only).
    pub speed_x: f64,
    /// Upward drift per tick for traffic, scroll speed for the taxi.
    pub speed_y: f64,
    /// Damage immunity, set by a hit or by the invincibility power.
    pub invincible: bool,
    health: f64,
    hit_window: HitWindow,
    bounce: Bounce,
    destroyed: bool,
    revived: bool,
    car_bounce_speed: f64,
    driver_bounce_speed: f64,
    offscreen: Point<f64>,
}

impl Car {
    fn base(id: usize, kind: CarKind, pos: Point<f64>, params: &Params) -> Self {
        let collision = &params.collision;
        Self {
            id,
            kind,
            pos,
            radius: 0.0,
            damage: 0.0,
            speed_x: 0.0,
            speed_y: 0.0,
            invincible: false,
            health: 0.0,
            hit_window: HitWindow::new(collision.hit_invincibility_ticks),
            bounce: Bounce::new(collision.bounce_ticks, collision.bounce_speed),
            destroyed: false,
            revived: false,
            car_bounce_speed: collision.bounce_speed,
            driver_bounce_speed: collision.driver_contact_bounce_speed,
            offscreen: Point::new(
                collision.offscreen_car_position[0],
                collision.offscreen_car_position[1],
            ),
        }
    }

    /// Creates a fresh taxi at full health.
    pub fn taxi(id: usize, pos: Point<f64>, params: &Params) -> Self {
        let taxi = &params.taxi;
        Self {
            radius: taxi.radius,
            damage: taxi.damage,
            speed_x: taxi.speed_x,
            speed_y: taxi.speed_y,
            health: taxi.health,
            ..Self::base(id, CarKind::Taxi, pos, params)
        }
    }

    /// Creates a traffic car.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique identifier
    /// * `kind` - `EnemyCar` or `OtherCar`; anything else is treated as `OtherCar`
    /// * `pos` - Spawn position
    /// * `speed_y` - Upward drift per tick, usually from [`random_speed_y`]
    /// * `params` - Game parameters
    pub fn traffic(id: usize, kind: CarKind, pos: Point<f64>, speed_y: f64, params: &Params) -> Self {
        let kind = match kind {
            CarKind::EnemyCar => CarKind::EnemyCar,
            CarKind::Taxi | CarKind::OtherCar | CarKind::DamagedTaxi => CarKind::OtherCar,
        };
        let traffic = traffic_params(kind, params);
        Self {
            radius: traffic.radius,
            damage: traffic.damage,
            speed_y,
            health: traffic.health,
            ..Self::base(id, kind, pos, params)
        }
    }

    /// Creates the wreck left where a taxi was destroyed.
    ///
    /// Wrecks are scenery: they have no health and never take part in
    /// collision checks.
    pub fn wreck(id: usize, pos: Point<f64>, params: &Params) -> Self {
        Self {
            destroyed: true,
            ..Self::base(id, CarKind::DamagedTaxi, pos, params)
        }
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
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// `true` on the tick the hit window closed.
    pub fn is_revived(&self) -> bool {
        self.revived
    }

    /// `true` while the post-hit window is counting down.
    pub fn in_hit_window(&self) -> bool {
        self.hit_window.is_running()
    }

    /// `true` while a bounce is displacing the car.
    pub fn is_bouncing(&self) -> bool {
        self.bounce.is_active()
    }

    /// Smoke is spawned once per impact, not on every tick of contact.
    pub fn is_time_to_spawn_smoke(&self) -> bool {
        !self.hit_window.is_running()
    }

    /// Alive enemy cars that are not invincible may launch fireballs.
    pub fn can_shoot(&self) -> bool {
        self.kind == CarKind::EnemyCar && self.health > 0.0 && !self.invincible
    }

    /// Counts down the hit window and applies one tick of bounce.
    pub fn advance_timers(&mut self) {
        if self.hit_window.is_running() {
            if self.hit_window.tick() {
                self.invincible = false;
                self.revived = true;
            }
        } else {
            self.revived = false;
        }
        let dy = self.bounce.step();
        self.pos.set_y(self.pos.y() + dy);
    }

    /// Moves traffic up the road by its drift speed.
    pub fn drift(&mut self) {
        if self.kind.entity_kind().is_traffic() {
            self.pos.set_y(self.pos.y() - self.speed_y);
        }
    }

    /// Picks a new drift speed, used when a stopped car recovers.
    pub fn redraw_speed(&mut self, params: &Params, rng: &mut impl Rng) {
        if self.kind.entity_kind().is_traffic() {
            self.speed_y = random_speed_y(traffic_params(self.kind, params), rng);
        }
    }

    /// Steers one step to the left.
    pub fn move_left(&mut self) {
        self.pos.set_x(self.pos.x() - self.speed_x);
    }

    /// Steers one step to the right.
    pub fn move_right(&mut self) {
        self.pos.set_x(self.pos.x() + self.speed_x);
    }

    /// Starts a bounce away from another car or the driver.
    ///
    /// Contacts with anything else are ignored.
    pub fn bounce_off(&mut self, other: &Collider) {
        match other.kind {
            EntityKind::Taxi
            | EntityKind::EnemyCar
            | EntityKind::OtherCar
            | EntityKind::DamagedTaxi
            | EntityKind::Driver => self.bounce.trigger(self.pos.y(), other.pos.y()),
            EntityKind::Passenger | EntityKind::Fireball | EntityKind::Pickup(_) => {}
        }
    }
}

impl Locatable for Car {
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

impl Collision for Car {
    fn collider(&self) -> Collider {
        Collider {
            kind: self.kind.entity_kind(),
            pos: self.pos,
            radius: self.radius,
            damage: self.damage,
        }
    }

    fn test(&self, other: &Collider) -> bool {
        match other.kind {
            EntityKind::Taxi
            | EntityKind::EnemyCar
            | EntityKind::OtherCar
            | EntityKind::DamagedTaxi
            | EntityKind::Driver
            | EntityKind::Fireball => self.collider().overlaps(other),
            EntityKind::Passenger | EntityKind::Pickup(_) => false,
        }
    }

    fn resolve(&mut self, other: &Collider) {
        if self.invincible || self.destroyed {
            return;
        }

        if !self.hit_window.is_running() {
            match other.kind {
                EntityKind::Taxi
                | EntityKind::EnemyCar
                | EntityKind::OtherCar
                | EntityKind::Fireball => {
                    self.health -= other.damage;
                    self.bounce.speed = self.car_bounce_speed;
                }
                EntityKind::Driver => self.bounce.speed = self.driver_bounce_speed,
                EntityKind::DamagedTaxi | EntityKind::Passenger | EntityKind::Pickup(_) => {}
            }
            self.hit_window.start();
            self.invincible = true;
        }

        if self.kind != CarKind::Taxi {
            self.speed_y = 0.0;
            if self.health <= 0.0 {
                // Park destroyed traffic out of the way; staying invincible
                // keeps it out of further smoke and pair checks.
                self.pos = self.offscreen;
                self.invincible = true;
            }
        }

        if self.health <= 0.0 {
            self.destroyed = true;
            tracing::debug!(car = self.id, kind = ?self.kind, "car destroyed");
        }
    }
}

/// Settings for a traffic kind; non-traffic kinds map to `other_car`.
pub fn traffic_params(kind: CarKind, params: &Params) -> &TrafficParams {
    match kind {
        CarKind::EnemyCar => &params.enemy_car,
        CarKind::Taxi | CarKind::OtherCar | CarKind::DamagedTaxi => &params.other_car,
    }
}

/// Draws a vertical drift speed uniformly between the configured bounds.
pub fn random_speed_y(traffic: &TrafficParams, rng: &mut impl Rng) -> f64 {
    traffic.min_speed_y + (traffic.max_speed_y - traffic.min_speed_y) * rng.random::<f64>()
}
