//! The player avatar: rides in the taxi or walks the road on foot.

use geo::Point;
use serde::{Deserialize, Serialize};

use super::car::Car;
use super::collision::{Collider, Collision, EntityKind};
use super::locatable::Locatable;
use super::params::Params;
use super::timers::{Bounce, HitWindow};

/// The player avatar.
///
/// While `in_taxi` the driver's position is pinned to the taxi. After a
/// wreck the driver walks until close enough to board the replacement taxi.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Driver {
    /// Current position.
    pub pos: Point<f64>,
    /// Collision radius.
    pub radius: f64,
    /// Damage immunity, set by a hit or by the invincibility power.
    pub invincible: bool,
    health: f64,
    max_health: f64,
    in_taxi: bool,
    dead: bool,
    hit_window: HitWindow,
    bounce: Bounce,
    walk_speed_x: f64,
    walk_speed_y: f64,
    board_distance: f64,
    eject_offset_x: f64,
}

impl Driver {
    /// Creates a driver sitting in the taxi at full health.
    pub fn new(pos: Point<f64>, params: &Params) -> Self {
        let driver = &params.driver;
        Self {
            pos,
            radius: driver.radius,
            invincible: false,
            health: driver.health,
            max_health: driver.health,
            in_taxi: true,
            dead: false,
            hit_window: HitWindow::new(params.collision.hit_invincibility_ticks),
            bounce: Bounce::new(params.collision.bounce_ticks, driver.bounce_speed),
            walk_speed_x: driver.walk_speed_x,
            walk_speed_y: driver.walk_speed_y,
            board_distance: driver.board_distance,
            eject_offset_x: driver.eject_offset_x,
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
    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// `true` while riding in the taxi.
    pub fn is_in_taxi(&self) -> bool {
        self.in_taxi
    }

    /// `true` while the post-hit window is counting down.
    pub fn in_hit_window(&self) -> bool {
        self.hit_window.is_running()
    }

    /// Vertical walking speed, which is also the scroll speed on foot.
    pub fn walk_speed_y(&self) -> f64 {
        self.walk_speed_y
    }

    /// Restores full health.
    pub fn revive(&mut self) {
        self.health = self.max_health;
        self.dead = false;
    }

    /// Pins the driver to the taxi while riding.
    pub fn sync_with_taxi(&mut self, taxi: &Car) {
        if self.in_taxi {
            self.pos = taxi.pos;
        }
    }

    /// Leaves the taxi, landing to the left of the wreck.
    pub fn eject(&mut self, wreck_pos: Point<f64>) {
        self.in_taxi = false;
        self.pos = Point::new(wreck_pos.x() - self.eject_offset_x, wreck_pos.y());
        tracing::debug!(x = self.pos.x(), y = self.pos.y(), "driver ejected");
    }

    /// Opens the hit window without taking damage.
    pub fn shield(&mut self) {
        self.hit_window.start();
        self.invincible = true;
    }

    /// Climbs into the taxi.
    pub fn enter_taxi(&mut self) {
        self.in_taxi = true;
    }

    /// `true` when the walking driver is close enough to board `taxi`.
    pub fn can_board(&self, taxi: &Car) -> bool {
        !self.in_taxi && self.test(&taxi.collider())
    }

    /// Walks one step to the left.
    pub fn walk_left(&mut self) {
        self.pos.set_x(self.pos.x() - self.walk_speed_x);
    }

    /// Walks one step to the right.
    pub fn walk_right(&mut self) {
        self.pos.set_x(self.pos.x() + self.walk_speed_x);
    }

    /// Walks one step down the road.
    pub fn walk_down(&mut self) {
        self.pos.set_y(self.pos.y() + self.walk_speed_y);
    }

    /// Counts down the hit window and applies one tick of bounce.
    pub fn advance_timers(&mut self) {
        if self.hit_window.tick() {
            self.invincible = false;
        }
        let dy = self.bounce.step();
        self.pos.set_y(self.pos.y() + dy);
    }

    /// Starts a bounce away from a car.
    pub fn bounce_off(&mut self, other: &Collider) {
        if other.kind.is_car() {
            self.bounce.trigger(self.pos.y(), other.pos.y());
        }
    }
}

impl Locatable for Driver {
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

impl Collision for Driver {
    fn collider(&self) -> Collider {
        Collider {
            kind: EntityKind::Driver,
            pos: self.pos,
            radius: self.radius,
            damage: 0.0,
        }
    }

    fn test(&self, other: &Collider) -> bool {
        match other.kind {
            // Boarding range, not a damaging contact.
            EntityKind::Taxi => self.distance_to(other.pos) <= self.board_distance,
            EntityKind::EnemyCar
            | EntityKind::OtherCar
            | EntityKind::DamagedTaxi
            | EntityKind::Fireball => self.collider().overlaps(other),
            EntityKind::Driver | EntityKind::Passenger | EntityKind::Pickup(_) => false,
        }
    }

    fn resolve(&mut self, other: &Collider) {
        if self.dead || self.hit_window.is_running() {
            return;
        }

        match other.kind {
            EntityKind::EnemyCar | EntityKind::OtherCar | EntityKind::Fireball => {
                self.health -= other.damage;
            }
            EntityKind::Taxi
            | EntityKind::DamagedTaxi
            | EntityKind::Driver
            | EntityKind::Passenger
            | EntityKind::Pickup(_) => {}
        }
        if self.health <= 0.0 {
            self.dead = true;
            tracing::debug!("driver died");
        }
        self.hit_window.start();
        self.invincible = true;
    }
}
