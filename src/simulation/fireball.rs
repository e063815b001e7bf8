//! Fireballs launched by enemy cars.
//!
//! A fireball flies straight up the road and dies on its first hit.

use geo::Point;
use serde::{Deserialize, Serialize};

use super::collision::{Collider, Collision, EntityKind};
use super::locatable::Locatable;
use super::params::Params;

/// A one-shot projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fireball {
    /// Current position.
    pub pos: Point<f64>,
    /// Collision radius.
    pub radius: f64,
    /// Damage dealt on impact.
    pub damage: f64,
    /// Upward speed per tick.
    pub speed_y: f64,
    /// ID of the car that launched it (it never hits its shooter).
    pub owner_id: usize,
    alive: bool,
    offscreen: Point<f64>,
}

impl Fireball {
    /// Creates a live fireball.
    ///
    /// # Arguments
    ///
    /// * `pos` - Launch position
    /// * `owner_id` - ID of the launching car
    /// * `params` - Game parameters
    pub fn new(pos: Point<f64>, owner_id: usize, params: &Params) -> Self {
        let fireball = &params.fireball;
        let [x, y] = params.collision.offscreen_fireball_position;
        Self {
            pos,
            radius: fireball.radius,
            damage: fireball.damage,
            speed_y: fireball.speed_y,
            owner_id,
            alive: true,
            offscreen: Point::new(x, y),
        }
    }

    /// Launch point just ahead of a shooter at `shooter_pos`.
    pub fn launch_point(shooter_pos: Point<f64>, shooter_radius: f64, params: &Params) -> Point<f64> {
        Point::new(
            shooter_pos.x(),
            shooter_pos.y() - shooter_radius - params.fireball.launch_offset_y,
        )
    }

    /// `true` until the fireball has hit something.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Moves the fireball up by its speed.
    pub fn update(&mut self) {
        self.pos.set_y(self.pos.y() - self.speed_y);
    }
}

impl Locatable for Fireball {
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

impl Collision for Fireball {
    fn collider(&self) -> Collider {
        Collider {
            kind: EntityKind::Fireball,
            pos: self.pos,
            radius: self.radius,
            damage: self.damage,
        }
    }

    fn test(&self, other: &Collider) -> bool {
        if !self.alive {
            return false;
        }
        match other.kind {
            EntityKind::Taxi
            | EntityKind::EnemyCar
            | EntityKind::OtherCar
            | EntityKind::DamagedTaxi
            | EntityKind::Driver
            | EntityKind::Passenger => self.collider().overlaps(other),
            EntityKind::Fireball | EntityKind::Pickup(_) => false,
        }
    }

    fn resolve(&mut self, _other: &Collider) {
        self.alive = false;
        self.pos = self.offscreen;
    }
}
