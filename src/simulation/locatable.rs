//! Trait for entities that have a position and a collision radius.
//!
//! Every collidable actor in the world (cars, the driver, passengers,
//! fireballs, pickups, flags) implements this trait so distance checks and
//! world scrolling can be written once.

use geo::Point;

use super::geometric_utils;

/// Trait for entities with a position and a collision radius.
pub trait Locatable {
    /// Returns the entity's position.
    fn pos(&self) -> Point<f64>;

    /// Returns a mutable reference to the entity's position.
    fn pos_mut(&mut self) -> &mut Point<f64>;

    /// Returns the collision radius.
    fn radius(&self) -> f64;

    /// Euclidean distance from this entity to `other`.
    fn distance_to(&self, other: Point<f64>) -> f64 {
        geometric_utils::distance(self.pos(), other)
    }

    /// Moves the entity down the screen, used when the road scrolls.
    fn move_down(&mut self, speed: f64) {
        let pos = self.pos_mut();
        pos.set_y(pos.y() + speed);
    }

    /// Teleports the entity.
    fn set_pos(&mut self, pos: Point<f64>) {
        *self.pos_mut() = pos;
    }
}
