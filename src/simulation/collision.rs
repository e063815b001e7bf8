//! Collision capability shared by every collidable entity.
//!
//! Pair dispatch is driven by the closed [`EntityKind`] enum: each
//! implementor decides with an exhaustive `match` which partner kinds it
//! reacts to, so adding a new kind fails to compile until every entity has
//! an answer for it.

use geo::Point;
use serde::{Deserialize, Serialize};

use super::geometric_utils;
use super::locatable::Locatable;

/// Single-use power-up variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickupKind {
    /// Boosts passenger priority.
    Coin,
    /// Makes the collector immune to damage.
    InvinciblePower,
}

/// Every kind of collidable entity in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// The live player taxi.
    Taxi,
    /// Hostile traffic that shoots fireballs.
    EnemyCar,
    /// Ordinary traffic.
    OtherCar,
    /// Wreck left behind by a destroyed taxi.
    DamagedTaxi,
    /// The player avatar.
    Driver,
    /// A fare.
    Passenger,
    /// Enemy projectile.
    Fireball,
    /// Collectible power-up.
    Pickup(PickupKind),
}

impl EntityKind {
    /// `true` for every vehicle variant.
    pub fn is_car(self) -> bool {
        matches!(
            self,
            Self::Taxi | Self::EnemyCar | Self::OtherCar | Self::DamagedTaxi
        )
    }

    /// `true` for the two kinds of computer-driven traffic.
    pub fn is_traffic(self) -> bool {
        matches!(self, Self::EnemyCar | Self::OtherCar)
    }
}

/// Snapshot of one side of a collision pair.
///
/// Taken before either side reacts so both `resolve` calls see the partner
/// as it was when the overlap was detected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    /// What the partner is.
    pub kind: EntityKind,
    /// Where the partner is.
    pub pos: Point<f64>,
    /// Partner's collision radius.
    pub radius: f64,
    /// Damage the partner deals on impact.
    pub damage: f64,
}

impl Collider {
    /// Circle-circle overlap: centers no further apart than the radii sum.
    pub fn overlaps(&self, other: &Collider) -> bool {
        geometric_utils::circles_overlap(self.pos, self.radius, other.pos, other.radius)
    }
}

/// Pairwise overlap test and collision response.
///
/// Resolution is asymmetric: the orchestrator calls `resolve` on each side
/// of a matched pair and each side applies only its own state change.
pub trait Collision: Locatable {
    /// Snapshot of this entity as seen by a collision partner.
    fn collider(&self) -> Collider;

    /// Returns `true` if this entity overlaps `other` and reacts to its kind.
    fn test(&self, other: &Collider) -> bool;

    /// Applies this entity's reaction to being hit by `other`.
    fn resolve(&mut self, other: &Collider);
}
