//! Random spawns: traffic, fireballs and replacement taxis.
//!
//! Every draw comes from the caller's RNG so a seeded generator replays a
//! session exactly.

use geo::Point;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::car::{self, Car, CarKind};
use super::events::WorldEvent;
use super::fireball::Fireball;
use super::params::Params;

/// Draws an integer in `1..=roll_max`.
pub fn roll(params: &Params, rng: &mut impl Rng) -> u32 {
    rng.random_range(1..=params.spawn.roll_max)
}

/// Maybe queues a new traffic car.
///
/// A roll divisible by `car_modulus` spawns a car; if it is also divisible
/// by `enemy_modulus` the car is an enemy. The car enters in a random lane,
/// either above or below the visible road.
pub fn spawn_traffic(params: &Params, rng: &mut impl Rng) -> Option<WorldEvent> {
    let roll = roll(params, rng);
    if roll % params.spawn.car_modulus != 0 {
        return None;
    }
    let kind = if roll % params.spawn.enemy_modulus == 0 {
        CarKind::EnemyCar
    } else {
        CarKind::OtherCar
    };
    let lane = *params.lanes.choose(rng)?;
    let y = if rng.random_bool(0.5) {
        params.spawn.top_y
    } else {
        params.spawn.bottom_y
    };
    let speed_y = car::random_speed_y(car::traffic_params(kind, params), rng);
    Some(WorldEvent::CarSpawned {
        kind,
        pos: Point::new(lane, y),
        speed_y,
    })
}

/// Maybe queues a fireball from `shooter`.
pub fn launch_fireball(shooter: &Car, params: &Params, rng: &mut impl Rng) -> Option<WorldEvent> {
    if !shooter.can_shoot() {
        return None;
    }
    if roll(params, rng) % params.spawn.fireball_modulus != 0 {
        return None;
    }
    Some(WorldEvent::FireballLaunched {
        pos: Fireball::launch_point(shooter.pos, shooter.radius, params),
        owner_id: shooter.id,
    })
}

/// Picks where a replacement taxi appears: the leftmost or rightmost lane,
/// at a random Y within the configured range.
pub fn taxi_respawn_point(params: &Params, rng: &mut impl Rng) -> Point<f64> {
    let lanes = &params.lanes;
    let first = lanes.first().copied().unwrap_or_default();
    let last = lanes.last().copied().unwrap_or(first);
    let x = if rng.random_bool(0.5) { first } else { last };
    let y = rng.random_range(params.taxi.next_spawn_min_y..=params.taxi.next_spawn_max_y);
    Point::new(x, f64::from(y))
}
