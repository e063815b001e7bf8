//! Per-tick collision pass.
//!
//! Runs every pairwise check in a fixed order and lets each side apply its
//! own reaction. Anything that adds or removes entities (smoke, fire, the
//! taxi wreck and its replacement) is pushed to the [`EventQueue`] and
//! committed after the pass.
//!
//! Order within a tick:
//!
//! 1. Taxi, walking driver and current passenger against each live traffic
//!    car, skipped entirely while the taxi or the driver is invincible.
//! 2. Fireballs against the walking driver, the ejected passenger, the taxi
//!    and traffic, under the same guard.
//! 3. Traffic against traffic.

use geo::Point;
use rand::Rng;

use super::car::Car;
use super::collision::Collision;
use super::driver::Driver;
use super::event_log::EventColor;
use super::events::{EventQueue, WorldEvent};
use super::params::Params;
use super::passenger::{self, Passenger, PassengerState};
use super::spawner;
use super::world::World;

/// Runs every collision check for one tick.
///
/// # Arguments
///
/// * `world` - Session state
/// * `params` - Game parameters
/// * `rng` - Used to place a replacement taxi
/// * `queue` - Receives spawn requests
pub fn resolve_collisions(
    world: &mut World,
    params: &Params,
    rng: &mut impl Rng,
    queue: &mut EventQueue,
) {
    if !world.taxi.invincible && !world.driver.invincible {
        resolve_player_vs_traffic(world, params, rng, queue);
        resolve_fireballs(world, params, rng, queue);
    }
    resolve_traffic_pairs(&mut world.cars, queue);
}

fn resolve_player_vs_traffic(
    world: &mut World,
    params: &Params,
    rng: &mut impl Rng,
    queue: &mut EventQueue,
) {
    let current = world.current_passenger;
    let mut taxi_wrecked = world.taxi.is_destroyed();

    for car in world.cars.iter_mut().filter(|c| !c.is_destroyed()) {
        let car_collider = car.collider();

        if !taxi_wrecked && world.taxi.test(&car_collider) {
            let car_pos = car.pos;
            hit_cars(&mut world.taxi, car, queue);

            if world.taxi.is_destroyed() {
                taxi_wrecked = true;
                let passenger =
                    current.and_then(|id| passenger::by_id_mut(&mut world.passengers, id));
                wreck_taxi(&world.taxi, &mut world.driver, passenger, params, rng, queue);
                world.event_log.log(
                    world.frame,
                    "Taxi destroyed in a crash".to_string(),
                    EventColor::Wreck,
                );
            }
            if car.is_destroyed() {
                queue.push(WorldEvent::FireSpawned { pos: car_pos });
            }
        } else if !world.driver.is_in_taxi()
            && !world.driver.is_dead()
            && world.driver.test(&car_collider)
        {
            let driver_collider = world.driver.collider();
            world.driver.resolve(&car_collider);
            car.resolve(&driver_collider);
            world.driver.bounce_off(&car_collider);
            car.bounce_off(&driver_collider);
        } else if let Some(passenger) =
            current.and_then(|id| passenger::by_id_mut(&mut world.passengers, id))
        {
            if passenger.test(&car_collider) {
                passenger.resolve(&car_collider);
            }
        }
    }
}

fn resolve_fireballs(
    world: &mut World,
    params: &Params,
    rng: &mut impl Rng,
    queue: &mut EventQueue,
) {
    let current = world.current_passenger;

    for fireball in world.fireballs.iter_mut().filter(|f| f.is_alive()) {
        let fireball_collider = fireball.collider();

        if !world.driver.is_in_taxi()
            && !world.driver.is_dead()
            && fireball.test(&world.driver.collider())
        {
            world.driver.resolve(&fireball_collider);
            fireball.resolve(&world.driver.collider());
            continue;
        }

        // A riding passenger is inside the taxi, so only an ejected one can
        // be struck directly.
        let ejected = current
            .and_then(|id| passenger::by_id_mut(&mut world.passengers, id))
            .filter(|p| p.state() == PassengerState::Ejected);
        if let Some(passenger) = ejected {
            let passenger_collider = passenger.collider();
            if fireball.test(&passenger_collider) {
                passenger.resolve(&fireball_collider);
                fireball.resolve(&passenger_collider);
                continue;
            }
        }

        if !world.taxi.is_destroyed() && fireball.test(&world.taxi.collider()) {
            world.taxi.resolve(&fireball_collider);
            fireball.resolve(&world.taxi.collider());
            if world.taxi.is_destroyed() {
                let passenger =
                    current.and_then(|id| passenger::by_id_mut(&mut world.passengers, id));
                wreck_taxi(&world.taxi, &mut world.driver, passenger, params, rng, queue);
                world.event_log.log(
                    world.frame,
                    "Taxi destroyed by a fireball".to_string(),
                    EventColor::Wreck,
                );
            }
            continue;
        }

        let owner = fireball.owner_id;
        if let Some(car) = world
            .cars
            .iter_mut()
            .filter(|c| c.id != owner && !c.is_destroyed())
            .find(|c| fireball.test(&c.collider()))
        {
            let car_pos = car.pos;
            car.resolve(&fireball_collider);
            fireball.resolve(&car.collider());
            if car.is_destroyed() {
                queue.push(WorldEvent::FireSpawned { pos: car_pos });
            }
        }
    }
}

/// Checks every unordered pair of live traffic cars.
fn resolve_traffic_pairs(cars: &mut [Car], queue: &mut EventQueue) {
    for j in 1..cars.len() {
        let (before, rest) = cars.split_at_mut(j);
        let second = &mut rest[0];
        for first in before.iter_mut() {
            let skip = first.invincible
                || second.invincible
                || first.is_destroyed()
                || second.is_destroyed();
            if skip || !first.test(&second.collider()) {
                continue;
            }

            let first_pos = first.pos;
            let second_pos = second.pos;
            hit_cars(first, second, queue);
            if first.is_destroyed() {
                queue.push(WorldEvent::FireSpawned { pos: first_pos });
            }
            if second.is_destroyed() {
                queue.push(WorldEvent::FireSpawned { pos: second_pos });
            }
        }
    }
}

/// Smoke, damage and bounce for a car-on-car impact.
fn hit_cars(a: &mut Car, b: &mut Car, queue: &mut EventQueue) {
    if a.is_time_to_spawn_smoke() {
        queue.push(WorldEvent::SmokeSpawned { pos: a.pos });
    }
    if b.is_time_to_spawn_smoke() {
        queue.push(WorldEvent::SmokeSpawned { pos: b.pos });
    }

    let a_collider = a.collider();
    let b_collider = b.collider();
    a.resolve(&b_collider);
    b.resolve(&a_collider);
    a.bounce_off(&b_collider);
    b.bounce_off(&a_collider);
}

/// Throws the driver and passenger out of a destroyed taxi and queues the
/// wreck, its fire and a replacement taxi.
fn wreck_taxi(
    taxi: &Car,
    driver: &mut Driver,
    passenger: Option<&mut Passenger>,
    params: &Params,
    rng: &mut impl Rng,
    queue: &mut EventQueue,
) {
    let wreck_pos: Point<f64> = taxi.pos;
    if driver.is_in_taxi() {
        driver.eject(wreck_pos);
        if let Some(passenger) = passenger {
            passenger.eject(driver.pos);
        }
        driver.shield();
    }

    queue.push(WorldEvent::TaxiWrecked {
        wreck_pos,
        respawn_pos: spawner::taxi_respawn_point(params, rng),
    });
}
