#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

mod common;

use common::{approx_eq, create_test_params};
use geo::Point;
use taxi_rush::simulation::car::{Car, CarKind};
use taxi_rush::simulation::collision::{Collider, Collision, EntityKind, PickupKind};
use taxi_rush::simulation::params::Params;

fn enemy_at(params: &Params, x: f64, y: f64) -> Car {
    Car::traffic(1, CarKind::EnemyCar, Point::new(x, y), 2.0, params)
}

fn collider(kind: EntityKind, x: f64, y: f64, damage: f64) -> Collider {
    Collider {
        kind,
        pos: Point::new(x, y),
        radius: 30.0,
        damage,
    }
}

#[test]
fn test_taxi_hit_by_enemy_car() {
    let params = create_test_params();
    let mut taxi = Car::taxi(0, Point::new(100.0, 500.0), &params);
    let mut enemy = enemy_at(&params, 100.0, 540.0);

    assert!(taxi.test(&enemy.collider()));
    let taxi_collider = taxi.collider();
    let enemy_collider = enemy.collider();
    taxi.resolve(&enemy_collider);
    enemy.resolve(&taxi_collider);

    // Displayed health drops by 30 for a 0.3 damage hit
    assert!(approx_eq(taxi.health_percent(), 70.0));
    assert!(taxi.invincible);
    assert!(taxi.in_hit_window());

    // The enemy takes the taxi's damage and stops
    assert!(approx_eq(enemy.health(), 0.5));
    assert_eq!(enemy.speed_y, 0.0);
    assert!(!enemy.is_destroyed());
}

#[test]
fn test_hit_window_blocks_damage_until_it_closes() {
    let params = create_test_params();
    let mut taxi = Car::taxi(0, Point::new(100.0, 500.0), &params);
    let hit = collider(EntityKind::OtherCar, 100.0, 540.0, 0.1);

    taxi.resolve(&hit);
    let after_hit = taxi.health();
    assert!(approx_eq(after_hit, 0.9));

    for _ in 1..200 {
        taxi.advance_timers();
        taxi.resolve(&hit);
        assert_eq!(taxi.health(), after_hit);
    }

    taxi.advance_timers();
    assert!(!taxi.in_hit_window());
    assert!(!taxi.invincible);
    assert!(taxi.is_revived());

    taxi.resolve(&hit);
    assert!(approx_eq(taxi.health(), 0.8));
}

#[test]
fn test_revived_flag_lasts_one_tick() {
    let params = create_test_params();
    let mut car = enemy_at(&params, 0.0, 0.0);
    car.resolve(&collider(EntityKind::Taxi, 0.0, 10.0, 0.1));

    for _ in 0..200 {
        car.advance_timers();
    }
    assert!(car.is_revived());

    car.advance_timers();
    assert!(!car.is_revived());
}

#[test]
fn test_bounce_moves_away_from_partner_below() {
    let params = create_test_params();
    let mut taxi = Car::taxi(0, Point::new(100.0, 100.0), &params);
    let below = collider(EntityKind::OtherCar, 100.0, 150.0, 0.1);

    taxi.resolve(&below);
    taxi.bounce_off(&below);

    for tick in 1..=10_u32 {
        taxi.advance_timers();
        assert!(approx_eq(taxi.pos.y(), 100.0 - f64::from(tick)));
    }
    assert!(!taxi.is_bouncing());

    taxi.advance_timers();
    assert!(approx_eq(taxi.pos.y(), 90.0));
}

#[test]
fn test_bounce_moves_down_when_below_partner() {
    let params = create_test_params();
    let mut car = enemy_at(&params, 100.0, 200.0);
    let above = collider(EntityKind::Taxi, 100.0, 150.0, 0.1);

    car.resolve(&above);
    car.bounce_off(&above);
    car.advance_timers();

    assert!(approx_eq(car.pos.y(), 201.0));
}

#[test]
fn test_driver_contact_deals_no_damage_and_bounces_harder() {
    let params = create_test_params();
    let mut car = enemy_at(&params, 100.0, 100.0);
    let driver = Collider {
        kind: EntityKind::Driver,
        pos: Point::new(100.0, 150.0),
        radius: 20.0,
        damage: 0.0,
    };

    car.resolve(&driver);
    car.bounce_off(&driver);
    car.advance_timers();

    assert_eq!(car.health(), 1.0);
    assert!(car.invincible);
    assert!(approx_eq(car.pos.y(), 98.0));
}

#[test]
fn test_destroyed_traffic_is_parked_offscreen() {
    let params = create_test_params();
    let mut car = Car::traffic(3, CarKind::OtherCar, Point::new(200.0, 300.0), 2.0, &params);

    car.resolve(&collider(EntityKind::Taxi, 200.0, 320.0, 1.0));

    assert!(car.is_destroyed());
    assert!(car.invincible);
    assert_eq!(car.pos, Point::new(-200.0, -200.0));
    assert!(!car.is_time_to_spawn_smoke());
}

#[test]
fn test_destroyed_taxi_stays_in_place_and_takes_no_more_damage() {
    let params = create_test_params();
    let mut taxi = Car::taxi(0, Point::new(100.0, 500.0), &params);
    let crash = collider(EntityKind::OtherCar, 100.0, 520.0, 1.5);

    taxi.resolve(&crash);
    assert!(taxi.is_destroyed());
    assert_eq!(taxi.pos, Point::new(100.0, 500.0));
    let health = taxi.health();

    for _ in 0..300 {
        taxi.advance_timers();
        taxi.resolve(&crash);
    }
    assert!(taxi.is_destroyed());
    assert_eq!(taxi.health(), health);
}

#[test]
fn test_smoke_only_when_no_window_running() {
    let params = create_test_params();
    let mut car = enemy_at(&params, 0.0, 0.0);
    assert!(car.is_time_to_spawn_smoke());

    car.resolve(&collider(EntityKind::Taxi, 0.0, 10.0, 0.1));
    assert!(!car.is_time_to_spawn_smoke());
}

#[test]
fn test_car_ignores_passengers_and_pickups() {
    let params = create_test_params();
    let car = enemy_at(&params, 0.0, 0.0);

    assert!(!car.test(&collider(EntityKind::Passenger, 0.0, 0.0, 0.0)));
    assert!(!car.test(&collider(EntityKind::Pickup(PickupKind::Coin), 0.0, 0.0, 0.0)));
    assert!(car.test(&collider(EntityKind::Fireball, 0.0, 0.0, 0.5)));
    assert!(!car.test(&collider(EntityKind::OtherCar, 0.0, 61.0, 0.5)));
}

#[test]
fn test_traffic_drifts_up_and_only_enemies_shoot() {
    let params = create_test_params();
    let mut enemy = enemy_at(&params, 0.0, 100.0);
    let mut other = Car::traffic(2, CarKind::OtherCar, Point::new(0.0, 100.0), 3.0, &params);
    let mut taxi = Car::taxi(0, Point::new(0.0, 100.0), &params);

    enemy.drift();
    other.drift();
    taxi.drift();

    assert_eq!(enemy.pos.y(), 98.0);
    assert_eq!(other.pos.y(), 97.0);
    assert_eq!(taxi.pos.y(), 100.0);
    assert!(enemy.can_shoot());
    assert!(!other.can_shoot());
}

#[test]
fn test_wreck_is_inert() {
    let params = create_test_params();
    let wreck = Car::wreck(9, Point::new(10.0, 10.0), &params);

    assert_eq!(wreck.kind, CarKind::DamagedTaxi);
    assert!(wreck.is_destroyed());
    assert_eq!(wreck.health_percent(), 0.0);
}
