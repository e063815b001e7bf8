#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

mod common;

use common::{approx_eq, create_test_params};
use geo::Point;
use taxi_rush::simulation::car::{Car, CarKind};
use taxi_rush::simulation::collision::{Collider, Collision, EntityKind};
use taxi_rush::simulation::driver::Driver;
use taxi_rush::simulation::locatable::Locatable;

#[test]
fn test_driver_starts_in_taxi_at_full_health() {
    let params = create_test_params();
    let driver = Driver::new(Point::new(100.0, 500.0), &params);

    assert!(driver.is_in_taxi());
    assert!(!driver.is_dead());
    assert_eq!(driver.health_percent(), 100.0);
}

#[test]
fn test_eject_lands_left_of_wreck() {
    let params = create_test_params();
    let mut driver = Driver::new(Point::new(100.0, 500.0), &params);

    driver.eject(Point::new(100.0, 500.0));

    assert!(!driver.is_in_taxi());
    assert_eq!(driver.pos, Point::new(50.0, 500.0));
}

#[test]
fn test_boarding_uses_board_distance_not_overlap() {
    let params = create_test_params();
    let taxi = Car::taxi(0, Point::new(100.0, 500.0), &params);
    let mut driver = Driver::new(Point::new(0.0, 0.0), &params);
    driver.eject(Point::new(200.0, 0.0));

    // Circles overlap, but the driver is still too far to climb in
    driver.set_pos(Point::new(115.0, 500.0));
    assert!(!driver.can_board(&taxi));

    driver.set_pos(Point::new(110.0, 500.0));
    assert!(driver.can_board(&taxi));

    driver.enter_taxi();
    assert!(!driver.can_board(&taxi));
}

#[test]
fn test_sync_only_while_in_taxi() {
    let params = create_test_params();
    let mut taxi = Car::taxi(0, Point::new(100.0, 500.0), &params);
    let mut driver = Driver::new(Point::new(0.0, 0.0), &params);

    driver.sync_with_taxi(&taxi);
    assert_eq!(driver.pos, taxi.pos);

    driver.eject(taxi.pos);
    taxi.move_right();
    driver.sync_with_taxi(&taxi);
    assert_eq!(driver.pos, Point::new(50.0, 500.0));
}

#[test]
fn test_walking_steps() {
    let params = create_test_params();
    let mut driver = Driver::new(Point::new(100.0, 100.0), &params);

    driver.walk_left();
    driver.walk_down();
    assert_eq!(driver.pos, Point::new(98.0, 102.0));

    driver.walk_right();
    driver.walk_right();
    assert_eq!(driver.pos, Point::new(102.0, 102.0));
}

#[test]
fn test_traffic_damages_driver_once_per_window() {
    let params = create_test_params();
    let mut driver = Driver::new(Point::new(100.0, 100.0), &params);
    let car = Car::traffic(1, CarKind::OtherCar, Point::new(100.0, 140.0), 2.0, &params);
    let car_collider = car.collider();

    assert!(driver.test(&car_collider));
    driver.resolve(&car_collider);
    assert!(approx_eq(driver.health(), 0.5));
    assert!(driver.invincible);
    assert!(driver.in_hit_window());

    driver.resolve(&car_collider);
    assert!(approx_eq(driver.health(), 0.5));
}

#[test]
fn test_driver_dies_and_window_expires() {
    let params = create_test_params();
    let mut driver = Driver::new(Point::new(0.0, 0.0), &params);
    let fireball = Collider {
        kind: EntityKind::Fireball,
        pos: Point::new(0.0, 0.0),
        radius: 10.0,
        damage: 0.6,
    };

    driver.resolve(&fireball);
    for _ in 0..200 {
        driver.advance_timers();
    }
    assert!(!driver.invincible);
    assert!(!driver.in_hit_window());

    driver.resolve(&fireball);
    assert!(driver.is_dead());

    driver.revive();
    assert!(!driver.is_dead());
    assert_eq!(driver.health(), 1.0);
}

#[test]
fn test_shield_grants_window_without_damage() {
    let params = create_test_params();
    let mut driver = Driver::new(Point::new(0.0, 0.0), &params);

    driver.shield();

    assert_eq!(driver.health(), 1.0);
    assert!(driver.invincible);
    assert!(driver.in_hit_window());
}

#[test]
fn test_driver_bounces_only_off_cars() {
    let params = create_test_params();
    let mut driver = Driver::new(Point::new(0.0, 100.0), &params);
    let fireball = Collider {
        kind: EntityKind::Fireball,
        pos: Point::new(0.0, 90.0),
        radius: 10.0,
        damage: 0.0,
    };
    driver.bounce_off(&fireball);
    driver.advance_timers();
    assert_eq!(driver.pos.y(), 100.0);

    let car = Collider {
        kind: EntityKind::EnemyCar,
        pos: Point::new(0.0, 90.0),
        radius: 30.0,
        damage: 0.0,
    };
    driver.bounce_off(&car);
    driver.advance_timers();
    assert_eq!(driver.pos.y(), 102.0);
}
