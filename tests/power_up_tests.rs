#![allow(missing_docs)]

mod common;

use common::create_test_params;
use geo::Point;
use taxi_rush::simulation::collision::{Collider, Collision, EntityKind, PickupKind};
use taxi_rush::simulation::power_up::{Pickup, PowerPhase, PowerTimer, PowerUpState};

fn collider(kind: EntityKind) -> Collider {
    Collider {
        kind,
        pos: Point::new(0.0, 0.0),
        radius: 30.0,
        damage: 0.0,
    }
}

#[test]
fn test_timer_runs_expires_then_goes_idle() {
    let mut timer = PowerTimer::new(3);
    assert_eq!(timer.advance(), PowerPhase::Idle);

    timer.activate();
    assert_eq!(timer.advance(), PowerPhase::Running);
    assert_eq!(timer.advance(), PowerPhase::Running);
    assert_eq!(timer.advance(), PowerPhase::Expired);
    assert!(timer.is_active());
    assert_eq!(timer.frames(), 3);

    assert_eq!(timer.advance(), PowerPhase::Idle);
    assert!(!timer.is_active());
}

#[test]
fn test_reactivation_restarts_count() {
    let mut timer = PowerTimer::new(3);
    timer.activate();
    timer.advance();
    timer.advance();

    timer.activate();
    assert_eq!(timer.frames(), 0);
    assert_eq!(timer.advance(), PowerPhase::Running);
}

#[test]
fn test_state_activates_matching_timer() {
    let params = create_test_params();
    let mut powers = PowerUpState::new(&params);

    powers.activate(PickupKind::Coin);

    assert!(powers.coin.is_active());
    assert!(!powers.invincible.is_active());
}

#[test]
fn test_pickup_collected_by_taxi_or_driver_once() {
    let params = create_test_params();
    let mut coin = Pickup::new(PickupKind::Coin, Point::new(0.0, 10.0), &params);

    assert!(!coin.test(&collider(EntityKind::EnemyCar)));
    assert!(!coin.test(&collider(EntityKind::Passenger)));
    assert!(coin.test(&collider(EntityKind::Driver)));
    assert!(coin.test(&collider(EntityKind::Taxi)));

    coin.resolve(&collider(EntityKind::Taxi));
    assert!(coin.is_consumed());
    assert!(!coin.test(&collider(EntityKind::Taxi)));
}
