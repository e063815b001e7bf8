#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

mod common;

use common::{create_test_params, create_world};
use rand::SeedableRng;
use rand::rngs::StdRng;
use taxi_rush::simulation::input::MoveIntent;
use taxi_rush::simulation::render::{Sprite, hud, render_hints};

const LAYOUT: &str = "TAXI,100,500\nPASSENGER,100,500,2,100,300,1\nPASSENGER,600,0,1,100,200,0\nCOIN,300,0\n";

#[test]
fn test_hints_before_pickup() {
    let params = create_test_params();
    let world = create_world(&params, LAYOUT);

    let hints = render_hints(&world, &params);

    let passengers: Vec<_> = hints
        .iter()
        .filter(|h| h.sprite == Sprite::Passenger)
        .collect();
    assert_eq!(passengers.len(), 2);
    // Idle passengers show their priority and fare
    assert_eq!(passengers[0].label.as_deref(), Some("2 310.0"));
    assert!(hints.iter().any(|h| h.sprite == Sprite::Coin));
    assert!(!hints.iter().any(|h| h.sprite == Sprite::Driver));
    assert_eq!(hints[0].sprite, Sprite::Taxi);
}

#[test]
fn test_riding_passenger_is_hidden_and_flag_shown() {
    let params = create_test_params();
    let mut world = create_world(&params, LAYOUT);
    let mut rng = StdRng::seed_from_u64(1);

    world.step(&params, MoveIntent::idle(), &mut rng);
    let hints = render_hints(&world, &params);

    let passengers = hints
        .iter()
        .filter(|h| h.sprite == Sprite::Passenger)
        .count();
    assert_eq!(passengers, 1);
    assert!(hints.iter().any(|h| h.sprite == Sprite::Flag));
}

#[test]
fn test_hud_summary() {
    let params = create_test_params();
    let mut world = create_world(&params, LAYOUT);
    let mut rng = StdRng::seed_from_u64(1);

    let before = hud(&world, &params);
    assert_eq!(before.passenger_health, 100.0);
    assert!(before.trip.is_none());
    assert!(before.coin_frames.is_none());

    world.step(&params, MoveIntent::idle(), &mut rng);
    let after = hud(&world, &params);

    assert_eq!(after.frames_remaining, 9_999);
    assert_eq!(after.taxi_health, 100.0);
    let trip = after.trip.expect("trip in progress");
    assert!(trip.ongoing);
    assert_eq!(trip.earnings, 310.0);
    assert_eq!(trip.priority, 2);
    assert!(!after.raining);
}
