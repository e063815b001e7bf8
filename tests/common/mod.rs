#![allow(dead_code)]

use taxi_rush::simulation::layout::WorldLayout;
use taxi_rush::simulation::params::{
    CollisionParams, DriverParams, EffectParams, FireballParams, Params, PassengerParams,
    PickupParams, SpawnParams, TaxiParams, TrafficParams,
};
use taxi_rush::simulation::trip::TripRates;
use taxi_rush::simulation::weather::WeatherSchedule;
use taxi_rush::simulation::world::World;

/// Parameters with round numbers and random spawns switched off
/// (every roll is 1, every modulus is 2).
pub fn create_test_params() -> Params {
    Params {
        window_height: 768.0,
        lanes: vec![100.0, 200.0, 300.0],
        target_score: 1000.0,
        max_frames: 10_000,
        taxi: TaxiParams {
            radius: 30.0,
            health: 1.0,
            damage: 0.5,
            speed_x: 1.0,
            speed_y: 5.0,
            next_spawn_min_y: 200,
            next_spawn_max_y: 200,
        },
        enemy_car: TrafficParams {
            radius: 30.0,
            health: 1.0,
            damage: 0.3,
            min_speed_y: 2.0,
            max_speed_y: 2.0,
        },
        other_car: TrafficParams {
            radius: 30.0,
            health: 1.0,
            damage: 0.5,
            min_speed_y: 2.0,
            max_speed_y: 2.0,
        },
        driver: DriverParams {
            radius: 20.0,
            health: 1.0,
            walk_speed_x: 2.0,
            walk_speed_y: 2.0,
            board_distance: 10.0,
            bounce_speed: 2.0,
            eject_offset_x: 50.0,
        },
        passenger: PassengerParams {
            radius: 20.0,
            health: 1.0,
            walk_speed_x: 1.0,
            walk_speed_y: 1.0,
            taxi_detect_radius: 100.0,
            pickup_snap_distance: 1.0,
            eject_offset_x: 50.0,
        },
        fireball: FireballParams {
            radius: 10.0,
            damage: 0.5,
            speed_y: 10.0,
            launch_offset_y: 10.0,
        },
        flag_radius: 40.0,
        smoke: EffectParams {
            ttl: 20,
            drift_y: 5.0,
        },
        fire: EffectParams {
            ttl: 20,
            drift_y: 5.0,
        },
        coin: PickupParams {
            radius: 20.0,
            duration: 100,
        },
        invincible_power: PickupParams {
            radius: 20.0,
            duration: 100,
        },
        trip: TripRates {
            rate_per_y: 1.0,
            priority1: 10.0,
            priority2: 5.0,
            priority3: 2.0,
            penalty_per_y: 0.5,
        },
        collision: CollisionParams {
            hit_invincibility_ticks: 200,
            bounce_ticks: 10,
            bounce_speed: 1.0,
            driver_contact_bounce_speed: 2.0,
            offscreen_car_position: [-200.0, -200.0],
            offscreen_fireball_position: [-20.0, -20.0],
        },
        spawn: SpawnParams {
            roll_max: 1,
            car_modulus: 2,
            enemy_modulus: 2,
            fireball_modulus: 2,
            top_y: -50.0,
            bottom_y: 768.0,
        },
    }
}

/// Builds a world from layout text with an empty weather schedule.
pub fn create_world(params: &Params, layout: &str) -> World {
    let layout = WorldLayout::parse(layout).expect("layout should parse");
    World::new(params, &layout, WeatherSchedule::default()).expect("world should build")
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
