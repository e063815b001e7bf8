#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

mod common;

use common::create_test_params;
use geo::Point;
use taxi_rush::simulation::collision::PickupKind;
use taxi_rush::simulation::error::{ConfigError, LayoutError};
use taxi_rush::simulation::layout::{SpawnRecord, WorldLayout};
use taxi_rush::simulation::params::Params;
use taxi_rush::simulation::weather::{WeatherCondition, WeatherSchedule};

#[test]
fn test_shipped_assets_load() {
    let params = Params::load_from_file("assets/params.json").expect("Failed to load params");
    let layout = WorldLayout::load_from_file("assets/world.csv").expect("Failed to load layout");
    let weather =
        WeatherSchedule::load_from_file("assets/weather.csv").expect("Failed to load weather");

    assert!(!params.lanes.is_empty());
    assert!(layout.taxi_pos().is_ok());
    assert!(!weather.periods().is_empty());
}

#[test]
fn test_params_json_round_trip_validates() {
    let params = create_test_params();
    let json = serde_json::to_string(&params).expect("Failed to serialize params");

    let loaded = Params::from_json(&json).expect("Failed to parse params");

    assert_eq!(loaded.lanes, params.lanes);
    assert_eq!(loaded.trip.priority2, 5.0);
}

#[test]
fn test_missing_field_is_parse_error() {
    let params = create_test_params();
    let mut value = serde_json::to_value(&params).expect("Failed to serialize params");
    value
        .as_object_mut()
        .expect("params is an object")
        .remove("flag_radius");

    let result = Params::from_json(&value.to_string());

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_zero_radius_is_rejected() {
    let mut params = create_test_params();
    params.fireball.radius = 0.0;
    assert!(matches!(
        params.validate(),
        Err(ConfigError::InvalidValue {
            field: "fireball.radius",
            ..
        })
    ));

    let mut params = create_test_params();
    params.other_car.radius = 0.0;
    assert!(matches!(
        params.validate(),
        Err(ConfigError::InvalidValue {
            field: "other_car.radius",
            ..
        })
    ));
}

#[test]
fn test_invalid_values_are_rejected() {
    let mut params = create_test_params();
    params.taxi.radius = -1.0;
    assert!(matches!(
        params.validate(),
        Err(ConfigError::InvalidValue {
            field: "taxi.radius",
            ..
        })
    ));

    let mut params = create_test_params();
    params.lanes.clear();
    assert!(params.validate().is_err());

    let mut params = create_test_params();
    params.enemy_car.min_speed_y = 5.0;
    assert!(params.validate().is_err());

    let mut params = create_test_params();
    params.spawn.car_modulus = 0;
    assert!(params.validate().is_err());
}

#[test]
fn test_missing_config_file_is_io_error() {
    let result = Params::load_from_file("does_not_exist.json");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_layout_parses_every_record_kind() {
    let text = "TAXI,360,600\n\nDRIVER,360,600\nPASSENGER,280,400,3,620,600,0\nCOIN,480,-200\nINVINCIBLE_POWER,480,-900\n";

    let layout = WorldLayout::parse(text).expect("Failed to parse layout");

    assert_eq!(layout.records.len(), 5);
    assert_eq!(layout.taxi_pos().expect("taxi"), Point::new(360.0, 600.0));
    match &layout.records[2] {
        SpawnRecord::Passenger { pos, profile } => {
            assert_eq!(*pos, Point::new(280.0, 400.0));
            assert_eq!(profile.priority, 3);
            assert_eq!(profile.end_x, 620.0);
            assert_eq!(profile.y_distance, 600.0);
            assert!(!profile.has_umbrella);
        }
        other => panic!("expected a passenger, got {other:?}"),
    }
    assert_eq!(
        layout.records[4],
        SpawnRecord::Pickup {
            kind: PickupKind::InvinciblePower,
            pos: Point::new(480.0, -900.0),
        }
    );
}

#[test]
fn test_layout_rejects_unknown_record() {
    let result = WorldLayout::parse("TAXI,1,2\nBUS,1,2\n");

    match result {
        Err(LayoutError::UnknownRecord { line, kind }) => {
            assert_eq!(line, 2);
            assert_eq!(kind, "BUS");
        }
        other => panic!("expected unknown record, got {other:?}"),
    }
}

#[test]
fn test_layout_rejects_malformed_fields() {
    let short = WorldLayout::parse("TAXI,1\n");
    assert!(matches!(
        short,
        Err(LayoutError::MalformedField { line: 1, field: "y" })
    ));

    let bad_priority = WorldLayout::parse("TAXI,1,2\nPASSENGER,1,2,4,0,100,0\n");
    assert!(matches!(
        bad_priority,
        Err(LayoutError::MalformedField {
            line: 2,
            field: "priority"
        })
    ));

    let bad_umbrella = WorldLayout::parse("TAXI,1,2\nPASSENGER,1,2,1,0,100,yes\n");
    assert!(matches!(
        bad_umbrella,
        Err(LayoutError::MalformedField {
            field: "hasUmbrella",
            ..
        })
    ));
}

#[test]
fn test_layout_requires_taxi() {
    let result = WorldLayout::parse("COIN,1,2\n");
    assert!(matches!(result, Err(LayoutError::MissingTaxi)));
}

#[test]
fn test_weather_schedule_follows_periods() {
    let mut weather =
        WeatherSchedule::parse("SUNNY,1,2\nRAINING,3,4\nSUNNY,5,9\n").expect("Failed to parse");
    assert_eq!(weather.periods().len(), 3);
    assert_eq!(weather.periods()[1].condition, WeatherCondition::Raining);

    assert!(!weather.update(1));
    assert!(!weather.update(2));
    // Cursor moves past the first period, then the rain starts
    assert!(!weather.update(3));
    assert!(weather.update(4));
    assert!(weather.is_raining());

    assert!(!weather.update(5));
    assert!(weather.update(6));
    assert!(!weather.is_raining());
}

#[test]
fn test_weather_rejects_bad_lines() {
    assert!(matches!(
        WeatherSchedule::parse("SNOW,1,2\n"),
        Err(LayoutError::UnknownRecord { line: 1, .. })
    ));
    assert!(matches!(
        WeatherSchedule::parse("SUNNY,1,x\n"),
        Err(LayoutError::MalformedField {
            line: 1,
            field: "end"
        })
    ));
}
