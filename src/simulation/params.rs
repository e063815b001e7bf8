use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::trip::TripRates;

/// Game parameters that control every entity and rule in a session.
///
/// Every field is required: a configuration file missing a key fails to
/// parse instead of silently falling back to a default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Params {
    /// Height of the visible road in world units.
    pub window_height: f64,
    /// X coordinates of the lane centers, left to right.
    pub lanes: Vec<f64>,
    /// Score that wins the game.
    pub target_score: f64,
    /// Number of ticks before the session ends in a loss.
    pub max_frames: u32,
    /// The player's taxi.
    pub taxi: TaxiParams,
    /// Hostile traffic that shoots fireballs.
    pub enemy_car: TrafficParams,
    /// Ordinary traffic.
    pub other_car: TrafficParams,
    /// The player avatar.
    pub driver: DriverParams,
    /// Passengers waiting for a ride.
    pub passenger: PassengerParams,
    /// Projectiles launched by enemy cars.
    pub fireball: FireballParams,
    /// Collision radius of drop-off flags.
    pub flag_radius: f64,
    /// Smoke puff shown on impact.
    pub smoke: EffectParams,
    /// Fire shown where a car is destroyed.
    pub fire: EffectParams,
    /// Coin pickup (priority boost).
    pub coin: PickupParams,
    /// Invincibility pickup.
    pub invincible_power: PickupParams,
    /// Fare and penalty rates.
    pub trip: TripRates,
    /// Hit window, bounce and off-screen parking.
    pub collision: CollisionParams,
    /// Odds and positions for random traffic.
    pub spawn: SpawnParams,
}

/// Taxi settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaxiParams {
    /// Collision radius.
    pub radius: f64,
    /// Starting health on the 0..1 scale.
    pub health: f64,
    /// Damage dealt to whatever the taxi hits.
    pub damage: f64,
    /// Sideways step per tick.
    pub speed_x: f64,
    /// Scroll speed while the driver is inside.
    pub speed_y: f64,
    /// Lowest Y a replacement taxi can appear at.
    pub next_spawn_min_y: i32,
    /// Highest Y a replacement taxi can appear at.
    pub next_spawn_max_y: i32,
}

/// Settings shared by both kinds of traffic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrafficParams {
    /// Collision radius.
    pub radius: f64,
    /// Starting health on the 0..1 scale.
    pub health: f64,
    /// Damage dealt on impact.
    pub damage: f64,
    /// Lower bound of the random vertical drift.
    pub min_speed_y: f64,
    /// Upper bound of the random vertical drift.
    pub max_speed_y: f64,
}

/// Driver settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DriverParams {
    /// Collision radius.
    pub radius: f64,
    /// Full health on the 0..1 scale.
    pub health: f64,
    /// Sideways walking step.
    pub walk_speed_x: f64,
    /// Vertical walking step, also the scroll speed while on foot.
    pub walk_speed_y: f64,
    /// Distance at which the driver climbs back into the taxi.
    pub board_distance: f64,
    /// Per-tick bounce displacement.
    pub bounce_speed: f64,
    /// How far left of a wreck the driver lands.
    pub eject_offset_x: f64,
}

/// Passenger settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PassengerParams {
    /// Collision radius.
    pub radius: f64,
    /// Starting health on the 0..1 scale.
    pub health: f64,
    /// Sideways walking step.
    pub walk_speed_x: f64,
    /// Vertical walking step.
    pub walk_speed_y: f64,
    /// Taxi must be this close before the passenger starts walking to it.
    pub taxi_detect_radius: f64,
    /// Passenger boards once this close to the taxi.
    pub pickup_snap_distance: f64,
    /// How far left of a wreck (and of the walking driver) the passenger stays.
    pub eject_offset_x: f64,
}

/// Fireball settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FireballParams {
    /// Collision radius.
    pub radius: f64,
    /// Damage dealt on impact.
    pub damage: f64,
    /// Upward speed per tick.
    pub speed_y: f64,
    /// Gap between the shooter's front edge and the launch point.
    pub launch_offset_y: f64,
}

/// Smoke or fire settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EffectParams {
    /// Ticks the effect stays visible.
    pub ttl: u32,
    /// Downward drift per tick.
    pub drift_y: f64,
}

/// Pickup settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PickupParams {
    /// Collision radius.
    pub radius: f64,
    /// Ticks the power stays active.
    pub duration: u32,
}

/// Collision timing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollisionParams {
    /// Length of the post-hit invincibility window.
    pub hit_invincibility_ticks: u32,
    /// Length of the bounce displacement.
    pub bounce_ticks: u32,
    /// Per-tick bounce displacement of a car hit by another car.
    pub bounce_speed: f64,
    /// Per-tick bounce displacement of a car hit by the walking driver.
    pub driver_contact_bounce_speed: f64,
    /// Where destroyed traffic is parked.
    pub offscreen_car_position: [f64; 2],
    /// Where spent fireballs are parked.
    pub offscreen_fireball_position: [f64; 2],
}

/// Random spawn odds.
///
/// Each roll draws an integer in `1..=roll_max`; an event fires when the roll
/// is a multiple of its modulus.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpawnParams {
    /// Upper bound of every roll.
    pub roll_max: u32,
    /// A traffic car spawns on multiples of this.
    pub car_modulus: u32,
    /// Of those, multiples of this spawn an enemy car instead.
    pub enemy_modulus: u32,
    /// An enemy car launches a fireball on multiples of this.
    pub fireball_modulus: u32,
    /// Spawn Y above the visible road.
    pub top_y: f64,
    /// Spawn Y below the visible road.
    pub bottom_y: f64,
}

impl Params {
    /// Loads and validates parameters from a JSON file.
    pub fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Parses and validates parameters from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Rejects values that would make the simulation meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("window_height", self.window_height)?;
        if self.lanes.is_empty() {
            return Err(invalid("lanes", "at least one lane is required"));
        }
        for &lane in &self.lanes {
            finite("lanes", lane)?;
        }
        non_negative("target_score", self.target_score)?;
        nonzero("max_frames", self.max_frames)?;

        let taxi = &self.taxi;
        positive("taxi.radius", taxi.radius)?;
        positive("taxi.health", taxi.health)?;
        non_negative("taxi.damage", taxi.damage)?;
        non_negative("taxi.speed_x", taxi.speed_x)?;
        non_negative("taxi.speed_y", taxi.speed_y)?;
        if taxi.next_spawn_min_y > taxi.next_spawn_max_y {
            return Err(invalid("taxi.next_spawn_min_y", "must not exceed next_spawn_max_y"));
        }

        validate_traffic(&self.enemy_car, ENEMY_CAR_FIELDS)?;
        validate_traffic(&self.other_car, OTHER_CAR_FIELDS)?;

        let driver = &self.driver;
        positive("driver.radius", driver.radius)?;
        positive("driver.health", driver.health)?;
        non_negative("driver.walk_speed_x", driver.walk_speed_x)?;
        non_negative("driver.walk_speed_y", driver.walk_speed_y)?;
        non_negative("driver.board_distance", driver.board_distance)?;
        non_negative("driver.bounce_speed", driver.bounce_speed)?;
        finite("driver.eject_offset_x", driver.eject_offset_x)?;

        let passenger = &self.passenger;
        positive("passenger.radius", passenger.radius)?;
        positive("passenger.health", passenger.health)?;
        positive("passenger.walk_speed_x", passenger.walk_speed_x)?;
        positive("passenger.walk_speed_y", passenger.walk_speed_y)?;
        positive("passenger.taxi_detect_radius", passenger.taxi_detect_radius)?;
        non_negative("passenger.pickup_snap_distance", passenger.pickup_snap_distance)?;
        finite("passenger.eject_offset_x", passenger.eject_offset_x)?;

        positive("fireball.radius", self.fireball.radius)?;
        non_negative("fireball.damage", self.fireball.damage)?;
        non_negative("fireball.speed_y", self.fireball.speed_y)?;
        finite("fireball.launch_offset_y", self.fireball.launch_offset_y)?;

        positive("flag_radius", self.flag_radius)?;
        finite("smoke.drift_y", self.smoke.drift_y)?;
        finite("fire.drift_y", self.fire.drift_y)?;
        positive("coin.radius", self.coin.radius)?;
        nonzero("coin.duration", self.coin.duration)?;
        positive("invincible_power.radius", self.invincible_power.radius)?;
        nonzero("invincible_power.duration", self.invincible_power.duration)?;

        let trip = &self.trip;
        non_negative("trip.rate_per_y", trip.rate_per_y)?;
        non_negative("trip.priority1", trip.priority1)?;
        non_negative("trip.priority2", trip.priority2)?;
        non_negative("trip.priority3", trip.priority3)?;
        non_negative("trip.penalty_per_y", trip.penalty_per_y)?;

        let collision = &self.collision;
        nonzero("collision.hit_invincibility_ticks", collision.hit_invincibility_ticks)?;
        nonzero("collision.bounce_ticks", collision.bounce_ticks)?;
        non_negative("collision.bounce_speed", collision.bounce_speed)?;
        non_negative(
            "collision.driver_contact_bounce_speed",
            collision.driver_contact_bounce_speed,
        )?;
        for &v in collision
            .offscreen_car_position
            .iter()
            .chain(collision.offscreen_fireball_position.iter())
        {
            finite("collision.offscreen_position", v)?;
        }

        let spawn = &self.spawn;
        nonzero("spawn.roll_max", spawn.roll_max)?;
        nonzero("spawn.car_modulus", spawn.car_modulus)?;
        nonzero("spawn.enemy_modulus", spawn.enemy_modulus)?;
        nonzero("spawn.fireball_modulus", spawn.fireball_modulus)?;
        finite("spawn.top_y", spawn.top_y)?;
        finite("spawn.bottom_y", spawn.bottom_y)?;

        Ok(())
    }
}

const ENEMY_CAR_FIELDS: [&str; 5] = [
    "enemy_car.radius",
    "enemy_car.health",
    "enemy_car.damage",
    "enemy_car.min_speed_y",
    "enemy_car.max_speed_y",
];

const OTHER_CAR_FIELDS: [&str; 5] = [
    "other_car.radius",
    "other_car.health",
    "other_car.damage",
    "other_car.min_speed_y",
    "other_car.max_speed_y",
];

fn validate_traffic(car: &TrafficParams, fields: [&'static str; 5]) -> Result<(), ConfigError> {
    let [radius, health, damage, min, max] = fields;
    positive(radius, car.radius)?;
    positive(health, car.health)?;
    non_negative(damage, car.damage)?;
    non_negative(min, car.min_speed_y)?;
    non_negative(max, car.max_speed_y)?;
    if car.min_speed_y > car.max_speed_y {
        return Err(invalid(min, "must not exceed max_speed_y"));
    }
    Ok(())
}

fn invalid(field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::InvalidValue { field, reason }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, "must be a finite number"))
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(invalid(field, "must not be negative"));
    }
    Ok(())
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value <= 0.0 {
        return Err(invalid(field, "must be greater than zero"));
    }
    Ok(())
}

fn nonzero(field: &'static str, value: u32) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(invalid(field, "must be greater than zero"));
    }
    Ok(())
}
