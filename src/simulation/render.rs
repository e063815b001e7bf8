//! What the front end should draw this tick.
//!
//! The simulation never touches the window. It describes each visible
//! entity as a [`RenderHint`] and the status line as a [`Hud`]; the binary
//! turns those into shapes and text.

use geo::Point;

use super::car::{Car, CarKind};
use super::collision::PickupKind;
use super::effect::EffectKind;
use super::params::Params;
use super::passenger::PassengerState;
use super::trip;
use super::world::World;

/// Which sprite to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    /// The live taxi.
    Taxi,
    /// A wreck.
    DamagedTaxi,
    /// Enemy traffic.
    EnemyCar,
    /// Ordinary traffic.
    OtherCar,
    /// The walking driver.
    Driver,
    /// A passenger outside the taxi.
    Passenger,
    /// A drop-off flag.
    Flag,
    /// A fireball.
    Fireball,
    /// A coin.
    Coin,
    /// An invincibility pickup.
    InvinciblePower,
    /// Smoke puff.
    Smoke,
    /// Fire.
    Fire,
}

/// One entity to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderHint {
    /// Sprite to use.
    pub sprite: Sprite,
    /// Center of the sprite.
    pub pos: Point<f64>,
    /// Collision radius, a reasonable size for placeholder shapes.
    pub radius: f64,
    /// Draw at half opacity (invincible entities).
    pub translucent: bool,
    /// Text shown next to the sprite, such as a waiting passenger's fare.
    pub label: Option<String>,
}

impl RenderHint {
    fn new(sprite: Sprite, pos: Point<f64>, radius: f64) -> Self {
        Self {
            sprite,
            pos,
            radius,
            translucent: false,
            label: None,
        }
    }
}

/// Details of the ongoing or last completed trip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripSummary {
    /// `true` while the trip is in progress.
    pub ongoing: bool,
    /// Expected (or settled) earnings.
    pub earnings: f64,
    /// Passenger priority.
    pub priority: u8,
    /// Overshoot penalty; zero while ongoing.
    pub penalty: f64,
}

/// Status line contents.
#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    /// Current score.
    pub score: f64,
    /// Score needed to win.
    pub target: f64,
    /// Ticks left.
    pub frames_remaining: u32,
    /// Taxi health, 0..100.
    pub taxi_health: f64,
    /// Driver health, 0..100.
    pub driver_health: f64,
    /// Current passenger's health, 0..100 (100 without a passenger).
    pub passenger_health: f64,
    /// Ongoing trip, or the last completed one.
    pub trip: Option<TripSummary>,
    /// Ticks counted by an active coin power.
    pub coin_frames: Option<u32>,
    /// `true` while it rains.
    pub raining: bool,
}

fn car_hint(car: &Car) -> RenderHint {
    let sprite = match car.kind {
        CarKind::Taxi => Sprite::Taxi,
        CarKind::EnemyCar => Sprite::EnemyCar,
        CarKind::OtherCar => Sprite::OtherCar,
        CarKind::DamagedTaxi => Sprite::DamagedTaxi,
    };
    RenderHint {
        translucent: car.invincible,
        ..RenderHint::new(sprite, car.pos, car.radius)
    }
}

/// Everything visible this tick, back to front.
pub fn render_hints(world: &World, params: &Params) -> Vec<RenderHint> {
    let mut hints = Vec::new();

    hints.push(car_hint(&world.taxi));
    hints.extend(world.wrecks.iter().map(car_hint));

    for pickup in world.pickups.iter().filter(|p| !p.is_consumed()) {
        let sprite = match pickup.kind {
            PickupKind::Coin => Sprite::Coin,
            PickupKind::InvinciblePower => Sprite::InvinciblePower,
        };
        hints.push(RenderHint::new(sprite, pickup.pos, pickup.radius));
    }

    for passenger in world
        .passengers
        .iter()
        .filter(|p| p.state() != PassengerState::Riding)
    {
        let mut hint = RenderHint::new(Sprite::Passenger, passenger.pos, passenger.radius);
        if passenger.state() == PassengerState::Idle {
            let fare = trip::calculate_earnings(
                passenger.profile.y_distance,
                passenger.priority(),
                &params.trip,
            );
            hint.label = Some(format!("{} {:.1}", passenger.priority(), fare));
        }
        hints.push(hint);
    }

    for flag in &world.flags {
        hints.push(RenderHint::new(Sprite::Flag, flag.pos, flag.radius));
    }

    hints.extend(world.cars.iter().filter(|c| !c.is_destroyed()).map(car_hint));

    for effect in world.effects.iter().filter(|e| e.is_visible()) {
        let sprite = match effect.kind {
            EffectKind::Smoke => Sprite::Smoke,
            EffectKind::Fire => Sprite::Fire,
        };
        hints.push(RenderHint::new(sprite, effect.pos, 0.0));
    }

    for fireball in world.fireballs.iter().filter(|f| f.is_alive()) {
        hints.push(RenderHint::new(Sprite::Fireball, fireball.pos, fireball.radius));
    }

    if !world.driver.is_in_taxi() {
        hints.push(RenderHint {
            translucent: world.driver.invincible,
            ..RenderHint::new(Sprite::Driver, world.driver.pos, world.driver.radius)
        });
    }

    hints
}

/// Status line for this tick.
pub fn hud(world: &World, params: &Params) -> Hud {
    let current = world.current_passenger.and_then(|id| world.passenger(id));

    let ongoing = world
        .trip
        .as_ref()
        .filter(|t| !t.is_completed())
        .map(|t| TripSummary {
            ongoing: true,
            earnings: t.earnings(),
            priority: current.map_or(0, |p| p.priority()),
            penalty: 0.0,
        });
    let last = world.last_trip.as_ref().map(|t| TripSummary {
        ongoing: false,
        earnings: t.earnings(),
        priority: world.passenger(t.passenger_id).map_or(0, |p| p.priority()),
        penalty: t.penalty(),
    });

    Hud {
        score: world.score,
        target: params.target_score,
        frames_remaining: world.frames_remaining(params),
        taxi_health: world.taxi.health_percent(),
        driver_health: world.driver.health_percent(),
        passenger_health: current.map_or(100.0, |p| p.health_percent()),
        trip: ongoing.or(last),
        coin_frames: world
            .powers
            .coin
            .is_active()
            .then(|| world.powers.coin.frames()),
        raining: world.weather.is_raining(),
    }
}
