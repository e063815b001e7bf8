//! The game session: every entity, the score and the per-tick update.
//!
//! One call to [`World::step`] runs a whole tick in a fixed order:
//! input and scrolling, timers and fireball launches, traffic spawns and
//! drift, passenger priorities, power-ups, passenger pickups, trip
//! bookkeeping, collisions, committing queued events, driver boarding and
//! finally the game-over check.

use geo::Point;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::car::Car;
use super::collision::{Collision, PickupKind};
use super::collisions;
use super::driver::Driver;
use super::effect::Effect;
use super::error::LayoutError;
use super::event_log::{EventColor, EventLog};
use super::events::{self, EventQueue};
use super::fireball::Fireball;
use super::input::MoveIntent;
use super::layout::{SpawnRecord, WorldLayout};
use super::locatable::Locatable;
use super::params::Params;
use super::passenger::{self, Passenger, PassengerState};
use super::power_up::{Pickup, PowerPhase, PowerUpState};
use super::spawner;
use super::trip::{Trip, TripEndFlag};
use super::weather::WeatherSchedule;

/// Why a session was lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossReason {
    /// The frame budget ran out.
    OutOfTime,
    /// The taxi fell off the bottom of the road.
    TaxiLeftRoad,
    /// The driver's health reached zero.
    DriverDied,
    /// The current passenger's health reached zero.
    PassengerDied,
}

/// Session outcome, evaluated once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Still running.
    Playing,
    /// Target score reached.
    Won,
    /// Session over without reaching the target.
    Lost(LossReason),
}

impl GameStatus {
    /// `true` once the session has ended either way.
    pub fn is_over(self) -> bool {
        self != Self::Playing
    }
}

/// All session state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Ticks elapsed.
    pub frame: u32,
    /// Profit from completed trips.
    pub score: f64,
    /// The live taxi.
    pub taxi: Car,
    /// Wrecks of destroyed taxis.
    pub wrecks: Vec<Car>,
    /// Live traffic.
    pub cars: Vec<Car>,
    /// The player avatar.
    pub driver: Driver,
    /// Every passenger in the layout.
    pub passengers: Vec<Passenger>,
    /// Flags of passengers on a trip or walking to their drop-off.
    pub flags: Vec<TripEndFlag>,
    /// Passenger riding in (or ejected from) the taxi.
    pub current_passenger: Option<usize>,
    /// Trip of the current passenger.
    pub trip: Option<Trip>,
    /// Most recently completed trip.
    pub last_trip: Option<Trip>,
    /// Fireballs in flight.
    pub fireballs: Vec<Fireball>,
    /// Smoke and fire.
    pub effects: Vec<Effect>,
    /// Coins and invincibility pickups.
    pub pickups: Vec<Pickup>,
    /// Power-up timers.
    pub powers: PowerUpState,
    /// Weather timeline.
    pub weather: WeatherSchedule,
    /// `true` while the player drives the taxi this tick.
    pub taxi_moving: bool,
    /// Outcome so far.
    pub status: GameStatus,
    /// Recent gameplay events for the HUD.
    pub event_log: EventLog,
    next_id: usize,
}

impl World {
    /// Builds a session from a layout.
    ///
    /// The driver always starts inside the taxi at full health.
    pub fn new(
        params: &Params,
        layout: &WorldLayout,
        weather: WeatherSchedule,
    ) -> Result<Self, LayoutError> {
        let taxi_pos = layout.taxi_pos()?;
        let mut next_id = 0;
        let mut id = || {
            next_id += 1;
            next_id - 1
        };

        let taxi = Car::taxi(id(), taxi_pos, params);
        let mut driver = Driver::new(taxi_pos, params);
        let mut passengers = Vec::new();
        let mut pickups = Vec::new();
        for record in &layout.records {
            match record {
                SpawnRecord::Taxi(_) => {}
                SpawnRecord::Driver(pos) => driver.pos = *pos,
                SpawnRecord::Passenger { pos, profile } => {
                    passengers.push(Passenger::new(id(), *pos, *profile, params));
                }
                SpawnRecord::Pickup { kind, pos } => {
                    pickups.push(Pickup::new(*kind, *pos, params));
                }
            }
        }
        driver.revive();
        driver.sync_with_taxi(&taxi);

        tracing::info!(
            passengers = passengers.len(),
            pickups = pickups.len(),
            "session created"
        );

        Ok(Self {
            frame: 0,
            score: 0.0,
            taxi,
            wrecks: Vec::new(),
            cars: Vec::new(),
            driver,
            passengers,
            flags: Vec::new(),
            current_passenger: None,
            trip: None,
            last_trip: None,
            fireballs: Vec::new(),
            effects: Vec::new(),
            pickups,
            powers: PowerUpState::new(params),
            weather,
            taxi_moving: false,
            status: GameStatus::Playing,
            event_log: EventLog::default(),
            next_id,
        })
    }

    /// Hands out a fresh entity ID.
    pub fn next_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Passenger with the given ID.
    pub fn passenger(&self, id: usize) -> Option<&Passenger> {
        self.passengers.iter().find(|p| p.id == id)
    }

    /// Flag of the given passenger.
    pub fn flag_for(&self, passenger_id: usize) -> Option<&TripEndFlag> {
        self.flags.iter().find(|f| f.passenger_id == passenger_id)
    }

    /// Frames left before the session times out.
    pub fn frames_remaining(&self, params: &Params) -> u32 {
        params.max_frames.saturating_sub(self.frame)
    }

    /// Advances the session by one tick.
    ///
    /// # Arguments
    ///
    /// * `params` - Game parameters
    /// * `input` - Directions held this tick
    /// * `rng` - Source of every random draw this tick
    ///
    /// # Returns
    ///
    /// The status after the tick. Once the game is over further calls change
    /// nothing.
    pub fn step(&mut self, params: &Params, input: MoveIntent, rng: &mut impl Rng) -> GameStatus {
        if self.status.is_over() {
            return self.status;
        }

        self.frame += 1;
        if self.weather.update(self.frame) {
            let message = if self.weather.is_raining() {
                "It started raining"
            } else {
                "The rain stopped"
            };
            self.event_log
                .log(self.frame, message.to_string(), EventColor::Weather);
        }

        self.apply_input(input);

        let mut queue = EventQueue::new();
        self.advance_timers(params, rng, &mut queue);

        if let Some(event) = spawner::spawn_traffic(params, rng) {
            queue.push(event);
        }
        for car in &mut self.cars {
            car.drift();
        }

        self.adjust_priorities();
        self.update_coin_power(params);
        self.update_invincible_power();
        self.check_for_pickup(params);
        self.manage_trip(params);

        collisions::resolve_collisions(self, params, rng, &mut queue);
        events::apply_events(self, params, queue);

        self.board_driver();
        self.taxi_moving = false;

        self.status = self.evaluate_status(params);
        if self.status.is_over() {
            tracing::info!(status = ?self.status, score = self.score, frame = self.frame, "game over");
        }
        self.status
    }

    fn apply_input(&mut self, input: MoveIntent) {
        let in_taxi = self.driver.is_in_taxi();
        let scroll_speed = if in_taxi {
            self.taxi.speed_y
        } else {
            self.driver.walk_speed_y()
        };

        if input.up {
            if in_taxi {
                self.taxi_moving = true;
            }
            self.scroll(scroll_speed);
        }
        if input.left {
            if in_taxi {
                self.taxi_moving = true;
                self.taxi.move_left();
            } else {
                self.driver.walk_left();
            }
        }
        if input.right {
            if in_taxi {
                self.taxi_moving = true;
                self.taxi.move_right();
            } else {
                self.driver.walk_right();
            }
        }
        if input.down && !in_taxi {
            self.driver.walk_down();
        }
    }

    /// Moves the road under the player. The taxi only scrolls when nobody
    /// is driving it; the walking driver and fireballs never scroll.
    fn scroll(&mut self, speed: f64) {
        if !self.driver.is_in_taxi() {
            self.taxi.move_down(speed);
        }
        for wreck in &mut self.wrecks {
            wreck.move_down(speed);
        }
        for pickup in &mut self.pickups {
            pickup.move_down(speed);
        }
        for passenger in &mut self.passengers {
            passenger.move_down(speed);
        }
        for flag in &mut self.flags {
            flag.move_down(speed);
        }
        for car in &mut self.cars {
            car.move_down(speed);
        }
        for effect in &mut self.effects {
            effect.move_down(speed);
        }
    }

    fn advance_timers(&mut self, params: &Params, rng: &mut impl Rng, queue: &mut EventQueue) {
        self.taxi.advance_timers();

        for car in &mut self.cars {
            if let Some(event) = spawner::launch_fireball(car, params, rng) {
                queue.push(event);
            }
            car.advance_timers();
            if car.is_revived() && !car.is_destroyed() {
                car.redraw_speed(params, rng);
            }
        }

        for effect in &mut self.effects {
            effect.update();
        }
        for fireball in &mut self.fireballs {
            fireball.update();
        }

        self.driver.sync_with_taxi(&self.taxi);
        self.driver.advance_timers();

        for passenger in &mut self.passengers {
            passenger.advance_timers();
        }
    }

    fn adjust_priorities(&mut self) {
        let raining = self.weather.is_raining();
        let coin_active = self.powers.coin.is_active();
        for passenger in self.passengers.iter_mut().filter(|p| !p.is_dropped_off()) {
            passenger.adjust_priority_for_weather(raining, coin_active);
        }
    }

    /// Consumes every pickup of `kind` touching the taxi (checked first) or
    /// the driver, starting its power.
    fn collect_pickups(&mut self, kind: PickupKind) {
        let taxi = self.taxi.collider();
        let driver = self.driver.collider();
        for pickup in self.pickups.iter_mut().filter(|p| p.kind == kind) {
            let collector = if pickup.test(&taxi) {
                taxi
            } else if pickup.test(&driver) {
                driver
            } else {
                continue;
            };
            pickup.resolve(&collector);
            self.powers.activate(kind);
            if kind == PickupKind::InvinciblePower {
                if collector.kind == taxi.kind {
                    self.taxi.invincible = true;
                } else {
                    self.driver.invincible = true;
                }
            }
            let message = match kind {
                PickupKind::Coin => "Coin collected",
                PickupKind::InvinciblePower => "Invincibility collected",
            };
            self.event_log
                .log(self.frame, message.to_string(), EventColor::Power);
        }
    }

    fn update_coin_power(&mut self, params: &Params) {
        self.collect_pickups(PickupKind::Coin);
        let phase = self.powers.coin.advance();

        let Some(id) = self.current_passenger else {
            return;
        };
        let Some(passenger) = passenger::by_id_mut(&mut self.passengers, id) else {
            return;
        };
        match phase {
            PowerPhase::Running | PowerPhase::Expired => passenger.increase_priority(),
            PowerPhase::Idle => passenger.decrease_priority(),
        }
        if let Some(trip) = self.trip.as_mut() {
            trip.update_earnings(passenger.priority(), &params.trip);
        }
    }

    fn update_invincible_power(&mut self) {
        self.collect_pickups(PickupKind::InvinciblePower);
        if self.powers.invincible.advance() == PowerPhase::Expired {
            self.taxi.invincible = false;
            self.driver.invincible = false;
            tracing::debug!("invincibility expired");
        }
    }

    /// A riding passenger blocks new pickups.
    fn taxi_is_empty(&self) -> bool {
        self.current_passenger
            .and_then(|id| self.passenger(id))
            .is_none_or(|p| p.state() != PassengerState::Riding)
    }

    fn check_for_pickup(&mut self, params: &Params) {
        let taxi_pos = self.taxi.pos;
        let detect_radius = params.passenger.taxi_detect_radius;

        for idx in 0..self.passengers.len() {
            let can_pick_up = self.taxi_is_empty()
                && !self.taxi_moving
                && self.driver.is_in_taxi()
                && self.passengers[idx].is_waiting()
                && self.taxi.distance_to(self.passengers[idx].pos) <= detect_radius;
            if !can_pick_up {
                continue;
            }

            let passenger = &mut self.passengers[idx];
            if !passenger.walk_to_taxi(taxi_pos) {
                continue;
            }

            let id = passenger.id;
            let profile = passenger.profile;
            let flag_pos = Point::new(profile.end_x, passenger.pos.y() - profile.y_distance);
            let trip = Trip::new(id, profile.y_distance, passenger.priority(), &params.trip);

            self.flags.push(TripEndFlag::new(id, flag_pos, params.flag_radius));
            self.event_log.log(
                self.frame,
                format!("Passenger picked up, fare {:.1}", trip.earnings()),
                EventColor::Trip,
            );
            self.trip = Some(trip);
            self.current_passenger = Some(id);
        }
    }

    fn manage_trip(&mut self, params: &Params) {
        self.walk_passengers_to_flags();

        let Some(id) = self.current_passenger else {
            return;
        };
        let taxi_pos = self.taxi.pos;
        let driver_pos = self.driver.pos;
        let Some(passenger) = passenger::by_id_mut(&mut self.passengers, id) else {
            tracing::warn!(passenger = id, "current passenger missing");
            self.current_passenger = None;
            return;
        };
        passenger.sync_with_taxi(taxi_pos);
        passenger.follow_driver(driver_pos);

        let Some(flag) = self.flags.iter().find(|f| f.passenger_id == id) else {
            return;
        };
        let Some(trip) = self.trip.as_mut() else {
            return;
        };
        let arrived = !self.taxi_moving
            && flag.is_reached_by(taxi_pos)
            && !trip.is_completed()
            && passenger.state() == PassengerState::Riding;
        if !arrived {
            return;
        }

        if let Some(profit) = trip.complete(taxi_pos, flag, &params.trip) {
            self.score += profit;
            self.event_log.log(
                self.frame,
                format!("Passenger dropped off, earned {profit:.2}"),
                EventColor::Trip,
            );
        }
        passenger.drop_off();
        self.current_passenger = None;
        self.last_trip = self.trip.take();
    }

    /// Moves every dropped-off passenger towards their flag and removes the
    /// flag once reached.
    fn walk_passengers_to_flags(&mut self) {
        let flags = &mut self.flags;
        for passenger in self
            .passengers
            .iter_mut()
            .filter(|p| p.state() == PassengerState::WalkingToFlag)
        {
            let Some(idx) = flags.iter().position(|f| f.passenger_id == passenger.id) else {
                tracing::warn!(passenger = passenger.id, "no flag for dropped-off passenger");
                continue;
            };
            if passenger.walk_to_flag(flags[idx].pos) {
                flags.remove(idx);
                tracing::debug!(passenger = passenger.id, "passenger delivered");
            }
        }
    }

    /// Puts the walking driver back behind the wheel once close enough.
    fn board_driver(&mut self) {
        if !self.driver.can_board(&self.taxi) {
            return;
        }
        self.driver.enter_taxi();
        self.driver.sync_with_taxi(&self.taxi);
        if self.driver.invincible && self.powers.invincible.is_active() {
            self.taxi.invincible = true;
        }
        let taxi_pos = self.taxi.pos;
        if let Some(passenger) = self
            .current_passenger
            .and_then(|id| passenger::by_id_mut(&mut self.passengers, id))
        {
            passenger.reboard();
            passenger.sync_with_taxi(taxi_pos);
        }
        tracing::debug!("driver boarded the taxi");
    }

    fn evaluate_status(&self, params: &Params) -> GameStatus {
        if self.frame >= params.max_frames {
            return GameStatus::Lost(LossReason::OutOfTime);
        }
        if self.taxi.pos.y() > params.window_height + self.taxi.radius {
            return GameStatus::Lost(LossReason::TaxiLeftRoad);
        }
        if self.score >= params.target_score {
            return GameStatus::Won;
        }
        if self.driver.is_dead() {
            return GameStatus::Lost(LossReason::DriverDied);
        }
        let passenger_dead = self
            .current_passenger
            .and_then(|id| self.passenger(id))
            .is_some_and(Passenger::is_dead);
        if passenger_dead {
            return GameStatus::Lost(LossReason::PassengerDied);
        }
        GameStatus::Playing
    }

    /// Saves the session to a JSON file.
    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads a session from a JSON file.
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let json = std::fs::read_to_string(path)?;
        let world = serde_json::from_str(&json)?;
        Ok(world)
    }
}
