//! Staged structural changes to the world.
//!
//! The collision pass and the spawner never grow or shrink the entity lists
//! they are iterating. They push [`WorldEvent`]s instead, and
//! [`apply_events`] commits them serially once the pass is over.

use geo::Point;

use super::car::{Car, CarKind};
use super::effect::{Effect, EffectKind};
use super::event_log::EventColor;
use super::fireball::Fireball;
use super::params::Params;
use super::world::World;

/// Structural changes queued during a tick.
#[derive(Debug, Clone, PartialEq)]
pub enum WorldEvent {
    /// Show a smoke puff.
    SmokeSpawned {
        /// Where the impact happened.
        pos: Point<f64>,
    },
    /// Show fire where something was destroyed.
    FireSpawned {
        /// Position of the destroyed entity before it was hit.
        pos: Point<f64>,
    },
    /// The taxi was destroyed: leave a wreck and bring in a new taxi.
    TaxiWrecked {
        /// Where the wreck stays.
        wreck_pos: Point<f64>,
        /// Where the replacement taxi appears.
        respawn_pos: Point<f64>,
    },
    /// Add a traffic car.
    CarSpawned {
        /// `EnemyCar` or `OtherCar`.
        kind: CarKind,
        /// Spawn position.
        pos: Point<f64>,
        /// Upward drift per tick.
        speed_y: f64,
    },
    /// An enemy car shot.
    FireballLaunched {
        /// Launch position.
        pos: Point<f64>,
        /// ID of the shooter.
        owner_id: usize,
    },
}

/// Queue for collecting world events during a tick.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<WorldEvent>,
}

impl EventQueue {
    /// Creates an empty event queue.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Adds an event to the queue.
    pub fn push(&mut self, event: WorldEvent) {
        self.events.push(event);
    }

    /// Number of queued events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// `true` if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Queued events in push order.
    pub fn events(&self) -> &[WorldEvent] {
        &self.events
    }

    /// Drains all events from the queue.
    pub fn drain(&mut self) -> std::vec::Drain<'_, WorldEvent> {
        self.events.drain(..)
    }
}

/// Applies all queued events to the world, then prunes destroyed traffic,
/// spent effects and fireballs, and anything far off the road.
pub fn apply_events(world: &mut World, params: &Params, mut queue: EventQueue) {
    for event in queue.drain() {
        match event {
            WorldEvent::SmokeSpawned { pos } => {
                world.effects.push(Effect::new(EffectKind::Smoke, pos, params));
            }
            WorldEvent::FireSpawned { pos } => {
                world.effects.push(Effect::new(EffectKind::Fire, pos, params));
            }
            WorldEvent::TaxiWrecked {
                wreck_pos,
                respawn_pos,
            } => {
                let wreck_id = world.next_id();
                world.wrecks.push(Car::wreck(wreck_id, wreck_pos, params));
                let taxi_id = world.next_id();
                world.taxi = Car::taxi(taxi_id, respawn_pos, params);
                world.effects.push(Effect::new(EffectKind::Fire, wreck_pos, params));
                tracing::info!(
                    x = respawn_pos.x(),
                    y = respawn_pos.y(),
                    "taxi wrecked, replacement spawned"
                );
                let frame = world.frame;
                world.event_log.log(
                    frame,
                    "Taxi wrecked, a new one is waiting".to_string(),
                    EventColor::Wreck,
                );
            }
            WorldEvent::CarSpawned { kind, pos, speed_y } => {
                let id = world.next_id();
                world.cars.push(Car::traffic(id, kind, pos, speed_y, params));
                tracing::debug!(id, ?kind, x = pos.x(), y = pos.y(), "car spawned");
            }
            WorldEvent::FireballLaunched { pos, owner_id } => {
                world.fireballs.push(Fireball::new(pos, owner_id, params));
                tracing::debug!(owner = owner_id, "fireball launched");
            }
        }
    }

    world
        .cars
        .retain(|car| !car.is_destroyed() && !is_far_off_road(car.pos.y(), params));
    world
        .fireballs
        .retain(|fireball| fireball.is_alive() && !is_far_off_road(fireball.pos.y(), params));
    world.effects.retain(Effect::is_visible);
}

/// More than a window height beyond the traffic spawn rows. Scrolling can
/// still bring back anything closer than that.
pub fn is_far_off_road(y: f64, params: &Params) -> bool {
    let margin = params.window_height;
    y < params.spawn.top_y - margin || y > params.spawn.bottom_y + margin
}
