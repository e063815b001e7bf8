//! # Taxi Rush - Arcade Taxi Collision and Trip Engine
//!
//! A top-down driving game: the player steers a taxi through traffic, picks
//! up passengers and drops them at their flags for a fare, while dodging
//! enemy fireballs and surviving crashes on foot.
//!
//! ## Features
//!
//! - Circle-based collision detection with per-entity reactions
//! - Invincibility windows and bounce displacement after impacts
//! - Taxi wrecks, driver ejection and taxi respawn
//! - Passenger lifecycle with weather- and coin-driven priority
//! - Trip earnings, overshoot penalty and profit
//! - Coin and invincibility power-ups
//! - Deterministic ticks from a caller-supplied RNG
//! - Save/load session snapshots and a score leaderboard
//!
//! ## Core Modules
//!
//! - [`simulation::world`] - Session state and the per-tick update
//! - [`simulation::collisions`] - The per-tick collision pass
//! - [`simulation::car`] - Taxi and traffic state machine
//! - [`simulation::passenger`] - Passenger lifecycle
//! - [`simulation::trip`] - Trip earnings and drop-off flags
//! - [`simulation::events`] - Staged structural changes

/// Core simulation logic and data structures.
pub mod simulation {
    /// Vehicle state machine: health, hit window, bounce, destruction.
    pub mod car;
    /// Collision capability and the entity kinds it dispatches on.
    pub mod collision;
    /// Per-tick collision pass.
    pub mod collisions;
    /// The player avatar.
    pub mod driver;
    /// Smoke and fire effects.
    pub mod effect;
    /// Startup error types.
    pub mod error;
    /// Recent gameplay events for on-screen display.
    pub mod event_log;
    /// Event queue for staged world updates.
    pub mod events;
    /// Projectiles launched by enemy cars.
    pub mod fireball;
    /// Geometric utility functions for distance calculations.
    pub mod geometric_utils;
    /// Player input.
    pub mod input;
    /// World layout parsing.
    pub mod layout;
    /// High-score file.
    pub mod leaderboard;
    /// Trait for entities with a position and radius.
    ///
    /// The [`locatable::Locatable`] trait is implemented by every entity that
    /// sits on the road and scrolls with it (cars, driver, passengers,
    /// fireballs, pickups, flags).
    pub mod locatable;
    /// Game parameters.
    pub mod params;
    /// Passenger lifecycle and priority.
    pub mod passenger;
    /// Power-up pickups and timers.
    pub mod power_up;
    /// Render hints and HUD summary.
    pub mod render;
    /// Random traffic, fireballs and taxi respawns.
    pub mod spawner;
    /// Hit window and bounce countdowns.
    pub mod timers;
    /// Trip ledger and drop-off flags.
    pub mod trip;
    /// Weather schedule.
    pub mod weather;
    /// Session state and the per-tick update.
    pub mod world;
}
