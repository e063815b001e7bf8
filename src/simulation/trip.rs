//! Trip ledger: what a ride is worth, and the drop-off flag that ends it.
//!
//! A [`Trip`] is opened when a passenger boards. Its expected earnings follow
//! the passenger's priority while the ride lasts and are settled exactly once
//! at drop-off, minus a penalty for overshooting the flag.

use geo::Point;
use serde::{Deserialize, Serialize};

use super::locatable::Locatable;

/// Fare and penalty rates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TripRates {
    /// Earnings per unit of vertical distance travelled.
    pub rate_per_y: f64,
    /// Bonus rate for priority 1.
    pub priority1: f64,
    /// Bonus rate for priority 2.
    pub priority2: f64,
    /// Bonus rate for priority 3.
    pub priority3: f64,
    /// Penalty per unit of overshoot past the flag.
    pub penalty_per_y: f64,
}

impl TripRates {
    /// Bonus rate for a priority tier; tiers outside 1-3 earn nothing.
    pub fn priority_rate(&self, priority: u8) -> f64 {
        match priority {
            1 => self.priority1,
            2 => self.priority2,
            3 => self.priority3,
            _ => 0.0,
        }
    }
}

/// Expected earnings for a trip.
///
/// # Arguments
///
/// * `y_distance` - Vertical distance between pickup and flag
/// * `priority` - Passenger priority tier
/// * `rates` - Configured fare rates
///
/// # Returns
///
/// `y_distance * rate_per_y + priority * priority_rate(priority)`
pub fn calculate_earnings(y_distance: f64, priority: u8, rates: &TripRates) -> f64 {
    y_distance * rates.rate_per_y + f64::from(priority) * rates.priority_rate(priority)
}

/// Drop-off marker for one passenger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripEndFlag {
    /// Passenger this flag belongs to.
    pub passenger_id: usize,
    /// Flag position.
    pub pos: Point<f64>,
    /// Arrival radius.
    pub radius: f64,
}

impl TripEndFlag {
    /// Creates a flag for `passenger_id`.
    pub fn new(passenger_id: usize, pos: Point<f64>, radius: f64) -> Self {
        Self {
            passenger_id,
            pos,
            radius,
        }
    }

    /// The taxi counts as arrived when it is within the flag radius or
    /// has already driven past it.
    pub fn is_reached_by(&self, taxi_pos: Point<f64>) -> bool {
        self.distance_to(taxi_pos) <= self.radius || taxi_pos.y() < self.pos.y()
    }
}

impl Locatable for TripEndFlag {
    fn pos(&self) -> Point<f64> {
        self.pos
    }

    fn pos_mut(&mut self) -> &mut Point<f64> {
        &mut self.pos
    }

    fn radius(&self) -> f64 {
        self.radius
    }
}

/// Economic record of one ride.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    /// Passenger being carried.
    pub passenger_id: usize,
    /// Vertical distance between pickup and flag.
    pub y_distance: f64,
    earnings: f64,
    penalty: f64,
    profit: f64,
    completed: bool,
}

impl Trip {
    /// Opens a trip with earnings for the passenger's current priority.
    pub fn new(passenger_id: usize, y_distance: f64, priority: u8, rates: &TripRates) -> Self {
        Self {
            passenger_id,
            y_distance,
            earnings: calculate_earnings(y_distance, priority, rates),
            penalty: 0.0,
            profit: 0.0,
            completed: false,
        }
    }

    /// Expected earnings.
    pub fn earnings(&self) -> f64 {
        self.earnings
    }

    /// Overshoot penalty, zero until completion.
    pub fn penalty(&self) -> f64 {
        self.penalty
    }

    /// Settled profit, zero until completion.
    pub fn profit(&self) -> f64 {
        self.profit
    }

    /// `true` once the trip has been settled.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Recomputes earnings after a priority change. No-op once completed.
    pub fn update_earnings(&mut self, priority: u8, rates: &TripRates) {
        if !self.completed {
            self.earnings = calculate_earnings(self.y_distance, priority, rates);
        }
    }

    /// Settles the trip at drop-off.
    ///
    /// A penalty of `distance * penalty_per_y` applies when the taxi is
    /// above the flag (smaller Y) and has reached it.
    ///
    /// # Returns
    ///
    /// The profit to add to the score, or `None` if the trip was already
    /// settled.
    pub fn complete(
        &mut self,
        taxi_pos: Point<f64>,
        flag: &TripEndFlag,
        rates: &TripRates,
    ) -> Option<f64> {
        if self.completed {
            return None;
        }

        self.penalty = if taxi_pos.y() < flag.pos.y() && flag.is_reached_by(taxi_pos) {
            flag.distance_to(taxi_pos) * rates.penalty_per_y
        } else {
            0.0
        };
        self.profit = (self.earnings - self.penalty).max(0.0);
        self.completed = true;

        tracing::debug!(
            passenger = self.passenger_id,
            earnings = self.earnings,
            penalty = self.penalty,
            profit = self.profit,
            "trip completed"
        );
        Some(self.profit)
    }
}
