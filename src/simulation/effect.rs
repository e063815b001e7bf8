//! Short-lived smoke and fire sprites.

use geo::Point;
use serde::{Deserialize, Serialize};

use super::params::Params;

/// Visual effect variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    /// Puff shown on impact.
    Smoke,
    /// Flames where a car was destroyed.
    Fire,
}

/// A visual-only effect that drifts down and fades out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Effect {
    /// Smoke or fire.
    pub kind: EffectKind,
    /// Current position.
    pub pos: Point<f64>,
    ttl: u32,
    drift_y: f64,
}

impl Effect {
    /// Creates an effect with the configured lifetime.
    pub fn new(kind: EffectKind, pos: Point<f64>, params: &Params) -> Self {
        let effect = match kind {
            EffectKind::Smoke => &params.smoke,
            EffectKind::Fire => &params.fire,
        };
        Self {
            kind,
            pos,
            ttl: effect.ttl,
            drift_y: effect.drift_y,
        }
    }

    /// `true` while the effect should be drawn.
    pub fn is_visible(&self) -> bool {
        self.ttl > 0
    }

    /// Drifts and ages the effect by one tick.
    pub fn update(&mut self) {
        if self.ttl > 0 {
            self.pos.set_y(self.pos.y() + self.drift_y);
            self.ttl -= 1;
        }
    }

    /// Moves the effect with the scrolling road.
    pub fn move_down(&mut self, speed: f64) {
        self.pos.set_y(self.pos.y() + speed);
    }
}
