//! World layout: the entities a session starts with.
//!
//! The layout file holds one comma-separated record per line:
//!
//! ```text
//! TAXI,x,y
//! DRIVER,x,y
//! PASSENGER,x,y,priority,endX,yDistance,hasUmbrella
//! COIN,x,y
//! INVINCIBLE_POWER,x,y
//! ```

use geo::Point;
use serde::{Deserialize, Serialize};

use super::collision::PickupKind;
use super::error::LayoutError;
use super::passenger::PassengerProfile;

/// One entity to place at session start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SpawnRecord {
    /// The starting taxi.
    Taxi(Point<f64>),
    /// The driver (always starts inside the taxi).
    Driver(Point<f64>),
    /// A waiting passenger.
    Passenger {
        /// Where the passenger waits.
        pos: Point<f64>,
        /// Trip details.
        profile: PassengerProfile,
    },
    /// A collectible.
    Pickup {
        /// Coin or invincibility.
        kind: PickupKind,
        /// Where it lies.
        pos: Point<f64>,
    },
}

/// Ordered spawn records for a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldLayout {
    /// Records in file order.
    pub records: Vec<SpawnRecord>,
}

impl WorldLayout {
    /// Reads and parses a layout file.
    pub fn load_from_file(path: &str) -> Result<Self, LayoutError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parses layout text; blank lines are skipped.
    ///
    /// Fails on unknown record types, missing or unparseable fields, and
    /// layouts without a taxi.
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        let mut records = Vec::new();
        for (idx, raw) in text.lines().enumerate() {
            let raw = raw.trim();
            if raw.is_empty() {
                continue;
            }
            let fields = Fields {
                line: idx + 1,
                values: raw.split(',').map(str::trim).collect(),
            };
            let kind = fields.values[0];
            if !RECORD_KINDS.contains(&kind) {
                return Err(LayoutError::UnknownRecord {
                    line: fields.line,
                    kind: kind.to_string(),
                });
            }
            let pos = Point::new(fields.f64(1, "x")?, fields.f64(2, "y")?);
            let record = match kind {
                "TAXI" => SpawnRecord::Taxi(pos),
                "DRIVER" => SpawnRecord::Driver(pos),
                "PASSENGER" => SpawnRecord::Passenger {
                    pos,
                    profile: PassengerProfile {
                        priority: fields.priority(3)?,
                        end_x: fields.f64(4, "endX")?,
                        y_distance: fields.f64(5, "yDistance")?,
                        has_umbrella: fields.flag(6, "hasUmbrella")?,
                    },
                },
                "COIN" => SpawnRecord::Pickup {
                    kind: PickupKind::Coin,
                    pos,
                },
                _ => SpawnRecord::Pickup {
                    kind: PickupKind::InvinciblePower,
                    pos,
                },
            };
            records.push(record);
        }

        let layout = Self { records };
        layout.taxi_pos()?;
        Ok(layout)
    }

    /// Position of the first taxi record.
    pub fn taxi_pos(&self) -> Result<Point<f64>, LayoutError> {
        self.records
            .iter()
            .find_map(|record| match record {
                SpawnRecord::Taxi(pos) => Some(*pos),
                _ => None,
            })
            .ok_or(LayoutError::MissingTaxi)
    }
}

const RECORD_KINDS: [&str; 5] = ["TAXI", "DRIVER", "PASSENGER", "COIN", "INVINCIBLE_POWER"];

struct Fields<'a> {
    line: usize,
    values: Vec<&'a str>,
}

impl Fields<'_> {
    fn raw(&self, index: usize, field: &'static str) -> Result<&str, LayoutError> {
        self.values
            .get(index)
            .copied()
            .ok_or(self.malformed(field))
    }

    fn f64(&self, index: usize, field: &'static str) -> Result<f64, LayoutError> {
        self.raw(index, field)?
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or(self.malformed(field))
    }

    fn priority(&self, index: usize) -> Result<u8, LayoutError> {
        self.raw(index, "priority")?
            .parse::<u8>()
            .ok()
            .filter(|p| (1..=3).contains(p))
            .ok_or(self.malformed("priority"))
    }

    fn flag(&self, index: usize, field: &'static str) -> Result<bool, LayoutError> {
        match self.raw(index, field)? {
            "0" => Ok(false),
            "1" => Ok(true),
            _ => Err(self.malformed(field)),
        }
    }

    fn malformed(&self, field: &'static str) -> LayoutError {
        LayoutError::MalformedField {
            line: self.line,
            field,
        }
    }
}
