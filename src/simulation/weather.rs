//! Weather schedule read from a `CONDITION,start,end` file.

use serde::{Deserialize, Serialize};

use super::error::LayoutError;

/// Weather conditions the schedule can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherCondition {
    /// Dry road.
    Sunny,
    /// Passengers without umbrellas drop to priority 1.
    Raining,
}

/// One scheduled weather period, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherPeriod {
    /// Condition during the period.
    pub condition: WeatherCondition,
    /// First tick of the period.
    pub start: u32,
    /// Last tick of the period.
    pub end: u32,
}

/// Ordered weather periods and a cursor into them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeatherSchedule {
    periods: Vec<WeatherPeriod>,
    index: usize,
    raining: bool,
}

impl WeatherSchedule {
    /// Builds a schedule from periods in chronological order.
    pub fn new(periods: Vec<WeatherPeriod>) -> Self {
        Self {
            periods,
            index: 0,
            raining: false,
        }
    }

    /// Reads and parses a schedule file.
    pub fn load_from_file(path: &str) -> Result<Self, LayoutError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parses `SUNNY|RAINING,start,end` lines; blank lines are skipped.
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        let mut periods = Vec::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            let raw = raw.trim();
            if raw.is_empty() {
                continue;
            }
            let fields: Vec<&str> = raw.split(',').map(str::trim).collect();
            let condition = match fields[0] {
                "SUNNY" => WeatherCondition::Sunny,
                "RAINING" => WeatherCondition::Raining,
                other => {
                    return Err(LayoutError::UnknownRecord {
                        line,
                        kind: other.to_string(),
                    });
                }
            };
            let start = parse_tick(&fields, 1, line, "start")?;
            let end = parse_tick(&fields, 2, line, "end")?;
            periods.push(WeatherPeriod {
                condition,
                start,
                end,
            });
        }
        Ok(Self::new(periods))
    }

    /// `true` while the active period is rainy.
    pub fn is_raining(&self) -> bool {
        self.raining
    }

    /// Scheduled periods.
    pub fn periods(&self) -> &[WeatherPeriod] {
        &self.periods
    }

    /// Advances the schedule to `frame`.
    ///
    /// Inside the current period the condition is applied; once the frame is
    /// past its end the cursor moves to the next period on the following
    /// tick.
    ///
    /// # Returns
    ///
    /// `true` if the raining flag changed.
    pub fn update(&mut self, frame: u32) -> bool {
        let was_raining = self.raining;
        if let Some(period) = self.periods.get(self.index) {
            if (period.start..=period.end).contains(&frame) {
                self.raining = period.condition == WeatherCondition::Raining;
            } else if frame > period.end {
                self.index += 1;
            }
        }
        was_raining != self.raining
    }
}

fn parse_tick(
    fields: &[&str],
    index: usize,
    line: usize,
    field: &'static str,
) -> Result<u32, LayoutError> {
    fields
        .get(index)
        .and_then(|raw| raw.parse().ok())
        .ok_or(LayoutError::MalformedField { line, field })
}
