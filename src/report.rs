use serde::Serialize;
use serde_json::Value;
use std::fmt;

use crate::Square;

/// Snapshot of a square's measurements, as printed by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurements {
    pub side: f64,
    pub perimeter: f64,
    pub area: f64,
}

impl Measurements {
    pub fn of(square: &Square) -> Self {
        Self {
            side: square.side(),
            perimeter: square.perimeter(),
            area: square.area(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

impl fmt::Display for Measurements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "side: {}", self.side)?;
        writeln!(f, "perimeter: {}", self.perimeter)?;
        write!(f, "area: {}", self.area)
    }
}
