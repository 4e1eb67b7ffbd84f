use log::debug;

use crate::{
    config::PERIMETER_FACTOR,
    error::{Result, SquareError},
};

/// A square described by the length of its side.
///
/// Perimeter and area are derived on every call and never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    side: f64,
}

impl Square {
    /// Creates a square storing `side` verbatim, without validation.
    pub fn new(side: f64) -> Self {
        Self { side }
    }

    /// Creates a square, rejecting negative and non-finite sides.
    pub fn try_new(side: f64) -> Result<Self> {
        let reason = if !side.is_finite() {
            Some("side length must be finite")
        } else if side < 0.0 {
            Some("side length must not be negative")
        } else {
            None
        };

        if let Some(reason) = reason {
            debug!("Rejecting square with side {}: {}", side, reason);
            return Err(SquareError::InvalidArgument { side, reason });
        }

        Ok(Self::new(side))
    }

    pub fn side(&self) -> f64 {
        self.side
    }

    pub fn perimeter(&self) -> f64 {
        self.side * PERIMETER_FACTOR
    }

    pub fn area(&self) -> f64 {
        self.side * self.side
    }
}
