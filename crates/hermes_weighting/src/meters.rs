use std::fmt;

use serde::{Deserialize, Serialize};

use crate::kmh::Kmh;

#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct Meters(f64);

impl Meters {
    pub fn new(value: f64) -> Self {
        Meters(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Unrounded travel time in seconds at the given speed
    pub fn travel_time_secs(&self, speed: Kmh) -> f64 {
        self.0 * 3.6 / speed.value()
    }

    /// Unrounded travel time in milliseconds at the given speed
    pub fn travel_time_ms(&self, speed: Kmh) -> f64 {
        self.0 * 3600.0 / speed.value()
    }
}

impl fmt::Display for Meters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} m", self.0)
    }
}
