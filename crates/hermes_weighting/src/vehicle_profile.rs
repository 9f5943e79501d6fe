use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{kmh::Kmh, properties::property::Property};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VehicleConfig {
    pub name: String,
    /// Highest speed stored for this vehicle, in km/h
    pub max_speed: f64,
}

/// A vehicle whose access and speed are stored on every edge.
///
/// A profile only becomes usable by weightings once an
/// [`EncodingManager`](crate::encoding_manager::EncodingManager) registered it.
#[derive(Debug, Clone)]
pub struct VehicleProfile {
    name: String,
    max_speed: Kmh,
    access: Property,
    speed: Property,
    registered: bool,
}

impl VehicleProfile {
    pub fn new(name: &str, max_speed: Kmh) -> Self {
        VehicleProfile {
            name: name.to_string(),
            max_speed,
            access: Property::VehicleAccess(name.to_string()),
            speed: Property::VehicleSpeed(name.to_string()),
            registered: false,
        }
    }

    pub fn from_config(config: &VehicleConfig) -> Self {
        VehicleProfile::new(&config.name, Kmh::new(config.max_speed))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_speed(&self) -> Kmh {
        self.max_speed
    }

    pub fn access_property(&self) -> &Property {
        &self.access
    }

    pub fn speed_property(&self) -> &Property {
        &self.speed
    }

    pub fn is_registered(&self) -> bool {
        self.registered
    }

    pub(crate) fn into_registered(mut self) -> Self {
        self.registered = true;
        self
    }
}

impl fmt::Display for VehicleProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
