use std::fmt;

use crate::{error::WeightingError, vehicle_profile::VehicleProfile};

/// Identity of a weighting: its cost model name and its vehicle.
///
/// Weightings with equal keys compute the same costs, which makes the key usable
/// to look up data prepared for a weighting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WeightingKey {
    name: String,
    vehicle: String,
    canonical: String,
}

impl WeightingKey {
    pub fn new(name: &str, vehicle: &VehicleProfile) -> Result<Self, WeightingError> {
        if !is_valid_name(name) {
            return Err(WeightingError::InvalidName(name.to_string()));
        }

        Ok(WeightingKey {
            name: name.to_string(),
            vehicle: vehicle.name().to_string(),
            canonical: format!("{}|{}", name, vehicle.name()),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vehicle(&self) -> &str {
        &self.vehicle
    }

    /// `name|vehicle`
    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    /// Lower-cased canonical form with `|` replaced by `_`
    pub fn file_name(&self) -> String {
        self.canonical.to_lowercase().replace('|', "_")
    }
}

impl fmt::Display for WeightingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c == '_' || c == '|')
}
