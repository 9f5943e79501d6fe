use serde::{Deserialize, Serialize};

use super::weighting_key::WeightingKey;

/// Weighting and vehicle requested by a routing request. Empty values match anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RequestHints {
    pub weighting: String,
    pub vehicle: String,
}

impl RequestHints {
    pub fn new(weighting: &str, vehicle: &str) -> Self {
        RequestHints {
            weighting: weighting.to_string(),
            vehicle: vehicle.to_string(),
        }
    }

    pub fn matches(&self, key: &WeightingKey) -> bool {
        (self.weighting.is_empty() || self.weighting == key.name())
            && (self.vehicle.is_empty() || self.vehicle == key.vehicle())
    }
}
