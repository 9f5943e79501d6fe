use std::sync::Arc;

use fxhash::FxHashSet;
use tracing::debug;

use crate::{
    error::WeightingError,
    vehicle_profile::{VehicleConfig, VehicleProfile},
};

/// Registry of the vehicles whose properties are stored in the graph
#[derive(Debug, Default)]
pub struct EncodingManager {
    vehicles: Vec<Arc<VehicleProfile>>,
}

impl EncodingManager {
    pub fn new(vehicles: Vec<VehicleProfile>) -> Result<Self, WeightingError> {
        let mut names = FxHashSet::default();
        for vehicle in vehicles.iter() {
            let max_speed = vehicle.max_speed();
            if !max_speed.value().is_finite() || max_speed.value() <= 0.0 {
                return Err(WeightingError::InvalidMaxSpeed {
                    vehicle: vehicle.name().to_string(),
                    max_speed,
                });
            }

            if !names.insert(vehicle.name().to_string()) {
                return Err(WeightingError::DuplicateVehicle(vehicle.name().to_string()));
            }
        }

        let vehicles: Vec<Arc<VehicleProfile>> = vehicles
            .into_iter()
            .map(|vehicle| Arc::new(vehicle.into_registered()))
            .collect();

        debug!("Created encoding manager with {} vehicles", vehicles.len());

        Ok(EncodingManager { vehicles })
    }

    pub fn from_configs(configs: &[VehicleConfig]) -> Result<Self, WeightingError> {
        EncodingManager::new(configs.iter().map(VehicleProfile::from_config).collect())
    }

    pub fn vehicle(&self, name: &str) -> Result<Arc<VehicleProfile>, WeightingError> {
        self.vehicles
            .iter()
            .find(|vehicle| vehicle.name() == name)
            .cloned()
            .ok_or_else(|| WeightingError::UnknownVehicle(name.to_string()))
    }

    pub fn has_vehicle(&self, name: &str) -> bool {
        self.vehicles.iter().any(|vehicle| vehicle.name() == name)
    }

    pub fn vehicles(&self) -> &[Arc<VehicleProfile>] {
        &self.vehicles
    }
}
