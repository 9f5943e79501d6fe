#[derive(Eq, Hash, PartialEq, Clone, Debug)]
pub enum Property {
    /// Whether a vehicle may travel along the edge
    VehicleAccess(String),
    /// Average speed of a vehicle along the edge, in km/h
    VehicleSpeed(String),
}

impl Property {
    pub fn as_string(&self) -> String {
        match self {
            Property::VehicleAccess(vehicle) => format!("{}_access", vehicle),
            Property::VehicleSpeed(vehicle) => format!("{}_average_speed", vehicle),
        }
    }
}
