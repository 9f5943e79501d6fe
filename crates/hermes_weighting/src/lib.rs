pub mod base_edge;
pub mod ch;
pub mod constants;
pub mod edge_direction;
pub mod encoding_manager;
pub mod error;
pub mod graph_edge;
pub mod kmh;
pub mod meters;
pub mod properties;
pub mod turn_cost;
pub mod types;
pub mod vehicle_profile;
pub mod weighting;

#[cfg(test)]
pub(crate) mod test_utils;
