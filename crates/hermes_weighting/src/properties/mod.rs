pub mod property;
pub mod property_map;
