use thiserror::Error;

use crate::{
    edge_direction::EdgeDirection,
    kmh::Kmh,
    meters::Meters,
    types::{EdgeId, NodeId},
};

#[derive(Error, Debug)]
pub enum WeightingError {
    #[error("Vehicle {0} must be added to an EncodingManager before it is used elsewhere")]
    UnregisteredVehicle(String),
    #[error("Not a valid name for a weighting: {0:?}")]
    InvalidName(String),
    #[error("Vehicle {0} is registered more than once")]
    DuplicateVehicle(String),
    #[error("Unknown vehicle {0}")]
    UnknownVehicle(String),
    #[error("Unknown weighting {0}")]
    UnknownWeighting(String),
    #[error(
        "Turn cost ({in_edge} -> {via_node} -> {out_edge}) must be finite and non-negative, was {weight}"
    )]
    InvalidTurnCost {
        in_edge: EdgeId,
        via_node: NodeId,
        out_edge: EdgeId,
        weight: f64,
    },
    #[error("U-turn cost must be finite and non-negative, was {0}")]
    InvalidUTurnCost(f64),
    #[error("Max speed of vehicle {vehicle} must be finite and positive, was {max_speed}")]
    InvalidMaxSpeed { vehicle: String, max_speed: Kmh },
    #[error(
        "Calculating time should not require to read speed from edge {edge_id} in wrong direction. ({base_node} - {adj_node}), distance: {distance}, direction: {direction:?}, fwd: {forward_access}, bwd: {backward_access}, fwd-speed: {forward_speed}, bwd-speed: {backward_speed}"
    )]
    WrongDirection {
        edge_id: EdgeId,
        base_node: NodeId,
        adj_node: NodeId,
        distance: Meters,
        direction: EdgeDirection,
        forward_access: bool,
        backward_access: bool,
        forward_speed: f64,
        backward_speed: f64,
    },
    #[error("Invalid speed stored in edge {edge_id} ({direction:?}): {speed}")]
    InvalidSpeed {
        edge_id: EdgeId,
        direction: EdgeDirection,
        speed: f64,
    },
    #[error(
        "Speed cannot be 0 for unblocked edge {edge_id} ({direction:?}), use access properties to mark the edge as blocked"
    )]
    ZeroSpeed {
        edge_id: EdgeId,
        direction: EdgeDirection,
    },
    #[error("Base edge can only be obtained for original edges, edge {0} is a shortcut")]
    NoBaseEdgeForShortcut(EdgeId),
    #[error("Skipped edges can only be obtained for shortcuts, edge {0} is not a shortcut")]
    NotAShortcut(EdgeId),
    #[error("Invalid profile configuration")]
    Config(#[from] serde_json::Error),
}
