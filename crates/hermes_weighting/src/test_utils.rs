use std::{cell::RefCell, sync::Arc};

use crate::{
    base_edge::BaseEdge,
    ch::shortcut::Shortcut,
    edge_direction::EdgeDirection,
    encoding_manager::EncodingManager,
    graph_edge::GraphEdge,
    kmh::Kmh,
    meters::Meters,
    properties::{property::Property, property_map::EdgePropertyMap},
    turn_cost::TurnCostProvider,
    types::{EdgeId, NodeId},
    vehicle_profile::VehicleProfile,
    weighting::{Milliseconds, Weight, fastest_weighting::FastestWeighting},
};

fn encoding_manager() -> EncodingManager {
    EncodingManager::new(vec![
        VehicleProfile::new("car", Kmh::new(140.0)),
        VehicleProfile::new("bike", Kmh::new(30.0)),
    ])
    .unwrap()
}

pub fn car() -> Arc<VehicleProfile> {
    encoding_manager().vehicle("car").unwrap()
}

pub fn bike() -> Arc<VehicleProfile> {
    encoding_manager().vehicle("bike").unwrap()
}

pub fn fastest(vehicle: Arc<VehicleProfile>) -> FastestWeighting {
    FastestWeighting::new(vehicle).unwrap()
}

pub fn car_access() -> Property {
    Property::VehicleAccess("car".to_string())
}

pub fn car_speed() -> Property {
    Property::VehicleSpeed("car".to_string())
}

/// Car edge, accessible in every direction with a non-zero speed
pub fn edge(
    id: EdgeId,
    start: NodeId,
    end: NodeId,
    distance: f64,
    forward_speed: f64,
    backward_speed: f64,
) -> BaseEdge {
    edge_with_access(
        id,
        start,
        end,
        distance,
        (forward_speed > 0.0, forward_speed),
        (backward_speed > 0.0, backward_speed),
    )
}

/// Car edge with explicit (access, speed) per direction
pub fn edge_with_access(
    id: EdgeId,
    start: NodeId,
    end: NodeId,
    distance: f64,
    forward: (bool, f64),
    backward: (bool, f64),
) -> BaseEdge {
    let mut properties = EdgePropertyMap::new();
    properties.insert_bool(car_access(), EdgeDirection::Forward, forward.0);
    properties.insert_f64(car_speed(), EdgeDirection::Forward, forward.1);
    properties.insert_bool(car_access(), EdgeDirection::Backward, backward.0);
    properties.insert_f64(car_speed(), EdgeDirection::Backward, backward.1);

    BaseEdge::new(id, start, end, Meters::new(distance), properties)
}

pub fn shortcut(
    id: EdgeId,
    start: NodeId,
    end: NodeId,
    incoming_edge: EdgeId,
    outgoing_edge: EdgeId,
    weight: Weight,
) -> Shortcut {
    Shortcut {
        id,
        start,
        end,
        incoming_edge,
        outgoing_edge,
        orig_edge_first: incoming_edge,
        orig_edge_last: outgoing_edge,
        distance: Meters::new(1000.0),
        weight,
    }
}

/// Forward traversal of a base edge that reports its own original edges
pub struct TestEdge {
    edge: BaseEdge,
    orig_edge_first: EdgeId,
    orig_edge_last: EdgeId,
}

impl TestEdge {
    pub fn new(edge: BaseEdge, orig_edge_first: EdgeId, orig_edge_last: EdgeId) -> Self {
        TestEdge {
            edge,
            orig_edge_first,
            orig_edge_last,
        }
    }
}

impl GraphEdge for TestEdge {
    fn edge_id(&self) -> EdgeId {
        self.edge.id()
    }

    fn base_node(&self) -> NodeId {
        self.edge.start_node()
    }

    fn adj_node(&self) -> NodeId {
        self.edge.end_node()
    }

    fn orig_edge_first(&self) -> EdgeId {
        self.orig_edge_first
    }

    fn orig_edge_last(&self) -> EdgeId {
        self.orig_edge_last
    }

    fn distance(&self) -> Meters {
        self.edge.distance()
    }

    fn get_bool(&self, property: &Property, direction: EdgeDirection) -> Option<bool> {
        self.edge.forward().get_bool(property, direction)
    }

    fn get_f64(&self, property: &Property, direction: EdgeDirection) -> Option<f64> {
        self.edge.forward().get_f64(property, direction)
    }
}

/// Same cost for every turn
pub struct FixedTurnCostProvider {
    weight: Weight,
    ms: Milliseconds,
}

impl FixedTurnCostProvider {
    pub fn new(weight: Weight, ms: Milliseconds) -> Self {
        FixedTurnCostProvider { weight, ms }
    }
}

impl TurnCostProvider for FixedTurnCostProvider {
    fn calc_turn_weight(&self, _in_edge: EdgeId, _via_node: NodeId, _out_edge: EdgeId) -> Weight {
        self.weight
    }

    fn calc_turn_ms(&self, _in_edge: EdgeId, _via_node: NodeId, _out_edge: EdgeId) -> Milliseconds {
        self.ms
    }
}

/// Fixed costs, remembering every turn it was asked about
pub struct RecordingTurnCostProvider {
    weight: Weight,
    ms: Milliseconds,
    calls: RefCell<Vec<(EdgeId, NodeId, EdgeId)>>,
}

impl RecordingTurnCostProvider {
    pub fn new(weight: Weight, ms: Milliseconds) -> Self {
        RecordingTurnCostProvider {
            weight,
            ms,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(EdgeId, NodeId, EdgeId)> {
        self.calls.borrow().clone()
    }
}

impl TurnCostProvider for RecordingTurnCostProvider {
    fn calc_turn_weight(&self, in_edge: EdgeId, via_node: NodeId, out_edge: EdgeId) -> Weight {
        self.calls.borrow_mut().push((in_edge, via_node, out_edge));
        self.weight
    }

    fn calc_turn_ms(&self, in_edge: EdgeId, via_node: NodeId, out_edge: EdgeId) -> Milliseconds {
        self.calls.borrow_mut().push((in_edge, via_node, out_edge));
        self.ms
    }
}
