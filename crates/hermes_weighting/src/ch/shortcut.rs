use crate::{
    edge_direction::EdgeDirection,
    graph_edge::GraphEdge,
    meters::Meters,
    properties::property::Property,
    types::{EdgeId, NodeId},
    weighting::Weight,
};

/// Edge added by the contraction of a node, replacing two edges that go through it
#[derive(Debug, Clone, PartialEq)]
pub struct Shortcut {
    pub id: EdgeId,
    pub start: NodeId,
    pub end: NodeId,

    /// Skipped edge incoming to the contracted node
    pub incoming_edge: EdgeId,

    /// Skipped edge outgoing from the contracted node
    pub outgoing_edge: EdgeId,

    pub orig_edge_first: EdgeId,
    pub orig_edge_last: EdgeId,

    pub distance: Meters,

    /// Includes the turn cost at the contracted node
    pub weight: Weight,
}

impl GraphEdge for Shortcut {
    fn edge_id(&self) -> EdgeId {
        self.id
    }

    fn base_node(&self) -> NodeId {
        self.start
    }

    fn adj_node(&self) -> NodeId {
        self.end
    }

    fn orig_edge_first(&self) -> EdgeId {
        self.orig_edge_first
    }

    fn orig_edge_last(&self) -> EdgeId {
        self.orig_edge_last
    }

    fn distance(&self) -> Meters {
        self.distance
    }

    // Shortcuts carry no vehicle properties
    fn get_bool(&self, _property: &Property, _direction: EdgeDirection) -> Option<bool> {
        None
    }

    fn get_f64(&self, _property: &Property, _direction: EdgeDirection) -> Option<f64> {
        None
    }

    fn as_shortcut(&self) -> Option<&Shortcut> {
        Some(self)
    }
}
