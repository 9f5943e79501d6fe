use crate::{
    ch::shortcut::Shortcut,
    constants::INVALID_EDGE,
    edge_direction::EdgeDirection,
    meters::Meters,
    properties::property::Property,
    types::{EdgeId, NodeId},
};

/// A directed traversal of an edge, read from its base node towards its adjacent node.
///
/// Property reads are relative to the traversal: `EdgeDirection::Forward` is the
/// direction base node -> adjacent node.
pub trait GraphEdge {
    fn edge_id(&self) -> EdgeId;
    fn base_node(&self) -> NodeId;
    fn adj_node(&self) -> NodeId;

    fn is_loop(&self) -> bool {
        self.base_node() == self.adj_node()
    }

    /// First edge of the uncontracted graph covered by this edge
    fn orig_edge_first(&self) -> EdgeId {
        self.edge_id()
    }

    /// Last edge of the uncontracted graph covered by this edge
    fn orig_edge_last(&self) -> EdgeId {
        self.edge_id()
    }

    fn distance(&self) -> Meters;

    fn get_bool(&self, property: &Property, direction: EdgeDirection) -> Option<bool>;
    fn get_f64(&self, property: &Property, direction: EdgeDirection) -> Option<f64>;

    /// Shortcut view of this edge, plain edges are never shortcuts
    fn as_shortcut(&self) -> Option<&Shortcut> {
        None
    }
}

impl<T: GraphEdge + ?Sized> GraphEdge for &T {
    fn edge_id(&self) -> EdgeId {
        (**self).edge_id()
    }

    fn base_node(&self) -> NodeId {
        (**self).base_node()
    }

    fn adj_node(&self) -> NodeId {
        (**self).adj_node()
    }

    fn orig_edge_first(&self) -> EdgeId {
        (**self).orig_edge_first()
    }

    fn orig_edge_last(&self) -> EdgeId {
        (**self).orig_edge_last()
    }

    fn distance(&self) -> Meters {
        (**self).distance()
    }

    fn get_bool(&self, property: &Property, direction: EdgeDirection) -> Option<bool> {
        (**self).get_bool(property, direction)
    }

    fn get_f64(&self, property: &Property, direction: EdgeDirection) -> Option<f64> {
        (**self).get_f64(property, direction)
    }

    fn as_shortcut(&self) -> Option<&Shortcut> {
        (**self).as_shortcut()
    }
}

pub fn is_valid_edge(edge_id: EdgeId) -> bool {
    edge_id != INVALID_EDGE
}
