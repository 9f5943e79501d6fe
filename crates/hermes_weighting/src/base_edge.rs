use crate::{
    edge_direction::EdgeDirection,
    graph_edge::GraphEdge,
    meters::Meters,
    properties::{property::Property, property_map::EdgePropertyMap},
    types::{EdgeId, NodeId},
};

/// An edge as stored in the base graph, from `start_node` to `end_node`
#[derive(Debug, Clone)]
pub struct BaseEdge {
    id: EdgeId,
    start_node: NodeId,
    end_node: NodeId,
    distance: Meters,
    pub properties: EdgePropertyMap,
}

impl BaseEdge {
    pub fn new(
        id: EdgeId,
        start_node: NodeId,
        end_node: NodeId,
        distance: Meters,
        properties: EdgePropertyMap,
    ) -> Self {
        BaseEdge {
            id,
            start_node,
            end_node,
            distance,
            properties,
        }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn start_node(&self) -> NodeId {
        self.start_node
    }

    pub fn end_node(&self) -> NodeId {
        self.end_node
    }

    pub fn distance(&self) -> Meters {
        self.distance
    }

    pub fn forward(&self) -> EdgeTraversal<'_> {
        EdgeTraversal::new(self, EdgeDirection::Forward)
    }

    pub fn backward(&self) -> EdgeTraversal<'_> {
        EdgeTraversal::new(self, EdgeDirection::Backward)
    }

    /// Traversal of this edge starting at `node`, `None` if `node` is not one of its ends
    pub fn traverse_from(&self, node: NodeId) -> Option<EdgeTraversal<'_>> {
        if self.start_node == node {
            Some(self.forward())
        } else if self.end_node == node {
            Some(self.backward())
        } else {
            None
        }
    }
}

/// A stored edge read either from its start node (`Forward`) or from its end node (`Backward`)
#[derive(Debug, Clone, Copy)]
pub struct EdgeTraversal<'a> {
    edge: &'a BaseEdge,
    direction: EdgeDirection,
}

impl<'a> EdgeTraversal<'a> {
    pub fn new(edge: &'a BaseEdge, direction: EdgeDirection) -> Self {
        EdgeTraversal { edge, direction }
    }

    pub fn edge(&self) -> &'a BaseEdge {
        self.edge
    }

    pub fn direction(&self) -> EdgeDirection {
        self.direction
    }

    fn stored_direction(&self, direction: EdgeDirection) -> EdgeDirection {
        match self.direction {
            EdgeDirection::Forward => direction,
            EdgeDirection::Backward => direction.opposite(),
        }
    }
}

impl GraphEdge for EdgeTraversal<'_> {
    fn edge_id(&self) -> EdgeId {
        self.edge.id
    }

    fn base_node(&self) -> NodeId {
        match self.direction {
            EdgeDirection::Forward => self.edge.start_node,
            EdgeDirection::Backward => self.edge.end_node,
        }
    }

    fn adj_node(&self) -> NodeId {
        match self.direction {
            EdgeDirection::Forward => self.edge.end_node,
            EdgeDirection::Backward => self.edge.start_node,
        }
    }

    fn distance(&self) -> Meters {
        self.edge.distance
    }

    fn get_bool(&self, property: &Property, direction: EdgeDirection) -> Option<bool> {
        self.edge
            .properties
            .get_bool(property, self.stored_direction(direction))
    }

    fn get_f64(&self, property: &Property, direction: EdgeDirection) -> Option<f64> {
        self.edge
            .properties
            .get_f64(property, self.stored_direction(direction))
    }
}
