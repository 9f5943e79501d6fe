use crate::{
    constants::INVALID_EDGE,
    edge_direction::EdgeDirection,
    error::WeightingError,
    graph_edge::GraphEdge,
    types::{EdgeId, NodeId},
    weighting::{Weight, Weighting},
};

/// Uniform view of a base graph edge or a shortcut for the search algorithms.
///
/// Shortcut weights are precomputed and returned as they are. Base edge weights come from
/// the weighting, without turn costs: the search adds those once it knows the adjacent edge.
#[derive(Debug, Clone, Copy)]
pub struct RoutingCHEdge<'a, E, W> {
    edge: E,
    weighting: &'a W,
}

impl<'a, E: GraphEdge, W: Weighting> RoutingCHEdge<'a, E, W> {
    pub fn new(edge: E, weighting: &'a W) -> Self {
        RoutingCHEdge { edge, weighting }
    }

    pub fn base_graph_edge(&self) -> Result<&E, WeightingError> {
        if self.is_shortcut() {
            return Err(WeightingError::NoBaseEdgeForShortcut(self.edge.edge_id()));
        }

        Ok(&self.edge)
    }

    pub fn edge_id(&self) -> EdgeId {
        self.edge.edge_id()
    }

    pub fn orig_edge_first(&self) -> EdgeId {
        self.edge.orig_edge_first()
    }

    pub fn orig_edge_last(&self) -> EdgeId {
        self.edge.orig_edge_last()
    }

    pub fn base_node(&self) -> NodeId {
        self.edge.base_node()
    }

    pub fn adj_node(&self) -> NodeId {
        self.edge.adj_node()
    }

    pub fn is_shortcut(&self) -> bool {
        self.edge.as_shortcut().is_some()
    }

    pub fn skipped_edge_1(&self) -> Result<EdgeId, WeightingError> {
        self.edge
            .as_shortcut()
            .map(|shortcut| shortcut.incoming_edge)
            .ok_or(WeightingError::NotAShortcut(self.edge.edge_id()))
    }

    pub fn skipped_edge_2(&self) -> Result<EdgeId, WeightingError> {
        self.edge
            .as_shortcut()
            .map(|shortcut| shortcut.outgoing_edge)
            .ok_or(WeightingError::NotAShortcut(self.edge.edge_id()))
    }

    pub fn weight(&self, direction: EdgeDirection) -> Weight {
        match self.edge.as_shortcut() {
            Some(shortcut) => shortcut.weight,
            None => self.weighting.calc_weight(&self.edge, direction, INVALID_EDGE),
        }
    }
}
